//! Five-star rating rendering.

use serde::Serialize;

pub const MAX_STARS: u8 = 5;

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯪';
const EMPTY_STAR: char = '☆';

/// Glyph counts for a rating on a five-star scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarRating {
    /// Whole stars are floored; a fractional part of at least one half adds a
    /// half star; the remainder is padded with empty stars. Ratings outside
    /// `[0, 5]` (and NaN) are clamped.
    pub fn from_rating(rating: f64) -> Self {
        let clamped = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, f64::from(MAX_STARS)) };
        let full = clamped.floor() as u8;
        let half = u8::from(clamped - clamped.floor() >= 0.5);
        let empty = MAX_STARS - full - half;
        Self { full, half, empty }
    }

    pub fn glyphs(&self) -> String {
        let mut out = String::with_capacity(usize::from(MAX_STARS) * 3);
        out.extend(std::iter::repeat_n(FULL_STAR, usize::from(self.full)));
        out.extend(std::iter::repeat_n(HALF_STAR, usize::from(self.half)));
        out.extend(std::iter::repeat_n(EMPTY_STAR, usize::from(self.empty)));
        out
    }
}
