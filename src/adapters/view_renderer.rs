//! Terminal rendering of view state through embedded minijinja templates.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, Value};

use crate::domain::rating::StarRating;
use crate::domain::{AppError, Route};

static VIEWS_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/views");

/// Renders a route's view state with its embedded template.
#[derive(Debug)]
pub struct ViewRenderer {
    env: Environment<'static>,
}

impl ViewRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_filter("stars", stars);
        env.add_filter("dash", dash);
        env.add_filter("money", |amount: f64| -> String { format!("Rs. {amount:.2}") });

        for file in VIEWS_DIR.files() {
            let Some(name) = file.path().to_str() else { continue };
            if !name.ends_with(".j2") {
                continue;
            }
            let source = file.contents_utf8().ok_or_else(|| {
                AppError::Template(format!("Template '{name}' is not valid UTF-8"))
            })?;
            env.add_template(name, source).map_err(|e| {
                AppError::Template(format!("Failed to register template '{name}': {e}"))
            })?;
        }

        Ok(Self { env })
    }

    pub fn render(&self, route: Route, ctx: &Value) -> Result<String, AppError> {
        render_template_by_name(&self.env, route.template(), ctx)
    }
}

fn stars(rating: f64) -> String {
    StarRating::from_rating(rating).glyphs()
}

/// `-` for missing or blank values.
fn dash(value: Value) -> String {
    if value.is_none() || value.is_undefined() {
        return "-".to_string();
    }
    let text = value.to_string();
    if text.trim().is_empty() { "-".to_string() } else { text }
}

fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| {
        AppError::Template(format!("Failed to load template '{template_name}': {e}"))
    })?;

    template.render(ctx).map_err(|e| {
        AppError::Template(format!("Failed to render template '{template_name}': {e}"))
    })
}
