//! Fixed option lists offered by the portal forms.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const GENDERS: &[SelectOption] =
    &[opt("male", "Male"), opt("female", "Female"), opt("other", "Other")];

pub const SKILLS: &[SelectOption] = &[
    opt("electrician", "Electrician"),
    opt("plumber", "Plumber"),
    opt("carpenter", "Carpenter"),
    opt("mason", "Mason"),
    opt("painter", "Painter"),
    opt("welder", "Welder"),
    opt("driver", "Driver"),
    opt("cook", "Cook"),
    opt("cleaner", "Cleaner"),
    opt("other", "Other"),
];

pub const COMPLAINT_TYPES: &[SelectOption] = &[
    opt("wages", "Non-Payment of Wages"),
    opt("safety", "Safety Issues"),
    opt("harassment", "Workplace Harassment"),
    opt("accommodation", "Accommodation Problems"),
    opt("working_hours", "Excessive Working Hours"),
    opt("contract", "Contract Violation"),
    opt("other", "Other"),
];

pub const INDUSTRIES: &[SelectOption] = &[
    opt("construction", "Construction"),
    opt("manufacturing", "Manufacturing"),
    opt("agriculture", "Agriculture"),
    opt("hospitality", "Hospitality"),
    opt("textile", "Textile"),
    opt("logistics", "Logistics"),
    opt("other", "Other"),
];

/// Look up the display label for an option value.
pub fn label_for(options: &[SelectOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}
