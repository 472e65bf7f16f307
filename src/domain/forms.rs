//! Form buffers, their submission flags and client-side checks.
//!
//! Checks here are limited to presence, length, password confirmation and
//! numeric parsing; the server repeats and extends all of them.

use std::fmt;

use serde::Serialize;

use crate::domain::models::WorkerProfile;

pub const MIN_COMPLAINT_DESCRIPTION_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Client-side validation for a form buffer.
pub trait Validate {
    fn validate(&self) -> Vec<FieldError>;
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    }
}

/// Submission flags shared by every form view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormStatus {
    pub submitted: bool,
    pub loading: bool,
    pub success: bool,
    pub error: Option<String>,
    pub field_errors: Vec<FieldError>,
}

impl FormStatus {
    /// Mark the form submitted and in flight; clears earlier errors.
    pub fn begin(&mut self) {
        self.submitted = true;
        self.loading = true;
        self.success = false;
        self.error = None;
        self.field_errors.clear();
    }

    /// Record validation failures; nothing is sent.
    pub fn reject(&mut self, errors: Vec<FieldError>) {
        self.submitted = true;
        self.loading = false;
        self.success = false;
        self.error = errors.first().map(|e| e.message.clone());
        self.field_errors = errors;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.success = false;
        self.error = Some(message.into());
    }

    pub fn succeed(&mut self) {
        self.success = true;
        self.error = None;
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Worker self-registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkerRegistrationForm {
    pub name: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub skill: String,
    pub email: String,
    pub state: String,
    pub district: String,
    pub address: String,
}

impl Validate for WorkerRegistrationForm {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name, "Full name");
        require(&mut errors, "phone", &self.phone, "Mobile number");
        errors
    }
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct WorkerLoginForm {
    pub migrant_id: String,
    pub phone: String,
}

impl WorkerLoginForm {
    /// Wire body; the migrant ID is sent uppercased.
    pub fn credentials(&self) -> WorkerCredentials {
        WorkerCredentials {
            migrant_id: self.migrant_id.trim().to_uppercase(),
            phone: self.phone.trim().to_string(),
        }
    }
}

impl fmt::Debug for WorkerLoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerLoginForm")
            .field("migrant_id", &self.migrant_id)
            .field("phone", &"[REDACTED]")
            .finish()
    }
}

impl Validate for WorkerLoginForm {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "migrant_id", &self.migrant_id, "Migrant ID");
        require(&mut errors, "phone", &self.phone, "Mobile number");
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerCredentials {
    pub migrant_id: String,
    pub phone: String,
}

/// Editable subset of the worker profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileEdit {
    pub name: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub skill: String,
    pub state: String,
    pub district: String,
    pub address: String,
}

impl ProfileEdit {
    pub fn from_profile(profile: &WorkerProfile) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            name: profile.name.clone(),
            phone: text(&profile.phone),
            age: profile.age.map(|a| a.to_string()).unwrap_or_default(),
            gender: text(&profile.gender),
            skill: text(&profile.skill),
            state: text(&profile.state),
            district: text(&profile.district),
            address: text(&profile.address),
        }
    }

    /// Overwrite a single field by name; returns false for unknown names.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "age" => &mut self.age,
            "gender" => &mut self.gender,
            "skill" => &mut self.skill,
            "state" => &mut self.state,
            "district" => &mut self.district,
            "address" => &mut self.address,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

/// Grievance submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplaintForm {
    #[serde(rename = "type")]
    pub complaint_type: String,
    pub description: String,
}

impl Validate for ComplaintForm {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.complaint_type.trim().is_empty() {
            errors.push(FieldError::new("type", "Please select a complaint type"));
        }
        if self.description.trim().chars().count() < MIN_COMPLAINT_DESCRIPTION_CHARS {
            errors.push(FieldError::new(
                "description",
                format!(
                    "Please provide a detailed description (at least {MIN_COMPLAINT_DESCRIPTION_CHARS} characters)"
                ),
            ));
        }
        errors
    }
}

/// Employer self-registration, pending administrator verification.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct EmployerRegistrationForm {
    pub company_name: String,
    pub industry: String,
    pub location: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub gst_number: String,
    pub registration_number: String,
    pub address: String,
}

impl fmt::Debug for EmployerRegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployerRegistrationForm")
            .field("company_name", &self.company_name)
            .field("contact_person", &self.contact_person)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Validate for EmployerRegistrationForm {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "company_name", &self.company_name, "Company name");
        require(&mut errors, "contact_person", &self.contact_person, "Contact person");
        require(&mut errors, "phone", &self.phone, "Phone number");
        require(&mut errors, "email", &self.email, "Email");
        require(&mut errors, "password", &self.password, "Password");
        if !self.password.is_empty() && self.password != self.confirm_password {
            errors.push(FieldError::new("confirm_password", "Passwords do not match"));
        }
        errors
    }
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct EmployerLoginForm {
    pub employer_id: String,
    pub password: String,
}

impl EmployerLoginForm {
    /// Wire body; the employer ID is sent uppercased.
    pub fn credentials(&self) -> EmployerCredentials {
        EmployerCredentials {
            employer_id: self.employer_id.trim().to_uppercase(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for EmployerLoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployerLoginForm")
            .field("employer_id", &self.employer_id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Validate for EmployerLoginForm {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "employer_id", &self.employer_id, "Employer ID");
        require(&mut errors, "password", &self.password, "Password");
        errors
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EmployerCredentials {
    pub employer_id: String,
    pub password: String,
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminLoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminLoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Validate for AdminLoginForm {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "username", &self.username, "Username");
        require(&mut errors, "password", &self.password, "Password");
        errors
    }
}

/// New job posting typed in by an employer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobPostingForm {
    pub title: String,
    pub description: String,
    pub skill_required: String,
    pub location: String,
    pub wage_per_day: String,
    pub duration_days: String,
    pub workers_needed: String,
}

/// Wire body for `POST /employers/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    pub employer_id: String,
    pub title: String,
    pub description: String,
    pub skill_required: String,
    pub location: String,
    pub wage_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers_needed: Option<u32>,
}

fn parse_optional_count(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    label: &str,
) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(FieldError::new(field, format!("{label} must be a whole number")));
            None
        }
    }
}

impl JobPostingForm {
    /// Validate and convert into the wire body for the given employer.
    pub fn to_posting(&self, employer_id: &str) -> Result<JobPosting, Vec<FieldError>> {
        let mut errors = self.validate();

        let wage = self.wage_per_day.trim();
        let wage_per_day = if wage.is_empty() {
            0.0
        } else {
            match wage.parse::<f64>() {
                Ok(w) if w.is_finite() && w > 0.0 => w,
                _ => {
                    errors.push(FieldError::new(
                        "wage_per_day",
                        "Wage per day must be a positive number",
                    ));
                    0.0
                }
            }
        };
        let duration_days =
            parse_optional_count(&mut errors, "duration_days", &self.duration_days, "Duration");
        let workers_needed = parse_optional_count(
            &mut errors,
            "workers_needed",
            &self.workers_needed,
            "Workers needed",
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(JobPosting {
            employer_id: employer_id.to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            skill_required: self.skill_required.trim().to_string(),
            location: self.location.trim().to_string(),
            wage_per_day,
            duration_days,
            workers_needed,
        })
    }
}

impl Validate for JobPostingForm {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "title", &self.title, "Job title");
        require(&mut errors, "skill_required", &self.skill_required, "Required skill");
        require(&mut errors, "location", &self.location, "Location");
        require(&mut errors, "wage_per_day", &self.wage_per_day, "Wage per day");
        errors
    }
}
