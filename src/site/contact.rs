//! Contact form validation and the simulated submission.
//!
//! There is no backend: a submission waits a fixed latency and then fails
//! with a configurable probability, which is enough to exercise the loading,
//! success and error states of the form.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::config::ContactConfig;
use crate::consts::{MIN_MESSAGE_CHARS, MIN_NAME_CHARS};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// A form field, identified the same way as its input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id of the input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Element id of the inline error slot.
    #[must_use]
    pub fn error_id(self) -> String {
        format!("{}-error", self.id())
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }
}

/// Why a field value was rejected. `Display` is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameMissing,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter your email")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter your message")]
    MessageMissing,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Validate one raw field value (trimmed before checking).
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    match field {
        Field::Name if value.is_empty() => Err(FieldError::NameMissing),
        Field::Name if value.chars().count() < MIN_NAME_CHARS => Err(FieldError::NameTooShort),
        Field::Email if value.is_empty() => Err(FieldError::EmailMissing),
        Field::Email if !looks_like_email(value) => Err(FieldError::EmailInvalid),
        Field::Message if value.is_empty() => Err(FieldError::MessageMissing),
        Field::Message if value.chars().count() < MIN_MESSAGE_CHARS => Err(FieldError::MessageTooShort),
        _ => Ok(()),
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with something on both sides of it.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

/// Trimmed contact form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self { name: name.trim().to_owned(), email: email.trim().to_owned(), message: message.trim().to_owned() }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Check every field, collecting all failures in field order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<(Field, FieldError)> = Field::ALL
            .into_iter()
            .filter_map(|field| validate_field(field, self.value(field)).err().map(|err| (field, err)))
            .collect();
        if errors.is_empty() { Ok(()) } else { Err(ValidationErrors(errors)) }
    }
}

/// Every failed field of a form, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<(Field, FieldError)>);

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, err)| *err)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldError)> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, err)| format!("{}: {err}", field.id()))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("simulated network error")]
    Network,
}

impl SubmitError {
    /// Message shown in the form's `submit` error slot.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Network => "Failed to send message. Please try again.",
        }
    }
}

/// Stand-in for a real form endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionSimulator {
    latency: Duration,
    success_rate: f64,
}

impl SubmissionSimulator {
    #[must_use]
    pub fn new(latency: Duration, success_rate: f64) -> Self {
        Self { latency, success_rate: success_rate.clamp(0.0, 1.0) }
    }

    #[must_use]
    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(Duration::from_millis(config.latency_ms), config.success_rate)
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Roll the outcome of one submission.
    pub fn outcome<R: Rng>(&self, rng: &mut R) -> Result<(), SubmitError> {
        if rng.random::<f64>() < self.success_rate { Ok(()) } else { Err(SubmitError::Network) }
    }

    /// Wait out the simulated latency with `sleep`, then roll the outcome.
    pub async fn submit<R, F, Fut>(&self, form: &ContactForm, rng: &mut R, sleep: F) -> Result<(), SubmitError>
    where
        R: Rng,
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        sleep(self.latency).await;
        log::info!("contact form submitted ({} message chars)", form.message.chars().count());
        let outcome = self.outcome(rng);
        if let Err(err) = outcome {
            log::warn!("contact submission failed: {err}");
        }
        outcome
    }
}

impl Default for SubmissionSimulator {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}
