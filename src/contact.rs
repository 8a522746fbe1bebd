//! State behind the contact form.
//!
//! Submitting never leaves the browser: the form flips to `Submitting`, a
//! timer later calls [`ContactForm::complete`] which clears the fields, and a
//! second timer hides the confirmation again.

use thiserror::Error;

/// Delay before a submission is reported as sent.
pub const SUBMIT_DELAY_MS: f64 = 2000.0;
/// How long the confirmation stays visible.
pub const CONFIRMATION_MS: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// `type` attribute for single-line inputs.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        self == Self::Message
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Edits are dropped while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: String) {
        if self.status == SubmitStatus::Submitting {
            return;
        }
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn begin_submit(&mut self) -> Result<(), ContactError> {
        if self.status == SubmitStatus::Submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        self.validate()?;
        self.status = SubmitStatus::Submitting;
        Ok(())
    }

    /// Finishes a pending submission. Returns `false` if nothing was pending.
    pub fn complete(&mut self) -> bool {
        if self.status != SubmitStatus::Submitting {
            return false;
        }
        *self = Self {
            status: SubmitStatus::Sent,
            ..Self::default()
        };
        true
    }

    pub fn acknowledge(&mut self) {
        if self.status == SubmitStatus::Sent {
            self.status = SubmitStatus::Idle;
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Subject, "Hello".to_string());
        form.set_field(Field::Message, "Let's build something".to_string());
        form
    }

    #[test]
    fn test_submit_cycle() {
        let mut form = filled();
        assert_eq!(form.status(), SubmitStatus::Idle);

        form.begin_submit().unwrap();
        assert_eq!(form.status(), SubmitStatus::Submitting);

        assert!(form.complete());
        assert_eq!(form.status(), SubmitStatus::Sent);
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }

        form.acknowledge();
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_missing_fields() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(Field::Name))
        );

        let mut form = filled();
        form.set_field(Field::Subject, "   ".to_string());
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(Field::Subject))
        );
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_invalid_email() {
        for email in ["ada", "@example.com", "ada@", "a@b@c", "ada @example.com"] {
            let mut form = filled();
            form.set_field(Field::Email, email.to_string());
            assert_eq!(form.begin_submit(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.set_field(Field::Name, "Grace".to_string());
        assert_eq!(form.field(Field::Name), "Ada");
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn test_complete_without_submit_is_noop() {
        let mut form = filled();
        assert!(!form.complete());
        assert_eq!(form.field(Field::Name), "Ada");
        form.acknowledge();
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Email is required"
        );
    }
}
