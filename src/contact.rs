use std::fmt;
use thiserror::Error;

use crate::toast::Notification;

pub const THANK_YOU_TITLE: &str = "Thank You!";
pub const THANK_YOU_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Matches the `id`/`name` attribute of the form control.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(Field),
}

/// Values of the contact form. Submitting never leaves the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Mirrors the browser's `required` check: any non-empty value passes,
    /// whitespace included.
    pub fn validate(&self) -> Result<(), ContactError> {
        match Field::ALL.into_iter().find(|f| self.value(*f).is_empty()) {
            Some(field) => Err(ContactError::Missing(field)),
            None => Ok(()),
        }
    }

    /// Accepts the form: returns the confirmation to show and clears every
    /// field. Rejected forms are left untouched.
    pub fn submit(&mut self) -> Result<Notification, ContactError> {
        self.validate()?;
        self.clear();
        Ok(thank_you())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

pub fn thank_you() -> Notification {
    Notification::new(THANK_YOU_TITLE, THANK_YOU_DESCRIPTION)
}
