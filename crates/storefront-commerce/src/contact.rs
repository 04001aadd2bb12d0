//! Contact form submission.
//!
//! There is no backend; a valid submission is acknowledged locally.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Acknowledgement shown after a successful submission.
pub const CONTACT_SENT: &str = "Message sent successfully! We'll get back to you soon.";

/// Fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check that the required fields are filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(CommerceError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(CommerceError::MissingField("message"));
        }
        Ok(())
    }
}
