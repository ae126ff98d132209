//! Contact form DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::ContactMessage;

/// `application/x-www-form-urlencoded` body of the contact form
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 255, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

impl From<ContactForm> for ContactMessage {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        }
    }
}

/// Contact page content; `sent` is true after a successful submission.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactContent {
    pub sent: bool,
}
