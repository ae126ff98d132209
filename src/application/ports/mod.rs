pub mod outbound;

pub use outbound::{MailError, MailSender, OutgoingMail};
