//! Visitor inquiries: contact form mail and WhatsApp links.

pub mod service;
pub mod whatsapp;

pub use service::{ContactMessage, ContactService};
pub use whatsapp::WhatsappLinks;
