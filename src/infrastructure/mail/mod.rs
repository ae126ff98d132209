//! Outbound mail transports
//!
//! - `LogMailSender`: writes each message to the log (development)
//! - `OutboxMailSender`: drops each message as a JSON file in a spool directory
//!   for an external relay to pick up

mod log_sender;
mod outbox;

pub use log_sender::LogMailSender;
pub use outbox::OutboxMailSender;
