use async_trait::async_trait;
use tracing::info;

use crate::application::ports::{MailError, MailSender, OutgoingMail};

/// Logs mail instead of delivering it.
#[derive(Debug, Default, Clone)]
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if mail.to.is_empty() {
            return Err(MailError::NoRecipients);
        }
        info!(
            from = %mail.from,
            to = ?mail.to,
            subject = %mail.subject,
            "📧 Mail (log transport)\n{}",
            mail.body
        );
        Ok(())
    }
}
