//! Contact form forwarding

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ports::{MailSender, OutgoingMail};
use crate::domain::{DomainResult, RepositoryProvider};

/// A visitor's contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Plain-text body forwarded to staff.
    pub fn body(&self) -> String {
        format!(
            "Nombre: {} \n\nCorreo: {} \n\nMensaje: {}",
            self.name, self.email, self.message
        )
    }
}

/// Forwards contact messages to every staff address.
pub struct ContactService {
    repos: Arc<dyn RepositoryProvider>,
    mailer: Arc<dyn MailSender>,
    sender: String,
}

impl ContactService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        mailer: Arc<dyn MailSender>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            repos,
            mailer,
            sender: sender.into(),
        }
    }

    /// Sends one mail addressed to all staff. Returns the number of recipients.
    ///
    /// Transport failures surface as `DomainError::Delivery`; nothing is retried.
    pub async fn submit(&self, message: ContactMessage) -> DomainResult<usize> {
        let recipients = self.repos.staff().contact_emails().await?;
        if recipients.is_empty() {
            warn!(subject = %message.subject, "No staff addresses registered, contact message dropped");
            return Ok(0);
        }

        let count = recipients.len();
        let mail = OutgoingMail {
            from: self.sender.clone(),
            to: recipients,
            body: message.body(),
            subject: message.subject,
        };
        self.mailer.send(mail).await?;

        metrics::counter!("contact_messages_total").increment(1);
        info!(recipients = count, "✉️ Contact message forwarded to staff");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::MailError;
    use crate::domain::DomainError;
    use crate::infrastructure::storage::InMemoryStorage;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutgoingMail>>,
        fail: bool,
    }

    #[async_trait]
    impl MailSender for RecordingMailer {
        async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Transport("connection refused".into()));
            }
            self.sent.lock().unwrap().push(mail);
            Ok(())
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Lucía".into(),
            email: "lucia@example.com".into(),
            subject: "Viaje a Petén".into(),
            message: "¿Quedan lugares?".into(),
        }
    }

    #[test]
    fn body_lists_name_email_and_message() {
        assert_eq!(
            message().body(),
            "Nombre: Lucía \n\nCorreo: lucia@example.com \n\nMensaje: ¿Quedan lugares?"
        );
    }

    #[tokio::test]
    async fn mail_goes_to_every_staff_address_including_duplicates() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.add_staff_email("a@portal.test");
        storage.add_staff_email("b@portal.test");
        storage.add_staff_email("a@portal.test");
        let mailer = Arc::new(RecordingMailer::default());
        let service = ContactService::new(storage, mailer.clone(), "web@portal.test");

        let count = service.submit(message()).await.unwrap();

        assert_eq!(count, 3);
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, vec!["a@portal.test", "b@portal.test", "a@portal.test"]);
        assert_eq!(sent[0].from, "web@portal.test");
        assert_eq!(sent[0].subject, "Viaje a Petén");
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.add_staff_email("a@portal.test");
        let mailer = Arc::new(RecordingMailer {
            fail: true,
            ..Default::default()
        });
        let service = ContactService::new(storage, mailer, "web@portal.test");

        let err = service.submit(message()).await.unwrap_err();
        assert!(matches!(err, DomainError::Delivery(_)));
    }

    #[tokio::test]
    async fn no_staff_means_nothing_is_sent() {
        let storage = Arc::new(InMemoryStorage::new());
        let mailer = Arc::new(RecordingMailer::default());
        let service = ContactService::new(storage, mailer.clone(), "web@portal.test");

        assert_eq!(service.submit(message()).await.unwrap(), 0);
        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}
