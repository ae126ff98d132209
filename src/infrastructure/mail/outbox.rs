use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::ports::{MailError, MailSender, OutgoingMail};

/// Spools each mail as `<timestamp>-<uuid>.json` under a directory.
///
/// Files are written to a hidden temporary name first and renamed into
/// place, so a relay never observes a partial message.
#[derive(Debug, Clone)]
pub struct OutboxMailSender {
    dir: PathBuf,
}

impl OutboxMailSender {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn transport_err(e: impl std::fmt::Display) -> MailError {
    MailError::Transport(e.to_string())
}

/// Writes `bytes` to `tmp` then renames it onto `path`; `tmp` never outlives
/// a failed rename.
async fn write_atomic(tmp: &Path, path: &Path, bytes: &[u8]) -> Result<(), MailError> {
    tokio::fs::write(tmp, bytes).await.map_err(transport_err)?;
    if let Err(e) = tokio::fs::rename(tmp, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(tmp).await {
            warn!(path = %tmp.display(), "Failed to remove outbox temp file: {}", cleanup);
        }
        return Err(transport_err(e));
    }
    Ok(())
}

#[async_trait]
impl MailSender for OutboxMailSender {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if mail.to.is_empty() {
            return Err(MailError::NoRecipients);
        }

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(transport_err)?;

        let name = format!("{}-{}.json", Utc::now().format("%Y%m%dT%H%M%S%.f"), Uuid::new_v4());
        let path = self.dir.join(&name);
        let tmp = self.dir.join(format!(".{}.tmp", name));

        let bytes = serde_json::to_vec_pretty(&mail).map_err(transport_err)?;
        write_atomic(&tmp, &path, &bytes).await?;

        debug!(path = %path.display(), "Mail spooled to outbox");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail(to: Vec<&str>) -> OutgoingMail {
        OutgoingMail {
            from: "web@portal.test".into(),
            to: to.into_iter().map(String::from).collect(),
            subject: "Consulta".into(),
            body: "Nombre: Ana \n\nCorreo: ana@example.com \n\nMensaje: Hola".into(),
        }
    }

    #[tokio::test]
    async fn mail_is_spooled_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let sender = OutboxMailSender::new(dir.path().join("outbox"));

        sender.send(mail(vec!["staff@portal.test"])).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(sender.dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].extension().and_then(|e| e.to_str()), Some("json"));

        let stored: OutgoingMail =
            serde_json::from_slice(&std::fs::read(&entries[0]).unwrap()).unwrap();
        assert_eq!(stored, mail(vec!["staff@portal.test"]));
    }

    #[tokio::test]
    async fn empty_recipient_list_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let sender = OutboxMailSender::new(dir.path());

        let err = sender.send(mail(vec![])).await.unwrap_err();
        assert!(matches!(err, MailError::NoRecipients));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("taken.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), b"x").unwrap();
        let tmp = dir.path().join(".taken.json.tmp");

        let err = write_atomic(&tmp, &target, b"{}").await.unwrap_err();
        assert!(matches!(err, MailError::Transport(_)));
        assert!(!tmp.exists());
        assert!(target.join("keep").exists());
    }

    #[tokio::test]
    async fn unwritable_outbox_is_a_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let sender = OutboxMailSender::new(blocker.join("outbox"));

        let err = sender.send(mail(vec!["staff@portal.test"])).await.unwrap_err();
        assert!(matches!(err, MailError::Transport(_)));
    }
}
