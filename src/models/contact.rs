//! Contact submission model

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 10, message = "Message must be at least 10 characters."))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredContact {
    pub id: Uuid,
    #[serde(flatten)]
    pub submission: ContactSubmission,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<&StoredContact> for ContactResponse {
    fn from(stored: &StoredContact) -> Self {
        Self {
            id: stored.id,
            title: "Message Sent!",
            description: "Thanks for reaching out. We'll get back to you shortly.",
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("invalid contact submission: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("failed to encode contact submission: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write contact submission: {0}")]
    Storage(#[from] std::io::Error),
}

/// Holds the most recent contact submission.
///
/// A new submission replaces the previous one. When a store file is
/// configured the submission is written there first; a failed write leaves
/// the previous submission in place. Submissions are serialized so the file
/// and `latest()` always hold the same one.
pub struct ContactStore {
    latest: RwLock<Option<StoredContact>>,
    submit_lock: Mutex<()>,
    path: Option<PathBuf>,
}

impl ContactStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            latest: RwLock::new(None),
            submit_lock: Mutex::new(()),
            path,
        }
    }

    /// Validate and store a submission
    pub async fn submit(&self, submission: ContactSubmission) -> Result<StoredContact, ContactError> {
        submission.validate()?;

        let _guard = self.submit_lock.lock().await;
        let stored = StoredContact {
            id: Uuid::new_v4(),
            submission,
            received_at: Utc::now(),
        };

        if let Some(path) = &self.path {
            let json = serde_json::to_string_pretty(&stored)?;
            tokio::fs::write(path, json).await?;
            tracing::debug!("Contact submission written to {}", path.display());
        }

        *self.latest.write() = Some(stored.clone());
        tracing::info!("Contact submission received: {}", stored.id);

        Ok(stored)
    }

    /// Most recent submission, if any
    pub fn latest(&self) -> Option<StoredContact> {
        self.latest.read().clone()
    }
}
