// ABOUTME: Durable seller session: the onboarding wizard writes it, the dashboard reads it

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::AppConfig;

/// The seller identifier assigned at onboarding completion, persisted so
/// later dashboard sessions can resolve it without a launch link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub seller_id: String,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(seller_id: impl Into<String>) -> Self {
        Self {
            seller_id: seller_id.into(),
            saved_at: Utc::now(),
        }
    }

    fn path() -> Result<PathBuf> {
        Ok(AppConfig::user_config_dir()?.join("session.json"))
    }

    /// Load the stored session, if one exists.
    pub fn load() -> Result<Option<Self>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;
        let session = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session from {}", path.display()))?;
        Ok(Some(session))
    }

    /// Write the session to the user config directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_json() {
        let session = StoredSession::new("seller-1");
        let json = serde_json::to_string(&session).unwrap();
        let loaded: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, session);
    }
}
