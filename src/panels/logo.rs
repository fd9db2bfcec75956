// ABOUTME: Logo panel: stages a local image file, uploads it, and tracks the served URL
// Unlike the other panels the saved value comes back from the server (the file URL),
// so this panel keeps its own small state machine instead of FieldEditor.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::panels::editor::{PanelPhase, SAVED_INDICATOR_TTL};
use crate::panels::validate;

/// Edit-save unit for the store logo. The draft is a staged local file; the
/// original is the currently served logo URL.
#[derive(Debug, Clone, Default)]
pub struct LogoPanel {
    current_url: Option<String>,
    staged: Option<PathBuf>,
    saving: bool,
    saved_until: Option<Instant>,
    error_message: Option<String>,
    request_seq: u64,
}

impl LogoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the server-provided logo URL. Ignored while an upload is in
    /// flight.
    pub fn seed(&mut self, url: Option<String>) {
        if self.saving {
            return;
        }
        self.current_url = url;
    }

    /// Validate and stage a local file for upload. On validation failure the
    /// previous staging (if any) is kept and the error surfaced inline.
    pub fn stage(&mut self, path: impl Into<PathBuf>) -> bool {
        if self.saving {
            return false;
        }
        let path = path.into();
        match validate::logo_file(&path) {
            Ok(()) => {
                self.staged = Some(path);
                self.error_message = None;
                self.saved_until = None;
                true
            }
            Err(message) => {
                self.error_message = Some(message);
                false
            }
        }
    }

    /// Drop the staged file without contacting the network.
    pub fn clear_staged(&mut self) {
        if self.saving {
            return;
        }
        self.staged = None;
        self.error_message = None;
    }

    pub fn can_save(&self) -> bool {
        self.staged.is_some() && !self.saving
    }

    /// Begin the upload; returns the sequence number plus the file to send.
    pub fn begin_save(&mut self) -> Option<(u64, PathBuf)> {
        if !self.can_save() {
            if self.staged.is_none() {
                self.error_message = Some("No new image selected to save.".to_string());
            }
            return None;
        }
        self.saving = true;
        self.error_message = None;
        self.request_seq += 1;
        Some((self.request_seq, self.staged.clone().expect("staged checked above")))
    }

    /// Apply the upload outcome: on success the returned file URL becomes
    /// the current logo. Stale completions are dropped.
    pub fn complete_save(
        &mut self,
        seq: u64,
        outcome: Result<String, String>,
        now: Instant,
    ) -> bool {
        if seq != self.request_seq || !self.saving {
            return false;
        }
        self.saving = false;
        match outcome {
            Ok(file_url) => {
                self.current_url = Some(file_url);
                self.staged = None;
                self.saved_until = Some(now + SAVED_INDICATOR_TTL);
                self.error_message = None;
            }
            Err(message) => {
                self.error_message = Some(message);
            }
        }
        true
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.saved_until {
            if now >= until {
                self.saved_until = None;
            }
        }
    }

    pub fn phase(&self) -> PanelPhase {
        if self.saving {
            PanelPhase::Saving
        } else if self.saved_until.is_some() {
            PanelPhase::Saved
        } else if self.error_message.is_some() {
            PanelPhase::Error
        } else if self.staged.is_some() {
            PanelPhase::Editing
        } else {
            PanelPhase::Idle
        }
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn staged(&self) -> Option<&Path> {
        self.staged.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn show_saved(&self) -> bool {
        self.saved_until.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn staged_panel(dir: &tempfile::TempDir) -> LogoPanel {
        let file = dir.path().join("logo.png");
        std::fs::File::create(&file).unwrap().write_all(&[0u8; 8]).unwrap();
        let mut panel = LogoPanel::new();
        assert!(panel.stage(&file));
        panel
    }

    #[test]
    fn save_requires_a_staged_file() {
        let mut panel = LogoPanel::new();
        assert!(!panel.can_save());
        assert!(panel.begin_save().is_none());
        assert_eq!(panel.error_message(), Some("No new image selected to save."));
    }

    #[test]
    fn rejected_file_surfaces_error_and_keeps_previous_staging() {
        let dir = tempfile::tempdir().unwrap();
        let mut panel = staged_panel(&dir);
        assert!(!panel.stage(dir.path().join("logo.txt")));
        assert!(panel.error_message().is_some());
        assert!(panel.staged().is_some());
    }

    #[test]
    fn successful_upload_adopts_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut panel = staged_panel(&dir);
        let (seq, _file) = panel.begin_save().unwrap();
        assert!(panel.is_saving());

        let now = Instant::now();
        assert!(panel.complete_save(seq, Ok("https://cdn.example/logo.png".to_string()), now));
        assert_eq!(panel.current_url(), Some("https://cdn.example/logo.png"));
        assert!(panel.staged().is_none());
        assert!(panel.show_saved());

        panel.tick(now + SAVED_INDICATOR_TTL);
        assert!(!panel.show_saved());
    }

    #[test]
    fn failed_upload_keeps_staged_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut panel = staged_panel(&dir);
        let (seq, _file) = panel.begin_save().unwrap();
        assert!(panel.complete_save(seq, Err("Upload failed".to_string()), Instant::now()));
        assert!(panel.staged().is_some());
        assert_eq!(panel.error_message(), Some("Upload failed"));
        assert!(panel.can_save());
    }

    #[test]
    fn stale_completion_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut panel = staged_panel(&dir);
        let (seq, _) = panel.begin_save().unwrap();
        panel.complete_save(seq, Err("x".to_string()), Instant::now());
        assert!(!panel.complete_save(seq, Ok("late".to_string()), Instant::now()));
        assert!(panel.current_url().is_none());
    }
}
