// ABOUTME: Generic edit-save state machine backing every dashboard field panel
// Tracks draft vs. last-saved value, validation, save phase, and stale-response guards.

use std::time::{Duration, Instant};

/// How long the transient "Saved" indicator stays visible.
pub const SAVED_INDICATOR_TTL: Duration = Duration::from_secs(3);

/// Field-specific validation hook. Returns the inline message to show when
/// the draft is not saveable.
pub type Validator<T> = fn(&T) -> Result<(), String>;

/// Lifecycle of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Idle,
    Editing,
    Saving,
    /// Save round trip completed; cleared back to Idle by `tick`.
    Saved,
    /// Last save failed; the draft is preserved for retry.
    Error,
}

/// One editable field bound to one save endpoint.
///
/// Scalar panels (title, theme color) gate mutation behind an explicit
/// `start_edit`; list panels mutate directly from `Idle`. Both share the
/// same save guard: structurally changed draft, clean validation, and no
/// save already in flight.
#[derive(Debug, Clone)]
pub struct FieldEditor<T> {
    draft: T,
    original: T,
    phase: PanelPhase,
    error_message: Option<String>,
    validator: Validator<T>,
    gated: bool,
    saved_until: Option<Instant>,
    request_seq: u64,
}

impl<T: Clone + PartialEq> FieldEditor<T> {
    /// Panel whose draft may only change between `start_edit` and
    /// `save`/`cancel`.
    pub fn gated(initial: T, validator: Validator<T>) -> Self {
        Self::build(initial, validator, true)
    }

    /// Panel whose draft may change at any time outside an in-flight save.
    pub fn ungated(initial: T, validator: Validator<T>) -> Self {
        Self::build(initial, validator, false)
    }

    fn build(initial: T, validator: Validator<T>, gated: bool) -> Self {
        Self {
            draft: initial.clone(),
            original: initial,
            phase: PanelPhase::Idle,
            error_message: None,
            validator,
            gated,
            saved_until: None,
            request_seq: 0,
        }
    }

    /// Replace both draft and original from a fresh server record. Ignored
    /// while an edit or save is in progress so user work is never clobbered.
    pub fn seed(&mut self, value: T) {
        if matches!(self.phase, PanelPhase::Editing | PanelPhase::Saving) {
            return;
        }
        self.draft = value.clone();
        self.original = value;
        self.error_message = None;
    }

    /// Idle → Editing. Copies the original into the draft if not already
    /// editing; no effect while saving.
    pub fn start_edit(&mut self) {
        match self.phase {
            PanelPhase::Editing | PanelPhase::Saving => {}
            _ => {
                self.draft = self.original.clone();
                self.phase = PanelPhase::Editing;
                self.error_message = None;
                self.saved_until = None;
            }
        }
    }

    /// Discard the draft and restore from the original. Idempotent: always
    /// leaves `draft == original`.
    pub fn cancel(&mut self) {
        if self.phase == PanelPhase::Saving {
            return;
        }
        self.draft = self.original.clone();
        self.phase = PanelPhase::Idle;
        self.error_message = None;
    }

    /// Apply a change to the draft, re-validating afterwards. Rejected while
    /// a save is in flight, and (for gated panels) outside of Editing.
    pub fn mutate(&mut self, change: impl FnOnce(&mut T)) -> bool {
        if self.phase == PanelPhase::Saving {
            return false;
        }
        if self.gated && self.phase != PanelPhase::Editing {
            return false;
        }
        change(&mut self.draft);
        self.error_message = (self.validator)(&self.draft).err();
        self.saved_until = None;
        if self.phase == PanelPhase::Saved {
            self.phase = PanelPhase::Idle;
        }
        true
    }

    /// Record an error without touching the draft (used by panel-specific
    /// guards such as the personality limit).
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn is_saving(&self) -> bool {
        self.phase == PanelPhase::Saving
    }

    pub fn is_editing(&self) -> bool {
        self.phase == PanelPhase::Editing
    }

    pub fn show_saved(&self) -> bool {
        self.phase == PanelPhase::Saved
    }

    /// Whether `begin_save` would currently be accepted.
    pub fn can_save(&self) -> bool {
        self.is_dirty() && (self.validator)(&self.draft).is_ok() && !self.is_saving()
    }

    /// Transition into Saving and hand back the request sequence number the
    /// completion must present. `None` when the guard rejects the save —
    /// unchanged draft, validation error, or a save already in flight.
    pub fn begin_save(&mut self) -> Option<u64> {
        if !self.can_save() {
            if let Err(msg) = (self.validator)(&self.draft) {
                self.error_message = Some(msg);
            }
            return None;
        }
        self.phase = PanelPhase::Saving;
        self.error_message = None;
        self.request_seq += 1;
        Some(self.request_seq)
    }

    /// Apply the outcome of the save round trip. Returns false (and changes
    /// nothing) when the response is stale: a newer request was issued, or
    /// the panel already left the Saving phase (e.g. via teardown).
    pub fn complete_save(
        &mut self,
        seq: u64,
        outcome: Result<(), String>,
        now: Instant,
    ) -> bool {
        if seq != self.request_seq || self.phase != PanelPhase::Saving {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.original = self.draft.clone();
                self.phase = PanelPhase::Saved;
                self.saved_until = Some(now + SAVED_INDICATOR_TTL);
                self.error_message = None;
            }
            Err(message) => {
                self.phase = PanelPhase::Error;
                self.error_message = Some(message);
            }
        }
        true
    }

    /// Clear the transient Saved indicator once its display window lapses.
    pub fn tick(&mut self, now: Instant) {
        if self.phase == PanelPhase::Saved {
            if let Some(until) = self.saved_until {
                if now >= until {
                    self.phase = PanelPhase::Idle;
                    self.saved_until = None;
                }
            }
        }
    }
}
