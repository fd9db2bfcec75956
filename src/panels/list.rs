// ABOUTME: List-shaped panel extension: positional edits plus the generated-suggestion pool

use std::time::Instant;

use crate::panels::editor::{FieldEditor, PanelPhase, Validator};

/// An ungated [`FieldEditor`] over a list, extended with the operations the
/// cue and loader-text panels share: add/remove/edit by position, and a
/// suggestion pool populated by a generation endpoint.
#[derive(Debug, Clone)]
pub struct ListEditor<T> {
    editor: FieldEditor<Vec<T>>,
    item_validator: Validator<T>,
    /// Skip adds whose item already exists in the draft.
    dedup_on_add: bool,
    suggestions: Vec<T>,
    generating: bool,
    generate_seq: u64,
}

impl<T: Clone + PartialEq> ListEditor<T> {
    pub fn new(
        initial: Vec<T>,
        list_validator: Validator<Vec<T>>,
        item_validator: Validator<T>,
        dedup_on_add: bool,
    ) -> Self {
        Self {
            editor: FieldEditor::ungated(initial, list_validator),
            item_validator,
            dedup_on_add,
            suggestions: Vec::new(),
            generating: false,
            generate_seq: 0,
        }
    }

    /// Validate and append an item. Duplicates are silently skipped when the
    /// panel deduplicates on add (cues); otherwise they are appended (manual
    /// loader-text entry).
    pub fn add(&mut self, item: T) -> Result<(), String> {
        (self.item_validator)(&item)?;
        if self.dedup_on_add && self.editor.draft().contains(&item) {
            return Ok(());
        }
        self.editor.mutate(|draft| draft.push(item));
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) {
        if index < self.editor.draft().len() {
            self.editor.mutate(|draft| {
                draft.remove(index);
            });
        }
    }

    /// Replace the item at `index`, applying the same per-item validation as
    /// `add`.
    pub fn edit_at(&mut self, index: usize, item: T) -> Result<(), String> {
        if index >= self.editor.draft().len() {
            return Ok(());
        }
        (self.item_validator)(&item)?;
        self.editor.mutate(|draft| draft[index] = item);
        Ok(())
    }

    /// Move one suggestion into the draft. Items already present stay in the
    /// pool untouched; promoting the same entry twice is a no-op.
    pub fn promote(&mut self, index: usize) {
        if index >= self.suggestions.len() {
            return;
        }
        if self.editor.draft().contains(&self.suggestions[index]) {
            return;
        }
        let item = self.suggestions.remove(index);
        self.editor.mutate(|draft| draft.push(item));
    }

    /// Transition into generating; returns the sequence number the
    /// completion must present, or None when a generation is already
    /// running.
    pub fn begin_generate(&mut self) -> Option<u64> {
        if self.generating {
            return None;
        }
        self.generating = true;
        self.generate_seq += 1;
        Some(self.generate_seq)
    }

    /// Apply the generation outcome. Failures land in the shared error slot
    /// without touching the draft; stale completions are dropped.
    pub fn complete_generate(&mut self, seq: u64, outcome: Result<Vec<T>, String>) -> bool {
        if seq != self.generate_seq || !self.generating {
            return false;
        }
        self.generating = false;
        match outcome {
            Ok(items) => self.suggestions = items,
            Err(message) => self.editor.set_error(message),
        }
        true
    }

    pub fn suggestions(&self) -> &[T] {
        &self.suggestions
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    // Pass-throughs to the underlying field editor.

    pub fn seed(&mut self, value: Vec<T>) {
        self.editor.seed(value);
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    pub fn draft(&self) -> &[T] {
        self.editor.draft()
    }

    pub fn original(&self) -> &[T] {
        self.editor.original()
    }

    pub fn phase(&self) -> PanelPhase {
        self.editor.phase()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.editor.error_message()
    }

    pub fn is_dirty(&self) -> bool {
        self.editor.is_dirty()
    }

    pub fn is_saving(&self) -> bool {
        self.editor.is_saving()
    }

    pub fn show_saved(&self) -> bool {
        self.editor.show_saved()
    }

    pub fn can_save(&self) -> bool {
        self.editor.can_save()
    }

    pub fn begin_save(&mut self) -> Option<u64> {
        self.editor.begin_save()
    }

    pub fn complete_save(&mut self, seq: u64, outcome: Result<(), String>, now: Instant) -> bool {
        self.editor.complete_save(seq, outcome, now)
    }

    pub fn tick(&mut self, now: Instant) {
        self.editor.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cue;
    use pretty_assertions::assert_eq;

    fn valid_cue(cue: &Cue) -> Result<(), String> {
        if cue.title.trim().is_empty() || cue.value.trim().is_empty() {
            Err("Both title and value are required".to_string())
        } else {
            Ok(())
        }
    }

    fn cues() -> ListEditor<Cue> {
        ListEditor::new(Vec::new(), |_| Ok(()), valid_cue, true)
    }

    #[test]
    fn add_validates_and_dedups() {
        let mut list = cues();
        list.add(Cue::new("a", "b")).unwrap();
        list.add(Cue::new("a", "b")).unwrap();
        assert_eq!(list.draft().len(), 1);

        let err = list.add(Cue::new(" ", "b")).unwrap_err();
        assert_eq!(err, "Both title and value are required");
        assert_eq!(list.draft().len(), 1);
    }

    #[test]
    fn promote_moves_suggestion_into_draft() {
        let mut list = cues();
        let seq = list.begin_generate().unwrap();
        assert!(list.complete_generate(seq, Ok(vec![Cue::new("a", "b"), Cue::new("c", "d")])));

        list.promote(0);
        assert_eq!(list.draft(), [Cue::new("a", "b")]);
        assert_eq!(list.suggestions(), [Cue::new("c", "d")]);

        // Already-present items are not promoted twice.
        let seq = list.begin_generate().unwrap();
        list.complete_generate(seq, Ok(vec![Cue::new("a", "b")]));
        list.promote(0);
        assert_eq!(list.draft().len(), 1);
        assert_eq!(list.suggestions().len(), 1);
    }

    #[test]
    fn generate_failure_surfaces_error_and_keeps_draft() {
        let mut list = cues();
        list.add(Cue::new("a", "b")).unwrap();

        let seq = list.begin_generate().unwrap();
        assert!(list.complete_generate(seq, Err("Failed to generate cues".to_string())));
        assert_eq!(list.error_message(), Some("Failed to generate cues"));
        assert_eq!(list.draft().len(), 1);
        assert!(!list.is_generating());
    }

    #[test]
    fn concurrent_generate_rejected_and_stale_dropped() {
        let mut list = cues();
        let seq = list.begin_generate().unwrap();
        assert_eq!(list.begin_generate(), None);

        assert!(list.complete_generate(seq, Ok(vec![])));
        assert!(!list.complete_generate(seq, Ok(vec![Cue::new("x", "y")])));
        assert!(list.suggestions().is_empty());
    }

    #[test]
    fn edit_at_revalidates() {
        let mut list = cues();
        list.add(Cue::new("a", "b")).unwrap();
        assert!(list.edit_at(0, Cue::new("", "b")).is_err());
        list.edit_at(0, Cue::new("a2", "b2")).unwrap();
        assert_eq!(list.draft()[0], Cue::new("a2", "b2"));
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut list = cues();
        list.add(Cue::new("a", "b")).unwrap();
        list.remove_at(5);
        assert_eq!(list.draft().len(), 1);
        list.remove_at(0);
        assert!(list.draft().is_empty());
    }
}
