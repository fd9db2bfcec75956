// ABOUTME: Behavioral tests for the shared field-editor state machine

use std::time::Instant;

use shoptalk::panels::{validate, FieldEditor, PanelPhase};

fn theme_editor() -> FieldEditor<String> {
    let mut editor = FieldEditor::gated(String::new(), validate::theme_color);
    editor.seed("#FF6B00".to_string());
    editor
}

#[test]
fn save_disabled_while_draft_equals_original_in_every_phase() {
    let mut editor = theme_editor();

    // Idle
    assert!(!editor.can_save());

    // Editing without a change
    editor.start_edit();
    assert!(!editor.can_save());
    assert_eq!(editor.begin_save(), None);

    // After a save round trip the adopted draft equals the new original
    editor.mutate(|d| *d = "#00FF00".to_string());
    let seq = editor.begin_save().unwrap();
    editor.complete_save(seq, Ok(()), Instant::now());
    assert_eq!(editor.phase(), PanelPhase::Saved);
    assert!(!editor.can_save());
}

#[test]
fn theme_color_gating_follows_the_hex_pattern() {
    let mut editor = theme_editor();
    editor.start_edit();

    // Five hex digits: changed but invalid, save stays disabled.
    editor.mutate(|d| *d = "#FF6B0".to_string());
    assert!(editor.is_dirty());
    assert!(!editor.can_save());

    // Six hex digits: valid and changed, save enabled.
    editor.mutate(|d| *d = "#FF6B01".to_string());
    assert!(editor.can_save());

    // Back to the original value: valid but unchanged.
    editor.mutate(|d| *d = "#FF6B00".to_string());
    assert!(!editor.can_save());
}

#[test]
fn double_save_cannot_fire_two_requests() {
    let mut editor = theme_editor();
    editor.start_edit();
    editor.mutate(|d| *d = "#123456".to_string());

    let first = editor.begin_save();
    let second = editor.begin_save();
    assert!(first.is_some());
    assert_eq!(second, None, "second click while saving must be rejected");
}

#[test]
fn cancel_without_prior_mutation_is_a_noop() {
    let mut editor = theme_editor();
    editor.cancel();
    editor.cancel();
    assert_eq!(editor.draft(), editor.original());
    assert_eq!(editor.phase(), PanelPhase::Idle);
}

#[test]
fn error_phase_keeps_draft_until_user_retries() {
    let mut editor = theme_editor();
    editor.start_edit();
    editor.mutate(|d| *d = "#ABCDEF".to_string());
    let seq = editor.begin_save().unwrap();
    editor.complete_save(seq, Err("Request failed. Please try again.".to_string()), Instant::now());

    assert_eq!(editor.phase(), PanelPhase::Error);
    assert_eq!(editor.draft(), "#ABCDEF");
    assert_eq!(editor.original(), "#FF6B00");

    // Retry succeeds and adopts the draft.
    let seq = editor.begin_save().unwrap();
    editor.complete_save(seq, Ok(()), Instant::now());
    assert_eq!(editor.original(), "#ABCDEF");
}
