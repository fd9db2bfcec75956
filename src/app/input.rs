// ABOUTME: Minimal single-line text input buffer with cursor movement
// Shared by the wizard fields and the dashboard panel inputs.

/// A single-line edit buffer. Cursor positions are char indices, not bytes,
/// so multi-byte input behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the buffer and park the cursor at the end.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Buffer with a cursor bar inserted, for rendering.
    pub fn display_with_cursor(&self) -> String {
        let at = self.byte_index(self.cursor);
        let (before, after) = self.value.split_at(at);
        format!("{before}│{after}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_track_cursor() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);

        input.backspace();
        assert_eq!(input.value(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn mid_string_editing() {
        let mut input = TextInput::with_value("shop");
        input.cursor_home();
        input.cursor_right();
        input.insert('h');
        assert_eq!(input.value(), "shhop");
        input.delete();
        assert_eq!(input.value(), "shhp");
    }

    #[test]
    fn multibyte_safe() {
        let mut input = TextInput::with_value("héllo");
        input.cursor_home();
        input.cursor_right();
        input.cursor_right();
        input.backspace();
        assert_eq!(input.value(), "hllo");
    }
}
