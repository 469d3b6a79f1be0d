// Single-line text input for the search box
//
// Edits are local to the widget. The text is only read when the user confirms
// a search; typing never triggers a fetch.

/// Editable line of text with a cursor measured in chars
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars from the start
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::default();
        s.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn test_typing_appends() {
        let input = typed("Smith");
        assert_eq!(input.value(), "Smith");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = typed("Smth");
        input.move_left();
        input.move_left();
        input.insert('i');
        assert_eq!(input.value(), "Smith");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_backspace_and_delete_with_multibyte_chars() {
        let mut input = typed("Sägesser");
        input.move_home();
        input.move_right();
        input.delete();
        assert_eq!(input.value(), "Sgesser");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "Sgesse");

        input.move_home();
        input.backspace();
        assert_eq!(input.value(), "Sgesse", "backspace at start is a no-op");
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut input = typed("ab");
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_clear() {
        let mut input = typed("Andersson");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
