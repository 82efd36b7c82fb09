//! The live prompt: one persistent input slot.
//!
//! The prompt is never rebuilt between commands. After each submission it is
//! cleared and re-enabled in place.

use super::text::{find_word_end_forward, find_word_start_backward};

/// Text being typed plus a cursor (character index).
#[derive(Debug, Clone)]
pub struct PromptState {
    text: String,
    cursor: usize,
    enabled: bool,
}

impl Default for PromptState {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            enabled: true,
        }
    }
}

impl PromptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the prompt accepts edits. Disabled between submission and reset.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        if !self.enabled {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Inserts a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert(c);
        }
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if !self.enabled || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    /// Deletes the character at the cursor.
    pub fn delete(&mut self) {
        if !self.enabled || self.cursor >= self.char_count() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    /// Deletes the word before the cursor (Ctrl+W).
    pub fn delete_word_backward(&mut self) {
        if !self.enabled {
            return;
        }
        let start = find_word_start_backward(&self.text, self.cursor);
        let (from, to) = (self.byte_index(start), self.byte_index(self.cursor));
        self.text.replace_range(from..to, "");
        self.cursor = start;
    }

    /// Deletes the word after the cursor (Alt+D).
    pub fn delete_word_forward(&mut self) {
        if !self.enabled {
            return;
        }
        let end = find_word_end_forward(&self.text, self.cursor);
        let (from, to) = (self.byte_index(self.cursor), self.byte_index(end));
        self.text.replace_range(from..to, "");
    }

    /// Deletes everything before the cursor (Ctrl+U).
    pub fn delete_to_start(&mut self) {
        if !self.enabled {
            return;
        }
        let to = self.byte_index(self.cursor);
        self.text.replace_range(..to, "");
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replaces the whole text and puts the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    /// Locks the prompt and hands back its text.
    pub fn submit(&mut self) -> String {
        self.enabled = false;
        self.text.clone()
    }

    /// Clears the text and re-enables input.
    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.enabled = true;
    }

    /// Re-enables input without touching the text.
    pub fn enable(&mut self) {
        self.enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_with(text: &str) -> PromptState {
        let mut prompt = PromptState::new();
        prompt.insert_str(text);
        prompt
    }

    #[test]
    fn test_insert_and_cursor() {
        let prompt = prompt_with("ls");
        assert_eq!(prompt.text(), "ls");
        assert_eq!(prompt.cursor(), 2);
    }

    #[test]
    fn test_insert_mid_text() {
        let mut prompt = prompt_with("c -help");
        prompt.move_home();
        prompt.move_right();
        prompt.insert('r');
        assert_eq!(prompt.text(), "cr -help");
        assert_eq!(prompt.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut prompt = prompt_with("clearx");
        prompt.backspace();
        assert_eq!(prompt.text(), "clear");

        prompt.move_home();
        prompt.delete();
        assert_eq!(prompt.text(), "lear");
        assert_eq!(prompt.cursor(), 0);

        prompt.backspace();
        assert_eq!(prompt.text(), "lear");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut prompt = prompt_with("a➤b");
        assert_eq!(prompt.cursor(), 3);
        prompt.move_left();
        prompt.backspace();
        assert_eq!(prompt.text(), "ab");
        assert_eq!(prompt.cursor(), 1);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut prompt = prompt_with("crombo -skills");
        prompt.delete_word_backward();
        assert_eq!(prompt.text(), "crombo ");
        assert_eq!(prompt.cursor(), 7);
    }

    #[test]
    fn test_delete_word_forward() {
        let mut prompt = prompt_with("cr -about");
        prompt.move_home();
        prompt.delete_word_forward();
        assert_eq!(prompt.text(), " -about");
        assert_eq!(prompt.cursor(), 0);
    }

    #[test]
    fn test_delete_to_start() {
        let mut prompt = prompt_with("cr -contact");
        prompt.move_left();
        prompt.delete_to_start();
        assert_eq!(prompt.text(), "t");
        assert_eq!(prompt.cursor(), 0);
    }

    #[test]
    fn test_submit_disables_until_reset() {
        let mut prompt = prompt_with("ls");
        assert_eq!(prompt.submit(), "ls");
        assert!(!prompt.is_enabled());

        prompt.insert('x');
        assert_eq!(prompt.text(), "ls");

        prompt.reset();
        assert!(prompt.is_enabled());
        assert!(prompt.is_empty());
        assert_eq!(prompt.cursor(), 0);
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut prompt = PromptState::new();
        prompt.set_text("cr -projects");
        assert_eq!(prompt.cursor(), 12);
    }
}
