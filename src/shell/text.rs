//! Word boundaries for readline-style prompt editing.
//!
//! Words are delimited by whitespace; flags such as `-help` count as part of
//! the word. Positions are character indices.

/// Start of the word before `cursor`. Trailing whitespace is skipped first.
pub fn find_word_start_backward(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = cursor.min(chars.len());

    while pos > 0 && chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }

    pos
}

/// End of the word after `cursor`. Leading whitespace is skipped first.
pub fn find_word_end_forward(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut pos = cursor.min(len);

    while pos < len && chars[pos].is_whitespace() {
        pos += 1;
    }
    while pos < len && !chars[pos].is_whitespace() {
        pos += 1;
    }

    pos
}
