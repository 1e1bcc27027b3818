//! Single-line text input with character masking.

use unicode_width::UnicodeWidthStr;

/// Characters a field will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMask {
    /// Letters, digits, spaces, parentheses and arithmetic operators.
    Expression,
    /// A signed 32-bit integer, or a lone sign while typing one.
    Integer,
}

impl InputMask {
    /// Whether `text` may be the content of a field with this mask.
    pub fn accepts(self, text: &str) -> bool {
        match self {
            InputMask::Expression => text.chars().all(is_expression_char),
            InputMask::Integer => {
                text.is_empty() || text == "-" || text == "+" || text.parse::<i32>().is_ok()
            },
        }
    }
}

fn is_expression_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || " ()+-*/^.".contains(c)
}

/// Text input state.
#[derive(Debug, Clone)]
pub struct TextField {
    value: String,
    /// Cursor position in characters.
    cursor: usize,
    mask: InputMask,
}

impl TextField {
    /// Create an empty field.
    pub fn new(mask: InputMask) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            mask,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.value[..self.byte_offset()].width()
    }

    /// Replace the text, cursor at the end. Rejected if the mask refuses it.
    pub fn set_text(&mut self, text: &str) -> bool {
        if !self.mask.accepts(text) {
            return false;
        }
        self.value = text.to_string();
        self.cursor = self.value.chars().count();
        true
    }

    /// Insert a character at the cursor. Returns false if the mask refuses it.
    pub fn insert(&mut self, c: char) -> bool {
        let offset = self.byte_offset();
        match self.mask {
            InputMask::Expression => {
                if !is_expression_char(c) {
                    return false;
                }
                self.value.insert(offset, c);
            },
            InputMask::Integer => {
                // at most a sign and ten digits, so the copy stays small
                let mut candidate = self.value.clone();
                candidate.insert(offset, c);
                if !self.mask.accepts(&candidate) {
                    return false;
                }
                self.value = candidate;
            },
        }
        self.cursor += 1;
        true
    }

    /// Insert pasted text, dropping what the mask refuses. Returns the number
    /// of characters kept.
    pub fn insert_str(&mut self, text: &str) -> usize {
        match self.mask {
            InputMask::Expression => {
                let kept: String = text.chars().filter(|&c| is_expression_char(c)).collect();
                let count = kept.chars().count();
                let offset = self.byte_offset();
                self.value.insert_str(offset, &kept);
                self.cursor += count;
                count
            },
            InputMask::Integer => text.chars().filter(|&c| self.insert(c)).count(),
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.remove_at_cursor();
        }
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    // Removing characters never produces text either mask refuses.
    fn remove_at_cursor(&mut self) {
        let offset = self.byte_offset();
        self.value.remove(offset);
    }
}
