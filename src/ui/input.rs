//! Single-line text input.
//!
//! [`LineInput`] keeps a one-line `tui-textarea` buffer as the editing
//! model: content, cursor and the usual line-editing keys. Drawing stays
//! with the grid and toolbar renderers, which only need the value and the
//! cursor column.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

/// Editable line with a cursor.
#[derive(Debug, Clone)]
pub struct LineInput {
    textarea: TextArea<'static>,
}

impl Default for LineInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput {
    pub fn new() -> Self {
        Self::with_value("")
    }

    /// Input holding `value`, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        let mut textarea = TextArea::new(vec![value.to_string()]);
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    pub fn value(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Cursor position in characters from the start of the line.
    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    fn insert_char(&mut self, c: char) {
        // The buffer must stay on one line
        if c.is_control() {
            return;
        }
        self.textarea.insert_char(c);
    }

    /// Apply an editing key.
    ///
    /// Returns `true` when the key belongs to the input, whether or not the
    /// text changed. Enter, Esc and Tab are left to the caller.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('a') if ctrl => self.textarea.move_cursor(CursorMove::Head),
            KeyCode::Char('e') if ctrl => self.textarea.move_cursor(CursorMove::End),
            KeyCode::Char('u') if ctrl => {
                self.textarea.delete_line_by_head();
            }
            KeyCode::Char('w') if ctrl => {
                self.textarea.delete_word();
            }
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => {
                self.textarea.delete_char();
            }
            KeyCode::Delete => {
                self.textarea.delete_next_char();
            }
            KeyCode::Left => self.textarea.move_cursor(CursorMove::Back),
            KeyCode::Right => self.textarea.move_cursor(CursorMove::Forward),
            KeyCode::Home => self.textarea.move_cursor(CursorMove::Head),
            KeyCode::End => self.textarea.move_cursor(CursorMove::End),
            _ => return false,
        }
        true
    }
}
