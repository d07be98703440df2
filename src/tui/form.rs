use crate::domain::{ProductProfile, ProfileField, ValidationError};

/// Raw form input plus focus, cursor, and the field messages from the last
/// failed submit.
///
/// The form never talks to the network: [`FormState::try_profile`] is the
/// only exit, and it hands a validated [`ProductProfile`] to the caller.
pub struct FormState {
    pub name: String,
    pub category: String,
    pub keywords: String,
    focused: ProfileField,
    /// Cursor position (byte offset) within the focused field.
    cursor: usize,
    errors: Vec<ValidationError>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            keywords: String::new(),
            focused: ProfileField::Name,
            cursor: 0,
            errors: Vec::new(),
        }
    }
}

impl FormState {
    pub fn focused(&self) -> ProfileField {
        self.focused
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Category => &self.category,
            ProfileField::Keywords => &self.keywords,
        }
    }

    fn value_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Category => &mut self.category,
            ProfileField::Keywords => &mut self.keywords,
        }
    }

    /// The required-message for `field` from the last failed submit, if any.
    pub fn error_for(&self, field: ProfileField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field() == field)
            .map(|e| e.message())
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor.min(self.value(self.focused).len())
    }

    fn clamp_cursor(&mut self) {
        let len = self.value(self.focused).len();
        if self.cursor > len {
            self.cursor = len;
        }
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.clamp_cursor();
        let cursor = self.cursor;
        let field = self.focused;
        self.value_mut(field).insert(cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub(crate) fn backspace(&mut self) {
        self.clamp_cursor();
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let field = self.focused;
        let input = self.value_mut(field);
        let prev = input[..cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        input.remove(prev);
        self.cursor = prev;
    }

    /// Delete the word before the cursor (Ctrl+W).
    pub(crate) fn delete_word(&mut self) {
        self.clamp_cursor();
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let field = self.focused;
        let input = self.value_mut(field);
        let mut end = cursor;
        while end > 0 && input.as_bytes().get(end - 1) == Some(&b' ') {
            end -= 1;
        }
        let mut start = end;
        while start > 0 && input.as_bytes().get(start - 1) != Some(&b' ') {
            start -= 1;
        }
        input.drain(start..cursor);
        self.cursor = start;
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus(match self.focused {
            ProfileField::Name => ProfileField::Category,
            ProfileField::Category => ProfileField::Keywords,
            ProfileField::Keywords => ProfileField::Name,
        });
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus(match self.focused {
            ProfileField::Name => ProfileField::Keywords,
            ProfileField::Category => ProfileField::Name,
            ProfileField::Keywords => ProfileField::Category,
        });
    }

    fn focus(&mut self, field: ProfileField) {
        self.focused = field;
        self.cursor = self.value(field).len();
    }

    /// Run presence validation over the three fields.
    ///
    /// On success the stored messages are cleared and the profile is
    /// returned; on failure one message per empty field is kept for the
    /// renderer and `None` is returned — submission stays blocked.
    pub fn try_profile(&mut self) -> Option<ProductProfile> {
        match ProductProfile::validate(&self.name, &self.category, &self.keywords) {
            Ok(profile) => {
                self.errors.clear();
                Some(profile)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
