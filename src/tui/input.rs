use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{ProductProfile, ProfileField};

use super::app::AppState;

/// What the key handler asks the event loop to do next.
pub(crate) enum InputOutcome {
    Continue,
    Quit,
    Submit(ProductProfile),
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut AppState) -> InputOutcome {
    // A modal alert swallows every key; Esc, Enter, or Space dismiss it.
    if app.alert().is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')
        ) {
            app.dismiss_alert();
        }
        return InputOutcome::Continue;
    }

    match key.code {
        KeyCode::Esc => return InputOutcome::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputOutcome::Quit;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return try_submit(app);
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.delete_word();
        }
        KeyCode::Enter => {
            // Enter advances through the form and submits from the last field.
            if app.form.focused() == ProfileField::Keywords {
                return try_submit(app);
            }
            app.form.focus_next();
        }
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::PageDown => app.scroll_down(app.page_size()),
        KeyCode::PageUp => app.scroll_up(app.page_size()),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.insert_char(c);
        }
        _ => {}
    }

    InputOutcome::Continue
}

fn try_submit(app: &mut AppState) -> InputOutcome {
    match app.submit() {
        Some(profile) => InputOutcome::Submit(profile),
        None => InputOutcome::Continue,
    }
}
