use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::domain::ProfileField;

use super::app::AppState;
use super::markdown::render_markdown;
use super::theme::Theme;

pub(crate) fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let theme = Theme::dark();

    // One row per field, plus a message line under each field that failed
    // the last submit.
    let mut constraints = Vec::new();
    for field in ProfileField::ALL {
        constraints.push(Constraint::Length(3));
        if app.form.error_for(field).is_some() {
            constraints.push(Constraint::Length(1));
        }
    }
    constraints.push(Constraint::Min(5));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut idx = 0;
    for field in ProfileField::ALL {
        draw_field(frame, &theme, app, field, chunks[idx]);
        idx += 1;
        if let Some(message) = app.form.error_for(field) {
            let error = Paragraph::new(Span::styled(format!("  {message}"), theme.error_style()));
            frame.render_widget(error, chunks[idx]);
            idx += 1;
        }
    }

    draw_result(frame, &theme, app, chunks[idx]);
    draw_footer(frame, &theme, app, chunks[idx + 1]);

    if let Some(message) = app.alert() {
        let message = message.to_string();
        draw_alert(frame, &theme, &message);
    }
}

fn draw_field(
    frame: &mut ratatui::Frame,
    theme: &Theme,
    app: &AppState,
    field: ProfileField,
    area: Rect,
) {
    let focused = app.form.focused() == field;
    let value = app.form.value(field);
    let block = theme.field_block(field.label(), focused);

    let paragraph = if value.is_empty() && !focused {
        Paragraph::new(Span::styled(placeholder(field), theme.dim_style()))
    } else if focused {
        let pos = app.form.cursor().min(value.len());
        let (before, after) = value.split_at(pos);
        let cursor_char = after.chars().next().map(String::from).unwrap_or_else(|| " ".to_string());
        let rest = &after[cursor_char.len().min(after.len())..];
        Paragraph::new(Line::from(vec![
            Span::styled(before.to_string(), theme.text_style()),
            Span::styled(cursor_char, theme.cursor_style()),
            Span::styled(rest.to_string(), theme.text_style()),
        ]))
    } else {
        Paragraph::new(Span::styled(value, theme.text_style()))
    };

    frame.render_widget(paragraph.block(block), area);
}

fn placeholder(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Name => "e.g. Trail running shoes",
        ProfileField::Category => "e.g. Sportswear",
        ProfileField::Keywords => "comma, separated, keywords",
    }
}

fn draw_result(frame: &mut ratatui::Frame, theme: &Theme, app: &mut AppState, area: Rect) {
    let block = theme.block(" Analysis ");
    let inner = block.inner(area);

    match app.report() {
        Some(report) => {
            let lines = render_markdown(report.content());
            app.set_result_metrics(lines.len(), inner.height);
            let paragraph = Paragraph::new(Text::from(lines))
                .wrap(Wrap { trim: false })
                .scroll((app.result_scroll as u16, 0))
                .block(block);
            frame.render_widget(paragraph, area);
        }
        None => {
            // Nothing to display before the first successful response.
            let hint = Paragraph::new(Span::styled(
                "Fill in the form and press ctrl+s to analyze.",
                theme.dim_style(),
            ))
            .block(block);
            frame.render_widget(hint, area);
        }
    }
}

fn draw_footer(frame: &mut ratatui::Frame, theme: &Theme, app: &AppState, area: Rect) {
    let footer = if app.is_busy() {
        Line::from(vec![
            Span::styled("  Analyzing… ", theme.busy_style()),
            Span::styled("submission disabled until the reply arrives", theme.dim_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled("  enter", theme.key_style()),
            Span::styled(" next field  ", theme.dim_style()),
            Span::styled("ctrl+s", theme.key_style()),
            Span::styled(" analyze  ", theme.dim_style()),
            Span::styled("pgup/pgdn", theme.key_style()),
            Span::styled(" scroll  ", theme.dim_style()),
            Span::styled("esc", theme.key_style()),
            Span::styled(" quit", theme.dim_style()),
        ])
    };
    frame.render_widget(Paragraph::new(footer), area);
}

fn draw_alert(frame: &mut ratatui::Frame, theme: &Theme, message: &str) {
    let area = centered_rect(frame.area(), 60, 30);
    frame.render_widget(Clear, area);

    let body = Text::from(vec![
        Line::from(Span::styled(message.to_string(), theme.text_style())),
        Line::default(),
        Line::from(Span::styled("press esc to dismiss", theme.dim_style())),
    ]);
    let alert = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(theme.error_block(" Analysis failed "));
    frame.render_widget(alert, area);
}

/// A rect centered in `area`, sized as a percentage of it.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
