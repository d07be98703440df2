use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

pub(crate) struct Theme {
    border: Color,
    title: Color,
    text: Color,
    dim: Color,
    accent: Color,
    warn: Color,
    error: Color,
}

impl Theme {
    pub(crate) fn dark() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::Blue,
            text: Color::White,
            dim: Color::Gray,
            accent: Color::Cyan,
            warn: Color::Yellow,
            error: Color::Red,
        }
    }

    pub(crate) fn block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(self.title).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border))
    }

    /// Input field frame; the accent border marks the focused field.
    pub(crate) fn field_block<'a>(&self, title: &'a str, focused: bool) -> Block<'a> {
        let border = if focused { self.accent } else { self.border };
        let title_color = if focused { self.accent } else { self.dim };
        Block::default()
            .title(Span::styled(title, Style::default().fg(title_color)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
    }

    pub(crate) fn error_block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(self.error).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.error))
    }

    pub(crate) fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn key_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub(crate) fn busy_style(&self) -> Style {
        Style::default().fg(self.warn).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Block-cursor cell inside a focused input.
    pub(crate) fn cursor_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.accent)
    }
}
