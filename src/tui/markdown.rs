//! Markdown-to-terminal rendering for analysis reports.
//!
//! A pure function of its input: the subset the analysis service actually
//! emits (headings, emphasis, lists, inline code, fenced code blocks) maps
//! to styled lines; anything else passes through as plain text.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

fn heading_style(level: usize) -> Style {
    let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    if level == 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::Green)
}

fn bullet_style() -> Style {
    Style::default().fg(Color::Cyan)
}

fn dim_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Render a markdown document into styled terminal lines.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut in_code_block = false;

    for raw in content.lines() {
        let trimmed = raw.trim_start();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            lines.push(Line::from(Span::styled(raw.to_string(), code_style())));
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                heading_style(level),
            )));
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            let mut spans = vec![Span::styled("  • ", bullet_style())];
            spans.extend(parse_inline(item));
            lines.push(Line::from(spans));
        } else if let Some((number, item)) = numbered_item(trimmed) {
            let mut spans = vec![Span::styled(format!("  {number} "), bullet_style())];
            spans.extend(parse_inline(item));
            lines.push(Line::from(spans));
        } else if let Some(quoted) = trimmed.strip_prefix("> ") {
            lines.push(Line::from(Span::styled(
                format!("  │ {quoted}"),
                dim_style(),
            )));
        } else if trimmed == "---" || trimmed == "***" {
            lines.push(Line::from(Span::styled("─".repeat(40), dim_style())));
        } else if raw.is_empty() {
            lines.push(Line::default());
        } else {
            lines.push(Line::from(parse_inline(raw)));
        }
    }

    lines
}

/// Split `## Heading` into its level and text. At most six hashes, and a
/// space must follow them.
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    line[level..].strip_prefix(' ').map(|text| (level, text))
}

/// Split `3. item` into its `3.` prefix and the item text.
fn numbered_item(line: &str) -> Option<(&str, &str)> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    rest.strip_prefix(". ")
        .map(|item| (&line[..digits + 1], item))
}

/// Parse `**bold**`, `*italic*`, and `` `code` `` runs within one line.
///
/// Unclosed markers fall through as literal text.
fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**") {
                flush_plain(&mut spans, &mut plain);
                spans.push(Span::styled(
                    after[..end].to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                rest = &after[end + 2..];
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix('`') {
            if let Some(end) = after.find('`') {
                flush_plain(&mut spans, &mut plain);
                spans.push(Span::styled(after[..end].to_string(), code_style()));
                rest = &after[end + 1..];
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix('*') {
            // A zero-length body means a stray `**` without a closing pair;
            // leave it literal.
            if let Some(end) = after.find('*').filter(|&end| end > 0) {
                flush_plain(&mut spans, &mut plain);
                spans.push(Span::styled(
                    after[..end].to_string(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
                rest = &after[end + 1..];
                continue;
            }
        }

        if let Some(c) = rest.chars().next() {
            plain.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    flush_plain(&mut spans, &mut plain);
    spans
}

fn flush_plain(spans: &mut Vec<Span<'static>>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::raw(std::mem::take(plain)));
    }
}
