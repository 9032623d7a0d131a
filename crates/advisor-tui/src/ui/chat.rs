//! Scrollable message log.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use advisor_core::types::Role;

use crate::app::App;

/// Indent applied to message bodies under the speaker line.
const BODY_INDENT: &str = "  ";

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.advisor_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Bottom-up with scroll offset
    let visible_height = inner.height as usize;
    let width = inner.width as usize;
    let total = app.messages.len();
    let end = total.saturating_sub(app.scroll_offset);
    let start = end.saturating_sub(visible_height); // every message takes at least one row

    // Lines are wrapped here so each one is exactly one row on screen
    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.messages[start..end] {
        let (fg, speaker) = match msg.role {
            Role::Assistant => (Color::Green, app.advisor_name.as_str()),
            Role::User => (Color::Yellow, "You"),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", speaker), Style::default().fg(fg).bold()),
            Span::styled(msg.timestamp.clone(), Style::default().fg(Color::DarkGray)),
        ]));
        let body_width = width.saturating_sub(BODY_INDENT.len());
        for line in msg.content.lines() {
            for row in wrap(line, body_width) {
                lines.push(Line::styled(
                    format!("{}{}", BODY_INDENT, row),
                    Style::default().fg(fg),
                ));
            }
        }
        lines.push(Line::raw(""));
    }

    if app.state.is_busy() && app.scroll_offset == 0 {
        for row in wrap(&format!("{} is typing...", app.advisor_name), width) {
            lines.push(Line::styled(
                row,
                Style::default().fg(Color::DarkGray).italic(),
            ));
        }
    }

    // Keep the newest rows in view
    let overflow = lines.len().saturating_sub(visible_height) as u16;
    let paragraph = Paragraph::new(lines).scroll((overflow, 0));
    frame.render_widget(paragraph, inner);
}

/// Word-wrap `text` into rows of at most `width` characters. Words longer
/// than a row are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
