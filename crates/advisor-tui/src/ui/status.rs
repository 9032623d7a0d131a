//! Status bar — shows advisor state and message count.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use advisor_core::types::AdvisorState;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let state_color = match app.state {
        AdvisorState::Idle => Color::DarkGray,
        AdvisorState::AwaitingReply => Color::Green,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.state),
            Style::default().fg(Color::Black).bg(state_color),
        ),
        Span::raw(format!(" messages: {} ", app.messages.len())),
    ];

    if app.scroll_offset > 0 {
        spans.push(Span::styled(
            " scrolled (PageDown to return) ",
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
