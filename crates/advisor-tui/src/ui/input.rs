//! Text input bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.state.is_busy() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Ask about life, home or car cover (Enter to send, Ctrl-C to quit) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Show the tail of long input, leaving one cell for the cursor
    let room = inner.width.saturating_sub(1) as usize;
    let typed = app.input.chars().count();
    let visible: String = app.input.chars().skip(typed.saturating_sub(room)).collect();
    let cursor_x = visible.chars().count() as u16;

    let input = Paragraph::new(visible)
        .style(Style::default().fg(Color::White));
    frame.render_widget(input, inner);

    frame.set_cursor_position(Position::new(
        inner.x + cursor_x.min(inner.width.saturating_sub(1)),
        inner.y,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use advisor_core::config::Config;
    use advisor_core::store::ConversationStore;
    use ratatui::backend::{Backend, TestBackend};

    async fn render(input: &str) -> (Terminal<TestBackend>, ratatui::layout::Position) {
        let store = Arc::new(ConversationStore::new(Config::default()));
        let mut app = App::new(store).await;
        app.input = input.to_string();

        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, &app, area);
            })
            .unwrap();
        let cursor = terminal.backend_mut().get_cursor_position().unwrap();
        (terminal, cursor)
    }

    #[tokio::test]
    async fn test_cursor_follows_short_input() {
        let (_, cursor) = render("car").await;
        assert_eq!(cursor, ratatui::layout::Position::new(4, 1));
    }

    #[tokio::test]
    async fn test_cursor_stays_inside_box() {
        let long = "I would like to know about home contents cover";
        let (terminal, cursor) = render(long).await;

        // 20 wide with borders leaves 18 cells; the last one holds the cursor
        assert_eq!(cursor, ratatui::layout::Position::new(18, 1));

        let buffer = terminal.backend().buffer();
        let row: String = buffer.content()[20..40].iter().map(|c| c.symbol()).collect();
        assert!(row.contains("contents cover"), "{:?}", row);
    }
}
