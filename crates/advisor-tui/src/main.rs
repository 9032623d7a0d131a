//! advisor-tui — Terminal chat with the insurance advisor.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::info;

use advisor_core::config::Config;
use advisor_core::store::ConversationStore;

use app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to a file, since we own the terminal
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("advisor-tui.log")
        .context("Failed to open advisor-tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load_or_default(&project_root)?;

    let store = Arc::new(ConversationStore::new(config));
    let mut app = App::new(store.clone()).await;
    let mut rx = store.subscribe();

    info!("Starting TUI as {}", app.advisor_name);

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut rx).await;

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut tokio::sync::broadcast::Receiver<advisor_core::events::ConversationEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Store events (non-blocking)
        loop {
            match rx.try_recv() {
                Ok(event) => app.handle_event(event),
                Err(TryRecvError::Lagged(_)) => {
                    app.resync().await;
                    break;
                }
                Err(_) => break,
            }
        }

        // Terminal events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char('c'), KeyModifiers::CONTROL)
                    | (KeyCode::Char('q'), KeyModifiers::CONTROL)
                    | (KeyCode::Esc, _) => {
                        app.should_quit = true;
                    }
                    (KeyCode::Enter, _) => app.send_message().await,
                    (KeyCode::Char(c), _) => app.input.push(c),
                    (KeyCode::Backspace, _) => {
                        app.input.pop();
                    }
                    (KeyCode::Up, _) | (KeyCode::PageUp, _) => app.scroll_up(),
                    (KeyCode::Down, _) | (KeyCode::PageDown, _) => app.scroll_down(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
