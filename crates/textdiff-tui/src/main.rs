use ratatui::{
    backend::CrosstermBackend,
    crossterm::event::{self, Event, KeyEventKind},
    Terminal,
};
use std::io;
use std::time::Duration;
use textdiff_config::AppConfig;
use textdiff_viewer::DiffAction;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducer;
mod state;
mod store;
mod terminal;
mod views;

use actions::Action;
use middleware::{keyboard::KeyboardMiddleware, logging::LoggingMiddleware};
use state::AppState;
use store::Store;
use terminal::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting textdiff-tui, logging to {}", log_file.display());

    let config = AppConfig::load();

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(config));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));

    // Setup terminal (restored when the guard drops, also on panic)
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    drop(guard);

    if let Err(ref err) = result {
        log::error!("Event loop failed: {}", err);
    }

    log::info!("Exiting textdiff-tui");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    loop {
        // Render
        let mut viewport_height = 0;
        let frame = terminal.draw(|frame| {
            let area = frame.area();
            viewport_height = views::render(store.state(), area, frame);
        })?;

        // Keep scroll calculations in sync with what was drawn
        if viewport_height as usize != store.state().text_diff.viewport_height {
            store.dispatch(Action::TextDiff(DiffAction::SetViewport {
                width: frame.area.width,
                height: viewport_height,
            }));
        }

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::GlobalKeyPressed(key));
                }
                Event::Paste(text) => store.dispatch(Action::GlobalPaste(text)),
                // Redrawn on the next iteration
                Event::Resize(width, height) => {
                    log::debug!("Terminal resized to {}x{}", width, height);
                }
                _ => {}
            }
        }
    }

    Ok(())
}
