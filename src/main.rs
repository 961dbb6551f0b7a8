use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

mod app;
mod assets;
mod cli;
mod error;
mod intro;
mod logging;
mod models;
mod theme;
mod tui;
mod ui;
mod utils;
mod viewer;

use app::App;
use error::Result;
use models::ProfileSource;

/// Input poll timeout; also the redraw cadence
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = cli::parse_args();
    let log_guard = logging::init(args.verbose);
    if let Some(guard) = &log_guard {
        tracing::info!(version = cli::VERSION, log = %guard.path.display(), "folio-tui starting");
    }

    // Content errors are reported before the terminal is taken over
    let (profile, source) = models::find_profile(args.content.as_deref())?;
    match &source {
        ProfileSource::File(path) => tracing::info!(path = %path.display(), "profile loaded"),
        ProfileSource::Embedded => tracing::info!("embedded profile loaded"),
    }

    let mut app = App::new(profile, args.app_config());

    // Setup terminal
    tui::install_panic_hook();
    let (mut screen, mut terminal) = tui::TerminalGuard::enter()?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    let result = tui::settle(result, screen.restore());

    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting with error");
    }
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        if app.should_quit {
            break;
        }

        let mut width = app.panel_width;
        terminal.draw(|frame| {
            width = frame.area().width;
            ui::render(frame, app, now);
        })?;
        app.panel_width = ui::panel_width(width);

        // Handle input
        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, Instant::now());
                }
            }
        }
    }

    tracing::info!("quit");
    Ok(())
}
