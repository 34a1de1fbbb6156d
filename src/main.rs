use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;

use seatfinder::app::{config, r#loop::run_loop, state::AppState};
use seatfinder::cli::{lookup, Cli};
use seatfinder::domain::directory::{DirectorySource, GuestDirectory};
use seatfinder::infrastructure::toml_directory::{EmbeddedDirectory, TomlDirectory};

const LOG_ENV: &str = "SEATFINDER_LOG";

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        original_hook(panic_info);
    }));
}

/// Log to a file: the terminal belongs to the UI. Runs without a log file
/// when no directory is writable.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = config::prepare_log_dir(config::get_log_dir())?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "seatfinder.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging();

    // Config and guest list load BEFORE terminal setup so a bad file
    // doesn't leave the terminal in raw mode.
    let app_config = config::load_config(cli.config.as_deref())?;
    let guests = cli.guests.as_ref().or(app_config.guests.as_ref());
    let source: Box<dyn DirectorySource> = match guests {
        Some(path) => Box::new(TomlDirectory::new(path.clone())),
        None => Box::new(EmbeddedDirectory),
    };
    let directory = GuestDirectory::load_from(source.as_ref()).await?;

    if let Some(name) = cli.lookup.as_deref() {
        let report = lookup(name, directory.records());
        println!("{}", report.output);
        return Ok(if report.found {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    setup_panic_hook();
    let app_state = AppState::new(&directory, &app_config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{:?}", err);
        println!("{:?}", err);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
