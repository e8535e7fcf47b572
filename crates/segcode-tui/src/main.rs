//! Segcode - segmented one-time-code entry in the terminal
//!
//! Shows an N-box code input. Digits can be typed one per box or pasted in
//! one go; the completed code is reported on the status line.

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use segcode_core::{CompletionPolicy, ContentMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use segcode_tui::{App, TuiConfig};

#[derive(Parser)]
#[command(name = "segcode")]
#[command(about = "Segmented one-time-code input for the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of code boxes
    #[arg(short = 'n', long)]
    slots: Option<usize>,

    /// Do not focus the first box on start
    #[arg(long)]
    no_auto_focus: bool,

    /// Render the input read-only
    #[arg(long)]
    disabled: bool,

    /// Glyph shown in empty boxes
    #[arg(short, long)]
    placeholder: Option<String>,

    /// Content mode hint
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Fire the completion callback only when the code first becomes full
    #[arg(long)]
    edge_triggered: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Save the effective configuration before starting
    #[arg(long)]
    save_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Text,
    Number,
}

impl From<ModeArg> for ContentMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Text => ContentMode::Text,
            ModeArg::Number => ContentMode::Number,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply(&self, config: &mut TuiConfig) {
        let input = &mut config.input;
        if let Some(slots) = self.slots {
            input.slot_count = slots;
        }
        if self.no_auto_focus {
            input.auto_focus = false;
        }
        if self.disabled {
            input.disabled = true;
        }
        if let Some(placeholder) = &self.placeholder {
            input.placeholder = placeholder.clone();
        }
        if let Some(mode) = self.mode {
            input.content_mode = mode.into();
        }
        if self.edge_triggered {
            input.completion = CompletionPolicy::Edge;
        }
    }
}

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    init_logging(&cli)?;

    let mut config = match &cli.config {
        Some(path) => TuiConfig::load_or_default(path),
        None => TuiConfig::load(),
    };
    cli.apply(&mut config);
    config.input.validate()?;

    let saved = if cli.save_config {
        let path = match &cli.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        Some(path)
    } else {
        None
    };

    let mut app = App::new(&config)?;
    if let Some(path) = saved {
        app.state.status_message = Some(format!("Saved configuration to {}", path.display()));
    }

    let result = run_app(&mut app);

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Initialize logging
///
/// Logs go to `--log-file` when given; otherwise to stderr at warn level so
/// the alternate screen stays clean.
fn init_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.log_file.is_some() { "info" } else { "warn" };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("segcode_tui={default_level}").parse()?)
        .add_directive(format!("segcode_core={default_level}").parse()?);

    let registry = tracing_subscriber::registry().with(filter);
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            registry
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(fmt::layer().with_target(false).with_writer(io::stderr))
                .init();
        }
    }
    Ok(())
}

/// Main application runner
fn run_app(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Some(code) = app.state.last_completed() {
        tracing::info!(digits = code.len(), "exiting with completed code");
        println!("{code}");
    }

    result
}
