//! # Neonkit CLI Entry Point
//!
//! Copies neon-styled React components into a project and previews their
//! interactive behavior in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Write lib/utils.ts, app/globals.css and tailwind.config.ts (if missing)
//! neonkit init
//!
//! # Copy a component into components/ui/ and install its dependencies
//! neonkit add button
//!
//! # Show every available component
//! neonkit list
//!
//! # Try the controls in a terminal gallery
//! neonkit preview
//!
//! # Operate on another directory, with debug logging
//! neonkit --cwd ../my-app -v add modal
//! ```
//!
//! ## Exit Codes
//!
//! Usage problems (no command, unknown command, unknown component) print
//! guidance and exit 0. Filesystem and configuration errors exit 1.
//! Dependency install failures never change the exit code; the manual
//! install command is printed instead.
//!
//! ## Preview Key Bindings
//!
//! - `Tab` / `Shift+Tab` - Move focus between controls
//! - `Space` / `Enter` - Toggle, select, or open the focused control
//! - `Up` / `Down` - Move within radio groups, dropdowns and textareas
//! - `Esc` / `q` - Quit (when the focused control does not use the key)
//! - `Ctrl+C` - Quit

use neonkit::config::Config;
use neonkit::error::ScaffoldError;
use neonkit::scaffold::{self, CommandInstaller, DependencyInstaller, InstallOutcome};
use neonkit::ui::{self, App};

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Frame interval for the preview gallery's glow animation.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Neonkit - copy-paste neon UI components for React + Tailwind projects
#[derive(Parser, Debug)]
#[command(name = "neonkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scaffold neon-styled React components into your project", long_about = None)]
struct Cli {
    /// Project directory to operate on (defaults to the current directory)
    #[arg(long, value_name = "DIR", global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Write the baseline project files that are missing
    Init,
    /// Copy a component into the project and install its dependencies
    Add {
        /// Component name (see `neonkit list`)
        name: Option<String>,
    },
    /// List available components
    List,
    /// Open the interactive terminal gallery
    Preview,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("neonkit=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn print_help() -> Result<()> {
    Cli::command()
        .print_help()
        .context("Failed to print usage")?;
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            use clap::error::ErrorKind;
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    err.print().context("Failed to print usage")?;
                }
                _ => {
                    eprintln!("{}", err.render());
                    print_help()?;
                }
            }
            return Ok(());
        }
    };

    init_tracing(cli.verbose).ok();

    let Some(command) = cli.command else {
        return print_help();
    };

    let root = match cli.cwd {
        Some(dir) => dir
            .canonicalize()
            .with_context(|| format!("Failed to access directory: {}", dir.display()))?,
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    debug!(root = %root.display(), ?command, "running command");

    run_command(&root, command)
}

fn run_command(root: &Path, command: Commands) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    dispatch(root, command, &mut out, &mut err)
}

/// Run one command, writing results to `out` and warnings/usage to `err`.
fn dispatch(
    root: &Path,
    command: Commands,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Init => run_init(root, out, err),
        Commands::Add { name: Some(name) } => run_add(root, &name, out, err),
        Commands::Add { name: None } => {
            writeln!(err, "Usage: neonkit add <component>\n")?;
            write!(out, "{}", scaffold::format_listing())?;
            Ok(())
        }
        Commands::List => {
            write!(out, "{}", scaffold::format_listing())?;
            Ok(())
        }
        Commands::Preview => run_preview(root),
    }
}

fn installer_for(root: &Path, config: &Config) -> CommandInstaller {
    let manager = config.package_manager_for(root);
    debug!(manager = manager.program(), "selected package manager");
    CommandInstaller::new(manager)
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn report_install(
    outcome: &InstallOutcome,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match outcome {
        InstallOutcome::Skipped => Ok(()),
        InstallOutcome::Installed { command } => {
            writeln!(out, "Installed dependencies ({})", command)
        }
        InstallOutcome::Failed {
            manual_command,
            reason,
        } => {
            writeln!(err, "Warning: could not install dependencies: {}", reason)?;
            writeln!(err, "Run this yourself: {}", manual_command)
        }
    }
}

fn run_init(root: &Path, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let config = Config::load(root)?;
    let report = scaffold::init(root, &installer_for(root, &config))?;

    for path in &report.created {
        writeln!(out, "Created {}", display_relative(root, path))?;
    }
    for path in &report.skipped {
        writeln!(out, "Skipped {} (already exists)", display_relative(root, path))?;
    }
    report_install(&report.install, out, err)?;
    Ok(())
}

fn run_add(root: &Path, name: &str, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let config = Config::load(root)?;
    add_with(root, name, &installer_for(root, &config), out, err)
}

fn add_with(
    root: &Path,
    name: &str,
    installer: &dyn DependencyInstaller,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let report = match scaffold::add(root, name, installer) {
        Ok(report) => report,
        Err(not_found @ ScaffoldError::ComponentNotFound { .. }) => {
            writeln!(err, "{}\n", not_found)?;
            write!(out, "{}", scaffold::format_listing())?;
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    };

    for path in &report.written {
        writeln!(out, "Wrote {}", display_relative(root, path))?;
    }
    report_install(&report.install, out, err)?;
    if report.install.is_failed() {
        writeln!(out, "Added {} (dependencies still need installing)", report.component)?;
    } else {
        writeln!(out, "Added {}", report.component)?;
    }
    Ok(())
}

/// Raw mode plus alternate screen, restored on drop (including unwinding).
///
/// The panic hook only records the report. Panics a control catches leave the
/// screen alone; an escaping panic is printed after the terminal is restored.
struct TerminalGuard {
    panic_report: Arc<Mutex<Option<String>>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let guard = Self {
            panic_report: Arc::new(Mutex::new(None)),
        };
        install_deferred_panic_hook(Arc::clone(&guard.panic_report));

        enable_raw_mode().context("Failed to enable raw mode for terminal")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to setup terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = panic::take_hook();

        if std::thread::panicking() {
            if let Some(report) = self.panic_report.lock().ok().and_then(|mut r| r.take()) {
                eprintln!("{}", report);
            }
        }
    }
}

fn install_deferred_panic_hook(slot: Arc<Mutex<Option<String>>>) {
    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(mut report) = slot.lock() {
            *report = Some(panic_info.to_string());
        }
    }));
}

fn run_preview(root: &Path) -> Result<()> {
    let config = Config::load(root)?;
    let mut app = App::new(config.variant(), config.motion());

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader);

    drop(guard);
    run_result
}

/// Feed events to the gallery until it asks to quit or input runs dry.
fn drive_app(
    app: &mut App,
    event_reader: &mut dyn EventReader,
    mut draw: impl FnMut(&App) -> Result<()>,
) -> Result<()> {
    while !app.should_quit {
        draw(app)?;

        match event_reader.read_event(TICK_RATE)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Some(_) => {}
            None => app.on_tick(),
        }
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    drive_app(app, event_reader, |app| {
        terminal
            .draw(|f| ui::render(f, app))
            .map(|_| ())
            .context("Failed to draw terminal UI")
    })
}
