use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use userdesk::app::Workbench;
use userdesk::kernel::services::adapters::{
    ensure_storage_dir, load_settings, FileStorage, KeybindingService, MemoryStorageHub,
};
use userdesk::kernel::services::ports::{NotifyScope, Settings, SharedStorage};
use userdesk::tui::crossterm::into_input_event;
use userdesk::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use userdesk::tui::view::View;

mod logging;

const USAGE: &str = "usage: userdesk [--storage-dir <path>] [--ephemeral]";
#[cfg(unix)]
const SIGNAL_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Default, PartialEq, Eq)]
struct StartupOptions {
    storage_dir: Option<PathBuf>,
    ephemeral: bool,
    show_help: bool,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum StartupError {
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
    #[error("`{0}` expects a value")]
    MissingValue(&'static str),
    #[error("`--storage-dir` and `--ephemeral` cannot be combined")]
    ConflictingStorage,
}

fn parse_args<I>(args: I) -> Result<StartupOptions, StartupError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = StartupOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--storage-dir" => {
                let value = args
                    .next()
                    .filter(|v| !v.is_empty() && !v.starts_with("--"))
                    .ok_or(StartupError::MissingValue("--storage-dir"))?;
                options.storage_dir = Some(PathBuf::from(value));
            }
            "--ephemeral" => options.ephemeral = true,
            "-h" | "--help" => options.show_help = true,
            other => match other.strip_prefix("--storage-dir=") {
                Some("") => return Err(StartupError::MissingValue("--storage-dir")),
                Some(value) => options.storage_dir = Some(PathBuf::from(value)),
                None => return Err(StartupError::UnknownArgument(arg)),
            },
        }
    }

    if options.ephemeral && options.storage_dir.is_some() {
        return Err(StartupError::ConflictingStorage);
    }
    Ok(options)
}

/// Command line wins over the settings file; the platform data dir is the fallback.
fn resolve_storage_dir(options: &StartupOptions, settings: &Settings) -> io::Result<PathBuf> {
    match options
        .storage_dir
        .clone()
        .or_else(|| settings.storage.dir.clone())
    {
        Some(dir) => Ok(dir),
        None => ensure_storage_dir(),
    }
}

fn open_storage(options: &StartupOptions, settings: &Settings) -> io::Result<Arc<dyn SharedStorage>> {
    let scope = NotifyScope::from_flag(settings.storage.notify_same_context);
    let quota = settings.storage.quota_bytes;

    if options.ephemeral {
        tracing::info!(?scope, "using ephemeral in-memory storage");
        let hub = MemoryStorageHub::with_quota(quota);
        return Ok(Arc::new(hub.context_with_scope(scope)));
    }

    let dir = resolve_storage_dir(options, settings)?;
    let storage = FileStorage::open(&dir, quota, scope).map_err(io::Error::other)?;
    tracing::info!(dir = %storage.dir().display(), ?scope, "using file storage");
    Ok(Arc::new(storage))
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    signals: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| workbench.render(frame, frame.area()))?;
            dirty = false;
        }

        if crossterm::event::poll(workbench.poll_timeout())? {
            if let Some(event) = into_input_event(crossterm::event::read()?) {
                let result = workbench.handle_input(&event);
                if result.is_quit() {
                    return Ok(None);
                }
                dirty |= !result.is_ignored();
            }
        }

        while let Ok(signal) = signals.try_recv() {
            if signal.is_forced() {
                return Ok(Some(signal));
            }
            dirty |= workbench.request_exit();
        }

        dirty |= workbench.tick(Instant::now());
        if workbench.should_quit() {
            return Ok(None);
        }
    }
}

fn main() -> io::Result<()> {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("userdesk: {err}\n{USAGE}");
            std::process::exit(2);
        }
    };
    if options.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    let log_guard = logging::init();
    if let Some(guard) = &log_guard {
        tracing::debug!(dir = %guard.log_dir().display(), "log directory");
    }

    let settings = load_settings();
    let storage = open_storage(&options, &settings)?;

    let mut keybindings = KeybindingService::new();
    let applied = keybindings.apply_rules(&settings.keybindings);
    tracing::info!(applied, "keybindings loaded");

    let mut workbench = Workbench::new(storage, keybindings, &settings.ui);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    userdesk::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
        SIGNAL_GRACE,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let outcome = run(&mut terminal, &mut workbench, &signal_rx);

    drop(workbench);
    drop(terminal);
    drop(guard);

    match outcome {
        Ok(Some(signal)) => {
            tracing::info!(?signal, "terminated by signal");
            drop(log_guard);
            std::process::exit(signal.exit_code());
        }
        Ok(None) => {
            tracing::info!("exit");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "terminal loop failed");
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup.rs"]
mod cli_startup_tests;
