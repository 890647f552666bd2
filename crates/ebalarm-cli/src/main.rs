use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ebalarm_core::config::{Config, WorkerConfig};
use ebalarm_core::{
    Alarm, AlarmError, CategoryRegistry, CategorySettings, ImportSource, Result, Rgb, TaskResult, Worker,
    BUILTIN_CATEGORIES,
};

mod args;
use args::{CategoryAction, Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            source,
            json,
        }) => handle_parse(&base_dir, &input, source.as_deref(), json),
        Some(Commands::Export {
            input,
            output,
            plc,
            source,
        }) => handle_export(&base_dir, &input, output, plc, source.as_deref()),
        Some(Commands::Category { action }) => handle_category(action, &base_dir),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "ebalarm", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("EBALARM_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".ebalarm"))
        .unwrap_or_else(|| PathBuf::from(".ebalarm"))
}

/// Explicit flag, then last used source, then a guess from the file extension
fn resolve_source(flag: Option<&str>, config: &Config, input: &Path) -> Result<ImportSource> {
    if let Some(name) = flag {
        return name.parse();
    }
    if let Some(source) = config.general.import_source {
        return Ok(source);
    }
    let by_extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            ImportSource::ALL
                .into_iter()
                .find(|source| source.file_extension().eq_ignore_ascii_case(ext))
        });
    Ok(by_extension.unwrap_or(ImportSource::OmronSysmac))
}

/// Foreground side of the worker protocol.
///
/// Results are drained without blocking on a fixed cadence; the worker
/// exiting without a result means the task failed.
struct Session {
    worker: Option<Worker>,
    ready: VecDeque<TaskResult>,
    cadence: Duration,
}

impl Session {
    fn start(config: &WorkerConfig) -> Result<Self> {
        Ok(Self {
            worker: Some(Worker::spawn_with_timeout(config.command_timeout())?),
            ready: VecDeque::new(),
            cadence: config.result_poll(),
        })
    }

    fn worker(&self) -> Result<&Worker> {
        self.worker.as_ref().ok_or(AlarmError::WorkerDisconnected)
    }

    fn wait(&mut self) -> Result<TaskResult> {
        loop {
            let worker = self.worker.as_ref().ok_or(AlarmError::WorkerDisconnected)?;
            let finished = worker.is_finished();
            self.ready.extend(worker.poll());

            if let Some(result) = self.ready.pop_front() {
                return Ok(result);
            }
            if finished {
                if let Some(worker) = self.worker.take() {
                    worker.join()?;
                }
                return Err(AlarmError::WorkerDisconnected);
            }
            thread::sleep(self.cadence);
        }
    }

    fn finish(mut self) -> Result<()> {
        match self.worker.take() {
            Some(worker) => {
                if worker.stop().is_err() {
                    debug!("Worker already stopped");
                }
                worker.join()
            }
            None => Ok(()),
        }
    }
}

fn parse_alarms(
    session: &mut Session,
    registry: CategoryRegistry,
    input: &Path,
    source: ImportSource,
) -> Result<Vec<Alarm>> {
    session
        .worker()?
        .parse(source, input.to_path_buf(), registry)?;

    match session.wait()? {
        TaskResult::Parsed(alarms) => Ok(alarms),
        TaskResult::Exported(path) => {
            debug!("Unexpected export result for {}", path.display());
            Err(AlarmError::WorkerDisconnected)
        }
    }
}

fn handle_parse(base_dir: &Path, input: &Path, source: Option<&str>, json: bool) -> Result<()> {
    let mut config = Config::load(base_dir)?;
    let source = resolve_source(source, &config, input)?;

    let registry = config.registry()?;

    let mut session = Session::start(&config.worker)?;
    let alarms = parse_alarms(&mut session, registry, input, source)?;
    session.finish()?;

    config.general.import_source = Some(source);
    config.save(base_dir)?;

    if json {
        let output = serde_json::to_string_pretty(&alarms).map_err(io::Error::from)?;
        println!("{}", output);
        return Ok(());
    }

    println!();
    for alarm in &alarms {
        let comment = alarm.symbol().comment().lines().next().unwrap_or_default();
        println!(
            "  {:<18} {}  {}",
            alarm.category().label().cyan(),
            alarm.symbol().name(),
            comment.dimmed()
        );
    }
    if !alarms.is_empty() {
        println!();
    }
    println!("{} alarms found.", alarms.len().to_string().bold());
    Ok(())
}

fn handle_export(
    base_dir: &Path,
    input: &Path,
    output: Option<PathBuf>,
    plc: Option<String>,
    source: Option<&str>,
) -> Result<()> {
    let mut config = Config::load(base_dir)?;
    let source = resolve_source(source, &config, input)?;
    let plc_name = plc
        .or_else(|| config.general.plc_name.clone())
        .filter(|name| !name.trim().is_empty())
        .ok_or(AlarmError::PlcNameMissing)?;
    let output = output.unwrap_or_else(|| input.with_extension("xlsx"));
    let registry = config.registry()?;
    let styles = registry.style_table();

    let mut session = Session::start(&config.worker)?;
    let alarms = parse_alarms(&mut session, registry, input, source)?;
    let count = alarms.len();
    println!("{} alarms found.", count.to_string().bold());

    session
        .worker()?
        .export(alarms, plc_name.clone(), output, styles)?;
    let written = match session.wait()? {
        TaskResult::Exported(path) => path,
        TaskResult::Parsed(_) => return Err(AlarmError::WorkerDisconnected),
    };
    session.finish()?;

    config.general.import_source = Some(source);
    config.general.plc_name = Some(plc_name);
    config.save(base_dir)?;

    println!("{} {}", "Alarms saved to".green(), written.display());
    Ok(())
}

fn handle_category(action: CategoryAction, base_dir: &Path) -> Result<()> {
    match action {
        CategoryAction::List { all } => {
            let config = Config::load(base_dir)?;
            let mut shown = 0;
            println!();
            for (slot, settings) in config.category_settings().iter().enumerate() {
                if settings.is_unused() && !all {
                    continue;
                }
                print_category(slot, settings);
                shown += 1;
            }
            if shown == 0 {
                println!("No categories defined.");
                println!();
                println!("Load the presets with: ebalarm category preset");
            }
            println!();
        }
        CategoryAction::Show { slot } => {
            let config = Config::load(base_dir)?;
            let settings = config.category(slot)?;
            println!("{} {}", "Slot:".bold(), slot);
            println!("{} {}", "Name:".bold(), settings.name);
            println!("{} {}", "Filter:".bold(), settings.filter);
            println!(
                "{} {} ({})",
                "Background:".bold(),
                settings.bg_color,
                settings.bg_color.to_hex()
            );
            println!(
                "{} {} ({})",
                "Foreground:".bold(),
                settings.fg_color,
                settings.fg_color.to_hex()
            );
        }
        CategoryAction::Set {
            slot,
            name,
            filter,
            bg,
            fg,
        } => {
            let mut config = Config::load(base_dir)?;
            let mut settings = config.category(slot)?;
            if let Some(name) = name {
                settings.name = name;
            }
            if let Some(filter) = filter {
                settings.filter = filter;
            }
            if let Some(bg) = bg {
                settings.bg_color = bg.parse::<Rgb>()?;
            }
            if let Some(fg) = fg {
                settings.fg_color = fg.parse::<Rgb>()?;
            }
            config.set_category(slot, settings.clone())?;
            config.save(base_dir)?;
            print!("{} ", "Set:".green());
            print_category(slot, &settings);
        }
        CategoryAction::Clear { slot } => {
            let mut config = Config::load(base_dir)?;
            config.clear_category(slot)?;
            config.save(base_dir)?;
            println!("{} slot {}", "Cleared:".green(), slot);
        }
        CategoryAction::Preset { force } => {
            let mut config = Config::load(base_dir)?;
            for (slot, builtin) in BUILTIN_CATEGORIES.iter().enumerate() {
                if !force && !config.category(slot)?.is_unused() {
                    println!(
                        "{} slot {} is in use (use --force to overwrite)",
                        "Skipped:".yellow(),
                        slot
                    );
                    continue;
                }
                let settings = CategorySettings::from(builtin);
                config.set_category(slot, settings.clone())?;
                print!("{} ", "Set:".green());
                print_category(slot, &settings);
            }
            config.save(base_dir)?;
        }
        CategoryAction::Test { name } => {
            let config = Config::load(base_dir)?;
            let registry = config.registry()?;
            match registry.first_match(&name) {
                Some(category) => {
                    let slot = registry
                        .iter()
                        .position(|c| c.id() == category.id())
                        .unwrap_or_default();
                    println!(
                        "{} slot {} {} ({})",
                        "Match:".green(),
                        slot,
                        category.name().bold(),
                        category.filter()
                    );
                }
                None => println!("{} no category matches '{}'", "No match:".yellow(), name),
            }
        }
    }

    Ok(())
}

fn print_category(slot: usize, settings: &CategorySettings) {
    let filter = if settings.filter.is_empty() {
        "(disabled)".dimmed().to_string()
    } else {
        settings.filter.clone()
    };
    println!(
        "  {:>3}  {:<20} {}  bg {} fg {}",
        slot.to_string().cyan(),
        settings.name,
        filter,
        settings.bg_color,
        settings.fg_color
    );
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(AlarmError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
