use std::fmt;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    OutOnlyForExport,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::OutOnlyForExport => write!(f, "--out is only valid with `export`"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ui,
    Summary,
    Export,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "summary" => Some(Self::Summary),
            "export" => Some(Self::Export),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(Args),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    /// Overrides `log.path`.
    pub log_path: Option<PathBuf>,
    /// Overrides `log.export_path` for `export`.
    pub out: Option<PathBuf>,
    pub verbose: bool,
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [ui]      [--log <csv>] [--verbose]");
    eprintln!("  app summary   [--log <csv>] [--verbose]");
    eprintln!("  app export    [--log <csv>] [--out <csv>] [--verbose]");
    eprintln!();
    eprintln!("Config files:");
    eprintln!("  ~/.config/study-tracker/config.toml, ./study-tracker.toml");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_TRACKER_LOG__PATH, STUDY_TRACKER_LOG__EXPORT_PATH,");
    eprintln!("  STUDY_TRACKER_RULES__MIN_MINUTES, STUDY_TRACKER_RULES__MAX_MINUTES,");
    eprintln!("  STUDY_TRACKER_RULES__REQUIRE_NOTES, STUDY_TRACKER_LOG (log filter)");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    args.next()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .ok_or(ArgsError::MissingValue { flag })
}

/// Parse everything after the program name.
///
/// With no subcommand the desktop window is launched.
pub fn parse(argv: impl IntoIterator<Item = String>) -> Result<Invocation, ArgsError> {
    let mut iter = argv.into_iter().peekable();

    let command = match iter.peek().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownCommand(first.into()))?
        }
    };
    if iter.peek().is_some_and(|first| !first.starts_with('-')) {
        iter.next();
    }

    let mut args = Args {
        command,
        log_path: None,
        out: None,
        verbose: false,
    };

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--log" => args.log_path = Some(require_value(&mut iter, "--log")?),
            "--out" if command == Command::Export => {
                args.out = Some(require_value(&mut iter, "--out")?);
            }
            "--out" => return Err(ArgsError::OutOnlyForExport),
            "--verbose" | "-v" => args.verbose = true,
            "--help" | "-h" => return Ok(Invocation::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Invocation::Run(args))
}
