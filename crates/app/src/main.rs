mod cli;
mod config;

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, StudyLogService, StudySummary};
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

use crate::cli::{Args, Command, Invocation};
use crate::config::{LOG_FILTER_ENV, TrackerConfig};

struct DesktopApp {
    study_log: Arc<StudyLogService>,
    export_path: PathBuf,
}

impl UiApp for DesktopApp {
    fn study_log(&self) -> Arc<StudyLogService> {
        Arc::clone(&self.study_log)
    }

    fn export_path(&self) -> PathBuf {
        self.export_path.clone()
    }
}

fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("failed to initialize tracing subscriber: {err}"))?;
    Ok(())
}

fn print_summary(log_path: &std::path::Path, summary: &StudySummary) {
    println!("Study log: {}", log_path.display());
    if summary.is_empty() {
        println!("No study logs yet. Start by logging today's progress.");
        return;
    }

    println!("Entries:             {}", summary.entry_count);
    println!("Total hours studied: {:.2}", summary.total_hours());
    match summary.mean_confidence {
        Some(mean) => println!("Average confidence:  {mean:.1} / 5"),
        None => println!("Average confidence:  -"),
    }
    println!("Current streak:      {} day(s)", summary.streak_days);
    if let Some(last) = summary.last_studied {
        println!("Last studied:        {last}");
    }

    println!();
    println!("Time by domain:");
    for row in &summary.domain_minutes {
        println!("  {:>6} min  {}", row.minutes, row.domain);
    }

    println!();
    println!("Status breakdown:");
    for row in &summary.status_counts {
        println!("  {:>4}  {}", row.count, row.status.label());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = match cli::parse(std::env::args().skip(1)) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            cli::print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            cli::print_usage();
            return Err(err.into());
        }
    };

    init_tracing(args.verbose)?;

    let mut config = TrackerConfig::load()?;
    if let Some(path) = args.log_path {
        config.log.path = path;
    }
    if let Some(out) = args.out {
        config.log.export_path = out;
    }
    let rules = config.validation_rules()?;
    tracing::info!(
        path = %config.log.path.display(),
        min_minutes = rules.bounds.min(),
        max_minutes = rules.bounds.max(),
        require_notes = rules.require_notes,
        "loaded configuration"
    );

    // The CSV file is created here, before any window opens.
    let storage = Storage::csv_file(&config.log.path).await?;
    let study_log = Arc::new(StudyLogService::new(
        Clock::default_clock(),
        storage.study_log,
        rules,
    ));

    match args.command {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                study_log,
                export_path: config.log.export_path,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("CCSP Study Tracker")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Summary => {
            let summary = study_log.aggregate().await?;
            print_summary(&config.log.path, &summary);
            Ok(())
        }
        Command::Export => {
            let written = study_log.export_to(&config.log.export_path).await?;
            println!(
                "Exported {written} bytes to {}",
                config.log.export_path.display()
            );
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
