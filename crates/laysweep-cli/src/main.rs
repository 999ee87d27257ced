mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{EXIT_CATALOG_ERROR, EXIT_FAILURE, EXIT_LAYOUT_ERROR};
use laysweep_core::Engine;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "laysweep",
    version,
    about = "Find and remove obsolete installer packages in an installation layout"
)]
struct Cli {
    /// Path to the installation layout root directory.
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List obsolete packages which are not included in the catalog.
    ListObsolete,
    /// Remove obsolete packages which are not included in the catalog.
    RemoveObsolete {
        /// Only report what would be removed.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("LAYSWEEP_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    let json_output = cli.json;

    let result = match cli.command {
        Commands::ListObsolete => engine_for(cli.layout.as_deref())
            .and_then(|engine| commands::list_obsolete::run(&engine, json_output)),
        Commands::RemoveObsolete { dry_run } => engine_for(cli.layout.as_deref())
            .and_then(|engine| commands::remove_obsolete::run(&engine, dry_run, json_output)),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("catalog error:") {
                EXIT_CATALOG_ERROR
            } else if msg.starts_with("layout error:") {
                EXIT_LAYOUT_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}

fn engine_for(layout: Option<&std::path::Path>) -> Result<Engine, String> {
    let root = layout.ok_or_else(|| "layout path is not specified".to_owned())?;
    Ok(Engine::new(root))
}
