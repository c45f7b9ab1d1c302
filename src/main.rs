use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doxyclean::cli::commands::clean::{self, CleanOptions};

#[derive(Parser)]
#[command(name = "doxyclean")]
#[command(
    version,
    about = "Converts the XML files generated by Doxygen to be more easily read and more catered to Objective-C",
    disable_help_flag = true
)]
struct Cli {
    #[arg(
        short = 'i',
        long,
        value_name = "INDIR",
        help = "Directory with XML files generated by Doxygen [default: current directory]"
    )]
    input: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "OUTDIR",
        help = "Directory to place the cleaned XML files [default: current directory]"
    )]
    output: Option<PathBuf>,

    #[arg(
        short = 'h',
        long,
        help = "Convert the cleaned XML to XHTML styled similarly to Apple's documentation"
    )]
    html: bool,

    #[arg(long, short, help = "Configuration file merged over all other sources")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Directory holding the XSLT templates and css/")]
    templates: Option<PathBuf>,

    #[arg(long, value_name = "PROGRAM", help = "XSLT engine executable")]
    engine: Option<String>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,

    #[arg(long, action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mdoxyclean encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    // Bare invocation prints usage and fails
    if std::env::args_os().len() <= 1 {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    match run_cli() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let summary = clean::run(CleanOptions {
        input: cli.input,
        output: cli.output,
        html: cli.html,
        config: cli.config,
        templates: cli.templates,
        engine: cli.engine,
    })?;

    Ok(summary.is_success())
}
