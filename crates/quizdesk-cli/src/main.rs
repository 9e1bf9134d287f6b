//! quizdesk CLI: console quiz administration for teachers and students.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "quizdesk",
    version,
    about = "Console quiz administration for teachers and students"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding quiz files (overrides config)
    #[arg(long, global = true)]
    quiz_dir: Option<PathBuf>,

    /// Directory holding report files (overrides config)
    #[arg(long, global = true)]
    report_dir: Option<PathBuf>,

    /// Without a subcommand, start an interactive session
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config, the quiz and report directories, and a sample quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdesk=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = commands::resolve_config(cli.config.as_deref(), cli.quiz_dir, cli.report_dir)
        .and_then(|config| match cli.command {
            Some(Commands::Init) => commands::init::execute(&config),
            None => commands::interactive::execute(config),
        });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
