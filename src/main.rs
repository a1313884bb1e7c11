//! wge-cli: scaffold games powered by the WGE engine.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wge_cli::cli::{self, Acquisition, NewOptions};
use wge_cli::interactive::{LinePrompter, Prompter, TerminalPrompter};
use wge_cli::template::{TemplateCatalog, DEFAULT_TEMPLATE_BASE};
use wge_cli::GitMaterializer;

#[derive(Parser)]
#[command(name = "wge-cli")]
#[command(version)]
#[command(about = "Manage games powered by WGE")]
#[command(
    long_about = "wge-cli initializes a customized template to start making a game out of it \
                  based upon the WGE engine/framework."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `new` subcommand
#[derive(Parser)]
struct NewArgs {
    /// Project name (asked for interactively when omitted)
    name: Option<String>,

    /// Use a predefined YAML config file
    #[arg(short, long, value_name = "PATH", conflicts_with = "name")]
    config: Option<PathBuf>,

    /// Directory to create the project in
    #[arg(long, value_name = "DIR", default_value = ".")]
    path: PathBuf,

    /// Location prefix of the template repositories
    #[arg(long, env = "WGE_TEMPLATE_BASE", default_value = DEFAULT_TEMPLATE_BASE)]
    template_base: String,

    /// Select the template without cloning it
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a game powered by WGE
    ///
    /// Initialize a project with either an interactive form or a YAML
    /// configuration file where all needed game properties are specified.
    New(NewArgs),

    /// Document the project config file format
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print a commented example config file
    Example,
    /// Print the JSON Schema of the config file
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        Commands::New(args) => {
            let options = NewOptions {
                acquisition: Acquisition::from_args(args.name, args.config)?,
                parent_dir: args.path,
                catalog: TemplateCatalog::new(args.template_base),
                dry_run: args.dry_run,
                quiet: cli.quiet,
            };
            let mut prompter = stdin_prompter();
            let materializer = GitMaterializer::new().with_progress(!cli.quiet);
            cli::run_new(options, prompter.as_mut(), &materializer, &mut io::stdout())?;
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Example => cli::run_config_example(&mut io::stdout()),
            ConfigAction::Schema { output } => cli::run_config_schema(output, &mut io::stdout()),
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "wge-cli", &mut io::stdout());
            Ok(())
        }
    }
}

/// Terminal prompts on a TTY, plain line prompts when stdin is piped.
fn stdin_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter::new())
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stderr()))
    }
}
