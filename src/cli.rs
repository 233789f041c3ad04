use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infra::config::Config;

/// Shared application context resolved once from flags and config
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,            // global --quiet
    pub color: bool,            // stdout is a tty, no --no-color, config allows it
    pub format: OutputFormat,   // --format, else config
    pub config: Config,         // layered file + env config
}

#[derive(Parser)]
#[command(name = "fixtures")]
#[command(about = "Run the sample declarations used to exercise source extractors")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Read configuration from this file instead of searching the cwd
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured one)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Greet a name, or the configured default
    Greet(GreetArgs),

    /// Greet a name with a prefix
    Greeter(GreeterArgs),

    /// Uppercase a string
    Shout(ShoutArgs),

    /// Run the overloaded-method sample
    Sample(SampleArgs),

    /// Run the call-graph sample
    Callers(CallersArgs),

    /// Look up a seeded user
    User(IdArgs),

    /// Derive the order for a user id
    Order(IdArgs),

    /// Look up a catalog product
    Product(IdArgs),

    /// Read the userId claim from a JWT without verifying it
    Token(TokenArgs),

    /// Initialize a fixtures.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

#[derive(Debug, Parser)]
pub struct GreetArgs {
    /// Name to greet
    pub name: Option<String>,
}

#[derive(Debug, Parser)]
pub struct GreeterArgs {
    /// Name to greet
    pub name: String,

    /// Prefix placed before the name
    #[arg(short, long)]
    pub prefix: Option<String>,
}

#[derive(Debug, Parser)]
pub struct ShoutArgs {
    /// Text to uppercase
    pub text: String,
}

#[derive(Debug, Parser)]
pub struct SampleArgs {
    #[command(subcommand)]
    pub command: SampleCommand,
}

#[derive(Debug, Subcommand)]
pub enum SampleCommand {
    /// Print the hello message
    Hello,

    /// Print the initial value
    Value,

    /// Add two or three integers
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
        #[arg(allow_negative_numbers = true)]
        c: Option<i32>,
    },

    /// Uppercase through the static helper
    Util { text: String },
}

#[derive(Debug, Parser)]
pub struct CallersArgs {
    /// List caller -> callee edges instead of results
    #[arg(long)]
    pub edges: bool,
}

#[derive(Debug, Parser)]
pub struct IdArgs {
    /// Numeric id
    pub id: u64,
}

#[derive(Debug, Parser)]
pub struct TokenArgs {
    /// JWT to inspect
    pub token: String,

    /// Reject blank tokens and tolerate unsegmented ones
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Directory to create config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory for completion files
    #[arg(long, conflicts_with = "stdout")]
    pub out_dir: Option<PathBuf>,

    /// Write completions to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
