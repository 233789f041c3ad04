use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use extractor_fixtures::{
    cli::{AppContext, Cli, Commands},
    core::{accounts, callers, greet, sample},
    infra::{config, logging},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_json)?;

    let config = config::load_config(cli.config.as_deref())?;

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        color: !cli.no_color && config.output.color && std::io::stdout().is_terminal(),
        format: cli.format.unwrap_or(config.output.format),
        config,
    };

    match cli.command {
        Commands::Greet(args) => greet::run_greet(args, &ctx),
        Commands::Greeter(args) => greet::run_greeter(args, &ctx),
        Commands::Shout(args) => greet::run_shout(args, &ctx),
        Commands::Sample(args) => sample::run(args, &ctx),
        Commands::Callers(args) => callers::run(args, &ctx),
        Commands::User(args) => accounts::run_user(args, &ctx),
        Commands::Order(args) => accounts::run_order(args, &ctx),
        Commands::Product(args) => accounts::run_product(args, &ctx),
        Commands::Token(args) => accounts::run_token(args, &ctx),
        Commands::Init(args) => config::init(args, &ctx),
        Commands::Completions(args) => extractor_fixtures::completion::run(args, &ctx),
    }
}
