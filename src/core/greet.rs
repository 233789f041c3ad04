//! Greeting fixture: a free function, a prefixed greeter and a
//! stateless uppercase helper.
use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, instrument};

use crate::{
    cli::{AppContext, GreetArgs, GreeterArgs, ShoutArgs},
    infra::output,
};

/// Name used when `greet` is called without one
pub const DEFAULT_NAME: &str = "world";

/// Prefix used when a `Greeter` is built without one
pub const DEFAULT_PREFIX: &str = "hi";

/// Greet `name`, falling back to [`DEFAULT_NAME`]
pub fn greet(name: Option<&str>) -> String
{
    format!("hello {}", name.unwrap_or(DEFAULT_NAME))
}

/// Uppercase `s`; independent of any greeter state
pub fn shout(s: &str) -> String
{
    s.to_uppercase()
}

/// Greets with a prefix chosen at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeter
{
    prefix: String,
}

impl Greeter
{
    pub fn new(prefix: Option<&str>) -> Self
    {
        Self { prefix: prefix.unwrap_or(DEFAULT_PREFIX).to_string() }
    }

    pub fn prefix(&self) -> &str
    {
        &self.prefix
    }

    pub fn greet(
        &self,
        name: &str,
    ) -> String
    {
        format!("{} {}", self.prefix, name)
    }
}

impl Default for Greeter
{
    fn default() -> Self
    {
        Self::new(None)
    }
}

/// Single-column record for json/table output
#[derive(Debug, Serialize, Tabled)]
struct Greeting
{
    greeting: String,
}

/// `fixtures greet [NAME]`
#[instrument(skip(ctx))]
pub fn run_greet(
    args: GreetArgs,
    ctx: &AppContext,
) -> Result<()>
{
    // Explicit name wins, then the configured default
    let name = args
        .name
        .as_deref()
        .unwrap_or(&ctx.config.greet.default_name);

    let greeting = greet(Some(name));
    debug!(%greeting, "built greeting");

    output::print_record(ctx, &Greeting { greeting: greeting.clone() }, &greeting)
}

/// `fixtures greeter [--prefix P] NAME`
#[instrument(skip(ctx))]
pub fn run_greeter(
    args: GreeterArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let prefix = args
        .prefix
        .as_deref()
        .unwrap_or(&ctx.config.greet.prefix);

    let greeter = Greeter::new(Some(prefix));
    let greeting = greeter.greet(&args.name);
    debug!(prefix = greeter.prefix(), %greeting, "greeter output");

    output::print_record(ctx, &Greeting { greeting: greeting.clone() }, &greeting)
}

/// Single-column record for the shout command
#[derive(Debug, Serialize, Tabled)]
struct Shouted
{
    shouted: String,
}

/// `fixtures shout TEXT`
pub fn run_shout(
    args: ShoutArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let shouted = shout(&args.text);
    output::print_record(ctx, &Shouted { shouted: shouted.clone() }, &shouted)
}
