//! Overloaded-method fixture. Two `sum` arities become `sum`
//! and `sum3`; the static uppercase helper is `Sample::util`.
use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;
use tracing::instrument;

use crate::{
    cli::{AppContext, SampleArgs, SampleCommand},
    core::{
        error::{FixtureError, FixtureResult},
        greet::shout,
    },
    infra::output,
};

/// What `Sample::hello` produces
pub const HELLO: &str = "hi";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Sample
{
    value: i32,
}

impl Sample
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn value(&self) -> i32
    {
        self.value
    }

    pub fn hello(&self) -> &'static str
    {
        HELLO
    }

    pub fn sum(
        &self,
        a: i32,
        b: i32,
    ) -> FixtureResult<i32>
    {
        a.checked_add(b)
            .ok_or(FixtureError::Overflow("sum"))
    }

    pub fn sum3(
        &self,
        a: i32,
        b: i32,
        c: i32,
    ) -> FixtureResult<i32>
    {
        a.checked_add(b)
            .and_then(|ab| ab.checked_add(c))
            .ok_or(FixtureError::Overflow("sum3"))
    }

    /// Static helper, same result as [`shout`]
    pub fn util(s: &str) -> String
    {
        shout(s)
    }
}

#[derive(Debug, Serialize, Tabled)]
struct SampleOutput
{
    method: &'static str,
    result: String,
}

/// `fixtures sample <hello|value|sum|util>`
#[instrument(skip(ctx))]
pub fn run(
    args: SampleArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let sample = Sample::new();

    let record = match args.command
    {
        SampleCommand::Hello => SampleOutput { method: "hello", result: sample.hello().to_string() },
        SampleCommand::Value => SampleOutput { method: "value", result: sample.value().to_string() },
        SampleCommand::Sum { a, b, c: None } =>
        {
            SampleOutput { method: "sum", result: sample.sum(a, b)?.to_string() }
        }
        SampleCommand::Sum { a, b, c: Some(c) } =>
        {
            SampleOutput { method: "sum3", result: sample.sum3(a, b, c)?.to_string() }
        }
        SampleCommand::Util { text } => SampleOutput { method: "util", result: Sample::util(&text) },
    };

    let text = record.result.clone();
    output::print_record(ctx, &record, &text)
}
