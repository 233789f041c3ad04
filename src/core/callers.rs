//! Call-graph fixture: a private helper, two methods that call it
//! and one that calls nothing.
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;
use tracing::instrument;

use crate::{
    cli::{AppContext, CallersArgs, OutputFormat},
    infra::output,
};

/// Message returned by the call-free method
pub const STANDALONE_MESSAGE: &str = "No calls here";

#[derive(Debug, Clone, Copy, Default)]
pub struct CallerSample;

/// One static caller -> callee edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Tabled)]
pub struct CallEdge
{
    pub caller: &'static str,
    pub callee: &'static str,
}

impl CallerSample
{
    fn helper_method(&self) -> i32
    {
        10
    }

    pub fn calls_helper(&self) -> i32
    {
        self.helper_method() * 2
    }

    pub fn calls_multiple(&self) -> i32
    {
        let a = self.helper_method();
        let b = self.calls_helper();
        a + b
    }

    pub fn standalone(&self) -> &'static str
    {
        STANDALONE_MESSAGE
    }

    /// Edges an extractor is expected to recover from this type
    pub fn call_edges() -> &'static [CallEdge]
    {
        const EDGES: &[CallEdge] = &[
            CallEdge { caller: "calls_helper", callee: "helper_method" },
            CallEdge { caller: "calls_multiple", callee: "helper_method" },
            CallEdge { caller: "calls_multiple", callee: "calls_helper" },
        ];
        EDGES
    }
}

#[derive(Debug, Serialize, Tabled)]
struct CallResult
{
    method: &'static str,
    result: String,
}

/// `fixtures callers [--edges]`
#[instrument(skip(ctx))]
pub fn run(
    args: CallersArgs,
    ctx: &AppContext,
) -> Result<()>
{
    if args.edges
    {
        let edges = CallerSample::call_edges();
        if ctx.format == OutputFormat::Text
        {
            for edge in edges
            {
                if ctx.color
                {
                    println!("{} -> {}", edge.caller.cyan(), edge.callee);
                }
                else
                {
                    println!("{} -> {}", edge.caller, edge.callee);
                }
            }
            return Ok(());
        }
        return output::print_records(ctx, edges);
    }

    let sample = CallerSample;
    let results = [
        CallResult { method: "calls_helper", result: sample.calls_helper().to_string() },
        CallResult { method: "calls_multiple", result: sample.calls_multiple().to_string() },
        CallResult { method: "standalone", result: sample.standalone().to_string() },
    ];

    if ctx.format == OutputFormat::Text
    {
        for r in &results
        {
            println!("{}: {}", r.method, r.result);
        }
        return Ok(());
    }
    output::print_records(ctx, &results)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn helper_chain_values()
    {
        let s = CallerSample;
        assert_eq!(s.helper_method(), 10);
        assert_eq!(s.calls_helper(), 20);
        assert_eq!(s.calls_multiple(), 30);
    }

    #[test]
    fn standalone_has_no_edges()
    {
        assert_eq!(CallerSample.standalone(), "No calls here");
        assert!(
            CallerSample::call_edges()
                .iter()
                .all(|e| e.caller != "standalone" && e.callee != "standalone")
        );
    }

    #[test]
    fn edges_cover_both_callers()
    {
        let edges = CallerSample::call_edges();
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&CallEdge { caller: "calls_multiple", callee: "calls_helper" }));
    }
}
