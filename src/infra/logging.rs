use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Install the global subscriber. `RUST_LOG` wins over the flags.
/// Logs go to stderr so stdout stays machine-readable.
pub fn init(
    verbose: bool,
    json: bool,
) -> Result<(), TryInitError>
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json
    {
        registry
            .with(fmt.json())
            .try_init()
    }
    else
    {
        registry
            .with(fmt.compact())
            .try_init()
    }
}

fn default_directive(verbose: bool) -> &'static str
{
    if verbose { "extractor_fixtures=debug" } else { "extractor_fixtures=warn" }
}
