//! **extractor-fixtures** - Native Rust renditions of the sample declarations
//! source extractors are tested against, with a CLI that runs each one.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Fixture behaviors
pub mod core {
    /// Error taxonomy for fixture operations
    pub mod error;
    pub use error::{FixtureError, FixtureResult};

    /// Greeting function, prefixed greeter and uppercase helper
    pub mod greet;
    pub use greet::{Greeter, greet, shout};

    /// Overloaded-method sample
    pub mod sample;
    pub use sample::Sample;

    /// Call-graph sample
    pub mod callers;
    pub use callers::{CallEdge, CallerSample};

    /// Users, orders and products
    pub mod accounts;
    pub use accounts::{AccountDirectory, Order, Product, User, UserDirectory};

    /// Unverified JWT claim lookup
    pub mod token;
}

/// Infrastructure - configuration, logging and output rendering
pub mod infra {
    /// Layered configuration (file + env) with TOML init
    pub mod config;
    pub use self::config::{Config, load_config};

    /// tracing-subscriber setup
    pub mod logging;

    /// Text / JSON / table rendering
    pub mod output;
}

// Strategic re-exports for clean CLI interface
pub use crate::cli::{AppContext, Cli, Commands, OutputFormat};
pub use crate::infra::{Config, load_config};

// Core types for external consumers
pub use crate::core::{
    AccountDirectory, CallEdge, CallerSample, FixtureError, FixtureResult, Greeter, Order, Product, Sample, User,
    UserDirectory, greet, shout,
};
