use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cli::{AppContext, InitArgs, OutputFormat},
    core::greet::{DEFAULT_NAME, DEFAULT_PREFIX},
};

/// Config file names searched in the working directory, first hit wins
pub const CONFIG_FILES: [&str; 4] = ["fixtures.toml", ".fixtures.toml", "fixtures.json", "fixtures.yaml"];

/// Environment variable prefix; nested keys use `__`
pub const ENV_PREFIX: &str = "FIXTURES";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Greeting defaults
    pub greet: GreetConfig,

    /// Output defaults
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetConfig
{
    /// Name used by `greet` without an argument
    pub default_name: String,

    /// Prefix used by `greeter` without --prefix
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig
{
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for GreetConfig
{
    fn default() -> Self
    {
        Self { default_name: DEFAULT_NAME.to_string(), prefix: DEFAULT_PREFIX.to_string() }
    }
}

impl Default for OutputConfig
{
    fn default() -> Self
    {
        Self { format: OutputFormat::Text, color: true }
    }
}

/// Load configuration from `explicit`, or the first of [`CONFIG_FILES`]
/// under `dir`, then overlay `FIXTURES_*` environment variables.
pub fn load_config_from(
    dir: &Path,
    explicit: Option<&Path>,
) -> Result<Config>
{
    let mut builder = config::Config::builder();

    match explicit
    {
        Some(path) =>
        {
            if !path.exists()
            {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            builder = builder.add_source(config::File::from(path));
        }
        None =>
        {
            if let Some(path) = CONFIG_FILES
                .iter()
                .map(|name| dir.join(name))
                .find(|p| p.exists())
            {
                debug!(path = %path.display(), "using config file");
                builder = builder.add_source(config::File::from(path.as_path()));
            }
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    );

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

/// Load configuration relative to the current directory
pub fn load_config(explicit: Option<&Path>) -> Result<Config>
{
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    load_config_from(&cwd, explicit)
}

/// Path `init` writes to inside `dir`
pub fn config_path(dir: &Path) -> PathBuf
{
    dir.join(CONFIG_FILES[0])
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = config_path(&args.path);

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        if ctx.color
        {
            println!("{} Created config file at {}", "✓".green(), config_path.display());
        }
        else
        {
            println!("Created config file at {}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use super::*;

    fn tempdir() -> assert_fs::TempDir
    {
        assert_fs::TempDir::new().expect("tempdir")
    }

    #[test]
    fn defaults_without_files()
    {
        let dir = tempdir();
        let cfg = load_config_from(dir.path(), None).unwrap();
        assert_eq!(cfg.greet.default_name, "world");
        assert_eq!(cfg.greet.prefix, "hi");
        assert_eq!(cfg.output.format, OutputFormat::Text);
    }

    #[test]
    fn partial_toml_keeps_other_defaults()
    {
        let dir = tempdir();
        fs::write(dir.path().join("fixtures.toml"), "[greet]\nprefix = \"yo\"\n").unwrap();
        let cfg = load_config_from(dir.path(), None).unwrap();
        assert_eq!(cfg.greet.prefix, "yo");
        assert_eq!(cfg.greet.default_name, "world");
        assert!(cfg.output.color);
    }

    #[test]
    fn explicit_path_must_exist()
    {
        let dir = tempdir();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_from(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml()
    {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, Config::default());
        assert!(text.contains("default_name = \"world\""));
    }
}
