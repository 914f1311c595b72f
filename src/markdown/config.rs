//! Configuration loader
//!
//! `defaults/inline-md.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Settings are layered, later layers winning:
//!
//!     1. the embedded defaults
//!     2. configuration files, in the order they were added
//!     3. `INLINE_MD_<SECTION>__<KEY>` environment variables, when enabled
//!     4. explicit settings made on the [`Loader`] (the CLI flags)

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;

use crate::markdown::rendering::LinkAttributes;

const DEFAULT_TOML: &str = include_str!("../../defaults/inline-md.default.toml");

/// Prefix of the environment variables read by [`Loader::with_environment`].
pub const ENV_PREFIX: &str = "INLINE_MD";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub output: OutputConfig,
    pub links: LinkConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format.
    pub format: String,
}

/// Attributes for rendered links. Empty strings disable the attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    pub target: String,
    pub rel: String,
}

impl LinkConfig {
    pub fn attributes(&self) -> LinkAttributes {
        LinkAttributes {
            target: non_empty(&self.target),
            rel: non_empty(&self.rel),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone)]
struct ConfigFile {
    path: PathBuf,
    required: bool,
}

/// Collects configuration layers and builds a [`MarkdownConfig`] from them.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    files: Vec<ConfigFile>,
    environment: bool,
    format: Option<String>,
    plain_links: bool,
}

impl Loader {
    /// A loader that yields the embedded defaults until layers are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer a TOML file. A missing file is an error at build time.
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.add_file(path.into(), true)
    }

    /// Layer a TOML file that may be absent.
    pub fn with_optional_file(self, path: impl Into<PathBuf>) -> Self {
        self.add_file(path.into(), false)
    }

    fn add_file(mut self, path: PathBuf, required: bool) -> Self {
        self.files.push(ConfigFile { path, required });
        self
    }

    /// Read `INLINE_MD_OUTPUT__FORMAT`, `INLINE_MD_LINKS__TARGET` and
    /// `INLINE_MD_LINKS__REL` over the files.
    pub fn with_environment(mut self) -> Self {
        self.environment = true;
        self
    }

    /// Select the output format, overriding every other layer.
    pub fn format(mut self, name: impl Into<String>) -> Self {
        self.format = Some(name.into());
        self
    }

    /// Render links with their `href` only, overriding every other layer.
    pub fn plain_links(mut self, plain: bool) -> Self {
        self.plain_links = plain;
        self
    }

    /// Merge the layers and deserialize the result.
    pub fn build(&self) -> Result<MarkdownConfig, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));

        for file in &self.files {
            let source = File::from(file.path.as_path())
                .format(FileFormat::Toml)
                .required(file.required);
            builder = builder.add_source(source);
        }

        if self.environment {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        if let Some(format) = &self.format {
            builder = builder.set_override("output.format", format.as_str())?;
        }
        if self.plain_links {
            builder = builder
                .set_override("links.target", "")?
                .set_override("links.rel", "")?;
        }

        let config: MarkdownConfig = builder.build()?.try_deserialize()?;
        tracing::debug!(
            format = %config.output.format,
            files = self.files.len(),
            environment = self.environment,
            "loaded configuration"
        );
        Ok(config)
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkdownConfig, ConfigError> {
    Loader::new().build()
}
