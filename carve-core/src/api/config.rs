//! Configuration API for document sessions

use crate::api::Error;

/// Default configuration constants
pub mod defaults {
    /// Sentence count above which chunking runs on a thread pool
    pub const PARALLEL_THRESHOLD: usize = 64;
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) threads: Option<usize>, // None = rayon default
    pub(crate) parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Worker threads for parallel chunking
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Sentence count above which chunking goes parallel
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the sentence count above which chunking goes parallel
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.parallel_threshold = Some(sentences);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        if let Some(threshold) = self.parallel_threshold {
            config.parallel_threshold = threshold;
        }

        config.validate()?;
        Ok(config)
    }
}
