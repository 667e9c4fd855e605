//! Validation configuration

use crate::error::{Error, Result};
use crate::rules::AlgorithmSyntaxValidator;

/// Default values
pub mod defaults {
    /// Number of algorithm slots of the trigger hardware
    pub const MAX_ALGORITHMS: u32 = 512;

    /// Strict rules are off by default
    pub const STRICT: bool = false;
}

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Algorithm indices must stay below this
    pub max_algorithms: u32,
    /// Also require referenced cuts to exist and function cuts to be of a
    /// permitted type
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_algorithms: defaults::MAX_ALGORITHMS,
            strict: defaults::STRICT,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Strict configuration
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_algorithms == 0 {
            return Err(Error::Configuration(
                "max_algorithms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Validator matching this configuration
    pub fn validator(&self) -> AlgorithmSyntaxValidator {
        if self.strict {
            AlgorithmSyntaxValidator::strict()
        } else {
            AlgorithmSyntaxValidator::new()
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn max_algorithms(mut self, max_algorithms: u32) -> Self {
        self.config.max_algorithms = max_algorithms;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
