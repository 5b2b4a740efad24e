//! Sweep command configuration

use std::ops::RangeInclusive;

use crate::cli::OutputFormat;
use crate::error::TortoiseHareError;

#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Tail lengths to cover
    pub tails: RangeInclusive<usize>,
    /// Cycle lengths to cover
    pub cycles: RangeInclusive<usize>,
    /// Step ceiling per shape
    pub max_steps: usize,
    pub format: OutputFormat,
    /// Exit with an error code when any shape fails verification
    pub error_on_mismatch: bool,
}

impl SweepConfig {
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SweepConfigBuilder {
    tails: Option<RangeInclusive<usize>>,
    cycles: Option<RangeInclusive<usize>>,
    max_steps: Option<usize>,
    format: Option<OutputFormat>,
    error_on_mismatch: Option<bool>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tails(mut self, min: usize, max: usize) -> Self {
        self.tails = Some(min..=max);
        self
    }

    pub fn with_cycles(mut self, min: usize, max: usize) -> Self {
        self.cycles = Some(min..=max);
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_mismatch(mut self, error_on_mismatch: bool) -> Self {
        self.error_on_mismatch = Some(error_on_mismatch);
        self
    }
}

impl crate::common::ConfigBuilder for SweepConfigBuilder {
    type Config = SweepConfig;

    fn build(self) -> Result<Self::Config, TortoiseHareError> {
        let tails = self
            .tails
            .ok_or_else(|| crate::common::missing_field("tails"))?;
        let cycles = self
            .cycles
            .ok_or_else(|| crate::common::missing_field("cycles"))?;

        if tails.is_empty() || cycles.is_empty() {
            return Err(TortoiseHareError::ConfigurationError {
                message: "Range minimum must not exceed its maximum".to_string(),
            });
        }

        Ok(SweepConfig {
            tails,
            cycles,
            max_steps: self
                .max_steps
                .ok_or_else(|| crate::common::missing_field("max_steps"))?,
            format: self
                .format
                .ok_or_else(|| crate::common::missing_field("format"))?,
            error_on_mismatch: self.error_on_mismatch.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = SweepConfig::builder()
            .with_tails(5, 2)
            .with_cycles(1, 3)
            .with_max_steps(100)
            .with_format(OutputFormat::Human)
            .build();

        assert!(matches!(
            result,
            Err(TortoiseHareError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_builder_sets_ranges() {
        let config = SweepConfig::builder()
            .with_tails(0, 6)
            .with_cycles(3, 8)
            .with_max_steps(100)
            .with_format(OutputFormat::Json)
            .with_error_on_mismatch(true)
            .build()
            .unwrap();

        assert_eq!(config.tails, 0..=6);
        assert_eq!(config.cycles, 3..=8);
        assert!(config.error_on_mismatch);
    }
}
