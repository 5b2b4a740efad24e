//! Race command configuration

use super::GraphSource;
use crate::cli::OutputFormat;
use crate::error::TortoiseHareError;

/// Configuration for the race command
///
/// Runs a single detector to completion and reports the result.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    /// Graph to race over
    pub source: GraphSource,
    /// Start position
    pub start: usize,
    /// Step ceiling guarding against graphs without a reachable cycle
    pub max_steps: usize,
    /// Output format for the report
    pub format: OutputFormat,
    /// Record and print every snapshot
    pub trace: bool,
    /// Maximum number of trace rows to print (None = all)
    pub max_trace_rows: Option<usize>,
    /// Compare the result against the SCC oracle and fail on disagreement
    pub verify: bool,
}

impl RaceConfig {
    pub fn builder() -> RaceConfigBuilder {
        RaceConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RaceConfigBuilder {
    source: Option<GraphSource>,
    start: Option<usize>,
    max_steps: Option<usize>,
    format: Option<OutputFormat>,
    trace: Option<bool>,
    max_trace_rows: Option<Option<usize>>,
    verify: Option<bool>,
}

impl RaceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: GraphSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
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

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = Some(trace);
        self
    }

    pub fn with_max_trace_rows(mut self, max_trace_rows: Option<usize>) -> Self {
        self.max_trace_rows = Some(max_trace_rows);
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = Some(verify);
        self
    }
}

impl crate::common::ConfigBuilder for RaceConfigBuilder {
    type Config = RaceConfig;

    fn build(self) -> Result<Self::Config, TortoiseHareError> {
        Ok(RaceConfig {
            source: self
                .source
                .ok_or_else(|| crate::common::missing_field("source"))?,
            start: self.start.unwrap_or(0),
            max_steps: self
                .max_steps
                .ok_or_else(|| crate::common::missing_field("max_steps"))?,
            format: self
                .format
                .ok_or_else(|| crate::common::missing_field("format"))?,
            trace: self.trace.unwrap_or(false),
            max_trace_rows: self.max_trace_rows.flatten(),
            verify: self.verify.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::graph::TailCycleShape;

    #[test]
    fn test_builder_defaults() {
        let config = RaceConfig::builder()
            .with_source(GraphSource::Shape(TailCycleShape::new(3, 5).unwrap()))
            .with_max_steps(100)
            .with_format(OutputFormat::Json)
            .build()
            .unwrap();

        assert_eq!(config.start, 0);
        assert!(!config.trace);
        assert!(!config.verify);
        assert_eq!(config.max_trace_rows, None);
    }

    #[test]
    fn test_builder_requires_source() {
        let result = RaceConfig::builder()
            .with_max_steps(100)
            .with_format(OutputFormat::Human)
            .build();

        match result {
            Err(TortoiseHareError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: source");
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}
