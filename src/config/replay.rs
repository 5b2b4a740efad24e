//! Replay command configuration

use std::time::Duration;

use super::GraphSource;
use crate::error::TortoiseHareError;

/// Configuration for the replay command
///
/// Replay steps the detector one transition at a time and prints every
/// snapshot, pausing `delay` between transitions.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub source: GraphSource,
    pub start: usize,
    pub max_steps: usize,
    pub delay: Duration,
}

impl ReplayConfig {
    pub fn builder() -> ReplayConfigBuilder {
        ReplayConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ReplayConfigBuilder {
    source: Option<GraphSource>,
    start: Option<usize>,
    max_steps: Option<usize>,
    delay: Option<Duration>,
}

impl ReplayConfigBuilder {
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

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl crate::common::ConfigBuilder for ReplayConfigBuilder {
    type Config = ReplayConfig;

    fn build(self) -> Result<Self::Config, TortoiseHareError> {
        Ok(ReplayConfig {
            source: self
                .source
                .ok_or_else(|| crate::common::missing_field("source"))?,
            start: self.start.unwrap_or(0),
            max_steps: self
                .max_steps
                .ok_or_else(|| crate::common::missing_field("max_steps"))?,
            delay: self.delay.unwrap_or(Duration::ZERO),
        })
    }
}
