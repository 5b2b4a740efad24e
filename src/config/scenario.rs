//! Scenario files and graph sources
//!
//! A scenario is a small TOML file describing the graph to race over:
//!
//! ```toml
//! tail_length = 3
//! cycle_length = 5
//! start = 0
//! max_steps = 1000
//! ```
//!
//! or, for an arbitrary functional graph, an explicit successor table:
//!
//! ```toml
//! successors = [1, 2, 3, 4, 2]
//! ```

use std::path::Path;

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::detector::CycleDetector;
use crate::error::TortoiseHareError;
use crate::graph::{CycleFacts, FunctionalGraph, TailCycleShape};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub tail_length: Option<usize>,
    pub cycle_length: Option<usize>,
    pub successors: Option<Vec<usize>>,
    pub start: Option<usize>,
    pub max_steps: Option<usize>,
}

impl Scenario {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TortoiseHareError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), content)
    }

    pub fn parse_str(name: &str, content: String) -> Result<Self> {
        let scenario: Scenario = toml::from_str(&content)
            .map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

                TortoiseHareError::TomlParseError(Box::new(crate::error::TomlParseError {
                    file: name.to_string(),
                    source_code: NamedSource::new(name, content.clone()),
                    span,
                    source: e,
                }))
            })?;

        if scenario.successors.is_some()
            && (scenario.tail_length.is_some() || scenario.cycle_length.is_some())
        {
            return Err(TortoiseHareError::ConfigurationError {
                message: format!(
                    "scenario '{name}' sets both a successor table and a tail/cycle shape"
                ),
            }
            .into());
        }

        Ok(scenario)
    }
}

/// The functional graph a command runs over
#[derive(Debug, Clone)]
pub enum GraphSource {
    Shape(TailCycleShape),
    Table(FunctionalGraph),
}

impl GraphSource {
    pub fn label(&self) -> String {
        match self {
            GraphSource::Shape(shape) => shape.to_string(),
            GraphSource::Table(graph) => format!("table of {} nodes", graph.node_count()),
        }
    }

    /// Point `detector` at this graph, starting from `start`
    pub fn configure(
        &self,
        detector: &mut CycleDetector<usize>,
        start: usize,
    ) -> Result<(), TortoiseHareError> {
        if start >= self.node_count() {
            return Err(TortoiseHareError::ConfigurationError {
                message: format!(
                    "start position {start} is outside the graph's {} nodes",
                    self.node_count()
                ),
            });
        }

        match self {
            GraphSource::Shape(shape) => detector.configure(shape.successor_fn(), start),
            GraphSource::Table(graph) => detector.configure(graph.successor_fn(), start),
        }
        Ok(())
    }

    /// Tail and cycle facts from the SCC oracle
    pub fn expected(&self, start: usize) -> Result<CycleFacts, TortoiseHareError> {
        match self {
            GraphSource::Shape(shape) => shape.to_functional_graph()?.analyze(start),
            GraphSource::Table(graph) => graph.analyze(start),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            GraphSource::Shape(shape) => shape.node_count(),
            GraphSource::Table(graph) => graph.node_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_shape_scenario() {
        let scenario = Scenario::parse_str(
            "shape.toml",
            "tail_length = 3\ncycle_length = 5\nstart = 1\nmax_steps = 50\n".to_string(),
        )
        .unwrap();

        assert_eq!(
            scenario,
            Scenario {
                tail_length: Some(3),
                cycle_length: Some(5),
                successors: None,
                start: Some(1),
                max_steps: Some(50),
            }
        );
    }

    #[test]
    fn test_parse_table_scenario_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "successors = [1, 2, 3, 4, 2]").unwrap();

        let scenario = Scenario::parse_file(file.path()).unwrap();
        assert_eq!(scenario.successors, Some(vec![1, 2, 3, 4, 2]));
        assert_eq!(scenario.tail_length, None);
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let result = Scenario::parse_str("bad.toml", "tail_length = = 3".to_string());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid TOML syntax in 'bad.toml'"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Scenario::parse_str("typo.toml", "tail = 3".to_string()).is_err());
    }

    #[test]
    fn test_table_and_shape_conflict() {
        let err = Scenario::parse_str(
            "both.toml",
            "successors = [0]\ncycle_length = 1".to_string(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("both a successor table"));
    }

    #[test]
    fn test_missing_file() {
        let err = Scenario::parse_file(Path::new("/nonexistent/scenario.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_shape_source_rejects_start_past_last_node() {
        let source = GraphSource::Shape(TailCycleShape::new(1, 2).unwrap());
        let mut detector = CycleDetector::new();

        assert!(source.configure(&mut detector, 3).is_err());
        assert!(source.configure(&mut detector, 2).is_ok());
    }

    #[test]
    fn test_table_source_rejects_out_of_range_start() {
        let source = GraphSource::Table(FunctionalGraph::from_successors(vec![0, 0]).unwrap());
        let mut detector = CycleDetector::new();

        assert!(source.configure(&mut detector, 5).is_err());
        assert!(!detector.is_configured());
    }

    #[test]
    fn test_expected_from_shape() {
        let source = GraphSource::Shape(TailCycleShape::new(3, 5).unwrap());

        let facts = source.expected(0).unwrap();
        assert_eq!((facts.tail_length, facts.cycle_start, facts.cycle_length), (3, 3, 5));
        assert_eq!(source.label(), "tail=3 cycle=5");
    }
}
