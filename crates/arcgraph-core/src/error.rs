//! Error types and exit codes for arcgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad handle, missing node, unreachable target, bad records)

mod macros;

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeHandle;

/// Exit codes for the arcgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph or record problems (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph errors (exit code 3)
    #[error("handle {handle} is out of range for a graph of capacity {capacity}")]
    InvalidHandle { handle: NodeHandle, capacity: usize },

    #[error("slot {handle} is already occupied")]
    OccupiedSlot { handle: NodeHandle },

    #[error("no node at handle {handle}")]
    MissingEndpoint { handle: NodeHandle },

    #[error("arc {from} -> {to} already exists")]
    DuplicateArc { from: NodeHandle, to: NodeHandle },

    #[error("arc {from} -> {to} has a negative weight")]
    NegativeWeight { from: NodeHandle, to: NodeHandle },

    #[error("arc {from} -> {to} has a weight that cannot be ordered (NaN)")]
    UnorderedWeight { from: NodeHandle, to: NodeHandle },

    #[error("path cost overflows the weight type on arc {from} -> {to}")]
    CostOverflow { from: NodeHandle, to: NodeHandle },

    #[error("{to} is not reachable from {from}")]
    UnreachableTarget { from: NodeHandle, to: NodeHandle },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid record{} at line {line}: {reason}", source_suffix(.path))]
    Parse {
        path: Option<PathBuf>,
        line: usize,
        reason: String,
    },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a record parse error at a 1-based line
    pub fn parse(path: Option<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            path,
            line,
            reason: reason.into(),
        }
    }

    /// Attach a file path to a parse error that was raised from in-memory text
    pub fn with_path(self, source: &std::path::Path) -> Self {
        match self {
            GraphError::Parse {
                path: None,
                line,
                reason,
            } => GraphError::Parse {
                path: Some(source.to_path_buf()),
                line,
                reason,
            },
            other => other,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::InvalidValue { .. }
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::InvalidHandle { .. }
            | GraphError::OccupiedSlot { .. }
            | GraphError::MissingEndpoint { .. }
            | GraphError::DuplicateArc { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::UnorderedWeight { .. }
            | GraphError::CostOverflow { .. }
            | GraphError::UnreachableTarget { .. }
            | GraphError::NotFound { .. }
            | GraphError::Parse { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidHandle { .. } => "invalid_handle",
            GraphError::OccupiedSlot { .. } => "occupied_slot",
            GraphError::MissingEndpoint { .. } => "missing_endpoint",
            GraphError::DuplicateArc { .. } => "duplicate_arc",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::UnorderedWeight { .. } => "unordered_weight",
            GraphError::CostOverflow { .. } => "cost_overflow",
            GraphError::UnreachableTarget { .. } => "unreachable_target",
            GraphError::NotFound { .. } => "not_found",
            GraphError::Parse { .. } => "parse_error",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

fn source_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type alias for arcgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = GraphError::OccupiedSlot {
            handle: NodeHandle::new(2),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);

        let err = GraphError::UnknownFormat("xml".to_string());
        assert_eq!(err.exit_code(), ExitCode::Usage);

        let err = GraphError::Other("boom".to_string());
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = GraphError::DuplicateArc {
            from: NodeHandle::new(0),
            to: NodeHandle::new(1),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "duplicate_arc");
        assert_eq!(json["error"]["message"], "arc 0 -> 1 already exists");
    }

    #[test]
    fn test_with_path_only_fills_missing_path() {
        let err = GraphError::parse(None, 4, "bad weight").with_path(std::path::Path::new("a.txt"));
        match err {
            GraphError::Parse { path, line, .. } => {
                assert_eq!(path, Some(PathBuf::from("a.txt")));
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_message_names_file() {
        let err = GraphError::parse(None, 2, "bad handle");
        assert_eq!(err.to_string(), "invalid record at line 2: bad handle");

        let err = err.with_path(std::path::Path::new("arcs.txt"));
        assert_eq!(
            err.to_string(),
            "invalid record in arcs.txt at line 2: bad handle"
        );
    }
}
