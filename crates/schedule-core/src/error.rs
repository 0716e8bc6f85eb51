//! Domain Errors
//!
//! Error types for schedule edits, roster loading and PDF export.

use thiserror::Error;

/// Result type for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Reasons a submission or edit activation is refused.
///
/// A refused operation never changes the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The person is already booked in another group (or twice in this form)
    #[error("{name} is already assigned to a task.")]
    AlreadyAssigned { name: String },

    #[error("A foreman must be selected.")]
    MissingForeman,

    #[error("No assignment group at position {0}.")]
    GroupNotFound(usize),
}

/// Roster loading errors
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Invalid roster JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Export pipeline errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: raster is {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("PDF assembly failed: {0}")]
    Pdf(String),

    /// Failures reported by the browser (canvas, blob, download)
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type for the export pipeline
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_assigned_names_person() {
        let err = ScheduleError::AlreadyAssigned { name: "Ben Swan".to_string() };
        assert_eq!(err.to_string(), "Ben Swan is already assigned to a task.");
    }

    #[test]
    fn test_roster_error_from_json() {
        let parse = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: RosterError = parse.into();
        assert!(err.to_string().starts_with("Invalid roster JSON"));
    }
}
