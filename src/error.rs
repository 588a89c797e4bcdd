//! Error types raised by the icon sprite step.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used by every fallible phase of the step.
pub type StepResult<T> = Result<T, StepError>;

/// Fatal failures. Any of these aborts the step.
#[derive(Debug, Error)]
pub enum StepError {
  /// A directory the step depends on does not exist.
  #[error("FATAL - could not find {role} directory in {}", .path.display())]
  MissingDirectory {
    /// Human readable name of the directory.
    role: String,
    /// Path that was expected to exist.
    path: PathBuf,
  },
  /// A front-end source file could not be read while scanning.
  #[error("failed to read front-end source {}", .path.display())]
  ReadSource {
    /// File that could not be read.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The front-end tree could not be traversed.
  #[error("failed to traverse front-end tree under {}", .path.display())]
  Traverse {
    /// Root of the traversal.
    path: PathBuf,
    /// Underlying directory walk error.
    #[source]
    source: walkdir::Error,
  },
  /// The sprite could not be written.
  #[error("failed to write icon sprite {}", .path.display())]
  WriteManifest {
    /// Sprite location.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The configured icon library produced an unusable import pattern.
  #[error("invalid icon import pattern")]
  InvalidPattern(#[from] regex::Error),
}

/// Per-icon failures. Logged and skipped, never propagated out of the generator.
#[derive(Debug, Error)]
pub enum IconSourceError {
  /// The icon module could not be read.
  #[error("couldn't read source for icon '{icon}' at {}", .path.display())]
  Unreadable {
    /// Icon identifier.
    icon: String,
    /// Module location.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The icon module holds no drawing path.
  #[error("no drawing path found for icon '{icon}' in {}", .path.display())]
  NoPaths {
    /// Icon identifier.
    icon: String,
    /// Module location.
    path: PathBuf,
  },
}
