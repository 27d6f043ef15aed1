use std::fmt;

use thiserror::Error;

/// Failure while loading a [`crate::core::ControllerConfig`] from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootSide {
    Left,
    Right,
}

impl fmt::Display for FootSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FootSide::Left => f.write_str("left"),
            FootSide::Right => f.write_str("right"),
        }
    }
}

/// A missing reference detected when a controller is initialized.
///
/// None of these stop the app. The character keeps running with the
/// affected step degraded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("no collider to move with, displacements will ignore collisions")]
    MissingBody,

    #[error("no animator linked, animation playback is disabled")]
    MissingAnimator,

    #[error("camera anchor is missing, camera will not follow")]
    MissingCameraAnchor,

    #[error("head anchor is missing, camera will not follow")]
    MissingHeadAnchor,

    #[error("{side} foot probe is missing, character will never be grounded")]
    MissingFootProbe { side: FootSide },
}

impl SetupError {
    pub fn severity(&self) -> Severity {
        match self {
            SetupError::MissingAnimator => Severity::Warning,
            _ => Severity::Error,
        }
    }
}
