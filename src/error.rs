//! Error types returned by the containers and hash strategies.

use std::fmt;

/// Failure to find a key in a hash table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    KeyNotFound,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::KeyNotFound => write!(f, "key not found"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Failure to read from a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` or `peek` was called with no elements queued.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Invalid input handed to a hash strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// No key was supplied.
    MissingKey,
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::MissingKey => write!(f, "cannot hash a missing key"),
        }
    }
}

impl std::error::Error for HashError {}

/// Rejected construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Load factor outside `(0, 1]`, or NaN.
    InvalidLoadFactor(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLoadFactor(lf) => {
                write!(f, "load factor {} is outside (0, 1]", lf)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
