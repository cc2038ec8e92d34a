// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum EncodeError {
    InvalidValue(String),
    Serde(serde_json::Error),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidValue(s) => write!(f, "Invalid value: {}", s),
            EncodeError::Serde(e) => write!(f, "Serialization failed: {}", e),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::InvalidValue(_) => None,
            EncodeError::Serde(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(error: serde_json::Error) -> Self {
        EncodeError::Serde(error)
    }
}

#[derive(Debug)]
pub enum DecodeError {
    Corrupt(String),
    Serde(serde_json::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Corrupt(s) => write!(f, "Corrupt data: {}", s),
            DecodeError::Serde(e) => write!(f, "Deserialization failed: {}", e),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Corrupt(_) => None,
            DecodeError::Serde(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        DecodeError::Serde(error)
    }
}

// Failure type of every mutating store operation. Load-time decode
// failures are not represented here: they are logged and skipped
// per entry, never surfaced to the caller.
#[derive(Debug)]
pub enum StoreError {
    Encode(EncodeError),
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Encode(e) => write!(f, "Encode failure: {}", e),
            StoreError::Io(e) => write!(f, "IO failure: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Encode(e) => Some(e),
            StoreError::Io(e) => Some(e),
        }
    }
}

impl From<EncodeError> for StoreError {
    fn from(error: EncodeError) -> Self {
        StoreError::Encode(error)
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}
