// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the device registry.
//!
//! Only device construction can fail. Registry mutations never return an
//! error: operations on an unexpected id degrade to a no-op instead.

use thiserror::Error;

/// Errors raised while constructing or decoding a [`Device`](crate::Device).
///
/// Every construction path (builder, wire message, textual object) validates
/// eagerly and reports the first problem it finds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The device id was missing or empty.
    #[error("device id must not be empty")]
    EmptyId,

    /// A required field was absent.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A field that is not part of the representation was present.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The `type` token did not match any known category.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// The `state` token did not match any known state.
    #[error("unknown state: {0}")]
    UnknownState(String),

    /// A field was present but held a value of the wrong shape.
    #[error("invalid field {field}: {message}")]
    InvalidField {
        /// The offending field.
        field: String,
        /// Description of the problem.
        message: String,
    },

    /// The input could not be read as a message at all.
    #[error("malformed message: {0}")]
    Malformed(String),
}

impl ValidationError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingField(field.to_string())
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, ValidationError>;
