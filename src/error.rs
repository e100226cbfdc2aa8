// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while judging an exercise.
//!
//! Exercises never fail: they answer with the sentinel their problem statement
//! asks for. Everything that can go wrong lives at the judge boundary, where
//! JSON arguments are decoded and answers encoded.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("argument {index} is missing")]
    MissingArgument { index: usize },

    #[error("argument {index} is malformed: {source}")]
    BadArgument {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    #[error("operation `{0}` called before the constructor")]
    NotConstructed(String),

    #[error("no problem matches `{0}`")]
    UnknownProblem(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SolveError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SolveError::InvalidInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;
