// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Replaying operation logs against design exercises.

use super::Args;
use crate::error::{Result, SolveError};
use serde_json::Value;
use tracing::trace;

/// Runs `[names, arguments]` against a fresh instance.
///
/// `class` names the constructor: each occurrence builds a new instance with
/// `build`. Any other name goes to `call`. The answer holds one entry per
/// operation, `null` for constructors and void methods.
pub(crate) fn replay<S>(
    args: &Args,
    class: &str,
    mut build: impl FnMut(&Args) -> Result<S>,
    mut call: impl FnMut(&mut S, &str, &Args) -> Result<Value>,
) -> Result<Value> {
    let mut instance: Option<S> = None;
    let mut answers = Vec::new();
    for (name, op_args) in args.operations()? {
        trace!(class, op = name.as_str(), "replay");
        if name == class {
            instance = Some(build(&op_args)?);
            answers.push(Value::Null);
            continue;
        }
        let state = instance
            .as_mut()
            .ok_or_else(|| SolveError::NotConstructed(name.clone()))?;
        answers.push(call(state, &name, &op_args)?);
    }
    Ok(Value::Array(answers))
}

/// Answer of a void method.
pub(crate) fn unit() -> Result<Value> {
    Ok(Value::Null)
}

pub(crate) fn unknown(op: &str) -> SolveError {
    SolveError::UnknownOperation(op.to_string())
}
