/*
 * Error Module
 *
 * This module defines the error type for parameter binding.
 * The simulation itself cannot fail; only resolving a UI control id can.
 */

use std::fmt;

/// Errors raised while mapping UI controls onto simulator fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// No control is registered under this id.
    UnknownControl(String),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::UnknownControl(id) => write!(f, "Unknown parameter control: {:?}", id),
        }
    }
}

impl std::error::Error for ParamError {}
