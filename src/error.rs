//! Errors raised when binding fields to host controls

use crate::host::ControlId;

/// Errors that can occur when creating a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The control handle is the host's null handle
    NullControl,
    /// The control already backs another field
    AlreadyBound(ControlId),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullControl => write!(f, "cannot bind a field to the null control"),
            Self::AlreadyBound(control) => {
                write!(f, "{} is already bound to a text field", control)
            }
        }
    }
}

impl std::error::Error for FieldError {}
