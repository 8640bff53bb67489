//! Compiler Errors
//!
//! Two families of failure exist. A [`SyntaxError`] is caused by the template
//! author and is reported with the offending source text. An
//! [`InternalError`] means an upstream pass handed the compiler a tree or an
//! operand stack it never should have; it aborts the current template.
//!
//! Either way only the template being compiled is lost. Nothing here is fatal
//! to the process.

use crate::ast::NodeKind;
use crate::compiler::OperandKind;
use crate::parse_util::{span_suffix, ParseSourceSpan};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl CompileError {
    pub fn is_internal(&self) -> bool {
        matches!(self, CompileError::Internal(_))
    }
}

/// Errors in template source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("Invalid block parameters syntax: '{}'{}", .params, span_suffix(.span))]
    InvalidBlockParams {
        params: String,
        span: Option<ParseSourceSpan>,
    },
}

/// Compiler defects surfaced while transforming a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("{kind} has no child sequence; only Program and ElementNode accept children")]
    NotAParent { kind: NodeKind },

    #[error("operand stack underflow while reading {expected} for {frame}")]
    StackUnderflow {
        expected: OperandKind,
        frame: &'static str,
    },

    #[error("operand stack mismatch for {frame}: expected {expected}, found {found}")]
    OperandMismatch {
        expected: OperandKind,
        found: OperandKind,
        frame: &'static str,
    },
}
