#![deny(clippy::all)]

/**
 * Rebound Template Compiler
 *
 * Normalizes parsed templates into a tree with explicit dynamic-content
 * anchors and lowers helper call sites into code-generation-ready descriptors.
 */

// Core modules
pub mod config;
pub mod error;
pub mod parse_util;
mod version;

// Template tree and block normalization
pub mod ast;
pub mod html_parser;

// Call-site lowering and the per-template driver
pub mod compiler;

// Component registration
pub mod component;

// Re-exports
pub use compiler::{HelperDescriptor, OperandStack, TemplateCompiler};
pub use config::{CompilerConfig, WhitespaceStripping};
pub use error::{CompileError, InternalError, Result, SyntaxError};
pub use version::VERSION;
