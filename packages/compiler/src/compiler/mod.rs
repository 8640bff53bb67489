//! Compiler
//!
//! Lowering of helper call sites and the driver that ties normalization and
//! lowering together per template.

pub mod helpers;
pub mod operand_stack;
pub mod quoting;
pub mod template_compiler;

pub use helpers::{
    prepare_helper, prepare_helper_with, HashArgument, HelperCall, HelperDescriptor, HelperParam,
};
pub use operand_stack::{Operand, OperandKind, OperandStack, ParamType};
pub use quoting::{quote_string, JsLiteralRenderer, LiteralRenderer};
pub use template_compiler::TemplateCompiler;
