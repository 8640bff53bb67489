//! Helper-Call Lowering
//!
//! Reduces the operands of one call site into a flat descriptor that code
//! generation can emit without looking at the stack again.

use super::operand_stack::{OperandKind, OperandStack, ParamType};
use super::quoting::{JsLiteralRenderer, LiteralRenderer};
use crate::error::{InternalError, Result};
use serde::Serialize;
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperParam {
    pub param_type: ParamType,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashArgument {
    pub key: String,
    pub param_type: ParamType,
    pub value: String,
}

/// A call site read back off the operand stack, arguments in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCall {
    pub name: String,
    pub params: SmallVec<[HelperParam; 4]>,
    pub hash: SmallVec<[HashArgument; 4]>,
    pub program: Option<usize>,
    pub inverse: Option<usize>,
}

/// What code generation needs to emit one helper invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelperDescriptor {
    pub name: String,
    pub params: String,
    pub hash: String,
    pub options: Vec<String>,
}

impl HelperCall {
    /// Pop one call site with `positional_count` params off `stack`.
    ///
    /// On error the stack is left partially consumed and must be discarded
    /// along with the template being compiled.
    pub fn reduce(stack: &mut OperandStack, positional_count: usize) -> Result<Self> {
        let hash_count = stack.pop_hash_count("hash pair count")?;
        ensure_frames(stack, hash_count, 3, "hash pair")?;

        let mut hash: SmallVec<[HashArgument; 4]> = SmallVec::new();
        for _ in 0..hash_count {
            let value = stack.pop_value("hash pair")?;
            let param_type = stack.pop_type("hash pair")?;
            let key = stack.pop_key("hash pair")?;
            hash.push(HashArgument {
                key,
                param_type,
                value,
            });
        }
        hash.reverse();

        ensure_frames(stack, positional_count, 2, "positional param")?;
        let mut params: SmallVec<[HelperParam; 4]> = SmallVec::new();
        for _ in 0..positional_count {
            let value = stack.pop_value("positional param")?;
            let param_type = stack.pop_type("positional param")?;
            params.push(HelperParam { param_type, value });
        }
        params.reverse();

        let name = stack.pop_name("callee")?;
        let program = stack.pop_child_id("program template")?;
        let inverse = stack.pop_child_id("inverse template")?;

        Ok(HelperCall {
            name,
            params,
            hash,
            program,
            inverse,
        })
    }

    /// Child template references, program before inverse.
    pub fn options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(2);
        if let Some(id) = self.program {
            options.push(format!("template:child{}", id));
        }
        if let Some(id) = self.inverse {
            options.push(format!("inverse:child{}", id));
        }
        options
    }

    pub fn render(&self, renderer: &dyn LiteralRenderer) -> HelperDescriptor {
        let params: Vec<String> = self.params.iter().map(|p| p.value.clone()).collect();
        let hash: Vec<(String, String)> = self
            .hash
            .iter()
            .map(|pair| (pair.key.clone(), pair.value.clone()))
            .collect();

        HelperDescriptor {
            name: self.name.clone(),
            params: renderer.array(&params),
            hash: renderer.object(&hash),
            options: self.options(),
        }
    }
}

/// Fail before reading when `count` entries of `width` frames each cannot be
/// on the stack. Counts come from the stack itself and are not trusted.
fn ensure_frames(
    stack: &OperandStack,
    count: usize,
    width: usize,
    frame: &'static str,
) -> Result<()> {
    match count.checked_mul(width) {
        Some(needed) if needed <= stack.len() => Ok(()),
        _ => Err(InternalError::StackUnderflow {
            expected: OperandKind::Value,
            frame,
        }
        .into()),
    }
}

/// Lower one call site using the JavaScript literal renderer.
pub fn prepare_helper(stack: &mut OperandStack, positional_count: usize) -> Result<HelperDescriptor> {
    prepare_helper_with(stack, positional_count, &JsLiteralRenderer)
}

pub fn prepare_helper_with(
    stack: &mut OperandStack,
    positional_count: usize,
    renderer: &dyn LiteralRenderer,
) -> Result<HelperDescriptor> {
    let call = HelperCall::reduce(stack, positional_count)?;
    log::debug!(
        "lowered helper call {} ({} param(s), {} hash pair(s))",
        call.name,
        call.params.len(),
        call.hash.len()
    );
    Ok(call.render(renderer))
}
