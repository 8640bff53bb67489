//! Operand Stack
//!
//! The expression-lowering pass describes each call site by pushing typed
//! frames. One call site, bottom to top:
//!
//! ```text
//! ChildId(inverse)  ChildId(program)  Name(callee)
//! { Type  Value }*                    positional params, left to right
//! { Key  Type  Value }*               hash pairs, left to right
//! HashCount(n)
//! ```
//!
//! Readers pop the same grammar in reverse. A frame of the wrong kind is
//! reported as an [`InternalError::OperandMismatch`] instead of being
//! misread as some other field.

use crate::error::InternalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static type of a compiled argument expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Id,
    String,
    Number,
    Boolean,
    Sexpr,
    Null,
    Undefined,
}

impl ParamType {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::Id => "id",
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Sexpr => "sexpr",
            ParamType::Null => "null",
            ParamType::Undefined => "undefined",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Child template id of a block's program or inverse.
    ChildId(Option<usize>),
    /// Callee name.
    Name(String),
    Type(ParamType),
    /// Compiled expression fragment.
    Value(String),
    /// Hash pair key.
    Key(String),
    HashCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    ChildId,
    Name,
    Type,
    Value,
    Key,
    HashCount,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperandKind::ChildId => "child template id",
            OperandKind::Name => "callee name",
            OperandKind::Type => "type tag",
            OperandKind::Value => "value",
            OperandKind::Key => "hash key",
            OperandKind::HashCount => "hash pair count",
        };
        f.write_str(name)
    }
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::ChildId(_) => OperandKind::ChildId,
            Operand::Name(_) => OperandKind::Name,
            Operand::Type(_) => OperandKind::Type,
            Operand::Value(_) => OperandKind::Value,
            Operand::Key(_) => OperandKind::Key,
            Operand::HashCount(_) => OperandKind::HashCount,
        }
    }
}

macro_rules! typed_pop {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $name(&mut self, frame: &'static str) -> Result<$ty, InternalError> {
            match self.pop_frame(OperandKind::$variant, frame)? {
                Operand::$variant(value) => Ok(value),
                other => Err(InternalError::OperandMismatch {
                    expected: OperandKind::$variant,
                    found: other.kind(),
                    frame,
                }),
            }
        }
    };
}

/// Last-in-first-out stack of call-site operands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandStack {
    frames: Vec<Operand>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn push(&mut self, operand: Operand) {
        self.frames.push(operand);
    }

    /// Push the block's child template ids: inverse first, then program.
    pub fn push_child_templates(&mut self, program: Option<usize>, inverse: Option<usize>) {
        self.frames.push(Operand::ChildId(inverse));
        self.frames.push(Operand::ChildId(program));
    }

    pub fn push_name(&mut self, name: impl Into<String>) {
        self.frames.push(Operand::Name(name.into()));
    }

    pub fn push_param(&mut self, param_type: ParamType, value: impl Into<String>) {
        self.frames.push(Operand::Type(param_type));
        self.frames.push(Operand::Value(value.into()));
    }

    pub fn push_hash_pair(
        &mut self,
        key: impl Into<String>,
        param_type: ParamType,
        value: impl Into<String>,
    ) {
        self.frames.push(Operand::Key(key.into()));
        self.frames.push(Operand::Type(param_type));
        self.frames.push(Operand::Value(value.into()));
    }

    pub fn push_hash_count(&mut self, count: usize) {
        self.frames.push(Operand::HashCount(count));
    }

    fn pop_frame(&mut self, expected: OperandKind, frame: &'static str) -> Result<Operand, InternalError> {
        self.frames
            .pop()
            .ok_or(InternalError::StackUnderflow { expected, frame })
    }

    typed_pop!(pop_child_id, ChildId, Option<usize>);
    typed_pop!(pop_name, Name, String);
    typed_pop!(pop_type, Type, ParamType);
    typed_pop!(pop_value, Value, String);
    typed_pop!(pop_key, Key, String);
    typed_pop!(
        /// Pop the number of hash pairs that precede this frame.
        pop_hash_count,
        HashCount,
        usize
    );
}

impl From<Vec<Operand>> for OperandStack {
    fn from(frames: Vec<Operand>) -> Self {
        OperandStack { frames }
    }
}

impl Extend<Operand> for OperandStack {
    fn extend<I: IntoIterator<Item = Operand>>(&mut self, iter: I) {
        self.frames.extend(iter);
    }
}
