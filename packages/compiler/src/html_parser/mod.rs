//! HTML Parser Support
//!
//! Normalization passes the parser applies to blocks as they close.

pub mod helpers;
pub mod whitespace;

pub use helpers::{
    build_hash_from_attributes, finish_component, is_component_tag, parse_component_block_params,
    postprocess_program,
};
pub use whitespace::{strip_leading, strip_trailing};
