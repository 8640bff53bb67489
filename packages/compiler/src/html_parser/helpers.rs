//! Tree Normalizer
//!
//! Rewrites freshly parsed blocks so code generation can rely on their shape:
//! every program starts and ends on a static node, empty text between
//! elements is dropped, component attributes become named arguments, and
//! `as |x y|` attribute runs become block parameters.

use super::whitespace::apply_strip_directives;
use crate::ast::*;
use crate::config::CompilerConfig;
use crate::error::{Result, SyntaxError};

/// Finish a program whose body is fully assembled.
///
/// Runs once per program. Guarantees the first and last entries of a
/// non-empty body are static, then drops empty text nodes that sit next to
/// an element. Strip directives are applied in the same scan when enabled.
pub fn postprocess_program(program: &mut Program, config: &CompilerConfig) {
    if program.body.is_empty() {
        return;
    }

    if uses_morph(&program.body[0]) {
        program.body.insert(0, build_text(""));
    }

    if program.body.last().is_some_and(uses_morph) {
        program.body.push(build_text(""));
    }

    let strip = config.whitespace.is_enabled();
    let mut i = 0;
    while i < program.body.len() {
        if program.body[i].as_text().is_none() {
            i += 1;
            continue;
        }

        if strip {
            apply_strip_directives(&mut program.body, i, program.strip);
        }

        if program.body[i].is_empty_text() {
            let prev_is_element = i > 0 && program.body[i - 1].is_element();
            let next_is_element = program.body.get(i + 1).is_some_and(Node::is_element);
            if prev_is_element || next_is_element {
                log::trace!("dropping empty text node at {} next to an element", i);
                program.body.remove(i);
                // Re-examine the entry that shifted into this slot.
                continue;
            }
        }
        i += 1;
    }

    log::debug!(
        "normalized program: {} statement(s), block params {:?}",
        program.body.len(),
        program.block_params
    );
}

/// Rewrite attributes as named arguments for a component call.
///
/// Sub-expressions pass through, static text becomes a string literal, and
/// anything dynamic is wrapped in a call to the concat helper.
pub fn build_hash_from_attributes(attributes: &[AttrNode], config: &CompilerConfig) -> Hash {
    let pairs = attributes
        .iter()
        .map(|attr| {
            let value = match &attr.value {
                Node::SubExpression(_) => attr.value.clone(),
                Node::Text(text) => build_string(text.chars.clone()),
                Node::Concat(concat) => Node::SubExpression(build_sexpr(
                    build_path(config.concat_helper.as_str()),
                    concat.parts.clone(),
                    None,
                )),
                dynamic => Node::SubExpression(build_sexpr(
                    build_path(config.concat_helper.as_str()),
                    vec![dynamic.clone()],
                    None,
                )),
            };
            build_pair(attr.name.clone(), value)
        })
        .collect();

    build_hash(pairs)
}

/// Move an `as |a b|` attribute run into `program.block_params`.
///
/// The parser reads `<my-list as |item index|>` as the attributes `as`,
/// `|item`, `index|`, so only attribute names are inspected. Without an
/// `as` followed by a `|`-prefixed name this does nothing.
pub fn parse_component_block_params(element: &mut ElementNode, program: &mut Program) -> Result<()> {
    let names: Vec<&str> = element
        .attributes
        .iter()
        .map(|attr| attr.name.as_str())
        .collect();

    let as_index = match names.iter().position(|name| *name == "as") {
        Some(index) => index,
        None => return Ok(()),
    };

    let opens_params = names
        .get(as_index + 1)
        .is_some_and(|name| name.starts_with('|'));
    if !opens_params {
        return Ok(());
    }

    let params_string = names[as_index..].join(" ");
    if !params_string.ends_with('|') || params_string.matches('|').count() != 2 {
        let span = match (
            element.attributes[as_index].loc.as_ref(),
            element.attributes.last().and_then(|attr| attr.loc.as_ref()),
        ) {
            (Some(start), Some(end)) => Some(start.to(end)),
            _ => None,
        };
        return Err(SyntaxError::InvalidBlockParams {
            params: params_string,
            span,
        }
        .into());
    }

    let params: Vec<String> = names[as_index + 1..]
        .iter()
        .map(|name| name.replace('|', ""))
        .filter(|param| !param.is_empty())
        .collect();

    element.attributes.truncate(as_index);
    program.block_params = Some(params);
    Ok(())
}

/// Custom element names contain a dash; those tags are component calls.
pub fn is_component_tag(tag: &str) -> bool {
    tag.contains('-')
}

/// Turn a closed custom element into a component invocation.
///
/// The element's children become the component's program, block params are
/// pulled out of its attributes, and the program is normalized since it is
/// now complete.
pub fn finish_component(mut element: ElementNode, config: &CompilerConfig) -> Result<ComponentNode> {
    let mut program = build_program(std::mem::take(&mut element.children), None);
    parse_component_block_params(&mut element, &mut program)?;
    postprocess_program(&mut program, config);

    Ok(ComponentNode {
        tag: element.tag,
        attributes: element.attributes,
        program,
        loc: element.loc,
    })
}

impl ComponentNode {
    /// The component's attributes as named call arguments.
    pub fn named_arguments(&self, config: &CompilerConfig) -> Hash {
        build_hash_from_attributes(&self.attributes, config)
    }
}
