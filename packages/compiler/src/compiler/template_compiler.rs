//! Template compiler driver
//!
//! Normalizes whole trees handed over by the parser and lowers call sites
//! with the configured literal renderer. Each template is compiled
//! independently; a failure in one never affects another.

use super::helpers::{prepare_helper_with, HelperDescriptor};
use super::operand_stack::OperandStack;
use super::quoting::{JsLiteralRenderer, LiteralRenderer};
use crate::ast::{build_element, util::push_separated, Node, Program};
use crate::config::CompilerConfig;
use crate::error::{CompileError, Result};
use crate::html_parser::{finish_component, is_component_tag, postprocess_program};
use rayon::prelude::*;

pub struct TemplateCompiler {
    config: CompilerConfig,
    renderer: Box<dyn LiteralRenderer>,
}

impl Default for TemplateCompiler {
    fn default() -> Self {
        TemplateCompiler::new(CompilerConfig::default())
    }
}

impl TemplateCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        TemplateCompiler {
            config,
            renderer: Box::new(JsLiteralRenderer),
        }
    }

    pub fn with_renderer(config: CompilerConfig, renderer: Box<dyn LiteralRenderer>) -> Self {
        TemplateCompiler { config, renderer }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Normalize `program` and every program nested inside it.
    ///
    /// Nested programs are finished before the program that contains them.
    /// Custom elements still in element form are turned into components on
    /// the way.
    ///
    /// A `ComponentNode` in the input was finished by `finish_component`
    /// when the parser closed it. Its program is only searched for nested
    /// work and is postprocessed again only if a custom element inside it
    /// was converted here.
    pub fn normalize(&self, program: &mut Program) -> Result<()> {
        self.normalize_children(&mut program.body)?;
        postprocess_program(program, &self.config);
        Ok(())
    }

    /// Returns whether any custom element in `children` was converted.
    fn normalize_children(&self, children: &mut Vec<Node>) -> Result<bool> {
        let mut converted = false;

        for node in children.iter_mut() {
            match node {
                Node::Block(block) => {
                    self.normalize(&mut block.program)?;
                    if let Some(inverse) = block.inverse.as_mut() {
                        self.normalize(inverse)?;
                    }
                }
                Node::Component(component) => {
                    if self.normalize_children(&mut component.program.body)? {
                        postprocess_program(&mut component.program, &self.config);
                    }
                }
                Node::Element(element) if is_component_tag(&element.tag) => {
                    self.normalize_children(&mut element.children)?;
                    let element = std::mem::replace(element, build_element("", Vec::new()));
                    *node = Node::Component(finish_component(element, &self.config)?);
                    converted = true;
                }
                Node::Element(element) => {
                    self.normalize_children(&mut element.children)?;
                }
                _ => {}
            }
        }

        // A new component may now sit next to another morph.
        if converted {
            let nodes = std::mem::take(children);
            for node in nodes {
                push_separated(children, node);
            }
        }
        Ok(converted)
    }

    /// Normalize one template, consuming it.
    pub fn compile(&self, mut program: Program) -> Result<Program> {
        match self.normalize(&mut program) {
            Ok(()) => Ok(program),
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Compile independent templates in parallel, one result per template in
    /// input order.
    pub fn compile_all(&self, programs: Vec<Program>) -> Vec<Result<Program>> {
        programs
            .into_par_iter()
            .map(|program| self.compile(program))
            .collect()
    }

    /// Lower the call site on top of `stack`.
    pub fn lower(
        &self,
        stack: &mut OperandStack,
        positional_count: usize,
    ) -> Result<HelperDescriptor> {
        prepare_helper_with(stack, positional_count, &*self.renderer).map_err(|err| {
            self.report(&err);
            err
        })
    }

    fn report(&self, err: &CompileError) {
        match err {
            CompileError::Internal(internal) => {
                log::error!("aborting template compilation: {}", internal)
            }
            CompileError::Syntax(syntax) => log::warn!("template rejected: {}", syntax),
        }
    }
}
