/**
 * Whitespace Control Tests
 *
 * `~` strip directives applied while a program is postprocessed.
 */

#[path = "../util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::*;
    use rebound_compiler::ast::*;
    use rebound_compiler::html_parser::postprocess_program;
    use rebound_compiler::{CompilerConfig, WhitespaceStripping};

    fn stripping() -> CompilerConfig {
        CompilerConfig::default().with_whitespace(WhitespaceStripping::Enabled)
    }

    fn postprocess_with(body: Vec<Node>, config: &CompilerConfig) -> Program {
        let mut program = build_program(body, None);
        postprocess_program(&mut program, config);
        program
    }

    fn texts(program: &Program) -> Vec<String> {
        program
            .body
            .iter()
            .filter_map(Node::as_text)
            .map(|text| text.chars.clone())
            .collect()
    }

    fn block_with_strips(open: StripFlags, close: StripFlags) -> Node {
        match block("if", vec![text("x")], None) {
            Node::Block(mut statement) => {
                statement.open_strip = open;
                statement.close_strip = close;
                Node::Block(statement)
            }
            other => other,
        }
    }

    #[test]
    fn left_strip_trims_preceding_text() {
        let program = postprocess_with(
            vec![
                text("hello  \n"),
                mustache_with_strip("name", StripFlags::LEFT),
                text("  world"),
            ],
            &stripping(),
        );
        assert_eq!(texts(&program), vec!["hello", "  world"]);
    }

    #[test]
    fn right_strip_trims_following_text() {
        let program = postprocess_with(
            vec![
                text("hello "),
                mustache_with_strip("name", StripFlags::RIGHT),
                text("\n  world"),
            ],
            &stripping(),
        );
        assert_eq!(texts(&program), vec!["hello ", "world"]);
    }

    #[test]
    fn directives_are_ignored_when_disabled() {
        let program = postprocess_with(
            vec![
                text("a  "),
                mustache_with_strip("b", StripFlags::LEFT | StripFlags::RIGHT),
                text("  c"),
            ],
            &CompilerConfig::default(),
        );
        assert_eq!(texts(&program), vec!["a  ", "  c"]);
    }

    #[test]
    fn text_between_two_directives_is_trimmed_on_both_edges() {
        let program = postprocess_with(
            vec![
                mustache_with_strip("a", StripFlags::RIGHT),
                text("  middle  "),
                mustache_with_strip("b", StripFlags::LEFT),
            ],
            &stripping(),
        );
        assert_eq!(texts(&program), vec!["", "middle", ""]);
    }

    #[test]
    fn program_flags_trim_its_edges() {
        let mut program = build_program(vec![text("  \n inner \n ")], None);
        program.strip = StripFlags::LEFT | StripFlags::RIGHT;
        postprocess_program(&mut program, &stripping());
        assert_eq!(texts(&program), vec!["inner"]);
    }

    #[test]
    fn block_uses_open_left_and_close_right() {
        let program = postprocess_with(
            vec![
                text("a  "),
                block_with_strips(StripFlags::LEFT, StripFlags::RIGHT),
                text("  b"),
            ],
            &stripping(),
        );
        assert_eq!(texts(&program), vec!["a", "b"]);
    }

    #[test]
    fn inner_facing_block_flags_leave_siblings_alone() {
        let program = postprocess_with(
            vec![
                text("a  "),
                block_with_strips(StripFlags::RIGHT, StripFlags::LEFT),
                text("  b"),
            ],
            &stripping(),
        );
        assert_eq!(texts(&program), vec!["a  ", "  b"]);
    }

    #[test]
    fn text_stripped_to_nothing_next_to_element_is_removed() {
        let program = postprocess_with(
            vec![
                element("div", vec![]),
                text("  "),
                mustache_with_strip("a", StripFlags::LEFT),
            ],
            &stripping(),
        );
        assert_eq!(
            humanize_program(&program),
            vec![
                row("ElementNode", "div", 0),
                row("MustacheStatement", "a", 0),
                row("TextNode", "", 0),
            ]
        );
    }
}
