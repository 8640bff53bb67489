/**
 * Helper-Call Lowering Tests
 *
 * Operand stacks are built the way the expression-lowering pass pushes
 * them and reduced back into descriptors.
 */

#[cfg(test)]
mod tests {
    use rebound_compiler::compiler::*;
    use rebound_compiler::{CompileError, InternalError};
    use rstest::rstest;

    fn call_site(
        stack: &mut OperandStack,
        program: Option<usize>,
        inverse: Option<usize>,
        name: &str,
        params: &[(ParamType, &str)],
        hash: &[(&str, ParamType, &str)],
    ) {
        stack.push_child_templates(program, inverse);
        stack.push_name(name);
        for (param_type, value) in params {
            stack.push_param(*param_type, *value);
        }
        for (key, param_type, value) in hash {
            stack.push_hash_pair(*key, *param_type, *value);
        }
        stack.push_hash_count(hash.len());
    }

    struct ListRenderer;

    impl LiteralRenderer for ListRenderer {
        fn array(&self, items: &[String]) -> String {
            format!("(list {})", items.join(" "))
        }

        fn object(&self, pairs: &[(String, String)]) -> String {
            let entries: Vec<String> = pairs
                .iter()
                .map(|(key, value)| format!(":{} {}", key, value))
                .collect();
            format!("(map {})", entries.join(" "))
        }
    }

    #[test]
    fn lowers_param_and_hash_pair() {
        let mut stack = OperandStack::new();
        call_site(
            &mut stack,
            None,
            None,
            "foo",
            &[(ParamType::Id, "a")],
            &[("key", ParamType::Id, "b")],
        );

        let descriptor = prepare_helper(&mut stack, 1).unwrap();
        assert_eq!(descriptor.name, "foo");
        assert_eq!(descriptor.params, "[a]");
        assert_eq!(descriptor.hash, "{\"key\":b}");
        assert!(descriptor.options.is_empty());
        assert!(stack.is_empty());
    }

    #[rstest]
    #[case(Some(1), None, vec!["template:child1"])]
    #[case(None, Some(2), vec!["inverse:child2"])]
    #[case(Some(0), Some(3), vec!["template:child0", "inverse:child3"])]
    #[case(None, None, vec![])]
    fn lists_child_templates(
        #[case] program: Option<usize>,
        #[case] inverse: Option<usize>,
        #[case] expected: Vec<&str>,
    ) {
        let mut stack = OperandStack::new();
        call_site(&mut stack, program, inverse, "if", &[(ParamType::Id, "cond")], &[]);

        let descriptor = prepare_helper(&mut stack, 1).unwrap();
        assert_eq!(descriptor.options, expected);
    }

    #[test]
    fn keeps_source_order_and_duplicate_keys() {
        let mut stack = OperandStack::new();
        call_site(
            &mut stack,
            None,
            None,
            "link-to",
            &[
                (ParamType::String, "\"posts\""),
                (ParamType::Number, "3"),
                (ParamType::Sexpr, "helper(x)"),
            ],
            &[
                ("class", ParamType::String, "\"a\""),
                ("title", ParamType::Id, "t"),
                ("class", ParamType::String, "\"b\""),
            ],
        );

        let call = HelperCall::reduce(&mut stack, 3).unwrap();
        let types: Vec<ParamType> = call.params.iter().map(|p| p.param_type).collect();
        assert_eq!(types, vec![ParamType::String, ParamType::Number, ParamType::Sexpr]);

        let descriptor = call.render(&JsLiteralRenderer);
        assert_eq!(descriptor.params, "[\"posts\", 3, helper(x)]");
        assert_eq!(
            descriptor.hash,
            "{\"class\":\"a\", \"title\":t, \"class\":\"b\"}"
        );
    }

    #[test]
    fn empty_call_renders_empty_literals() {
        let mut stack = OperandStack::new();
        call_site(&mut stack, None, None, "outlet", &[], &[]);

        let descriptor = prepare_helper(&mut stack, 0).unwrap();
        assert_eq!(descriptor.params, "[]");
        assert_eq!(descriptor.hash, "{}");
    }

    #[test]
    fn leaves_enclosing_frames_untouched() {
        let mut stack = OperandStack::new();
        stack.push_child_templates(None, None);
        stack.push_name("outer");
        stack.push(Operand::Type(ParamType::Sexpr));
        call_site(&mut stack, None, None, "inner", &[(ParamType::Id, "x")], &[]);

        let descriptor = prepare_helper(&mut stack, 1).unwrap();
        assert_eq!(descriptor.name, "inner");
        assert_eq!(stack.len(), 4);
        assert_eq!(
            stack,
            OperandStack::from(vec![
                Operand::ChildId(None),
                Operand::ChildId(None),
                Operand::Name("outer".into()),
                Operand::Type(ParamType::Sexpr),
            ])
        );
    }

    #[test]
    fn underflow_is_an_internal_error() {
        let mut stack = OperandStack::new();
        stack.push_name("foo");
        stack.push_hash_count(0);

        let err = prepare_helper(&mut stack, 0).unwrap_err();
        assert_eq!(
            err,
            CompileError::Internal(InternalError::StackUnderflow {
                expected: OperandKind::ChildId,
                frame: "program template",
            })
        );
    }

    #[rstest]
    #[case(usize::MAX)]
    #[case(1 << 42)]
    #[case(2)]
    fn oversized_hash_count_underflows(#[case] count: usize) {
        let mut stack = OperandStack::from(vec![
            Operand::ChildId(None),
            Operand::ChildId(None),
            Operand::Name("foo".into()),
            Operand::HashCount(count),
        ]);

        let err = prepare_helper(&mut stack, 0).unwrap_err();
        assert_eq!(
            err,
            CompileError::Internal(InternalError::StackUnderflow {
                expected: OperandKind::Value,
                frame: "hash pair",
            })
        );
    }

    #[rstest]
    #[case(usize::MAX / 2)]
    #[case(usize::MAX)]
    fn oversized_positional_count_underflows(#[case] count: usize) {
        let mut stack = OperandStack::new();
        call_site(&mut stack, None, None, "foo", &[], &[]);

        let err = prepare_helper(&mut stack, count).unwrap_err();
        assert_eq!(
            err,
            CompileError::Internal(InternalError::StackUnderflow {
                expected: OperandKind::Value,
                frame: "positional param",
            })
        );
    }

    #[test]
    fn oversized_count_fails_only_its_own_batch_entry() {
        let results: Vec<bool> = [usize::MAX, 0]
            .into_iter()
            .map(|count| {
                let mut stack = OperandStack::new();
                call_site(&mut stack, None, None, "foo", &[], &[]);
                prepare_helper(&mut stack, count).is_ok()
            })
            .collect();
        assert_eq!(results, vec![false, true]);
    }

    #[test]
    fn too_many_positional_params_is_detected() {
        let mut stack = OperandStack::new();
        call_site(&mut stack, None, None, "foo", &[(ParamType::Id, "a")], &[]);

        let err = prepare_helper(&mut stack, 2).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(
            err,
            CompileError::Internal(InternalError::OperandMismatch {
                expected: OperandKind::Value,
                found: OperandKind::Name,
                frame: "positional param",
            })
        );
    }

    #[test]
    fn missing_hash_count_is_detected() {
        let mut stack = OperandStack::new();
        stack.push_child_templates(None, None);
        stack.push_name("foo");

        let err = prepare_helper(&mut stack, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "operand stack mismatch for hash pair count: expected hash pair count, found callee name"
        );
    }

    #[test]
    fn custom_renderer_formats_literals() {
        let mut stack = OperandStack::new();
        call_site(
            &mut stack,
            None,
            None,
            "foo",
            &[(ParamType::Id, "a"), (ParamType::Id, "b")],
            &[("key", ParamType::Boolean, "true")],
        );

        let descriptor = prepare_helper_with(&mut stack, 2, &ListRenderer).unwrap();
        assert_eq!(descriptor.params, "(list a b)");
        assert_eq!(descriptor.hash, "(map :key true)");
    }

    #[test]
    fn descriptor_serializes_to_json() {
        let mut stack = OperandStack::new();
        call_site(
            &mut stack,
            Some(4),
            None,
            "each",
            &[(ParamType::Id, "items")],
            &[],
        );

        let descriptor = prepare_helper(&mut stack, 1).unwrap();
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "each",
                "params": "[items]",
                "hash": "{}",
                "options": ["template:child4"],
            })
        );
    }
}
