//! Tests the recursive chunker, operand extraction and level validation.

use condtree_patterns::Connective;
use rstest::rstest;

use super::{Expression, Operand};
use crate::config::ParseOptions;
use crate::error::ParseError;

fn parse(text: &str) -> Expression {
    Expression::parse(text).unwrap_or_else(|err| panic!("{text:?} should parse: {err}"))
}

fn parse_err(text: &str) -> ParseError {
    match Expression::parse(text) {
        Ok(expr) => panic!("{text:?} should fail, parsed as {expr}"),
        Err(err) => err,
    }
}

fn kinds(expr: &Expression) -> Vec<Connective> {
    expr.operators().iter().map(|op| op.kind()).collect()
}

fn leaf_texts(expr: &Expression) -> Vec<String> {
    expr.operands()
        .iter()
        .map(|operand| match operand {
            Operand::Condition(condition) => condition.text().to_string(),
            Operand::Expression(nested) => format!("({nested})"),
        })
        .collect()
}

#[test]
fn keeps_single_character_trailing_text() {
    let expr = parse("(a or b) and c");
    assert_eq!(leaf_texts(&expr), vec!["(a OR b)", "c"]);
}

#[test]
fn empty_text_between_groups_contributes_nothing() {
    let expr = parse("(a) or (b)");
    assert_eq!(expr.operands().len(), 2);
    assert_eq!(kinds(&expr), vec![Connective::Or]);
    assert!(expr.operands().iter().all(|o| o.as_expression().is_some()));
}

#[test]
fn strips_redundant_enclosing_parentheses() {
    let expr = parse("  ((a and b))  ");
    assert_eq!(leaf_texts(&expr), vec!["a", "b"]);
    assert_eq!(expr.depth(), 0);
}

#[test]
fn nested_groups_are_parsed_before_the_parent() {
    let expr = parse("a or (b and (c xor d))");
    assert_eq!(expr.depth(), 2);
    let Some(Operand::Expression(middle)) = expr.operands().get(1) else {
        panic!("second operand should be nested");
    };
    assert_eq!(kinds(middle), vec![Connective::And]);
    let Some(Operand::Expression(inner)) = middle.operands().get(1) else {
        panic!("inner operand should be nested");
    };
    assert_eq!(kinds(inner), vec![Connective::Xor]);
    assert!(inner.get_eval_paths(true).is_some());
}

#[test]
fn call_arguments_stay_inside_their_condition() {
    let expr = parse("contains(tags, 'a', 'b') and len(name) > 3");
    assert_eq!(
        leaf_texts(&expr),
        vec!["contains(tags, 'a', 'b')", "len(name) > 3"]
    );
    assert_eq!(expr.depth(), 0);
}

#[rstest]
#[case("a and(b or c)", Connective::And, &[false, true])]
#[case("(a)or(b)", Connective::Or, &[true, true])]
#[case("x XOR(y)", Connective::Xor, &[false, true])]
fn groups_glued_to_connective_words_are_nested(
    #[case] text: &str,
    #[case] joined_by: Connective,
    #[case] nested: &[bool],
) {
    let expr = parse(text);
    assert_eq!(kinds(&expr), vec![joined_by]);
    let actual: Vec<bool> = expr
        .operands()
        .iter()
        .map(|operand| operand.as_expression().is_some())
        .collect();
    assert_eq!(actual, nested);
}

#[test]
fn glued_group_keeps_its_own_connective() {
    let expr = parse("a and(b or c)");
    let Some(Operand::Expression(group)) = expr.operands().get(1) else {
        panic!("group should be nested, got {expr}");
    };
    assert_eq!(kinds(group), vec![Connective::Or]);
    assert_eq!(leaf_texts(group), vec!["b", "c"]);
    assert!(parse("a AND(b or c xor d)").has_mixed_operators_deep());
}

#[test]
fn symbolic_connectives_are_recognised() {
    let expr = parse("a && b && (c || d)");
    assert_eq!(kinds(&expr), vec![Connective::And, Connective::And]);
    assert!(!expr.has_mixed_operators_deep());
}

#[test]
fn connective_kinds_are_not_read_from_identifiers() {
    let expr = parse("order == 1 and android");
    assert_eq!(leaf_texts(&expr), vec!["order == 1", "android"]);
}

#[test]
fn mixed_level_has_neither_plan() {
    let expr = parse("a xor b and c");
    assert!(expr.has_mixed_operators());
    assert_eq!(expr.connective(), None);
    assert!(expr.get_eval_paths(true).is_none());
    assert!(expr.get_eval_paths(false).is_none());
}

#[test]
fn uniform_level_has_both_plans() {
    let expr = parse("a or b");
    let (Some(on_true), Some(on_false)) = (expr.get_eval_paths(true), expr.get_eval_paths(false))
    else {
        panic!("uniform level should carry both plans");
    };
    assert!(on_true.outcome());
    assert!(!on_false.outcome());
}

#[test]
fn mixed_flag_ignores_nested_levels() {
    let expr = parse("(a and b or c) or d");
    assert!(!expr.has_mixed_operators());
    assert!(expr.get_eval_paths(true).is_some());
    assert!(expr.has_mixed_operators_deep());
}

#[test]
fn displays_canonical_form() {
    let expr = parse("a == 'x and y' and (b || c)   xor d");
    assert_eq!(expr.to_string(), "a == 'x and y' AND (b OR c) XOR d");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("()")]
#[case("(( ))")]
fn rejects_empty_input(#[case] text: &str) {
    assert!(matches!(parse_err(text), ParseError::Empty));
}

#[test]
fn rejects_empty_nested_group() {
    assert!(matches!(parse_err("a and ()"), ParseError::Empty));
}

#[rstest]
#[case("and a", Connective::And, 0)]
#[case("a or", Connective::Or, 1)]
#[case("a and or b", Connective::Or, 1)]
#[case("(a) xor", Connective::Xor, 1)]
fn rejects_dangling_connectives(
    #[case] text: &str,
    #[case] expected: Connective,
    #[case] position: usize,
) {
    match parse_err(text) {
        ParseError::DanglingConnective {
            connective,
            operand,
        } => {
            assert_eq!(connective, expected);
            assert_eq!(operand, position);
        }
        other => panic!("expected dangling connective, got {other}"),
    }
}

#[rstest]
#[case("(a)(b)", 1)]
#[case("a (b)", 1)]
#[case("!(a or b)", 1)]
#[case("(a) b and c", 1)]
fn rejects_adjacent_operands(#[case] text: &str, #[case] position: usize) {
    match parse_err(text) {
        ParseError::MissingConnective { operand } => assert_eq!(operand, position),
        other => panic!("expected missing connective, got {other}"),
    }
}

#[rstest]
#[case("(a and b")]
#[case("a) or b")]
#[case("name == 'open")]
#[case("f(a and b")]
fn rejects_unbalanced_text(#[case] text: &str) {
    assert!(matches!(parse_err(text), ParseError::Pattern(_)));
}

#[test]
fn enforces_maximum_depth() {
    let options = ParseOptions::default().with_max_depth(1);
    assert!(Expression::parse_with("a or (b and c)", &options).is_ok());
    let Err(err) = Expression::parse_with("a or (b and (c))", &options) else {
        panic!("nesting beyond the limit should fail");
    };
    assert!(matches!(err, ParseError::TooDeep { max_depth: 1 }));
}

#[test]
fn deep_nesting_within_default_limit_parses() {
    let depth = 40;
    let text = format!("{}a{}", "(b or ".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&text).depth(), depth - 1);
}
