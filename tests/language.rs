use std::fs;

use bitexpr::{
    error::{ParseError, RuntimeError},
    evaluate, evaluate_batch,
    interpreter::batch::split_batch,
    parse, parse_eval,
};
use rstest::rstest;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_examples(&content) {
            count += 1;
            match parse_eval(&expression) {
                Ok(value) => assert_eq!(value, expected, "{expression} in {path:?}"),
                Err(e) => panic!("Example '{expression}' in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No bitexpr examples found in book/src");
}

/// Collects `expression => result` lines from ```bitexpr blocks.
fn extract_examples(content: &str) -> Vec<(String, i64)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```bitexpr") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = trimmed.split_once("=>") {
            let expected = expected.trim()
                                   .parse()
                                   .unwrap_or_else(|e| panic!("Bad expected value in '{line}': {e}"));
            examples.push((expression.trim().to_string(), expected));
        }
    }

    examples
}

fn parse_error(src: &str) -> ParseError {
    match parse_eval(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e.parse_error()
                   .cloned()
                   .unwrap_or_else(|| panic!("'{src}' failed outside the parser: {e}")),
    }
}

#[rstest]
#[case("5 & 3", 1)]
#[case("5 | 2", 7)]
#[case("5 ^ 1", 4)]
#[case("~0", -1)]
#[case("~5 & 3", 2)]
#[case("(5 & 3) | 8", 9)]
#[case("~~5", 5)]
#[case("0b101", 5)]
#[case("0x1F", 31)]
#[case("10", 10)]
fn evaluates(#[case] source: &str, #[case] expected: i64) {
    assert_eq!(parse_eval(source).unwrap(), expected);
}

#[rstest]
#[case("5 AND 3", "5 & 3")]
#[case("5 bitor 2", "5 | 2")]
#[case("5 XOR 1", "5 ^ 1")]
#[case("NOT 5 bitAnd 3", "~5 & 3")]
#[case("5 or 2", "5|2")]
fn word_operators_match_symbols(#[case] words: &str, #[case] symbols: &str) {
    assert_eq!(parse_eval(words).unwrap(), parse_eval(symbols).unwrap());
}

#[test]
fn unmatched_brackets() {
    assert!(matches!(parse_error("(5&3"), ParseError::UnmatchedBracket { bracket: '(', .. }));
    assert!(matches!(parse_error(")5&3"), ParseError::UnmatchedBracket { bracket: ')', .. }));
}

#[test]
fn structural_mistakes() {
    assert_eq!(parse_error("5&3|2"), ParseError::TooManyOperators);
    assert_eq!(parse_error("5&"), ParseError::IncompleteOperation);
    assert_eq!(parse_error("&3"), ParseError::IncompleteOperation);
    assert_eq!(parse_error("~&"), ParseError::NegatedOperator { operator: "&".to_string() });
    assert_eq!(parse_error("1 2"), ParseError::TooManyOperands);
    assert_eq!(parse_error("   "), ParseError::MissingOperator);
}

#[test]
fn lexical_mistakes() {
    assert_eq!(parse_error("5 + 3"),
               ParseError::IllegalCharacter { character: '+',
                                              position:  2, });
    assert_eq!(parse_error("0xZZ & 1"),
               ParseError::InvalidLiteral { literal: "0xZZ".to_string() });
    assert_eq!(parse_error("0x10000000000000000"),
               ParseError::LiteralTooLarge { literal: "0x10000000000000000".to_string() });
}

#[rstest]
#[case("1 & (2 $ 3)", '$', 7)]
#[case("(é)", 'é', 1)]
#[case("((1 & 2) | (3 ^ @))", '@', 16)]
fn errors_in_groups_point_at_the_character(#[case] source: &str,
                                            #[case] character: char,
                                            #[case] position: usize) {
    assert_eq!(parse_error(source), ParseError::IllegalCharacter { character, position });
    assert_eq!(source[position..].chars().next(), Some(character));
}

#[test]
fn errors_carry_expression_text() {
    let error = parse_eval("1 & (2 | 3 | 4)").unwrap_err();
    assert_eq!(error.expression, "1 & (2 | 3 | 4)");
    assert!(error.runtime_error().is_none());
    assert!(error.to_string().contains("1 & (2 | 3 | 4)"));
}

#[test]
fn malformed_trees_fail_at_runtime() {
    use bitexpr::ast::{Operand, Operation, Operator};

    let broken = Operation { operator: Operator::Or,
                             left:     Operand::Empty,
                             right:    Operand::Literal(1), };
    assert_eq!(broken.result(),
               Err(RuntimeError::IncompleteOperation { operator: Operator::Or }));
}

#[test]
fn batch_splitting() {
    assert_eq!(split_batch(["5&3,", "6|2"]), ["5&3", "6|2"]);

    let results: Vec<i64> = evaluate_batch(["5&3,", "6|2"]).into_iter()
                                                         .map(|r| r.unwrap().result)
                                                         .collect();
    assert_eq!(results, [1, 6]);
}

#[test]
fn one_argument_can_hold_a_whole_batch() {
    let results: Vec<i64> = evaluate_batch(["5&3, 6|2; ~0"]).into_iter()
                                                            .map(|r| r.unwrap().result)
                                                            .collect();
    assert_eq!(results, [1, 6, -1]);
}

#[test]
fn batch_failures_are_independent() {
    let results = evaluate_batch(["1", "&", "1;", "2", "&;", "3", "^", "1"]);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().result, 1);
    assert_eq!(results[1].as_ref().unwrap_err().expression, "2 &");
    assert_eq!(results[2].as_ref().unwrap().result, 2);
}

#[rstest]
#[case("~5 & 3")]
#[case("(5 & 3) | 8")]
#[case("~(0xF0 ^ 0b1010) | (1 & ~(2 | 4))")]
#[case("-12 xor (~~7)")]
#[case("~(~5)")]
#[case("FFFFFFFFFFFFFFFF & 0b1")]
fn rendering_round_trips(#[case] source: &str) {
    let first = evaluate(source).unwrap();
    let rendered = first.operation.to_string();
    let second = parse(&rendered).unwrap_or_else(|e| panic!("re-parsing '{rendered}': {e}"));
    assert_eq!(second.result().unwrap(), first.result, "{source} rendered as {rendered}");
}
