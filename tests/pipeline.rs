//! End-to-end tests of the public compile/run surface.

use calcvm::{compile, execute, run, CalcError, LexError, ParseError, RuntimeError};
use pretty_assertions::assert_eq;

#[test]
fn test_numbers_evaluate_to_themselves() {
    for (source, expected) in [("42", 42.0), ("3.5", 3.5), ("0", 0.0), ("007.250", 7.25)] {
        assert_eq!(run(source).unwrap(), expected, "{source}");
    }
}

#[test]
fn test_left_associativity() {
    assert_eq!(run("10-3-2").unwrap(), 5.0);
    assert_eq!(run("100/10/5").unwrap(), 2.0);
}

#[test]
fn test_right_associativity() {
    assert_eq!(run("2**3**2").unwrap(), 512.0);
}

#[test]
fn test_precedence_ordering() {
    assert_eq!(run("2+3*4").unwrap(), 14.0);
    assert_eq!(run("(2+3)*4").unwrap(), 20.0);
    assert_eq!(run("2*3**2").unwrap(), 18.0);
    assert_eq!(run("7 - 10 % 4").unwrap(), 5.0);
}

#[test]
fn test_unary_minus() {
    assert_eq!(run("-5+3").unwrap(), -2.0);
    // The unary operand stops before `**`, so the negation applies first.
    assert_eq!(run("-2**2").unwrap(), 4.0);
    assert_eq!(run("- - 4").unwrap(), 4.0);
    assert_eq!(run("3 - -2").unwrap(), 5.0);
}

#[test]
fn test_fractional_and_negative_exponents() {
    assert_eq!(run("4 ** 0.5").unwrap(), 2.0);
    assert_eq!(run("2 ** -1").unwrap(), 0.5);
}

#[test]
fn test_ieee_arithmetic() {
    assert_eq!(run("1/0").unwrap(), f64::INFINITY);
    assert_eq!(run("-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(run("0/0").unwrap().is_nan());
    assert!(run("5 % 0").unwrap().is_nan());
    assert_eq!(run("-7 % 3").unwrap(), -1.0);
}

#[test]
fn test_sample_expression() {
    let source = "\n13 - 43 + - 64 * (11 ** 12 ** -13) / 24 * ( - - 31 / 27) % 483\n";
    let expected = 13.0 - 43.0
        + (-64.0 * 11f64.powf(12f64.powf(-13.0)) / 24.0 * (31.0 / 27.0)) % 483.0;
    let actual = run(source).unwrap();
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn test_parse_errors() {
    assert!(matches!(run("2+"), Err(CalcError::Parse(_))));
    assert!(matches!(run("(1"), Err(CalcError::Parse(ParseError::UnclosedGroup { .. }))));
    assert!(matches!(
        run("*"),
        Err(CalcError::Parse(ParseError::ExpressionExpected { .. }))
    ));
}

#[test]
fn test_lex_error_references_line() {
    assert_eq!(
        run("2@3").unwrap_err(),
        CalcError::Lex(LexError::unexpected_symbol("@3", 1))
    );
    let err = run("1 +\n2 +\n  $").unwrap_err();
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(
        compile("1+2*3").unwrap(),
        compile("  1 +\n\t2 *\n 3  ").unwrap()
    );
}

#[test]
fn test_trailing_tokens_are_ignored() {
    assert_eq!(run("2+3)").unwrap(), 5.0);
    assert_eq!(run("2 3").unwrap(), 2.0);
}

#[test]
fn test_bytecode_encoding() {
    assert_eq!(
        compile("-1.5 * 2").unwrap(),
        vec![0.0, 1.5, 1.0, 0.0, 2.0, 4.0, 8.0]
    );
}

#[test]
fn test_determinism() {
    let code = compile("(1 + 2) ** 3 % 5").unwrap();
    assert_eq!(code, compile("(1 + 2) ** 3 % 5").unwrap());
    assert_eq!(execute(&code).unwrap(), execute(&code).unwrap());
}

#[test]
fn test_execute_rejects_bad_programs() {
    assert_eq!(execute(&[]), Err(RuntimeError::EmptyBytecode));
    assert_eq!(
        execute(&[2.0, 8.0]),
        Err(RuntimeError::StackUnderflow { offset: 0 })
    );
}

#[test]
fn test_unit_base_to_infinite_power_is_nan() {
    assert!(run("1 ** (1 / 0)").unwrap().is_nan());
    assert!(run("(-1) ** -(1 / 0)").unwrap().is_nan());
    assert_eq!(run("1 ** 1000").unwrap(), 1.0);
}

#[test]
fn test_deep_nesting_is_rejected_not_overflowed() {
    let source = format!("{}2", "(".repeat(100_000));
    assert!(matches!(
        run(&source),
        Err(CalcError::Parse(ParseError::TooDeep { line: 1 }))
    ));
    let source = format!("1 +\n{}2", "-".repeat(100_000));
    assert!(matches!(
        run(&source),
        Err(CalcError::Parse(ParseError::TooDeep { line: 2 }))
    ));
}

#[test]
fn test_extra_stack_values_are_ignored() {
    assert_eq!(execute(&[0.0, 1.0, 0.0, 2.0, 8.0]), Ok(2.0));
}

#[test]
fn test_parallel_runs_share_no_state() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || run(&format!("{i} * 10 + 1")).unwrap()))
        .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![1.0, 11.0, 21.0, 31.0]);
}
