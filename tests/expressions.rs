use std::fs;

use safecalc::{
    evaluate_expression, exceeds_exponent_limit,
    interpreter::value::{complex::ComplexNumber, core::Value},
    special,
};
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

        for (i, code) in extract_calc_blocks(&content).into_iter().enumerate() {
            for line in code.lines().map(str::trim).filter(|line| !line.is_empty()) {
                count += 1;
                if let Err(e) = evaluate_expression(line) {
                    panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, line, e);
                }
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: Value) {
    match evaluate_expression(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_error(src: &str, fragment: &str) {
    match evaluate_expression(src) {
        Ok(value) => {
            panic!("Expression {src:?} evaluated to {value} but was expected to fail")
        },
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(fragment),
                    "error for {src:?} was {message:?}, expected it to contain {fragment:?}");
        },
    }
}

#[test]
fn literal_values() {
    assert_value("42", Value::Integer(42));
    assert_value("2.5", Value::Real(2.5));
    assert_value(".5", Value::Real(0.5));
    assert_value("1e3", Value::Real(1000.0));
    assert_value("3j", Value::Complex(ComplexNumber::new(0.0, 3.0)));
    assert_value("2.5J", Value::Complex(ComplexNumber::new(0.0, 2.5)));
    assert_value("-5", Value::Integer(-5));
    assert_value("--5", Value::Integer(5));
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 3 * 4", Value::Integer(14));
    assert_value("(2 + 3) * 4", Value::Integer(20));
    assert_value("8 - 5", Value::Integer(3));
    assert_value("7 * 9", Value::Integer(63));
}

#[test]
fn division_is_true_division() {
    assert_value("10 / 2", Value::Real(5.0));
    assert_value("10 / 4", Value::Real(2.5));
    assert_value("1 / 8", Value::Real(0.125));
}

#[test]
fn floor_division_and_modulo() {
    assert_value("7 // 2", Value::Integer(3));
    assert_value("-7 // 2", Value::Integer(-4));
    assert_value("-7 // -2", Value::Integer(3));
    assert_value("7.5 // 2", Value::Real(3.0));
    assert_value("7 % 3", Value::Integer(1));
    assert_value("-7 % 3", Value::Integer(2));
    assert_value("7 % -3", Value::Integer(-2));
    assert_value("7.5 % -2", Value::Real(-0.5));
}

#[test]
fn exponentiation() {
    assert_value("2 ** 10", Value::Integer(1024));
    assert_value("2 ** 0", Value::Integer(1));
    assert_value("2 ** -2", Value::Real(0.25));
    assert_value("-2 ** 2", Value::Integer(-4));
    assert_value("(-2) ** 2", Value::Integer(4));
    assert_value("2 ** 3 ** 2", Value::Integer(512));
    assert_value("2.0 ** 100", Value::Real(2f64.powi(100)));
    assert_value("0.5 ** 2", Value::Real(0.25));

    match evaluate_expression("9 ** 0.5") {
        Ok(Value::Real(r)) => assert!((r - 3.0).abs() < 1e-12),
        other => panic!("expected a real result, got {other:?}"),
    }
}

#[test]
fn negative_base_fractional_exponent_is_complex() {
    match evaluate_expression("(-4) ** 0.5") {
        Ok(Value::Complex(c)) => {
            assert!(c.real.abs() < 1e-9);
            assert!((c.imaginary - 2.0).abs() < 1e-9);
        },
        other => panic!("expected a complex result, got {other:?}"),
    }
}

#[test]
fn complex_arithmetic() {
    assert_value("1j * 1j", Value::Complex(ComplexNumber::new(-1.0, 0.0)));
    assert_value("(1 + 2j) + (3 - 1j)", Value::Complex(ComplexNumber::new(4.0, 1.0)));
    assert_value("10 / 2j", Value::Complex(ComplexNumber::new(0.0, -5.0)));
    assert_value("2j ** 2", Value::Complex(ComplexNumber::new(-4.0, 0.0)));
}

#[test]
fn division_by_zero_message_is_exact() {
    let error = evaluate_expression("1 / 0").unwrap_err();
    assert_eq!(error.to_string(), "Division by zero is not allowed");
}

#[test]
fn division_type_faults_by_zero() {
    assert_error("1 / 0", "Division by zero");
    assert_error("1 // 0", "Division by zero");
    assert_error("1 % 0", "Division by zero");
    assert_error("1.5 / 0", "Division by zero");
    assert_error("1j / 0", "Division by zero");
    assert_error("0 ** -1", "Division by zero");
}

#[test]
fn exponent_limit_message_names_value_and_limit() {
    let error = evaluate_expression("2 ** 101").unwrap_err().to_string();
    assert!(error.contains("101"), "message was {error:?}");
    assert!(error.contains("100"), "message was {error:?}");

    assert_error("2 ** -101", "exceeds the limit");
    assert_error("2.0 ** 101", "exceeds the limit");
    assert_error("2 ** 200j", "exceeds the limit");
}

#[test]
fn exponent_limit_checks_the_evaluated_operand() {
    assert_error("2 ** (50 + 51)", "exceeds the limit");
    assert_value("2 ** (5 + 5)", Value::Integer(1024));
}

#[test]
fn integer_pow_overflow_is_reported() {
    // Passes the exponent guard, but does not fit in an i64.
    assert_error("2 ** 100", "overflow");
    assert_error("9223372036854775807 + 1", "overflow");
}

#[test]
fn chained_comparisons() {
    assert_value("1 < 2", Value::Bool(true));
    assert_value("1 < 2 < 3", Value::Bool(true));
    assert_value("1 < 2 < 1", Value::Bool(false));
    assert_value("1 < 2 > 1", Value::Bool(true));
    assert_value("3 == 3 == 3", Value::Bool(true));
    // Pairs keep being evaluated after an early failure; the conjunction
    // still comes out false.
    assert_value("1 < 2 < 1 < 3", Value::Bool(false));
}

#[test]
fn comparison_failures_still_evaluate_later_operands() {
    // The failing pair sits first; a fault in a later operand must still
    // surface, proving the chain is not short-circuited.
    assert_error("2 < 1 < (1 / 0)", "Division by zero");
}

#[test]
fn equality_across_numeric_types() {
    assert_value("1 == 1.0", Value::Bool(true));
    assert_value("1j == 1j", Value::Bool(true));
    assert_value("1j != 2j", Value::Bool(true));
    assert_value("1 + 0j == 1", Value::Bool(true));
    assert_value("2 != 2", Value::Bool(false));
}

#[test]
fn complex_ordering_is_a_type_fault() {
    assert_error("1j < 2j", "not supported");
    assert_error("1j <= 1", "not supported");
    assert_error("3 > 1j", "not supported");
}

#[test]
fn identifiers_are_unsupported_expressions() {
    assert_error("x", "Unsupported expression type");
    assert_error("foo + 1", "Unsupported expression type");
    assert_error("true", "Unsupported expression type");
}

#[test]
fn malformed_input_is_an_error_not_a_panic() {
    assert_error("1 + ", "end of input");
    assert_error("", "empty");
    assert_error("(1", "closing parenthesis");
    assert_error("1 +* 2", "Unexpected token");
    assert_error("1 2", "Extra tokens");
    assert_error("1 = 2", "Unexpected token");
    assert_error("\"text\"", "Unexpected token");
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate_expression("3 ** 4 - 1").unwrap();
    let second = evaluate_expression("3 ** 4 - 1").unwrap();
    assert_eq!(first, second);

    let first = evaluate_expression("1 / 0").unwrap_err().to_string();
    let second = evaluate_expression("1 / 0").unwrap_err().to_string();
    assert_eq!(first, second);
}

#[test]
fn exponent_precheck_basics() {
    assert!(!exceeds_exponent_limit("1 + 1"));
    assert!(!exceeds_exponent_limit("2 ** 100"));
    assert!(exceeds_exponent_limit("2 ** 101"));
    assert!(exceeds_exponent_limit("2 ** -101"));
    assert!(exceeds_exponent_limit("2 ** (50 + 51)"));
    assert!(exceeds_exponent_limit("1 + 2 ** 101"));
    assert!(exceeds_exponent_limit("2 ** 101 < 1"));
}

#[test]
fn exponent_precheck_fails_closed() {
    assert!(exceeds_exponent_limit("2 **"));
    assert!(exceeds_exponent_limit(""));
    assert!(exceeds_exponent_limit("1 + "));
    // The nested exponent cannot be evaluated within the limit, so the
    // outer operand is conservatively treated as exceeding it.
    assert!(exceeds_exponent_limit("2 ** 2 ** 200"));
}

#[test]
fn exponent_precheck_agrees_with_evaluation() {
    let source = "2 ** 101";
    assert!(exceeds_exponent_limit(source));
    assert_error(source, "exceeds the limit");
}

#[test]
fn deep_nesting_is_rejected() {
    let depth = 800;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_error(&source, "too deep");

    // Long flat chains build deep trees without deep parser recursion; the
    // evaluator carries its own guard for those.
    let source = format!("1{}", " + 1".repeat(depth));
    assert_error(&source, "nested too deeply");
}

#[test]
fn overlong_input_is_rejected() {
    let source = format!("1{}", " + 1".repeat(10_000));
    assert_error(&source, "too long");
}

#[test]
fn special_factorial() {
    assert_eq!(special::factorial(0), Some(1));
    assert_eq!(special::factorial(1), Some(1));
    assert_eq!(special::factorial(5), Some(120));
    assert_eq!(special::factorial(20), Some(2_432_902_008_176_640_000));
    assert_eq!(special::factorial(21), None);
}

#[test]
fn special_fibonacci() {
    assert_eq!(special::fibonacci(0), Some(0));
    assert_eq!(special::fibonacci(1), Some(1));
    assert_eq!(special::fibonacci(2), Some(1));
    assert_eq!(special::fibonacci(10), Some(55));
    assert_eq!(special::fibonacci(92), Some(7_540_113_804_746_346_429));
    assert_eq!(special::fibonacci(93), None);
    // Negafibonacci: F(-n) = (-1)^(n + 1) * F(n)
    assert_eq!(special::fibonacci(-1), Some(1));
    assert_eq!(special::fibonacci(-2), Some(-1));
    assert_eq!(special::fibonacci(-8), Some(-21));
}

#[test]
fn special_table() {
    let rendered = special::table(3);
    assert!(rendered.starts_with("3 X 1 = 3"));
    assert!(rendered.contains("3 X 7 = 21"));
    assert!(rendered.ends_with("3 X 10 = 30"));
    assert_eq!(rendered.lines().count(), 10);

    assert_eq!(special::table(0), "Multiplicative property of zero");
    assert!(special::table(-4).contains("-4 X 2 = -8"));
}
