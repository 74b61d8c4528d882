use calcpad::{
    Notation, Scope, Value,
    interpreter::evaluate,
};
use pretty_assertions::assert_eq;

fn eval_in(scope: &mut Scope, src: &str) -> String {
    match evaluate(src, scope) {
        Ok(Value::Number(n)) => n.to_auto_string(&Notation::default()),
        Ok(other) => panic!("Expression '{src}' produced non-number {other:?}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_eval(src: &str, expected: &str) {
    assert_eq!(eval_in(&mut Scope::new(), src), expected, "while evaluating '{src}'");
}

fn assert_bool(src: &str, expected: bool) {
    assert_eq!(evaluate(src, &mut Scope::new()), Ok(Value::Bool(expected)),
               "while evaluating '{src}'");
}

fn assert_failure(src: &str) {
    if let Ok(v) = evaluate(src, &mut Scope::new()) {
        panic!("Expression '{src}' succeeded with {v:?} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_eval("1 + 2", "3");
    assert_eval("7 * 9", "63");
    assert_eval("8 - 13", "-5");
    assert_eval("10 / 4", "2.5");
    assert_eval("2 * (3 + 4)", "14");
}

#[test]
fn decimal_arithmetic_is_exact() {
    assert_eval("0.1 + 0.2", "0.3");
    assert_eval("1.1 * 1.1", "1.21");
    assert_eval(".5 + .25", "0.75");
}

#[test]
fn division_rounds_to_display_precision() {
    assert_eval("1 / 3", "0.333333333333");
    assert_eval("2 / 3", "0.666666666667");
    assert_eval("1 / 3 * 3", "1");
}

#[test]
fn precedence_and_associativity() {
    assert_eval("-2^2", "-4");
    assert_eval("(-2)^2", "4");
    assert_eval("2^3^2", "512");
    assert_eval("2^-1", "0.5");
    assert_eval("10 - 4 - 3", "3");
    assert_eval("2 + 3 * 4", "14");
    assert_eval("--3", "3");
}

#[test]
fn modulo_is_floored() {
    assert_eval("10 % 3", "1");
    assert_eval("-7 % 3", "2");
    assert_eval("7 % -3", "-2");
    assert_eval("5.5 % 2", "1.5");
}

#[test]
fn auto_notation_thresholds() {
    assert_eval("1e21", "1e+21");
    assert_eval("1.5e-25", "1.5e-25");
    assert_eval("123456789012345678901", "1.23456789012e+20");
    assert_eval("12345678901234567890", "12345678901200000000");
    assert_eval("1e400 * 1e400", "1e+800");
}

#[test]
fn powers() {
    assert_eval("2^10", "1024");
    assert_eval("2^0.5", "1.41421356237");
    assert_eval("0^0", "1");
    assert_eval("10^100", "1e+100");
    assert_eval("10^1e10", "Infinity");
    assert_eval("2^1e-99999999", "1");
}

#[test]
fn constants() {
    assert_eval("pi", "3.14159265359");
    assert_eval("e", "2.71828182846");
    assert_eval("phi", "1.61803398875");
    assert_eval("Infinity", "Infinity");
    assert_eval("-Infinity", "-Infinity");
    assert_eval("NaN + 1", "NaN");
}

#[test]
fn builtin_functions() {
    assert_eval("sqrt(2)", "1.41421356237");
    assert_eval("sqrt(144)", "12");
    assert_eval("abs(-3.5)", "3.5");
    assert_eval("floor(-2.5)", "-3");
    assert_eval("ceil(2.1)", "3");
    assert_eval("round(2.5)", "3");
    assert_eval("round(3.14159, 2)", "3.14");
    assert_eval("min(4, -2, 9)", "-2");
    assert_eval("max(4)", "4");
    assert_eval("log(100, 10)", "2");
    assert_eval("log10(1000)", "3");
    assert_eval("log2(8)", "3");
    assert_eval("exp(0)", "1");
    assert_eval("sin(0)", "0");
    assert_eval("cos(0)", "1");
    assert_eval("atan(0)", "0");
}

#[test]
fn comparisons_produce_booleans() {
    assert_bool("3 < 5", true);
    assert_bool("3 >= 5", false);
    assert_bool("1 == 1.0", true);
    assert_bool("2 != 2", false);
    assert_bool("true == false", false);
    assert_bool("NaN == NaN", false);
}

#[test]
fn assignments_persist_in_scope() {
    let mut scope = Scope::new();
    assert_eq!(eval_in(&mut scope, "x = 5"), "5");
    assert_eq!(eval_in(&mut scope, "y = x * 2"), "10");
    assert_eq!(eval_in(&mut scope, "x + y"), "15");
    assert_eq!(eval_in(&mut scope, "x = x + 1"), "6");
    assert_eq!(eval_in(&mut scope, "x"), "6");
}

#[test]
fn constants_can_be_shadowed() {
    let mut scope = Scope::new();
    assert_eq!(eval_in(&mut scope, "pi = 3"), "3");
    assert_eq!(eval_in(&mut scope, "pi * 2"), "6");
}

#[test]
fn failed_assignment_leaves_scope_untouched() {
    let mut scope = Scope::new();
    assert!(evaluate("x = 1 / 0", &mut scope).is_err());
    assert!(!scope.contains("x"));
}

#[test]
fn runtime_failures() {
    assert_failure("1 / 0");
    assert_failure("5 % 0");
    assert_failure("0^-1");
    assert_failure("sqrt(-1)");
    assert_failure("asin(2)");
    assert_failure("(-8)^0.5");
    assert_failure("Infinity - Infinity");
    assert_failure("Infinity * 0");
    assert_failure("x + 1");
    assert_failure("foo(1)");
    assert_failure("true + 1");
    assert_failure("2 < true");
    assert_failure("sqrt(1, 2)");
    assert_failure("min()");
    assert_failure("round(1, 0.5)");
}

#[test]
fn parse_failures() {
    assert_failure("");
    assert_failure("2 +");
    assert_failure("(1 + 2");
    assert_failure("1 2");
    assert_failure("1 < 2 < 3");
    assert_failure("2 $ 3");
    assert_failure("sqrt = 4");
    assert_failure("max(1,)");
}
