use lispy::grammar::MAX_DEPTH;
use lispy::{GrammarErrorKind, Value, ValueKind, parse, print, read, read_str};

fn rep(input: &str) -> String {
    match parse("<stdin>", input) {
        Ok(ast) => {
            let value = read(&ast);
            let rendered = print(&value);
            value.release();
            rendered
        }
        Err(e) => e.to_string(),
    }
}

/// Read a line holding a single expression and return that expression.
fn read_single(input: &str) -> Value {
    let root = read_str("<stdin>", input).unwrap();
    assert_eq!(root.children().len(), 1, "expected one top-level expression");
    root.children()[0].clone()
}

#[test]
fn test_numbers() {
    assert_eq!(print(&read_single("42")), "42");
    assert_eq!(print(&read_single("-7")), "-7");
    assert_eq!(print(&read_single("007")), "7");
    assert_eq!(print(&read_single("-0")), "0");
}

#[test]
fn test_number_overflow() {
    assert_eq!(print(&read_single("9223372036854775808")), "Error: invalid number");
    assert_eq!(print(&read_single("-9223372036854775809")), "Error: invalid number");
    assert_eq!(
        print(&read_single("123456789012345678901234567890")),
        "Error: invalid number"
    );
    assert_eq!(print(&read_single("9223372036854775807")), "9223372036854775807");
}

#[test]
fn test_nesting() {
    let value = read_single("(+ 1 (- 2 3))");
    assert_eq!(value.kind(), ValueKind::Sexpr);
    assert_eq!(print(&value), "(+ 1 (- 2 3))");
    assert_eq!(value.depth(), 3);
}

#[test]
fn test_top_level_wrapper() {
    assert_eq!(rep("(+ 1 (- 2 3))"), "((+ 1 (- 2 3)))");
    assert_eq!(rep("+ 2 2"), "(+ 2 2)");
    assert_eq!(rep("add 1 (min 2 3)"), "(add 1 (min 2 3))");
}

#[test]
fn test_empty_expression() {
    let value = read_single("()");
    assert_eq!(value.kind(), ValueKind::Sexpr);
    assert!(value.children().is_empty());
    assert_eq!(print(&value), "()");
}

#[test]
fn test_whitespace_normalization() {
    assert_eq!(rep("  (  *   1\t2 )   "), "((* 1 2))");
    assert_eq!(rep("(/(+ 1 2)())"), "((/ (+ 1 2) ()))");
}

#[test]
fn test_punctuation_exclusion() {
    // "+", "(-)" and "()" are the only meaningful children
    let value = read_single("(+ (-) ())");
    assert_eq!(value.children().len(), 3);
    assert_eq!(value.children()[1].children().len(), 1);
    assert_eq!(value.children()[2].children().len(), 0);
    assert!(
        value
            .children()
            .iter()
            .all(|child| !matches!(child, Value::Symbol(s) if s == "(" || s == ")"))
    );
}

#[test]
fn test_malformed_literal_keeps_siblings() {
    assert_eq!(
        rep("(+ 1 99999999999999999999 (- 3))"),
        "((+ 1 Error: invalid number (- 3)))"
    );
}

#[test]
fn test_grammar_failures() {
    assert_eq!(
        rep("(+ 1"),
        "<stdin>:1:5: error: expected number, symbol, '(' or ')' at end of input"
    );
    assert_eq!(
        rep("hello"),
        "<stdin>:1:1: error: expected number, symbol or '(' at 'h'"
    );
    assert_eq!(
        rep("1 2)"),
        "<stdin>:1:4: error: expected number, symbol, '(' or end of input at ')'"
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let value = read_str("<stdin>", "(* (+ 1 2) (min 4 -5) ())").unwrap();
    let first = print(&value);
    let second = print(&value);
    assert_eq!(first, second);
}

#[test]
fn test_release_visits_every_node() {
    let value = read_str("<stdin>", "(+ 1 (- 2 3) ())").unwrap();
    // root, sexpr, +, 1, sexpr, -, 2, 3, ()
    assert_eq!(value.node_count(), 9);
    assert_eq!(value.release(), 9);
}

/// Run `f` with the stack size of a process main thread.
fn on_main_sized_stack<F: FnOnce() + Send + 'static>(f: F) {
    std::thread::Builder::new()
        .stack_size(8 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

fn nested(depth: usize) -> String {
    format!("{}{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_deepest_accepted_nesting_round_trips() {
    on_main_sized_stack(|| {
        let value = read_str("<stdin>", &nested(MAX_DEPTH)).unwrap();
        assert_eq!(value.depth(), MAX_DEPTH + 1);
        assert_eq!(print(&value), format!("({})", nested(MAX_DEPTH)));
        assert_eq!(value.release(), MAX_DEPTH + 1);
    });
}

#[test]
fn test_excessive_nesting_is_a_grammar_error() {
    on_main_sized_stack(|| {
        let err = read_str("<stdin>", &nested(100_000)).unwrap_err();
        assert_eq!(err.kind, GrammarErrorKind::TooDeep);
        assert_eq!(
            rep(&nested(100_000)),
            "<stdin>:1:1025: error: expressions nested deeper than 1024 levels"
        );
        // the next line is unaffected
        assert_eq!(rep("(+ 1 2)"), "((+ 1 2))");
    });
}
