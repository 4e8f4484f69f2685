use pretty_assertions::assert_eq;
use tern_ir::{ExprKind, StmtKind};

use super::{expr_str, parse_ok};

#[test]
fn precedence_and_associativity() {
    let cases = [
        ("1+2*3", "(1 + (2 * 3))"),
        ("(1 + 2) * 3", "((1 + 2) * 3)"),
        ("1 - 2 - 3", "((1 - 2) - 3)"),
        ("8 / 4 / 2", "((8 / 4) / 2)"),
        ("a + b * c - d / e", "((a + (b * c)) - (d / e))"),
        ("1 < 2 == 3 > 4", "((1 < 2) == (3 > 4))"),
        ("a <= b != c >= d", "((a <= b) != (c >= d))"),
        ("a or b and c", "(a or (b and c))"),
        ("a and b or c and d", "((a and b) or (c and d))"),
        ("a == b and c != d", "((a == b) and (c != d))"),
        ("-a * b", "((-a) * b)"),
        ("!a == b", "((!a) == b)"),
        ("--a", "(-(-a))"),
        ("!!true", "(!(!true))"),
        ("-(1 + 2)", "(-(1 + 2))"),
        ("(((x)))", "x"),
    ];
    for (source, expected) in cases {
        assert_eq!(expr_str(source), expected, "{source}");
    }
}

#[test]
fn assignment_is_right_associative_and_lowest() {
    assert_eq!(expr_str("a = b = 3"), "(a = (b = 3))");
    assert_eq!(expr_str("x = 1 + 2 * 3"), "(x = (1 + (2 * 3)))");
    assert_eq!(expr_str("a = b or c"), "(a = (b or c))");
    assert_eq!(expr_str("xs[0] = 2"), "((xs[0]) = 2)");
    assert_eq!(expr_str("m[\"k\"] = m[\"k\"] + 1"), "((m[\"k\"]) = ((m[\"k\"]) + 1))");
}

#[test]
fn postfix_operators_bind_tighter_than_prefix() {
    assert_eq!(expr_str("-f(x)"), "(-f(x))");
    assert_eq!(expr_str("-xs[0]"), "(-(xs[0]))");
    assert_eq!(expr_str("!m.ok"), "(!(m.ok))");
}

#[test]
fn calls_index_and_member_chain() {
    assert_eq!(expr_str("f(1, 2)(3)"), "f(1, 2)(3)");
    assert_eq!(expr_str("f()[0]"), "(f()[0])");
    assert_eq!(expr_str("xs[0][1]"), "((xs[0])[1])");
    assert_eq!(expr_str("fmt.println(1)"), "(fmt.println)(1)");
    assert_eq!(expr_str("fmt.print(1)"), "(fmt.print)(1)");
    assert_eq!(expr_str("add(1 + 2, 3 * 4)"), "add((1 + 2), (3 * 4))");
    assert_eq!(expr_str("f(g(h))"), "f(g(h))");
}

#[test]
fn literals() {
    assert_eq!(expr_str("12"), "12");
    assert_eq!(expr_str("3.5"), "3.5");
    assert_eq!(expr_str("\"hi\""), "\"hi\"");
    assert_eq!(expr_str(r#""a\"b""#), r#""a\"b""#);
    assert_eq!(expr_str("true"), "true");
    assert_eq!(expr_str("false"), "false");
    assert_eq!(expr_str("nil"), "nil");
}

#[test]
fn list_literals() {
    assert_eq!(expr_str("[]"), "[]");
    assert_eq!(expr_str("[1, \"two\", [3]]"), "[1, \"two\", [3]]");
    assert_eq!(expr_str("[1, 2,]"), "[1, 2]");
    assert_eq!(expr_str("[\n  1,\n  2\n]"), "[1, 2]");
}

#[test]
fn map_literals_in_expression_position() {
    assert_eq!(expr_str("let m = {}"), "let m = {}");
    assert_eq!(
        expr_str("let m = {\"a\": 1, 2: [3], true: nil,}"),
        "let m = {\"a\": 1, 2: [3], true: nil}"
    );
    assert_eq!(
        expr_str("let m = {\n  \"a\": 1,\n  \"b\": 2\n}"),
        "let m = {\"a\": 1, \"b\": 2}"
    );
}

#[test]
fn function_literals() {
    assert_eq!(expr_str("fn() {}"), "fn() {}");
    assert_eq!(expr_str("fn(a, b) { return a + b }"), "fn(a, b) { return (a + b); }");
    assert_eq!(
        expr_str("fn(n) { fn() { n } }"),
        "fn(n) { fn() { n; }; }"
    );
    assert_eq!(expr_str("fn(\n  a,\n  b,\n) {}"), "fn(a, b) {}");
    assert_eq!(expr_str("fn(x) { x }(5)"), "fn(x) { x; }(5)");
}

#[test]
fn spans_cover_whole_expression() {
    let output = parse_ok("foo(1, 2) + xs[3]");
    let StmtKind::Expr(expr) = &output.program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    assert_eq!(expr.span.to_range(), 0..17);
    let ExprKind::Binary { left, right, .. } = &expr.kind else {
        panic!("expected binary expression");
    };
    assert_eq!(left.span.to_range(), 0..9);
    assert_eq!(right.span.to_range(), 12..17);
}

#[test]
fn identifiers_start_unresolved() {
    let output = parse_ok("x");
    let StmtKind::Expr(expr) = &output.program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Ident(ident) = &expr.kind else {
        panic!("expected identifier");
    };
    assert_eq!(ident.name.as_str(), "x");
    assert_eq!(ident.depth(), None);
}

#[test]
fn number_values() {
    let output = parse_ok("0.25");
    let StmtKind::Expr(expr) = &output.program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    assert_eq!(expr.kind, ExprKind::Number(0.25));
}
