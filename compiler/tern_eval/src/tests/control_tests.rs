//! Statements, operators, calls and collections, end to end.

use pretty_assertions::assert_eq;

use super::{output_of, value_of};
use crate::Value;

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(output_of("print 1 + 2 * 3"), "7\n");
    assert_eq!(output_of("print (1 + 2) * 3"), "9\n");
    assert_eq!(output_of("print 7 / 2"), "3.5\n");
    assert_eq!(output_of("print 10 - 2 - 3"), "5\n");
    assert_eq!(output_of("print -4 + 1"), "-3\n");
}

#[test]
fn comparison_and_equality() {
    assert_eq!(
        output_of("print 1 < 2, 2 <= 2, 3 > 4, 4 >= 5, 1 == 1, 1 != 1"),
        "true, true, false, false, true, false\n"
    );
    assert_eq!(output_of(r#"print "a" == "a", "a" != "b""#), "true, true\n");
    assert_eq!(output_of("print nil == nil, true == true, 1 == true"), "true, true, false\n");
    assert_eq!(output_of(r#"print 1 == "1", nil != false"#), "false, true\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(output_of(r#"print "tern" + "-" + "lang""#), "tern-lang\n");
}

#[test]
fn print_joins_with_comma() {
    assert_eq!(output_of(r#"print 1, "a", true, nil"#), "1, a, true, nil\n");
}

#[test]
fn collections_quote_nested_strings() {
    assert_eq!(
        output_of(r#"print [1, "a", [true, nil]], {"k": "v", 2: 3}"#),
        "[1, \"a\", [true, nil]], {\"k\": \"v\", 2: 3}\n"
    );
}

#[test]
fn logical_operators_short_circuit() {
    // `missing` is never evaluated, so no undeclared-variable error.
    assert_eq!(output_of("print false and missing, true or missing"), "false, true\n");
    assert_eq!(output_of("print true and false, false or true, !false"), "false, true, true\n");
}

#[test]
fn if_else_if_chain() {
    let source = "
        let grade = fn(n) {
            if n > 89 { \"A\" } else if n > 79 { \"B\" } else { \"C\" }
        }
        print grade(95), grade(85), grade(10)
    ";
    assert_eq!(output_of(source), "A, B, C\n");
}

#[test]
fn while_loop_counts() {
    let source = "
        let i = 0
        while i < 3 {
            print i
            i = i + 1
        }
    ";
    assert_eq!(output_of(source), "0\n1\n2\n");
}

#[test]
fn each_over_every_iterable() {
    assert_eq!(output_of("each i: 3 { print i }"), "0\n1\n2\n");
    assert_eq!(output_of("each x: [\"a\", 1] { print x }"), "a\n1\n");
    assert_eq!(output_of("each c: \"hé!\" { print c }"), "h\né\n!\n");
    assert_eq!(
        output_of("let m = {\"b\": 1, \"a\": 2}\neach k: m { print k }"),
        "b\na\n"
    );
    assert_eq!(output_of("each n: range(3, 0) { print n }"), "3\n2\n1\n");
    assert_eq!(output_of("each n: range(0, 10, 4) { print n }"), "0\n4\n8\n");
}

#[test]
fn each_without_binding_repeats() {
    let source = "
        let n = 0
        each 4 { n = n + 1 }
        print n
    ";
    assert_eq!(output_of(source), "4\n");
}

#[test]
fn iterator_values_share_progress() {
    let source = "
        let it = iter([1, 2, 3, 4])
        each x: it {
            print x
            if x == 2 { each y: it { print y * 10 } }
        }
    ";
    assert_eq!(output_of(source), "1\n2\n30\n40\n");
}

#[test]
fn loop_sees_snapshot_of_list() {
    let source = "
        let xs = [1, 2]
        each x: xs { push(xs, x) }
        print xs
    ";
    assert_eq!(output_of(source), "[1, 2, 1, 2]\n");
}

#[test]
fn infinite_each_ends_with_return() {
    let source = "
        let first_over = fn(limit) {
            each n: {
                if n * n > limit { return n }
            }
        }
        print first_over(50)
    ";
    assert_eq!(output_of(source), "8\n");
}

#[test]
fn infinite_while_ends_with_return() {
    let source = "
        let count_down = fn(n) {
            while {
                if n == 0 { return \"done\" }
                n = n - 1
            }
        }
        print count_down(5)
    ";
    assert_eq!(output_of(source), "done\n");
}

#[test]
fn function_results() {
    let source = "
        let implicit = fn(x) { x * 2 }
        let explicit = fn(x) { return x + 1 }
        let bare = fn() { return }
        let nothing = fn() { let y = 1 }
        print implicit(4), explicit(4), bare(), nothing()
    ";
    assert_eq!(output_of(source), "8, 5, nil, nil\n");
}

#[test]
fn return_unwinds_nested_loops() {
    let source = "
        let find = fn(grid, target) {
            each row: grid {
                each cell: row {
                    if cell == target { return true }
                }
            }
            false
        }
        print find([[1, 2], [3, 4]], 3), find([[1]], 9)
    ";
    assert_eq!(output_of(source), "true, false\n");
}

#[test]
fn top_level_functions_are_hoisted() {
    let source = "
        print fib(15)
        print is_even(10), is_odd(7)
        let fib = fn(n) {
            if n < 2 { return n }
            fib(n - 1) + fib(n - 2)
        }
        let is_even = fn(n) { if n == 0 { true } else { is_odd(n - 1) } }
        let is_odd = fn(n) { if n == 0 { false } else { is_even(n - 1) } }
    ";
    assert_eq!(output_of(source), "610\ntrue, true\n");
}

#[test]
fn lists_alias_on_assignment() {
    let source = "
        let a = [1]
        let b = a
        b[0] = 2
        print a[0], a == b, [1] == [1]
    ";
    assert_eq!(output_of(source), "2, true, false\n");
}

#[test]
fn lists_alias_through_calls() {
    let source = "
        let fill = fn(xs) { push(xs, 1, 2) }
        let xs = []
        let same = fill(xs)
        print xs, same == xs, pop(xs), pop([])
    ";
    assert_eq!(output_of(source), "[1, 2], true, 2, nil\n");
}

#[test]
fn map_lookup_by_equal_key() {
    let source = "
        let m = {\"ab\": 1, 2: \"two\", true: \"yes\"}
        let k = \"a\" + \"b\"
        print m[k], m[1 + 1], m[1 == 1], m[\"missing\"], m[3]
    ";
    assert_eq!(output_of(source), "1, two, yes, nil, nil\n");
}

#[test]
fn map_assignment_inserts_and_overwrites() {
    let source = "
        let m = {}
        m[\"a\"] = 1
        m[\"b\"] = 2
        m[\"a\"] = 3
        print m, len(m)
    ";
    assert_eq!(output_of(source), "{\"a\": 3, \"b\": 2}, 2\n");
}

#[test]
fn negative_zero_is_the_same_key() {
    assert_eq!(output_of("let m = {0: \"zero\"}\nprint m[-0]"), "zero\n");
}

#[test]
fn string_indexing_by_code_point() {
    assert_eq!(output_of(r#"print "héllo"[1], "héllo"[4]"#), "é, o\n");
}

#[test]
fn assignment_is_an_expression() {
    let source = "
        let a = 0
        let b = 0
        a = b = 5
        print a, b
    ";
    assert_eq!(output_of(source), "5, 5\n");
}

#[test]
fn fmt_module() {
    let source = "
        import fmt \"fmt\"
        fmt.print(\"a\", 1, [2])
        fmt.println(\"b\")
        fmt.println()
        print fmt, fmt.print
    ";
    assert_eq!(output_of(source), "a1[2]b\n\nmodule fmt, builtin print\n");
}

#[test]
fn values_display() {
    let source = "
        let f = fn(a, b) { a }
        print f, len, range(1), str([1, \"x\"]) + \"!\"
    ";
    assert_eq!(output_of(source), "fn(a, b), builtin len, iterator, [1, \"x\"]!\n");
}

#[test]
fn program_value_is_last_statement() {
    assert_eq!(value_of("1 + 2"), Value::Number(3.0));
    assert_eq!(value_of("let x = 1"), Value::Nil);
    assert_eq!(value_of("\"a\" + \"b\""), Value::string("ab"));
    assert_eq!(value_of("{ 1\n 2 }"), Value::Number(2.0));
}
