use pretty_assertions::assert_eq;
use tern_ir::{LoopSource, StmtKind};

use super::{parse_ok, program_str};

#[test]
fn let_and_expression_statements() {
    assert_eq!(
        program_str("let x = 1\nlet y = x + 2\ny"),
        "let x = 1;\nlet y = (x + 2);\ny;"
    );
    assert_eq!(program_str("let a = 1; let b = 2;"), "let a = 1;\nlet b = 2;");
}

#[test]
fn terminators_are_optional_and_stray_ones_ignored() {
    assert_eq!(program_str(";;print 1;;"), "print 1;");
    assert_eq!(program_str("let f = fn() {} f()"), "let f = fn() {};\nf();");
}

#[test]
fn if_else_chains() {
    assert_eq!(program_str("if x { 1 }"), "if x { 1; }");
    assert_eq!(
        program_str("if a < b {\n  print a\n} else {\n  print b\n}"),
        "if (a < b) { print a; } else { print b; }"
    );
    assert_eq!(
        program_str("if a { 1 } else if b { 2 } else { 3 }"),
        "if a { 1; } else if b { 2; } else { 3; }"
    );
}

#[test]
fn blocks_nest() {
    assert_eq!(program_str("{ let x = 1 { x } }"), "{ let x = 1; { x; } }");
    assert_eq!(program_str("{}"), "{}");
}

#[test]
fn return_with_and_without_value() {
    assert_eq!(
        program_str("let f = fn() { return }"),
        "let f = fn() { return; };"
    );
    assert_eq!(
        program_str("let f = fn() {\n  return\n}"),
        "let f = fn() { return; };"
    );
    assert_eq!(
        program_str("let f = fn(a) { return a * 2; }"),
        "let f = fn(a) { return (a * 2); };"
    );
}

#[test]
fn each_forms() {
    assert_eq!(
        program_str("each i : 3 { print i }"),
        "each i : 3 { print i; }"
    );
    assert_eq!(program_str("each xs { print 1 }"), "each xs { print 1; }");
    assert_eq!(program_str("each {}"), "each {}");
    assert_eq!(
        program_str("each k : range(0, 10, 2) {}"),
        "each k : range(0, 10, 2) {}"
    );

    let output = parse_ok("each {}");
    let StmtKind::Each { binding, source, .. } = &output.program.stmts[0].kind else {
        panic!("expected each loop");
    };
    assert!(binding.is_none());
    assert_eq!(*source, LoopSource::Forever);
}

#[test]
fn while_forms() {
    assert_eq!(
        program_str("while i < 10 { i = i + 1 }"),
        "while (i < 10) { (i = (i + 1)); }"
    );
    assert_eq!(program_str("while {}"), "while {}");
}

#[test]
fn print_lists() {
    assert_eq!(program_str("print 1"), "print 1;");
    assert_eq!(program_str("print 1, \"a\", [2]"), "print 1, \"a\", [2];");
}

#[test]
fn imports() {
    assert_eq!(program_str("import fmt \"fmt\""), "import fmt \"fmt\";");
    assert_eq!(
        program_str("import f \"fmt\"\nf.println(1)"),
        "import f \"fmt\";\n(f.println)(1);"
    );
}

#[test]
fn statement_spans() {
    let output = parse_ok("let x = 10\nprint x");
    let spans: Vec<_> = output
        .program
        .stmts
        .iter()
        .map(|s| s.span.to_range())
        .collect();
    assert_eq!(spans, vec![0..10, 11..18]);
}

#[test]
fn closures_program() {
    let source = "\
let make = fn(n) {
  fn() { n }
}
let a = make(1)
let b = make(2)
print a() == 1 and b() == 2
";
    assert_eq!(
        program_str(source),
        "let make = fn(n) { fn() { n; }; };\n\
         let a = make(1);\n\
         let b = make(2);\n\
         print ((a() == 1) and (b() == 2));"
    );
}
