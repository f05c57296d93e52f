//! Full pipeline integration tests: Choreo source in, Go text out.
//!
//! These tests drive the public [`Translator`] facade the way the
//! compiler driver does, without touching the filesystem or the Go
//! toolchain.

use choreo::Translator;

/// Helper: translate and unwrap, with diagnostics on failure.
fn translate(src: &str) -> String {
    Translator::translate(src).expect("translation failed")
}

/// Helper: the statements between the emitted `func main() {` line
/// and the closing brace.
fn main_body(go: &str) -> String {
    let start = go.find("func main() {\n").expect("no main function") + "func main() {\n".len();
    let end = go.rfind("}\n").expect("no closing brace");
    go[start..end].to_string()
}

// =============================================================================
// Emitted program shapes
// =============================================================================

#[test]
fn arithmetic_print_program() {
    let go = translate("dance x = 5\ndance y = 10\nspin print(x + y)");
    assert!(go.starts_with("package main\n\n"), "got:\n{go}");
    assert!(go.contains("import (\n\t\"fmt\"\n)\n"), "got:\n{go}");
    assert_eq!(
        main_body(&go),
        "\tx := 5\n\ty := 10\n\tfmt.Println((x + y))\n"
    );
}

#[test]
fn sway_loop_is_inclusive() {
    let go = translate("sway i from 0 to 10 {\n    spin print(i)\n}");
    assert_eq!(
        main_body(&go),
        "\tfor i := 0; i <= 10; i++ {\n\t\tfmt.Println(i)\n\t}\n"
    );
}

#[test]
fn start_wraps_statement_in_goroutine() {
    let go = translate("start sway i from 0 to 3 {\n    spin print(i)\n}");
    assert_eq!(
        main_body(&go),
        "\tgo func() {\n\t\tfor i := 0; i <= 3; i++ {\n\t\t\tfmt.Println(i)\n\t\t}\n\t}()\n"
    );
}

#[test]
fn if_else_with_both_branches() {
    let src = concat!(
        "dance x = 5\n",
        "dance y = 10\n",
        "if x < y {\n",
        "    spin print(\"x is less than y\")\n",
        "} else {\n",
        "    spin print(\"x is not less than y\")\n",
        "}",
    );
    let go = translate(src);
    assert!(go.contains("if (x < y) {"), "got:\n{go}");
    assert!(go.contains("} else {"), "got:\n{go}");
    assert!(go.contains("fmt.Println(\"x is less than y\")"), "got:\n{go}");
    assert!(
        go.contains("fmt.Println(\"x is not less than y\")"),
        "got:\n{go}"
    );
}

#[test]
fn match_lowers_to_switch_in_iife() {
    let src = concat!(
        "dance result = match item {\n",
        "    when Note(n): flow process_note(n)\n",
        "    when Rest(): flow handle_rest()\n",
        "}",
    );
    let go = translate(src);
    assert!(go.contains("result := func() interface{} {"), "got:\n{go}");
    assert!(go.contains("switch item {"), "got:\n{go}");
    assert!(go.contains("case Note:"), "got:\n{go}");
    assert!(go.contains("case Rest:"), "got:\n{go}");
    assert!(go.contains("return nil"), "got:\n{go}");
}

#[test]
fn channels_send_and_start_together() {
    let src = concat!(
        "dance steps = flow channel\n",
        "start sway i from 0 to 3 {\n",
        "    send steps <- i\n",
        "}",
    );
    let go = translate(src);
    assert!(go.contains("steps := make(chan interface{})"), "got:\n{go}");
    assert!(go.contains("steps <- i"), "got:\n{go}");
    assert!(go.contains("go func() {"), "got:\n{go}");
    // Nothing prints, so nothing is imported.
    assert!(!go.contains("import"), "got:\n{go}");
}

// =============================================================================
// Driver-facing contract
// =============================================================================

#[test]
fn parse_errors_refuse_emission() {
    let err = Translator::translate("dance 5 = x").unwrap_err();
    assert_eq!(
        err.diagnostics,
        vec!["expected next token to be IDENT, got INT instead".to_string()]
    );
    assert!(err.to_string().contains("expected next token to be IDENT"));
}

#[test]
fn reserved_keywords_are_rejected_at_parse_time() {
    let err = Translator::translate("return 1").unwrap_err();
    assert_eq!(
        err.diagnostics[0],
        "no prefix parse function for return found"
    );
}

#[test]
fn parse_keeps_collecting_after_an_error() {
    let err = Translator::parse("sway from 0 to 1 { }\nreturn").unwrap_err();
    assert!(err.diagnostics.len() > 1, "got: {:?}", err.diagnostics);
}

#[test]
fn well_formed_parse_exposes_the_tree() {
    let program = Translator::parse("dance x = 1\nspin print(x)").expect("parse failed");
    assert_eq!(program.statements.len(), 2);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn translation_is_deterministic() {
    let src = concat!(
        "dance total = 0\n",
        "sway i from 1 to 3 {\n",
        "    dance total = total + i\n",
        "}\n",
        "spin println(total)",
    );
    assert_eq!(translate(src), translate(src));
}
