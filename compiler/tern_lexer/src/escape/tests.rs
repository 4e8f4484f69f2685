use super::*;

fn unescape(s: &str) -> (String, Vec<(usize, char)>) {
    let mut unknown = Vec::new();
    let out = unescape_string(s, |offset, c| unknown.push((offset, c)));
    (out, unknown)
}

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(unescape("hello world"), ("hello world".to_string(), vec![]));
}

#[test]
fn known_escapes_resolve() {
    let (out, unknown) = unescape(r#"a\nb\tc\\d\"e"#);
    assert_eq!(out, "a\nb\tc\\d\"e");
    assert!(unknown.is_empty());
}

#[test]
fn unknown_escape_is_kept_and_reported() {
    let (out, unknown) = unescape(r"x\qy");
    assert_eq!(out, r"x\qy");
    assert_eq!(unknown, vec![(1, 'q')]);
}

#[test]
fn multibyte_content_survives() {
    let (out, _) = unescape("héllo\\n");
    assert_eq!(out, "héllo\n");
}
