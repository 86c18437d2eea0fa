use super::*;

#[test]
fn snippet_truncates_long_text() {
    let text = "word ".repeat(100);
    let result = snippet(&text);
    assert_eq!(result.chars().count(), SNIPPET_CHARS);
}

#[test]
fn snippet_flattens_newlines() {
    let result = snippet("first line\nsecond line\r\nthird line");
    assert_eq!(result, "first line second line  third line");
}

#[test]
fn snippet_leaves_short_text_alone() {
    assert_eq!(snippet("a short speech"), "a short speech");
}

#[test]
fn snippet_counts_characters_not_bytes() {
    let text = "é".repeat(SNIPPET_CHARS + 50);
    let result = snippet(&text);
    assert_eq!(result.chars().count(), SNIPPET_CHARS);
}

#[test]
fn snippet_of_empty_text_is_empty() {
    assert_eq!(snippet(""), "");
}
