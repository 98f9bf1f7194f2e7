use super::*;

// =============================================================
// split_language_tag
// =============================================================

#[test]
fn split_extracts_tag_and_body() {
    let (language, body) = split_language_tag("[python]\nprint(1)");
    assert_eq!(language, Some("python"));
    assert_eq!(body, "print(1)");
}

#[test]
fn split_removes_exactly_the_marker_including_newline() {
    let (language, body) = split_language_tag("[rust]\nfn main() {}\n");
    assert_eq!(language, Some("rust"));
    assert_eq!(body, "fn main() {}\n");
}

#[test]
fn split_without_marker_returns_content_untouched() {
    let (language, body) = split_language_tag("print(1)");
    assert_eq!(language, None);
    assert_eq!(body, "print(1)");
}

#[test]
fn split_requires_newline_after_bracket() {
    let (language, body) = split_language_tag("[python] print(1)");
    assert_eq!(language, None);
    assert_eq!(body, "[python] print(1)");
}

#[test]
fn split_rejects_empty_language() {
    let (language, body) = split_language_tag("[]\nprint(1)");
    assert_eq!(language, None);
    assert_eq!(body, "[]\nprint(1)");
}

#[test]
fn split_rejects_language_spanning_lines() {
    let (language, body) = split_language_tag("[py\nthon]\nprint(1)");
    assert_eq!(language, None);
    assert_eq!(body, "[py\nthon]\nprint(1)");
}

#[test]
fn split_takes_shortest_match_with_embedded_bracket() {
    // First `]\n` wins, so a `]` inside the tag survives.
    let (language, body) = split_language_tag("[c]]\nint x;");
    assert_eq!(language, Some("c]"));
    assert_eq!(body, "int x;");
}

#[test]
fn split_handles_empty_content() {
    assert_eq!(split_language_tag(""), (None, ""));
}

// =============================================================
// prepend_language_tag / download_file_name
// =============================================================

#[test]
fn prepend_restores_marker_form() {
    let tagged = prepend_language_tag("python", "print(1)");
    assert_eq!(tagged, "[python]\nprint(1)");
    // Round-trips through the splitter.
    assert_eq!(split_language_tag(&tagged), (Some("python"), "print(1)"));
}

#[test]
fn download_file_name_includes_language_when_known() {
    assert_eq!(download_file_name("rust"), "code_rust.txt");
    assert_eq!(download_file_name(""), "code.txt");
}
