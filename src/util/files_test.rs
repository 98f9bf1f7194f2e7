use super::*;

#[test]
fn txt_extension_routes_as_text() {
    assert!(is_plain_text_upload("notes.txt", "application/octet-stream"));
}

#[test]
fn txt_extension_is_case_insensitive() {
    assert!(is_plain_text_upload("NOTES.TXT", ""));
    assert!(is_plain_text_upload("Readme.Txt", ""));
}

#[test]
fn plain_text_content_type_routes_as_text() {
    assert!(is_plain_text_upload("notes", "text/plain"));
}

#[test]
fn images_do_not_route_as_text() {
    assert!(!is_plain_text_upload("photo.png", "image/png"));
    assert!(!is_plain_text_upload("photo.jpg", "image/jpeg"));
}

#[test]
fn other_text_subtypes_do_not_route_as_text() {
    assert!(!is_plain_text_upload("page.html", "text/html"));
}
