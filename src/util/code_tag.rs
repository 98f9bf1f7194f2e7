//! Bracketed language tag handling for code messages.
//!
//! Code content may start with a `[<lang>]\n` marker identifying its
//! language. The marker is display metadata: it is stripped before the body
//! is rendered or copied, shown as a tag in the bubble header, and
//! re-prepended when drafted code is downloaded as a file.

#[cfg(test)]
#[path = "code_tag_test.rs"]
mod code_tag_test;

/// Split an optional leading `[<lang>]\n` marker off code content.
///
/// Returns the language (if a marker is present) and the remaining body. The
/// language is the shortest run up to the first `]` followed by a newline;
/// it must be non-empty and cannot itself contain a newline. Content without
/// a valid marker comes back untouched.
pub fn split_language_tag(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix('[') else {
        return (None, content);
    };
    let Some(end) = rest.find("]\n") else {
        return (None, content);
    };
    let language = &rest[..end];
    if language.is_empty() || language.contains('\n') {
        return (None, content);
    }
    (Some(language), &rest[end + 2..])
}

/// Re-prepend a language marker to drafted code for download.
pub fn prepend_language_tag(language: &str, content: &str) -> String {
    format!("[{language}]\n{content}")
}

/// File name for a code download: `code_<lang>.txt` when the language is
/// known, else `code.txt`.
pub fn download_file_name(language: &str) -> String {
    if language.is_empty() {
        "code.txt".to_owned()
    } else {
        format!("code_{language}.txt")
    }
}
