use super::*;

#[test]
fn compose_mode_default_is_text() {
    assert_eq!(ComposeMode::default(), ComposeMode::Text);
    assert_eq!(UiState::default().mode, ComposeMode::Text);
}

#[test]
fn compose_mode_variants_are_distinct() {
    assert_ne!(ComposeMode::Text, ComposeMode::Code);
    assert_ne!(ComposeMode::Text, ComposeMode::File);
    assert_ne!(ComposeMode::Code, ComposeMode::File);
}
