/// Name of the private hook invoked after every constructor body.
pub const AFTER_INITIALIZE: &str = "__after_initialize__";

/// Check that a name can be used as a parameter, reader and slot name.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
