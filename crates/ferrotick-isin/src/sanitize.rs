/// Drop every character that is not an ASCII letter or digit and upper-case
/// the rest.
///
/// Never fails. Unicode letters, whitespace and punctuation are all removed,
/// so the result may be empty.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}
