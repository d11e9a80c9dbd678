/// Turns a toolkit key name into the character a label would use.
///
/// Names are upper-cased and the toolkit's `period` becomes `.`. Anything
/// that is not a single character afterwards (`Escape`, `F1`, ...) can never
/// match a label.
pub fn key_to_label_char(name: &str) -> Option<char> {
    let name = name.to_ascii_uppercase();
    if name == "PERIOD" {
        return Some('.');
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
