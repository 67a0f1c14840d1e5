/// Returns the interior lines of the first block opened by `"<starts_with> {"`.
///
/// The block ends at the first line after the opener whose trimmed text is
/// exactly `}`. Brace depth is not tracked: the declarations located this way
/// never nest braces, and callers depend on first-`}` semantics. Use
/// [`super::nested`] for blocks that contain nested regions.
///
/// Lines are returned untrimmed. An empty result means either the opener was
/// not found or no closing line follows it.
pub fn match_block<'a>(starts_with: &str, text: &'a str) -> Vec<&'a str> {
    let opener = format!("{starts_with} {{");
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(start) = lines
        .iter()
        .position(|line| line.trim_start().starts_with(&opener))
    else {
        return Vec::new();
    };

    let Some(end) = lines[start..]
        .iter()
        .position(|line| line.trim() == "}")
        .map(|offset| start + offset)
    else {
        return Vec::new();
    };

    lines[start + 1..end].to_vec()
}
