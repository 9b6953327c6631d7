/// Extract the feature name from a condition string
///
/// # Arguments
/// * `condition` - Condition text, e.g. `"x11 <= -0.0097629"`
///
/// # Returns
/// * The leading token up to the first space, e.g. `"x11"`
pub fn feature_name(condition: &str) -> &str {
    match condition.find(' ') {
        Some(index) => &condition[..index],
        None => condition,
    }
}

/// Extract the test condition from a condition string
///
/// # Arguments
/// * `condition` - Condition text, e.g. `"x11 <= -0.0097629"`
///
/// # Returns
/// * `Some` with everything after the first space, e.g. `"<= -0.0097629"`
/// * `None` if the text is a bare token with no condition
pub fn condition_suffix(condition: &str) -> Option<String> {
    condition
        .find(' ')
        .map(|index| condition[index + 1..].trim().to_string())
}

/// Strip a comparison-operator suffix from a label candidate
///
/// Cuts at the first `<` or `>` character and trims trailing whitespace,
/// so `"x8 <= -0.04"` becomes `"x8"` and plain names pass through.
pub fn strip_operator(text: &str) -> &str {
    let cut = text.find(['<', '>']).unwrap_or(text.len());
    text[..cut].trim_end()
}
