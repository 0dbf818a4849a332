//! Literal `{{ NAME }}` placeholder substitution.

/// Replace every `{{ NAME }}` whose trimmed name appears in `vars`.
///
/// The template is scanned once from left to right and substituted values are never
/// re-scanned. Unknown names and an unterminated `{{` are copied through unchanged.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        // Copy the literal text before the placeholder
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        // No closing braces anywhere: the remainder is literal text
        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = after_open[..close].trim();
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => {
                // Skip past the closing braces so the value is never re-scanned
                out.push_str(value);
                rest = &after_open[close + 2..];
            }
            None => {
                // Resume right after the braces
                out.push_str("{{");
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}
