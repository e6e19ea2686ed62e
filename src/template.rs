//! Placeholder substitution for route templates.
//!
//! A placeholder is `<name>` where `name` is non-empty and contains no `<`, `>`
//! or `/`. Values are inserted verbatim; percent-encoding belongs to whoever
//! builds the request.

use crate::error::ApiError;

/// Placeholder names in `template`, in order of appearance
pub fn placeholders(template: &str) -> Result<Vec<&str>, ApiError> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('<') {
        if rest[..start].contains('>') {
            return Err(ApiError::MalformedTemplate(template.to_string()));
        }
        let after = &rest[start + 1..];
        let end = after
            .find(|c: char| c == '>' || c == '<' || c == '/')
            .filter(|&i| after.as_bytes()[i] == b'>' && i > 0)
            .ok_or_else(|| ApiError::MalformedTemplate(template.to_string()))?;
        names.push(&after[..end]);
        rest = &after[end + 1..];
    }

    if rest.contains('>') {
        return Err(ApiError::MalformedTemplate(template.to_string()));
    }

    Ok(names)
}

/// Substitute every placeholder in `template` with its binding
///
/// Bindings that name no placeholder are ignored. A placeholder without a
/// binding fails with [`ApiError::MissingBinding`].
pub fn expand(template: &str, bindings: &[(&str, &str)]) -> Result<String, ApiError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    for name in placeholders(template)? {
        let token_start = rest.find('<').unwrap_or(rest.len());
        out.push_str(&rest[..token_start]);

        let value = bindings
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| ApiError::MissingBinding {
                placeholder: name.to_string(),
                template: template.to_string(),
            })?;
        out.push_str(value);

        // skip "<" + name + ">"
        rest = &rest[token_start + name.len() + 2..];
    }
    out.push_str(rest);

    Ok(out)
}
