use crate::routes::{self, RouteEntry};

/// Render the route table as the `urls.js` script loaded by the browser client
///
/// Emits one `var url_<name> = "<template>";` declaration per entry, in table
/// order, separated by newlines.
pub fn render() -> String {
    render_entries(routes::entries())
}

fn render_entries(entries: &[RouteEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            // JSON string literals are valid JavaScript string literals
            let literal = serde_json::Value::from(entry.template).to_string();
            format!("var url_{} = {};", entry.name, literal)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
