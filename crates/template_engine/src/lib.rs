//! Template Engine for Sail Build
//!
//! Renders install-script templates by substituting `{{ key }}` placeholders
//! with the values produced by request resolution. The token format is part
//! of the script contract: a placeholder is the key wrapped in double braces
//! with single spaces, e.g. `{{ php }}`.
//!
//! Rendering is strict: a placeholder left in the output after substitution
//! means the caller's mapping is incomplete, and is reported as an error
//! rather than leaking template syntax to the client.

use std::collections::HashMap;

mod errors;
pub use errors::Error;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Render a template by substituting every `{{ key }}` occurrence.
///
/// Each key in `variables` replaces all occurrences of its token; text that
/// is not a placeholder passes through untouched. An empty value erases the
/// token, which is how optional script fragments (like the devcontainer
/// option) disappear from the output.
///
/// # Errors
///
/// Returns [`Error::UnresolvedPlaceholder`] naming the first placeholder
/// token that survived substitution.
pub fn render(source: &str, variables: &HashMap<String, String>) -> Result<String, Error> {
    let mut rendered = source.to_string();

    for (key, value) in variables {
        let token = format!("{{{{ {} }}}}", key);
        rendered = rendered.replace(&token, value);
    }

    if let Some(name) = first_placeholder(&rendered) {
        return Err(Error::UnresolvedPlaceholder {
            name: name.to_string(),
        });
    }

    Ok(rendered)
}

/// Find the first `{{ ... }}` token remaining in rendered output.
fn first_placeholder(rendered: &str) -> Option<&str> {
    let start = rendered.find("{{")?;
    let tail = &rendered[start + 2..];
    let end = tail.find("}}")?;
    Some(tail[..end].trim())
}
