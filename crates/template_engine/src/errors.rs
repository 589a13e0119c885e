use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types that can occur during template rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A placeholder in the template had no value in the substitution map.
    ///
    /// This means the template and the resolver disagree about the
    /// placeholder set. It is a deployment fault, not a client error, and
    /// the HTTP layer reports it as a generic server error.
    #[error("Template placeholder has no value: {name}")]
    UnresolvedPlaceholder {
        /// The placeholder name as written in the template
        name: String,
    },
}
