use serde::Deserialize;

/// Default row marker recognized at the end of a bulk template.
pub const DEFAULT_MARKER: &str = "(?)";

/// Default placeholder token repeated inside each bulk row group.
pub const DEFAULT_PLACEHOLDER: &str = "?";

/// Construction options for [`QueryBuilder`](crate::QueryBuilder) and
/// [`BulkBuilder`](crate::BulkBuilder).
///
/// Setters are applied in call order; a later call overrides an earlier one.
/// The marker and placeholder only affect `BulkBuilder`.
///
/// Can also be loaded from configuration; missing fields fall back to the defaults
/// and empty strings are treated as unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    capacity: usize,
    marker: String,
    placeholder: String,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            capacity: 0,
            marker: DEFAULT_MARKER.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl BuilderOptions {
    /// Create options with defaults (capacity 0, marker `(?)`, placeholder `?`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity of the argument list.
    ///
    /// Negative values are clamped to 0.
    pub fn with_capacity(mut self, capacity: isize) -> Self {
        self.capacity = usize::try_from(capacity).unwrap_or(0);
        self
    }

    /// Set the row marker used by bulk builders. An empty marker restores `(?)`.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set the placeholder token used by bulk builders. An empty token restores `?`.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn marker(&self) -> &str {
        non_empty_or(&self.marker, DEFAULT_MARKER)
    }

    pub fn placeholder(&self) -> &str {
        non_empty_or(&self.placeholder, DEFAULT_PLACEHOLDER)
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = BuilderOptions::new();
        assert_eq!(opts.capacity(), 0);
        assert_eq!(opts.marker(), "(?)");
        assert_eq!(opts.placeholder(), "?");
    }

    #[test]
    fn negative_capacity_clamps_to_zero() {
        assert_eq!(BuilderOptions::new().with_capacity(-5).capacity(), 0);
        assert_eq!(BuilderOptions::new().with_capacity(16).capacity(), 16);
    }

    #[test]
    fn empty_strings_reset_to_defaults() {
        let opts = BuilderOptions::new().with_marker("[row]").with_marker("");
        assert_eq!(opts.marker(), "(?)");

        let opts = BuilderOptions::new().with_placeholder("");
        assert_eq!(opts.placeholder(), "?");
    }

    #[test]
    fn later_setters_override_earlier_ones() {
        let opts = BuilderOptions::new()
            .with_capacity(4)
            .with_placeholder("$")
            .with_capacity(8)
            .with_placeholder("%s");
        assert_eq!(opts.capacity(), 8);
        assert_eq!(opts.placeholder(), "%s");
    }

    #[test]
    fn deserializes_with_field_defaults() {
        let opts: BuilderOptions = serde_json::from_str(r#"{"capacity": 32}"#).unwrap();
        assert_eq!(opts.capacity(), 32);
        assert_eq!(opts.marker(), "(?)");

        let opts: BuilderOptions =
            serde_json::from_str(r#"{"marker": "", "placeholder": "%s"}"#).unwrap();
        assert_eq!(opts.marker(), "(?)");
        assert_eq!(opts.placeholder(), "%s");
    }
}
