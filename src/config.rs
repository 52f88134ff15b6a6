//! Configuration for the session driver.

/// Settings for a [`Session`](crate::session::Session).
///
/// # Example
///
/// ```rust
/// use matchbook::Config;
///
/// // Show only the best five levels per side, abort on malformed input.
/// let config = Config::new().with_snapshot_depth(5).with_strict(true);
///
/// assert_eq!(config.snapshot_depth(), Some(5));
/// assert!(config.strict());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Best levels per side to include in snapshots; `None` means all.
    snapshot_depth: Option<usize>,

    /// Whether a malformed protocol line aborts the session instead of
    /// being skipped with a warning.
    strict: bool,
}

impl Config {
    /// Create the default configuration: full-depth snapshots, malformed
    /// lines skipped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit snapshots to the best `levels` price levels per side.
    #[must_use]
    pub fn with_snapshot_depth(mut self, levels: usize) -> Self {
        self.snapshot_depth = Some(levels);
        self
    }

    /// Abort the session on the first malformed line instead of skipping.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build a configuration from environment variables.
    ///
    /// - `MATCHBOOK_DEPTH`: snapshot depth limit (unset or unparsable means
    ///   full depth)
    /// - `MATCHBOOK_STRICT`: any value enables strict parsing
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(depth) = std::env::var("MATCHBOOK_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config = config.with_snapshot_depth(depth);
        }
        if std::env::var_os("MATCHBOOK_STRICT").is_some() {
            config = config.with_strict(true);
        }
        config
    }

    /// Snapshot depth limit, if any.
    #[must_use]
    pub fn snapshot_depth(&self) -> Option<usize> {
        self.snapshot_depth
    }

    /// Whether malformed lines abort the session.
    #[must_use]
    pub const fn strict(&self) -> bool {
        self.strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.snapshot_depth(), None);
        assert!(!config.strict());
    }

    #[test]
    fn test_builder() {
        let config = Config::new().with_snapshot_depth(3).with_strict(true);
        assert_eq!(config.snapshot_depth(), Some(3));
        assert!(config.strict());
    }
}
