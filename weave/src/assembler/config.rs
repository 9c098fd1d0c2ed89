//! Assembler configuration

/// Describes what happens when an assembly is applied twice
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Return [`Error::DuplicateLoad`](crate::error::Error::DuplicateLoad)
    #[default]
    Reject,

    /// Skip the assembly without registering anything
    Ignore,
}

/// Represents an assembler configuration
#[derive(Debug, Default, Clone)]
pub struct AssemblerConfig {
    /// Specifies how applying an already loaded assembly is handled
    ///
    /// Default: [`DuplicatePolicy::Reject`]
    duplicates: DuplicatePolicy,
}

impl AssemblerConfig {
    /// Creates a default assembler configuration
    ///
    /// Defaults:
    /// - duplicates: [`DuplicatePolicy::Reject`]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures how applying an already loaded assembly is handled
    ///
    /// Default: [`DuplicatePolicy::Reject`]
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Configures the assembler to skip assemblies that are already loaded
    pub fn ignore_duplicates(self) -> Self {
        self.with_duplicates(DuplicatePolicy::Ignore)
    }

    /// Returns the configured duplicate policy
    #[inline]
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::{AssemblerConfig, DuplicatePolicy};

    #[test]
    fn it_creates_default_config() {
        let config = AssemblerConfig::new();

        assert_eq!(config.duplicates(), DuplicatePolicy::Reject);
    }

    #[test]
    fn it_ignores_duplicates() {
        let config = AssemblerConfig::new().ignore_duplicates();

        assert_eq!(config.duplicates(), DuplicatePolicy::Ignore);
    }
}
