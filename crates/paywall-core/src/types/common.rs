//! Miscellaneous common types used throughout the paywall codebase.

/// Represents a key-value pair keyed by provider-issued string identifiers.
pub type Record<V> = std::collections::HashMap<String, V>;
