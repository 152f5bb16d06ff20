// Utility functions
use serde::{Deserialize, Deserializer};

/// Deserializes a string field, mapping JSON `null` to an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Case-insensitive substring check. `needle` must already be lowercase.
pub fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}
