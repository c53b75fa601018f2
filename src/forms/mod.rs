use serde::{Deserialize, Deserializer};

pub mod catalog;

/// Deserializes an optional text field, mapping empty or whitespace-only
/// submissions to `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}
