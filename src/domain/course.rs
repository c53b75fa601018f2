use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single course offer as supplied by the per-category data resources.
///
/// The feed is aggregated from many schools and individual fields are not
/// reliable: numbers arrive as strings, arrays are sometimes plain strings
/// or missing entirely. Deserialization therefore normalizes every field
/// to a safe default instead of rejecting the record.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Course {
    /// Unique identifier, stable across loads of the same category.
    #[serde(default, deserialize_with = "int_or_zero")]
    pub id: i64,
    /// Course title shown on the card.
    #[serde(default)]
    pub name: String,
    /// Name of the school offering the course.
    #[serde(default)]
    pub school: String,
    /// Optional URL of the school logo.
    #[serde(default)]
    pub school_logo: Option<String>,
    /// Aggregated school rating; absent or malformed values become 0.
    #[serde(default, deserialize_with = "number_or_zero")]
    pub school_rating: f64,
    /// Number of reviews behind the school rating.
    #[serde(default, deserialize_with = "count_or_zero")]
    pub school_reviews_count: u64,
    /// Direction tags (`python`, `ux_ui`, ...).
    #[serde(default, deserialize_with = "string_list")]
    pub directions: Vec<String>,
    /// Category tags (`typeProgramming`, `typeDesign`, ...).
    #[serde(default, deserialize_with = "string_list")]
    pub learning_type: Vec<String>,
    /// Level tags (`beginner`, `intermediate`, `advanced`).
    #[serde(default, deserialize_with = "string_list")]
    pub levels: Vec<String>,
    /// Learning-goal tags (`learnProfession`, `hobby`, ...).
    #[serde(default, deserialize_with = "string_list")]
    pub course_targets: Vec<String>,
    /// Current price in rubles; 0 means the course is free.
    #[serde(default, deserialize_with = "number_or_zero")]
    pub price: f64,
    /// Pre-discount price, when the school advertises one.
    #[serde(default, deserialize_with = "optional_number")]
    pub price_original: Option<f64>,
    /// Monthly installment amount, when installments are offered.
    #[serde(default, deserialize_with = "optional_number")]
    pub price_installment: Option<f64>,
    /// Course length in months; 0 when the feed does not say.
    #[serde(default, deserialize_with = "number_or_zero")]
    pub duration_months: f64,
    /// Course length in days, for short courses without a month figure.
    #[serde(default, deserialize_with = "number_or_zero")]
    pub duration_days: f64,
    /// Editorial "best seller" flag.
    #[serde(default, deserialize_with = "flag")]
    pub is_top_sale: bool,
    /// Editorial "wow effect" flag.
    #[serde(default, deserialize_with = "flag")]
    pub is_wow_effect: bool,
    /// Whether the school helps with employment after the course.
    #[serde(default, deserialize_with = "flag")]
    pub job_help: bool,
    /// Landing page of the course.
    #[serde(default)]
    pub course_url: Option<String>,
    /// Cover image of the course.
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl Course {
    /// Whether the course costs nothing.
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Discount against the advertised original price, in whole percent.
    /// Returns 0 when there is no original price or it is not higher than
    /// the current one.
    pub fn discount_percent(&self) -> u32 {
        match self.price_original {
            Some(original) if original > self.price && original > 0.0 => {
                ((1.0 - self.price / original) * 100.0).round() as u32
            }
            _ => 0,
        }
    }
}

fn int_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_i64().unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_number(&value).unwrap_or(0.0))
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_number(&value))
}

fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_u64().unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().unwrap_or(0.0) != 0.0,
        _ => false,
    })
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
