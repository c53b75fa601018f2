use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Domain representation of a school in the rating table.
///
/// The provider delivers the list pre-sorted by descending rating, but the
/// table re-sorts client-side, so ordering is never assumed here.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct School {
    /// Unique identifier of the school.
    #[serde(default)]
    pub id: i64,
    /// Display name of the school.
    #[serde(default)]
    pub name: String,
    /// URL slug of the school profile.
    #[serde(default)]
    pub slug: String,
    /// Aggregated rating; absent or malformed values become 0.
    #[serde(default, deserialize_with = "rating_or_zero")]
    pub rating: f64,
    /// Number of collected reviews.
    #[serde(default, deserialize_with = "reviews_or_zero")]
    pub reviews_count: u64,
    /// Optional logo URL.
    #[serde(default)]
    pub logo: Option<String>,
    /// Optional school website.
    #[serde(default)]
    pub website: Option<String>,
    /// Profile page on the catalog site.
    #[serde(default)]
    pub url: Option<String>,
}

/// Column the schools table is sorted by.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SchoolSortField {
    #[default]
    Rating,
    Reviews,
}

/// Direction of the schools table sort.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SchoolSortField {
    /// Identifier used in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SchoolSortField::Rating => "rating",
            SchoolSortField::Reviews => "reviews",
        }
    }
}

impl SortDirection {
    /// The opposite direction, used when a column header is clicked again.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Identifier used in the `dir` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

// The schools API serializes numbers as strings depending on the backing
// store, so both columns parse leniently.
fn rating_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn reviews_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
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
