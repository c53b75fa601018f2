use serde::Deserialize;
use validator::Validate;

use crate::domain::filters::{BoolFacet, ExclusiveFacet, SetFacet};
use crate::forms::empty_string_as_none;

/// Toggles one value of a set-valued facet.
#[derive(Debug, Deserialize, Validate)]
pub struct ToggleFacetForm {
    pub facet: SetFacet,
    #[validate(length(min = 1))]
    pub value: String,
}

/// Flips a boolean facet.
#[derive(Debug, Deserialize)]
pub struct ToggleFlagForm {
    pub facet: BoolFacet,
}

/// Selects (or clears, on reselect) a bucket of an exclusive facet.
#[derive(Debug, Deserialize, Validate)]
pub struct ExclusiveFacetForm {
    pub facet: ExclusiveFacet,
    #[validate(length(min = 1))]
    pub value: String,
}

/// Replaces the free-text search; an empty submission clears it.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub query: Option<String>,
}

/// Replaces the sort mode. The identifier is parsed leniently, so an
/// unknown value degrades to the default ordering instead of erroring.
#[derive(Debug, Deserialize)]
pub struct SortForm {
    pub sort: String,
}

/// Replaces the continuous price bounds; missing fields keep the defaults.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PriceBoundsForm {
    #[validate(range(min = 0.0))]
    pub min: Option<f64>,
    #[validate(range(min = 0.0))]
    pub max: Option<f64>,
}
