use serde::{Deserialize, Serialize};

use crate::config::{self, PRICE_CEILING};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Sort mode of the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    Rating,
    DurationAsc,
}

impl SortBy {
    /// Parse a sort identifier, falling back to [`SortBy::Popular`] for
    /// anything unknown.
    pub fn parse(value: &str) -> Self {
        match value {
            "price_asc" => SortBy::PriceAsc,
            "price_desc" => SortBy::PriceDesc,
            "rating" => SortBy::Rating,
            "duration_asc" => SortBy::DurationAsc,
            _ => SortBy::Popular,
        }
    }

    /// Identifier used in option values and query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Popular => "popular",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::Rating => "rating",
            SortBy::DurationAsc => "duration_asc",
        }
    }
}

/// Set-valued facets: multiple simultaneous selections, OR within the
/// facet, AND across facets.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SetFacet {
    Categories,
    Directions,
    Schools,
    Levels,
    Targets,
}

/// On/off facets.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BoolFacet {
    TopSale,
    WowEffect,
    JobHelp,
    FreeOnly,
    HasInstallment,
}

/// Facets accepting at most one active bucket at a time.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExclusiveFacet {
    PriceRange,
    Duration,
}

/// The authoritative filter state of the catalog.
///
/// Every mutator that changes a predicate or the ordering resets
/// `current_page` to 1, because the pagination window is a prefix of the
/// filtered, ordered collection and any such change invalidates it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FilterState {
    pub categories: Vec<String>,
    pub directions: Vec<String>,
    pub schools: Vec<String>,
    pub levels: Vec<String>,
    pub targets: Vec<String>,
    /// Selected price bucket value, if any.
    pub price_range: Option<String>,
    /// Selected duration bucket value, if any.
    pub duration: Option<String>,
    pub is_top_sale: bool,
    pub is_wow_effect: bool,
    pub job_help: bool,
    pub free_only: bool,
    pub has_installment: bool,
    /// Lower bound of the continuous price slider.
    pub price_min: f64,
    /// Upper bound of the continuous price slider.
    pub price_max: f64,
    pub search_query: String,
    pub sort_by: SortBy,
    pub current_page: usize,
    pub per_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            directions: Vec::new(),
            schools: Vec::new(),
            levels: Vec::new(),
            targets: Vec::new(),
            price_range: None,
            duration: None,
            is_top_sale: false,
            is_wow_effect: false,
            job_help: false,
            free_only: false,
            has_installment: false,
            price_min: 0.0,
            price_max: PRICE_CEILING,
            search_query: String::new(),
            sort_by: SortBy::default(),
            current_page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl FilterState {
    /// Add `value` to a set-valued facet, or remove it when already
    /// present. Selection order is kept for the active-filter chips.
    pub fn toggle_set_member(&mut self, facet: SetFacet, value: &str) {
        let set = self.set_mut(facet);
        match set.iter().position(|member| member == value) {
            Some(index) => {
                set.remove(index);
            }
            None => set.push(value.to_string()),
        }
        self.current_page = 1;
    }

    /// Flip a boolean facet.
    pub fn toggle_flag(&mut self, facet: BoolFacet) {
        let flag = self.flag_mut(facet);
        *flag = !*flag;
        self.current_page = 1;
    }

    /// Select a bucket of an exclusive facet, or clear it when the same
    /// bucket is selected again. Unknown bucket values leave the state
    /// unchanged.
    pub fn set_exclusive(&mut self, facet: ExclusiveFacet, value: &str) {
        let known = match facet {
            ExclusiveFacet::PriceRange => config::price_bucket(value).is_some(),
            ExclusiveFacet::Duration => config::duration_bucket(value).is_some(),
        };
        if !known {
            return;
        }

        let slot = match facet {
            ExclusiveFacet::PriceRange => &mut self.price_range,
            ExclusiveFacet::Duration => &mut self.duration,
        };
        if slot.as_deref() == Some(value) {
            *slot = None;
        } else {
            *slot = Some(value.to_string());
        }
        self.current_page = 1;
    }

    /// Replace the free-text search query.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Replace the sort mode. Changing the order invalidates the window
    /// even though the filtered set stays the same.
    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.current_page = 1;
    }

    /// Replace the continuous price bounds. `min > max` is tolerated and
    /// simply yields an empty result downstream.
    pub fn set_price_bounds(&mut self, min: f64, max: f64) {
        self.price_min = min.max(0.0);
        self.price_max = max;
        self.current_page = 1;
    }

    /// Restore every facet to its default. The sort mode survives a reset.
    pub fn reset_all(&mut self) {
        let sort_by = self.sort_by;
        let per_page = self.per_page;
        *self = FilterState {
            sort_by,
            per_page,
            ..FilterState::default()
        };
    }

    /// Extend the visible window by one page.
    pub fn load_more(&mut self) {
        self.current_page += 1;
    }

    /// Number of facet dimensions that are away from their default, shown
    /// on the "filters" badge.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        count += usize::from(!self.categories.is_empty());
        count += usize::from(!self.directions.is_empty());
        count += usize::from(!self.schools.is_empty());
        count += usize::from(!self.levels.is_empty());
        count += usize::from(!self.targets.is_empty());
        count += usize::from(self.price_range.is_some());
        count += usize::from(self.duration.is_some());
        count += usize::from(self.is_top_sale);
        count += usize::from(self.is_wow_effect);
        count += usize::from(self.job_help);
        count += usize::from(self.free_only);
        count += usize::from(self.has_installment);
        count
    }

    /// Whether the continuous price slider has been narrowed.
    pub fn price_bounds_active(&self) -> bool {
        self.price_min > 0.0 || self.price_max < PRICE_CEILING
    }

    pub fn set_members(&self, facet: SetFacet) -> &[String] {
        match facet {
            SetFacet::Categories => &self.categories,
            SetFacet::Directions => &self.directions,
            SetFacet::Schools => &self.schools,
            SetFacet::Levels => &self.levels,
            SetFacet::Targets => &self.targets,
        }
    }

    fn set_mut(&mut self, facet: SetFacet) -> &mut Vec<String> {
        match facet {
            SetFacet::Categories => &mut self.categories,
            SetFacet::Directions => &mut self.directions,
            SetFacet::Schools => &mut self.schools,
            SetFacet::Levels => &mut self.levels,
            SetFacet::Targets => &mut self.targets,
        }
    }

    fn flag_mut(&mut self, facet: BoolFacet) -> &mut bool {
        match facet {
            BoolFacet::TopSale => &mut self.is_top_sale,
            BoolFacet::WowEffect => &mut self.is_wow_effect,
            BoolFacet::JobHelp => &mut self.job_help,
            BoolFacet::FreeOnly => &mut self.free_only,
            BoolFacet::HasInstallment => &mut self.has_installment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_set_member_is_an_involution() {
        let mut filters = FilterState::default();
        filters.toggle_set_member(SetFacet::Schools, "Alpha");
        assert_eq!(filters.schools, vec!["Alpha"]);

        filters.toggle_set_member(SetFacet::Schools, "Alpha");
        assert!(filters.schools.is_empty());
    }

    #[test]
    fn toggle_set_member_keeps_selection_order() {
        let mut filters = FilterState::default();
        filters.toggle_set_member(SetFacet::Directions, "python");
        filters.toggle_set_member(SetFacet::Directions, "sql");
        filters.toggle_set_member(SetFacet::Directions, "go");
        filters.toggle_set_member(SetFacet::Directions, "sql");
        assert_eq!(filters.directions, vec!["python", "go"]);
    }

    #[test]
    fn every_mutator_resets_the_page() {
        let mut filters = FilterState::default();

        filters.load_more();
        filters.load_more();
        assert_eq!(filters.current_page, 3);

        filters.toggle_set_member(SetFacet::Levels, "beginner");
        assert_eq!(filters.current_page, 1);

        filters.load_more();
        filters.toggle_flag(BoolFacet::FreeOnly);
        assert_eq!(filters.current_page, 1);

        filters.load_more();
        filters.set_exclusive(ExclusiveFacet::Duration, "1-3");
        assert_eq!(filters.current_page, 1);

        filters.load_more();
        filters.set_search("python");
        assert_eq!(filters.current_page, 1);

        filters.load_more();
        filters.set_sort(SortBy::PriceAsc);
        assert_eq!(filters.current_page, 1);

        filters.load_more();
        filters.set_price_bounds(1000.0, 90_000.0);
        assert_eq!(filters.current_page, 1);
    }

    #[test]
    fn exclusive_facet_toggles_off_on_reselect() {
        let mut filters = FilterState::default();
        filters.set_exclusive(ExclusiveFacet::PriceRange, "free");
        assert_eq!(filters.price_range.as_deref(), Some("free"));

        filters.set_exclusive(ExclusiveFacet::PriceRange, "10-50");
        assert_eq!(filters.price_range.as_deref(), Some("10-50"));

        filters.set_exclusive(ExclusiveFacet::PriceRange, "10-50");
        assert!(filters.price_range.is_none());
    }

    #[test]
    fn unknown_bucket_value_is_a_no_op() {
        let mut filters = FilterState::default();
        filters.set_exclusive(ExclusiveFacet::Duration, "1-3");
        filters.load_more();
        let before = filters.clone();

        filters.set_exclusive(ExclusiveFacet::Duration, "42-99");
        assert_eq!(filters, before);

        filters.set_exclusive(ExclusiveFacet::PriceRange, "cheap");
        assert_eq!(filters, before);
    }

    #[test]
    fn reset_all_restores_defaults_but_keeps_sort() {
        let mut filters = FilterState::default();
        filters.set_sort(SortBy::Rating);
        filters.toggle_set_member(SetFacet::Categories, "typeDesign");
        filters.toggle_flag(BoolFacet::JobHelp);
        filters.set_exclusive(ExclusiveFacet::PriceRange, "free");
        filters.set_price_bounds(5000.0, 70_000.0);
        filters.set_search("figma");
        filters.load_more();

        filters.reset_all();

        assert_eq!(filters.sort_by, SortBy::Rating);
        assert_eq!(filters.current_page, 1);
        assert!(filters.categories.is_empty());
        assert!(!filters.job_help);
        assert!(filters.price_range.is_none());
        assert_eq!(filters.price_min, 0.0);
        assert_eq!(filters.price_max, PRICE_CEILING);
        assert!(filters.search_query.is_empty());
        assert_eq!(filters.active_filter_count(), 0);
    }

    #[test]
    fn active_filter_count_counts_dimensions_not_values() {
        let mut filters = FilterState::default();
        filters.toggle_set_member(SetFacet::Directions, "python");
        filters.toggle_set_member(SetFacet::Directions, "sql");
        filters.toggle_flag(BoolFacet::HasInstallment);
        filters.set_exclusive(ExclusiveFacet::Duration, "3-6");
        assert_eq!(filters.active_filter_count(), 3);
    }

    #[test]
    fn sort_parse_falls_back_to_popular() {
        assert_eq!(SortBy::parse("price_desc"), SortBy::PriceDesc);
        assert_eq!(SortBy::parse("newest"), SortBy::Popular);
        assert_eq!(SortBy::parse(""), SortBy::Popular);
    }
}
