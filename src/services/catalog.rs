//! Catalog store and category-switch handling.
//!
//! [`CatalogState`] is the single authoritative instance of the widget
//! state: the raw collection of the active category plus the filter state.
//! All derived views (facet options, filtered set, ordered set, visible
//! window) are pure recomputations performed by [`build_catalog_page`];
//! the stored records themselves are never mutated.

use serde::Serialize;
use validator::Validate;

use crate::DEFAULT_CATEGORY;
use crate::config::{self, Bucket, Category, FacetOption};
use crate::domain::course::Course;
use crate::domain::filters::{FilterState, SortBy};
use crate::forms::catalog::{
    ExclusiveFacetForm, PriceBoundsForm, SearchForm, SortForm, ToggleFacetForm, ToggleFlagForm,
};
use crate::pagination::{Window, windowed_view};
use crate::repository::{CourseReader, RepositoryResult};
use crate::services::facets::{self, DirectionOption, SchoolOption};
use crate::services::{ServiceError, ServiceResult, filtering, group_thousands, ranking};

/// The widget state: raw collection of the active category plus the
/// filter/sort/pagination state.
#[derive(Debug)]
pub struct CatalogState {
    active_category: String,
    courses: Vec<Course>,
    loading: bool,
    /// Last fetch error, kept for diagnostics only. Never blocks the UI.
    last_error: Option<String>,
    pub filters: FilterState,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            active_category: DEFAULT_CATEGORY.to_string(),
            courses: Vec::new(),
            loading: true,
            last_error: None,
            filters: FilterState::default(),
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// The single apply point for fetched collections. The response is
    /// tagged with the category it was requested for; a tag that no longer
    /// matches the active category means the user switched again while the
    /// fetch was in flight, and the stale payload is discarded.
    pub fn apply_collection(&mut self, category: &str, result: RepositoryResult<Vec<Course>>) {
        if category != self.active_category {
            log::warn!(
                "discarding stale collection for '{category}': active category is '{}'",
                self.active_category
            );
            return;
        }
        self.loading = false;
        match result {
            Ok(courses) => {
                self.last_error = None;
                self.courses = courses;
            }
            Err(err) => {
                log::error!("failed to load courses for '{category}': {err}");
                self.last_error = Some(err.to_string());
                self.courses = Vec::new();
            }
        }
    }
}

/// Load the collection of the currently active category. Used once at
/// startup; fetch failures degrade to an empty catalog.
pub fn initialize<R>(state: &mut CatalogState, repo: &R)
where
    R: CourseReader + ?Sized,
{
    let Some(category) = config::category_by_id(state.active_category()) else {
        log::error!("default category '{}' is not configured", state.active_category());
        return;
    };
    state.loading = true;
    let result = fetch_collection(repo, category);
    state.apply_collection(category.id, result);
}

/// Switch the active category: replace the raw collection wholesale and
/// reset every filter, the search and the page. Re-selecting the active
/// category or an unknown id is a no-op.
pub fn select_category<R>(state: &mut CatalogState, repo: &R, category_id: &str)
where
    R: CourseReader + ?Sized,
{
    if state.active_category == category_id {
        return;
    }
    let Some(category) = config::category_by_id(category_id) else {
        log::warn!("ignoring unknown category '{category_id}'");
        return;
    };

    state.active_category = category.id.to_string();
    state.filters.reset_all();
    state.loading = true;

    let result = fetch_collection(repo, category);
    state.apply_collection(category.id, result);
}

// The "top" pseudo-category has no resource of its own: it is the combined
// collection narrowed to the editorially flagged courses.
fn fetch_collection<R>(repo: &R, category: &Category) -> RepositoryResult<Vec<Course>>
where
    R: CourseReader + ?Sized,
{
    match category.resource {
        Some(resource) => repo.list_courses(resource),
        None => {
            let combined = repo.list_courses(config::ALL_COURSES_RESOURCE)?;
            Ok(combined
                .into_iter()
                .filter(|course| course.is_top_sale || course.is_wow_effect)
                .collect())
        }
    }
}

/// Toggle a value of a set-valued facet.
pub fn apply_toggle(state: &mut CatalogState, form: ToggleFacetForm) -> ServiceResult<()> {
    form.validate().map_err(|err| ServiceError::Form(err.to_string()))?;
    state.filters.toggle_set_member(form.facet, &form.value);
    Ok(())
}

/// Flip a boolean facet.
pub fn apply_flag(state: &mut CatalogState, form: ToggleFlagForm) -> ServiceResult<()> {
    state.filters.toggle_flag(form.facet);
    Ok(())
}

/// Select or clear an exclusive bucket facet.
pub fn apply_exclusive(state: &mut CatalogState, form: ExclusiveFacetForm) -> ServiceResult<()> {
    form.validate().map_err(|err| ServiceError::Form(err.to_string()))?;
    state.filters.set_exclusive(form.facet, &form.value);
    Ok(())
}

/// Replace the search query; an empty submission clears it.
pub fn apply_search(state: &mut CatalogState, form: SearchForm) -> ServiceResult<()> {
    state.filters.set_search(form.query.unwrap_or_default());
    Ok(())
}

/// Replace the sort mode; unknown identifiers fall back to "popular".
pub fn apply_sort(state: &mut CatalogState, form: SortForm) -> ServiceResult<()> {
    state.filters.set_sort(SortBy::parse(&form.sort));
    Ok(())
}

/// Replace the continuous price bounds; missing bounds keep the defaults.
pub fn apply_price_bounds(state: &mut CatalogState, form: PriceBoundsForm) -> ServiceResult<()> {
    form.validate().map_err(|err| ServiceError::Form(err.to_string()))?;
    let min = form.min.unwrap_or(0.0);
    let max = form.max.unwrap_or(config::PRICE_CEILING);
    state.filters.set_price_bounds(min, max);
    Ok(())
}

/// Restore every facet to its default, keeping the sort mode.
pub fn reset_filters(state: &mut CatalogState) {
    state.filters.reset_all();
}

/// Extend the visible window by one page.
pub fn load_more(state: &mut CatalogState) {
    state.filters.load_more();
}

/// Everything the catalog page (HTML or JSON) needs to render.
#[derive(Debug, Serialize)]
pub struct CatalogPageData {
    pub active_category: String,
    pub loading: bool,
    /// Visible window of the filtered, ordered collection.
    pub courses: Window<CourseView>,
    /// Size of the whole filtered set, shown as the match counter.
    pub total_matching: usize,
    pub school_options: Vec<SchoolOption>,
    pub direction_options: Vec<DirectionOption>,
    pub active_filter_count: usize,
    pub filters: FilterState,
    pub main_categories: &'static [Category],
    pub more_categories: &'static [Category],
    pub category_options: &'static [FacetOption],
    pub level_options: &'static [FacetOption],
    pub target_options: &'static [FacetOption],
    pub price_buckets: &'static [Bucket],
    pub duration_buckets: &'static [Bucket],
    pub sort_options: &'static [FacetOption],
}

/// Recompute the full derived view from the current state.
pub fn build_catalog_page(state: &CatalogState) -> CatalogPageData {
    let filtered = filtering::filter_courses(state.courses(), &state.filters);
    let total_matching = filtered.len();
    let ordered = ranking::sort_courses(filtered, state.filters.sort_by);
    let window = windowed_view(&ordered, state.filters.current_page, state.filters.per_page);

    let school_options = facets::schools_for_directions(state.courses(), &state.filters.directions);
    let direction_options = facets::extract_directions(state.courses());

    CatalogPageData {
        active_category: state.active_category().to_string(),
        loading: state.loading,
        courses: Window {
            visible: window.visible.iter().map(CourseView::from_course).collect(),
            has_more: window.has_more,
        },
        total_matching,
        school_options,
        direction_options,
        active_filter_count: state.filters.active_filter_count(),
        filters: state.filters.clone(),
        main_categories: config::MAIN_CATEGORIES,
        more_categories: config::MORE_CATEGORIES,
        category_options: config::CATEGORY_OPTIONS,
        level_options: config::LEVEL_OPTIONS,
        target_options: config::TARGET_OPTIONS,
        price_buckets: config::PRICE_BUCKETS,
        duration_buckets: config::DURATION_BUCKETS,
        sort_options: config::SORT_OPTIONS,
    }
}

/// View model of a course card.
#[derive(Debug, Serialize)]
pub struct CourseView {
    pub id: i64,
    pub name: String,
    pub school: String,
    pub school_logo: Option<String>,
    pub rating_label: String,
    pub reviews_count: u64,
    pub price_label: String,
    pub original_price_label: Option<String>,
    pub installment_label: Option<String>,
    pub discount_percent: u32,
    pub duration_label: String,
    pub is_top_sale: bool,
    pub is_wow_effect: bool,
    pub job_help: bool,
    pub course_url: Option<String>,
    pub cover_url: Option<String>,
}

impl CourseView {
    fn from_course(course: &Course) -> Self {
        Self {
            id: course.id,
            name: course.name.clone(),
            school: course.school.clone(),
            school_logo: course.school_logo.clone(),
            rating_label: format_rating(course.school_rating),
            reviews_count: course.school_reviews_count,
            price_label: format_price(course.price),
            original_price_label: course
                .price_original
                .filter(|original| *original > course.price)
                .map(format_price),
            installment_label: course
                .price_installment
                .filter(|amount| *amount > 0.0)
                .map(|amount| format!("от {} / мес.", format_price(amount))),
            discount_percent: course.discount_percent(),
            duration_label: format_duration(course),
            is_top_sale: course.is_top_sale,
            is_wow_effect: course.is_wow_effect,
            job_help: course.job_help,
            course_url: course.course_url.clone(),
            cover_url: course.cover_url.clone(),
        }
    }
}

/// "Бесплатно" for zero, otherwise ruble amounts grouped by thousands.
pub fn format_price(price: f64) -> String {
    if price <= 0.0 {
        return "Бесплатно".to_string();
    }
    format!("{} ₽", group_thousands(price.round() as u64))
}

fn format_rating(rating: f64) -> String {
    if rating > 0.0 {
        format!("{rating:.1}")
    } else {
        "—".to_string()
    }
}

fn format_duration(course: &Course) -> String {
    if course.duration_months > 0.0 {
        format!("{} мес.", trim_number(course.duration_months))
    } else if course.duration_days > 0.0 {
        format!("{} дн.", trim_number(course.duration_days))
    } else {
        String::new()
    }
}

// 9.0 -> "9", 0.5 -> "0.5"
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
