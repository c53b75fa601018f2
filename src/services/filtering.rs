//! The predicate engine: reduces the raw collection to the subset matching
//! the active filter state.
//!
//! Each predicate guards itself on its governing facet being active, so a
//! default `FilterState` passes every record through untouched. All
//! predicates compose with logical AND and none of them mutates or
//! reorders the input.

use crate::config;
use crate::domain::course::Course;
use crate::domain::filters::FilterState;

/// Order-preserving subsequence of `courses` that satisfies every active
/// predicate.
pub fn filter_courses(courses: &[Course], filters: &FilterState) -> Vec<Course> {
    courses
        .iter()
        .filter(|course| passes(course, filters))
        .cloned()
        .collect()
}

fn passes(course: &Course, filters: &FilterState) -> bool {
    matches_search(course, filters)
        && matches_categories(course, filters)
        && matches_directions(course, filters)
        && matches_schools(course, filters)
        && matches_levels(course, filters)
        && matches_targets(course, filters)
        && matches_price_bounds(course, filters)
        && matches_price_bucket(course, filters)
        && matches_duration_bucket(course, filters)
        && matches_flags(course, filters)
}

fn matches_search(course: &Course, filters: &FilterState) -> bool {
    let query = filters.search_query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    course.name.to_lowercase().contains(&query)
        || course.school.to_lowercase().contains(&query)
        || course
            .directions
            .iter()
            .any(|direction| direction.to_lowercase().contains(&query))
}

fn matches_categories(course: &Course, filters: &FilterState) -> bool {
    filters.categories.is_empty() || intersects(&course.learning_type, &filters.categories)
}

fn matches_directions(course: &Course, filters: &FilterState) -> bool {
    filters.directions.is_empty() || intersects(&course.directions, &filters.directions)
}

fn matches_schools(course: &Course, filters: &FilterState) -> bool {
    filters.schools.is_empty() || filters.schools.iter().any(|school| *school == course.school)
}

fn matches_levels(course: &Course, filters: &FilterState) -> bool {
    filters.levels.is_empty() || intersects(&course.levels, &filters.levels)
}

fn matches_targets(course: &Course, filters: &FilterState) -> bool {
    filters.targets.is_empty() || intersects(&course.course_targets, &filters.targets)
}

fn matches_price_bounds(course: &Course, filters: &FilterState) -> bool {
    if !filters.price_bounds_active() {
        return true;
    }
    course.price >= filters.price_min && course.price <= filters.price_max
}

fn matches_price_bucket(course: &Course, filters: &FilterState) -> bool {
    let Some(value) = filters.price_range.as_deref() else {
        return true;
    };
    let Some(bucket) = config::price_bucket(value) else {
        // State never holds an unknown bucket, but a stale value must not
        // wipe the whole result set.
        return true;
    };
    if bucket.value == "free" {
        return course.price == 0.0;
    }
    course.price >= bucket.min && course.price <= bucket.max
}

fn matches_duration_bucket(course: &Course, filters: &FilterState) -> bool {
    let Some(value) = filters.duration.as_deref() else {
        return true;
    };
    let Some(bucket) = config::duration_bucket(value) else {
        return true;
    };
    course.duration_months >= bucket.min && course.duration_months <= bucket.max
}

fn matches_flags(course: &Course, filters: &FilterState) -> bool {
    if filters.is_top_sale && !course.is_top_sale {
        return false;
    }
    if filters.is_wow_effect && !course.is_wow_effect {
        return false;
    }
    if filters.job_help && !course.job_help {
        return false;
    }
    if filters.free_only && !course.is_free() {
        return false;
    }
    if filters.has_installment && !course.price_installment.is_some_and(|amount| amount > 0.0) {
        return false;
    }
    true
}

fn intersects(course_tags: &[String], selected: &[String]) -> bool {
    course_tags.iter().any(|tag| selected.contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::{BoolFacet, ExclusiveFacet, SetFacet, SortBy};

    fn course(name: &str) -> Course {
        Course {
            name: name.to_string(),
            ..Course::default()
        }
    }

    fn sample_collection() -> Vec<Course> {
        vec![
            Course {
                id: 1,
                name: "Python-разработчик".to_string(),
                school: "Alpha".to_string(),
                directions: vec!["python".to_string(), "sql".to_string()],
                learning_type: vec!["typeProgramming".to_string()],
                levels: vec!["beginner".to_string()],
                course_targets: vec!["learnProfession".to_string()],
                price: 54_000.0,
                price_installment: Some(2_250.0),
                duration_months: 9.0,
                is_top_sale: true,
                ..Course::default()
            },
            Course {
                id: 2,
                name: "Java с нуля".to_string(),
                school: "Beta".to_string(),
                directions: vec!["java".to_string()],
                learning_type: vec!["typeProgramming".to_string()],
                levels: vec!["intermediate".to_string()],
                course_targets: vec!["developSkills".to_string()],
                price: 120_000.0,
                duration_months: 14.0,
                job_help: true,
                ..Course::default()
            },
            Course {
                id: 3,
                name: "Бесплатный интенсив по вёрстке".to_string(),
                school: "Alpha".to_string(),
                directions: vec!["frontend".to_string()],
                learning_type: vec!["typeProgramming".to_string()],
                price: 0.0,
                duration_months: 0.5,
                ..Course::default()
            },
        ]
    }

    fn ids(courses: &[Course]) -> Vec<i64> {
        courses.iter().map(|course| course.id).collect()
    }

    #[test]
    fn default_state_passes_everything_in_order() {
        let courses = sample_collection();
        let filtered = filter_courses(&courses, &FilterState::default());
        assert_eq!(ids(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.toggle_set_member(SetFacet::Levels, "beginner");
        filters.toggle_flag(BoolFacet::HasInstallment);

        let once = filter_courses(&courses, &filters);
        let twice = filter_courses(&once, &filters);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn search_matches_name_school_and_directions() {
        let courses = sample_collection();
        let mut filters = FilterState::default();

        filters.set_search("  ПЫТ  ");
        // "опыт" does not occur; whitespace is trimmed, case ignored.
        assert!(filter_courses(&courses, &filters).is_empty());

        filters.set_search("beta");
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![2]);

        filters.set_search("SQL");
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![1]);

        filters.set_search("  ");
        assert_eq!(filter_courses(&courses, &filters).len(), 3);
    }

    #[test]
    fn direction_facet_requires_intersection() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.toggle_set_member(SetFacet::Directions, "python");
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![1]);
    }

    #[test]
    fn school_facet_matches_exact_school() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.toggle_set_member(SetFacet::Schools, "Alpha");
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![1, 3]);
    }

    #[test]
    fn free_only_keeps_zero_price_records() {
        let courses = vec![
            Course { price: 0.0, ..course("a") },
            Course { price: 1_000.0, ..course("b") },
            Course { price: 50_000.0, ..course("c") },
        ];
        let mut filters = FilterState::default();
        filters.toggle_flag(BoolFacet::FreeOnly);

        let filtered = filter_courses(&courses, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].price, 0.0);
    }

    #[test]
    fn free_price_bucket_only_passes_zero_price() {
        let courses = vec![
            Course { price: 0.0, ..course("a") },
            Course { price: 10_000.0, ..course("b") },
        ];
        let mut filters = FilterState::default();
        filters.set_exclusive(ExclusiveFacet::PriceRange, "free");

        let filtered = filter_courses(&courses, &filters);
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].is_free());
    }

    #[test]
    fn open_ended_price_bucket_has_no_upper_bound() {
        let courses = vec![
            Course { price: 250_000.0, ..course("a") },
            Course { price: 150_000.0, ..course("b") },
        ];
        let mut filters = FilterState::default();
        filters.set_exclusive(ExclusiveFacet::PriceRange, "200+");
        assert_eq!(filter_courses(&courses, &filters).len(), 1);
    }

    #[test]
    fn duration_bucket_uses_months_with_zero_default() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.set_exclusive(ExclusiveFacet::Duration, "6-12");
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![1]);

        filters.set_exclusive(ExclusiveFacet::Duration, "6-12"); // off
        filters.set_exclusive(ExclusiveFacet::Duration, "less1");
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![3]);
    }

    #[test]
    fn continuous_price_bounds_are_inclusive() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.set_price_bounds(54_000.0, 120_000.0);
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![1, 2]);
    }

    #[test]
    fn inverted_price_bounds_yield_an_empty_result() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.set_price_bounds(100_000.0, 50_000.0);
        assert!(filter_courses(&courses, &filters).is_empty());
    }

    #[test]
    fn both_price_predicates_combine_with_and() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        // No price here falls into 10-50, so the slider match alone is
        // not enough.
        filters.set_exclusive(ExclusiveFacet::PriceRange, "10-50");
        filters.set_price_bounds(0.0, 60_000.0);
        assert!(filter_courses(&courses, &filters).is_empty());

        filters.set_exclusive(ExclusiveFacet::PriceRange, "10-50"); // off
        filters.set_exclusive(ExclusiveFacet::PriceRange, "50-100");
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![1]);
    }

    #[test]
    fn installment_predicate_requires_a_positive_amount() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.toggle_flag(BoolFacet::HasInstallment);
        assert_eq!(ids(&filter_courses(&courses, &filters)), vec![1]);
    }

    #[test]
    fn changing_sort_never_changes_membership() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.toggle_set_member(SetFacet::Categories, "typeProgramming");

        let baseline: std::collections::HashSet<i64> =
            ids(&filter_courses(&courses, &filters)).into_iter().collect();

        for sort in [
            SortBy::Popular,
            SortBy::PriceAsc,
            SortBy::PriceDesc,
            SortBy::Rating,
            SortBy::DurationAsc,
        ] {
            filters.set_sort(sort);
            let set: std::collections::HashSet<i64> =
                ids(&filter_courses(&courses, &filters)).into_iter().collect();
            assert_eq!(set, baseline);
        }
    }

    #[test]
    fn reset_all_restores_the_full_collection() {
        let courses = sample_collection();
        let mut filters = FilterState::default();
        filters.toggle_set_member(SetFacet::Schools, "Beta");
        filters.toggle_flag(BoolFacet::TopSale);
        assert_ne!(filter_courses(&courses, &filters).len(), courses.len());

        filters.reset_all();
        assert_eq!(ids(&filter_courses(&courses, &filters)), ids(&courses));
    }
}
