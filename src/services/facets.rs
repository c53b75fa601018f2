//! The facet extractor: derives the selectable school and direction option
//! lists from the raw collection.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::config;
use crate::domain::course::Course;

/// How many schools the school dropdown shows.
const SCHOOL_OPTIONS_LIMIT: usize = 30;
/// How many directions the direction dropdown shows.
const DIRECTION_OPTIONS_LIMIT: usize = 20;

/// A selectable school, ranked by its rating.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SchoolOption {
    pub value: String,
    pub label: String,
    pub rating: f64,
}

/// A selectable direction tag, ranked by how many courses carry it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DirectionOption {
    pub value: String,
    pub label: String,
    pub count: usize,
}

/// Schools present in the collection, deduplicated by name (the first
/// occurrence's rating wins), best-rated first, top 30.
pub fn extract_schools(courses: &[Course]) -> Vec<SchoolOption> {
    let mut options = collect_schools(courses.iter());
    options.truncate(SCHOOL_OPTIONS_LIMIT);
    options
}

/// Schools offering at least one course in the selected directions. An
/// empty selection means "do not filter by direction", not "no schools".
/// Unlike [`extract_schools`] the list is not truncated; it backs the
/// dependent dropdown which is searchable instead.
pub fn schools_for_directions(courses: &[Course], directions: &[String]) -> Vec<SchoolOption> {
    if directions.is_empty() {
        return collect_schools(courses.iter());
    }
    collect_schools(
        courses
            .iter()
            .filter(|course| course.directions.iter().any(|tag| directions.contains(tag))),
    )
}

/// Direction tags present in the collection, counted once per record,
/// most frequent first, top 20, with localized labels.
pub fn extract_directions(courses: &[Course]) -> Vec<DirectionOption> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for course in courses {
        let mut seen_in_record: Vec<&str> = Vec::new();
        for tag in &course.directions {
            if seen_in_record.contains(&tag.as_str()) {
                continue;
            }
            seen_in_record.push(tag);
            match counts.entry(tag.as_str()) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    entry.insert(1);
                    order.push(tag);
                }
            }
        }
    }

    let mut options: Vec<DirectionOption> = order
        .into_iter()
        .map(|tag| DirectionOption {
            value: tag.to_string(),
            label: config::direction_label(tag),
            count: counts.get(tag).copied().unwrap_or(0),
        })
        .collect();
    options.sort_by(|a, b| b.count.cmp(&a.count));
    options.truncate(DIRECTION_OPTIONS_LIMIT);
    options
}

/// Narrow a school option list by the dropdown's search box.
pub fn search_school_options(options: &[SchoolOption], query: &str) -> Vec<SchoolOption> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Narrow a direction option list by the dropdown's search box.
pub fn search_direction_options(options: &[DirectionOption], query: &str) -> Vec<DirectionOption> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

fn collect_schools<'a>(courses: impl Iterator<Item = &'a Course>) -> Vec<SchoolOption> {
    let mut options: Vec<SchoolOption> = Vec::new();
    for course in courses {
        if course.school.is_empty() {
            continue;
        }
        if options.iter().any(|option| option.value == course.school) {
            continue;
        }
        options.push(SchoolOption {
            value: course.school.clone(),
            label: course.school.clone(),
            rating: course.school_rating,
        });
    }
    options.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    options
}
