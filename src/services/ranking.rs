//! The ranking engine: total order over the filtered subset.
//!
//! Every mode uses the standard library's stable sort, so records that
//! compare equal keep their relative order from the data source.

use std::cmp::Ordering;

use crate::domain::course::Course;
use crate::domain::filters::SortBy;

/// Sort `courses` by the given mode.
pub fn sort_courses(mut courses: Vec<Course>, sort_by: SortBy) -> Vec<Course> {
    match sort_by {
        SortBy::Popular => courses.sort_by(compare_popular),
        SortBy::PriceAsc => courses.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceDesc => courses.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Rating => courses.sort_by(|a, b| b.school_rating.total_cmp(&a.school_rating)),
        SortBy::DurationAsc => {
            courses.sort_by(|a, b| a.duration_months.total_cmp(&b.duration_months));
        }
    }
    courses
}

// Top-sale courses first, then by school rating.
fn compare_popular(a: &Course, b: &Course) -> Ordering {
    b.is_top_sale
        .cmp(&a.is_top_sale)
        .then(b.school_rating.total_cmp(&a.school_rating))
}
