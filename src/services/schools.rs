//! Schools rating table: one fetch, client-side re-sorting.

use serde::{Deserialize, Serialize};

use crate::domain::school::{School, SchoolSortField, SortDirection};
use crate::repository::SchoolReader;
use crate::services::{ServiceResult, group_thousands};

/// Query parameters accepted by the schools page.
#[derive(Debug, Default, Deserialize)]
pub struct SchoolsQuery {
    /// Column to sort by; defaults to rating.
    pub sort: Option<SchoolSortField>,
    /// Sort direction; defaults to descending.
    pub dir: Option<SortDirection>,
}

/// Data required to render the schools table.
#[derive(Debug, Serialize)]
pub struct SchoolsPageData {
    pub schools: Vec<SchoolView>,
    pub sort_field: SchoolSortField,
    pub sort_direction: SortDirection,
}

/// Loads and sorts the schools table.
///
/// A fetch failure degrades to an empty table: the error is logged and the
/// page still renders.
pub fn load_schools_page<R>(repo: &R, query: SchoolsQuery) -> ServiceResult<SchoolsPageData>
where
    R: SchoolReader + ?Sized,
{
    let sort_field = query.sort.unwrap_or_default();
    let sort_direction = query.dir.unwrap_or_default();

    let schools = match repo.list_schools() {
        Ok(schools) => schools,
        Err(err) => {
            log::error!("failed to load schools list: {err}");
            Vec::new()
        }
    };

    let sorted = sort_schools(schools, sort_field, sort_direction);

    Ok(SchoolsPageData {
        schools: sorted.iter().map(SchoolView::from_school).collect(),
        sort_field,
        sort_direction,
    })
}

/// Stable sort by the selected column.
pub fn sort_schools(
    mut schools: Vec<School>,
    field: SchoolSortField,
    direction: SortDirection,
) -> Vec<School> {
    match (field, direction) {
        (SchoolSortField::Rating, SortDirection::Desc) => {
            schools.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        (SchoolSortField::Rating, SortDirection::Asc) => {
            schools.sort_by(|a, b| a.rating.total_cmp(&b.rating));
        }
        (SchoolSortField::Reviews, SortDirection::Desc) => {
            schools.sort_by(|a, b| b.reviews_count.cmp(&a.reviews_count));
        }
        (SchoolSortField::Reviews, SortDirection::Asc) => {
            schools.sort_by(|a, b| a.reviews_count.cmp(&b.reviews_count));
        }
    }
    schools
}

/// Sort state reached by clicking the header of `requested`: a repeated
/// click on the active column flips the direction, a click on another
/// column starts it descending.
pub fn toggle_sort(
    current_field: SchoolSortField,
    current_direction: SortDirection,
    requested: SchoolSortField,
) -> (SchoolSortField, SortDirection) {
    if current_field == requested {
        (requested, current_direction.flipped())
    } else {
        (requested, SortDirection::Desc)
    }
}

/// View model of one table row.
#[derive(Debug, Serialize)]
pub struct SchoolView {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub rating_label: String,
    pub reviews_label: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
}

impl SchoolView {
    fn from_school(school: &School) -> Self {
        Self {
            id: school.id,
            name: school.name.clone(),
            slug: school.slug.clone(),
            rating_label: if school.rating > 0.0 {
                format!("{:.2}", school.rating)
            } else {
                "—".to_string()
            },
            reviews_label: group_thousands(school.reviews_count),
            logo: school.logo.clone(),
            website: school.website.clone(),
            url: school.url.clone(),
        }
    }
}
