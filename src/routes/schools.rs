use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::domain::school::SchoolSortField;
use crate::repository::JsonDataRepository;
use crate::routes::{base_context, render_template};
use crate::services::schools::{self, SchoolsQuery};

#[get("/schools")]
pub async fn show_schools(
    params: web::Query<SchoolsQuery>,
    repo: web::Data<JsonDataRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match schools::load_schools_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context("schools");
            // Header links encode the sort state a click would lead to.
            context.insert("rating_link", &header_link(&data, SchoolSortField::Rating));
            context.insert("reviews_link", &header_link(&data, SchoolSortField::Reviews));
            context.insert("schools", &data);
            render_template(&tera, "schools/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list schools: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/api/schools")]
pub async fn schools_json(
    params: web::Query<SchoolsQuery>,
    repo: web::Data<JsonDataRepository>,
) -> impl Responder {
    match schools::load_schools_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::error!("Failed to list schools: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn header_link(data: &schools::SchoolsPageData, requested: SchoolSortField) -> String {
    let (field, direction) = schools::toggle_sort(data.sort_field, data.sort_direction, requested);
    format!("/schools?sort={}&dir={}", field.as_str(), direction.as_str())
}
