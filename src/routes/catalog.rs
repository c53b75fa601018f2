use std::sync::RwLock;

use actix_web::{HttpResponse, Responder, get, post, web};
use tera::Tera;

use crate::forms::catalog::{
    ExclusiveFacetForm, PriceBoundsForm, SearchForm, SortForm, ToggleFacetForm, ToggleFlagForm,
};
use crate::repository::JsonDataRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::catalog::{self, CatalogState};
use crate::services::{ServiceError, ServiceResult};

type SharedState = web::Data<RwLock<CatalogState>>;

#[get("/")]
pub async fn show_catalog(state: SharedState, tera: web::Data<Tera>) -> impl Responder {
    let Ok(state) = state.read() else {
        log::error!("catalog state lock is poisoned");
        return HttpResponse::InternalServerError().finish();
    };

    let data = catalog::build_catalog_page(&state);
    let mut context = base_context("catalog");
    context.insert("catalog", &data);
    render_template(&tera, "catalog/index.html", &context)
}

#[get("/api/catalog")]
pub async fn catalog_json(state: SharedState) -> impl Responder {
    let Ok(state) = state.read() else {
        log::error!("catalog state lock is poisoned");
        return HttpResponse::InternalServerError().finish();
    };
    HttpResponse::Ok().json(catalog::build_catalog_page(&state))
}

#[post("/category/{category_id}")]
pub async fn choose_category(
    path: web::Path<String>,
    state: SharedState,
    repo: web::Data<JsonDataRepository>,
) -> impl Responder {
    let Ok(mut state) = state.write() else {
        log::error!("catalog state lock is poisoned");
        return HttpResponse::InternalServerError().finish();
    };
    catalog::select_category(&mut state, repo.get_ref(), &path);
    redirect("/")
}

#[post("/filters/toggle")]
pub async fn toggle_facet(
    state: SharedState,
    web::Form(form): web::Form<ToggleFacetForm>,
) -> impl Responder {
    mutate(&state, |state| catalog::apply_toggle(state, form))
}

#[post("/filters/flag")]
pub async fn toggle_flag(
    state: SharedState,
    web::Form(form): web::Form<ToggleFlagForm>,
) -> impl Responder {
    mutate(&state, |state| catalog::apply_flag(state, form))
}

#[post("/filters/exclusive")]
pub async fn set_exclusive_facet(
    state: SharedState,
    web::Form(form): web::Form<ExclusiveFacetForm>,
) -> impl Responder {
    mutate(&state, |state| catalog::apply_exclusive(state, form))
}

#[post("/filters/reset")]
pub async fn reset_filters(state: SharedState) -> impl Responder {
    mutate(&state, |state| {
        catalog::reset_filters(state);
        Ok(())
    })
}

#[post("/search")]
pub async fn apply_search(
    state: SharedState,
    web::Form(form): web::Form<SearchForm>,
) -> impl Responder {
    mutate(&state, |state| catalog::apply_search(state, form))
}

#[post("/sort")]
pub async fn apply_sort(state: SharedState, web::Form(form): web::Form<SortForm>) -> impl Responder {
    mutate(&state, |state| catalog::apply_sort(state, form))
}

#[post("/price")]
pub async fn apply_price_bounds(
    state: SharedState,
    web::Form(form): web::Form<PriceBoundsForm>,
) -> impl Responder {
    mutate(&state, |state| catalog::apply_price_bounds(state, form))
}

#[post("/more")]
pub async fn load_more(state: SharedState) -> impl Responder {
    mutate(&state, |state| {
        catalog::load_more(state);
        Ok(())
    })
}

// All mutations share the same shape: take the write lock (the single
// apply point for state changes), run one service operation, go back to
// the catalog page.
fn mutate<F>(state: &SharedState, operation: F) -> HttpResponse
where
    F: FnOnce(&mut CatalogState) -> ServiceResult<()>,
{
    let Ok(mut state) = state.write() else {
        log::error!("catalog state lock is poisoned");
        return HttpResponse::InternalServerError().finish();
    };
    match operation(&mut state) {
        Ok(()) => redirect("/"),
        Err(ServiceError::Form(message)) => {
            log::warn!("rejected filter mutation: {message}");
            redirect("/")
        }
        Err(err) => {
            log::error!("filter mutation failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
