use actix_web::HttpResponse;
use actix_web::http::header;
use tera::{Context, Tera};

pub mod catalog;
pub mod schools;

/// Render a tera template, degrading to a 500 on template errors.
pub(crate) fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// See-other redirect used after every mutating form submission.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Context shared by all pages.
pub(crate) fn base_context(active_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("active_page", active_page);
    context
}
