use std::env;
use std::sync::RwLock;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use tera::Tera;

use course_catalog::repository::JsonDataRepository;
use course_catalog::routes::catalog::{
    apply_price_bounds, apply_search, apply_sort, catalog_json, choose_category, load_more,
    reset_filters, set_exclusive_facet, show_catalog, toggle_facet, toggle_flag,
};
use course_catalog::routes::schools::{schools_json, show_schools};
use course_catalog::services::catalog::{self, CatalogState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let data_dir = env::var("DATA_DIR").unwrap_or("./data".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let repo = JsonDataRepository::new(&data_dir);

    let mut state = CatalogState::new();
    catalog::initialize(&mut state, &repo);
    let state = web::Data::new(RwLock::new(state));

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_catalog)
            .service(catalog_json)
            .service(choose_category)
            .service(toggle_facet)
            .service(toggle_flag)
            .service(set_exclusive_facet)
            .service(reset_filters)
            .service(apply_search)
            .service(apply_sort)
            .service(apply_price_bounds)
            .service(load_more)
            .service(show_schools)
            .service(schools_json)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(state.clone())
    })
    .bind((address, port))?
    .run()
    .await
}
