use std::fs;
use std::path::Path;

use tempfile::TempDir;

use course_catalog::repository::{
    CourseReader, JsonDataRepository, RepositoryError, SCHOOLS_RESOURCE, SchoolReader,
};

fn write_resource(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("failed to write test resource");
}

#[test]
fn lists_courses_from_a_resource_file() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_resource(
        dir.path(),
        "courses_adult_programming.json",
        r#"[
            {
                "id": 1,
                "name": "Python с нуля",
                "school": "Alpha",
                "school_rating": 4.7,
                "directions": ["python"],
                "price": 54000,
                "duration_months": 9
            },
            {
                "id": 2,
                "name": "SQL за месяц",
                "school": "Beta",
                "price": 0
            }
        ]"#,
    );

    let repo = JsonDataRepository::new(dir.path());
    let courses = repo
        .list_courses("courses_adult_programming.json")
        .expect("should list courses");

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].name, "Python с нуля");
    assert_eq!(courses[0].directions, vec!["python"]);
    assert!(courses[1].is_free());
}

#[test]
fn tolerates_malformed_record_fields() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_resource(
        dir.path(),
        "courses_adult_design.json",
        r#"[
            {
                "id": "77",
                "name": "Figma",
                "school_rating": "4.9",
                "directions": "ux_ui",
                "price": "69 900",
                "is_top_sale": 1
            }
        ]"#,
    );

    let repo = JsonDataRepository::new(dir.path());
    let courses = repo
        .list_courses("courses_adult_design.json")
        .expect("should list courses");

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, 77);
    assert_eq!(courses[0].school_rating, 4.9);
    // A bare string is not a tag list, and a spaced price is not a number.
    assert!(courses[0].directions.is_empty());
    assert_eq!(courses[0].price, 0.0);
    assert!(courses[0].is_top_sale);
}

#[test]
fn null_payload_is_an_empty_collection() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_resource(dir.path(), "courses_children.json", "null");

    let repo = JsonDataRepository::new(dir.path());
    let courses = repo
        .list_courses("courses_children.json")
        .expect("should list courses");
    assert!(courses.is_empty());
}

#[test]
fn missing_resource_is_not_found() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let repo = JsonDataRepository::new(dir.path());

    let err = repo
        .list_courses("courses_english.json")
        .expect_err("missing file should fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_resource(dir.path(), "courses_adult_marketing.json", "[{");

    let repo = JsonDataRepository::new(dir.path());
    let err = repo
        .list_courses("courses_adult_marketing.json")
        .expect_err("malformed JSON should fail");
    assert!(matches!(err, RepositoryError::Parse(_)));
}

#[test]
fn path_like_resource_names_are_rejected() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let secret = dir.path().join("secret.json");
    fs::write(&secret, "[]").expect("failed to write file");

    let nested = TempDir::new_in(dir.path()).expect("failed to create nested dir");
    let repo = JsonDataRepository::new(nested.path());

    let err = repo
        .list_courses("../secret.json")
        .expect_err("path traversal should fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let err = repo.list_courses("").expect_err("empty name should fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[test]
fn lists_schools_with_lenient_number_parsing() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_resource(
        dir.path(),
        SCHOOLS_RESOURCE,
        r#"[
            {"id": 1, "name": "Alpha", "rating": 4.85, "reviews_count": 1204},
            {"id": 2, "name": "Beta", "rating": "4.5", "reviews_count": "300"},
            {"id": 3, "name": "Gamma", "rating": null}
        ]"#,
    );

    let repo = JsonDataRepository::new(dir.path());
    let schools = repo.list_schools().expect("should list schools");

    assert_eq!(schools.len(), 3);
    assert_eq!(schools[0].rating, 4.85);
    assert_eq!(schools[1].rating, 4.5);
    assert_eq!(schools[1].reviews_count, 300);
    assert_eq!(schools[2].rating, 0.0);
}
