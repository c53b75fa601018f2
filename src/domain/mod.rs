pub mod course;
pub mod filters;
pub mod school;
