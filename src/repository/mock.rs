use mockall::mock;

use super::{CourseReader, RepositoryResult, SchoolReader};
use crate::domain::{course::Course, school::School};

mock! {
    pub CourseReader {}

    impl CourseReader for CourseReader {
        fn list_courses(&self, resource: &str) -> RepositoryResult<Vec<Course>>;
    }
}

mock! {
    pub SchoolReader {}

    impl SchoolReader for SchoolReader {
        fn list_schools(&self) -> RepositoryResult<Vec<School>>;
    }
}
