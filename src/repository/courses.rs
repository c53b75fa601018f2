use crate::domain::course::Course;
use crate::repository::{CourseReader, JsonDataRepository, RepositoryResult};

impl CourseReader for JsonDataRepository {
    fn list_courses(&self, resource: &str) -> RepositoryResult<Vec<Course>> {
        let raw = self.read_resource(resource)?;
        let courses: Option<Vec<Course>> = serde_json::from_str(&raw)?;
        Ok(courses.unwrap_or_default())
    }
}
