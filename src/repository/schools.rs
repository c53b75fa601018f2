use crate::domain::school::School;
use crate::repository::{JsonDataRepository, RepositoryResult, SCHOOLS_RESOURCE, SchoolReader};

impl SchoolReader for JsonDataRepository {
    fn list_schools(&self) -> RepositoryResult<Vec<School>> {
        let raw = self.read_resource(SCHOOLS_RESOURCE)?;
        let schools: Option<Vec<School>> = serde_json::from_str(&raw)?;
        Ok(schools.unwrap_or_default())
    }
}
