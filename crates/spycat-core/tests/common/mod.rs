use std::sync::Arc;

use async_trait::async_trait;
use spycat_core::{
    params::{CreateCat, TargetCreate},
    Agency, AgencyBuilder, AgencyError, BreedValidator, FixedBreeds,
};
use tempfile::TempDir;

/// Breeds accepted by the test agency.
pub const KNOWN_BREEDS: [&str; 3] = ["Siamese", "Bengal", "Sphynx"];

/// Helper function to create a test agency with a fixed breed list
pub async fn create_test_agency() -> (TempDir, Agency) {
    create_test_agency_with(Arc::new(FixedBreeds::new(KNOWN_BREEDS))).await
}

/// Helper function to create a test agency with a custom breed validator
pub async fn create_test_agency_with(breeds: Arc<dyn BreedValidator>) -> (TempDir, Agency) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let agency = AgencyBuilder::new()
        .with_database_path(Some(&db_path))
        .with_breed_validator(breeds)
        .build()
        .await
        .expect("Failed to create agency");
    (temp_dir, agency)
}

/// Breed validator whose reference source is always unreachable
pub struct UnreachableBreeds;

#[async_trait]
impl BreedValidator for UnreachableBreeds {
    async fn validate_breed(&self, _name: &str) -> spycat_core::Result<bool> {
        Err(AgencyError::BreedLookup {
            message: "connection refused".to_string(),
        })
    }
}

pub fn cat_params(name: &str) -> CreateCat {
    CreateCat {
        name: name.to_string(),
        breed: "Siamese".to_string(),
        experience: 3,
        salary: 1000,
    }
}

pub fn targets(names: &[(&str, &str)]) -> Vec<TargetCreate> {
    names
        .iter()
        .map(|(name, country)| TargetCreate {
            name: name.to_string(),
            country: country.to_string(),
        })
        .collect()
}
