//! Cat operations: CRUD plus breed validation and the delete guard.

use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

use crate::{
    breeds::BreedValidator,
    error::{AgencyError, Result},
    models::{Cat, CatChanges},
    params::{CreateCat, UpdateCat},
    repository::CatRepository,
};

/// Service owning the cat lifecycle.
#[derive(Clone)]
pub struct CatService {
    cats: Arc<dyn CatRepository>,
    breeds: Arc<dyn BreedValidator>,
}

impl CatService {
    /// Creates a service over the given repository and breed validator.
    pub fn new(cats: Arc<dyn CatRepository>, breeds: Arc<dyn BreedValidator>) -> Self {
        Self { cats, breeds }
    }

    /// Lists all cats.
    pub async fn list_cats(&self) -> Result<Vec<Cat>> {
        info!("Getting all cats");
        self.cats.list_cats().await
    }

    /// Retrieves a cat by id.
    ///
    /// # Errors
    ///
    /// * `AgencyError::CatNotFound` - When no cat has this id
    pub async fn get_cat(&self, id: Uuid) -> Result<Cat> {
        info!("Getting a cat by id");
        self.cats
            .get_cat(id)
            .await?
            .ok_or(AgencyError::CatNotFound { id })
    }

    /// Creates a new cat after validating its numeric fields and its breed.
    ///
    /// A breed lookup that fails for any reason is reported exactly like an
    /// unknown breed.
    ///
    /// # Errors
    ///
    /// * `AgencyError::InvalidInput` - When experience or salary is not
    ///   positive, or the breed is rejected
    pub async fn create_cat(&self, params: &CreateCat) -> Result<Cat> {
        info!("Creating a new cat");
        params.validate()?;

        info!("Validating the cat's breed");
        let accepted = match self.breeds.validate_breed(&params.breed).await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Breed lookup failed for '{}': {}", params.breed, e);
                false
            }
        };
        if !accepted {
            return Err(AgencyError::invalid_input("breed").with_reason("Invalid breed provided"));
        }

        self.cats.insert_cat(params).await
    }

    /// Applies a partial update. Only supplied fields change.
    ///
    /// # Errors
    ///
    /// * `AgencyError::CatNotFound` - When no cat has this id
    /// * `AgencyError::InvalidInput` - When a supplied salary is not positive
    pub async fn update_cat(&self, id: Uuid, params: UpdateCat) -> Result<Cat> {
        info!("Updating a cat");
        let current = self.get_cat(id).await?;

        let changes = CatChanges::try_from(params)?;
        if changes.is_empty() {
            return Ok(current);
        }

        self.cats.update_cat(id, changes).await
    }

    /// Deletes a cat that no mission references.
    ///
    /// # Errors
    ///
    /// * `AgencyError::CatNotFound` - When no cat has this id
    /// * `AgencyError::CatHasMissions` - When at least one mission references
    ///   the cat
    pub async fn delete_cat(&self, id: Uuid) -> Result<()> {
        info!("Deleting a cat");
        self.get_cat(id).await?;

        if self.cats.count_missions_for_cat(id).await? > 0 {
            return Err(AgencyError::CatHasMissions { id });
        }

        self.cats.delete_cat(id).await
    }
}
