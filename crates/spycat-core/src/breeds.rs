//! Breed validation against a reference list.
//!
//! Cat creation asks a [`BreedValidator`] whether the proposed breed is
//! known. Two implementations ship with the crate:
//!
//! - [`CatApiBreeds`] fetches the list from a remote JSON endpoint (The Cat
//!   API `/v1/breeds` format: an array of objects with a `name` field) on
//!   every check.
//! - [`FixedBreeds`] answers from an in-memory list, for tests and offline
//!   deployments.

use std::{collections::HashSet, time::Duration};

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AgencyError, Result};

/// Default location of the breed reference list.
pub const DEFAULT_BREEDS_URL: &str = "https://api.thecatapi.com/v1/breeds";

/// Default timeout for a breed lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Decides whether a breed name is acceptable.
#[async_trait]
pub trait BreedValidator: Send + Sync {
    /// Returns `Ok(true)` for a known breed, `Ok(false)` for an unknown one
    /// and an error when the reference list could not be consulted.
    async fn validate_breed(&self, name: &str) -> Result<bool>;
}

#[derive(Debug, Deserialize)]
struct BreedEntry {
    name: String,
}

/// Parses a breed list response body into breed names.
pub fn parse_breed_names(body: &[u8]) -> Result<Vec<String>> {
    let entries: Vec<BreedEntry> =
        serde_json::from_slice(body).map_err(|e| AgencyError::BreedLookup {
            message: format!("Unexpected breed list format: {e}"),
        })?;
    Ok(entries.into_iter().map(|entry| entry.name).collect())
}

/// Validator backed by a remote breed list.
#[derive(Debug, Clone)]
pub struct CatApiBreeds {
    client: Client,
    url: String,
}

impl CatApiBreeds {
    /// Creates a validator for the given list URL.
    ///
    /// # Errors
    ///
    /// Returns `AgencyError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AgencyError::Configuration {
                message: format!("Failed to build breed lookup client: {e}"),
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetches the current list of breed names.
    pub async fn fetch_breeds(&self) -> Result<Vec<String>> {
        let lookup_error = |e: reqwest::Error| AgencyError::BreedLookup {
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(lookup_error)?
            .error_for_status()
            .map_err(lookup_error)?;
        let body = response.bytes().await.map_err(lookup_error)?;

        let breeds = parse_breed_names(&body)?;
        debug!("Fetched {} breeds from {}", breeds.len(), self.url);
        Ok(breeds)
    }
}

#[async_trait]
impl BreedValidator for CatApiBreeds {
    async fn validate_breed(&self, name: &str) -> Result<bool> {
        let breeds = self.fetch_breeds().await?;
        Ok(breeds.iter().any(|breed| breed == name))
    }
}

/// Validator answering from a fixed set of breed names.
#[derive(Debug, Clone, Default)]
pub struct FixedBreeds {
    breeds: HashSet<String>,
}

impl FixedBreeds {
    /// Creates a validator accepting exactly the given names.
    pub fn new<I, S>(breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            breeds: breeds.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl BreedValidator for FixedBreeds {
    async fn validate_breed(&self, name: &str) -> Result<bool> {
        Ok(self.breeds.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_breed_names() {
        let body = br#"[
            {"id": "abys", "name": "Abyssinian", "origin": "Egypt"},
            {"id": "siam", "name": "Siamese", "temperament": "Active"}
        ]"#;
        let names = parse_breed_names(body).unwrap();
        assert_eq!(names, vec!["Abyssinian".to_string(), "Siamese".to_string()]);
    }

    #[test]
    fn test_parse_breed_names_rejects_unexpected_shape() {
        let err = parse_breed_names(br#"{"message": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, AgencyError::BreedLookup { .. }));
    }

    #[tokio::test]
    async fn test_fixed_breeds_is_exact_match() {
        let breeds = FixedBreeds::new(["Siamese", "Bengal"]);
        assert!(breeds.validate_breed("Siamese").await.unwrap());
        assert!(!breeds.validate_breed("siamese").await.unwrap());
        assert!(!breeds.validate_breed("Sphynx").await.unwrap());
    }

    #[tokio::test]
    async fn test_cat_api_breeds_reports_unreachable_source() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let breeds = CatApiBreeds::new("http://127.0.0.1:9/v1/breeds", Duration::from_secs(2))
            .expect("client should build");
        let err = breeds.validate_breed("Siamese").await.unwrap_err();
        assert!(matches!(err, AgencyError::BreedLookup { .. }));
    }
}
