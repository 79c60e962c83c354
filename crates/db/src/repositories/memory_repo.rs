//! In-process movie store with the same semantics as the MongoDB repository.
//!
//! Used by the test suites and for running the server without a database
//! (`MOVIES_STORE=memory`). Nothing is persisted across restarts.

use std::collections::BTreeMap;

use async_trait::async_trait;
use movies_core::types::MovieId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::movie::{BoxOfficeDocument, CreateMovie, Movie, UpdateMovie};
use crate::store::MovieStore;

#[derive(Debug, Default)]
pub struct InMemoryMovieRepo {
    movies: RwLock<BTreeMap<MovieId, Movie>>,
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieRepo {
    async fn find_by_id(&self, id: MovieId) -> Result<Movie, StoreError> {
        self.movies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn insert(&self, input: &CreateMovie) -> Result<MovieId, StoreError> {
        // Same range limits as the BSON storage shape.
        BoxOfficeDocument::from_box_office(&input.box_office)?;

        let id = MovieId::new();
        let movie = Movie::from_create(id, input.clone());
        self.movies.write().await.insert(id, movie);
        Ok(id)
    }

    async fn update_by_id(&self, id: MovieId, update: &UpdateMovie) -> Result<(), StoreError> {
        update.to_set_document()?;

        let mut movies = self.movies.write().await;
        let movie = movies.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        movie.apply_update(update);
        Ok(())
    }

    async fn delete_by_id(&self, id: MovieId) -> Result<(), StoreError> {
        self.movies
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Movie>, StoreError> {
        Ok(self
            .movies
            .read()
            .await
            .values()
            .filter(|movie| movie.name == name)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
