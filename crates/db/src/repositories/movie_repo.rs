//! Repository for the `movies` collection.
//!
//! Every operation is a single-document call keyed by an `_id` filter;
//! partial updates go through one `$set` operator.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use movies_core::types::MovieId;

use crate::error::StoreError;
use crate::models::movie::{id_filter, CreateMovie, Movie, MovieDocument, UpdateMovie};
use crate::store::MovieStore;

/// MongoDB-backed movie store.
///
/// Cloning is cheap: the driver handles share one connection pool.
#[derive(Debug, Clone)]
pub struct MongoMovieRepo {
    database: Database,
    collection: Collection<MovieDocument>,
}

impl MongoMovieRepo {
    pub fn new(database: Database, collection: &str) -> Self {
        let collection = database.collection::<MovieDocument>(collection);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl MovieStore for MongoMovieRepo {
    async fn find_by_id(&self, id: MovieId) -> Result<Movie, StoreError> {
        let document = self
            .collection
            .find_one(id_filter(id))
            .await?
            .ok_or(StoreError::NotFound { id })?;
        Movie::try_from(document)
    }

    async fn insert(&self, input: &CreateMovie) -> Result<MovieId, StoreError> {
        let document = MovieDocument::from_create(input)?;
        let result = self.collection.insert_one(document).await?;
        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::CorruptRecord(format!(
                "inserted _id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;
        tracing::debug!(movie_id = %oid, "Inserted movie document");
        Ok(MovieId::from(oid))
    }

    async fn update_by_id(&self, id: MovieId, update: &UpdateMovie) -> Result<(), StoreError> {
        // The server rejects an empty `$set`.
        if update.is_empty() {
            let count = self.collection.count_documents(id_filter(id)).limit(1).await?;
            return if count == 0 {
                Err(StoreError::NotFound { id })
            } else {
                Ok(())
            };
        }

        let set = update.to_set_document()?;
        let result = self
            .collection
            .update_one(id_filter(id), doc! { "$set": set })
            .await?;
        if result.matched_count == 0 {
            return Err(StoreError::NotFound { id });
        }
        tracing::debug!(
            movie_id = %id,
            modified = result.modified_count,
            "Updated movie document",
        );
        Ok(())
    }

    async fn delete_by_id(&self, id: MovieId) -> Result<(), StoreError> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Movie>, StoreError> {
        let documents: Vec<MovieDocument> = self
            .collection
            .find(doc! { "name": name })
            .await?
            .try_collect()
            .await?;
        documents.into_iter().map(Movie::try_from).collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.database).await?;
        Ok(())
    }
}
