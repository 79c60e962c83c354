//! Store implementations behind [`MovieStore`](crate::store::MovieStore).

pub mod memory_repo;
pub mod movie_repo;

pub use memory_repo::InMemoryMovieRepo;
pub use movie_repo::MongoMovieRepo;
