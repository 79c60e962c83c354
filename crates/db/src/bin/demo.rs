//! Demo: insert one movie, then run one filtered query against it.
//!
//! Uses the same `MONGODB_*` variables as the API server.

use anyhow::Context;
use movies_db::models::movie::{BoxOffice, CreateMovie};
use movies_db::repositories::MongoMovieRepo;
use movies_db::{MongoConfig, MovieStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_demo=info,movies_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MongoConfig::from_env();
    let client = movies_db::connect(&config.uri)
        .await
        .with_context(|| format!("failed to connect to {}", config.uri))?;
    let database = client.database(&config.database);
    movies_db::health_check(&database)
        .await
        .context("MongoDB ping failed")?;
    tracing::info!(database = %config.database, "Connected to MongoDB");

    let store = MongoMovieRepo::new(database, &config.collection);

    let movie = CreateMovie {
        name: "The Dark Knight".to_string(),
        year: "2008".to_string(),
        directors: vec!["Christopher Nolan".to_string()],
        writers: vec![
            "Jonathan Nolan".to_string(),
            "Christopher Nolan".to_string(),
        ],
        box_office: BoxOffice {
            budget: 185_000_000,
            gross: 533_316_061,
        },
    };

    let id = store.insert(&movie).await.context("insert failed")?;
    tracing::info!(movie_id = %id, "Inserted movie");

    let found = store
        .find_by_name(&movie.name)
        .await
        .context("query failed")?;
    tracing::info!(count = found.len(), name = %movie.name, "Query finished");
    for movie in &found {
        println!("{}", serde_json::to_string_pretty(movie)?);
    }

    Ok(())
}
