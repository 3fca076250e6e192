use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection, IndexModel};

use crate::{
    config::Config, db::Database, errors::AppResult, models::domain::TestResult,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestResultRepository: Send + Sync {
    /// Appends one graded result to history. Results are immutable once written.
    async fn append(&self, result: TestResult) -> AppResult<()>;
    /// Most recent results, newest first.
    async fn recent(&self, limit: i64) -> AppResult<Vec<TestResult>>;
}

pub struct MongoTestResultRepository {
    collection: Collection<TestResult>,
}

impl MongoTestResultRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        Self {
            collection: db.get_collection(&config.results_collection),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for test results collection");

        let timestamp_index = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .build();
        self.collection.create_index(timestamp_index).await?;

        log::info!("Successfully created indexes for test results collection");
        Ok(())
    }
}

#[async_trait]
impl TestResultRepository for MongoTestResultRepository {
    async fn append(&self, result: TestResult) -> AppResult<()> {
        self.collection.insert_one(&result).await?;
        log::info!(
            "Test result saved: {} - {:.1}%",
            result.role_key,
            result.score_percentage
        );
        Ok(())
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<TestResult>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let results: Vec<TestResult> = cursor.try_collect().await?;
        Ok(results)
    }
}
