use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    models::{
        domain::{NewQuestion, Question, RoleKey},
        dto::RoleQuestionCount,
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_role(&self, role_key: RoleKey) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>>;
    /// Persists the question and returns the storage-assigned id.
    async fn insert(&self, question: NewQuestion) -> AppResult<i64>;
    async fn role_inventory(&self) -> AppResult<Vec<RoleQuestionCount>>;
    async fn count(&self) -> AppResult<u64>;
}

/// Sequence document backing integer question ids. One row per sequence name,
/// bumped atomically with `$inc`.
#[derive(Debug, Deserialize, Serialize)]
struct CounterDoc {
    #[serde(rename = "_id")]
    name: String,
    seq: i64,
}

const QUESTION_ID_SEQUENCE: &str = "question_id";

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
    counters: Collection<CounterDoc>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        Self {
            collection: db.get_collection(&config.questions_collection),
            counters: db.get_collection(&config.counters_collection),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        let role_index = IndexModel::builder()
            .keys(doc! { "role_key": 1 })
            .options(IndexOptions::builder().name("role_key".to_string()).build())
            .build();
        self.collection.create_index(role_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }

    async fn next_question_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": QUESTION_ID_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Question id sequence returned no document".to_string())
            })?;

        Ok(counter.seq)
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_role(&self, role_key: RoleKey) -> AppResult<Vec<Question>> {
        let cursor = self
            .collection
            .find(doc! { "role_key": role_key.as_str() })
            .await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn insert(&self, question: NewQuestion) -> AppResult<i64> {
        let id = self.next_question_id().await?;
        let question = question.into_question(id);

        self.collection.insert_one(&question).await?;
        log::info!(
            "Added question {} to pool '{}'",
            question.id,
            question.role_key
        );
        Ok(id)
    }

    async fn role_inventory(&self) -> AppResult<Vec<RoleQuestionCount>> {
        let pipeline = vec![
            doc! { "$group": { "_id": "$role_key", "question_count": { "$sum": 1 } } },
            doc! { "$sort": { "_id": 1 } },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let mut inventory = Vec::new();

        while let Some(group) = cursor.try_next().await? {
            let Some(role_key) = group.get_str("_id").ok().and_then(RoleKey::from_canonical)
            else {
                // a pool keyed outside the canonical set can never be selected
                log::warn!("Skipping non-canonical role key in inventory: {:?}", group.get("_id"));
                continue;
            };
            let question_count = match group.get("question_count") {
                Some(Bson::Int32(n)) => i64::from(*n),
                Some(Bson::Int64(n)) => *n,
                _ => 0,
            };
            inventory.push(RoleQuestionCount {
                role_key,
                question_count,
            });
        }

        Ok(inventory)
    }

    async fn count(&self) -> AppResult<u64> {
        let total = self.collection.count_documents(doc! {}).await?;
        Ok(total)
    }
}
