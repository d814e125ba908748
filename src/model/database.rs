use sqlx::PgPool;

use crate::model::{
    entity::Course,
    error::CatalogResult,
    store::{CourseStore, ScanFilter},
};

/// Postgres-backed course store. One JSONB document per course, keyed by
/// `course_id`; nested sections/chapters are stored verbatim inside the
/// document.
#[derive(Debug, Clone)]
pub struct DbCourseStore {
    pool: PgPool, // cloning is cheap, pool is just a wrapper around Arc<>
}

impl DbCourseStore {
    pub fn connect(connection_str: &str) -> CatalogResult<Self> {
        let pool = PgPool::connect_lazy(connection_str)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CourseStore for DbCourseStore {
    async fn get(&self, course_id: &str) -> CatalogResult<Option<Course>> {
        let doc: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT doc FROM courses WHERE course_id = $1")
                .bind(course_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(doc.map(serde_json::from_value).transpose()?)
    }

    async fn put(&self, course: &Course) -> CatalogResult<()> {
        let doc = serde_json::to_value(course)?;
        sqlx::query(
            "INSERT INTO courses (course_id, doc) VALUES ($1, $2) \
             ON CONFLICT (course_id) DO UPDATE SET doc = EXCLUDED.doc",
        )
        .bind(course.course_id())
        .bind(doc)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, course_id: &str) -> CatalogResult<()> {
        sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(course_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn scan(&self, filter: Option<&ScanFilter>) -> CatalogResult<Vec<Course>> {
        let docs: Vec<serde_json::Value> = match filter {
            Some(filter) => {
                sqlx::query_scalar("SELECT doc FROM courses WHERE doc->>$1 = $2")
                    .bind(filter.field())
                    .bind(filter.value())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar("SELECT doc FROM courses")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        docs.into_iter()
            .map(|doc| Ok(serde_json::from_value(doc)?))
            .collect()
    }
}
