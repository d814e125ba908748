use crate::model::{entity::Course, error::CatalogResult};

/// Equality filter on a single top-level field of the persisted course
/// document, e.g. `ScanFilter::eq("category", "Engineering")`.
#[derive(Debug, Clone)]
pub struct ScanFilter {
    field: String,
    value: String,
}

impl ScanFilter {
    pub fn eq<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Document-level match, for backends without a query language.
    pub fn matches(&self, course: &Course) -> CatalogResult<bool> {
        let doc = serde_json::to_value(course)?;
        Ok(doc.get(&self.field).and_then(|v| v.as_str()) == Some(self.value.as_str()))
    }
}

/// Document store keyed by course id. `put` is a full replace; `scan`
/// returns courses in no particular order.
#[async_trait::async_trait]
pub trait CourseStore: Send + Sync + std::fmt::Debug {
    async fn get(&self, course_id: &str) -> CatalogResult<Option<Course>>;
    async fn put(&self, course: &Course) -> CatalogResult<()>;
    async fn delete(&self, course_id: &str) -> CatalogResult<()>;
    async fn scan(&self, filter: Option<&ScanFilter>) -> CatalogResult<Vec<Course>>;
}
