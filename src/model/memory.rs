use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::model::{
    entity::Course,
    error::CatalogResult,
    store::{CourseStore, ScanFilter},
};

/// In-process course store. Backs tests and local development; iteration
/// order of `scan` is whatever the map yields.
#[derive(Debug, Default)]
pub struct MemoryCourseStore {
    courses: RwLock<HashMap<String, Course>>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CourseStore for MemoryCourseStore {
    async fn get(&self, course_id: &str) -> CatalogResult<Option<Course>> {
        Ok(self.courses.read().await.get(course_id).cloned())
    }

    async fn put(&self, course: &Course) -> CatalogResult<()> {
        self.courses
            .write()
            .await
            .insert(course.course_id().to_string(), course.clone());
        Ok(())
    }

    async fn delete(&self, course_id: &str) -> CatalogResult<()> {
        self.courses.write().await.remove(course_id);
        Ok(())
    }

    async fn scan(&self, filter: Option<&ScanFilter>) -> CatalogResult<Vec<Course>> {
        let courses = self.courses.read().await;
        let mut result = Vec::new();
        for course in courses.values() {
            let keep = match filter {
                Some(filter) => filter.matches(course)?,
                None => true,
            };
            if keep {
                result.push(course.clone());
            }
        }
        Ok(result)
    }
}
