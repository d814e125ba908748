use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::patch::{CoursePatch, NormalizedPatch};
use crate::model::{CatalogError, CatalogResult, ModelManager, ScanFilter, check_owner};
use crate::web::AuthenticatedUser;

/// Course aggregate: the root record plus its embedded sections and
/// chapters, persisted as one document. Field names mirror the stored
/// document layout.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    course_id: String,
    teacher_id: String,
    teacher_name: String,
    title: String,
    description: String,
    category: String,
    image: String,
    price: u32,
    level: CourseLevel,
    status: CourseStatus,
    sections: Vec<Section>,
    enrollments: Vec<Enrollment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum CourseStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    section_id: String,
    section_title: String,
    section_description: String,
    chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum ChapterKind {
    #[default]
    Text,
    Quiz,
    Video,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    chapter_id: String,
    #[serde(rename = "type")]
    kind: ChapterKind,
    title: String,
    content: String,
    video: Option<String>,
}

/// Opaque enrollment record; carried verbatim through updates, never
/// patched by the course endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    user_id: String,
}

impl Course {
    /// Fresh Draft course with documented defaults and a new globally
    /// unique id.
    pub fn new<I: Into<String>, N: Into<String>>(teacher_id: I, teacher_name: N) -> Self {
        Self {
            course_id: Uuid::new_v4().to_string(),
            teacher_id: teacher_id.into(),
            teacher_name: teacher_name.into(),
            title: String::from("Untitled Course"),
            description: String::new(),
            category: String::from("Uncategorized"),
            image: String::new(),
            price: 0,
            level: CourseLevel::Beginner,
            status: CourseStatus::Draft,
            sections: Vec::new(),
            enrollments: Vec::new(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn teacher_id(&self) -> &str {
        &self.teacher_id
    }

    pub fn teacher_name(&self) -> &str {
        &self.teacher_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn level(&self) -> CourseLevel {
        self.level
    }

    pub fn status(&self) -> CourseStatus {
        self.status
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Every field present in the normalized patch overwrites the loaded
    /// value; absent fields stay untouched. `sections`, when present,
    /// replaces the whole sequence with the reconciled version. Course and
    /// teacher ids are never touched.
    pub(crate) fn merged(mut self, patch: NormalizedPatch) -> Self {
        if let Some(teacher_name) = patch.teacher_name {
            self.teacher_name = teacher_name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(sections) = patch.sections {
            self.sections = sections;
        }
        self
    }
}

impl Section {
    pub fn new(
        section_id: String,
        section_title: String,
        section_description: String,
        chapters: Vec<Chapter>,
    ) -> Self {
        Self {
            section_id,
            section_title,
            section_description,
            chapters,
        }
    }

    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    pub fn section_title(&self) -> &str {
        &self.section_title
    }

    pub fn section_description(&self) -> &str {
        &self.section_description
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }
}

impl Chapter {
    pub fn new(
        chapter_id: String,
        kind: ChapterKind,
        title: String,
        content: String,
        video: Option<String>,
    ) -> Self {
        Self {
            chapter_id,
            kind,
            title,
            content,
            video,
        }
    }

    pub fn chapter_id(&self) -> &str {
        &self.chapter_id
    }

    pub fn kind(&self) -> ChapterKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }
}

impl Enrollment {
    pub fn new<I: Into<String>>(user_id: I) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl Course {
    pub async fn create(
        mm: &ModelManager,
        teacher_id: &str,
        teacher_name: &str,
    ) -> CatalogResult<Self> {
        if teacher_id.trim().is_empty() {
            return Err(CatalogError::MissingField("teacherId"));
        }
        if teacher_name.trim().is_empty() {
            return Err(CatalogError::MissingField("teacherName"));
        }

        let course = Course::new(teacher_id, teacher_name);
        mm.store().put(&course).await?;
        Ok(course)
    }

    pub async fn find_by_id(mm: &ModelManager, course_id: &str) -> CatalogResult<Self> {
        mm.store()
            .get(course_id)
            .await?
            .ok_or(CatalogError::NotFound)
    }

    /// `None` and the sentinel `"all"` list every course; any other value
    /// filters on exact `category` equality. The returned order is whatever
    /// the store yields, deliberately unspecified.
    pub async fn list(mm: &ModelManager, category: Option<&str>) -> CatalogResult<Vec<Self>> {
        let filter = match category {
            None | Some("all") => None,
            Some(category) => Some(ScanFilter::eq("category", category)),
        };
        mm.store().scan(filter.as_ref()).await
    }

    /// Load, authorize, normalize the patch, merge, persist.
    ///
    /// The load/merge/save sequence is not transactional: two concurrent
    /// updates to the same course race at the store with last-write-wins.
    /// If the save fails the stored record is left exactly as loaded.
    pub async fn update(
        mm: &ModelManager,
        course_id: &str,
        actor: &AuthenticatedUser,
        patch: CoursePatch,
    ) -> CatalogResult<Self> {
        let course = Self::find_by_id(mm, course_id).await?;
        check_owner(&course, actor)?;

        let patch = patch.normalized()?;
        let updated = course.merged(patch);
        mm.store().put(&updated).await?;
        Ok(updated)
    }

    pub async fn delete(
        mm: &ModelManager,
        course_id: &str,
        actor: &AuthenticatedUser,
    ) -> CatalogResult<Self> {
        let course = Self::find_by_id(mm, course_id).await?;
        check_owner(&course, actor)?;

        mm.store().delete(course_id).await?;
        Ok(course)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::model::{CourseStore, MemoryCourseStore};
    use serde_json::json;

    fn manager(store: Arc<dyn CourseStore>) -> ModelManager {
        ModelManager::new(store)
    }

    #[tokio::test]
    async fn create_uses_documented_defaults() {
        let mm = manager(Arc::new(MemoryCourseStore::new()));

        let first = Course::create(&mm, "teacher-1", "Ada Lovelace").await.unwrap();
        let second = Course::create(&mm, "teacher-1", "Ada Lovelace").await.unwrap();

        assert_ne!(first.course_id(), second.course_id());
        assert_eq!(first.title(), "Untitled Course");
        assert_eq!(first.category(), "Uncategorized");
        assert_eq!(first.price(), 0);
        assert_eq!(first.level(), CourseLevel::Beginner);
        assert_eq!(first.status(), CourseStatus::Draft);
        assert!(first.sections().is_empty());
        assert!(first.enrollments().is_empty());

        // persisted, not just returned
        let stored = Course::find_by_id(&mm, first.course_id()).await.unwrap();
        assert_eq!(stored.teacher_id(), "teacher-1");
    }

    #[tokio::test]
    async fn create_rejects_missing_teacher_fields() {
        let mm = manager(Arc::new(MemoryCourseStore::new()));

        let err = Course::create(&mm, "", "Ada").await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingField("teacherId")));

        let err = Course::create(&mm, "teacher-1", "  ").await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingField("teacherName")));
    }

    #[tokio::test]
    async fn update_rejects_foreign_caller_and_leaves_record() {
        let store = Arc::new(MemoryCourseStore::new());
        let mm = manager(store.clone());
        let course = Course::create(&mm, "owner", "Ada").await.unwrap();

        let intruder = AuthenticatedUser::new("somebody-else");
        let patch: CoursePatch = serde_json::from_value(json!({"title": "Hijacked"})).unwrap();
        let err = Course::update(&mm, course.course_id(), &intruder, patch)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Forbidden));

        let stored = store.get(course.course_id()).await.unwrap().unwrap();
        assert_eq!(stored.title(), "Untitled Course");
    }

    #[tokio::test]
    async fn update_unknown_course_is_not_found() {
        let mm = manager(Arc::new(MemoryCourseStore::new()));
        let actor = AuthenticatedUser::new("owner");

        let err = Course::update(&mm, "missing", &actor, CoursePatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn delete_returns_record_and_removes_it() {
        let mm = manager(Arc::new(MemoryCourseStore::new()));
        let actor = AuthenticatedUser::new("owner");
        let course = Course::create(&mm, "owner", "Ada").await.unwrap();

        let deleted = Course::delete(&mm, course.course_id(), &actor).await.unwrap();
        assert_eq!(deleted.course_id(), course.course_id());

        let err = Course::find_by_id(&mm, course.course_id()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn list_filters_by_category_or_sentinel() {
        let mm = manager(Arc::new(MemoryCourseStore::new()));
        let actor = AuthenticatedUser::new("owner");

        for category in ["A", "B", "A"] {
            let course = Course::create(&mm, "owner", "Ada").await.unwrap();
            let patch: CoursePatch =
                serde_json::from_value(json!({"category": category})).unwrap();
            Course::update(&mm, course.course_id(), &actor, patch)
                .await
                .unwrap();
        }

        let a = Course::list(&mm, Some("A")).await.unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.iter().all(|c| c.category() == "A"));

        // case-sensitive exact match
        assert!(Course::list(&mm, Some("a")).await.unwrap().is_empty());

        assert_eq!(Course::list(&mm, Some("all")).await.unwrap().len(), 3);
        assert_eq!(Course::list(&mm, None).await.unwrap().len(), 3);
    }

    /// Store whose writes fail after construction; reads pass through.
    #[derive(Debug)]
    struct BrokenPutStore {
        inner: MemoryCourseStore,
    }

    #[async_trait::async_trait]
    impl CourseStore for BrokenPutStore {
        async fn get(&self, course_id: &str) -> CatalogResult<Option<Course>> {
            self.inner.get(course_id).await
        }

        async fn put(&self, _course: &Course) -> CatalogResult<()> {
            Err(CatalogError::SqlxError(sqlx::Error::PoolClosed))
        }

        async fn delete(&self, course_id: &str) -> CatalogResult<()> {
            self.inner.delete(course_id).await
        }

        async fn scan(&self, filter: Option<&ScanFilter>) -> CatalogResult<Vec<Course>> {
            self.inner.scan(filter).await
        }
    }

    #[tokio::test]
    async fn failed_save_leaves_stored_record_untouched() {
        let inner = MemoryCourseStore::new();
        let course = Course::new("owner", "Ada");
        inner.put(&course).await.unwrap();

        let store = Arc::new(BrokenPutStore { inner });
        let mm = manager(store.clone());
        let actor = AuthenticatedUser::new("owner");

        let patch: CoursePatch =
            serde_json::from_value(json!({"title": "Should not stick"})).unwrap();
        let err = Course::update(&mm, course.course_id(), &actor, patch)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::SqlxError(_)));

        let stored = store.get(course.course_id()).await.unwrap().unwrap();
        assert_eq!(stored.title(), "Untitled Course");
    }
}
