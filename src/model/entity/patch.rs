use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::course::{Chapter, ChapterKind, CourseLevel, CourseStatus, Section};
use crate::model::error::{CatalogError, CatalogResult};

/// Partial course update as submitted by a client. Every field is
/// optional; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursePatch {
    pub teacher_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub price: Option<PriceInput>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
    pub sections: Option<SectionsInput>,
}

/// Price as submitted: a major-unit amount, either a JSON number or a
/// string holding one.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum PriceInput {
    Amount(f64),
    Text(String),
}

/// Sections as submitted: either already structured, or the same array
/// JSON-encoded into a single string (the form-encoded request path of the
/// original clients). Both normalize to the same drafts.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum SectionsInput {
    Structured(Vec<SectionDraft>),
    Encoded(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionDraft {
    pub section_id: Option<String>,
    pub section_title: String,
    pub section_description: String,
    pub chapters: Vec<ChapterDraft>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ChapterDraft {
    pub chapter_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ChapterKind,
    pub title: String,
    pub content: String,
    pub video: Option<String>,
}

/// Patch after validation: price in minor units, sections parsed and
/// reconciled. Produced by [`CoursePatch::normalized`], consumed by
/// `Course::merged`.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedPatch {
    pub(crate) teacher_name: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) price: Option<u32>,
    pub(crate) level: Option<CourseLevel>,
    pub(crate) status: Option<CourseStatus>,
    pub(crate) sections: Option<Vec<Section>>,
}

impl CoursePatch {
    /// Validates and normalizes the raw patch. Any failure aborts the whole
    /// update; nothing is partially applied.
    pub(crate) fn normalized(self) -> CatalogResult<NormalizedPatch> {
        let price = self.price.map(PriceInput::into_minor_units).transpose()?;
        let sections = self
            .sections
            .map(SectionsInput::into_drafts)
            .transpose()?
            .map(reconcile_sections);

        Ok(NormalizedPatch {
            teacher_name: self.teacher_name,
            title: self.title,
            description: self.description,
            category: self.category,
            image: self.image,
            price,
            level: self.level,
            status: self.status,
            sections,
        })
    }
}

impl PriceInput {
    /// Major-unit amount -> stored minor units (whole major units x 100,
    /// fractional cents truncated like the original parser did).
    fn into_minor_units(self) -> CatalogResult<u32> {
        let major = match self {
            Self::Amount(amount) => amount,
            Self::Text(ref raw) => match raw.trim().parse::<f64>() {
                Ok(amount) => amount,
                Err(_) => return Err(CatalogError::InvalidPrice(raw.clone())),
            },
        };

        // price is a non-negative integer at rest
        if !major.is_finite() || !(0.0..=(u32::MAX / 100) as f64).contains(&major) {
            return Err(CatalogError::InvalidPrice(major.to_string()));
        }

        Ok(major.trunc() as u32 * 100)
    }
}

impl SectionsInput {
    fn into_drafts(self) -> CatalogResult<Vec<SectionDraft>> {
        match self {
            Self::Structured(drafts) => Ok(drafts),
            Self::Encoded(raw) => {
                serde_json::from_str(&raw).map_err(CatalogError::InvalidSections)
            }
        }
    }
}

/// Id-preserving reconciliation: a draft carrying an id is an existing
/// sub-entity being re-submitted and keeps it; a draft without one is new
/// and gets a fresh id. Submitted order is preserved as-is.
pub(crate) fn reconcile_sections(drafts: Vec<SectionDraft>) -> Vec<Section> {
    drafts
        .into_iter()
        .map(|draft| {
            let chapters = draft
                .chapters
                .into_iter()
                .map(|chapter| {
                    Chapter::new(
                        chapter
                            .chapter_id
                            .unwrap_or_else(|| Uuid::new_v4().to_string()),
                        chapter.kind,
                        chapter.title,
                        chapter.content,
                        chapter.video,
                    )
                })
                .collect();

            Section::new(
                draft
                    .section_id
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                draft.section_title,
                draft.section_description,
                chapters,
            )
        })
        .collect()
}
