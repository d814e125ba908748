mod course;
pub use course::{
    Chapter, ChapterKind, Course, CourseLevel, CourseStatus, Enrollment, Section,
};

mod patch;
pub use patch::{ChapterDraft, CoursePatch, PriceInput, SectionDraft, SectionsInput};
