use crate::{
    model::{
        entity::Course,
        error::{CatalogError, CatalogResult},
    },
    web::AuthenticatedUser,
};

/// Course mutations are allowed only for the owning teacher. This runs
/// strictly before any mutation is computed or persisted.
pub fn check_owner(course: &Course, actor: &AuthenticatedUser) -> CatalogResult<()> {
    if course.teacher_id() == actor.user_id() {
        Ok(())
    } else {
        Err(CatalogError::Forbidden)
    }
}
