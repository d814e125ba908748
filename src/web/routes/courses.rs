use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Json, Router, extract::State, middleware, response::IntoResponse, routing::get};

use crate::model::entity::{Course, CoursePatch};
use crate::web::dto::courses::{CourseCreateBody, CourseListQuery, DataResponse};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, RequestContext, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(courses_list_handler).post(courses_create_handler))
        .route(
            "/{course_id}",
            get(courses_get_handler)
                .put(courses_update_handler)
                .delete(courses_delete_handler),
        )
        .layer(middleware::from_fn(middlewares::extract_context_fn))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/courses",
    description = "List courses, optionally filtered by exact category match. \
                   `category=all` (or no filter) lists everything. The result \
                   order is unspecified.",
    responses(
        (status = 200, description = "Courses retrieved", body = DataResponse<Vec<Course>>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub async fn courses_list_handler(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> WebResult<impl IntoResponse> {
    let courses = Course::list(state.mm(), query.category.as_deref())
        .await
        .map_err(WebError::course_error)?;

    Ok((
        StatusCode::OK,
        Json(DataResponse::new("Courses retrieved successfully", courses)),
    ))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    description = "Fetch a single course with its sections and chapters",
    params(
        ("course_id" = String, Path, description = "ID of the course to get")
    ),
    responses(
        (status = 200, description = "Course found", body = DataResponse<Course>),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub async fn courses_get_handler(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let course = Course::find_by_id(state.mm(), &course_id)
        .await
        .map_err(WebError::course_error)?;

    Ok((
        StatusCode::OK,
        Json(DataResponse::new("Course retrieved successfully", course)),
    ))
}

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseCreateBody,
    description = "Create a Draft course with default fields for the given teacher",
    responses(
        (status = 200, description = "Course created", body = DataResponse<Course>),
        (status = 400, description = "Missing teacher id or name", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "courses"
)]
pub async fn courses_create_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<CourseCreateBody>,
) -> WebResult<impl IntoResponse> {
    ctx.user()?;

    let course = Course::create(
        state.mm(),
        body.teacher_id.as_deref().unwrap_or_default(),
        body.teacher_name.as_deref().unwrap_or_default(),
    )
    .await
    .map_err(WebError::course_error)?;

    Ok((
        StatusCode::OK,
        Json(DataResponse::new("Course created successfully", course)),
    ))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    request_body = CoursePatch,
    description = "Merge the submitted fields into the course. Only the owning \
                   teacher may update; section/chapter ids are preserved across \
                   edits and minted for new entries.",
    params(
        ("course_id" = String, Path, description = "ID of the course to update")
    ),
    responses(
        (status = 200, description = "Course updated", body = DataResponse<Course>),
        (status = 400, description = "Invalid price or sections payload", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Caller does not own this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "courses"
)]
pub async fn courses_update_handler(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    ctx: RequestContext,
    Json(patch): Json<CoursePatch>,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;

    let course = Course::update(state.mm(), &course_id, user, patch)
        .await
        .map_err(WebError::course_error)?;

    Ok((
        StatusCode::OK,
        Json(DataResponse::new("Course updated successfully", course)),
    ))
}

#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    description = "Delete a course; returns the removed record as confirmation",
    params(
        ("course_id" = String, Path, description = "ID of the course to delete")
    ),
    responses(
        (status = 200, description = "Course deleted", body = DataResponse<Course>),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Caller does not own this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "courses"
)]
pub async fn courses_delete_handler(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;

    let course = Course::delete(state.mm(), &course_id, user)
        .await
        .map_err(WebError::course_error)?;

    Ok((
        StatusCode::OK,
        Json(DataResponse::new("Course deleted successfully", course)),
    ))
}
