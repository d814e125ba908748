use axum::http::StatusCode;
use axum::{
    Json, Router, extract::State, middleware, response::IntoResponse, routing::post,
};

use crate::web::dto::courses::DataResponse;
use crate::web::dto::media::{VideoUploadBody, VideoUploadData};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, RequestContext, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/upload-url", post(video_upload_url_handler))
        .layer(middleware::from_fn(middlewares::extract_context_fn))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/courses/upload-url",
    request_body = VideoUploadBody,
    description = "Issue a short-lived upload credential for a course video \
                   plus the permanent retrieval URL. Nothing is persisted; the \
                   retrieval URL only becomes durable once a later course \
                   update records it on a chapter.",
    responses(
        (status = 200, description = "Upload target issued", body = DataResponse<VideoUploadData>),
        (status = 400, description = "Missing file name or type", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("bearer" = [])
    ),
    tag = "media"
)]
pub async fn video_upload_url_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(body): Json<VideoUploadBody>,
) -> WebResult<impl IntoResponse> {
    ctx.user()?;

    let target = state
        .media()
        .issue_upload_target(
            body.file_name.as_deref().unwrap_or_default(),
            body.file_type.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(WebError::media_error)?;

    Ok((
        StatusCode::OK,
        Json(DataResponse::new(
            "Upload URL generated successfully",
            VideoUploadData::from(target),
        )),
    ))
}
