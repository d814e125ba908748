use crate::{
    Config,
    web::{AppState, doc::ApiDoc},
};
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod courses;
pub mod media;

pub fn build_app<S: Send + Sync + Clone + 'static>(
    state: AppState,
    config: &'static Config,
) -> Router<S> {
    let mut router = Router::new()
        .route("/", get(root_handler))
        .nest(
            "/courses",
            courses::routes(state.clone()).merge(media::routes(state.clone())),
        )
        .layer(CorsLayer::very_permissive())
        .with_state(state);

    if config.app().docs() {
        let openapi = ApiDoc::openapi();

        router = router.merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", openapi));
    }

    router
}

async fn root_handler() -> &'static str {
    "Kursa API is running"
}
