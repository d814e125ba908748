use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{
    Config, auth,
    web::{RequestContext, context::AuthenticatedUser, error::WebError},
};

pub static AUTH_SCHEME: &str = "Bearer ";

/// Resolves the caller identity from the Authorization header. Requests
/// without a token pass through anonymously; handlers decide whether
/// authentication is required. A present-but-invalid token is rejected
/// here.
pub async fn extract_context_fn(mut req: Request, next: Next) -> Result<Response, WebError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match header.and_then(|h| h.strip_prefix(AUTH_SCHEME)) {
        Some(token) => token.to_string(),
        None => {
            req.extensions_mut().insert(RequestContext::new(None));
            return Ok(next.run(req).await);
        }
    };

    let claims = auth::process_token(&token, Config::get_or_init(false).await.app().jwt())
        .map_err(WebError::auth_token_invalid)?;

    let user = AuthenticatedUser::new(claims.claims.sub);
    req.extensions_mut()
        .insert(RequestContext::new(Some(user)));

    Ok(next.run(req).await)
}
