use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use crate::application::access::{self, Decision};
use crate::application::error::ApiError;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{identity_from_claims, token_from_headers, validate_token};

/// Route guard applied to the whole API surface. Resolves the caller's
/// identity (if any) from the bearer token, consults the static access
/// table, and stashes the identity in request extensions for handlers
/// that want it.
pub async fn require_access(
    State(ctx): State<AppContext>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let identity = token_from_headers(req.headers())
        .and_then(|token| validate_token(&ctx.cfg, &token).ok())
        .and_then(|claims| identity_from_claims(&claims).ok());

    match access::authorize(identity.as_ref(), &path) {
        Decision::Allow => {
            if let Some(id) = identity {
                req.extensions_mut().insert(id);
            }
            Ok(next.run(req).await)
        }
        Decision::RequireLogin => {
            tracing::debug!(%path, "rejecting unauthenticated request");
            Err(ApiError::Unauthorized)
        }
        Decision::Forbid => {
            tracing::debug!(%path, "rejecting request, role not allowed");
            Err(ApiError::Forbidden)
        }
    }
}
