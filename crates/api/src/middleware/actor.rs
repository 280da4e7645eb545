//! Actor identification for protected routes.
//!
//! Membership and sign-in live outside this service. Callers identify the
//! acting member with two headers, which are checked here and stored in
//! request extensions for handlers to read.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use samiti_core::actor::{Actor, ActorRole};

use crate::error::ApiError;

/// Header carrying the acting member's id.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";

/// Header carrying the acting member's role.
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Parses the actor headers.
///
/// # Errors
///
/// Returns `Unauthorized` if a header is missing, the id is not a positive
/// integer, or the role is unknown.
pub fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ApiError> {
    let id = header(headers, ACTOR_ID_HEADER)
        .ok_or_else(|| ApiError::unauthorized("X-Actor-Id header is required"))?;
    let role = header(headers, ACTOR_ROLE_HEADER)
        .ok_or_else(|| ApiError::unauthorized("X-Actor-Role header is required"))?;

    let member_id = id
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::unauthorized(format!("Invalid actor id: {id}")))?;
    let role = ActorRole::parse(role)
        .ok_or_else(|| ApiError::unauthorized(format!("Unknown actor role: {role}")))?;

    Ok(Actor::new(member_id, role))
}

/// Rejects requests without a valid actor and stores the actor for handlers.
pub async fn actor_middleware(mut request: Request, next: Next) -> Response {
    match actor_from_headers(request.headers()) {
        Ok(actor) => {
            request.extensions_mut().insert(actor);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

/// Extractor for the acting member.
///
/// ```ignore
/// async fn handler(CurrentActor(actor): CurrentActor) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurrentActor(pub Actor);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(actor) = parts.extensions.get::<Actor>() {
            return Ok(Self(*actor));
        }
        actor_from_headers(&parts.headers).map(Self)
    }
}
