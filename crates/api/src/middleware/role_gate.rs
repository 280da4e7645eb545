//! Role gate for managing operations.
//!
//! Deciding expenses, setting opening balances and creating drives are
//! reserved for office bearers (president, secretary, reporter, treasurer).
//! The engine never checks roles; it only records who acted.

use axum::{extract::FromRequestParts, http::request::Parts};
use samiti_core::actor::Actor;
use tracing::warn;

use super::actor::CurrentActor;
use crate::error::ApiError;

/// Extractor that admits office bearers only.
#[derive(Debug, Clone, Copy)]
pub struct OfficeBearer(pub Actor);

impl<S> FromRequestParts<S> for OfficeBearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentActor(actor) = CurrentActor::from_request_parts(parts, state).await?;
        if !actor.role.is_office_bearer() {
            warn!(member_id = actor.member_id, role = %actor.role, path = %parts.uri.path(), "Role gate denied request");
            return Err(ApiError::forbidden(format!(
                "Role {} may not perform this operation",
                actor.role
            )));
        }
        Ok(Self(actor))
    }
}
