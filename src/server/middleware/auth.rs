//! Bearer-token authentication extractor.
//!
//! Token decoding happens in exactly one place: any handler that declares an
//! `Actor` argument gets a verified identity or a 401 before its body runs.
//! Ownership checks compare the actor against the resource's owner via
//! `require_id`/`require_kind`.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    User,
    Owner,
}

/// Verified identity of the caller, decoded from the bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub kind: ActorKind,
}

impl Actor {
    /// Rejects actors of the wrong account type.
    pub fn require_kind(&self, kind: ActorKind) -> Result<(), AppError> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(AuthError::NotResourceOwner(self.id).into())
        }
    }

    /// Rejects any actor other than the resource owner.
    pub fn require_id(&self, owner_id: Uuid) -> Result<(), AppError> {
        if self.id == owner_id {
            Ok(())
        } else {
            Err(AuthError::NotResourceOwner(self.id).into())
        }
    }
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingCredentials)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingCredentials)?;

        let claims = state.tokens.verify(token)?;

        Ok(Actor {
            id: claims.sub,
            kind: claims.kind,
        })
    }
}
