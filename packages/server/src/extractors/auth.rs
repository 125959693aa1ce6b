use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{self, Claims, TokenScope};

/// Admin principal extracted from a `Authorization: Bearer <token>` header
/// or a `token` cookie.
///
/// Add this as a handler parameter to require an admin-scope token. Judge
/// tokens are a separate namespace and never open admin routes.
pub struct AdminUser {
    pub user_id: i32,
    pub username: String,
}

/// Judge principal extracted the same way, requiring judge scope.
pub struct AuthJudge {
    pub judge_id: i32,
    pub username: String,
}

fn claims_from_parts(parts: &Parts, state: &AppState) -> Result<Claims, AppError> {
    let bearer = parts
        .headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").ok_or(AppError::TokenInvalid))
        .transpose()?;

    let token = match bearer {
        Some(t) => t.to_owned(),
        None => CookieJar::from_headers(&parts.headers)
            .get("token")
            .map(|c| c.value().to_owned())
            .ok_or(AppError::TokenMissing)?,
    };

    jwt::verify(&state.config.auth.jwt_secret, &token).map_err(|_| AppError::TokenInvalid)
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claims = claims_from_parts(parts, state)?;
        if claims.scope != TokenScope::Admin {
            return Err(AppError::TokenInvalid);
        }

        Ok(AdminUser {
            user_id: claims.uid,
            username: claims.sub,
        })
    }
}

impl FromRequestParts<AppState> for AuthJudge {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claims = claims_from_parts(parts, state)?;
        if claims.scope != TokenScope::Judge {
            return Err(AppError::TokenInvalid);
        }

        Ok(AuthJudge {
            judge_id: claims.uid,
            username: claims.sub,
        })
    }
}
