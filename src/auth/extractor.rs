use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::auth::{AuthError, JwtService, UserSession};

/// Resolves the caller from an `Authorization: Bearer <jwt>` header.
#[async_trait]
impl<S> FromRequestParts<S> for UserSession
where
    JwtService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        AuthError::MissingAuthHeader
                    } else {
                        AuthError::InvalidAuthHeaderFormat
                    }
                })?;

        let jwt_service = JwtService::from_ref(state);
        jwt_service.extract_user_session(bearer.token())
    }
}
