//! Turns a raw `Authorization` header into a [`Principal`].

use common::token::TokenCodec;
use db_adapters::user_adapter::UserQuery;
use tracing::{event, Level};

use crate::access_control::Principal;

pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No usable bearer credential. The token codec was not consulted.
    Missing,
    /// Bad signature, malformed or expired token, or an unknown subject.
    Invalid,
    /// The user store could not answer.
    DependencyUnavailable,
}

/// Read-only: the only side effect is the user lookup.
pub async fn resolve_principal<C, U>(
    authorization: Option<&str>,
    codec: &C,
    users: U,
) -> Result<Principal, AuthFailure>
where
    C: TokenCodec,
    U: UserQuery,
{
    let token = authorization
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthFailure::Missing)?;

    let claims = codec.verify(token).map_err(|e| {
        event!(target: "backend", Level::DEBUG, "Rejected bearer token: {}", e);
        AuthFailure::Invalid
    })?;

    match users.get_by_id(claims.subject).await {
        Ok(Some(user)) => Ok(Principal::from(&user)),
        Ok(None) => Err(AuthFailure::Invalid),
        Err(e) => {
            event!(target: "backend", Level::ERROR, "User lookup failed during authentication: {:?}", e);
            Err(AuthFailure::DependencyUnavailable)
        }
    }
}
