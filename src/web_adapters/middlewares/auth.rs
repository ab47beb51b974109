//! Request guards: `RequireAuthenticated` attaches a [`Principal`], `RequireRole` checks it
//! against a [`RoleSet`]. Register `RequireAuthenticated` outside of `RequireRole`.

use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web::Data,
    Error, HttpMessage,
};
use common::token::PasetoCodec;
use db_adapters::user_adapter::UserAdapter;
use futures::future::LocalBoxFuture;
use sea_orm::DbConn;
use tracing::{event, Level};
use use_cases::{
    access_control::{authorize_role, Principal, RoleSet},
    auth::identity::{resolve_principal, AuthFailure},
    UseCaseError,
};

use crate::utils::{response_401, response_403, response_500, response_503, NOT_AUTHORIZED};

pub struct RequireAuthenticated;

impl<S, B> Transform<S, ServiceRequest> for RequireAuthenticated
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthenticatedMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthenticatedMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAuthenticatedMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthenticatedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            let dependencies = match (
                req.app_data::<Data<DbConn>>(),
                req.app_data::<Data<PasetoCodec>>(),
            ) {
                (Some(db), Some(codec)) => Some((db.clone(), codec.clone())),
                _ => None,
            };
            let (db, codec) = match dependencies {
                Some(dependencies) => dependencies,
                None => {
                    event!(target: "backend", Level::ERROR, "Database or token codec is not registered as app data.");
                    return Ok(req
                        .into_response(response_503("Authentication is unavailable"))
                        .map_into_right_body());
                }
            };
            let authorization = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            match resolve_principal(authorization.as_deref(), codec.get_ref(), UserAdapter::init(&db)).await {
                Ok(principal) => {
                    req.extensions_mut().insert(principal);
                    svc.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(AuthFailure::Missing | AuthFailure::Invalid) => Ok(req
                    .into_response(response_401(NOT_AUTHORIZED))
                    .map_into_right_body()),
                Err(AuthFailure::DependencyUnavailable) => Ok(req
                    .into_response(response_503("Authentication is unavailable"))
                    .map_into_right_body()),
            }
        })
    }
}

/// Lets the request through only when the attached [`Principal`] has a role in the set.
pub struct RequireRole {
    allowed: RoleSet,
}

impl RequireRole {
    pub fn new(allowed: RoleSet) -> Self {
        Self { allowed }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed: self.allowed,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed: RoleSet,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let allowed = self.allowed;
        Box::pin(async move {
            let principal = req.extensions().get::<Principal>().copied();
            let principal = match principal {
                Some(principal) => principal,
                None => {
                    event!(target: "backend", Level::WARN, "Role check on {} ran without an authenticated principal.", req.path());
                    return Ok(req
                        .into_response(response_401(NOT_AUTHORIZED))
                        .map_into_right_body());
                }
            };

            match authorize_role(&principal, allowed) {
                Ok(()) => svc.call(req).await.map(ServiceResponse::map_into_left_body),
                Err(UseCaseError::Forbidden(message)) => {
                    Ok(req.into_response(response_403(&message)).map_into_right_body())
                }
                Err(e) => Ok(req.into_response(response_500(e)).map_into_right_body()),
            }
        })
    }
}
