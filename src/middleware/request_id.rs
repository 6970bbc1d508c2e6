//! Correlation ids for catalogue requests.
//!
//! Every request runs inside a `catalogue_request` span carrying its id, so
//! the repository and service events it emits can be grouped per request.

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upper bound on a caller-supplied id; longer values are replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Id of the current request, readable from request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    fn from_request(req: &ServiceRequest) -> Self {
        let supplied = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN);

        match supplied {
            Some(id) => CorrelationId(id.to_string()),
            None => CorrelationId(Uuid::new_v4().to_string()),
        }
    }
}

/// Assigns a correlation id, scopes the request's logs to it and echoes it back.
pub struct RequestId;

impl<S, B> Transform<S, ServiceRequest> for RequestId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdService { service }))
    }
}

pub struct RequestIdService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = CorrelationId::from_request(&req);
        let span = tracing::info_span!(
            "catalogue_request",
            request_id = %id.0,
            method = %req.method(),
            path = %req.path(),
        );
        req.extensions_mut().insert(id.clone());

        let response = {
            let _entered = span.enter();
            self.service.call(req)
        };

        Box::pin(
            async move {
                let mut res = response.await?;
                tracing::debug!(status = res.status().as_u16(), "Catalogue request finished");

                if let Ok(value) = HeaderValue::from_str(&id.0) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Ok(res)
            }
            .instrument(span),
        )
    }
}
