//! HTTP adapter shared by every entity module.
//!
//! Each module registers a [`Resource`] and gets the five routes. Handlers
//! open one unit of work per request and cancel it if the request is dropped.

use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::core::{CrudService, Envelope, Failure};
use crate::persistence::Store;

/// Binds an entity service to an HTTP scope.
pub trait Resource: 'static {
    type Dto: Serialize + DeserializeOwned + Send + Sync + 'static;
    type Service: CrudService<Dto = Self::Dto>;

    /// Path segment, e.g. `/restaurants`
    const PATH: &'static str;

    fn service(store: &Store) -> Self::Service;

    /// Make the DTO target the id taken from the URL.
    fn assign_id(dto: &mut Self::Dto, id: String);
}

/// Token that fires when the handler future is dropped mid-flight.
fn request_token() -> (CancellationToken, tokio_util::sync::DropGuard) {
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();
    (token, guard)
}

pub async fn list<R: Resource>(store: web::Data<Store>) -> Result<HttpResponse, Failure> {
    let (cancel, _guard) = request_token();
    let success = R::service(&store).list(&cancel).await?;
    Ok(HttpResponse::Ok().json(Envelope::from(success)))
}

pub async fn get<R: Resource>(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, Failure> {
    let (cancel, _guard) = request_token();
    let success = R::service(&store).get(&path.into_inner(), &cancel).await?;
    Ok(HttpResponse::Ok().json(Envelope::from(success)))
}

pub async fn create<R: Resource>(
    store: web::Data<Store>,
    body: web::Json<R::Dto>,
) -> Result<HttpResponse, Failure> {
    let (cancel, _guard) = request_token();
    let success = R::service(&store).create(body.into_inner(), &cancel).await?;
    Ok(HttpResponse::Created().json(Envelope::from(success)))
}

pub async fn update<R: Resource>(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<R::Dto>,
) -> Result<HttpResponse, Failure> {
    let (cancel, _guard) = request_token();
    let mut dto = body.into_inner();
    R::assign_id(&mut dto, path.into_inner());
    let success = R::service(&store).update(dto, &cancel).await?;
    Ok(HttpResponse::Ok().json(Envelope::from(success)))
}

pub async fn delete<R: Resource>(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, Failure> {
    let (cancel, _guard) = request_token();
    let success = R::service(&store).delete(&path.into_inner(), &cancel).await?;
    Ok(HttpResponse::Ok().json(Envelope::from(success)))
}

/// Register the five CRUD routes of a resource
pub fn configure<R: Resource>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(R::PATH)
            .route("", web::get().to(list::<R>))
            .route("", web::post().to(create::<R>))
            .route("/{id}", web::get().to(get::<R>))
            .route("/{id}", web::put().to(update::<R>))
            .route("/{id}", web::delete().to(delete::<R>)),
    );
}
