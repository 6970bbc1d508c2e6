pub mod entity;
pub mod repository;
pub mod service;

pub use entity::{Entity, NoRelation};
pub use repository::Repository;
pub use service::CrudService;
