pub mod cancellation;
pub mod error;
pub mod outcome;
pub mod specification;
pub mod traits;

pub use cancellation::cancellable;
pub use error::{AppError, Result};
pub use outcome::{Envelope, Failure, FailureKind, Outcome, Success};
pub use specification::{Criteria, Specification};
pub use traits::{CrudService, Entity, NoRelation, Repository};
