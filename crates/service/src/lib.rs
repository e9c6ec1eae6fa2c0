//! Service layer providing business-oriented operations on top of models.
//! - Separates the aggregation workflow from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod address;
pub mod errors;
pub mod student;
