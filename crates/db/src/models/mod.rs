//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Conversions into the core records where the resolver reads the row

pub mod company_profile;
pub mod seeker_profile;
pub mod taxonomy;
pub mod user;
