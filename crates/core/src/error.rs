/// Shared error taxonomy for the onboarding core and its storage adapters.
///
/// "Row not found" for optional rows (profiles) is never an error; adapters
/// return `Ok(None)` for those. `NotFound` is reserved for rows that must
/// exist, such as the `users` row of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The backend could not be reached or rejected the query.
    #[error("Backend error: {0}")]
    Backend(String),

    /// A row came back in a shape that does not decode into its record type.
    #[error("Unexpected schema: {0}")]
    UnexpectedSchema(String),
}
