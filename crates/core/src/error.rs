/// Errors raised by lookups over the rental dataset.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is the value the client asked for, which may be wider than any
    /// stored key.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: u64 },
}
