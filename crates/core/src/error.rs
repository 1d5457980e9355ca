#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Stale fetch completion: ticket {ticket} is not in flight")]
    StaleFetch { ticket: u64 },
}
