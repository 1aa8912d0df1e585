use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid boost category {0}")]
    InvalidBoostCategory(u8),
    #[error("invalid vehicle id {0}")]
    InvalidVehicle(u8),
}
