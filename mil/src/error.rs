use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("toString is disabled for mil")]
    ToStringDisabled,
    #[error("Failed to inject style: {0}")]
    Sheet(#[from] mil_sheet::SheetError),
}
