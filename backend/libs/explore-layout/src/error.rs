use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid viewport columns: {0} (expected 1, 2 or 3)")]
    InvalidColumns(u8),

    #[error("Invalid breakpoints: small ({small}px) must be below large ({large}px)")]
    InvalidBreakpoints { small: u32, large: u32 },
}
