use thiserror::Error;

use crate::api::ClientError;
use crate::models::MenuItemId;

/// Input rejected before any backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("menu name is empty")]
    EmptyName,

    #[error("menu name already exists: {0}")]
    DuplicateName(String),
}

/// Errors surfaced by the menu store and its backends.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("communication error: {0}")]
    Communication(#[from] ClientError),

    #[error("menu item not found: {0}")]
    NotFound(MenuItemId),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type MenuResult<T> = Result<T, MenuError>;
