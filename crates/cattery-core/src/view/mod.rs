//! Detail view state: media carousel, screen navigation and the open session.
//!
//! Every operation is synchronous and applied one event at a time. The
//! controller holds a single "currently open" slot; opening again replaces it.

mod carousel;
mod controller;
mod navigator;
mod session;
mod snapshot;

pub use carousel::*;
pub use controller::*;
pub use navigator::*;
pub use session::*;
pub use snapshot::*;

use thiserror::Error;

/// Detail view errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("No detail view is open")]
    NotOpen,

    #[error("Media index {index} out of range for {len} items")]
    MediaIndexOutOfRange { index: usize, len: usize },
}

pub type ViewResult<T> = Result<T, ViewError>;
