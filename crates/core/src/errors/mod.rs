//! Error types and result extensions for safecall operations

mod builders;
mod display;
mod extensions;
mod types;

pub use builders::*;
pub use extensions::*;
pub use types::{Error, Interrupted, Result};

pub(crate) use types::Message;
