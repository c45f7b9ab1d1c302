pub mod error;
pub mod object;

pub use error::{DoxyError, Result};
pub use object::{DocObject, ObjectKind};
