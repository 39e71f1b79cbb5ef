//! Convenient imports for typical `sqlbuilder` usage.
//!
//! ```
//! use sqlbuilder::prelude::*;
//! ```

pub use crate::args;
pub use crate::{Arg, BuilderError, BuilderOptions, BuilderResult, BulkBuilder, QueryBuilder};
