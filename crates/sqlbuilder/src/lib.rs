//! # sqlbuilder
//!
//! Minimal helpers for building raw SQL with positional arguments.
//!
//! ## Features
//!
//! - **Raw SQL**: no parser and no dialect; fragments are trimmed and joined by one space
//! - **Positional arguments**: a flat, ordered [`Arg`] list to hand to your driver
//! - **Bulk INSERT**: expand a single-row template into multi-row `VALUES` groups
//!
//! Executing the result is left to the database layer of your choice.
//!
//! ## QueryBuilder
//!
//! ```
//! use sqlbuilder::{QueryBuilder, args};
//!
//! let mut b = QueryBuilder::new();
//! b.append("SELECT * FROM test_user WHERE id = ? ", [1]) // with trailing space
//!     .append("AND name = ?", ["John"]) // without trailing space
//!     .append(" ORDER BY name LIMIT ?, ?", [0, 10]); // with space at the beginning
//!
//! let (sql, args) = b.build();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM test_user WHERE id = ? AND name = ? ORDER BY name LIMIT ?, ?"
//! );
//! assert_eq!(args, args![1, "John", 0, 10].as_slice());
//! ```
//!
//! ## BulkBuilder
//!
//! ```
//! use sqlbuilder::BulkBuilder;
//!
//! let mut b = BulkBuilder::new("INSERT INTO tbl_name (a,b,c) VALUES (?)")?;
//! b.bind(["A", "B", "C"])?;
//! b.bind(["AA", "BB", "CC"])?;
//!
//! let (sql, args) = b.build();
//! assert_eq!(sql, "INSERT INTO tbl_name (a,b,c) VALUES (?,?,?),(?,?,?)");
//! assert_eq!(args.len(), 6);
//! # Ok::<(), sqlbuilder::BuilderError>(())
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: emit built SQL and rejected templates/rows as `tracing` events
//!   under the `sqlbuilder.sql` target.
//! - `rust_decimal`: accept `rust_decimal::Decimal` as an [`Arg`].

pub mod arg;
pub mod bulk;
pub mod error;
pub mod options;
pub mod prelude;
pub mod query;

pub use arg::Arg;
pub use bulk::BulkBuilder;
pub use error::{BuilderError, BuilderResult};
pub use options::{BuilderOptions, DEFAULT_MARKER, DEFAULT_PLACEHOLDER};
pub use query::QueryBuilder;
