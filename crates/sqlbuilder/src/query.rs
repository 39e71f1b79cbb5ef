//! Raw query builder.
//!
//! [`QueryBuilder`] accumulates trimmed SQL fragments joined by a single space and
//! a flat list of positional arguments. It does not parse SQL and does not check that
//! placeholders and arguments line up; that is left to the caller.

use crate::arg::Arg;
use crate::options::BuilderOptions;
use std::fmt;

/// A minimal raw SQL builder.
///
/// A default-constructed builder is empty and ready to use.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryBuilder {
    sql: String,
    args: Vec<Arg>,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with an argument list pre-sized from `options`.
    pub fn with_options(options: &BuilderOptions) -> Self {
        Self {
            sql: String::new(),
            args: Vec::with_capacity(options.capacity()),
        }
    }

    /// Append a fragment followed by a separating space, then its arguments.
    ///
    /// Leading and trailing whitespace of `sql` is trimmed, so fragments may or may
    /// not carry their own spacing.
    pub fn append<I>(&mut self, sql: &str, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.push_trimmed(sql);
        self.sql.push(' ');
        self.append_args(args)
    }

    /// Append a fragment without the separating space, then its arguments.
    ///
    /// The next fragment is concatenated directly, which can produce invalid SQL
    /// when used carelessly.
    pub fn append_no_space<I>(&mut self, sql: &str, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.push_trimmed(sql);
        self.append_args(args)
    }

    /// Append arguments only, leaving the SQL text untouched.
    pub fn append_args<I>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn push_trimmed(&mut self, sql: &str) {
        self.sql.push_str(sql.trim());
    }

    /// Return the built SQL and arguments.
    ///
    /// Does not modify the builder, so repeated calls return the same values.
    pub fn build(&self) -> (&str, &[Arg]) {
        let sql = self.query();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqlbuilder.sql",
            sql = %sql,
            arg_count = self.args.len(),
            "built query"
        );
        (sql, self.args())
    }

    /// Consume the builder, returning the built SQL and arguments.
    pub fn into_parts(mut self) -> (String, Vec<Arg>) {
        let len = self.query().len();
        self.sql.truncate(len);
        (self.sql, self.args)
    }

    /// The built SQL, with a single trailing separator removed.
    pub fn query(&self) -> &str {
        self.sql.strip_suffix(' ').unwrap_or(&self.sql)
    }

    /// The accumulated arguments, in insertion order.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Whether nothing has been appended since creation or the last reset.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty() && self.args.is_empty()
    }

    /// Clear SQL and arguments so the builder can be reused.
    pub fn reset(&mut self) {
        self.sql.clear();
        self.args.clear();
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query())
    }
}
