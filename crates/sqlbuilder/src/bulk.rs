//! Bulk INSERT builder.
//!
//! A [`BulkBuilder`] is created from a single-row INSERT template that ends with the
//! row marker (`(?)` by default). Each [`bind`](BulkBuilder::bind) call appends one
//! row group of placeholders and its arguments.
//!
//! ```
//! use sqlbuilder::BulkBuilder;
//!
//! let mut b = BulkBuilder::new("INSERT INTO tbl_name (a,b,c) VALUES (?)")?;
//! b.bind(["A", "B", "C"])?.bind(["AA", "BB", "CC"])?;
//!
//! let (sql, args) = b.build();
//! assert_eq!(sql, "INSERT INTO tbl_name (a,b,c) VALUES (?,?,?),(?,?,?)");
//! assert_eq!(args.len(), 6);
//! # Ok::<(), sqlbuilder::BuilderError>(())
//! ```

use crate::arg::Arg;
use crate::error::{BuilderError, BuilderResult};
use crate::options::BuilderOptions;
use crate::query::QueryBuilder;

const ROW_SEPARATOR: char = ',';

/// A minimal SQL builder for bulk INSERT statements.
///
/// Only constructible through [`BulkBuilder::new`] / [`BulkBuilder::with_options`],
/// which validate the template.
#[derive(Debug, Clone)]
#[must_use]
pub struct BulkBuilder {
    placeholders: String,
    arity: usize,
    rows: usize,
    builder: QueryBuilder,
}

impl BulkBuilder {
    /// Create a bulk builder with default options.
    pub fn new(template: &str) -> BuilderResult<Self> {
        Self::with_options(template, &BuilderOptions::default())
    }

    /// Create a bulk builder.
    ///
    /// `template` must end with exactly one occurrence of the row marker. The number
    /// of arguments per row is the number of commas in the template plus one, so
    /// `INSERT INTO t (a,b,c) VALUES (?)` expects three values per row.
    pub fn with_options(template: &str, options: &BuilderOptions) -> BuilderResult<Self> {
        let marker = options.marker();
        let template = template.trim();
        let prefix = match template.strip_suffix(marker) {
            Some(prefix) if template.matches(marker).count() == 1 => prefix,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "sqlbuilder.sql",
                    template,
                    marker,
                    "rejected bulk template"
                );
                return Err(BuilderError::malformed_template(marker));
            }
        };

        let arity = template.matches(ROW_SEPARATOR).count() + 1;
        let placeholders = row_group(options.placeholder(), arity);

        let mut builder = QueryBuilder::with_options(options);
        builder.append(prefix, crate::args![]);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlbuilder.sql",
            arity,
            placeholders = %placeholders,
            "created bulk builder"
        );

        Ok(Self {
            placeholders,
            arity,
            rows: 0,
            builder,
        })
    }

    /// Bind one row of arguments.
    ///
    /// An empty row is a no-op. Otherwise the row must have exactly
    /// [`arity`](Self::arity) values; on mismatch nothing is appended.
    pub fn bind<I>(&mut self, args: I) -> BuilderResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let row: Vec<Arg> = args.into_iter().map(Into::into).collect();
        if row.is_empty() {
            return Ok(self);
        }
        if row.len() != self.arity {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "sqlbuilder.sql",
                expected = self.arity,
                got = row.len(),
                "rejected bulk row"
            );
            return Err(BuilderError::ArityMismatch {
                expected: self.arity,
                got: row.len(),
            });
        }
        self.builder.append_no_space(&self.placeholders, row);
        self.rows += 1;
        Ok(self)
    }

    /// Return the built SQL and all bound arguments.
    ///
    /// The builder is left untouched; rows bound afterwards show up in the next build.
    pub fn build(&self) -> (&str, &[Arg]) {
        let (sql, args) = self.builder.build();
        (strip_row_separator(sql), args)
    }

    /// Consume the builder, returning the built SQL and arguments.
    pub fn into_parts(self) -> (String, Vec<Arg>) {
        let (mut sql, args) = self.builder.into_parts();
        let len = strip_row_separator(&sql).len();
        sql.truncate(len);
        (sql, args)
    }

    /// Number of arguments expected per row.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of rows bound so far.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Render `(p,p,...,p),` with `arity` placeholders.
fn row_group(placeholder: &str, arity: usize) -> String {
    let mut group = String::with_capacity((placeholder.len() + 1) * arity + 2);
    group.push('(');
    for i in 0..arity {
        if i > 0 {
            group.push(ROW_SEPARATOR);
        }
        group.push_str(placeholder);
    }
    group.push(')');
    group.push(ROW_SEPARATOR);
    group
}

fn strip_row_separator(sql: &str) -> &str {
    sql.strip_suffix(ROW_SEPARATOR).unwrap_or(sql)
}
