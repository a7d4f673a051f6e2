//! Record table data model for chart preparation.
//!
//! This crate holds the input side of the chart preparation pipeline: rows of
//! loosely typed field data as an external loader hands them over, plus the
//! grouping primitive the aggregation layer is built on.
//!
//! - **Values**: A field is either a number or text ([`value::Value`])
//! - **Records**: A row maps field names to values ([`record::Record`])
//! - **Tables**: An ordered list of records with numeric coercion
//!   ([`table::Table`])
//! - **Grouping**: Partitioning that remembers the order keys first appear in
//!   ([`group::OrderedGroups`])
//!
//! # Modules
//!
//! - [`value`]: Field values
//! - [`record`]: Single rows and field access errors
//! - [`table`]: Record collections and numeric coercion
//! - [`group`]: First-encounter-ordered grouping
//!
//! # Examples
//!
//! ```
//! use vizprep_data::{record::Record, table::Table};
//!
//! let mut table: Table = [
//!     Record::new()
//!         .with_field("Platform", "TikTok")
//!         .with_field("Likes", "431"),
//!     Record::new()
//!         .with_field("Platform", "Twitter")
//!         .with_field("Likes", "278"),
//! ]
//! .into_iter()
//! .collect();
//!
//! // Measure columns arrive as text and are coerced in place.
//! table.coerce_number("Likes")?;
//! assert_eq!(table.numbers("Likes")?, vec![431.0, 278.0]);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

pub mod group;
pub mod record;
pub mod table;
pub mod value;
