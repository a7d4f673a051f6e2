use serde::{Deserialize, Serialize};

use crate::{
    record::{FieldError, Record},
    value::Value,
};

/// Error raised when numeric coercion of a column fails.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CoerceError {
    /// A record in the table does not carry the field being coerced.
    #[display("field '{field}' is missing from a record")]
    MissingField { field: String },
    /// A record holds text under the field that does not parse as a number.
    #[display("field '{field}' value '{value}' is not numeric")]
    NotNumeric { field: String, value: String },
}

/// An ordered collection of records, as handed over by an external loader.
///
/// The table preserves the order records were loaded in; every downstream
/// ordering guarantee (which group comes first, which category is drawn
/// first) derives from that order. After loading, measure columns are
/// converted from text to numbers with [`coerce_number`](Self::coerce_number)
/// and the table is read-only from then on.
///
/// # Serialization
///
/// A table serializes as a JSON array of objects:
///
/// ```json
/// [
///   { "Platform": "TikTok", "PostType": "Video", "Likes": "431" },
///   { "Platform": "Twitter", "PostType": "Text", "Likes": "278" }
/// ]
/// ```
///
/// # Examples
///
/// ```
/// use vizprep_data::table::Table;
///
/// let mut table: Table = serde_json::from_str(
///     r#"[
///         { "Platform": "TikTok", "Likes": "431" },
///         { "Platform": "Twitter", "Likes": "278" }
///     ]"#,
/// )?;
///
/// table.coerce_number("Likes")?;
/// assert_eq!(table.numbers("Likes")?, vec![431.0, 278.0]);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Creates a table with no records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from records in load order.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the records in load order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Converts a textual column to numbers across all records.
    ///
    /// This is the preparation step between loading and aggregation: measure
    /// columns arrive as text from delimited input and are parsed in place.
    /// Values that are already numeric are left untouched. Leading and
    /// trailing whitespace around a textual number is accepted.
    ///
    /// # Errors
    ///
    /// Fails on the first record where the field is absent or holds text
    /// that does not parse as a number. Records before it will already have
    /// been converted.
    pub fn coerce_number(&mut self, field: &str) -> Result<(), CoerceError> {
        for record in &mut self.records {
            let parsed = match record.get(field) {
                None => {
                    return Err(CoerceError::MissingField {
                        field: field.to_owned(),
                    });
                }
                Some(Value::Number(_)) => continue,
                Some(Value::Text(text)) => match text.trim().parse::<f64>() {
                    Ok(parsed) => parsed,
                    Err(_) => {
                        return Err(CoerceError::NotNumeric {
                            field: field.to_owned(),
                            value: text.clone(),
                        });
                    }
                },
            };
            record.set_value(field, Value::Number(parsed));
        }
        Ok(())
    }

    /// Extracts a numeric column in record order.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] hit while reading the column.
    pub fn numbers(&self, field: &str) -> Result<Vec<f64>, FieldError> {
        self.records
            .iter()
            .map(|record| record.number(field))
            .collect()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
