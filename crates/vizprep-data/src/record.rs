use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Error raised when a record field cannot be read as requested.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum FieldError {
    /// The record does not carry the named field.
    #[display("field '{field}' is missing")]
    Missing { field: String },
    /// The field holds text where a number was required.
    #[display("field '{field}' is text, expected a number")]
    NotNumber { field: String },
    /// The field holds a number where text was required.
    #[display("field '{field}' is a number, expected text")]
    NotText { field: String },
}

/// A single row of input data: a mapping from field name to value.
///
/// Records are what an external loader produces from one row of delimited
/// text. Field order is not significant; lookups go by name. The aggregation
/// layer only reads records, so apart from numeric coercion on the enclosing
/// [`Table`](crate::table::Table) a record does not change after loading.
///
/// # Serialization
///
/// A record serializes as a plain JSON object:
///
/// ```json
/// { "Platform": "TikTok", "PostType": "Video", "Likes": 431.0 }
/// ```
///
/// # Examples
///
/// ```
/// use vizprep_data::record::Record;
///
/// let record = Record::new()
///     .with_field("Platform", "TikTok")
///     .with_field("Likes", 431.0);
///
/// assert_eq!(record.text("Platform")?, "TikTok");
/// assert_eq!(record.number("Likes")?, 431.0);
/// # Ok::<_, vizprep_data::record::FieldError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any previous value under the same name.
    #[must_use]
    pub fn with_field<F, V>(mut self, field: F, value: V) -> Self
    where
        F: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns the raw value of a field, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Reads a field as a number.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Missing`] if the field is absent and
    /// [`FieldError::NotNumber`] if it holds text.
    pub fn number(&self, field: &str) -> Result<f64, FieldError> {
        let value = self.get(field).ok_or_else(|| FieldError::Missing {
            field: field.to_owned(),
        })?;
        value.as_number().ok_or_else(|| FieldError::NotNumber {
            field: field.to_owned(),
        })
    }

    /// Reads a field as text.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Missing`] if the field is absent and
    /// [`FieldError::NotText`] if it holds a number.
    pub fn text(&self, field: &str) -> Result<&str, FieldError> {
        let value = self.get(field).ok_or_else(|| FieldError::Missing {
            field: field.to_owned(),
        })?;
        value.as_text().ok_or_else(|| FieldError::NotText {
            field: field.to_owned(),
        })
    }

    /// Returns the field names present on this record, in name order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Replaces the value of a field in place.
    ///
    /// Used by the coercion pass on [`Table`](crate::table::Table).
    pub(crate) fn set_value(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_owned(), value);
    }
}

impl<F, V> FromIterator<(F, V)> for Record
where
    F: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}
