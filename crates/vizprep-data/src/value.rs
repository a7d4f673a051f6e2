use serde::{Deserialize, Serialize};

/// A single field value in a [`Record`](crate::record::Record).
///
/// Values are either numeric or textual, matching what a delimited-text
/// loader produces after numeric coercion: category labels stay text,
/// measure columns become numbers.
///
/// # Serialization
///
/// Serialization is untagged, so JSON numbers and strings map directly onto
/// the two variants:
///
/// ```
/// use vizprep_data::value::Value;
///
/// let number: Value = serde_json::from_str("42.5")?;
/// assert_eq!(number, Value::Number(42.5));
///
/// let text: Value = serde_json::from_str("\"TikTok\"")?;
/// assert_eq!(text, Value::Text("TikTok".to_owned()));
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::From,
    derive_more::IsVariant,
)]
#[serde(untagged)]
pub enum Value {
    /// A numeric field value.
    #[display("{_0}")]
    Number(f64),
    /// A textual field value.
    #[display("{_0}")]
    Text(String),
}

impl Value {
    /// Returns the numeric value, or `None` for text.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    /// Returns the text value, or `None` for numbers.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}
