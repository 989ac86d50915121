use super::record::Record;
use crate::error::RecordError;
use crate::types::{MOD_ID_FIELD, RECORD_ID_FIELD};
use crate::value::FieldValue;
use std::ops::Index;

impl Record {
    // ════════════════════════════════════════════════════════════════════════
    // Keyed reads
    // ════════════════════════════════════════════════════════════════════════

    /// Look up a field value by name.
    ///
    /// Fails with [`RecordError::MissingField`] for names outside the field
    /// layout — the service never returns fields that are not placed on it,
    /// so an absent name does not necessarily mean the field does not exist
    /// server-side.
    pub fn get(&self, name: &str) -> Result<&FieldValue, RecordError> {
        match self.position(name) {
            Some(i) => Ok(&self.values[i]),
            None => Err(RecordError::MissingField {
                name: name.to_string(),
            }),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Derived identifiers
    // ════════════════════════════════════════════════════════════════════════

    /// The server-internal record id.
    ///
    /// Exposed as a method so callers keep working even if the service
    /// renames the raw field in a future API version.
    pub fn record_id(&self) -> Result<i64, RecordError> {
        parse_identifier(RECORD_ID_FIELD, self.get(RECORD_ID_FIELD)?)
    }

    /// The server-internal modification id.
    ///
    /// Portal rows never carry one; for them this is `Ok(None)` regardless
    /// of which fields are present.
    pub fn modification_id(&self) -> Result<Option<i64>, RecordError> {
        if self.in_portal() {
            return Ok(None);
        }
        parse_identifier(MOD_ID_FIELD, self.get(MOD_ID_FIELD)?).map(Some)
    }
}

/// Identifier fields arrive either as numbers or as decimal strings,
/// depending on how the transport decoded the response.
fn parse_identifier(name: &str, value: &FieldValue) -> Result<i64, RecordError> {
    let parsed = match value {
        FieldValue::Number(n) => n.as_i64(),
        FieldValue::Text(s) => s.parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| RecordError::NonNumericIdentifier {
        name: name.to_string(),
        value: format!("{value:?}"),
    })
}

impl Index<&str> for Record {
    type Output = FieldValue;

    /// `record["field"]` sugar over [`Record::get`].
    ///
    /// Panics with the [`RecordError::MissingField`] message when the name is
    /// not on the field layout; use `get` to handle that case as a value.
    fn index(&self, name: &str) -> &FieldValue {
        match self.get(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
