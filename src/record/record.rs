use crate::error::RecordError;
use crate::types::{FastMap, FieldName};
use crate::value::FieldValue;
use std::fmt;

// ─── Record ─────────────────────────────────────────────────────────────────

/// One row fetched from the data service.
///
/// Holds the ordered name/value snapshot as returned by the server and
/// accumulates local edits for a later partial-update write-back. Field order
/// is significant: position in `keys()` defines the corresponding position in
/// `values()`.
#[derive(Clone)]
pub struct Record {
    pub(super) keys: Vec<FieldName>,
    pub(super) values: Vec<FieldValue>,
    /// True for a related row nested inside a portal. Portal rows are a
    /// special case: the service does not give them all standard keys
    /// (the modification id is missing).
    pub(super) in_portal: bool,
    pub(super) modifications: FastMap<FieldName, FieldValue>,
}

impl Record {
    /// Build a record from the snapshot the transport layer decoded:
    /// field names and positionally aligned values, plus the portal flag.
    pub fn new(
        keys: Vec<FieldName>,
        values: Vec<FieldValue>,
        in_portal: bool,
    ) -> Result<Self, RecordError> {
        if keys.len() != values.len() {
            return Err(RecordError::ShapeMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            keys,
            values,
            in_portal,
            modifications: FastMap::default(),
        })
    }

    /// Build a record from ordered (name, value) pairs. Cannot fail: the two
    /// stores are equal-length by construction.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (FieldName, FieldValue)>,
        in_portal: bool,
    ) -> Self {
        let (keys, values) = pairs.into_iter().unzip();
        Self {
            keys,
            values,
            in_portal,
            modifications: FastMap::default(),
        }
    }

    /// All field names of this record, in server order.
    #[inline]
    pub fn keys(&self) -> &[FieldName] {
        &self.keys
    }

    /// All field values of this record, reflecting local edits.
    #[inline]
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Whether this instance describes a related record from a portal.
    #[inline]
    pub fn in_portal(&self) -> bool {
        self.in_portal
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check if a field exists on this record.
    #[inline]
    pub fn has_field(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate over (name, value) pairs in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldValue)> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Position of `name` in the ordered field list.
    #[inline]
    pub(super) fn position(&self, name: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == name)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summary form: the full field dump is rarely what a log line wants.
        let id = match self.record_id() {
            Ok(id) => id.to_string(),
            Err(_) => "?".to_string(),
        };
        let mod_id = match self.modification_id() {
            Ok(Some(m)) => m.to_string(),
            Ok(None) => "none".to_string(),
            Err(_) => "?".to_string(),
        };
        write!(
            f,
            "Record(id={} modification_id={} dirty={})",
            id,
            mod_id,
            self.is_dirty()
        )
    }
}
