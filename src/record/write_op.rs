use super::record::Record;
use crate::error::RecordError;
use crate::types::{FastMap, FieldName, PORTAL_PREFIX};
use crate::value::FieldValue;

impl Record {
    // ════════════════════════════════════════════════════════════════════════
    // Keyed writes
    // ════════════════════════════════════════════════════════════════════════

    /// Change the value of a field available in `keys()`.
    ///
    /// Modified fields land in the modification map and are later used by the
    /// write-back caller to send a partial update upstream. Writing the
    /// current value back is a no-op and does not mark the record dirty.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        let Some(index) = self.position(name) else {
            return Err(RecordError::InvalidFieldName {
                name: name.to_string(),
            });
        };
        if name.starts_with(PORTAL_PREFIX) {
            // Related rows carry their own record ids; a flattened field
            // write cannot express which row it targets.
            return Err(RecordError::PortalWrite {
                name: name.to_string(),
            });
        }

        let value = value.into();
        if value != self.values[index] {
            // Keep the modification map and the value store in sync, so that
            // values() returns what a subsequent read expects.
            self.modifications.insert(FieldName::new(name), value.clone());
            self.values[index] = value;
        }
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════════
    // Modification tracker
    // ════════════════════════════════════════════════════════════════════════

    /// Changed fields in the form {name: new_value}.
    ///
    /// This is the sparse partial-update payload the write-back caller
    /// submits upstream. Entries are never cleared by this type; a caller
    /// that needs a clean record after a successful write-back re-fetches it.
    #[inline]
    pub fn modifications(&self) -> &FastMap<FieldName, FieldValue> {
        &self.modifications
    }

    /// True once at least one field value has been modified.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.modifications.is_empty()
    }
}
