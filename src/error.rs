// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("field name count ({keys}) does not match value count ({values})")]
    ShapeMismatch { keys: usize, values: usize },
    #[error(
        "no field named {name}; the data service only returns fields placed on the configured field layout"
    )]
    MissingField { name: String },
    #[error("{name} is not a valid field name")]
    InvalidFieldName { name: String },
    #[error(
        "portal data cannot be set through the record instance; submit related rows through the portal edit operation"
    )]
    PortalWrite { name: String },
    #[error("field {name} does not hold an integer identifier (got {value})")]
    NonNumericIdentifier { name: String, value: String },
}
