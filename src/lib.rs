pub mod error;
pub mod record;
pub mod types;
pub mod value;

pub use error::RecordError;
pub use record::Record;
pub use value::{FieldNumber, FieldValue};
