//! Input batch ingestion.
//!
//! The batch is a `%`-delimited text file without a header. Each line holds
//! four fields in a fixed order:
//!
//! ```text
//! release id % informal category % object name % distance
//! ```

pub mod batch;
pub mod error;

pub use batch::{INPUT_DELIMITER, INPUT_FIELD_COUNT, read_input_batch, read_input_batch_from};
pub use error::{IngestError, Result};
