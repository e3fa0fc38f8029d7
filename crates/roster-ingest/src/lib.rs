pub mod csv_records;
pub mod discovery;
pub mod json_records;

pub use csv_records::{parse_cell, read_csv_records};
pub use discovery::{InputFormat, discover_inputs, expand_inputs, read_records};
pub use json_records::{read_json_records, records_from_json};
