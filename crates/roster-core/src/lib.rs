//! Decoding of flattened personnel export rows into nested records.

pub mod assemble;
pub mod batch;
pub mod group;
pub mod numeric;
pub mod prepass;
pub mod reader;
pub mod sas_date;
pub mod sections;

pub use assemble::{DecodeOutcome, RecordDecoder, decode_record};
pub use batch::{assemble_batch, decode_batch};
pub use group::{
    Anchor, EntryValue, Extent, FieldKind, GroupEntry, GroupFamily, GroupField, extract_group,
};
pub use numeric::{hours, round_tenths, to_number};
pub use prepass::{binary_to_text, drop_nulls, has_binary, has_null, normalize_binary, prepare};
pub use reader::RecordReader;
pub use sas_date::{
    EpochUnit, SAS_EPOCH, decode_date, decode_datetime, format_sas_date, sas_date, sas_datetime,
};
pub use sections::{
    DecoderRegistry, FunctionDecoder, SectionDecoder, build_default_registry, default_registry,
};
