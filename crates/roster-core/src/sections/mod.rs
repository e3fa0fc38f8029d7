//! Section decoders for flattened personnel records.
//!
//! Each section decoder reads a fixed set of flat fields through a
//! [`RecordReader`](crate::RecordReader) and builds one nested section of the
//! decoded record. Decoders never fail: missing scalars become `None`, missing
//! dates become `""`, and repeated groups may be empty.
//!
//! Decoders are registered in the [`DecoderRegistry`] and looked up by
//! [`Section`](roster_model::Section). [`default_registry()`] returns a
//! pre-built registry with all thirteen decoders.
//!
//! # Sections
//!
//! | Section | Repeated groups | Notes |
//! |---------|-----------------|-------|
//! | general | none | short tour number trimmed, `0` when absent |
//! | projected | projected training | assignment and duty scalars |
//! | duty | history (24 slots), experience (15 slots) | history exists when unit or location is present |
//! | service_dates | none | sixteen milestone dates |
//! | rated | aircraft history | hours rounded to tenths |
//! | degree | academic specialties | |
//! | courses | courses | the section is the list itself |
//! | pme | PME courses | |
//! | joint | joint assignments | anchored on the start date |
//! | adsc | commitments | the section is the list itself |
//! | special_experience | NEI, general SEI | acquisition data nested |
//! | language | languages (5 slots) | DLAB score coerced to a number |
//! | asgn_code | block, availability, limitation codes | cleared through slot 10 |

pub mod adsc;
pub mod asgn_code;
pub mod courses;
pub mod degree;
mod decoder_trait;
pub mod duty;
pub mod general;
pub mod joint;
pub mod language;
pub mod pme;
pub mod projected;
pub mod rated;
pub mod service_dates;
pub mod special_experience;

pub use decoder_trait::{
    DecoderRegistry, FunctionDecoder, SectionDecoder, build_default_registry, default_registry,
};
