//! Field schemas: the per-variant table that drives editing and search.
//!
//! Each contact variant declares, once and statically, the ordered list of
//! fields a user may edit and that search scans, together with the rule that
//! validates the field and the accessor that reads it back from a snapshot.
//! Generic code (the director's edit flow, the searcher) only ever walks these
//! tables, so a new variant needs a table and a builder, nothing more.

mod field;
mod registry;
pub mod tables;

pub use field::{Accessor, Field, FieldDescriptor, FieldSchema};
pub use registry::SchemaRegistry;
