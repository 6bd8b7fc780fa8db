//! # retrodis-core
//!
//! Core abstractions for the retrodis disassembler. This crate defines the
//! architecture identifiers, the label table, the cross-reference log and
//! the report built from it. Nothing here knows how instructions are encoded.

pub mod arch;
pub mod database;
pub mod error;
pub mod output;
pub mod symbol;
pub mod xref;

pub use arch::{Architecture, Endianness};
pub use database::SymbolDatabase;
pub use error::Error;
pub use output::{ReportEntry, ReportGroup, XrefReport};
pub use symbol::{hex_address, Symbol, SymbolTable};
pub use xref::{Xref, XrefDatabase, XrefGroup, XrefKind};
