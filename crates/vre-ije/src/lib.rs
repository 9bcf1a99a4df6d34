//! Fixed-width record codec for vital-records interchange.
//!
//! Two dialects are supported: the 5000-character mortality layout and the
//! 24194-character cancer-registry layout. Each is a declarative table of
//! [`FieldDef`] slots mapping wire positions to data on the canonical
//! [`vre_model::DeathRecord`]; [`encode`] and [`decode`] drive the table in
//! both directions. Coded geographic slots translate through a
//! [`vre_geo::GeoRegistry`].
//!
//! Per-field transform problems (unknown codes, malformed parts) degrade to
//! blank fills or raw passthrough with a log note; only structural problems
//! are errors.

pub mod codec;
mod error;
mod field;
mod fields;
mod reader;
mod validate;
mod writer;

pub use error::{IjeError, Result};
pub use field::{
    CAUSE_OF_DEATH, CANCER_RECORD_LEN, Dialect, FieldDef, FieldKind, GeoKind, Justify,
    MORTALITY_RECORD_LEN,
};
pub use reader::decode;
pub use validate::validate_table;
pub use writer::encode;
