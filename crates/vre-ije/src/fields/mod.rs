//! Static field tables, one module per dialect.

pub(crate) mod cancer;
pub(crate) mod mortality;
