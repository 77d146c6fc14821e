//! Integration tests for devdex crates.
//!
//! These tests drive the public API end to end: the numeric models, the
//! notation parsers and formatters, the conversion facade and the unit
//! tables.
