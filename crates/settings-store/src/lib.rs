//! # settings-store
//!
//! String-only storage for INI-style settings files: an ordered
//! section → property → value model plus the tokenizer and serializer that
//! move it to and from text.
//!
//! This crate knows nothing about types.  Every value is the literal string
//! found after the `=` (or `:`).  Turning `"28"` into an integer, or
//! `"red, fish; blue, fish"` into nested lists, is the job of the
//! `settings-reader` crate built on top of it.
//!
//! - **`store`** – [`ConfigStore`] and [`Section`], the in-memory model.
//! - **`syntax`** – [`parse`] and [`serialize`], the text format.

pub mod store;
pub mod syntax;

pub use store::{ConfigStore, Section};
pub use syntax::{parse, serialize, NameProblem, SyntaxError, WriteError};
