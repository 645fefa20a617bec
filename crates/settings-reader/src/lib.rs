//! # settings-reader
//!
//! Typed accessors over a single INI-style settings file.
//!
//! ```text
//! [section1]
//! property1 = value1
//! boolean1 = True
//! int = 28
//! float = 6.626
//! str_list = red, fish; blue, fish
//! int_list = 1,4,3,2
//! ```
//!
//! [`SettingsReader`] loads a file like the one above (or starts empty), hands
//! out values as `String`, `bool`, `i64`, `f64` or delimited lists, accepts
//! changes through [`SettingsReader::set`], and writes everything back with
//! [`SettingsReader::write`].
//!
//! - **`reader`** – the [`SettingsReader`] itself.
//! - **`error`** – [`SettingsError`] and its [`ErrorKind`] tag.
//! - **`coerce`** – string → scalar rules shared by getters and lists.
//! - **`list`** – [`ListSyntax`], the list delimiter convention.
//!
//! Storage and the text format live in the `settings-store` crate; its
//! [`ConfigStore`] is re-exported here.

pub mod coerce;
pub mod error;
pub mod list;
pub mod reader;

pub use error::{ErrorKind, Result, SettingsError, ValueError};
pub use list::{ListElement, ListSyntax};
pub use reader::SettingsReader;
pub use settings_store::{ConfigStore, NameProblem, SyntaxError, WriteError};
