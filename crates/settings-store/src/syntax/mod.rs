//! Text format: tokenizer and serializer for INI-style settings files.

pub mod parser;
pub mod writer;

pub use parser::{parse, SyntaxError};
pub use writer::{serialize, NameProblem, WriteError};
