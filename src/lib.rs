#![cfg_attr(not(test), no_std)]

//! # AT parser
//!
//! Tokenizer for Hayes `AT` modem commands, and declarative parser trees that
//! extract typed values from their responses. Everything operates on text that
//! was already received from, or will be handed to, the serial transport.
//! It can be used both on `no_std` and `std` platforms.
//!
//! ## Example
//!
//! ```ignore
//! use core::cell::Cell;
//! use at_parser::prelude::*;
//!
//! let cmd = AtCommand::parse("AT+CSQ?")?;
//! assert_eq!(cmd.command_id, "+CSQ");
//! assert_eq!(cmd.end_marker, EndMarker::Get);
//!
//! let rssi = Cell::new(0);
//! let ber = Cell::new(0);
//! let mut tree: ParserTree<'_, 3> = ParserTree::new();
//! let root = tree.add(Parser::command(&cmd))?;
//! tree.add_child(root, Parser::comma_split(0).with_integer_output(&rssi))?;
//! tree.add_child(root, Parser::comma_split(1).with_integer_output(&ber))?;
//! tree.parse(root, "+CSQ: 10,100\r\nOK")?;
//! ```
//!
//! ## Logging
//!
//! Enable either the `log` or the `defmt` feature to get trace output of
//! tokenized commands and extracted fields.

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod command;
pub mod config;
pub mod error;
pub mod parser;

#[cfg(test)]
mod test_helpers;

pub use command::{AtCommand, EndMarker, StartMarker};
pub use config::StringOutput;
pub use error::{Error, ErrorCode};
pub use parser::{NodeId, Output, Parser, ParserKind, ParserTree};

/// Prelude - Include the types needed to tokenize commands and build parser trees
pub mod prelude {
    pub use crate::command::{AtCommand, EndMarker, StartMarker};
    pub use crate::config::StringOutput;
    pub use crate::error::{Error, ErrorCode};
    pub use crate::parser::{Parser, ParserTree};
}
