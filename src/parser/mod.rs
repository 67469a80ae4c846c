//! Declarative response parsers
//!
//! A response is parsed by a tree of [`Parser`] nodes held in a
//! [`ParserTree`]. Each node isolates one field of the text it is given. A node
//! bound to an [`Output`] converts the field into the caller's slot; a node
//! without an output hands the field to its children, in insertion order.
//!
//! ```ignore
//! let cmd = AtCommand::parse("AT+CSQ?")?;
//! let rssi = Cell::new(0);
//! let ber = Cell::new(0);
//!
//! let mut tree: ParserTree<'_, 4> = ParserTree::new();
//! let root = tree.add(Parser::command(&cmd))?;
//! tree.add_child(root, Parser::comma_split(0).with_integer_output(&rssi))?;
//! tree.add_child(root, Parser::comma_split(1).with_integer_output(&ber))?;
//!
//! tree.parse(root, "+CSQ: 10,100")?;
//! ```

mod number;
mod output;
mod tree;

use core::cell::{Cell, RefCell};

use heapless::String;

use crate::command::AtCommand;
use crate::config::{StringOutput, COMMAND_ID_CAPACITY};
use crate::error::Error;

pub use number::{parse_float, parse_integer};
pub use output::Output;
pub use tree::{Children, NodeId, ParserTree};

/// How a node locates its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserKind {
    /// Response echoes the command identifier; the field is everything after
    /// the identifier and one separator character.
    CommandEcho {
        command_id: String<COMMAND_ID_CAPACITY>,
    },
    /// Field `position` of a comma separated list.
    CommaSplit { position: usize },
    /// Text inside the first pair of parentheses. `position` is kept for
    /// selecting among several groups but only the first group is read.
    Parentheses { position: usize },
    /// `name:value` pairs. Not implemented, always fails with
    /// [`Error::NotSupported`].
    NameValue { position: usize },
}

/// One node of a parser tree.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    kind: ParserKind,
    output: Output<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(kind: ParserKind) -> Self {
        Self {
            kind,
            output: Output::None,
        }
    }

    /// Node matching the echo of `cmd` in its response.
    pub fn command(cmd: &AtCommand) -> Self {
        Self::new(ParserKind::CommandEcho {
            command_id: cmd.command_id.clone(),
        })
    }

    pub fn comma_split(position: usize) -> Self {
        Self::new(ParserKind::CommaSplit { position })
    }

    pub fn parentheses(position: usize) -> Self {
        Self::new(ParserKind::Parentheses { position })
    }

    pub fn name_value(position: usize) -> Self {
        Self::new(ParserKind::NameValue { position })
    }

    pub fn with_integer_output(mut self, slot: &'a Cell<i64>) -> Self {
        self.output.bind(Output::Integer(slot));
        self
    }

    pub fn with_float_output(mut self, slot: &'a Cell<f64>) -> Self {
        self.output.bind(Output::Float(slot));
        self
    }

    pub fn with_string_output(mut self, slot: &'a RefCell<StringOutput>) -> Self {
        self.output.bind(Output::String(slot));
        self
    }

    pub fn kind(&self) -> &ParserKind {
        &self.kind
    }

    pub fn output(&self) -> &Output<'a> {
        &self.output
    }

    /// Isolate this node's field in `response`.
    pub(crate) fn extract<'r>(&self, response: &'r str) -> Result<&'r str, Error> {
        match &self.kind {
            ParserKind::CommandEcho { command_id } => {
                let start = response.find(command_id.as_str()).ok_or_else(|| {
                    debug!("Command {} not found in response", command_id.as_str());
                    Error::CommandNotFound
                })?;
                let mut rest = response[start + command_id.len()..].chars();
                rest.next();
                Ok(rest.as_str())
            }
            ParserKind::CommaSplit { position } => {
                let mut rest = response;
                for _ in 0..*position {
                    rest = match rest.split_once(',') {
                        Some((_, tail)) => tail,
                        None => {
                            debug!("Response has no comma separated field {}", *position);
                            return Err(Error::MissingField);
                        }
                    };
                }
                let end = rest
                    .find(',')
                    .or_else(|| rest.find('\r'))
                    .unwrap_or(rest.len());
                Ok(&rest[..end])
            }
            ParserKind::Parentheses { .. } => {
                let field = response
                    .split_once('(')
                    .and_then(|(_, tail)| tail.split_once(')'))
                    .map(|(field, _)| field);
                field.ok_or_else(|| {
                    debug!("Response has no parenthesized group");
                    Error::MissingDelimiter
                })
            }
            ParserKind::NameValue { .. } => {
                warn!("Name-value parsing is not supported");
                Err(Error::NotSupported)
            }
        }
    }
}
