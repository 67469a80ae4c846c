use core::cell::{Cell, RefCell};

use super::number::{parse_float, parse_integer};
use crate::config::StringOutput;
use crate::error::Error;

/// Caller owned slot a parser node writes its field into.
///
/// The node only borrows the slot, so the slot must outlive the parser tree
/// holding it. A slot is either fully written with a valid value or left
/// untouched.
#[derive(Debug, Default, Clone, Copy)]
pub enum Output<'a> {
    #[default]
    None,
    Integer(&'a Cell<i64>),
    Float(&'a Cell<f64>),
    String(&'a RefCell<StringOutput>),
}

impl<'a> Output<'a> {
    fn priority(&self) -> u8 {
        match self {
            Output::None => 0,
            Output::String(_) => 1,
            Output::Float(_) => 2,
            Output::Integer(_) => 3,
        }
    }

    /// Attach `other`, keeping the current binding if it ranks higher.
    /// Integer ranks above float, float above string.
    pub(crate) fn bind(&mut self, other: Output<'a>) {
        if other.priority() >= self.priority() {
            *self = other;
        }
    }

    pub fn is_bound(&self) -> bool {
        !matches!(self, Output::None)
    }

    /// Convert `text` and store it in the bound slot.
    pub(crate) fn write(&self, text: &str) -> Result<(), Error> {
        match self {
            Output::None => Ok(()),
            Output::Integer(slot) => {
                slot.set(parse_integer(text)?);
                Ok(())
            }
            Output::Float(slot) => {
                slot.set(parse_float(text)?);
                Ok(())
            }
            Output::String(slot) => {
                let value =
                    StringOutput::try_from(strip_quotes(text)).map_err(|_| Error::Overflow)?;
                *slot.try_borrow_mut().map_err(|_| Error::SlotBusy)? = value;
                Ok(())
            }
        }
    }
}

/// Drop at most one `"` from each end, independently of each other.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quotes_are_stripped_per_side() {
        assert_eq!(strip_quotes("\"1.2.3.4\""), "1.2.3.4");
        assert_eq!(strip_quotes("\"open"), "open");
        assert_eq!(strip_quotes("close\""), "close");
        assert_eq!(strip_quotes("\"\"quoted\"\""), "\"quoted\"");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn integer_wins_over_later_bindings() {
        let int = Cell::new(0);
        let float = Cell::new(0.0);
        let string = RefCell::new(StringOutput::new());

        let mut out = Output::None;
        out.bind(Output::Integer(&int));
        out.bind(Output::Float(&float));
        out.bind(Output::String(&string));
        assert!(matches!(out, Output::Integer(_)));

        let mut out = Output::String(&string);
        out.bind(Output::Float(&float));
        assert!(matches!(out, Output::Float(_)));
    }

    #[test]
    fn failed_write_leaves_slot() {
        let int = Cell::new(5);
        assert_eq!(Output::Integer(&int).write("x"), Err(Error::InvalidNumber));
        assert_eq!(int.get(), 5);

        let float = Cell::new(1.5);
        assert_eq!(Output::Float(&float).write(""), Err(Error::InvalidNumber));
        assert_eq!(float.get(), 1.5);
    }

    #[test]
    fn string_write() {
        let string = RefCell::new(StringOutput::new());
        Output::String(&string).write("\"internet\"").unwrap();
        assert_eq!(*string.borrow(), "internet");

        let long = "x".repeat(crate::config::STRING_OUTPUT_CAPACITY + 1);
        assert_eq!(Output::String(&string).write(&long), Err(Error::Overflow));
        assert_eq!(*string.borrow(), "internet");

        let _guard = string.borrow();
        assert_eq!(Output::String(&string).write("apn"), Err(Error::SlotBusy));
    }
}
