//! AT command tokenizer
//!
//! Splits a raw command such as `AT+CGDCONT=1,"IP","apn"` into its start
//! marker, identifier, end marker and payload, and serializes it back to the
//! wire form.

pub mod types;

use core::fmt;
use core::str::FromStr;

use heapless::String;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{COMMAND_ID_CAPACITY, COMMAND_PAYLOAD_CAPACITY, RAW_COMMAND_CAPACITY};
use crate::error::Error;
pub use types::{EndMarker, StartMarker, END_MARKERS, START_MARKERS};

const PREFIX: &str = "AT";

/// One AT command, either tokenized from a raw string or filled in by hand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AtCommand {
    pub start_marker: StartMarker,
    pub end_marker: EndMarker,
    /// Start marker followed by the command name, e.g. `+CSQ`.
    pub command_id: String<COMMAND_ID_CAPACITY>,
    /// Everything after the end marker. Empty for test, get and exec forms.
    pub command_payload: String<COMMAND_PAYLOAD_CAPACITY>,
}

impl AtCommand {
    /// Tokenize `raw`.
    ///
    /// Input that does not start with `AT` is accepted and yields an empty
    /// command. The only failure is an identifier or payload that does not fit
    /// its buffer.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let mut cmd = Self::default();

        let Some(rest) = raw.strip_prefix(PREFIX) else {
            debug!("Ignoring command without AT prefix: {}", raw);
            return Ok(cmd);
        };

        cmd.start_marker = StartMarker::detect(rest);
        let marker = cmd.start_marker.as_str();
        let rest = &rest[marker.len()..];
        push(&mut cmd.command_id, marker)?;

        match EndMarker::search(rest) {
            Some((end_marker, pos)) => {
                cmd.end_marker = end_marker;
                push(&mut cmd.command_id, &rest[..pos])?;
                push(
                    &mut cmd.command_payload,
                    &rest[pos + end_marker.as_str().len()..],
                )?;
            }
            None => push(&mut cmd.command_id, rest)?,
        }

        trace!(
            "Tokenized command id={} start={} end={}",
            cmd.command_id.as_str(),
            cmd.start_marker.index(),
            cmd.end_marker.index()
        );

        Ok(cmd)
    }

    /// Wire form: `AT`, identifier, end marker literal, payload.
    pub fn raw_command(&self) -> String<RAW_COMMAND_CAPACITY> {
        // Capacity covers the largest identifier, end marker and payload
        let mut raw = String::new();
        raw.push_str(PREFIX).ok();
        raw.push_str(&self.command_id).ok();
        raw.push_str(self.end_marker.as_str()).ok();
        raw.push_str(&self.command_payload).ok();
        raw
    }
}

fn push<const N: usize>(buf: &mut String<N>, s: &str) -> Result<(), Error> {
    buf.push_str(s).map_err(|_| Error::Overflow)
}

impl FromStr for AtCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AtCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(PREFIX)?;
        f.write_str(&self.command_id)?;
        f.write_str(self.end_marker.as_str())?;
        f.write_str(&self.command_payload)
    }
}

impl Serialize for AtCommand {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw_command())
    }
}

impl<'de> Deserialize<'de> for AtCommand {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = AtCommand;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a raw AT command string")
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                AtCommand::parse(value).map_err(E::custom)
            }

            fn visit_bytes<E>(self, value: &[u8]) -> core::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                let value = core::str::from_utf8(value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Bytes(value), &self))?;
                self.visit_str(value)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
