//! Fixed capacities of the bounded buffers used by the crate.
//!
//! Nothing is truncated to fit: text that exceeds a capacity is rejected with
//! [`Error::Overflow`](crate::error::Error::Overflow).

/// Maximum length of a command identifier, including its start marker.
pub const COMMAND_ID_CAPACITY: usize = 32;

/// Maximum length of the payload following the end marker.
pub const COMMAND_PAYLOAD_CAPACITY: usize = 256;

/// Longest end marker literal.
pub(crate) const END_MARKER_MAX_LEN: usize = 2;

/// Maximum length of a re-serialized command: `AT`, identifier, end marker and payload.
pub const RAW_COMMAND_CAPACITY: usize =
    2 + COMMAND_ID_CAPACITY + END_MARKER_MAX_LEN + COMMAND_PAYLOAD_CAPACITY;

/// Capacity of a string output slot.
pub const STRING_OUTPUT_CAPACITY: usize = 128;

/// String storage a parser node can write into.
pub type StringOutput = heapless::String<STRING_OUTPUT_CAPACITY>;
