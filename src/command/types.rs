//! Start and end markers of the AT command grammar

/// Start marker literals, indexed by [`StartMarker`]. Index 0 means no marker.
pub const START_MARKERS: [&str; 7] = ["", "+", "#", "$", "%", "\\", "&"];

/// End marker literals, indexed by [`EndMarker`]. Index 0 means no marker.
pub const END_MARKERS: [&str; 6] = ["", "=?", "?", "=", ":", "\r"];

/// Character following `AT` that selects a command namespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StartMarker {
    #[default]
    None = 0,
    /// `AT+...`
    Plus = 1,
    /// `AT#...`
    Hash = 2,
    /// `AT$...`
    Dollar = 3,
    /// `AT%...`
    Percent = 4,
    /// `AT\...`
    Backslash = 5,
    /// `AT&...`
    Ampersand = 6,
}

impl StartMarker {
    const ALL: [Self; 7] = [
        Self::None,
        Self::Plus,
        Self::Hash,
        Self::Dollar,
        Self::Percent,
        Self::Backslash,
        Self::Ampersand,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        START_MARKERS[self as usize]
    }

    /// Match the first byte of `s` against the marker table, skipping `None`.
    pub(crate) fn detect(s: &str) -> Self {
        Self::ALL[1..]
            .iter()
            .copied()
            .find(|m| s.as_bytes().first() == m.as_str().as_bytes().first())
            .unwrap_or_default()
    }
}

/// Literal separating the command identifier from its payload. It also tells
/// the form of the command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EndMarker {
    #[default]
    None = 0,
    /// `=?`
    Test = 1,
    /// `?`
    Get = 2,
    /// `=`
    Set = 3,
    /// `:`, used by unsolicited result codes and echoed responses
    Urc = 4,
    /// `\r`
    Exec = 5,
}

impl EndMarker {
    const ALL: [Self; 6] = [
        Self::None,
        Self::Test,
        Self::Get,
        Self::Set,
        Self::Urc,
        Self::Exec,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        END_MARKERS[self as usize]
    }

    /// Find the first marker, in table order, that occurs anywhere in `s`.
    ///
    /// Table order wins over position: `Z=?` yields `Test` although `=` is
    /// also present.
    pub(crate) fn search(s: &str) -> Option<(Self, usize)> {
        Self::ALL[1..]
            .iter()
            .find_map(|m| s.find(m.as_str()).map(|pos| (*m, pos)))
    }
}

impl From<u8> for EndMarker {
    fn from(v: u8) -> Self {
        Self::from_index(v).unwrap_or_default()
    }
}

impl From<u8> for StartMarker {
    fn from(v: u8) -> Self {
        Self::from_index(v).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tables_match_enums() {
        for (i, lit) in START_MARKERS.iter().enumerate() {
            let m = StartMarker::from_index(i as u8).unwrap();
            assert_eq!(m.index() as usize, i);
            assert_eq!(m.as_str(), *lit);
        }
        for (i, lit) in END_MARKERS.iter().enumerate() {
            let m = EndMarker::from_index(i as u8).unwrap();
            assert_eq!(m.index() as usize, i);
            assert_eq!(m.as_str(), *lit);
        }
        assert_eq!(StartMarker::from_index(7), None);
        assert_eq!(EndMarker::from_index(6), None);
        assert_eq!(EndMarker::from(42), EndMarker::None);
    }

    #[test]
    fn detect_start_marker() {
        assert_eq!(StartMarker::detect("+CSQ"), StartMarker::Plus);
        assert_eq!(StartMarker::detect("&K3"), StartMarker::Ampersand);
        assert_eq!(StartMarker::detect("\\Q"), StartMarker::Backslash);
        assert_eq!(StartMarker::detect("Z"), StartMarker::None);
        assert_eq!(StartMarker::detect(""), StartMarker::None);
    }

    #[test]
    fn end_marker_table_order_wins() {
        assert_eq!(EndMarker::search("#Z=?"), Some((EndMarker::Test, 2)));
        assert_eq!(EndMarker::search("+CSQ?"), Some((EndMarker::Get, 4)));
        assert_eq!(EndMarker::search("+ABC=1"), Some((EndMarker::Set, 4)));
        // `?` is checked before `=` even though `=` comes first
        assert_eq!(EndMarker::search("+A=B?"), Some((EndMarker::Get, 4)));
        assert_eq!(EndMarker::search("Z"), None);
    }
}
