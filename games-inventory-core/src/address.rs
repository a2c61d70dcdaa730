//! Logical resource addresses.
//!
//! Callers name records with content-style strings:
//!
//! - `content://games-inventory/games` is the collection of all games
//! - `content://games-inventory/games/<id>` is a single game
//!
//! [`GameAddress::parse`] is a pure function over the string; there is no
//! matcher table or registry.

use std::fmt;
use std::str::FromStr;

/// Authority part of every address.
pub const CONTENT_AUTHORITY: &str = "games-inventory";

/// Path segment for the games collection.
pub const PATH_GAMES: &str = "games";

const SCHEME: &str = "content://";

/// A parsed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAddress {
    Collection,
    Item(i64),
}

/// Which shape an address has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Collection,
    Item,
}

impl ResourceKind {
    /// Content type for rows at an address of this kind.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Collection => "vnd.games-inventory.dir/games",
            Self::Item => "vnd.games-inventory.item/games",
        }
    }
}

impl GameAddress {
    /// The collection address as a string.
    pub fn collection_uri() -> String {
        format!("{SCHEME}{CONTENT_AUTHORITY}/{PATH_GAMES}")
    }

    /// Parse an address string. `None` if it matches neither shape.
    ///
    /// One trailing `/` is tolerated. Item ids must be plain decimal digits
    /// that fit in an `i64`.
    pub fn parse(address: &str) -> Option<Self> {
        let rest = address.strip_prefix(SCHEME)?;
        let rest = rest.strip_prefix(CONTENT_AUTHORITY)?.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = rest.split('/');
        if segments.next()? != PATH_GAMES {
            return None;
        }
        let address = match segments.next() {
            None => Self::Collection,
            Some(id) if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) => {
                Self::Item(id.parse().ok()?)
            }
            Some(_) => return None,
        };
        if segments.next().is_some() {
            return None;
        }
        Some(address)
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Collection => ResourceKind::Collection,
            Self::Item(_) => ResourceKind::Item,
        }
    }

    /// The row id for item addresses.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Collection => None,
            Self::Item(id) => Some(*id),
        }
    }

    /// Whether `self` lies strictly beneath `other` in the address tree.
    pub fn is_descendant_of(&self, other: &GameAddress) -> bool {
        matches!((self, other), (Self::Item(_), Self::Collection))
    }
}

impl fmt::Display for GameAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => write!(f, "{SCHEME}{CONTENT_AUTHORITY}/{PATH_GAMES}"),
            Self::Item(id) => write!(f, "{SCHEME}{CONTENT_AUTHORITY}/{PATH_GAMES}/{id}"),
        }
    }
}

/// Error returned when a string is not a recognized address.
#[derive(Debug, Clone)]
pub struct AddressParseError(pub String);

impl fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized address: '{}'", self.0)
    }
}

impl std::error::Error for AddressParseError {}

impl FromStr for GameAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AddressParseError(s.to_string()))
    }
}
