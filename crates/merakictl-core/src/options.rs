//! Options bag and pagination parameters
//!
//! Every operation accepts an [`Options`] bag: an ordered map of option names to
//! JSON values that is forwarded to the client without inspection. Paginated
//! operations additionally carry a [`Paging`] pair (`total_pages`, `direction`)
//! whose defaults come from the operation descriptor and can be overridden
//! through the bag under the `total_pages` and `direction` keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::ClientError;

/// Option key that overrides the page count of a paginated operation
pub const TOTAL_PAGES_KEY: &str = "total_pages";

/// Option key that overrides the direction of a paginated operation
pub const DIRECTION_KEY: &str = "direction";

/// Option key bounding forward event-log pagination (ISO 8601 timestamp).
///
/// Events that occurred after this time are dropped and no further pages are
/// fetched once one is seen. The key is consumed by the HTTP client and never
/// sent to the API.
pub const EVENT_LOG_END_TIME_KEY: &str = "event_log_end_time";

/// Direction in which pages are followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Prev => "prev",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" => Ok(Direction::Next),
            "prev" => Ok(Direction::Prev),
            other => Err(format!(
                "invalid direction '{}': expected 'next' or 'prev'",
                other
            )),
        }
    }
}

/// How many pages a paginated call should fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TotalPages {
    /// Stop after this many pages (at least one)
    Count(u32),
    /// Follow links until the API stops returning them (`-1` or `"all"`)
    All,
}

impl Default for TotalPages {
    fn default() -> Self {
        TotalPages::Count(1)
    }
}

impl TotalPages {
    /// Interpret a JSON value as a page count.
    ///
    /// Accepts positive integers, `-1`, and the strings `"all"` / `"-1"` /
    /// digits. Anything else yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => match n.as_i64()? {
                -1 => Some(TotalPages::All),
                count if count >= 1 => u32::try_from(count).ok().map(TotalPages::Count),
                _ => None,
            },
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// JSON form as the Dashboard SDKs spell it (`-1` means all pages)
    pub fn to_value(&self) -> Value {
        match self {
            TotalPages::Count(n) => Value::from(*n),
            TotalPages::All => Value::from(-1),
        }
    }

    /// Whether another page may be fetched after `fetched` pages
    pub fn allows_more(&self, fetched: u32) -> bool {
        match self {
            TotalPages::Count(limit) => fetched < *limit,
            TotalPages::All => true,
        }
    }
}

impl fmt::Display for TotalPages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalPages::Count(n) => write!(f, "{}", n),
            TotalPages::All => f.write_str("all"),
        }
    }
}

impl FromStr for TotalPages {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "-1" {
            return Ok(TotalPages::All);
        }
        match trimmed.parse::<u32>() {
            Ok(count) if count >= 1 => Ok(TotalPages::Count(count)),
            _ => Err(format!(
                "invalid page count '{}': expected a positive integer, -1, or 'all'",
                trimmed
            )),
        }
    }
}

/// Pagination parameters forwarded with a paginated operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paging {
    pub total_pages: TotalPages,
    pub direction: Direction,
}

impl Paging {
    /// One page in the given direction
    pub fn first_page(direction: Direction) -> Self {
        Self {
            total_pages: TotalPages::default(),
            direction,
        }
    }
}

/// Open-ended bag of named options forwarded verbatim to the client.
///
/// Insertion order is preserved so that entries reach the client in the order
/// the caller supplied them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: Map<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, replacing any earlier value under the same key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Override the page count of a paginated operation
    pub fn total_pages(self, total_pages: TotalPages) -> Self {
        self.with(TOTAL_PAGES_KEY, total_pages.to_value())
    }

    /// Override the direction of a paginated operation
    pub fn direction(self, direction: Direction) -> Self {
        self.with(DIRECTION_KEY, direction.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }

    /// Parse a `key=value` pair from the command line.
    ///
    /// The value is read as JSON when it parses (`perPage=100`,
    /// `productTypes=["wireless"]`) and as a plain string otherwise.
    pub fn parse_pair(pair: &str) -> Result<(String, Value), String> {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| format!("invalid option '{}': expected key=value", pair))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("invalid option '{}': empty key", pair));
        }
        let value =
            serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok((key.to_string(), value))
    }

    /// Split the pagination overrides out of the bag.
    ///
    /// For paginated operations (`defaults` is `Some`) the `total_pages` and
    /// `direction` entries are removed and resolved against the defaults; the
    /// remaining entries are returned untouched. Non-paginated operations get
    /// the whole bag back unchanged.
    pub(crate) fn split_paging(
        mut self,
        defaults: Option<Direction>,
    ) -> Result<(Option<Paging>, Map<String, Value>), ClientError> {
        let Some(default_direction) = defaults else {
            return Ok((None, self.entries));
        };

        let mut paging = Paging::first_page(default_direction);

        if let Some(value) = self.entries.remove(TOTAL_PAGES_KEY) {
            paging.total_pages = TotalPages::from_value(&value).ok_or_else(|| {
                ClientError::InvalidArgument(format!(
                    "invalid value for {}: {}",
                    TOTAL_PAGES_KEY, value
                ))
            })?;
        }

        if let Some(value) = self.entries.remove(DIRECTION_KEY) {
            paging.direction = value
                .as_str()
                .ok_or_else(|| {
                    ClientError::InvalidArgument(format!(
                        "invalid value for {}: {}",
                        DIRECTION_KEY, value
                    ))
                })?
                .parse()
                .map_err(ClientError::InvalidArgument)?;
        }

        Ok((Some(paging), self.entries))
    }
}

impl From<Map<String, Value>> for Options {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
