use serde::{Deserialize, Serialize};


/// An id as submitted by a client, either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
    /// Anything else, never a valid id
    Other(serde_json::Value),
}

impl RawId {
    /// The id as a positive database id, if it is one.
    pub fn parse_positive(&self) -> Option<i32> {
        let value = match self {
            RawId::Number(value) => *value,
            RawId::Text(text) => text.trim().parse::<i64>().ok()?,
            RawId::Other(_) => return None,
        };
        if value <= 0 {
            return None;
        }
        i32::try_from(value).ok()
    }
}

impl From<i32> for RawId {
    fn from(value: i32) -> Self {
        RawId::Number(value as i64)
    }
}

impl From<&str> for RawId {
    fn from(value: &str) -> Self {
        RawId::Text(value.to_string())
    }
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Number(value) => write!(f, "{}", value),
            RawId::Text(text) => write!(f, "'{}'", text),
            RawId::Other(value) => write!(f, "{}", value),
        }
    }
}
