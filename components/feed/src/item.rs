use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

pub static MEDIA_CONTENT: &str = "media:content";
pub static CONTENT_ENCODED: &str = "content:encoded";
pub static DESCRIPTION: &str = "description";
pub static URL: &str = "url";

static TITLE: &str = "title";
static LINK: &str = "link";

/// Shape of a `media:content` value.
#[derive(Debug, PartialEq)]
pub enum Media<'a> {
    List(&'a [Value]),
    Map(&'a Map<String, Value>),
    Unknown(&'a Value),
}

/// A single parsed RSS or Atom entry.
///
/// Keys are the element names produced by the feed parser so
/// namespaced elements keep their prefix, eg: `media:content`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FeedItem {
    data: Map<String, Value>,
}

impl FeedItem {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            _ => Err(Error::NotAnObject(kind(&value).to_string())),
        }
    }

    /// Parse either a single item object or an array of item objects.
    pub fn parse_many(content: &str) -> Result<Vec<FeedItem>> {
        let value: Value = serde_json::from_str(content)?;
        match value {
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(vec![Self::from_value(value)?]),
        }
    }

    pub fn media_content(&self) -> Option<Media<'_>> {
        self.data.get(MEDIA_CONTENT).map(|value| match value {
            Value::Array(list) => Media::List(list),
            Value::Object(map) => Media::Map(map),
            _ => Media::Unknown(value),
        })
    }

    // Prefer the full content over the summary, a null
    // content value falls through to the description.
    pub fn description(&self) -> Option<String> {
        self.string(CONTENT_ENCODED)
            .or_else(|| self.string(DESCRIPTION))
    }

    pub fn title(&self) -> Option<String> {
        self.string(TITLE)
    }

    pub fn link(&self) -> Option<String> {
        self.string(LINK)
    }

    fn string(&self, key: &str) -> Option<String> {
        self.data.get(key).and_then(to_string)
    }
}

/// Convert a scalar value to a string.
///
/// Null, arrays and objects have no string form and yield `None`.
pub fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
