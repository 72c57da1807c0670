//! HAR-shaped request/response records.
//!
//! Field names follow the HTTP Archive layout so a HAR entry deserializes
//! straight into an [`ExchangeRecord`]. Every field is defaulted: a record with
//! missing, `null` or mistyped pieces still loads and still synthesizes a
//! command.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field, reading `null` or a value of the wrong shape as the
/// field's default.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// A single `name: value` pair, used for headers and form parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A posted form parameter. `value` may be absent in HAR exports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Param {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub value: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Request body as captured by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostData {
    #[serde(deserialize_with = "lenient")]
    pub mime_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub params: Option<Vec<Param>>,
}

impl PostData {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn params(params: Vec<Param>) -> Self {
        Self {
            params: Some(params),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Request {
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    #[serde(deserialize_with = "lenient")]
    pub method: String,
    /// Headers in the order the host reported them. Duplicates are kept.
    #[serde(deserialize_with = "lenient")]
    pub headers: Vec<Header>,
    #[serde(deserialize_with = "lenient")]
    pub post_data: Option<PostData>,
}

impl Request {
    /// First header with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&Header> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Content {
    #[serde(deserialize_with = "lenient")]
    pub mime_type: Option<String>,
    /// Body text when the archive embeds it.
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    /// `base64` when `text` holds encoded binary.
    #[serde(deserialize_with = "lenient")]
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Response {
    #[serde(deserialize_with = "lenient")]
    pub status: i64,
    #[serde(deserialize_with = "lenient")]
    pub content: Content,
    #[serde(deserialize_with = "lenient")]
    pub body_size: Option<i64>,
}

/// One completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRecord {
    #[serde(deserialize_with = "lenient")]
    pub request: Request,
    #[serde(deserialize_with = "lenient")]
    pub response: Response,
    /// Elapsed time in milliseconds, HAR's `time` field.
    #[serde(rename = "time", deserialize_with = "lenient")]
    pub timing: Option<f64>,
}

impl ExchangeRecord {
    /// Minimal record for a request with no headers or body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            request: Request {
                url: url.into(),
                method: method.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.push(Header::new(name, value));
        self
    }

    pub fn with_post_data(mut self, post_data: PostData) -> Self {
        self.request.post_data = Some(post_data);
        self
    }

    pub fn with_status(mut self, status: i64) -> Self {
        self.response.status = status;
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.response.content.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_body_size(mut self, size: i64) -> Self {
        self.response.body_size = Some(size);
        self
    }

    pub fn with_timing(mut self, millis: f64) -> Self {
        self.timing = Some(millis);
        self
    }

    pub fn url(&self) -> &str {
        &self.request.url
    }

    /// Elapsed milliseconds; absent, negative or non-finite values read as 0.
    pub fn timing_ms(&self) -> f64 {
        match self.timing {
            Some(t) if t.is_finite() && t >= 0.0 => t,
            _ => 0.0,
        }
    }
}
