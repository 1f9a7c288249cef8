use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder every request URL starts with; resolved by Postman from the
/// `baseUrl` collection variable.
pub const BASE_URL_PLACEHOLDER: &str = "{{baseUrl}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

impl Url {
    /// `path` is relative to the base url, e.g. `/leaves/:id/cancel`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.strip_prefix('/').unwrap_or(path);

        Self {
            raw: format!("{BASE_URL_PLACEHOLDER}{path}"),
            host: vec![BASE_URL_PLACEHOLDER.to_string()],
            path: trimmed.split('/').map(str::to_string).collect(),
        }
    }

    /// Segments written as `:name`, filled in by hand in the client.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.path.iter().filter_map(|segment| segment.strip_prefix(':'))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
    pub options: BodyOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyOptions {
    pub raw: RawOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOptions {
    pub language: String,
}

impl Body {
    pub fn json(example: &Value) -> Self {
        Self {
            mode: "raw".to_string(),
            raw: crate::writer::render_value(example),
            options: BodyOptions {
                raw: RawOptions {
                    language: "json".to_string(),
                },
            },
        }
    }

    /// Parses the raw text back into a JSON value.
    pub fn example(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: HttpMethod,
    pub header: Vec<Header>,
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Listen {
    Prerequest,
    Test,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub exec: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub listen: Listen,
    pub script: Script,
}

impl Event {
    pub fn test<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            listen: Listen::Test,
            script: Script {
                exec: lines.into_iter().map(Into::into).collect(),
                kind: "text/javascript".to_string(),
            },
        }
    }
}

/// One described API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub request: Request,
    pub response: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
}

impl Item {
    /// A `null` body is treated the same as no body at all.
    pub fn endpoint(
        name: impl Into<String>,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Self {
        let body = body.filter(|value| !value.is_null()).map(|value| Body::json(&value));

        Self {
            name: name.into(),
            request: Request {
                method,
                header: Vec::new(),
                url: Url::from_path(path),
                body,
            },
            response: Vec::new(),
            event: Vec::new(),
        }
    }

    pub fn with_test_script<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event.push(Event::test(lines));
        self
    }

    pub fn test_scripts(&self) -> impl Iterator<Item = &Script> {
        self.event
            .iter()
            .filter(|event| event.listen == Listen::Test)
            .map(|event| &event.script)
    }
}
