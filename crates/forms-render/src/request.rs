//! Request data available to the renderer

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;

/// Query parameter naming the entry being edited.
pub const ENTRY_ID_PARAM: &str = "id";

/// Query parameters of the admin request that asked for the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    query: IndexMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string such as `id=blog/hello-world&tab=seo`.
    ///
    /// Later duplicates win. `+` decodes to a space.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut ctx = Self::default();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            ctx.query.insert(decode(key), decode(value));
        }

        ctx
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Entry id from the `id` query parameter, if present and non-empty
    pub fn entry_id(&self) -> Option<&str> {
        self.query(ENTRY_ID_PARAM).filter(|id| !id.is_empty())
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
