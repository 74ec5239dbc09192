//! Filter, sort, limit and projection for list queries.
//!
//! Values are passed through verbatim, so the web service's own operators
//! work as documented for the `filter[field]` parameter: `[1|5]` (any of),
//! `[1,10]` (interval, also dates thanks to `date=1`), `%[App]%` (contains).
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_ws_rest::{Filter, SortOrder};
//!
//! let filter = Filter::new()
//!     .field("name", "Apple")
//!     .sort_by("name", SortOrder::Asc)
//!     .page(0, 5);
//! ```

/// Sort direction for [`Filter::sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn suffix(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Parameters of a single `get_by_filter` call.
///
/// The default value has nothing set: every entity, every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub(crate) fields: Vec<(String, String)>,
    pub(crate) sort: Option<String>,
    pub(crate) limit: Option<String>,
    pub(crate) display: Vec<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `filter[key]=value` condition.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Add several conditions at once, e.g. from a map.
    pub fn fields<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Match any of the given values: `[a|b|c]`.
    pub fn any_of<V: AsRef<str>>(self, key: impl Into<String>, values: &[V]) -> Self {
        let joined: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
        self.field(key, format!("[{}]", joined.join("|")))
    }

    /// Match an inclusive interval: `[from,to]`.
    pub fn between(self, key: impl Into<String>, from: impl AsRef<str>, to: impl AsRef<str>) -> Self {
        self.field(key, format!("[{},{}]", from.as_ref(), to.as_ref()))
    }

    /// Raw sort directive such as `name_ASC`.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sort by a field in the given direction.
    pub fn sort_by(self, field: impl AsRef<str>, order: SortOrder) -> Self {
        let directive = format!("{}_{}", field.as_ref(), order.suffix());
        self.sort(directive)
    }

    /// Return at most `count` entities.
    pub fn limit(mut self, count: u32) -> Self {
        self.limit = Some(count.to_string());
        self
    }

    /// Return at most `count` entities starting at `offset` (`offset,count`).
    pub fn page(mut self, offset: u32, count: u32) -> Self {
        self.limit = Some(format!("{},{}", offset, count));
        self
    }

    /// Raw limit directive such as `5` or `9,5`.
    pub fn limit_raw(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Restrict the returned fields; empty means all fields.
    pub fn display<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.display = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn conditions(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn sort_directive(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn limit_directive(&self) -> Option<&str> {
        self.limit.as_deref()
    }

    pub fn display_fields(&self) -> &[String] {
        &self.display
    }
}
