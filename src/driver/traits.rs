use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

/// Element selector for page elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Select by CSS selector
    Css(String),
    /// Select by element id
    Id(String),
    /// Select by tag name
    Tag(String),
}

impl Selector {
    pub fn css(s: impl Into<String>) -> Self {
        Selector::Css(s.into())
    }

    pub fn id(s: impl Into<String>) -> Self {
        Selector::Id(s.into())
    }

    pub fn tag(s: impl Into<String>) -> Self {
        Selector::Tag(s.into())
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Css(s) => write!(f, "css '{}'", s),
            Selector::Id(s) => write!(f, "id '{}'", s),
            Selector::Tag(s) => write!(f, "tag '{}'", s),
        }
    }
}

/// Errors raised at the driver boundary
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("no element matching {0}")]
    NotFound(Selector),
    #[error("element index {index} out of range for {selector} ({found} found)")]
    IndexOutOfRange {
        selector: Selector,
        index: usize,
        found: usize,
    },
}

/// Browser-agnostic page driver interface
///
/// Abstracts the automation session so test procedures can be written
/// against selectors and exercised with a scripted driver in unit tests.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to a URL
    async fn goto(&self, url: &str) -> Result<()>;

    /// Get the text content of the first matching element
    ///
    /// Fails with [`DriverError::NotFound`] when nothing matches.
    async fn text(&self, selector: &Selector) -> Result<String>;

    /// Get the text content of every matching element
    ///
    /// Returns an empty vector when nothing matches.
    async fn texts(&self, selector: &Selector) -> Result<Vec<String>>;

    /// Count matching elements
    async fn count(&self, selector: &Selector) -> Result<usize>;

    /// Check whether at least one element matches
    async fn exists(&self, selector: &Selector) -> Result<bool> {
        Ok(self.count(selector).await? > 0)
    }

    /// Click the index-th matching element (0-based)
    async fn click(&self, selector: &Selector, index: usize) -> Result<()>;

    /// Clear the first matching input and type text into it
    async fn type_text(&self, selector: &Selector, text: &str) -> Result<()>;

    /// Read an attribute of the first matching element
    async fn attr(&self, selector: &Selector, name: &str) -> Result<Option<String>>;

    /// Count matches of `inner` inside the index-th match of `scope`
    async fn count_within(
        &self,
        scope: &Selector,
        index: usize,
        inner: &Selector,
    ) -> Result<usize>;

    /// Release the browser session
    async fn quit(&self) -> Result<()>;
}
