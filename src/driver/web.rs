//! Page driver backed by the WebDriver protocol
//!
//! Connects to a chromedriver endpoint via fantoccini and drives a headless
//! Chrome session with a fixed window size.

use anyhow::{Context, Result};
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;

use crate::driver::traits::{DriverError, PageDriver, Selector};

/// WebDriver session configuration
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    /// chromedriver endpoint to connect to
    pub webdriver_url: String,
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            window_width: 1366,
            window_height: 768,
        }
    }
}

/// Live browser session driven over the WebDriver protocol
pub struct WebDriver {
    client: Client,
}

impl WebDriver {
    /// Connect to the WebDriver endpoint and start a browser session
    pub async fn new(config: &WebDriverConfig) -> Result<Self> {
        let mut args = vec![
            "--no-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
        ];
        if config.headless {
            args.push("--headless".to_string());
            args.push("--disable-gpu".to_string());
        }

        let mut caps = serde_json::Map::new();
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));

        log::debug!("Connecting to WebDriver at {}", config.webdriver_url);

        let client = ClientBuilder::rustls()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await
            .with_context(|| connect_hint(&config.webdriver_url))?;

        // Window size is best-effort; the checks don't depend on it
        if let Err(e) = client
            .set_window_size(config.window_width, config.window_height)
            .await
        {
            log::warn!("Could not set window size: {}", e);
        }

        Ok(Self { client })
    }

    async fn find_all(&self, selector: &Selector) -> Result<Vec<Element>> {
        Ok(self.client.find_all(locator(selector)).await?)
    }

    async fn find_one(&self, selector: &Selector) -> Result<Element> {
        self.find_all(selector)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DriverError::NotFound(selector.clone()).into())
    }

    async fn find_nth(&self, selector: &Selector, index: usize) -> Result<Element> {
        let mut elements = self.find_all(selector).await?;
        if elements.is_empty() {
            return Err(DriverError::NotFound(selector.clone()).into());
        }
        if index >= elements.len() {
            return Err(DriverError::IndexOutOfRange {
                selector: selector.clone(),
                index,
                found: elements.len(),
            }
            .into());
        }
        Ok(elements.swap_remove(index))
    }
}

#[async_trait]
impl PageDriver for WebDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        log::debug!("Navigating to {}", url);
        self.client
            .goto(url)
            .await
            .with_context(|| format!("failed to open {}", url))
    }

    async fn text(&self, selector: &Selector) -> Result<String> {
        let element = self.find_one(selector).await?;
        Ok(element.text().await?)
    }

    async fn texts(&self, selector: &Selector) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for element in self.find_all(selector).await? {
            out.push(element.text().await?);
        }
        Ok(out)
    }

    async fn count(&self, selector: &Selector) -> Result<usize> {
        Ok(self.find_all(selector).await?.len())
    }

    async fn click(&self, selector: &Selector, index: usize) -> Result<()> {
        let element = self.find_nth(selector, index).await?;
        Ok(element.click().await?)
    }

    async fn type_text(&self, selector: &Selector, text: &str) -> Result<()> {
        let element = self.find_one(selector).await?;
        element.clear().await?;
        Ok(element.send_keys(text).await?)
    }

    async fn attr(&self, selector: &Selector, name: &str) -> Result<Option<String>> {
        let element = self.find_one(selector).await?;
        Ok(element.attr(name).await?)
    }

    async fn count_within(
        &self,
        scope: &Selector,
        index: usize,
        inner: &Selector,
    ) -> Result<usize> {
        let element = self.find_nth(scope, index).await?;
        Ok(element.find_all(locator(inner)).await?.len())
    }

    async fn quit(&self) -> Result<()> {
        self.client
            .clone()
            .close()
            .await
            .context("failed to close browser session")
    }
}

fn locator(selector: &Selector) -> Locator<'_> {
    match selector {
        Selector::Css(s) => Locator::Css(s),
        Selector::Id(s) => Locator::Id(s),
        // A bare tag name is a valid CSS selector
        Selector::Tag(s) => Locator::Css(s),
    }
}

fn connect_hint(url: &str) -> String {
    match which::which("chromedriver") {
        Ok(path) => format!(
            "cannot connect to WebDriver at {} (chromedriver found at {}, is it running? try: chromedriver --port=9515)",
            url,
            path.display()
        ),
        Err(_) => format!(
            "cannot connect to WebDriver at {} and chromedriver is not on PATH",
            url
        ),
    }
}
