use crate::dom::parser::parse_html;
use crate::dom::Document;
use crate::net::fetch::fetch_url;

/// Result of loading and processing a web page
pub struct PageResult {
    pub document: Document,
    pub fetch_status: u16,
}

/// Error during page loading
#[derive(Debug)]
pub struct PageError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// The page pipeline: Fetch → Parse.
///
/// The schema itself is built by the shell from the returned document, the
/// same way any other view of the page would be.
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Load a URL through the full pipeline
    pub fn load_page(&self, url: &str) -> Result<PageResult, PageError> {
        let fetch_result = fetch_url(url).map_err(|e| PageError {
            message: e.message,
            phase: "fetch",
        })?;

        log::debug!(
            "fetched {} ({} bytes, status {})",
            fetch_result.url,
            fetch_result.html.len(),
            fetch_result.status
        );

        self.process_html(&fetch_result.html, &fetch_result.url, fetch_result.status)
    }

    /// Process raw HTML through the pipeline (for testing)
    pub fn process_html(
        &self,
        html: &str,
        url: &str,
        status: u16,
    ) -> Result<PageResult, PageError> {
        let document = parse_html(html, url);

        if document.body().is_none() {
            return Err(PageError {
                message: format!("no body element in {}", url),
                phase: "parse",
            });
        }

        Ok(PageResult {
            document,
            fetch_status: status,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_simple_page() {
        let engine = Engine::new();
        let page = engine
            .process_html(
                "<html><head><title>T</title></head><body><p>hi</p></body></html>",
                "https://example.com",
                200,
            )
            .unwrap();
        assert_eq!(page.fetch_status, 200);
        assert_eq!(page.document.title, "T");
        assert!(page.document.body().is_some());
    }

    #[test]
    fn error_carries_phase() {
        let err = PageError {
            message: "boom".into(),
            phase: "fetch",
        };
        assert_eq!(err.to_string(), "[fetch] boom");
    }
}
