//! Host configuration assembled by the site entry layer.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional host endpoints. Missing values select the local demo adapters
/// instead of network-backed ones.
pub struct SiteHostConfig {
    /// HTTP endpoint that accepts contact-form submissions.
    pub delivery_endpoint: Option<String>,
    /// API key for the message-generation endpoint.
    pub draft_api_key: Option<String>,
}

impl SiteHostConfig {
    /// Returns whether live contact delivery is configured.
    pub fn has_delivery(&self) -> bool {
        self.delivery_endpoint.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Returns whether live message drafting is configured.
    pub fn has_draft(&self) -> bool {
        self.draft_api_key.as_deref().is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_do_not_count_as_configured() {
        let config = SiteHostConfig {
            delivery_endpoint: Some(String::new()),
            draft_api_key: None,
        };
        assert!(!config.has_delivery());
        assert!(!config.has_draft());
    }
}
