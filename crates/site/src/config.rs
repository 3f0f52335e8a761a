//! Compile-time host configuration for the deployed site.

use site_host::SiteHostConfig;

fn non_empty(value: Option<&'static str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Builds the host configuration from build-environment variables. Absent
/// values select the local demo adapters.
pub fn site_host_config() -> SiteHostConfig {
    SiteHostConfig {
        delivery_endpoint: non_empty(option_env!("PORTFOLIO_CONTACT_ENDPOINT")),
        draft_api_key: non_empty(option_env!("PORTFOLIO_GEMINI_API_KEY")),
    }
}
