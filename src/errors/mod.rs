use anyhow::Context as _;

/// Context for failed requests
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Context for payloads that did not match the expected shape
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Context for fallback data lookups
pub fn mock_context(file: &str) -> String {
    format!("Failed to load fallback data: {}", file)
}

pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
