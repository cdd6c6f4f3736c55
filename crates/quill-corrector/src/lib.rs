pub mod gemini;

#[cfg(test)]
mod tests;

/// Correction provider interface
#[async_trait::async_trait]
pub trait CorrectionModel: Send + Sync {
    /// Correct grammar and translate to English, returning the raw model
    /// text (flagged terms still wrapped in `**` markers)
    async fn correct(&self, text: &str) -> Result<String, CorrectError>;

    /// Cheap connectivity and credential probe
    async fn check(&self) -> Result<(), CorrectError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CorrectError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication error")]
    Authentication,
}
