use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{CorrectError, CorrectionModel, ProviderMetadata};

const CHECK_PROMPT: &str = "Say 'ok'";

#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.95,
            top_k: 64,
        }
    }
}

#[derive(Clone)]
pub struct GeminiCorrector {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    sampling: SamplingParams,
}

impl GeminiCorrector {
    pub fn new(
        api_key: String,
        api_url: String,
        sampling: SamplingParams,
        timeout: Option<Duration>,
    ) -> Result<Self, CorrectError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key,
            api_url,
            sampling,
        })
    }

    async fn generate(&self, prompt: String) -> Result<String, CorrectError> {
        if self.api_key.is_empty() {
            return Err(CorrectError::Authentication);
        }

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: self.sampling.into(),
        };

        let url = format!("{}?key={}", self.api_url, self.api_key);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        match status.as_u16() {
            429 => return Err(CorrectError::RateLimited),
            401 | 403 => return Err(CorrectError::Authentication),
            _ => {}
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GenerateResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .map(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            tracing::error!("generation request failed: status={status}, message={message}");
            return Err(CorrectError::Api(message));
        }

        let parsed: GenerateResponse = response.json().await?;
        if let Some(error) = parsed.error {
            return Err(CorrectError::Api(error.message));
        }

        Ok(extract_text(parsed))
    }
}

#[async_trait]
impl CorrectionModel for GeminiCorrector {
    async fn correct(&self, text: &str) -> Result<String, CorrectError> {
        tracing::debug!("dispatching correction: {} chars", text.chars().count());
        let raw = self.generate(build_prompt(text)).await?;
        Ok(raw.trim().to_string())
    }

    async fn check(&self) -> Result<(), CorrectError> {
        self.generate(CHECK_PROMPT.to_string()).await.map(|_| ())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            requires_api_key: true,
        }
    }
}

/// Fixed instruction prompt with the user text embedded. The marker
/// convention (`**term**`) is what the classifier downstream strips.
pub fn build_prompt(text: &str) -> String {
    format!(
        "\
You are a real-time text correction and translation AI.
For the following text:
1. If it's in English, correct any grammatical errors or misspellings.
2. If it's in another language (like Roman Urdu, Hindi, etc.), translate it to proper English.
3. Keep the same tone and intent of the original text.
4. Preserve any slang or colloquialisms when appropriate to make translations sound natural and human-like.
5. ONLY output the corrected/translated text with no additional commentary.
6. If there are specific names, technical terms, or words you cannot confidently translate, mark them with double asterisks like **untranslatable_word**.
7. Focus only on translations and corrections. Do not respond to requests for creative writing, stories, or anything other than translation/correction.
8. Make translations conversational and natural-sounding rather than formal or robotic.

Text: {text}
"
    )
}

/// First candidate's text, or empty if the response shape is unexpected.
pub(crate) fn extract_text(parsed: GenerateResponse) -> String {
    parsed
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .and_then(|p| p.into_iter().next())
        .and_then(|p| p.text)
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    pub(crate) contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub(crate) generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub(crate) parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Part {
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub(crate) temperature: f32,
    pub(crate) top_p: f32,
    pub(crate) top_k: u32,
}

impl From<SamplingParams> for GenerationConfig {
    fn from(params: SamplingParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub(crate) candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub(crate) error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub(crate) content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub(crate) parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    #[serde(default)]
    pub(crate) text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub(crate) message: String,
}
