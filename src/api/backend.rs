// Hosted backend: verse tables over the REST endpoint, auth over the token endpoint.
use crate::api::error::{ApiError, Result};
use crate::api::models::*;
use crate::api::HTTP_CLIENT;
use crate::config::AppConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const VERSES_TABLE: &str = "verses";
const WORDS_TABLE: &str = "words";
const COMMENTARIES_TABLE: &str = "commentaries";
const LISTEN_LOG_TABLE: &str = "listen_logs";

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    anon_key: String,
    session: Option<AuthSession>,
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "msg", alias = "error_description")]
    message: Option<String>,
}

/// PostgREST filters selecting one verse. Without a source the Gita row
/// sorts first, since `gita` < `noi` and legacy rows carry no source.
pub(crate) fn verse_filters(
    chapter: u32,
    verse: u32,
    source: Option<SourceText>,
) -> Vec<(&'static str, String)> {
    let mut filters = vec![
        ("chapter", format!("eq.{chapter}")),
        ("verse", format!("eq.{verse}")),
    ];
    match source {
        Some(source) => filters.push(("source_text", format!("eq.{}", source.as_str()))),
        None => filters.push(("order", "source_text.asc.nullsfirst".to_string())),
    }
    filters.push(("limit", "1".to_string()));
    filters
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            anon_key: config.backend_anon_key.clone(),
            session: None,
        }
    }

    pub fn with_session(mut self, session: Option<AuthSession>) -> Self {
        self.session = session;
        self
    }

    fn bearer(&self) -> &str {
        self.session
            .as_ref()
            .map(|session| session.access_token.as_str())
            .unwrap_or(self.anon_key.as_str())
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::NotConfigured);
        }
        Ok(())
    }

    pub(crate) fn rest_url(&self, table: &str, filters: &[(&str, String)]) -> String {
        let mut url = format!("{}/rest/v1/{}?select=*", self.base_url, table);
        for (key, value) in filters {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
        }
        url
    }

    async fn get_rows<T>(&self, url: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.ensure_configured()?;
        let response = HTTP_CLIENT
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(self.bearer())
            .send()
            .await?;
        let body = read_success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn fetch_verse(
        &self,
        chapter: u32,
        verse: u32,
        source: Option<SourceText>,
    ) -> Result<Verse> {
        let url = self.rest_url(VERSES_TABLE, &verse_filters(chapter, verse, source));
        let rows: Vec<Verse> = self.get_rows(&url).await?;
        rows.into_iter().next().ok_or_else(|| {
            let label = source.map(SourceText::as_str).unwrap_or("any source");
            ApiError::NotFound(format!("verse {chapter}.{verse} ({label})"))
        })
    }

    pub async fn fetch_verses(&self) -> Result<Vec<Verse>> {
        let url = self.rest_url(VERSES_TABLE, &[]);
        self.get_rows(&url).await
    }

    pub async fn fetch_words(&self, verse_id: &str) -> Result<Vec<Word>> {
        let url = self.rest_url(WORDS_TABLE, &[("verse_id", format!("eq.{verse_id}"))]);
        self.get_rows(&url).await
    }

    pub async fn fetch_commentaries(&self, verse_id: &str) -> Result<Vec<Commentary>> {
        let url = self.rest_url(
            COMMENTARIES_TABLE,
            &[("verse_id", format!("eq.{verse_id}"))],
        );
        self.get_rows(&url).await
    }

    pub async fn insert_listen_event(&self, event: &ListenEvent) -> Result<()> {
        self.ensure_configured()?;
        if self.session.is_none() {
            return Err(ApiError::Unauthenticated);
        }
        let url = format!("{}/rest/v1/{}", self.base_url, LISTEN_LOG_TABLE);
        let response = HTTP_CLIENT
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(self.bearer())
            .json(event)
            .send()
            .await?;
        read_success_body(response).await?;
        Ok(())
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession> {
        self.ensure_configured()?;
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let response = HTTP_CLIENT
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&PasswordGrant {
                email: email.trim(),
                password,
            })
            .send()
            .await?;
        let body = read_success_body(response).await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(AuthSession {
            user_id: token.user.id,
            email: token.user.email,
            access_token: token.access_token,
        })
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        return Ok(body);
    }
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| body.trim().to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BackendClient {
        let config = AppConfig {
            backend_url: "https://db.example.org/".to_string(),
            backend_anon_key: "anon".to_string(),
            ..AppConfig::default()
        };
        BackendClient::new(&config)
    }

    #[test]
    fn verse_query_with_source_filters_on_it() {
        let client = client();
        let url = client.rest_url(VERSES_TABLE, &verse_filters(1, 2, Some(SourceText::Noi)));
        assert_eq!(
            url,
            "https://db.example.org/rest/v1/verses?select=*&chapter=eq.1&verse=eq.2&source_text=eq.noi&limit=1"
        );
    }

    #[test]
    fn verse_query_without_source_prefers_gita() {
        let filters = verse_filters(18, 66, None);
        assert!(filters.contains(&("order", "source_text.asc.nullsfirst".to_string())));
        assert!(!filters.iter().any(|(key, _)| *key == "source_text"));
    }

    #[test]
    fn filter_values_are_url_encoded() {
        let url = client().rest_url(WORDS_TABLE, &[("verse_id", "eq.a b&c".to_string())]);
        assert!(url.ends_with("&verse_id=eq.a%20b%26c"));
    }

    #[test]
    fn bearer_prefers_session_token() {
        let anonymous = client();
        assert_eq!(anonymous.bearer(), "anon");
        let signed_in = client().with_session(Some(AuthSession {
            user_id: "u-1".to_string(),
            email: None,
            access_token: "token".to_string(),
        }));
        assert_eq!(signed_in.bearer(), "token");
    }

    #[tokio::test]
    async fn listen_insert_requires_a_session() {
        let result = client()
            .insert_listen_event(&ListenEvent {
                user_id: "u-1".to_string(),
                chapter: 18,
                verse: 66,
                track_type: "vibe".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[tokio::test]
    async fn unconfigured_backend_is_reported() {
        let client = BackendClient::new(&AppConfig::default());
        let result = client.fetch_verses().await;
        assert!(matches!(result, Err(ApiError::NotConfigured)));
    }
}
