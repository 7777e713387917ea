use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::NetworkError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
}

#[async_trait::async_trait]
pub trait UserSource {
    async fn get_users(&self, url: &str) -> Result<Vec<User>, NetworkError>;
}

/// Serves a fixed response body instead of talking to a server.
#[derive(Debug, Clone)]
pub struct StaticUserSource {
    body: String,
    status_code: u16,
}

impl StaticUserSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status_code: 200,
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }
}

fn check_url(url: &str) -> Result<(), NetworkError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(NetworkError::BadUrl(url.to_string())),
    }
}

#[async_trait::async_trait]
impl UserSource for StaticUserSource {
    async fn get_users(&self, url: &str) -> Result<Vec<User>, NetworkError> {
        check_url(url)?;

        match self.status_code {
            500..=u16::MAX => Err(NetworkError::InternalServerError {
                status_code: self.status_code,
                message: self.body.clone(),
            }),
            400..=499 => Err(NetworkError::Network {
                message: format!("request rejected with status {}", self.status_code),
            }),
            _ => {
                debug!("Decoding {} byte body from {}", self.body.len(), url);
                Ok(serde_json::from_str(&self.body)?)
            }
        }
    }
}

/// Fetches users, logging any failure and falling back to an empty list.
pub async fn load_users<S>(source: &S, url: &str) -> Vec<User>
where
    S: UserSource + Sync + ?Sized,
{
    match source.get_users(url).await {
        Ok(users) => users,
        Err(err) => {
            warn!("{} ({})", err.user_message(), err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[{"name":"John","age":30},{"name":"Mary","age":27}]"#;

    #[tokio::test]
    async fn test_get_users_decodes_body() {
        let source = StaticUserSource::new(BODY);
        let users = source.get_users("https://example.com").await.unwrap();
        assert_eq!(
            users,
            vec![
                User {
                    name: "John".into(),
                    age: 30
                },
                User {
                    name: "Mary".into(),
                    age: 27
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_bad_url_is_rejected() {
        let source = StaticUserSource::new(BODY);
        for url in ["", "example.com", "ftp://example.com", "https://"] {
            let err = source.get_users(url).await.unwrap_err();
            assert!(matches!(err, NetworkError::BadUrl(_)), "{url}");
        }
    }

    #[tokio::test]
    async fn test_status_codes_map_to_errors() {
        let source = StaticUserSource::new("boom").with_status(500);
        let err = source.get_users("http://example.com").await.unwrap_err();
        assert_eq!(err.user_message(), "Error; 500 - boom");

        let source = StaticUserSource::new(BODY).with_status(404);
        let err = source.get_users("http://example.com").await.unwrap_err();
        assert!(matches!(err, NetworkError::Network { .. }));
    }

    #[tokio::test]
    async fn test_load_users_logs_and_continues() {
        let _ = tracing_subscriber::fmt::try_init();

        let source = StaticUserSource::new("{not json");
        assert!(load_users(&source, "https://example.com").await.is_empty());

        let source = StaticUserSource::new(BODY);
        assert_eq!(load_users(&source, "https://example.com").await.len(), 2);
    }
}
