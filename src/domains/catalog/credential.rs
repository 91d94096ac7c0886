//! Shared API key storage.
//!
//! The credential is the only state shared between tool invocations. It is
//! held behind an async `RwLock` and always replaced as a whole value, so a
//! reader sees either the old key or the new one, never a mix.
//!
//! Requests take a snapshot when they are issued: a `configure_server` call
//! that lands while a request is in flight affects the next request only.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Swappable API key shared by every clone of a client.
#[derive(Clone, Default)]
pub struct Credential {
    inner: Arc<RwLock<Option<String>>>,
}

impl Credential {
    /// Create a credential cell. Empty strings count as "not configured".
    pub fn new(token: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(token.filter(|t| !t.is_empty()))),
        }
    }

    /// Copy of the current key, if any.
    pub async fn snapshot(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    /// Replace the current key.
    pub async fn replace(&self, token: impl Into<String>) {
        let token = token.into();
        *self.inner.write().await = Some(token);
    }

    pub async fn is_configured(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_token_is_unconfigured() {
        let credential = Credential::new(Some(String::new()));
        assert!(!credential.is_configured().await);
        assert_eq!(credential.snapshot().await, None);
    }

    #[tokio::test]
    async fn test_replace_is_visible_to_clones() {
        let credential = Credential::new(Some("old".to_string()));
        let shared = credential.clone();

        shared.replace("new").await;

        assert_eq!(credential.snapshot().await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_snapshot_is_not_affected_by_later_replace() {
        let credential = Credential::new(Some("issued".to_string()));
        let captured = credential.snapshot().await;

        credential.replace("replaced").await;

        assert_eq!(captured.as_deref(), Some("issued"));
    }

    #[tokio::test]
    async fn test_concurrent_replace_never_tears() {
        let credential = Credential::default();
        let values = ["alpha-key", "beta-key-longer", "gamma"];

        let mut handles = Vec::new();
        for value in values {
            let writer = credential.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    writer.replace(value).await;
                }
            }));
            let reader = credential.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    if let Some(seen) = reader.snapshot().await {
                        assert!(values.contains(&seen.as_str()));
                    }
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new(Some("super_secret_key".to_string()));
        let debug_str = format!("{:?}", credential);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
