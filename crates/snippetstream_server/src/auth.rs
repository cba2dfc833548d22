//! API-key authentication against configured accounts.

use crate::AccountConfig;
use async_trait::async_trait;
use snippetstream_core::CallerIdentity;
use snippetstream_error::{AuthorizationError, AuthorizationErrorKind};
use snippetstream_interface::AuthProvider;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Resolves bearer keys to accounts from `[[accounts]]`.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyAuthProvider {
    accounts: HashMap<String, AccountConfig>,
}

impl ApiKeyAuthProvider {
    /// Index accounts by key. Later duplicates win.
    pub fn new(accounts: impl IntoIterator<Item = AccountConfig>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.api_key().clone(), account))
            .collect();
        Self { accounts }
    }

    /// Number of known keys.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no account is configured.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AuthProvider for ApiKeyAuthProvider {
    async fn authenticate(
        &self,
        credential: Option<&str>,
    ) -> Result<CallerIdentity, AuthorizationError> {
        let key = credential
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AuthorizationError::new(AuthorizationErrorKind::MissingCredentials))?;

        let account = self.accounts.get(key).ok_or_else(|| {
            warn!("Rejected unknown API key");
            AuthorizationError::new(AuthorizationErrorKind::UnknownCredentials)
        })?;

        if !*account.active() {
            warn!(user_id = %account.user_id(), "Rejected inactive account");
            return Err(AuthorizationError::new(AuthorizationErrorKind::InactiveAccount));
        }

        debug!(user_id = %account.user_id(), tier = %account.tier(), "Authenticated caller");
        Ok(CallerIdentity::new(account.user_id().as_str(), account.tier().as_str()))
    }
}
