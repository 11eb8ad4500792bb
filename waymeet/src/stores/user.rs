//! Session and profile container.
//!
//! Authentication is mocked: any email signs in (unknown addresses get the first
//! sample account) and passwords are never checked. What is real is the session
//! persistence: a `{"userId": ...}` record under [`SESSION_KEY`] and the
//! onboarding flag under [`ONBOARDING_KEY`].

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{StoreError, StoreResult, ValidationError, ValidationIssue};
use crate::id::user_id_at;
use crate::keys::{ONBOARDING_DONE, ONBOARDING_KEY, SESSION_KEY};
use crate::latency::{Latency, Operation};
use crate::mock;
use crate::patch::Patch;
use crate::storage::KeyValueStorage;
use crate::types::{AuthStatus, SocialProvider, User, UserPatch};
use crate::validators::{is_blank, is_valid_email};

/// Persisted under [`SESSION_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub user_id: String,
}

pub struct UserStore<S> {
    user: Option<User>,
    auth_status: AuthStatus,
    has_completed_onboarding: bool,
    storage: S,
    latency: Latency,
}

impl<S: KeyValueStorage> UserStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_latency(storage, Latency::default())
    }

    pub fn with_latency(storage: S, latency: Latency) -> Self {
        Self {
            user: None,
            auth_status: AuthStatus::Idle,
            has_completed_onboarding: false,
            storage,
            latency,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn auth_status(&self) -> AuthStatus {
        self.auth_status
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_status == AuthStatus::Authenticated
    }

    pub fn has_completed_onboarding(&self) -> bool {
        self.has_completed_onboarding
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub async fn login(&mut self, email: &str, _password: &str) -> StoreResult<&User> {
        self.auth_status = AuthStatus::Loading;
        self.latency.simulate(Operation::Login).await;

        let mut user = mock::find_user_by_email(email).unwrap_or_else(mock::first_user);
        user.email = email.to_string();
        self.sign_in(user).await
    }

    pub async fn signup(&mut self, email: &str, _password: &str, display_name: &str) -> StoreResult<&User> {
        self.auth_status = AuthStatus::Loading;
        self.latency.simulate(Operation::Signup).await;

        let mut issues = Vec::new();
        if !is_valid_email(email) {
            issues.push(ValidationIssue::new("email", "invalid_email", "email address is not valid"));
        }
        if is_blank(display_name) {
            issues.push(ValidationIssue::new("display_name", "required", "display name is required"));
        }
        if let Err(err) = ValidationError::new(issues).into_result() {
            self.auth_status = AuthStatus::Unauthenticated;
            return Err(err.into());
        }

        let now = Utc::now();
        let user = User {
            id: user_id_at(now),
            email: email.to_string(),
            display_name: display_name.trim().to_string(),
            avatar_url: String::new(),
            cover_photo_url: String::new(),
            home_city: String::new(),
            bio: String::new(),
            selected_categories: Vec::new(),
            followers_count: 0,
            following_count: 0,
            created_at: now,
            email_verified: false,
            gdpr_consent: true,
        };

        if let Err(err) = self.persist_session(&user.id).await {
            self.auth_status = AuthStatus::Unauthenticated;
            return Err(err);
        }
        log::debug!("signed up user {}", user.id);
        self.has_completed_onboarding = false;
        self.auth_status = AuthStatus::Authenticated;
        Ok(&*self.user.insert(user))
    }

    pub async fn social_login(&mut self, provider: SocialProvider) -> StoreResult<&User> {
        self.auth_status = AuthStatus::Loading;
        self.latency.simulate(Operation::SocialLogin).await;
        log::debug!("social login via {provider}");
        self.sign_in(mock::first_user()).await
    }

    async fn sign_in(&mut self, user: User) -> StoreResult<&User> {
        let onboarded = match self.persist_session(&user.id).await {
            Ok(()) => self.read_onboarding().await,
            Err(err) => Err(err),
        };
        let onboarded = match onboarded {
            Ok(flag) => flag,
            Err(err) => {
                self.auth_status = AuthStatus::Unauthenticated;
                return Err(err);
            }
        };

        log::debug!("signed in user {} (onboarded: {onboarded})", user.id);
        self.has_completed_onboarding = onboarded;
        self.auth_status = AuthStatus::Authenticated;
        Ok(&*self.user.insert(user))
    }

    pub async fn logout(&mut self) -> StoreResult<()> {
        let removed = self.storage.remove_item(SESSION_KEY).await;
        self.clear();
        log::debug!("logged out");
        removed
    }

    /// Mock: nothing is sent.
    pub async fn reset_password(&mut self, email: &str) -> StoreResult<()> {
        self.latency.simulate(Operation::ResetPassword).await;
        log::debug!("password reset requested for {email}");
        Ok(())
    }

    /// Applies the patch to the signed-in user; no-op when signed out.
    pub fn update_profile(&mut self, updates: UserPatch) {
        if let Some(user) = self.user.as_mut() {
            updates.apply(user);
        }
    }

    pub fn set_selected_categories(&mut self, categories: Vec<String>) {
        if let Some(user) = self.user.as_mut() {
            user.selected_categories = categories;
        }
    }

    pub async fn complete_onboarding(&mut self) -> StoreResult<()> {
        self.has_completed_onboarding = true;
        self.storage.set_item(ONBOARDING_KEY, ONBOARDING_DONE).await
    }

    /// Only forgets local state; there is no account to delete server-side.
    pub async fn delete_account(&mut self) -> StoreResult<()> {
        let session = self.storage.remove_item(SESSION_KEY).await;
        let onboarding = self.storage.remove_item(ONBOARDING_KEY).await;
        self.clear();
        log::debug!("account data cleared");
        session.and(onboarding)
    }

    /// Restores the session from storage. Storage or decoding failures are logged
    /// and leave the store unauthenticated.
    pub async fn check_session(&mut self) {
        self.auth_status = AuthStatus::Loading;
        match self.restore_session().await {
            Ok(Some(onboarded)) => {
                self.has_completed_onboarding = onboarded;
                self.auth_status = AuthStatus::Authenticated;
            }
            Ok(None) => {
                self.auth_status = AuthStatus::Unauthenticated;
            }
            Err(err) => {
                log::warn!("session check failed, treating as signed out: {err}");
                self.auth_status = AuthStatus::Unauthenticated;
            }
        }
    }

    async fn restore_session(&mut self) -> StoreResult<Option<bool>> {
        let Some(raw) = self.storage.get_item(SESSION_KEY).await? else {
            return Ok(None);
        };
        let session: StoredSession = serde_json::from_str(&raw)?;
        let onboarded = self.read_onboarding().await?;

        let keep_current = self.user.as_ref().is_some_and(|user| user.id == session.user_id);
        if !keep_current {
            self.user = Some(mock::user_or_first(&session.user_id));
        }
        Ok(Some(onboarded))
    }

    pub async fn resend_verification_email(&mut self) -> StoreResult<()> {
        self.latency.simulate(Operation::ResendVerification).await;
        match self.user.as_mut() {
            Some(user) => {
                user.email_verified = true;
                Ok(())
            }
            None => Err(StoreError::NotAuthenticated),
        }
    }

    async fn persist_session(&mut self, user_id: &str) -> StoreResult<()> {
        let session = StoredSession {
            user_id: user_id.to_string(),
        };
        let json = serde_json::to_string(&session)?;
        self.storage.set_item(SESSION_KEY, &json).await
    }

    async fn read_onboarding(&mut self) -> StoreResult<bool> {
        Ok(self.storage.get_item(ONBOARDING_KEY).await?.as_deref() == Some(ONBOARDING_DONE))
    }

    fn clear(&mut self) {
        self.user = None;
        self.auth_status = AuthStatus::Unauthenticated;
        self.has_completed_onboarding = false;
    }
}
