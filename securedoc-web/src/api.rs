//! API client for the remote account service.
//!
//! Every request is normalized into the shared [`ResponseEnvelope`] shape,
//! success or failure, so UI code never branches on transport-level
//! differences. This module is also the single place where cross-cutting
//! session invalidation happens: a 401 envelope carrying the well-known
//! "not logged in" message forces the persisted session flag to `false`,
//! independent of which screen issued the call.

use crate::session::{BrowserSession, SessionStore};
use chrono::{DateTime, Duration, Utc};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiError, EmailAddress, LoginRequest, QrCodeRequest, RegisterRequest, ResponseEnvelope,
    RoleRequest, UpdateNewPassword, UpdatePassword, UpdateUserRequest, User, UserData,
    UserListData,
};
use std::sync::{Arc, Mutex};

const DEFAULT_BASE_URL: &str = "/user";

/// Freshness window for the cached profile read.
const PROFILE_TTL_SECONDS: i64 = 120;

const UNAUTHENTICATED_STATUS: &str = "UNAUTHORIZED";
const UNAUTHENTICATED_MESSAGE: &str = "You are not logged in";

thread_local! {
    static SHARED_CLIENT: OnceCell<SecureDocClient> = OnceCell::new();
}

/// Time-boxed cache for the authenticated user record.
///
/// Concurrent mounts (for example two role-gated components) are served from
/// here instead of issuing duplicate profile reads. Freshness is decided
/// against an injected `now` so the policy is testable.
#[derive(Debug, Default)]
struct ProfileCache {
    entry: Option<(User, DateTime<Utc>)>,
}

impl ProfileCache {
    fn fresh(&self, now: DateTime<Utc>) -> Option<User> {
        self.entry.as_ref().and_then(|(user, stored_at)| {
            (now - *stored_at < Duration::seconds(PROFILE_TTL_SECONDS)).then(|| user.clone())
        })
    }

    fn store(&mut self, user: User, now: DateTime<Utc>) {
        self.entry = Some((user, now));
    }

    fn invalidate(&mut self) {
        self.entry = None;
    }
}

/// API client for SecureDoc account operations.
#[derive(Clone, Debug)]
pub struct SecureDocClient {
    base_url: String,
    client: Client,
    session: Arc<dyn SessionStore>,
    profile_cache: Arc<Mutex<ProfileCache>>,
}

impl SecureDocClient {
    /// Create a client against the provided base URL using browser storage
    /// for the session flag.
    pub fn new(base_url: &str) -> Self {
        Self::with_session(base_url, Arc::new(BrowserSession))
    }

    /// Create a client with an explicit session store.
    pub fn with_session(base_url: &str, session: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
            profile_cache: Arc::new(Mutex::new(ProfileCache::default())),
        }
    }

    /// The per-page shared client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    /// Read access to the persisted session flag.
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Single normalization step shared by every operation.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ResponseEnvelope<T>, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();

        if status.is_success() {
            response
                .json::<ResponseEnvelope<T>>()
                .await
                .map_err(|err| ApiError::Transport(err.to_string()))
        } else {
            let code = status.as_u16();
            let envelope = response
                .json::<ResponseEnvelope<()>>()
                .await
                .unwrap_or_else(|_| ResponseEnvelope::fallback(code));
            self.note_unauthenticated(&envelope);
            Err(ApiError::Api(envelope))
        }
    }

    /// Forces the session flag to `false` when the service reports the
    /// unauthenticated condition. The flag write happens here so it does not
    /// depend on which component issued the failing request.
    fn note_unauthenticated(&self, envelope: &ResponseEnvelope<()>) {
        if envelope.code == 401
            && envelope.status == UNAUTHENTICATED_STATUS
            && envelope.message == UNAUTHENTICATED_MESSAGE
        {
            self.session.set_logged_in(false);
        }
    }

    /// Runs a mutation and invalidates the cached profile on success, so the
    /// invalidation is visible before the caller renders or redirects.
    async fn mutate<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ResponseEnvelope<T>, ApiError> {
        let envelope = self.execute(request).await?;
        self.invalidate_user_cache();
        Ok(envelope)
    }

    fn cached_user(&self, now: DateTime<Utc>) -> Option<User> {
        self.profile_cache
            .lock()
            .ok()
            .and_then(|cache| cache.fresh(now))
    }

    fn store_user(&self, user: User, now: DateTime<Utc>) {
        if let Ok(mut cache) = self.profile_cache.lock() {
            cache.store(user, now);
        }
    }

    /// Drop the cached profile so the next read hits the network.
    pub fn invalidate_user_cache(&self) {
        if let Ok(mut cache) = self.profile_cache.lock() {
            cache.invalidate();
        }
    }

    /// Current user via `GET /profile`, served from the cache within its
    /// freshness window.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let now = Utc::now();
        if let Some(user) = self.cached_user(now) {
            return Ok(user);
        }

        let envelope: ResponseEnvelope<UserData> =
            self.execute(self.client.get(self.api_url("profile"))).await?;
        let user = envelope
            .data
            .map(|data| data.user)
            .ok_or_else(|| ApiError::Transport("profile response missing payload".to_string()))?;
        self.store_user(user.clone(), now);
        Ok(user)
    }

    /// `POST /login` — primary credential check.
    pub async fn login(
        &self,
        payload: &LoginRequest,
    ) -> Result<ResponseEnvelope<UserData>, ApiError> {
        self.execute(self.client.post(self.api_url("login")).json(payload))
            .await
    }

    /// `POST /register`.
    pub async fn register(
        &self,
        payload: &RegisterRequest,
    ) -> Result<ResponseEnvelope<()>, ApiError> {
        self.execute(self.client.post(self.api_url("register")).json(payload))
            .await
    }

    /// `GET /verify/account?key=` — account activation link.
    pub async fn verify_account(&self, key: &str) -> Result<ResponseEnvelope<()>, ApiError> {
        self.execute(
            self.client
                .get(self.api_url("verify/account"))
                .query(&[("key", key)]),
        )
        .await
    }

    /// `GET /verify/password?key=` — password-reset link check.
    pub async fn verify_password(
        &self,
        key: &str,
    ) -> Result<ResponseEnvelope<UserData>, ApiError> {
        self.mutate(
            self.client
                .get(self.api_url("verify/password"))
                .query(&[("key", key)]),
        )
        .await
    }

    /// `POST /verify/qrcode` — second-factor code check.
    pub async fn verify_qr_code(
        &self,
        payload: &QrCodeRequest,
    ) -> Result<ResponseEnvelope<UserData>, ApiError> {
        self.mutate(self.client.post(self.api_url("verify/qrcode")).json(payload))
            .await
    }

    /// `POST /resetpassword` — request a reset email.
    pub async fn reset_password(
        &self,
        payload: &EmailAddress,
    ) -> Result<ResponseEnvelope<()>, ApiError> {
        self.mutate(self.client.post(self.api_url("resetpassword")).json(payload))
            .await
    }

    /// `POST /resetpassword/reset` — complete a verified reset.
    pub async fn do_reset_password(
        &self,
        payload: &UpdateNewPassword,
    ) -> Result<ResponseEnvelope<()>, ApiError> {
        self.mutate(
            self.client
                .post(self.api_url("resetpassword/reset"))
                .json(payload),
        )
        .await
    }

    /// `PATCH /photo` — multipart profile photo upload.
    pub async fn update_photo(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<ResponseEnvelope<String>, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);
        self.mutate(self.client.patch(self.api_url("photo")).multipart(form))
            .await
    }

    /// `PATCH /update` — editable profile fields.
    pub async fn update_user(
        &self,
        payload: &UpdateUserRequest,
    ) -> Result<ResponseEnvelope<UserData>, ApiError> {
        self.mutate(self.client.patch(self.api_url("update")).json(payload))
            .await
    }

    /// `PATCH /updatepassword`.
    pub async fn update_password(
        &self,
        payload: &UpdatePassword,
    ) -> Result<ResponseEnvelope<()>, ApiError> {
        self.mutate(self.client.patch(self.api_url("updatepassword")).json(payload))
            .await
    }

    /// `PATCH /toggleaccountexpired`.
    pub async fn toggle_account_expired(&self) -> Result<ResponseEnvelope<()>, ApiError> {
        self.mutate(self.client.patch(self.api_url("toggleaccountexpired")))
            .await
    }

    /// `PATCH /toggleaccountlocked`.
    pub async fn toggle_account_locked(&self) -> Result<ResponseEnvelope<()>, ApiError> {
        self.mutate(self.client.patch(self.api_url("toggleaccountlocked")))
            .await
    }

    /// `PATCH /toggleaccountenabled`.
    pub async fn toggle_account_enabled(&self) -> Result<ResponseEnvelope<()>, ApiError> {
        self.mutate(self.client.patch(self.api_url("toggleaccountenabled")))
            .await
    }

    /// `PATCH /togglecredentialsexpired`.
    pub async fn toggle_credentials_expired(&self) -> Result<ResponseEnvelope<()>, ApiError> {
        self.mutate(self.client.patch(self.api_url("togglecredentialsexpired")))
            .await
    }

    /// `PATCH /updaterole`.
    pub async fn update_role(
        &self,
        payload: &RoleRequest,
    ) -> Result<ResponseEnvelope<()>, ApiError> {
        self.mutate(self.client.patch(self.api_url("updaterole")).json(payload))
            .await
    }

    /// `PATCH /mfa/setup` — enable the second factor.
    pub async fn enable_mfa(&self) -> Result<ResponseEnvelope<UserData>, ApiError> {
        self.mutate(self.client.patch(self.api_url("mfa/setup"))).await
    }

    /// `PATCH /mfa/cancel` — disable the second factor.
    pub async fn disable_mfa(&self) -> Result<ResponseEnvelope<UserData>, ApiError> {
        self.mutate(self.client.patch(self.api_url("mfa/cancel"))).await
    }

    /// `GET /list` — all users, for the role-gated user screen.
    pub async fn get_users(&self) -> Result<ResponseEnvelope<UserListData>, ApiError> {
        self.execute(self.client.get(self.api_url("list"))).await
    }

    /// `POST /logout`. On success the session flag is removed entirely (not
    /// merely set to `false`) and the cached profile is dropped.
    pub async fn logout(&self) -> Result<ResponseEnvelope<()>, ApiError> {
        let envelope = self.execute(self.client.post(self.api_url("logout"))).await?;
        self.session.clear();
        self.invalidate_user_cache();
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;

    fn sample_user() -> User {
        serde_json::from_str(
            r#"{
                "id": 1,
                "createdBy": 1,
                "updatedBy": 1,
                "userId": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "createdAt": "2024-01-01T00:00:00",
                "updatedAt": "2024-01-01T00:00:00",
                "role": "USER",
                "authorities": "document:read",
                "accountNonExpired": true,
                "accountNonLocked": true,
                "credentialsNonExpired": true,
                "enabled": true,
                "mfa": false
            }"#,
        )
        .unwrap()
    }

    fn test_client() -> (SecureDocClient, Arc<MemorySession>) {
        let session = Arc::new(MemorySession::default());
        let client = SecureDocClient::with_session("http://localhost:8085/user/", session.clone());
        (client, session)
    }

    #[test]
    fn api_url_joins_without_double_slashes() {
        let (client, _) = test_client();
        assert_eq!(
            client.api_url("/profile"),
            "http://localhost:8085/user/profile"
        );
        assert_eq!(
            client.api_url("resetpassword/reset"),
            "http://localhost:8085/user/resetpassword/reset"
        );
    }

    #[test]
    fn profile_cache_serves_within_window() {
        let mut cache = ProfileCache::default();
        let stored_at = Utc::now();
        cache.store(sample_user(), stored_at);

        let just_before_expiry = stored_at + Duration::seconds(PROFILE_TTL_SECONDS - 1);
        assert!(cache.fresh(just_before_expiry).is_some());

        let at_expiry = stored_at + Duration::seconds(PROFILE_TTL_SECONDS);
        assert!(cache.fresh(at_expiry).is_none());
    }

    #[test]
    fn profile_cache_empty_after_invalidate() {
        let mut cache = ProfileCache::default();
        let now = Utc::now();
        cache.store(sample_user(), now);
        cache.invalidate();
        assert!(cache.fresh(now).is_none());
    }

    #[test]
    fn unauthenticated_envelope_forces_flag_false() {
        let (client, session) = test_client();
        session.set_logged_in(true);

        client.note_unauthenticated(&ResponseEnvelope {
            code: 401,
            status: "UNAUTHORIZED".to_string(),
            message: "You are not logged in".to_string(),
            data: None,
        });
        assert!(!session.is_logged_in());
    }

    #[test]
    fn other_errors_leave_flag_untouched() {
        let (client, session) = test_client();
        session.set_logged_in(true);

        // 401 with a different message, e.g. bad credentials at login.
        client.note_unauthenticated(&ResponseEnvelope {
            code: 401,
            status: "UNAUTHORIZED".to_string(),
            message: "Invalid credentials".to_string(),
            data: None,
        });
        assert!(session.is_logged_in());

        client.note_unauthenticated(&ResponseEnvelope {
            code: 500,
            status: "INTERNAL_SERVER_ERROR".to_string(),
            message: "You are not logged in".to_string(),
            data: None,
        });
        assert!(session.is_logged_in());
    }

    #[test]
    fn invalidate_user_cache_drops_entry() {
        let (client, _) = test_client();
        client.store_user(sample_user(), Utc::now());
        assert!(client.cached_user(Utc::now()).is_some());

        client.invalidate_user_cache();
        assert!(client.cached_user(Utc::now()).is_none());
    }
}
