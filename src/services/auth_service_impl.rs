//! `SeaORM` implementation of the `AuthService` trait.

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::models::user::NewUser;
use crate::services::auth_service::{AuthError, AuthService, LoginResult};
use crate::services::token::{Claims, TokenIssuer};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct SeaOrmAuthService {
    store: Store,
    security: SecurityConfig,
    tokens: TokenIssuer,
}

impl SeaOrmAuthService {
    #[must_use]
    pub fn new(store: Store, security: SecurityConfig) -> Self {
        let tokens = TokenIssuer::from_config(&security);
        Self {
            store,
            security,
            tokens,
        }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn register(&self, user: NewUser) -> Result<(), AuthError> {
        if self.store.get_user_by_email(&user.email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        // The unique index catches a concurrent registration that slipped past the check.
        self.store
            .create_user(&user, &self.security)
            .await?
            .ok_or(AuthError::EmailTaken)?;

        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let Some(user) = self.store.verify_user_password(email, password).await? else {
            warn!("Failed login for {email}");
            return Err(AuthError::InvalidCredentials);
        };

        let access_token = self
            .tokens
            .issue(&user.email)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))?;

        info!("User logged in: {}", user.email);

        Ok(LoginResult {
            email: user.email,
            access_token,
        })
    }

    fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens
            .verify(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
