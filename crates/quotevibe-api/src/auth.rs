//! Auth endpoints: register, login, session restore.

use crate::client::ApiClient;
use async_trait::async_trait;
use quotevibe_core::{
    error::QuoteVibeError,
    model::{AuthSession, User},
    traits::AuthApi,
};
use serde::Serialize;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl AuthApi for ApiClient {
    fn set_token(&self, token: &str) {
        ApiClient::set_token(self, token);
    }

    fn clear_token(&self) {
        ApiClient::clear_token(self);
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, QuoteVibeError> {
        self.post_json("/auth/login", &LoginRequest { email, password }, false)
            .await
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, QuoteVibeError> {
        self.post_json(
            "/auth/register",
            &RegisterRequest {
                username,
                email,
                password,
            },
            false,
        )
        .await
    }

    async fn me(&self) -> Result<User, QuoteVibeError> {
        self.get_json("/auth/me", &[], true).await
    }
}
