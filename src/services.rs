//! The boundary between the UI and whatever answers its submissions.
//!
//! Components talk to a [`Backend`] obtained from context. The shipped
//! [`SimulatedBackend`] waits a fixed time and answers locally; nothing
//! leaves the browser.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use thiserror::Error;
use yew::prelude::*;

use crate::config;
use crate::forms::auth::{LoginForm, SignupForm};
use crate::forms::quote::QuoteRequest;
use crate::models::{Role, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Incorrect email or password")]
    InvalidCredentials,
    /// Reserved for real backends that can fail to answer. The simulated one
    /// always does.
    #[allow(dead_code)]
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait(?Send)]
pub trait Backend {
    async fn submit_quote(&self, request: QuoteRequest) -> Result<(), ServiceError>;
    async fn login(&self, credentials: LoginForm) -> Result<User, ServiceError>;
    async fn signup(&self, form: SignupForm) -> Result<User, ServiceError>;
    async fn request_password_reset(&self, email: String) -> Result<(), ServiceError>;
}

/// Accepts only the demo credential pair. The user name is the local part
/// of the email address.
pub fn check_credentials(credentials: &LoginForm) -> Result<User, ServiceError> {
    if credentials.email == config::DEMO_EMAIL && credentials.password == config::DEMO_PASSWORD {
        let name = credentials
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        Ok(User {
            name,
            role: Role::User,
            avatar_url: None,
        })
    } else {
        Err(ServiceError::InvalidCredentials)
    }
}

#[derive(Default)]
pub struct SimulatedBackend;

#[async_trait(?Send)]
impl Backend for SimulatedBackend {
    async fn submit_quote(&self, request: QuoteRequest) -> Result<(), ServiceError> {
        debug!("Simulating quote submission for {}", request.email);
        TimeoutFuture::new(config::QUOTE_SUBMIT_DELAY_MS).await;
        info!("Quote accepted for {} {} ({})", request.car_make, request.car_model, request.year);
        Ok(())
    }

    async fn login(&self, credentials: LoginForm) -> Result<User, ServiceError> {
        TimeoutFuture::new(config::LOGIN_DELAY_MS).await;
        check_credentials(&credentials)
    }

    async fn signup(&self, form: SignupForm) -> Result<User, ServiceError> {
        TimeoutFuture::new(config::SIGNUP_DELAY_MS).await;
        Ok(form.to_user())
    }

    async fn request_password_reset(&self, email: String) -> Result<(), ServiceError> {
        debug!("Password reset requested for {}", email);
        Ok(())
    }
}

/// Cloneable handle stored in the Yew context.
#[derive(Clone)]
pub struct BackendHandle(pub Rc<dyn Backend>);

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for BackendHandle {
    fn default() -> Self {
        Self(Rc::new(SimulatedBackend))
    }
}

#[hook]
pub fn use_backend() -> Rc<dyn Backend> {
    use_context::<BackendHandle>().unwrap_or_default().0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn only_demo_pair_logs_in() {
        let user = check_credentials(&creds("test@g.com", "1234")).unwrap();
        assert_eq!(user.name, "test");
        assert_eq!(user.role, Role::User);

        for (email, password) in [
            ("test@g.com", "12345"),
            ("Test@g.com", "1234"),
            ("test@g.com ", "1234"),
            ("other@g.com", "1234"),
            ("", ""),
        ] {
            assert_eq!(
                check_credentials(&creds(email, password)),
                Err(ServiceError::InvalidCredentials)
            );
        }
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ServiceError::InvalidCredentials.to_string(), "Incorrect email or password");
        assert_eq!(
            ServiceError::Unavailable("timed out".to_string()).to_string(),
            "Service unavailable: timed out"
        );
    }
}
