//! Authentication service - registration, login and token handling.
//!
//! Passwords are hashed through the domain `Password` value object.
//! Tokens are HS256 JWTs: a short-lived access token and a longer-lived
//! refresh token that can only be exchanged for new access tokens.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, TOKEN_KIND_ACCESS, TOKEN_KIND_REFRESH};
use crate::domain::{NewProfile, NewUser, Password, Profile, User, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ProfileRepository, UnitOfWork, UserRepository};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i32,
    pub username: String,
    pub email: String,
    pub profile_id: i32,
    /// `access` or `refresh`
    pub token_type: String,
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Account data collected at sign-up.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

/// Tokens plus the account they were issued for
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub user: UserResponse,
    pub profile: Profile,
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access: String,
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh: String,
}

/// A user together with their profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub user: UserResponse,
    pub profile: Profile,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a user and their profile, and sign them in.
    async fn register(&self, registration: Registration) -> AppResult<Session>;

    /// Check credentials and issue a token pair.
    async fn login(&self, username: String, password: String) -> AppResult<Session>;

    /// Exchange a refresh token for a new access token.
    async fn refresh(&self, refresh_token: String) -> AppResult<String>;

    /// The account behind an authenticated request.
    async fn me(&self, user_id: i32) -> AppResult<Account>;

    /// Verify an access token and extract its claims.
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

fn issue_token(
    user: &User,
    profile_id: i32,
    kind: &str,
    lifetime: Duration,
    config: &Config,
) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        profile_id,
        token_type: kind.to_string(),
        jti: Uuid::new_v4(),
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?)
}

/// Decode a token and require it to be of the given kind.
fn decode_token(token: &str, kind: &str, config: &Config) -> AppResult<Claims> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?
    .claims;

    if claims.token_type != kind {
        return Err(AppError::Unauthorized);
    }
    Ok(claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }

    fn session(&self, user: User, profile: Profile) -> AppResult<Session> {
        let access = issue_token(
            &user,
            profile.id,
            TOKEN_KIND_ACCESS,
            Duration::minutes(self.config.access_token_minutes),
            &self.config,
        )?;
        let refresh = issue_token(
            &user,
            profile.id,
            TOKEN_KIND_REFRESH,
            Duration::days(self.config.refresh_token_days),
            &self.config,
        )?;

        Ok(Session {
            user: user.into(),
            profile,
            access,
            refresh,
        })
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, registration: Registration) -> AppResult<Session> {
        let password_hash = Password::new(&registration.password)?.into_string();

        let (user, profile) = with_transaction!(self.uow, |ctx| {
            if ctx
                .users()
                .find_by_username(&registration.username)
                .await?
                .is_some()
            {
                return Err(AppError::field(
                    "username",
                    "A user with that username already exists.",
                ));
            }

            let user = ctx
                .users()
                .create(NewUser {
                    username: registration.username,
                    email: registration.email,
                    password_hash,
                    phone: registration.phone.clone(),
                })
                .await?;
            let profile = ctx
                .profiles()
                .create(NewProfile::for_user(
                    user.id,
                    registration.bio,
                    registration.profile_picture,
                    registration.phone,
                ))
                .await?;

            Ok::<_, AppError>((user, profile))
        })?;

        tracing::info!(user_id = user.id, profile_id = profile.id, "User registered");
        self.session(user, profile)
    }

    async fn login(&self, username: String, password: String) -> AppResult<Session> {
        let user = self.uow.users().find_by_username(&username).await?;

        // Unknown usernames still pay for a hash verification.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(&password);

        let user = match user {
            Some(user) if password_valid && user.can_login() => user,
            _ => return Err(AppError::InvalidCredentials),
        };

        let profile = self
            .uow
            .profiles()
            .find_by_user(user.id)
            .await?
            .ok_or_not_found("Profile")?;

        tracing::info!(user_id = user.id, "User logged in");
        self.session(user, profile)
    }

    async fn refresh(&self, refresh_token: String) -> AppResult<String> {
        let claims = decode_token(&refresh_token, TOKEN_KIND_REFRESH, &self.config)?;

        // The account may have been removed or disabled since.
        let user = match self.uow.users().find_by_id(claims.sub).await? {
            Some(user) if user.can_login() => user,
            _ => return Err(AppError::Unauthorized),
        };

        issue_token(
            &user,
            claims.profile_id,
            TOKEN_KIND_ACCESS,
            Duration::minutes(self.config.access_token_minutes),
            &self.config,
        )
    }

    async fn me(&self, user_id: i32) -> AppResult<Account> {
        let user = self
            .uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_not_found("User")?;
        let profile = self
            .uow
            .profiles()
            .find_by_user(user_id)
            .await?
            .ok_or_not_found("Profile")?;

        Ok(Account {
            user: user.into(),
            profile,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        decode_token(token, TOKEN_KIND_ACCESS, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockProfileRepository, MockUserRepository};
    use crate::services::testing::TestUnitOfWork;
    use crate::domain::UserType;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn config() -> Config {
        Config::new("sqlite::memory:", SECRET).unwrap()
    }

    fn user(password: &str) -> User {
        User {
            id: 1,
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            phone: None,
            is_active: true,
            date_joined: Utc::now(),
        }
    }

    fn profile() -> Profile {
        Profile {
            id: 10,
            user_id: 1,
            user_type: UserType::Tenant,
            bio: None,
            profile_picture: None,
            phone_number: None,
            date_of_birth: None,
            email_verified: false,
            phone_verified: false,
            identity_verified: false,
            website: None,
            facebook_url: None,
            twitter_url: None,
            linkedin_url: None,
            country: None,
            city: None,
            address: None,
            created_by: None,
            modified_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(users: MockUserRepository, profiles: MockProfileRepository) -> Authenticator<TestUnitOfWork> {
        let uow = TestUnitOfWork {
            users: Arc::new(users),
            profiles: Arc::new(profiles),
            ..Default::default()
        };
        Authenticator::new(Arc::new(uow), config())
    }

    #[tokio::test]
    async fn test_login_success_issues_token_pair() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(user("correct-horse"))));
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_by_user()
            .returning(|_| Ok(Some(profile())));

        let service = service(users, profiles);
        let session = service
            .login("jane".to_string(), "correct-horse".to_string())
            .await
            .unwrap();

        let claims = service.verify_token(&session.access).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.profile_id, 10);
        assert_eq!(claims.username, "jane");
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(session.profile.id, 10);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(user("correct-horse"))));

        let service = service(users, MockProfileRepository::new());
        let result = service
            .login("jane".to_string(), "battery-staple".to_string())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_invalid_credentials() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let service = service(users, MockProfileRepository::new());
        let result = service
            .login("ghost".to_string(), "whatever-123".to_string())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_refresh_token_not_accepted_as_access() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(user("correct-horse"))));
        users
            .expect_find_by_id()
            .returning(|_| Ok(Some(user("correct-horse"))));
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_by_user()
            .returning(|_| Ok(Some(profile())));

        let service = service(users, profiles);
        let session = service
            .login("jane".to_string(), "correct-horse".to_string())
            .await
            .unwrap();

        assert!(matches!(
            service.verify_token(&session.refresh),
            Err(AppError::Unauthorized)
        ));
        let access = service.refresh(session.refresh.clone()).await.unwrap();
        assert!(service.verify_token(&access).is_ok());
        assert!(service.refresh(session.access).await.is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = service(MockUserRepository::new(), MockProfileRepository::new());
        assert!(service.verify_token("not.a.token").is_err());
    }
}
