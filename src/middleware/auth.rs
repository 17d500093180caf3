use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use http::Request as HttpRequest;
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tonic::Status;
use tower::{Layer, Service};

pub const ADMIN_ROLE: &str = "admin";

/// Caller identity injected by the auth middleware into request extensions
/// and passed explicitly into every workflow call.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: Option<String>,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            role: "authenticated".to_string(),
        }
    }

    pub fn admin(user_id: impl Into<String>) -> Self {
        Self {
            role: ADMIN_ROLE.to_string(),
            ..Self::new(user_id)
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Owner filter for list queries: admins read across all owners.
    pub fn owner_scope(&self) -> Option<&str> {
        if self.is_admin() {
            None
        } else {
            Some(&self.user_id)
        }
    }

    pub fn can_access(&self, owner_id: &str) -> bool {
        self.is_admin() || self.user_id == owner_id
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

/// Access token claims issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

impl Claims {
    fn into_user(self) -> AuthenticatedUser {
        let admin = self.role.as_deref() == Some(ADMIN_ROLE)
            || self.app_metadata.role.as_deref() == Some(ADMIN_ROLE);
        AuthenticatedUser {
            user_id: self.sub,
            email: self.email,
            role: if admin {
                ADMIN_ROLE.to_string()
            } else {
                self.role.unwrap_or_else(|| "authenticated".to_string())
            },
        }
    }
}

/// Verifies a bearer token and returns the caller it identifies.
pub fn verify_token(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> Result<AuthenticatedUser, jsonwebtoken::errors::Error> {
    jsonwebtoken::decode::<Claims>(token, key, validation).map(|data| data.claims.into_user())
}

/// Extracts the caller injected by [`AuthLayer`].
pub fn get_authenticated_user<T>(request: &tonic::Request<T>) -> Result<AuthenticatedUser, Status> {
    request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| Status::unauthenticated("Authentication required"))
}

#[derive(Clone)]
struct Verifier {
    key: DecodingKey,
    validation: Validation,
}

/// Tower layer checking `Authorization: Bearer <jwt>` (HS256, shared secret).
#[derive(Clone)]
pub struct AuthLayer {
    verifier: Arc<Verifier>,
}

impl AuthLayer {
    pub fn new(jwt_secret: &str, audience: &str) -> Self {
        let mut validation = Validation::default();
        validation.set_audience(&[audience]);
        Self {
            verifier: Arc::new(Verifier {
                key: DecodingKey::from_secret(jwt_secret.as_bytes()),
                validation,
            }),
        }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            verifier: self.verifier.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    verifier: Arc<Verifier>,
}

impl<S, ReqBody> Service<HttpRequest<ReqBody>> for AuthMiddleware<S>
where
    S: Service<HttpRequest<ReqBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    ReqBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: HttpRequest<ReqBody>) -> Self::Future {
        let mut inner = self.inner.clone();
        std::mem::swap(&mut self.inner, &mut inner);

        let token = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|s| s.trim().to_string());

        if let Some(token) = token {
            match verify_token(&token, &self.verifier.key, &self.verifier.validation) {
                Ok(user) => {
                    tracing::debug!(
                        "Authenticated request: path={}, user_id={}, role={}",
                        req.uri().path(),
                        user.user_id,
                        user.role
                    );
                    req.extensions_mut().insert(user);
                }
                Err(e) => {
                    tracing::warn!("Rejected bearer token on {}: {}", req.uri().path(), e);
                }
            }
        }
        // Requests without a valid token pass through; handlers that need a
        // caller answer UNAUTHENTICATED via get_authenticated_user().

        Box::pin(async move { inner.call(req).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token(role: Option<&str>, app_role: Option<&str>, aud: &str) -> String {
        let claims = serde_json::json!({
            "sub": "5f0c7f6e-1c1d-4a7e-9a43-0c6a3b8f7e11",
            "exp": 4_102_444_800u64,
            "aud": aud,
            "email": "ops@example.com",
            "role": role,
            "app_metadata": { "role": app_role },
        });
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn verifier() -> (DecodingKey, Validation) {
        let mut validation = Validation::default();
        validation.set_audience(&["authenticated"]);
        (DecodingKey::from_secret(SECRET.as_bytes()), validation)
    }

    #[test]
    fn test_regular_user_token() {
        let (key, validation) = verifier();
        let user = verify_token(&token(Some("authenticated"), None, "authenticated"), &key, &validation)
            .unwrap();
        assert_eq!(user.user_id, "5f0c7f6e-1c1d-4a7e-9a43-0c6a3b8f7e11");
        assert_eq!(user.email.as_deref(), Some("ops@example.com"));
        assert!(!user.is_admin());
        assert_eq!(user.owner_scope(), Some(user.user_id.as_str()));
    }

    #[test]
    fn test_admin_from_app_metadata() {
        let (key, validation) = verifier();
        let user = verify_token(
            &token(Some("authenticated"), Some("admin"), "authenticated"),
            &key,
            &validation,
        )
        .unwrap();
        assert!(user.is_admin());
        assert_eq!(user.owner_scope(), None);
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let (key, validation) = verifier();
        assert!(verify_token(&token(None, None, "anon"), &key, &validation).is_err());
    }

    #[test]
    fn test_access_rules() {
        let user = AuthenticatedUser::new("u1");
        assert!(user.can_access("u1"));
        assert!(!user.can_access("u2"));
        assert!(AuthenticatedUser::admin("root").can_access("u2"));
    }
}
