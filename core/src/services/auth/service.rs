//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::token::{TokenDomain, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::revocation::{RevocationDomain, RevocationStore};
use crate::repositories::uow::UnitOfWork;
use crate::repositories::user::{UserRepository, UserTxSession};
use crate::services::token::{fingerprint, TokenCodec};

use super::config::AuthConfig;

/// Authentication service for login, registration, token refresh and logout.
///
/// Holds no state of its own beyond its collaborators; every use case is a
/// self-contained call.
pub struct AuthenticationService<U, W, B>
where
    U: UserRepository,
    W: UnitOfWork,
    B: RevocationStore,
{
    /// Read-side user lookups
    users: Arc<U>,
    /// Transactional boundary for the write path
    unit_of_work: Arc<W>,
    /// Revoked-token fingerprints
    revocations: Arc<B>,
    /// Token minting and verification
    tokens: Arc<TokenCodec>,
    /// Service configuration
    config: AuthConfig,
}

impl<U, W, B> AuthenticationService<U, W, B>
where
    U: UserRepository,
    W: UnitOfWork,
    B: RevocationStore,
{
    /// Create a new authentication service.
    ///
    /// Collaborators are required by construction; an invalid configuration
    /// is rejected here rather than at call time.
    pub fn new(
        users: Arc<U>,
        unit_of_work: Arc<W>,
        revocations: Arc<B>,
        tokens: Arc<TokenCodec>,
        config: AuthConfig,
    ) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            users,
            unit_of_work,
            revocations,
            tokens,
            config,
        })
    }

    /// Authenticate by email and password, minting a fresh token pair.
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller; both fail with `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                debug!("login rejected: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let password_ok = bcrypt::verify(password, &user.password_hash).unwrap_or_else(|e| {
            warn!(error = %e, "stored password hash could not be verified");
            false
        });
        if !password_ok {
            debug!("login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.mint_pair(&user.id.to_string())
    }

    /// Register a new user inside a single transaction.
    ///
    /// The email count is only a friendly early rejection; the unique
    /// constraint on the email column is what actually prevents two
    /// concurrent registrations from both succeeding, and its violation is
    /// reported as `AlreadyExists` by the session.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> DomainResult<User> {
        let password_hash =
            bcrypt::hash(password, self.config.bcrypt_cost).map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {e}"),
            })?;
        let user = User::new(email, password_hash, name);
        let email = email.to_string();

        self.unit_of_work
            .run(move |session: &mut W::Session| {
                Box::pin(async move {
                    if session.count_by_email(&email).await? > 0 {
                        return Err(AuthError::AlreadyExists.into());
                    }
                    session.insert(&user).await?;
                    Ok(user)
                })
            })
            .await
    }

    /// Exchange a refresh token for a new access/refresh pair, rotating the
    /// presented token so it cannot be replayed.
    ///
    /// A store failure on the revocation check aborts the call: "could not
    /// check" is never treated as "not revoked". Rotation happens only
    /// after both new tokens exist, so a mint failure leaves the old token
    /// untouched and usable.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let fingerprint = fingerprint(refresh_token);

        if self
            .revocations
            .contains(&fingerprint, RevocationDomain::Refresh)
            .await?
        {
            debug!("refresh rejected: token already rotated or logged out");
            return Err(TokenError::Revoked.into());
        }

        let claims = self.tokens.verify(TokenDomain::Refresh, refresh_token)?;

        let pair = self.mint_pair(&claims.sub)?;

        self.revocations
            .add(
                &fingerprint,
                RevocationDomain::Refresh,
                claims.remaining_lifetime(),
            )
            .await?;

        Ok(pair)
    }

    /// Revoke both tokens of a session.
    ///
    /// If revoking the access token succeeds and the refresh token fails,
    /// the failure is reported as-is; revocation is idempotent, so the
    /// client simply retries the whole logout.
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> DomainResult<()> {
        self.revoke(access_token, TokenDomain::Access).await?;
        self.revoke(refresh_token, TokenDomain::Refresh).await?;
        Ok(())
    }

    async fn revoke(&self, token: &str, domain: TokenDomain) -> DomainResult<()> {
        let ttl = match self.tokens.verify(domain, token) {
            Ok(claims) => claims.remaining_lifetime(),
            // Already dead; no bookkeeping needed.
            Err(DomainError::Token(TokenError::Expired)) => return Ok(()),
            // Unparseable: the remaining lifetime is unknowable, so use the
            // domain's full lifetime as an upper bound.
            Err(e) => {
                debug!(error = %e, domain = %domain, "revoking unverifiable token");
                self.tokens.ttl(domain)
            }
        };

        self.revocations
            .add(&fingerprint(token), domain.into(), ttl)
            .await
    }

    fn mint_pair(&self, subject: &str) -> DomainResult<TokenPair> {
        let access_token = self.tokens.mint(TokenDomain::Access, subject)?;
        let refresh_token = self.tokens.mint(TokenDomain::Refresh, subject)?;
        Ok(TokenPair::new(access_token, refresh_token))
    }
}
