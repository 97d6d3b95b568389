//! Authentication service configuration

use crate::errors::{DomainError, DomainResult};

/// Valid bcrypt cost range
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuration for [`AuthenticationService`](super::AuthenticationService)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// bcrypt cost factor for newly hashed passwords
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthConfig {
    /// Lowest-cost configuration, for tests where hashing speed matters
    pub fn fast_hashing() -> Self {
        Self {
            bcrypt_cost: MIN_BCRYPT_COST,
        }
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(DomainError::Configuration {
                message: format!("bcrypt cost {} out of range", self.bcrypt_cost),
            });
        }
        Ok(())
    }
}
