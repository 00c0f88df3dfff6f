use std::sync::Arc;

use career_core::model::{EmailAddress, Profile, SignupDraft, UserId};
use storage::repository::{AccountRepository, StorageError, UserRecord};
use tracing::{debug, info, warn};

use crate::credentials::{self, SecretDigest};
use crate::error::AccountError;
use crate::Clock;

/// Account creation, lookup and credential checks.
///
/// Emails are matched case-insensitively (the stored casing is kept for
/// display). Nothing returned from here carries the secret.
#[derive(Clone)]
pub struct AccountService {
    clock: Clock,
    accounts: Arc<dyn AccountRepository>,
}

impl AccountService {
    #[must_use]
    pub fn new(clock: Clock, accounts: Arc<dyn AccountRepository>) -> Self {
        Self { clock, accounts }
    }

    /// Validate the form, then create the account.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Signup` for missing or malformed fields, checked
    /// before any storage access.
    /// Returns `AccountError::DuplicateEmail` if the email is taken.
    /// Returns `AccountError::Storage` if persistence fails.
    pub async fn create_user(&self, draft: SignupDraft) -> Result<Profile, AccountError> {
        let signup = draft.validate()?;
        let digest = SecretDigest::create(&signup.password);

        let record = UserRecord {
            id: UserId::generate(),
            full_name: signup.full_name,
            email_key: signup.email.key(),
            email: signup.email.as_str().to_owned(),
            dream_job: signup.dream_job,
            daily_time: signup.daily_time,
            secret_salt: digest.salt,
            secret_hash: digest.hash,
            created_at: self.clock.now(),
        };

        match self.accounts.insert_user(&record).await {
            Ok(()) => {}
            Err(StorageError::Conflict) => {
                debug!(email = %record.email, "signup rejected: email already registered");
                return Err(AccountError::DuplicateEmail);
            }
            Err(e) => return Err(e.into()),
        }

        info!(user_id = %record.id, "account created");
        Ok(record.profile())
    }

    /// # Errors
    ///
    /// Returns `AccountError::NotFound` if no account uses this email.
    /// Returns `AccountError::Storage` if the lookup fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Profile, AccountError> {
        let key = EmailAddress::lookup_key(email);
        self.accounts
            .find_by_email_key(&key)
            .await?
            .map(|record| record.profile())
            .ok_or(AccountError::NotFound)
    }

    /// Returns `Ok(None)` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Storage` if the lookup fails.
    pub async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, AccountError> {
        let record = self.accounts.get_user(id).await?;
        Ok(record.map(|r| r.profile()))
    }

    /// Check an email/secret pair.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidCredentials` for an unknown email or a
    /// wrong secret alike; only the log line tells them apart.
    /// Returns `AccountError::Storage` if the lookup fails.
    pub async fn verify_credentials(
        &self,
        email: &str,
        secret: &str,
    ) -> Result<Profile, AccountError> {
        let key = EmailAddress::lookup_key(email);
        let Some(record) = self.accounts.find_by_email_key(&key).await? else {
            credentials::verify_absent(secret);
            warn!(email = %key, reason = "unknown email", "login rejected");
            return Err(AccountError::InvalidCredentials);
        };

        if !credentials::verify(secret, &record.secret_salt, &record.secret_hash) {
            warn!(user_id = %record.id, reason = "wrong secret", "login rejected");
            return Err(AccountError::InvalidCredentials);
        }

        debug!(user_id = %record.id, "login accepted");
        Ok(record.profile())
    }
}
