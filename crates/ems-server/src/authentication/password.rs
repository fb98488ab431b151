use crate::configuration::UserAccount;
use anyhow::{bail, Context};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version};
use ems_shared::{
    session::UserSessionInfo, telemetry::spawn_blocking_with_tracing, uac::AuthError,
};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use tracing::debug;

/// Verified against when the user does not exist so that the time taken does
/// not reveal which user ids exist
const UNKNOWN_USER_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$\
    CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

pub struct Credentials {
    pub user_id: String,
    pub password: SecretString,
}

struct DirectoryEntry {
    user_info: UserSessionInfo,
    password_hash: SecretString,
}

/// Read only set of accounts that may log in, keyed by user id
pub struct UserDirectory(HashMap<String, DirectoryEntry>);

impl UserDirectory {
    /// Fails if any account is invalid or a user id is repeated
    pub fn from_accounts(accounts: &[UserAccount]) -> anyhow::Result<Self> {
        let mut result = HashMap::with_capacity(accounts.len());
        for account in accounts {
            let user_info = UserSessionInfo {
                user_id: account
                    .user_id
                    .clone()
                    .try_into()
                    .with_context(|| format!("invalid user id: {:?}", account.user_id))?,
                display_name: account.display_name.clone().try_into().with_context(|| {
                    format!("invalid display name for user: {:?}", account.user_id)
                })?,
                role: Some(account.role),
            };
            PasswordHash::new(account.password_hash.expose_secret()).with_context(|| {
                    format!("password hash for {:?} is not a PHC string", account.user_id)
                })?;
            let entry = DirectoryEntry {
                user_info,
                password_hash: account.password_hash.clone(),
            };
            if result.insert(account.user_id.clone(), entry).is_some() {
                bail!("user id {:?} is used more than once", account.user_id);
            }
        }
        Ok(Self(result))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Returns what should be stored in the session if the credentials match an
/// account in `directory`
#[tracing::instrument(name = "Validate credentials", skip(credentials, directory))]
pub async fn validate_credentials(
    credentials: Credentials,
    directory: &UserDirectory,
) -> Result<UserSessionInfo, AuthError> {
    let entry = directory.0.get(&credentials.user_id);
    if entry.is_none() {
        debug!("User not found: {}", credentials.user_id);
    }
    let expected_password_hash = entry
        .map(|x| x.password_hash.clone())
        .unwrap_or_else(|| SecretString::from(UNKNOWN_USER_PASSWORD_HASH));

    spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_password_hash, credentials.password)
    })
    .await
    .context("Failed to spawn blocking task.")??;

    match entry {
        Some(entry) => Ok(entry.user_info.clone()),
        // Only reachable if someone knows the password for the unknown user hash
        None => Err(AuthError::InvalidUserOrPassword),
    }
}

#[tracing::instrument(skip(expected_password_hash, password_candidate))]
fn verify_password_hash(
    expected_password_hash: SecretString,
    password_candidate: SecretString,
) -> Result<(), AuthError> {
    let expected_password_hash = PasswordHash::new(expected_password_hash.expose_secret())
        .context("Failed to parse hash in PHC string format.")?;

    if Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_password_hash,
        )
        .is_ok()
    {
        Ok(())
    } else {
        Err(AuthError::InvalidUserOrPassword)
    }
}

/// Parameters used to produce password hashes for the user directory
pub fn argon2_settings() -> Argon2<'static> {
    Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).expect("invalid parameters"),
    )
}
