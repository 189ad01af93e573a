use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use uuid::Uuid;

use vitalis_core::models::user::{PublicUser, User};
use vitalis_storage::state;

use crate::error::AuthError;

pub const BCRYPT_COST: u32 = 10;

/// Operator accounts persisted as a JSON array.
///
/// Writers are serialized through an in-process lock; the file is the only
/// source of truth and is re-read on every call.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl UserStore {
    /// Open the store at `path`, creating an empty one if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let path = path.into();
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            state::save_state(&path, &Vec::<User>::new()).await?;
            tracing::info!(path = %path.display(), "created empty user store");
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a new user. Emails are unique, compared case-insensitively.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PublicUser, AuthError> {
        let _guard = self.lock.lock().await;
        let mut users = self.read().await?;
        if find_by_email(&users, email).is_some() {
            return Err(AuthError::UserExists);
        }

        let password = password.to_string();
        let password_hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: jiff::Timestamp::now(),
        };
        let public = PublicUser::from(&user);
        users.push(user);
        state::save_state(&self.path, &users).await?;

        tracing::info!(user_id = %public.id, "user registered");
        Ok(public)
    }

    /// Check an email/password pair. Unknown email and wrong password are
    /// indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        let users = self.read().await?;
        let user = find_by_email(&users, email).ok_or(AuthError::InvalidCredentials)?;

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(PublicUser::from(user))
    }

    async fn read(&self) -> Result<Vec<User>, AuthError> {
        Ok(state::load_state_or_default(&self.path).await?)
    }
}

fn find_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    let email = email.to_lowercase();
    users.iter().find(|u| u.email.to_lowercase() == email)
}
