//! Signed-in user context.
//!
//! The auth layer owns the session and the snapshot it keeps in
//! localStorage. This module only reads that snapshot into a signal for the
//! layout; it never writes or removes the stored entry.

use leptos::prelude::*;
use stockms_nav::User;
use thiserror::Error;
use web_sys::Storage;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("localStorage is not available")]
    StorageUnavailable,
    #[error("localStorage access failed: {0}")]
    Storage(String),
    #[error("stored user is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
}

pub fn provide_auth_context(config: &AppConfig) {
    let initial = match restore_user(config.user_storage_key) {
        Ok(user) => user,
        Err(e) => {
            log::warn!("Starting without a signed-in user: {e}");
            None
        }
    };

    provide_context(AuthContext {
        user: RwSignal::new(initial),
    });
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided")
}

fn restore_user(key: &str) -> Result<Option<User>, AuthError> {
    let storage = local_storage()?;
    let raw = storage
        .get_item(key)
        .map_err(|e| AuthError::Storage(format!("{e:?}")))?;
    decode_user(raw.as_deref())
}

fn local_storage() -> Result<Storage, AuthError> {
    window()
        .local_storage()
        .map_err(|e| AuthError::Storage(format!("{e:?}")))?
        .ok_or(AuthError::StorageUnavailable)
}

/// Parse a stored snapshot. A missing entry is no user, not an error.
pub(crate) fn decode_user(raw: Option<&str>) -> Result<Option<User>, AuthError> {
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        None => Ok(None),
    }
}
