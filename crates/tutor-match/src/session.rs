//! Explicit current-user context.
//!
//! The signed-in user lives behind a [`SessionStore`] that callers own and
//! pass around; the matching engine only ever receives the resolved
//! [`Profile`] as a parameter.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::directory::ProfileStore;
use crate::matching::domain::{Profile, ProfileId, Role};

/// Snapshot of who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub profile_id: ProfileId,
    pub role: Role,
    pub signed_in_at: DateTime<Utc>,
}

/// Storage abstraction for the current-user record.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<CurrentUser>;
    fn set(&self, user: CurrentUser);
    fn clear(&self);
}

#[derive(Debug, Default, Clone)]
pub struct InMemorySessionStore {
    current: Arc<Mutex<Option<CurrentUser>>>,
}

impl SessionStore for InMemorySessionStore {
    fn get(&self) -> Option<CurrentUser> {
        self.current.lock().expect("session mutex poisoned").clone()
    }

    fn set(&self, user: CurrentUser) {
        *self.current.lock().expect("session mutex poisoned") = Some(user);
    }

    fn clear(&self) {
        self.current.lock().expect("session mutex poisoned").take();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no profile registered for '{0}'")]
    UnknownUser(String),
    #[error("no user is signed in")]
    NotSignedIn,
    #[error("signed-in profile {0} is no longer in the directory")]
    StaleSession(ProfileId),
}

/// Binds a session store to the profile store it resolves users against.
pub struct SessionContext<'s, 'p, S, P: ?Sized> {
    sessions: &'s S,
    profiles: &'p P,
}

impl<'s, 'p, S, P> SessionContext<'s, 'p, S, P>
where
    S: SessionStore,
    P: ProfileStore + ?Sized,
{
    pub fn new(sessions: &'s S, profiles: &'p P) -> Self {
        Self { sessions, profiles }
    }

    /// Sign in by e-mail address or profile id, replacing any existing session.
    pub fn sign_in(&self, login: &str) -> Result<CurrentUser, SessionError> {
        let login = login.trim();
        let profile = self
            .profiles
            .find_by_email(login)
            .or_else(|| self.profiles.find(&ProfileId(login.to_string())))
            .ok_or_else(|| SessionError::UnknownUser(login.to_string()))?;

        let user = CurrentUser {
            profile_id: profile.id.clone(),
            role: profile.role,
            signed_in_at: Utc::now(),
        };
        self.sessions.set(user.clone());

        tracing::info!(profile = %user.profile_id, role = user.role.label(), "user signed in");
        Ok(user)
    }

    pub fn current_profile(&self) -> Result<&'p Profile, SessionError> {
        let user = self.sessions.get().ok_or(SessionError::NotSignedIn)?;
        self.profiles
            .find(&user.profile_id)
            .ok_or(SessionError::StaleSession(user.profile_id))
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.sessions.get() {
            tracing::info!(profile = %user.profile_id, "user signed out");
        }
        self.sessions.clear();
    }
}
