//! # User Store
//!
//! Process-lifetime identity and preferences. Not persisted.

use std::sync::{Mutex, MutexGuard, PoisonError};

use shopfront_core::{Identity, Preferences, PreferencesPatch, UserAction, UserState};
use tracing::debug;

#[derive(Debug, Default)]
pub struct UserStore {
    state: Mutex<UserState>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, UserState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn dispatch(&self, action: UserAction) -> UserState {
        let mut state = self.lock();
        debug!(action = action.name(), "User dispatch");
        state.apply(action);
        state.clone()
    }

    pub fn set_user(&self, identity: Identity) -> UserState {
        self.dispatch(UserAction::SetUser(identity))
    }

    pub fn clear_user(&self) -> UserState {
        self.dispatch(UserAction::ClearUser)
    }

    pub fn update_preferences(&self, patch: PreferencesPatch) -> UserState {
        self.dispatch(UserAction::UpdatePreferences(patch))
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.lock().current_user.clone()
    }

    pub fn preferences(&self) -> Preferences {
        self.lock().preferences
    }
}
