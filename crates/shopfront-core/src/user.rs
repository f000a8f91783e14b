//! # User State
//!
//! Current identity and display preferences. Lives for the whole process and
//! is never persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::i18n::Language;
use crate::types::Identity;

/// Display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub language: Language,
}

/// Partial preferences update. `None` fields keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PreferencesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub language: Option<Language>,
}

impl PreferencesPatch {
    pub fn is_empty(&self) -> bool {
        self.dark_mode.is_none() && self.language.is_none()
    }
}

impl Preferences {
    /// Shallow merge: every field set in `patch` overwrites.
    pub fn merge(&mut self, patch: &PreferencesPatch) {
        if let Some(dark_mode) = patch.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
    }
}

/// User intents.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    SetUser(Identity),
    ClearUser,
    UpdatePreferences(PreferencesPatch),
}

impl UserAction {
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::SetUser(_) => "set_user",
            UserAction::ClearUser => "clear_user",
            UserAction::UpdatePreferences(_) => "update_preferences",
        }
    }
}

/// Signed-in identity plus preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserState {
    pub current_user: Option<Identity>,
    pub preferences: Preferences,
}

impl UserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current identity, whoever was signed in before.
    pub fn set_user(&mut self, identity: Identity) {
        self.current_user = Some(identity);
    }

    pub fn clear_user(&mut self) {
        self.current_user = None;
    }

    pub fn update_preferences(&mut self, patch: &PreferencesPatch) {
        self.preferences.merge(patch);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn apply(&mut self, action: UserAction) {
        match action {
            UserAction::SetUser(identity) => self.set_user(identity),
            UserAction::ClearUser => self.clear_user(),
            UserAction::UpdatePreferences(patch) => self.update_preferences(&patch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_user_replaces_unconditionally() {
        let mut state = UserState::new();
        assert!(!state.is_authenticated());

        state.set_user(Identity::new("first"));
        let second = Identity::new("second");
        state.set_user(second.clone());
        assert_eq!(state.current_user, Some(second));

        state.clear_user();
        assert!(state.current_user.is_none());
    }

    #[test]
    fn test_preferences_shallow_merge() {
        let mut state = UserState::new();
        state.update_preferences(&PreferencesPatch {
            dark_mode: Some(true),
            language: None,
        });
        assert!(state.preferences.dark_mode);
        assert_eq!(state.preferences.language, Language::En);

        state.apply(UserAction::UpdatePreferences(PreferencesPatch {
            dark_mode: None,
            language: Some(Language::Hi),
        }));
        assert!(state.preferences.dark_mode);
        assert_eq!(state.preferences.language, Language::Hi);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut state = UserState::new();
        let before = state.clone();
        let patch = PreferencesPatch::default();
        assert!(patch.is_empty());
        state.update_preferences(&patch);
        assert_eq!(state, before);
    }

    #[test]
    fn test_patch_json_uses_camel_case() {
        let patch: PreferencesPatch = serde_json::from_str(r#"{"darkMode": true}"#).unwrap();
        assert_eq!(patch.dark_mode, Some(true));
        assert_eq!(patch.language, None);
    }
}
