//! Theme, language and user commands.

use std::io::Write;

use shopfront_core::{Identity, Language, PreferencesPatch};

use super::SettingAction;
use crate::error::CliResult;
use crate::render;
use crate::state::AppState;

/// `theme [toggle]`
pub fn theme(app: &AppState, action: Option<SettingAction>, out: &mut dyn Write) -> CliResult<()> {
    let theme = match action {
        Some(SettingAction::Toggle) => app.theme.toggle(),
        None => app.theme.theme(),
    };
    write!(out, "{}", render::theme(&app.locale, theme))?;
    Ok(())
}

/// `lang [toggle]`
pub fn lang(app: &AppState, action: Option<SettingAction>, out: &mut dyn Write) -> CliResult<()> {
    if let Some(SettingAction::Toggle) = action {
        app.locale.toggle();
    }
    write!(out, "{}", render::language(&app.locale))?;
    Ok(())
}

/// `login <NAME> [--email E]`: stub sign-in, no credentials checked.
pub fn login(
    app: &AppState,
    name: String,
    email: Option<String>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let mut identity = Identity::new(name);
    if let Some(email) = email {
        identity = identity.with_email(email);
    }
    let state = app.user.set_user(identity);
    write!(out, "{}", render::identity(&app.locale, state.current_user.as_ref()))?;
    Ok(())
}

pub fn logout(app: &AppState, out: &mut dyn Write) -> CliResult<()> {
    app.user.clear_user();
    writeln!(out, "{}", app.locale.translate("logout"))?;
    Ok(())
}

pub fn whoami(app: &AppState, out: &mut dyn Write) -> CliResult<()> {
    let user = app.user.current_user();
    write!(out, "{}", render::identity(&app.locale, user.as_ref()))?;
    Ok(())
}

/// `prefs [--dark-mode BOOL] [--language en|hi]`
pub fn prefs(
    app: &AppState,
    dark_mode: Option<bool>,
    language: Option<Language>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let patch = PreferencesPatch { dark_mode, language };
    let prefs = if patch.is_empty() {
        app.user.preferences()
    } else {
        app.user.update_preferences(patch).preferences
    };
    write!(out, "{}", render::preferences(&app.locale, &prefs))?;
    Ok(())
}
