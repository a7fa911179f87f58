use iced::Task;

use super::errors::SettingsError;
use super::event::{SettingsEffect, SettingsEvent, SettingsIntent};
use super::model::{PreferenceKey, ThemeOption};
use super::state::SettingsState;
use crate::shared::ui::style_store::{
    ACCENT_VAR, COLOR_SCHEME_DARK, COLOR_SCHEME_LIGHT, COLOR_SCHEME_VAR,
    PRIMARY_VAR, StyleStore,
};
use crate::widgets::toasts::model::{Notification, Notifier};

/// Mutable collaborators the settings reducer writes through.
pub(crate) struct SettingsCtx<'a> {
    pub(crate) style_store: &'a mut StyleStore,
    pub(crate) notifier: &'a mut dyn Notifier,
}

/// Reduce a settings intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SettingsState,
    event: SettingsIntent,
    ctx: &mut SettingsCtx<'_>,
) -> Task<SettingsEvent> {
    match event {
        SettingsIntent::SelectTheme { name } => {
            select_theme(state, &name, ctx);
            style_changed()
        },
        SettingsIntent::SetFlag { name, value } => {
            if let Err(err) = set_flag(state, &name, value, ctx) {
                log::warn!("rejected preference update: {err}");
            }
            Task::none()
        },
        SettingsIntent::SetDarkMode(value) => {
            set_dark_mode(state, value, ctx.style_store);
            style_changed()
        },
        SettingsIntent::SelectTab(tab) => {
            state.set_tab(tab);
            Task::none()
        },
    }
}

/// Select the theme named `name`, falling back to the first catalog entry.
pub(crate) fn select_theme<'s>(
    state: &'s mut SettingsState,
    name: &str,
    ctx: &mut SettingsCtx<'_>,
) -> &'s ThemeOption {
    let index = state.catalog().resolve_index(name);
    if state.catalog().position(name).is_none() {
        log::debug!("theme `{name}` not in catalog, using default");
    }
    state.select_index(index);

    let theme = state.selected_theme();
    ctx.style_store.set_variable(PRIMARY_VAR, theme.primary());
    ctx.style_store.set_variable(ACCENT_VAR, theme.accent());
    ctx.notifier.notify(Notification::success(format!(
        "Theme changed to {}",
        theme.name()
    )));
    theme
}

/// Store a preference flag addressed by its label and announce it.
///
/// Unknown labels leave every flag untouched and surface an error toast.
pub(crate) fn set_flag(
    state: &mut SettingsState,
    name: &str,
    value: bool,
    ctx: &mut SettingsCtx<'_>,
) -> Result<PreferenceKey, SettingsError> {
    let key = match name.parse::<PreferenceKey>() {
        Ok(key) => key,
        Err(err) => {
            ctx.notifier.notify(Notification::error(format!(
                "Unknown preference: {name}"
            )));
            return Err(err);
        },
    };

    state.set_flag(key, value);
    let status = if value { "enabled" } else { "disabled" };
    ctx.notifier
        .notify(Notification::success(format!("{key} {status}")));
    Ok(key)
}

/// Switch the color scheme. Dark mode changes are silent.
pub(crate) fn set_dark_mode(
    state: &mut SettingsState,
    value: bool,
    style_store: &mut StyleStore,
) {
    state.set_dark_mode(value);
    style_store.set_variable(COLOR_SCHEME_VAR, color_scheme(value));
}

/// Write the current selection into the style store without notifying.
pub(crate) fn apply_initial_style(
    state: &SettingsState,
    style_store: &mut StyleStore,
) {
    let theme = state.selected_theme();
    style_store.set_variable(PRIMARY_VAR, theme.primary());
    style_store.set_variable(ACCENT_VAR, theme.accent());
    style_store.set_variable(COLOR_SCHEME_VAR, color_scheme(state.dark_mode()));
}

fn color_scheme(dark: bool) -> &'static str {
    if dark { COLOR_SCHEME_DARK } else { COLOR_SCHEME_LIGHT }
}

fn style_changed() -> Task<SettingsEvent> {
    Task::done(SettingsEvent::Effect(SettingsEffect::StyleChanged))
}
