mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SettingsEffect, SettingsEvent, SettingsIntent};
use iced::Task;
use model::{PreferenceKey, SettingsViewModel, ThemeCatalog};
pub(crate) use reducer::SettingsCtx;
use state::SettingsState;

use crate::shared::ui::style_store::StyleStore;

/// Settings widget: theme palette, dark mode and preference flags.
pub(crate) struct SettingsWidget {
    state: SettingsState,
}

impl SettingsWidget {
    pub(crate) fn new(catalog: ThemeCatalog) -> Self {
        Self {
            state: SettingsState::new(catalog),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SettingsIntent,
        ctx: &mut SettingsCtx<'_>,
    ) -> Task<SettingsEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Seed the style store with the current selection, without toasts.
    pub(crate) fn apply_initial_style(&self, style_store: &mut StyleStore) {
        reducer::apply_initial_style(&self.state, style_store);
    }

    pub(crate) fn vm(&self) -> SettingsViewModel<'_> {
        SettingsViewModel {
            catalog: self.state.catalog(),
            selected_theme: self.state.selected_theme(),
            dark_mode: self.state.dark_mode(),
            tab: self.state.tab(),
            flags: PreferenceKey::ALL.map(|key| (key, self.state.flag(key))),
        }
    }
}
