use std::collections::BTreeMap;

use super::model::{PreferenceKey, SettingsTab, ThemeCatalog, ThemeOption};

/// Preference state: selected theme, dark mode, flags and active tab.
#[derive(Debug, Clone)]
pub(crate) struct SettingsState {
    catalog: ThemeCatalog,
    selected: usize,
    dark_mode: bool,
    flags: BTreeMap<PreferenceKey, bool>,
    tab: SettingsTab,
}

impl SettingsState {
    pub(crate) fn new(catalog: ThemeCatalog) -> Self {
        let flags = PreferenceKey::ALL.into_iter().map(|key| (key, true)).collect();

        Self {
            catalog,
            selected: 0,
            dark_mode: false,
            flags,
            tab: SettingsTab::default(),
        }
    }

    /// State over the built-in catalog for tests.
    #[cfg(test)]
    pub(crate) fn builtin() -> Self {
        Self::new(ThemeCatalog::builtin().expect("builtin catalog"))
    }

    pub(crate) fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub(crate) fn selected_theme(&self) -> &ThemeOption {
        self.catalog
            .get(self.selected)
            .unwrap_or_else(|| self.catalog.default_option())
    }

    pub(crate) fn select_index(&mut self, index: usize) {
        self.selected = if self.catalog.get(index).is_some() {
            index
        } else {
            0
        };
    }

    pub(crate) fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub(crate) fn set_dark_mode(&mut self, value: bool) {
        self.dark_mode = value;
    }

    pub(crate) fn flag(&self, key: PreferenceKey) -> bool {
        self.flags.get(&key).copied().unwrap_or(true)
    }

    pub(crate) fn set_flag(&mut self, key: PreferenceKey, value: bool) {
        self.flags.insert(key, value);
    }

    pub(crate) fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub(crate) fn set_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
    }
}
