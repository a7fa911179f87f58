use super::model::SettingsTab;

/// Intent events handled by the settings widget.
#[derive(Debug, Clone)]
pub(crate) enum SettingsIntent {
    /// Theme card pressed. Unknown names fall back to the default theme.
    SelectTheme { name: String },
    /// Preference toggled, addressed by its display label.
    SetFlag { name: String, value: bool },
    SetDarkMode(bool),
    SelectTab(SettingsTab),
}

/// Effects emitted by the settings reducer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEffect {
    /// Style store variables changed; the app theme must be refreshed.
    StyleChanged,
}

/// Settings event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEvent {
    Intent(SettingsIntent),
    Effect(SettingsEffect),
}
