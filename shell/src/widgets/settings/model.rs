use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::errors::SettingsError;

/// Route under which the settings panel is rendered.
pub(crate) const SETTINGS_PATH: &str = "/settings";

/// A named pair of colors applied through the style store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ThemeOption {
    name: String,
    primary: String,
    accent: String,
}

impl ThemeOption {
    pub(crate) fn new(
        name: impl Into<String>,
        primary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary: primary.into(),
            accent: accent.into(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn primary(&self) -> &str {
        &self.primary
    }

    pub(crate) fn accent(&self) -> &str {
        &self.accent
    }
}

/// Immutable, non-empty list of selectable themes. Index 0 is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ThemeCatalog {
    options: Vec<ThemeOption>,
}

impl ThemeCatalog {
    pub(crate) fn new(options: Vec<ThemeOption>) -> Result<Self, SettingsError> {
        if options.is_empty() {
            return Err(SettingsError::EmptyCatalog);
        }

        let mut seen = BTreeSet::new();
        for option in &options {
            if !seen.insert(option.name()) {
                return Err(SettingsError::DuplicateTheme {
                    name: option.name().to_string(),
                });
            }
        }

        Ok(Self { options })
    }

    /// The built-in palettes shipped with the shell.
    pub(crate) fn builtin() -> Result<Self, SettingsError> {
        Self::new(vec![
            default_theme(),
            ThemeOption::new("Ocean", "#0EA5E9", "#06B6D4"),
            ThemeOption::new("Forest", "#059669", "#10B981"),
            ThemeOption::new("Sunset", "#F97316", "#FB923C"),
            ThemeOption::new("Royal", "#9b87f5", "#7E69AB"),
        ])
    }

    /// Single-entry catalog used when the built-in one is rejected.
    pub(crate) fn fallback() -> Self {
        Self {
            options: vec![default_theme()],
        }
    }

    pub(crate) fn options(&self) -> &[ThemeOption] {
        &self.options
    }

    /// Index of the option named exactly `name`.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|option| option.name() == name)
    }

    /// Index of `name`, or 0 when the name is unknown.
    pub(crate) fn resolve_index(&self, name: &str) -> usize {
        self.position(name).unwrap_or(0)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&ThemeOption> {
        self.options.get(index)
    }

    pub(crate) fn default_option(&self) -> &ThemeOption {
        &self.options[0]
    }
}

fn default_theme() -> ThemeOption {
    ThemeOption::new("Default", "#0EA5E9", "#8B5CF6")
}

/// Closed set of toggleable preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum PreferenceKey {
    EmailNotifications,
    PushNotifications,
    AutoSave,
}

impl PreferenceKey {
    pub(crate) const ALL: [PreferenceKey; 3] = [
        PreferenceKey::EmailNotifications,
        PreferenceKey::PushNotifications,
        PreferenceKey::AutoSave,
    ];

    /// Label shown in the UI and used in notifications.
    pub(crate) fn label(self) -> &'static str {
        match self {
            PreferenceKey::EmailNotifications => "Email notifications",
            PreferenceKey::PushNotifications => "Push notifications",
            PreferenceKey::AutoSave => "Auto-save",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            PreferenceKey::EmailNotifications => {
                "Receive email updates about your account"
            },
            PreferenceKey::PushNotifications => {
                "Receive push notifications on this device"
            },
            PreferenceKey::AutoSave => "Automatically save changes as you work",
        }
    }

    /// Settings tab hosting the toggle.
    pub(crate) fn tab(self) -> SettingsTab {
        match self {
            PreferenceKey::EmailNotifications
            | PreferenceKey::PushNotifications => SettingsTab::Notifications,
            PreferenceKey::AutoSave => SettingsTab::System,
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PreferenceKey {
    type Err = SettingsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        PreferenceKey::ALL
            .into_iter()
            .find(|key| key.label() == name)
            .ok_or_else(|| SettingsError::InvalidPreferenceKey {
                name: name.to_string(),
            })
    }
}

/// Tabs of the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SettingsTab {
    #[default]
    Appearance,
    Notifications,
    System,
}

impl SettingsTab {
    pub(crate) const ALL: [SettingsTab; 3] = [
        SettingsTab::Appearance,
        SettingsTab::Notifications,
        SettingsTab::System,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            SettingsTab::Appearance => "Appearance",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::System => "System",
        }
    }
}

/// Read-only view model for the settings panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsViewModel<'a> {
    pub(crate) catalog: &'a ThemeCatalog,
    pub(crate) selected_theme: &'a ThemeOption,
    pub(crate) dark_mode: bool,
    pub(crate) tab: SettingsTab,
    pub(crate) flags: [(PreferenceKey, bool); 3],
}

impl SettingsViewModel<'_> {
    pub(crate) fn flag(&self, key: PreferenceKey) -> bool {
        self.flags
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .is_some_and(|(_, value)| *value)
    }
}
