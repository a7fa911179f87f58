use std::collections::BTreeMap;

/// Style variable holding the primary brand color.
pub(crate) const PRIMARY_VAR: &str = "primary";
/// Style variable holding the accent color.
pub(crate) const ACCENT_VAR: &str = "accent";
/// Style variable holding the `dark` / `light` color scheme.
pub(crate) const COLOR_SCHEME_VAR: &str = "color-scheme";

pub(crate) const COLOR_SCHEME_DARK: &str = "dark";
pub(crate) const COLOR_SCHEME_LIGHT: &str = "light";

/// Process-wide style variables read by the renderers.
///
/// Owned by the application root. Writes happen only from the update loop,
/// one event at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct StyleStore {
    variables: BTreeMap<String, String>,
}

impl StyleStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Write `value` under `name`, replacing any previous value.
    pub(crate) fn set_variable(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        let name = name.into();
        let value = value.into();
        log::debug!("style variable {name} = {value}");
        self.variables.insert(name, value);
    }

    /// Read the current value of `name`.
    pub(crate) fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Whether the color scheme variable selects the dark scheme.
    pub(crate) fn is_dark(&self) -> bool {
        self.variable(COLOR_SCHEME_VAR) == Some(COLOR_SCHEME_DARK)
    }
}
