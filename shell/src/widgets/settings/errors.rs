use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum SettingsError {
    #[error("theme catalog must contain at least one theme")]
    EmptyCatalog,
    #[error("theme `{name}` appears more than once in the catalog")]
    DuplicateTheme { name: String },
    #[error("unknown preference: {name}")]
    InvalidPreferenceKey { name: String },
}
