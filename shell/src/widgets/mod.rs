pub(crate) mod flyout;
pub(crate) mod settings;
pub(crate) mod sidebar;
pub(crate) mod toasts;
