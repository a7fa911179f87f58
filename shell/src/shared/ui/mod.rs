pub(crate) mod icons;
pub(crate) mod style_store;
pub(crate) mod theme;
