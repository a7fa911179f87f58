use thiserror::Error;

/// Errors raised while building a [`crate::MenuTree`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A child of a group declares its own sub-items.
    #[error("menu entry '{child}' under '{parent}' nests beyond two levels")]
    NestingTooDeep { parent: String, child: String },
    /// Two siblings share the same title.
    #[error("duplicate menu title '{title}'")]
    DuplicateTitle { title: String },
}
