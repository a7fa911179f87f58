/// Routing state owned by the app root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) current_path: String,
}

impl State {
    pub(crate) fn new(initial_path: impl Into<String>) -> Self {
        Self {
            current_path: initial_path.into(),
        }
    }

    /// Replace the current route. Returns whether it changed.
    pub(crate) fn navigate(&mut self, path: String) -> bool {
        if self.current_path == path {
            return false;
        }
        self.current_path = path;
        true
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new("/")
    }
}
