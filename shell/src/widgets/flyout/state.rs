/// Which group dropdown the flyout shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) enum Dropdown {
    /// The group holding the active route, if any.
    #[default]
    FollowRoute,
    Open(String),
    Closed,
}

/// Runtime state of the flyout.
#[derive(Debug, Default)]
pub(super) struct FlyoutState {
    dropdown: Dropdown,
}

impl FlyoutState {
    pub(super) fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    /// Open `title` (closing any other group) or close it.
    pub(super) fn set_group(&mut self, title: String, open: bool) {
        self.dropdown = if open {
            Dropdown::Open(title)
        } else {
            Dropdown::Closed
        };
    }

    pub(super) fn close_group(&mut self) {
        self.dropdown = Dropdown::Closed;
    }

    /// Drop the user's choice so the next expansion shows the active group.
    pub(super) fn follow_route(&mut self) {
        self.dropdown = Dropdown::FollowRoute;
    }
}
