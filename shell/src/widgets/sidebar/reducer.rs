use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
) -> Task<SidebarEvent> {
    match apply(state, event) {
        Some(effect) => Task::done(SidebarEvent::Effect(effect)),
        None => Task::none(),
    }
}

/// Apply an intent to `state` and return the effect it requests, if any.
pub(super) fn apply(
    state: &mut SidebarState,
    event: SidebarIntent,
) -> Option<SidebarEffect> {
    match event {
        SidebarIntent::PointerEntered => {
            state.expand();
            None
        },
        SidebarIntent::PointerExited => {
            state.collapse();
            None
        },
        SidebarIntent::SurfaceEntered(surface) => {
            state.set_surface_hovered(surface, true);
            state.expand();
            None
        },
        SidebarIntent::SurfaceExited(surface) => {
            state.set_surface_hovered(surface, false);
            None
        },
        SidebarIntent::FlyoutExited => {
            if state.is_surface_hovered() {
                log::debug!("flyout left onto the rail, sidebar stays open");
            } else {
                state.collapse();
            }
            None
        },
        SidebarIntent::EntryPressed { path } => {
            Some(SidebarEffect::Navigate { path })
        },
    }
}

#[cfg(test)]
mod tests {
    use shell_ui_menu::MenuTree;

    use super::apply;
    use crate::widgets::sidebar::model::ExpansionMode;
    use crate::widgets::sidebar::state::{Brand, SidebarState};
    use crate::widgets::sidebar::{HoverSurface, SidebarEffect, SidebarIntent};

    fn state() -> SidebarState {
        SidebarState::new(
            MenuTree::empty(),
            Brand {
                title: String::from("ERP System"),
                short: String::from("ERP"),
            },
        )
    }

    fn run(state: &mut SidebarState, events: &[SidebarIntent]) {
        for event in events {
            let _effect = apply(state, event.clone());
        }
    }

    #[test]
    fn given_fresh_sidebar_when_created_then_collapsed() {
        let state = state();

        assert_eq!(state.mode(), ExpansionMode::Collapsed);
        assert_eq!(state.brand_text(), "ERP");
    }

    #[test]
    fn given_enter_then_leave_when_reduced_then_collapsed() {
        let mut state = state();

        run(
            &mut state,
            &[SidebarIntent::PointerEntered, SidebarIntent::PointerExited],
        );

        assert_eq!(state.mode(), ExpansionMode::Collapsed);
    }

    #[test]
    fn given_enter_leave_enter_when_reduced_then_expanded() {
        let mut state = state();

        run(
            &mut state,
            &[
                SidebarIntent::PointerEntered,
                SidebarIntent::PointerExited,
                SidebarIntent::PointerEntered,
            ],
        );

        assert_eq!(state.mode(), ExpansionMode::Expanded);
        assert_eq!(state.brand_text(), "ERP System");
    }

    #[test]
    fn given_repeated_enter_when_reduced_then_stays_expanded() {
        let mut state = state();

        run(
            &mut state,
            &[SidebarIntent::PointerEntered, SidebarIntent::PointerEntered],
        );

        assert_eq!(state.mode(), ExpansionMode::Expanded);
    }

    #[test]
    fn given_pointer_off_rail_when_flyout_left_then_collapsed() {
        let mut state = state();

        run(
            &mut state,
            &[
                SidebarIntent::SurfaceEntered(HoverSurface::Rail),
                SidebarIntent::SurfaceExited(HoverSurface::Rail),
                SidebarIntent::FlyoutExited,
            ],
        );

        assert_eq!(state.mode(), ExpansionMode::Collapsed);
    }

    #[test]
    fn given_pointer_on_rail_when_flyout_left_then_stays_expanded() {
        let mut state = state();

        run(
            &mut state,
            &[
                SidebarIntent::PointerEntered,
                SidebarIntent::SurfaceEntered(HoverSurface::Rail),
                SidebarIntent::FlyoutExited,
            ],
        );

        assert_eq!(state.mode(), ExpansionMode::Expanded);
    }

    #[test]
    fn given_flyout_left_before_rail_enter_when_reduced_then_expanded() {
        let mut state = state();

        run(
            &mut state,
            &[
                SidebarIntent::PointerEntered,
                SidebarIntent::FlyoutExited,
                SidebarIntent::SurfaceEntered(HoverSurface::Rail),
            ],
        );

        assert_eq!(state.mode(), ExpansionMode::Expanded);
    }

    #[test]
    fn given_pointer_on_brand_when_flyout_left_then_stays_expanded() {
        let mut state = state();

        run(
            &mut state,
            &[
                SidebarIntent::PointerEntered,
                SidebarIntent::SurfaceEntered(HoverSurface::Brand),
                SidebarIntent::FlyoutExited,
            ],
        );

        assert_eq!(state.mode(), ExpansionMode::Expanded);
    }

    #[test]
    fn given_navigation_left_when_flyout_left_later_then_collapsed() {
        let mut state = state();

        run(
            &mut state,
            &[
                SidebarIntent::SurfaceEntered(HoverSurface::Rail),
                SidebarIntent::PointerExited,
                SidebarIntent::PointerEntered,
                SidebarIntent::FlyoutExited,
            ],
        );

        assert_eq!(state.mode(), ExpansionMode::Collapsed);
    }

    #[test]
    fn given_entry_press_when_applied_then_navigate_effect_is_returned() {
        let mut state = state();

        let effect = apply(
            &mut state,
            SidebarIntent::EntryPressed {
                path: String::from("/reports"),
            },
        );

        assert_eq!(
            effect,
            Some(SidebarEffect::Navigate {
                path: String::from("/reports"),
            })
        );
        assert_eq!(state.mode(), ExpansionMode::Collapsed);
    }

    #[test]
    fn given_pointer_intents_when_applied_then_no_effect_is_returned() {
        let mut state = state();

        assert_eq!(apply(&mut state, SidebarIntent::PointerEntered), None);
        assert_eq!(apply(&mut state, SidebarIntent::FlyoutExited), None);
    }
}
