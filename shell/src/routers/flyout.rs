use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::flyout::{FlyoutEffect, FlyoutEvent, FlyoutIntent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Route a flyout event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: FlyoutEvent) -> Task<AppEvent> {
    match event {
        FlyoutEvent::Intent(event) => route_intent(app, event),
        FlyoutEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: FlyoutIntent) -> Task<AppEvent> {
    app.widgets.flyout.reduce(event).map(AppEvent::Flyout)
}

fn route_effect(app: &mut App, effect: FlyoutEffect) -> Task<AppEvent> {
    match effect {
        FlyoutEffect::Navigate { path } => {
            Task::done(AppEvent::Navigate { path })
        },
        // Applied in the same update so the two regions never disagree.
        FlyoutEffect::CollapseSidebar => routers::sidebar::route(
            app,
            SidebarEvent::Intent(SidebarIntent::FlyoutExited),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::route;
    use crate::app::App;
    use crate::config::ShellConfig;
    use crate::routers;
    use crate::widgets::flyout::{FlyoutEvent, FlyoutIntent};
    use crate::widgets::sidebar::{HoverSurface, SidebarEvent, SidebarIntent};

    fn sidebar(app: &mut App, intent: SidebarIntent) {
        let _task = routers::sidebar::route(app, SidebarEvent::Intent(intent));
    }

    /// Reduce a flyout intent and route the effect it produces, as the
    /// update loop does once the returned task runs.
    fn flyout(app: &mut App, intent: FlyoutIntent) {
        if let Some(effect) = app.widgets.flyout.apply(intent) {
            let _task = route(app, FlyoutEvent::Effect(effect));
        }
    }

    fn is_expanded(app: &App) -> bool {
        app.widgets.sidebar.vm(&app.state.current_path).is_expanded()
    }

    fn open_group(app: &App) -> Option<&str> {
        app.widgets
            .flyout
            .vm(app.widgets.sidebar.menu(), &app.state.current_path)
            .open_group
    }

    fn expanded_app() -> App {
        let mut app = App::from_config(ShellConfig::default());
        sidebar(&mut app, SidebarIntent::PointerEntered);
        assert!(is_expanded(&app));
        app
    }

    #[test]
    fn given_expanded_sidebar_when_pointer_leaves_flyout_then_sidebar_collapses()
     {
        let mut app = expanded_app();

        flyout(&mut app, FlyoutIntent::PointerExited);

        assert!(!is_expanded(&app));
    }

    #[test]
    fn given_pointer_on_flyout_when_it_moves_onto_rail_then_sidebar_stays_expanded()
     {
        let mut app = expanded_app();

        sidebar(&mut app, SidebarIntent::SurfaceEntered(HoverSurface::Rail));
        flyout(&mut app, FlyoutIntent::PointerExited);

        assert!(is_expanded(&app));
    }

    #[test]
    fn given_flyout_leave_routed_first_when_rail_entered_then_sidebar_expands()
    {
        let mut app = expanded_app();

        flyout(&mut app, FlyoutIntent::PointerExited);
        sidebar(&mut app, SidebarIntent::SurfaceEntered(HoverSurface::Rail));

        assert!(is_expanded(&app));
    }

    #[test]
    fn given_pointer_on_flyout_when_it_moves_onto_brand_then_sidebar_stays_expanded()
     {
        let mut app = expanded_app();

        sidebar(&mut app, SidebarIntent::SurfaceEntered(HoverSurface::Brand));
        flyout(&mut app, FlyoutIntent::PointerExited);

        assert!(is_expanded(&app));
    }

    #[test]
    fn given_open_group_when_pointer_leaves_flyout_then_group_closes() {
        let mut app = expanded_app();
        let _task = route(
            &mut app,
            FlyoutEvent::Intent(FlyoutIntent::GroupToggled {
                title: String::from("Inventory"),
                open: true,
            }),
        );
        assert_eq!(open_group(&app), Some("Inventory"));

        let _task =
            route(&mut app, FlyoutEvent::Intent(FlyoutIntent::PointerExited));

        assert_eq!(open_group(&app), None);
    }
}
