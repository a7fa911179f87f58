use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::settings::{
    SettingsCtx, SettingsEffect, SettingsEvent, SettingsIntent,
};

/// Route a settings event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SettingsEvent) -> Task<AppEvent> {
    match event {
        SettingsEvent::Intent(event) => route_intent(app, event),
        SettingsEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: SettingsIntent) -> Task<AppEvent> {
    let mut ctx = SettingsCtx {
        style_store: &mut app.style_store,
        notifier: &mut app.widgets.toasts,
    };

    app.widgets
        .settings
        .reduce(event, &mut ctx)
        .map(AppEvent::Settings)
}

fn route_effect(app: &mut App, effect: SettingsEffect) -> Task<AppEvent> {
    match effect {
        SettingsEffect::StyleChanged => {
            app.theme_manager.sync(&app.style_store);
            Task::none()
        },
    }
}
