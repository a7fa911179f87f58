#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};
use shell_ui_menu::MenuTree;

use crate::config::ShellConfig;
use crate::shared::ui::style_store::StyleStore;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::flyout::{FlyoutEvent, FlyoutWidget};
use crate::widgets::settings::model::ThemeCatalog;
use crate::widgets::settings::{SettingsEvent, SettingsWidget};
use crate::widgets::sidebar::model::menu_catalog;
use crate::widgets::sidebar::{Brand, SidebarEvent, SidebarWidget};
use crate::widgets::toasts::{ToastsEvent, ToastsWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Flyout widget
    Flyout(FlyoutEvent),
    // Settings widget
    Settings(SettingsEvent),
    // Toasts widget
    Toasts(ToastsEvent),
    // Cross-widget workflows
    Navigate { path: String },
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) flyout: FlyoutWidget,
    pub(crate) settings: SettingsWidget,
    pub(crate) toasts: ToastsWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) style_store: StyleStore,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(config: ShellConfig) -> (Self, Task<AppEvent>) {
        (Self::from_config(config), Task::none())
    }

    /// Build the widget tree and apply the initial style without toasts.
    pub(crate) fn from_config(config: ShellConfig) -> Self {
        let menu = match menu_catalog() {
            Ok(menu) => menu,
            Err(err) => {
                log::error!("menu catalog rejected, navigation disabled: {err}");
                MenuTree::empty()
            },
        };

        let catalog = match ThemeCatalog::builtin() {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("theme catalog rejected, using default only: {err}");
                ThemeCatalog::fallback()
            },
        };

        let widgets = Widgets {
            sidebar: SidebarWidget::new(
                menu,
                Brand {
                    title: config.brand_title.clone(),
                    short: config.brand_short.clone(),
                },
            ),
            flyout: FlyoutWidget::new(),
            settings: SettingsWidget::new(catalog),
            toasts: ToastsWidget::new(
                config.toast_timeout(),
                config.max_visible_toasts,
            ),
        };

        let mut style_store = StyleStore::new();
        widgets.settings.apply_initial_style(&mut style_store);
        let mut theme_manager = ThemeManager::new();
        theme_manager.sync(&style_store);

        log::info!("shell started at {}", config.initial_path);

        App {
            theme_manager,
            style_store,
            state: State::new(config.initial_path),
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Admin Shell")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
