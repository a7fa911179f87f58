use iced::widget::text::Wrapping;
use iced::widget::{column, container, mouse_area, row, stack, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::flyout::view::{self as flyout_view, FlyoutViewProps};
use crate::widgets::flyout::FlyoutEvent;
use crate::widgets::settings::SettingsEvent;
use crate::widgets::settings::model::SETTINGS_PATH;
use crate::widgets::settings::view::{self as settings_view, SettingsViewProps};
use crate::widgets::sidebar::model::{FLYOUT_WIDTH, SIDEBAR_RAIL_WIDTH};
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarViewProps};
use crate::widgets::sidebar::{HoverSurface, SidebarEvent, SidebarIntent};
use crate::widgets::toasts::ToastsEvent;
use crate::widgets::toasts::view::{self as toasts_view, ToastsViewProps};

const BRAND_HEIGHT: f32 = 48.0;
const BRAND_FONT_SIZE: f32 = 16.0;
const PAGE_PADDING: f32 = 24.0;
const PAGE_TITLE_FONT_SIZE: f32 = 22.0;
const PAGE_BODY_FONT_SIZE: f32 = 14.0;
const NOT_FOUND_TITLE: &str = "Not found";

/// Render the root application view.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let palette = theme.iced_palette();

    let body = row![
        view_navigation(app, theme_props),
        view_content(app, theme_props),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let root = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        });

    if !app.widgets.toasts.has_toasts() {
        return root.into();
    }

    let toasts = toasts_view::view(ToastsViewProps {
        vm: app.widgets.toasts.vm(),
        theme: theme_props,
    })
    .map(|intent| AppEvent::Toasts(ToastsEvent::Intent(intent)));

    stack![root, toasts].into()
}

/// Brand header, icon rail and, while expanded, the flyout. Leaving the
/// whole column collapses the sidebar; leaving only the flyout collapses it
/// unless the pointer landed on the brand header or the rail.
fn view_navigation<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let path = app.state.current_path.as_str();
    let sidebar_vm = app.widgets.sidebar.vm(path);
    let palette = theme_props.theme.iced_palette();

    let rail = sidebar_view::view(SidebarViewProps {
        vm: sidebar_vm,
        theme: theme_props,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)));

    let (panels, width) = if sidebar_vm.is_expanded() {
        let flyout = flyout_view::view(FlyoutViewProps {
            vm: app.widgets.flyout.vm(app.widgets.sidebar.menu(), path),
            theme: theme_props,
        })
        .map(|intent| AppEvent::Flyout(FlyoutEvent::Intent(intent)));

        (row![rail, flyout], SIDEBAR_RAIL_WIDTH + FLYOUT_WIDTH)
    } else {
        (row![rail], SIDEBAR_RAIL_WIDTH)
    };

    let navigation = column![
        brand_header(sidebar_vm.brand, width, palette),
        panels.height(Length::Fill),
    ]
    .width(Length::Fixed(width))
    .height(Length::Fill);

    mouse_area(navigation)
        .on_enter(AppEvent::Sidebar(SidebarEvent::Intent(
            SidebarIntent::PointerEntered,
        )))
        .on_exit(AppEvent::Sidebar(SidebarEvent::Intent(
            SidebarIntent::PointerExited,
        )))
        .into()
}

fn brand_header<'a>(
    brand: &'a str,
    width: f32,
    palette: &'a IcedColorPalette,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let header = container(
        text(brand)
            .size(BRAND_FONT_SIZE)
            .wrapping(Wrapping::None)
            .color(palette.primary),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(BRAND_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(palette.surface.into()),
        ..Default::default()
    });

    mouse_area(header)
        .on_enter(AppEvent::Sidebar(SidebarEvent::Intent(
            SidebarIntent::SurfaceEntered(HoverSurface::Brand),
        )))
        .on_exit(AppEvent::Sidebar(SidebarEvent::Intent(
            SidebarIntent::SurfaceExited(HoverSurface::Brand),
        )))
        .into()
}

/// Settings panel on its route, a titled placeholder elsewhere.
fn view_content<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let path = app.state.current_path.as_str();

    if path == SETTINGS_PATH {
        return settings_view::view(SettingsViewProps {
            vm: app.widgets.settings.vm(),
            theme: theme_props,
        })
        .map(|intent| AppEvent::Settings(SettingsEvent::Intent(intent)));
    }

    let palette = theme_props.theme.iced_palette();
    let title = page_title(app, path);

    let page = column![
        text(title).size(PAGE_TITLE_FONT_SIZE),
        text(path)
            .size(PAGE_BODY_FONT_SIZE)
            .color(palette.dim_foreground),
    ]
    .spacing(8.0);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PAGE_PADDING)
        .into()
}

fn page_title<'a>(app: &'a App, path: &str) -> &'a str {
    let menu = app.widgets.sidebar.menu();

    menu.resolve_active(path)
        .and_then(|entry| menu.get(entry))
        .map_or(NOT_FOUND_TITLE, |entry| entry.title())
}
