use iced::widget::{Column, Space, button, container, mouse_area, row, svg};
use iced::{Border, Color, Element, Length, Theme, alignment};
use shell_ui_menu::MenuEntry;

use super::event::{HoverSurface, SidebarIntent};
use super::model::{SIDEBAR_RAIL_WIDTH, SidebarViewModel};
use crate::shared::ui::icons;
use crate::shared::ui::theme::ThemeProps;

const RAIL_BUTTON_SIZE: f32 = 44.0;
const RAIL_ICON_SIZE: f32 = 20.0;
const RAIL_BUTTON_PADDING: f32 = 8.0;
const ACTIVE_BORDER_WIDTH: f32 = 2.0;

/// Props for the icon rail view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the icon rail. The flyout is composed beside it by the app view.
/// Group icons highlight while one of their children is the active route.
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let buttons = props.vm.menu.entries().iter().enumerate().fold(
        Column::new().spacing(0).width(Length::Fill),
        |rail, (index, entry)| {
            rail.push(rail_button(
                entry,
                props.vm.is_rail_active(index),
                props.theme,
            ))
        },
    );

    let rail = container(buttons)
        .width(Length::Fixed(SIDEBAR_RAIL_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            ..Default::default()
        });

    mouse_area(rail)
        .on_enter(SidebarIntent::SurfaceEntered(HoverSurface::Rail))
        .on_exit(SidebarIntent::SurfaceExited(HoverSurface::Rail))
        .into()
}

fn rail_button<'a>(
    entry: &'a MenuEntry,
    is_active: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let base_color = palette.dim_foreground;
    let hover_color = palette.accent;
    let active_color = palette.primary;

    let icon_svg = svg::Svg::new(svg::Handle::from_memory(icons::menu_icon(
        entry.icon(),
    )))
    .width(Length::Fixed(RAIL_ICON_SIZE))
    .height(Length::Fixed(RAIL_ICON_SIZE))
    .style(move |_, status| {
        let color = if is_active {
            active_color
        } else if status == svg::Status::Hovered {
            hover_color
        } else {
            base_color
        };

        svg::Style { color: Some(color) }
    });

    let icon_container = container(icon_svg)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(RAIL_BUTTON_PADDING);

    let border_color = if is_active {
        palette.primary
    } else {
        Color::TRANSPARENT
    };

    let border_strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(border_color.into()),
            ..Default::default()
        });

    let content = row![border_strip, icon_container]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    // Groups open from the flyout only.
    let on_press = entry
        .path()
        .filter(|_| !entry.is_group())
        .map(|path| SidebarIntent::EntryPressed {
            path: path.to_string(),
        });

    button(content)
        .on_press_maybe(on_press)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(RAIL_BUTTON_SIZE))
        .style(|_, _| button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        })
        .into()
}
