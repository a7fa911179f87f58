use iced::widget::button::Status as ButtonStatus;
use iced::widget::text::Wrapping;
use iced::widget::{Column, Space, button, container, mouse_area, row, svg, text};
use iced::{Border, Element, Length, Theme, alignment};
use shell_ui_menu::{EntryRef, MenuEntry};

use super::event::FlyoutIntent;
use super::model::FlyoutViewModel;
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::sidebar::model::FLYOUT_WIDTH;

const ROW_HEIGHT: f32 = 44.0;
const CHILD_ROW_HEIGHT: f32 = 32.0;
const ROW_PADDING_X: f32 = 12.0;
const CHILD_INDENT: f32 = 28.0;
const FONT_SIZE: f32 = 14.0;
const CHILD_FONT_SIZE: f32 = 13.0;
const CHEVRON_SIZE: f32 = 14.0;

/// Props for the flyout view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlyoutViewProps<'a> {
    pub(crate) vm: FlyoutViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render entry labels aligned with the rail icons, with group dropdowns.
pub(crate) fn view(
    props: FlyoutViewProps<'_>,
) -> Element<'_, FlyoutIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let rows = props.vm.menu.entries().iter().enumerate().fold(
        Column::new().spacing(0).width(Length::Fill),
        |column, (index, entry)| {
            if entry.is_group() {
                push_group(column, props.vm, index, entry, palette)
            } else {
                let active = props.vm.active == Some(EntryRef::Top { index });
                column.push(entry_row(entry, active, 0.0, palette))
            }
        },
    );

    let panel = container(rows)
        .width(Length::Fixed(FLYOUT_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            border: Border {
                width: 1.0,
                color: palette.overlay,
                radius: 0.0.into(),
            },
            ..Default::default()
        });

    mouse_area(panel)
        .on_exit(FlyoutIntent::PointerExited)
        .into()
}

fn push_group<'a>(
    column: Column<'a, FlyoutIntent, Theme, iced::Renderer>,
    vm: FlyoutViewModel<'a>,
    parent: usize,
    group: &'a MenuEntry,
    palette: &'a IcedColorPalette,
) -> Column<'a, FlyoutIntent, Theme, iced::Renderer> {
    let is_open = vm.is_open(group.title());
    let column = column.push(group_header(group, is_open, palette));

    if !is_open {
        return column;
    }

    group
        .sub_items()
        .iter()
        .enumerate()
        .fold(column, |column, (index, child)| {
            let active = vm.active == Some(EntryRef::Sub { parent, index });
            column.push(entry_row(child, active, CHILD_INDENT, palette))
        })
}

fn group_header<'a>(
    group: &'a MenuEntry,
    is_open: bool,
    palette: &'a IcedColorPalette,
) -> Element<'a, FlyoutIntent, Theme, iced::Renderer> {
    let chevron = if is_open {
        icons::CHEVRON_DOWN
    } else {
        icons::CHEVRON_RIGHT
    };
    let chevron_color = palette.dim_foreground;

    let chevron_svg = svg::Svg::new(svg::Handle::from_memory(chevron))
        .width(Length::Fixed(CHEVRON_SIZE))
        .height(Length::Fixed(CHEVRON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(chevron_color),
        });

    let content = row![
        label(group.title(), FONT_SIZE),
        Space::new().width(Length::Fill),
        chevron_svg,
    ]
    .align_y(alignment::Vertical::Center)
    .padding([0.0, ROW_PADDING_X]);

    button(content)
        .on_press(FlyoutIntent::GroupToggled {
            title: group.title().to_string(),
            open: !is_open,
        })
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .style(move |_, status| row_style(palette, status, false))
        .into()
}

fn entry_row<'a>(
    entry: &'a MenuEntry,
    is_active: bool,
    indent: f32,
    palette: &'a IcedColorPalette,
) -> Element<'a, FlyoutIntent, Theme, iced::Renderer> {
    let (height, size) = if indent > 0.0 {
        (CHILD_ROW_HEIGHT, CHILD_FONT_SIZE)
    } else {
        (ROW_HEIGHT, FONT_SIZE)
    };

    let content = container(label(entry.title(), size))
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ROW_PADDING_X + indent]);

    let on_press = entry.path().map(|path| FlyoutIntent::EntryPressed {
        path: path.to_string(),
    });

    button(content)
        .on_press_maybe(on_press)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(move |_, status| row_style(palette, status, is_active))
        .into()
}

fn label<'a>(
    title: &'a str,
    size: f32,
) -> Element<'a, FlyoutIntent, Theme, iced::Renderer> {
    text(title).size(size).wrapping(Wrapping::None).into()
}

fn row_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    is_active: bool,
) -> button::Style {
    let background = if is_active {
        Some(palette.overlay.into())
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => {
                Some(palette.overlay.into())
            },
            _ => None,
        }
    };
    let text_color = if is_active {
        palette.primary
    } else {
        palette.foreground
    };

    button::Style {
        background,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}
