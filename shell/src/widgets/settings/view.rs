use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    Column, Row, Space, button, column, container, row, text, toggler,
};
use iced::{Border, Color, Element, Length, Theme, alignment};

use super::event::SettingsIntent;
use super::model::{
    PreferenceKey, SettingsTab, SettingsViewModel, ThemeOption,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, parse_hex_color};

const PANEL_PADDING: f32 = 24.0;
const PANEL_SPACING: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 22.0;
const SUBTITLE_FONT_SIZE: f32 = 13.0;

const TAB_FONT_SIZE: f32 = 13.0;
const TAB_PADDING: [f32; 2] = [6.0, 14.0];
const TAB_SPACING: f32 = 4.0;

const CARD_WIDTH: f32 = 140.0;
const CARD_PADDING: f32 = 10.0;
const CARD_SPACING: f32 = 12.0;
const SWATCH_SIZE: f32 = 20.0;
const SWATCH_SPACING: f32 = 6.0;

const ROW_SPACING: f32 = 14.0;
const ROW_WIDTH: f32 = 480.0;
const ROW_FONT_SIZE: f32 = 14.0;
const ROW_HINT_FONT_SIZE: f32 = 12.0;

/// Props for the settings panel view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsViewProps<'a> {
    pub(crate) vm: SettingsViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the settings panel: heading, tab strip and the active tab body.
pub(crate) fn view(
    props: SettingsViewProps<'_>,
) -> Element<'_, SettingsIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let dim = palette.dim_foreground;

    let heading = column![
        text("Settings").size(TITLE_FONT_SIZE),
        text("Manage your preferences and application appearance")
            .size(SUBTITLE_FONT_SIZE)
            .color(dim),
    ]
    .spacing(4.0);

    let body = match props.vm.tab {
        SettingsTab::Appearance => appearance_tab(props.vm, palette),
        tab => flags_tab(props.vm, tab, palette),
    };

    column![heading, tab_strip(props.vm.tab, palette), body]
        .spacing(PANEL_SPACING)
        .padding(PANEL_PADDING)
        .width(Length::Fill)
        .into()
}

fn tab_strip<'a>(
    active: SettingsTab,
    palette: &IcedColorPalette,
) -> Element<'a, SettingsIntent, Theme, iced::Renderer> {
    let tabs = SettingsTab::ALL.into_iter().fold(
        Row::new().spacing(TAB_SPACING),
        |strip, tab| {
            let selected = tab == active;
            let palette = palette.clone();
            strip.push(
                button(text(tab.title()).size(TAB_FONT_SIZE))
                    .padding(TAB_PADDING)
                    .on_press(SettingsIntent::SelectTab(tab))
                    .style(move |_, status| {
                        tab_button_style(&palette, status, selected)
                    }),
            )
        },
    );

    tabs.into()
}

fn tab_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    selected: bool,
) -> button::Style {
    let background = match (selected, status) {
        (true, _) => Some(palette.overlay.into()),
        (false, ButtonStatus::Hovered | ButtonStatus::Pressed) => {
            Some(palette.surface.into())
        },
        (false, _) => None,
    };
    let text_color = if selected {
        palette.foreground
    } else {
        palette.dim_foreground
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn appearance_tab<'a>(
    vm: SettingsViewModel<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, SettingsIntent, Theme, iced::Renderer> {
    let cards = vm.catalog.options().iter().fold(
        Row::new().spacing(CARD_SPACING),
        |cards, option| {
            let selected = option.name() == vm.selected_theme.name();
            cards.push(theme_card(option, selected, palette))
        },
    );

    let dark_mode = toggler(vm.dark_mode)
        .label("Dark mode")
        .on_toggle(SettingsIntent::SetDarkMode);

    column![
        text("Theme").size(ROW_FONT_SIZE),
        cards.wrap(),
        dark_mode,
    ]
    .spacing(ROW_SPACING)
    .into()
}

fn theme_card<'a>(
    option: &'a ThemeOption,
    selected: bool,
    palette: &IcedColorPalette,
) -> Element<'a, SettingsIntent, Theme, iced::Renderer> {
    let swatches = row![
        swatch(option.primary(), palette.primary),
        swatch(option.accent(), palette.accent),
    ]
    .spacing(SWATCH_SPACING);

    let content = column![swatches, text(option.name()).size(ROW_FONT_SIZE)]
        .spacing(8.0);

    let palette = palette.clone();
    button(content)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(CARD_PADDING)
        .on_press(SettingsIntent::SelectTheme {
            name: option.name().to_string(),
        })
        .style(move |_, status| {
            let border_color = if selected {
                palette.primary
            } else if matches!(status, ButtonStatus::Hovered) {
                palette.dim_foreground
            } else {
                palette.overlay
            };

            button::Style {
                background: Some(palette.surface.into()),
                text_color: palette.foreground,
                border: Border {
                    width: if selected { 2.0 } else { 1.0 },
                    color: border_color,
                    radius: 6.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

fn swatch<'a>(
    hex: &str,
    fallback: Color,
) -> Element<'a, SettingsIntent, Theme, iced::Renderer> {
    let color = parse_hex_color(hex).unwrap_or(fallback);

    container(Space::new())
        .width(Length::Fixed(SWATCH_SIZE))
        .height(Length::Fixed(SWATCH_SIZE))
        .style(move |_| container::Style {
            background: Some(color.into()),
            border: Border {
                radius: (SWATCH_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn flags_tab<'a>(
    vm: SettingsViewModel<'a>,
    tab: SettingsTab,
    palette: &IcedColorPalette,
) -> Element<'a, SettingsIntent, Theme, iced::Renderer> {
    PreferenceKey::ALL
        .into_iter()
        .filter(|key| key.tab() == tab)
        .fold(Column::new().spacing(ROW_SPACING), |rows, key| {
            rows.push(flag_row(key, vm.flag(key), palette.dim_foreground))
        })
        .into()
}

fn flag_row<'a>(
    key: PreferenceKey,
    value: bool,
    hint_color: Color,
) -> Element<'a, SettingsIntent, Theme, iced::Renderer> {
    let labels = column![
        text(key.label()).size(ROW_FONT_SIZE),
        text(key.description())
            .size(ROW_HINT_FONT_SIZE)
            .color(hint_color),
    ]
    .spacing(2.0)
    .width(Length::Fill);

    let switch = toggler(value).on_toggle(move |value| SettingsIntent::SetFlag {
        name: key.label().to_string(),
        value,
    });

    row![labels, switch]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fixed(ROW_WIDTH))
        .into()
}
