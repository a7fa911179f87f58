use iced::widget::text::Wrapping;
use iced::widget::{Column, Space, button, container, row, text};
use iced::{Border, Element, Length, Theme, alignment};

use super::event::ToastsIntent;
use super::model::{NotificationKind, Toast, ToastsViewModel};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const TOAST_WIDTH: f32 = 320.0;
const TOAST_PADDING: f32 = 12.0;
const TOAST_SPACING: f32 = 8.0;
const TOAST_MARGIN: f32 = 16.0;
const TOAST_FONT_SIZE: f32 = 13.0;
const TOAST_STRIPE_WIDTH: f32 = 3.0;

/// Props for the toast stack view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastsViewProps<'a> {
    pub(crate) vm: ToastsViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render visible toasts stacked in the bottom-right corner.
pub(crate) fn view(
    props: ToastsViewProps<'_>,
) -> Element<'_, ToastsIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let stack = props
        .vm
        .toasts
        .iter()
        .fold(Column::new().spacing(TOAST_SPACING), |column, toast| {
            column.push(toast_card(toast, palette))
        });

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(TOAST_MARGIN)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn toast_card<'a>(
    toast: &'a Toast,
    palette: &IcedColorPalette,
) -> Element<'a, ToastsIntent, Theme, iced::Renderer> {
    let stripe_color = match toast.notification.kind() {
        NotificationKind::Success => palette.success,
        NotificationKind::Error => palette.danger,
    };
    let background = palette.surface;
    let border_color = palette.overlay;
    let foreground = palette.foreground;
    let dim = palette.dim_foreground;

    let stripe = container(Space::new())
        .width(Length::Fixed(TOAST_STRIPE_WIDTH))
        .height(Length::Fixed(TOAST_FONT_SIZE + 4.0))
        .style(move |_| container::Style {
            background: Some(stripe_color.into()),
            ..Default::default()
        });

    let message = text(toast.notification.message())
        .size(TOAST_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::Word);

    let close = button(text("×").size(TOAST_FONT_SIZE))
        .on_press(ToastsIntent::Dismiss { id: toast.id })
        .padding(0)
        .style(move |_, _| button::Style {
            background: None,
            text_color: dim,
            ..Default::default()
        });

    let content = row![stripe, message, close]
        .spacing(TOAST_SPACING)
        .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(TOAST_PADDING)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: Border {
                width: 1.0,
                color: border_color,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
}
