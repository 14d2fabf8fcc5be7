// SPDX-License-Identifier: MPL-2.0
//! Toast widgets: the individual card and the full-window overlay.
//!
//! The overlay is a stack of one aligned layer per active toast, positioned
//! with the offsets and insets computed by the layout engine. Everything
//! visual (colors, borders, timer bar, decorative animations) is driven by
//! the toast's [`ToastStyle`]; none of it feeds back into lifecycle logic.

use super::layout::{self, ContainerConfig, HorizontalAnchor};
use super::lifecycle::{timer_bar_span, Phase};
use super::manager::{Manager, Message};
use super::notification::{Position, TimerAnimation, ToastStyle};
use super::satellite::{orbit_phase, BackgroundBars, SatelliteOrbit};
use super::store::ActiveToast;
use crate::ui::design_tokens::{shadow, sizing, spacing};
use crate::ui::icons;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, mouse, Border, Color, Element, Font, Length, Padding, Rectangle, Renderer, Theme};
use std::time::Instant;

/// Vertical inset of each group's first toast from its anchored screen edge.
/// Presentation only; the layout engine's offsets start at zero (plus the
/// top-group start margin) and this constant is added uniformly on top.
const EDGE_VERTICAL_MARGIN: f32 = spacing::MD;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders the toast overlay with all active toasts across all corners.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        now: Instant,
        viewport_width: f32,
    ) -> Element<'a, Message> {
        let container_config = *manager.container();
        let mut layers: Vec<Element<'a, Message>> = Vec::new();

        for position in Position::ALL {
            let toasts = manager.toasts(position);
            let offsets = manager.offsets(position);
            for (toast, offset) in toasts.iter().zip(offsets) {
                layers.push(positioned_layer(
                    toast,
                    *offset,
                    &container_config,
                    now,
                    viewport_width,
                ));
            }
        }

        if layers.is_empty() {
            // Empty overlay that takes no space and swallows no input.
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }

    /// Renders a single toast card.
    pub fn view<'a>(
        toast: &'a ActiveToast,
        now: Instant,
        viewport_width: f32,
        container_config: &ContainerConfig,
    ) -> Element<'a, Message> {
        let config = toast.config();
        let style = &config.style;
        let is_rtl = config.is_rtl;

        let icon_stack = icon_container(toast, now);
        let texts = text_column(toast);
        let close = close_button(toast);

        // Layout: [icon] [texts] [close], mirrored for RTL.
        let mut content_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if is_rtl {
            content_row = content_row.push(close).push(texts).push(icon_stack);
        } else {
            content_row = content_row.push(icon_stack).push(texts).push(close);
        }

        let mut body = Column::new().spacing(spacing::XS).push(content_row);
        if config.longevity.is_some() {
            body = body.push(
                TimerBar::new(
                    toast.lifecycle().timer_fraction(now),
                    config.timer_animation,
                    is_rtl,
                    style.timer_bg_color,
                    style.timer_color,
                )
                .into_element(),
            );
        }

        let padding = if is_rtl {
            style.padding_rtl
        } else {
            style.padding_ltr
        };

        let body_with_bars: Element<'a, Message> = if style.disable_background_bars {
            body.into()
        } else {
            Stack::with_children(vec![
                BackgroundBars::new(
                    style.accent_color,
                    orbit_phase(toast.age(now).as_secs_f32()),
                    style.bars,
                )
                .into_element(),
                body.into(),
            ])
            .into()
        };

        let max_width = container_config.max_width.resolve(viewport_width);
        let body_style = body_container_style(style);
        Container::new(body_with_bars)
            .width(Length::Shrink)
            .max_width(max_width)
            .padding(padding)
            .style(move |_theme: &Theme| body_style)
            .into()
    }
}

/// One full-window layer positioning a single toast at its computed offset.
fn positioned_layer<'a>(
    toast: &'a ActiveToast,
    offset: f32,
    container_config: &ContainerConfig,
    now: Instant,
    viewport_width: f32,
) -> Element<'a, Message> {
    let config = toast.config();
    let position = toast.position();
    let anchor = layout::horizontal_anchor(position);
    let direction = layout::slide_direction(position, config.is_rtl);
    let progress = toast.lifecycle().slide_progress(now);
    let inset = layout::slide_inset(
        progress,
        container_config.horizontal_margin_adjustment,
        anchor,
        direction,
    );

    let vertical = EDGE_VERTICAL_MARGIN + offset;
    let padding = match (anchor, position.is_top()) {
        (HorizontalAnchor::Right, true) => Padding::ZERO.right(inset).top(vertical),
        (HorizontalAnchor::Right, false) => Padding::ZERO.right(inset).bottom(vertical),
        (HorizontalAnchor::Left, true) => Padding::ZERO.left(inset).top(vertical),
        (HorizontalAnchor::Left, false) => Padding::ZERO.left(inset).bottom(vertical),
    };

    let align_x = match anchor {
        HorizontalAnchor::Right => alignment::Horizontal::Right,
        HorizontalAnchor::Left => alignment::Horizontal::Left,
    };
    let align_y = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };

    Container::new(Toast::view(toast, now, viewport_width, container_config))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(padding)
        .into()
}

/// The type-icon container with its orbit animation layered per
/// `satellite_in_front`.
fn icon_container<'a>(toast: &'a ActiveToast, now: Instant) -> Element<'a, Message> {
    let style = &toast.config().style;

    let handle = match &style.custom_icon {
        Some(markup) => icons::from_markup(markup),
        None => icons::satellite(),
    };
    let icon = icons::sized(handle, sizing::ICON_MD, style.icon_color);

    let icon_border_color = style.icon_container_border_color;
    let icon_border_width = style.icon_container_border_width;
    let icon_border_radius = style.icon_container_border_radius;
    let icon_box: Element<'a, Message> = Container::new(icon)
        .width(Length::Fixed(sizing::TYPE_ICON_CONTAINER))
        .height(Length::Fixed(sizing::TYPE_ICON_CONTAINER))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            border: Border {
                color: icon_border_color,
                width: icon_border_width,
                radius: icon_border_radius.into(),
            },
            ..container::Style::default()
        })
        .into();

    if !style.show_satellite_animation {
        return apply_icon_offsets(icon_box, style);
    }

    let orbit = SatelliteOrbit::new(
        style.satellite_color,
        orbit_phase(toast.age(now).as_secs_f32()),
        sizing::TYPE_ICON_CONTAINER,
    )
    .into_element();

    let layers = if style.satellite_in_front {
        vec![icon_box, orbit]
    } else {
        vec![orbit, icon_box]
    };
    apply_icon_offsets(
        Stack::with_children(layers)
            .width(Length::Fixed(sizing::TYPE_ICON_CONTAINER))
            .height(Length::Fixed(sizing::TYPE_ICON_CONTAINER))
            .into(),
        style,
    )
}

/// Applies the configured icon offsets. Offsets are carried verbatim from the
/// caller; only the displaceable directions of this layout are honored.
fn apply_icon_offsets<'a>(icon: Element<'a, Message>, style: &ToastStyle) -> Element<'a, Message> {
    if style.icon_x_offset == 0.0 && style.icon_y_offset == 0.0 {
        return icon;
    }
    let padding = Padding::ZERO
        .left(style.icon_x_offset.max(0.0))
        .top(style.icon_y_offset.max(0.0));
    Container::new(icon).padding(padding).into()
}

/// Title and content stacked vertically, aligned per reading direction.
fn text_column<'a>(toast: &'a ActiveToast) -> Element<'a, Message> {
    let config = toast.config();
    let style = &config.style;

    let align = if config.is_rtl {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    };

    let title_color = style.title_color;
    let title = Text::new(config.title.as_str())
        .size(style.title_size)
        .font(Font {
            weight: style.title_weight,
            ..Font::DEFAULT
        })
        .style(move |_theme: &Theme| text::Style {
            color: Some(title_color),
        });

    let content_color = style.content_color;
    let content = Text::new(config.content.as_str())
        .size(style.content_size)
        .font(Font {
            weight: style.content_weight,
            ..Font::DEFAULT
        })
        .style(move |_theme: &Theme| text::Style {
            color: Some(content_color),
        });

    Column::new()
        .spacing(spacing::XXS)
        .align_x(align)
        .width(Length::Fill)
        .push(title)
        .push(content)
        .into()
}

/// The close button, wired to [`Message::Dismiss`] with hover styling from
/// the toast's style fields.
fn close_button<'a>(toast: &'a ActiveToast) -> Element<'a, Message> {
    let style = &toast.config().style;
    let id = toast.id();

    let bg = style.close_bg_color;
    let fg = style.close_fg_color;
    let hover_bg = style.close_hover_bg_color;
    let hover_fg = style.close_hover_fg_color;
    let outline_color = style.close_outline_color;
    let outline_width = style.close_outline_width;
    let border_radius = style.close_border_radius;

    button(icons::sized(icons::cross(), sizing::ICON_SM, fg))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(move |_theme: &Theme, status: button::Status| {
            let (background, text_color) = match status {
                button::Status::Hovered | button::Status::Pressed => (hover_bg, hover_fg),
                button::Status::Active | button::Status::Disabled => (bg, fg),
            };
            button::Style {
                background: Some(iced::Background::Color(background)),
                text_color,
                border: Border {
                    color: outline_color,
                    width: outline_width,
                    radius: border_radius.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        })
        .into()
}

fn body_container_style(style: &ToastStyle) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(style.background_color)),
        border: Border {
            color: style.body_border_color,
            width: style.body_border_width,
            radius: style.body_border_radius.into(),
        },
        shadow: shadow::MD,
        text_color: Some(style.content_color),
        ..container::Style::default()
    }
}

/// Canvas program for the timer bar, so the span fractions map to exact
/// pixels regardless of the final card width.
struct TimerBar {
    cache: Cache,
    fraction: f32,
    animation: TimerAnimation,
    is_rtl: bool,
    bg: Color,
    fill: Color,
}

impl TimerBar {
    fn new(fraction: f32, animation: TimerAnimation, is_rtl: bool, bg: Color, fill: Color) -> Self {
        Self {
            cache: Cache::default(),
            fraction,
            animation,
            is_rtl,
            bg,
            fill,
        }
    }

    fn into_element<'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TIMER_BAR_HEIGHT))
            .into()
    }
}

impl canvas::Program<Message> for TimerBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let radius = frame.height() / 2.0;

                let track = Path::rounded_rectangle(
                    iced::Point::ORIGIN,
                    frame.size(),
                    radius.into(),
                );
                frame.fill(&track, self.bg);

                let (start, width) = timer_bar_span(self.fraction, self.animation, self.is_rtl);
                if width > 0.0 {
                    let fill = Path::rounded_rectangle(
                        iced::Point::new(start * frame.width(), 0.0),
                        iced::Size::new(width * frame.width(), frame.height()),
                        radius.into(),
                    );
                    frame.fill(&fill, self.fill);
                }
            });

        vec![geometry]
    }
}

/// Whether the overlay needs animation-cadence redraws right now: true while
/// any toast is sliding or any visible toast has a depleting timer.
#[must_use]
pub fn is_animating(manager: &Manager) -> bool {
    Position::ALL.into_iter().any(|position| {
        manager.toasts(position).iter().any(|toast| {
            !matches!(toast.lifecycle().phase(), Phase::Visible)
                || toast.config().longevity.is_some()
                || toast.config().style.show_satellite_animation
                || !toast.config().style.disable_background_bars
        })
    })
}
