// SPDX-License-Identifier: MPL-2.0
//! Canvas programs for the decorative toast animations.
//!
//! Two programs live here: the orbiting satellite dot drawn around the
//! type-icon container, and the animated background bars inside the toast
//! body. Both are pure functions of a phase angle supplied by the caller, so
//! redraw cadence is owned by the application tick.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Orbiting dot animation around the type-icon container.
pub struct SatelliteOrbit {
    cache: Cache,
    /// Orbit angle in radians.
    phase: f32,
    color: Color,
    size: f32,
}

impl SatelliteOrbit {
    #[must_use]
    pub fn new(color: Color, phase: f32, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            phase,
            color,
            size,
        }
    }

    /// Creates a Canvas widget from this orbit.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for SatelliteOrbit {
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
                let center = frame.center();
                let orbit_radius = frame.width().min(frame.height()) / 2.0 - 3.0;

                // Faint orbit ring
                let ring = Path::circle(center, orbit_radius);
                frame.stroke(
                    &ring,
                    Stroke::default().with_width(1.0).with_color(Color {
                        a: 0.35,
                        ..self.color
                    }),
                );

                // The satellite itself: a dot on the ring, offset so the
                // orbit starts at the top.
                let angle = self.phase - PI / 2.0;
                let dot_center = Point::new(
                    center.x + orbit_radius * angle.cos(),
                    center.y + orbit_radius * angle.sin(),
                );
                let dot = Path::circle(dot_center, 2.5);
                frame.fill(&dot, self.color);
            });

        vec![geometry]
    }
}

/// Animated vertical bars drawn behind the toast content.
pub struct BackgroundBars {
    cache: Cache,
    phase: f32,
    color: Color,
    bars: u16,
}

impl BackgroundBars {
    #[must_use]
    pub fn new(color: Color, phase: f32, bars: u16) -> Self {
        Self {
            cache: Cache::default(),
            phase,
            color,
            bars: bars.max(1),
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for BackgroundBars {
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
                let count = self.bars as usize;
                let slot = frame.width() / count as f32;
                let bar_width = (slot * 0.5).max(1.0);

                #[allow(clippy::cast_precision_loss)]
                for i in 0..count {
                    let t = i as f32 / count as f32;
                    // Each bar oscillates out of phase with its neighbors.
                    let wave = ((self.phase + t * TAU).sin() + 1.0) / 2.0;
                    let height = frame.height() * (0.25 + 0.75 * wave);
                    let x = slot * i as f32 + (slot - bar_width) / 2.0;

                    let bar = Path::rectangle(
                        Point::new(x, frame.height() - height),
                        iced::Size::new(bar_width, height),
                    );
                    frame.fill(
                        &bar,
                        Color {
                            a: 0.12,
                            ..self.color
                        },
                    );
                }
            });

        vec![geometry]
    }
}

/// Orbit angle for a toast of the given age. One revolution every 4 seconds.
#[must_use]
pub fn orbit_phase(age_secs: f32) -> f32 {
    (age_secs / 4.0) * TAU
}
