// SPDX-License-Identifier: MPL-2.0
//! Transient feedback bursts.
//!
//! A burst is a single glyph that rises from just below a fixed anchor
//! (horizontally centered, 60% down the window) while fading in, and is
//! removed once [`BURST_LIFETIME`] has elapsed. The layer only keeps
//! timestamps; [`FeedbackLayer::tick`] advances the clock and expires
//! bursts, and [`FeedbackLayer::view`] renders whatever is still alive.
//!
//! Nothing is scheduled until a visual surface exists: a fresh layer waits
//! for [`FeedbackLayer::mark_surface_ready`], and a [`FeedbackLayer::headless`]
//! layer never accepts bursts.

use crate::domain::feedback::{Symbol, BURST_LIFETIME};
use crate::ui::design_tokens::{motion, typography};
use iced::widget::{text, Column, Container, Space, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// One glyph on its way up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    symbol: Symbol,
    started_at: Instant,
}

impl Burst {
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Linear progress through the lifetime, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / BURST_LIFETIME.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= BURST_LIFETIME
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Pending,
    Ready,
    Headless,
}

/// Schedules and expires feedback bursts.
#[derive(Debug, Clone)]
pub struct FeedbackLayer {
    bursts: Vec<Burst>,
    surface: Surface,
    now: Instant,
}

impl Default for FeedbackLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackLayer {
    /// A layer waiting for its window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bursts: Vec::new(),
            surface: Surface::Pending,
            now: Instant::now(),
        }
    }

    /// A layer with no visual surface; [`spawn`](Self::spawn) is always a no-op.
    #[must_use]
    pub fn headless() -> Self {
        Self {
            surface: Surface::Headless,
            ..Self::new()
        }
    }

    /// Records that the window is up. Headless layers stay headless.
    pub fn mark_surface_ready(&mut self) {
        if self.surface == Surface::Pending {
            self.surface = Surface::Ready;
        }
    }

    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface == Surface::Ready
    }

    /// Starts a burst at `now`. Returns `false` when there is nowhere to draw it.
    pub fn spawn(&mut self, symbol: Symbol, now: Instant) -> bool {
        if !self.has_surface() {
            return false;
        }
        self.now = self.now.max(now);
        self.bursts.push(Burst {
            symbol,
            started_at: now,
        });
        true
    }

    /// Advances the layer clock and drops expired bursts.
    pub fn tick(&mut self, now: Instant) {
        self.now = self.now.max(now);
        let now = self.now;
        self.bursts.retain(|burst| !burst.is_expired(now));
    }

    /// Whether frames are needed to animate live bursts.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.bursts.is_empty()
    }

    pub fn bursts(&self) -> impl Iterator<Item = &Burst> {
        self.bursts.iter()
    }

    /// Full-window overlay with every live burst, or `None` when idle.
    pub fn view<'a, Message: 'a>(&'a self) -> Option<Element<'a, Message>> {
        if self.bursts.is_empty() {
            return None;
        }

        let glyphs = self.bursts.iter().map(|burst| {
            let eased = ease(burst.progress(self.now));
            Container::new(
                Text::new(burst.symbol().glyph())
                    .size(typography::BURST)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(Color {
                            a: eased,
                            ..Color::BLACK
                        }),
                    }),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(Padding::ZERO.top(motion::BURST_RISE * (1.0 - eased)))
            .into()
        });

        let zone = Stack::with_children(glyphs)
            .width(Length::Fill)
            .height(Length::Fixed(motion::BURST_RISE + typography::BURST * 1.5));

        Some(
            Column::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(Space::new().height(Length::FillPortion(motion::BURST_ANCHOR_PORTION)))
                .push(zone)
                .push(Space::new().height(Length::FillPortion(motion::BURST_TAIL_PORTION)))
                .into(),
        )
    }
}

/// Smoothstep easing; maps `0..=1` onto `0..=1`.
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
