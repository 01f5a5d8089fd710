//! Ambient fade animation across a panel of pixels.
//!
//! Provides [`LogicPanel`], which owns the precomputed [`FadePalette`] and the
//! state of every pixel, and advances them once per tick. Each pixel walks
//! the mirrored palette traversal independently: it holds each fade color for
//! a fixed number of ticks and lingers on key colors for a random number of
//! ticks, so the panel never pulses in lockstep. Also defines the
//! [`DrawPixel`] trait for hardware abstraction.

use crate::color::Rgb565;
use crate::fade::FadePalette;
use crate::pixel::{PixelId, PixelState};
use crate::random::{Rand8, RandomSource};
use crate::types::PanelError;
use heapless::Vec;

/// Default upper bound (exclusive) of the random pause on key colors.
pub const DEFAULT_KEY_PAUSE: u8 = 40;

/// Default pause on interpolated colors.
pub const DEFAULT_FADE_PAUSE: u8 = 1;

/// Trait for abstracting pixel output.
///
/// Implement this for your display or LED driver. Called synchronously from
/// [`LogicPanel::initialize`] and [`LogicPanel::tick`]; it must not block.
/// Handle any hardware errors internally - this method cannot fail.
pub trait DrawPixel {
    /// Shows `color` on `pixel`.
    fn draw(&mut self, pixel: PixelId, color: Rgb565);
}

impl<F> DrawPixel for F
where
    F: FnMut(PixelId, Rgb565),
{
    #[inline]
    fn draw(&mut self, pixel: PixelId, color: Rgb565) {
        self(pixel, color)
    }
}

/// Fades a fixed set of pixels through a palette of key colors.
///
/// # Type Parameters
/// * `D` - Draw implementation type
/// * `R` - Random source type
/// * `COLORS` - Maximum palette size (key colors plus transitions)
/// * `PIXELS` - Maximum number of pixels
pub struct LogicPanel<D: DrawPixel, R: RandomSource, const COLORS: usize, const PIXELS: usize> {
    draw: D,
    rng: R,
    palette: FadePalette<COLORS>,
    pixels: Vec<PixelState, PIXELS>,
    key_pause: u8,
    fade_pause: u8,
}

impl<D, R, const COLORS: usize, const PIXELS: usize> LogicPanel<D, R, COLORS, PIXELS>
where
    D: DrawPixel,
    R: RandomSource,
{
    /// Creates a panel with default pauses.
    ///
    /// Nothing is drawn until [`initialize`](Self::initialize) is called.
    ///
    /// Positions are `u8`, so the palette is limited to 128 colors: with `k`
    /// key colors and `t` transitions, `2 * (k + (k - 1) * t) - 2` must not
    /// exceed 255.
    ///
    /// # Errors
    /// * `NoKeyColors` - `key_colors` is empty
    /// * `CapacityExceeded` - the palette needs more than `COLORS` entries or
    ///   more than `PIXELS` pixels were given
    /// * `TooManyColors` - the mirrored traversal exceeds 255 positions
    pub fn new(
        key_colors: &[Rgb565],
        num_transitions: u8,
        pixels: &[PixelId],
        draw: D,
        rng: R,
    ) -> Result<Self, PanelError> {
        let palette = FadePalette::build(key_colors, num_transitions)?;

        if pixels.len() > PIXELS {
            return Err(PanelError::CapacityExceeded {
                required: pixels.len(),
                capacity: PIXELS,
            });
        }
        let pixels = pixels.iter().copied().map(PixelState::new).collect();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "logic panel: {} key colors, {} colors, {} both ways",
            key_colors.len(),
            palette.len(),
            palette.num_colors_both_ways()
        );

        Ok(Self {
            draw,
            rng,
            palette,
            pixels,
            key_pause: DEFAULT_KEY_PAUSE,
            fade_pause: DEFAULT_FADE_PAUSE,
        })
    }

    /// Scatters every pixel to a random position and pause, then draws it.
    ///
    /// Call once at startup, before the first [`tick`](Self::tick).
    pub fn initialize(&mut self) {
        let both_ways = self.palette.num_colors_both_ways();

        for pixel in &mut self.pixels {
            pixel.set_position(self.rng.below(both_ways));
            pixel.set_pause(self.rng.next_u8());
            self.draw
                .draw(pixel.id(), self.palette.color_at(pixel.position()));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("logic panel: initialized {} pixels", self.pixels.len());
    }

    /// Advances the animation by one frame.
    ///
    /// Pixels still pausing count down and are not redrawn. Every other pixel
    /// steps to the next position, is drawn, and takes a new pause: random
    /// below `key_pause` on a key color, `fade_pause` otherwise.
    pub fn tick(&mut self) {
        for pixel in &mut self.pixels {
            if pixel.count_down() {
                continue;
            }

            let position = self.palette.next_position(pixel.position());
            pixel.set_position(position);
            self.draw.draw(pixel.id(), self.palette.color_at(position));

            let pause = if self.palette.is_key_position(position) {
                #[cfg(feature = "defmt")]
                defmt::trace!("pixel {}: key color at {}", pixel.id(), position);
                self.rng.below(self.key_pause)
            } else {
                self.fade_pause
            };
            pixel.set_pause(pause);
        }
    }

    /// Returns the precomputed palette.
    #[inline]
    pub fn palette(&self) -> &FadePalette<COLORS> {
        &self.palette
    }

    /// Returns the state of every pixel, in draw order.
    #[inline]
    pub fn pixels(&self) -> &[PixelState] {
        &self.pixels
    }

    /// Returns the number of pixels on the panel.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the exclusive upper bound of the pause on key colors.
    #[inline]
    pub fn key_pause(&self) -> u8 {
        self.key_pause
    }

    /// Sets the key color pause bound. Applies from the next key color reached.
    #[inline]
    pub fn set_key_pause(&mut self, key_pause: u8) {
        self.key_pause = key_pause;
    }

    /// Returns the pause on interpolated colors.
    #[inline]
    pub fn fade_pause(&self) -> u8 {
        self.fade_pause
    }

    /// Sets the fade pause. Applies from the next interpolated color reached.
    #[inline]
    pub fn set_fade_pause(&mut self, fade_pause: u8) {
        self.fade_pause = fade_pause;
    }

    /// Returns a reference to the draw implementation.
    #[inline]
    pub fn draw(&self) -> &D {
        &self.draw
    }

    /// Returns a mutable reference to the draw implementation.
    #[inline]
    pub fn draw_mut(&mut self) -> &mut D {
        &mut self.draw
    }

    /// Returns a mutable reference to the random source, e.g. to reseed it.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

/// Builder for constructing validated panels.
///
/// Entries beyond the builder's capacity are counted and reported as
/// `CapacityExceeded` by [`build`](Self::build).
#[derive(Debug)]
pub struct PanelBuilder<const COLORS: usize, const PIXELS: usize> {
    key_colors: Vec<Rgb565, COLORS>,
    pixels: Vec<PixelId, PIXELS>,
    requested_keys: usize,
    requested_pixels: usize,
    num_transitions: u8,
    key_pause: u8,
    fade_pause: u8,
    seed: u16,
}

impl<const COLORS: usize, const PIXELS: usize> PanelBuilder<COLORS, PIXELS> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            key_colors: Vec::new(),
            pixels: Vec::new(),
            requested_keys: 0,
            requested_pixels: 0,
            num_transitions: 0,
            key_pause: DEFAULT_KEY_PAUSE,
            fade_pause: DEFAULT_FADE_PAUSE,
            seed: crate::random::DEFAULT_SEED,
        }
    }

    /// Appends a key color.
    pub fn key_color(mut self, color: Rgb565) -> Self {
        self.requested_keys += 1;
        let _ = self.key_colors.push(color);
        self
    }

    /// Appends several key colors, in order.
    pub fn key_colors<I: IntoIterator<Item = Rgb565>>(self, colors: I) -> Self {
        colors.into_iter().fold(self, Self::key_color)
    }

    /// Sets the number of interpolated colors between consecutive key colors.
    ///
    /// Default is 0. The resulting palette must stay within 128 colors
    /// (a mirrored traversal of at most 255 positions), otherwise `build`
    /// returns `TooManyColors`.
    pub fn transitions(mut self, num_transitions: u8) -> Self {
        self.num_transitions = num_transitions;
        self
    }

    /// Appends a pixel.
    pub fn pixel(mut self, id: PixelId) -> Self {
        self.requested_pixels += 1;
        let _ = self.pixels.push(id);
        self
    }

    /// Appends several pixels, in draw order.
    pub fn pixels<I: IntoIterator<Item = PixelId>>(self, ids: I) -> Self {
        ids.into_iter().fold(self, Self::pixel)
    }

    /// Appends a `width` x `height` grid of pixels, row by row.
    pub fn grid(self, width: u16, height: u16) -> Self {
        let ids = (0..height).flat_map(move |y| (0..width).map(move |x| PixelId::new(x, y)));
        self.pixels(ids)
    }

    /// Sets the exclusive upper bound of the random pause on key colors.
    ///
    /// Default is [`DEFAULT_KEY_PAUSE`].
    pub fn key_pause(mut self, key_pause: u8) -> Self {
        self.key_pause = key_pause;
        self
    }

    /// Sets the pause on interpolated colors.
    ///
    /// Default is [`DEFAULT_FADE_PAUSE`].
    pub fn fade_pause(mut self, fade_pause: u8) -> Self {
        self.fade_pause = fade_pause;
        self
    }

    /// Sets the seed of the built-in [`Rand8`] used by [`build`](Self::build).
    pub fn seed(mut self, seed: u16) -> Self {
        self.seed = seed;
        self
    }

    /// Builds a panel driven by a [`Rand8`] seeded from [`seed`](Self::seed).
    ///
    /// # Errors
    /// See [`build_with_rng`](Self::build_with_rng).
    pub fn build<D: DrawPixel>(
        self,
        draw: D,
    ) -> Result<LogicPanel<D, Rand8, COLORS, PIXELS>, PanelError> {
        let rng = Rand8::new(self.seed);
        self.build_with_rng(draw, rng)
    }

    /// Builds a panel driven by the given random source.
    ///
    /// # Errors
    /// * `NoKeyColors` - No key colors were added
    /// * `CapacityExceeded` - More key colors or pixels were added than fit,
    ///   or the palette needs more than `COLORS` entries
    /// * `TooManyColors` - The mirrored traversal exceeds 255 positions
    pub fn build_with_rng<D: DrawPixel, R: RandomSource>(
        self,
        draw: D,
        rng: R,
    ) -> Result<LogicPanel<D, R, COLORS, PIXELS>, PanelError> {
        if self.requested_keys > COLORS {
            return Err(PanelError::CapacityExceeded {
                required: self.requested_keys,
                capacity: COLORS,
            });
        }
        if self.requested_pixels > PIXELS {
            return Err(PanelError::CapacityExceeded {
                required: self.requested_pixels,
                capacity: PIXELS,
            });
        }

        let mut panel = LogicPanel::new(
            &self.key_colors,
            self.num_transitions,
            &self.pixels,
            draw,
            rng,
        )?;
        panel.set_key_pause(self.key_pause);
        panel.set_fade_pause(self.fade_pause);
        Ok(panel)
    }
}

impl<const COLORS: usize, const PIXELS: usize> Default for PanelBuilder<COLORS, PIXELS> {
    fn default() -> Self {
        Self::new()
    }
}
