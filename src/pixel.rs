//! Pixel identity and per-pixel animation state.

/// Fixed identity of a pixel on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelId {
    pub x: u16,
    pub y: u16,
}

impl PixelId {
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for PixelId {
    fn from((x, y): (u16, u16)) -> Self {
        PixelId { x, y }
    }
}

/// Animation state of a single pixel.
///
/// Only the panel mutates this; callers get read-only access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelState {
    id: PixelId,
    position: u8,
    pause: u8,
}

impl PixelState {
    pub(crate) const fn new(id: PixelId) -> Self {
        Self {
            id,
            position: 0,
            pause: 0,
        }
    }

    /// Returns the pixel's identity.
    #[inline]
    pub fn id(&self) -> PixelId {
        self.id
    }

    /// Returns the current position in the cyclic traversal.
    #[inline]
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Returns the ticks left before the next advance.
    #[inline]
    pub fn pause(&self) -> u8 {
        self.pause
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: u8) {
        self.position = position;
    }

    #[inline]
    pub(crate) fn set_pause(&mut self, pause: u8) {
        self.pause = pause;
    }

    /// Counts down one tick of pause. Returns false once the pause has run out.
    #[inline]
    pub(crate) fn count_down(&mut self) -> bool {
        if self.pause == 0 {
            return false;
        }
        self.pause -= 1;
        true
    }
}
