//! Packed 16-bit RGB565 colors.
//!
//! Every color the panel handles is stored in the reduced-depth wire format
//! used by common small displays and pixel drivers: 5 bits red, 6 bits green
//! and 5 bits blue, packed as `RRRRR GGGGGG BBBBB`.
//!
//! Channel accessors return the quantized channel scaled back to the 8-bit
//! range (the low bits are always zero), which is the form the fade palette
//! interpolates on.

use palette::Srgb;

/// A packed RGB565 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Rgb565(u16);

const RED_MASK: u16 = 0xF800;
const GREEN_MASK: u16 = 0x07E0;
const BLUE_MASK: u16 = 0x001F;

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const NAVY: Self = Self(0x000F);
    pub const DARK_GREEN: Self = Self(0x03E0);
    pub const DARK_CYAN: Self = Self(0x03EF);
    pub const MAROON: Self = Self(0x7800);
    pub const PURPLE: Self = Self(0x780F);
    pub const OLIVE: Self = Self(0x7BE0);
    pub const LIGHT_GREY: Self = Self(0xC618);
    pub const DARK_GREY: Self = Self(0x7BEF);
    pub const BLUE: Self = Self(0x001F);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x07FF);
    pub const RED: Self = Self(0xF800);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const WHITE: Self = Self(0xFFFF);
    pub const ORANGE: Self = Self(0xFDA0);
    pub const GREEN_YELLOW: Self = Self(0xB7E0);
    pub const PINK: Self = Self(0xFC9F);

    /// Packs 8-bit channels, discarding the bits the format cannot hold.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        let red = (red as u16 & 0xF8) << 8;
        let green = (green as u16 & 0xFC) << 3;
        let blue = blue as u16 >> 3;
        Self(red | green | blue)
    }

    /// Wraps an already packed value.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the packed value.
    #[inline]
    pub const fn into_raw(self) -> u16 {
        self.0
    }

    /// Red channel in the 8-bit range (multiple of 8).
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 & RED_MASK) >> 8) as u8
    }

    /// Green channel in the 8-bit range (multiple of 4).
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 & GREEN_MASK) >> 3) as u8
    }

    /// Blue channel in the 8-bit range (multiple of 8).
    #[inline]
    pub const fn blue(self) -> u8 {
        ((self.0 & BLUE_MASK) << 3) as u8
    }

    /// Unpacks into an 8-bit sRGB color.
    #[inline]
    pub fn to_srgb(self) -> Srgb<u8> {
        Srgb::new(self.red(), self.green(), self.blue())
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Rgb565(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

impl From<Srgb<u8>> for Rgb565 {
    fn from(color: Srgb<u8>) -> Self {
        Rgb565::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb565> for Srgb<u8> {
    fn from(color: Rgb565) -> Self {
        color.to_srgb()
    }
}
