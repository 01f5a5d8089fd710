//! Precomputed fade palette and its mirrored traversal.
//!
//! A [`FadePalette`] expands a short list of key colors into a dense table by
//! inserting a fixed number of linearly interpolated colors between every
//! consecutive pair. Pixels walk the table forwards and then backwards
//! through its interior, so the cycle is `2 * len - 2` positions long and
//! neither endpoint is shown twice in a row. Only the forward half is stored;
//! [`FadePalette::color_at`] folds the second half back onto it.

use crate::color::Rgb565;
use crate::types::PanelError;
use heapless::Vec;

/// Immutable color table built from key colors.
///
/// # Type Parameters
/// * `N` - Maximum number of colors (key colors plus transitions) the table can hold
#[derive(Debug, Clone)]
pub struct FadePalette<const N: usize> {
    colors: Vec<Rgb565, N>,
    num_transitions: u8,
    num_colors_both_ways: u8,
}

impl<const N: usize> FadePalette<N> {
    /// Builds the table for `key_colors` with `num_transitions` interpolated
    /// colors between each consecutive pair.
    ///
    /// # Errors
    /// * `NoKeyColors` - `key_colors` is empty
    /// * `CapacityExceeded` - the table needs more than `N` entries
    /// * `TooManyColors` - the mirrored traversal exceeds 255 positions
    pub fn build(key_colors: &[Rgb565], num_transitions: u8) -> Result<Self, PanelError> {
        let Some((&first, rest)) = key_colors.split_first() else {
            return Err(PanelError::NoKeyColors);
        };

        let required = key_colors.len() + usize::from(num_transitions) * rest.len();
        if required > N {
            return Err(PanelError::CapacityExceeded {
                required,
                capacity: N,
            });
        }

        let both_ways = 2 * required - 2;
        let num_colors_both_ways = u8::try_from(both_ways)
            .map_err(|_| PanelError::TooManyColors { required: both_ways })?;

        let mut colors = Vec::new();
        let denom = u16::from(num_transitions) + 1;
        let mut prev = first;
        push(&mut colors, first)?;

        for &next in rest {
            for t in 1..denom {
                push(&mut colors, interpolate(prev, next, t, denom))?;
            }
            push(&mut colors, next)?;
            prev = next;
        }

        Ok(Self {
            colors,
            num_transitions,
            num_colors_both_ways,
        })
    }

    /// Returns the forward table.
    #[inline]
    pub fn colors(&self) -> &[Rgb565] {
        &self.colors
    }

    /// Number of colors in the forward table.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one key color.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Length of the cyclic forward-then-back traversal.
    ///
    /// Zero for a single key color, in which case the traversal never advances.
    #[inline]
    pub fn num_colors_both_ways(&self) -> u8 {
        self.num_colors_both_ways
    }

    /// Number of interpolated colors between consecutive key colors.
    #[inline]
    pub fn num_transitions(&self) -> u8 {
        self.num_transitions
    }

    /// Number of key colors the table was built from.
    pub fn key_count(&self) -> usize {
        (self.len() - 1) / self.spacing() + 1
    }

    /// Maps a cyclic traversal position to its color.
    ///
    /// Positions past the forward table fold back onto it in reverse. Positions
    /// at or beyond [`num_colors_both_ways`](Self::num_colors_both_ways) wrap
    /// around the traversal first.
    #[inline]
    pub fn color_at(&self, position: u8) -> Rgb565 {
        let both_ways = usize::from(self.num_colors_both_ways);
        let mut index = usize::from(position) % both_ways.max(1);
        if index >= self.colors.len() {
            index = both_ways - index;
        }
        self.colors[index]
    }

    /// Returns true if `position` lands on a key color.
    ///
    /// Tested on the raw cyclic position; the traversal length is a multiple
    /// of the key spacing, so mirrored visits match forward ones.
    #[inline]
    pub fn is_key_position(&self, position: u8) -> bool {
        usize::from(position) % self.spacing() == 0
    }

    /// Returns the position following `position`, wrapping to 0 at the end.
    ///
    /// A single-color palette has no traversal, so the position is returned unchanged.
    #[inline]
    pub fn next_position(&self, position: u8) -> u8 {
        match self.num_colors_both_ways {
            0 => position,
            len => ((u16::from(position) + 1) % u16::from(len)) as u8,
        }
    }

    #[inline]
    fn spacing(&self) -> usize {
        usize::from(self.num_transitions) + 1
    }
}

fn push<const N: usize>(colors: &mut Vec<Rgb565, N>, color: Rgb565) -> Result<(), PanelError> {
    colors.push(color).map_err(|_| PanelError::CapacityExceeded {
        required: colors.len() + 1,
        capacity: N,
    })
}

/// Integer linear interpolation at step `t` of `denom`, per channel.
fn interpolate(prev: Rgb565, next: Rgb565, t: u16, denom: u16) -> Rgb565 {
    let channel = |a: u8, b: u8| -> u8 {
        ((u32::from(a) * u32::from(denom - t) + u32::from(b) * u32::from(t)) / u32::from(denom)) as u8
    };

    Rgb565::new(
        channel(prev.red(), next.red()),
        channel(prev.green(), next.green()),
        channel(prev.blue(), next.blue()),
    )
}
