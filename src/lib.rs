#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb565`**: Packed 16-bit color, the only color representation the panel uses
//! - **`FadePalette`**: Key colors expanded into a dense table with a mirrored traversal
//! - **`LogicPanel`**: Owns the palette and pixel states, advances them once per tick
//! - **`PanelBuilder`**: Collects key colors, pixels and pauses, then validates them
//! - **`DrawPixel`**: Trait to implement for your display or LED driver
//! - **`RandomSource`**: Trait for the 8-bit random source; `Rand8` is the built-in one
//! - **`PixelId`** / **`PixelState`**: A pixel's fixed identity and its animation state
//!
//! All allocation happens at construction in fixed-capacity `heapless` storage;
//! `initialize` and `tick` run in bounded time proportional to the pixel count.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod color;
pub mod fade;
pub mod panel;
pub mod pixel;
pub mod random;
pub mod types;

pub use color::Rgb565;
pub use fade::FadePalette;
pub use panel::{DEFAULT_FADE_PAUSE, DEFAULT_KEY_PAUSE, DrawPixel, LogicPanel, PanelBuilder};
pub use pixel::{PixelId, PixelState};
pub use random::{DEFAULT_SEED, Rand8, RandomSource};
pub use types::PanelError;
