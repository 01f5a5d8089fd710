#!/usr/bin/env rust-script
//! Memory calculator for logic-panel
//!
//! This utility displays the exact memory footprint of panels with different
//! palette and pixel capacities. Run it to understand the memory implications
//! of your `COLORS` and `PIXELS` choices.
//!
//! Usage:
//!   cargo run --bin panel_memory_calculator
//!
//! Or with rust-script:
//!   rust-script panel_memory_calculator.rs

use std::mem::size_of;
use logic_panel::{FadePalette, LogicPanel, PixelId, PixelState, Rand8, Rgb565};
use palette::Srgb;

// Zero-sized draw target, so the table shows the panel's own cost
struct NoDraw;

impl logic_panel::DrawPixel for NoDraw {
    fn draw(&mut self, _pixel: PixelId, _color: Rgb565) {}
}

fn print_header() {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║          Logic Panel Memory Footprint Calculator               ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
}

fn print_component_sizes() {
    println!("Component Sizes:");
    println!("├─ Rgb565 (packed):              {} bytes", size_of::<Rgb565>());
    println!("├─ Srgb<u8> (unpacked):          {} bytes", size_of::<Srgb<u8>>());
    println!("├─ PixelId:                      {} bytes", size_of::<PixelId>());
    println!("├─ PixelState:                   {} bytes", size_of::<PixelState>());
    println!("└─ Rand8:                        {} bytes", size_of::<Rand8>());
    println!();
}

fn print_palette_table() {
    println!("FadePalette<N> Memory Usage:");
    println!("┌──────────┬──────────────┬─────────────────┬────────────────┐");
    println!("│ Capacity │ Palette      │ Storage Cost    │ Overhead       │");
    println!("│ (N)      │ Total Size   │ (2 B * N)       │ (Fixed)        │");
    println!("├──────────┼──────────────┼─────────────────┼────────────────┤");

    let rows = [
        (16, size_of::<FadePalette<16>>()),
        (32, size_of::<FadePalette<32>>()),
        (64, size_of::<FadePalette<64>>()),
        (128, size_of::<FadePalette<128>>()),
    ];

    for (capacity, total_size) in rows {
        let storage_cost = size_of::<Rgb565>() * capacity;
        println!(
            "│ {:^8} │ {:>10} B │ {:>13} B │ {:>12} B │",
            capacity,
            total_size,
            storage_cost,
            total_size - storage_cost
        );
    }

    println!("└──────────┴──────────────┴─────────────────┴────────────────┘");
    println!();
}

fn print_panel_table() {
    println!("LogicPanel<NoDraw, Rand8, 64, PIXELS> Memory Usage:");
    println!("┌──────────┬──────────────┐");
    println!("│ Pixels   │ Total Size   │");
    println!("├──────────┼──────────────┤");

    let rows = [
        (16, size_of::<LogicPanel<NoDraw, Rand8, 64, 16>>()),
        (64, size_of::<LogicPanel<NoDraw, Rand8, 64, 64>>()),
        (256, size_of::<LogicPanel<NoDraw, Rand8, 64, 256>>()),
        (1024, size_of::<LogicPanel<NoDraw, Rand8, 64, 1024>>()),
    ];

    for (pixels, total_size) in rows {
        println!("│ {:^8} │ {:>10} B │", pixels, total_size);
    }

    println!("└──────────┴──────────────┘");
    println!();
}

fn main() {
    print_header();
    print_component_sizes();
    print_palette_table();
    print_panel_table();
}
