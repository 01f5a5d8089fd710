//! Shared test infrastructure for logic-panel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use logic_panel::{DrawPixel, PixelId, RandomSource, Rgb565};

// ============================================================================
// Mock Draw Target
// ============================================================================

pub const MOCK_DRAW_CAPACITY: usize = 512;

/// Mock draw target that records every draw call
///
/// Panics once the history is full, so no call goes unrecorded.
pub struct MockDraw {
    calls: heapless::Vec<(PixelId, Rgb565), MOCK_DRAW_CAPACITY>,
}

impl MockDraw {
    pub fn new() -> Self {
        Self {
            calls: heapless::Vec::new(),
        }
    }

    pub fn calls(&self) -> &[(PixelId, Rgb565)] {
        &self.calls
    }

    pub fn last_color(&self) -> Option<Rgb565> {
        self.calls.last().map(|&(_, color)| color)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawPixel for MockDraw {
    fn draw(&mut self, pixel: PixelId, color: Rgb565) {
        assert!(self.calls.push((pixel, color)).is_ok(), "draw history full");
    }
}

// ============================================================================
// Mock Random Source
// ============================================================================

/// Random source that replays a script of bytes, then repeats its last byte
pub struct ScriptedRng {
    script: heapless::Vec<u8, 32>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(script: &[u8]) -> Self {
        Self {
            script: heapless::Vec::from_slice(script).unwrap(),
            index: 0,
        }
    }

    /// Number of bytes handed out so far
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedRng {
    fn next_u8(&mut self) -> u8 {
        let value = self
            .script
            .get(self.index)
            .or(self.script.last())
            .copied()
            .unwrap_or(0);
        self.index += 1;
        value
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const KEYS: [Rgb565; 3] = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE];

pub fn row(len: u16) -> heapless::Vec<PixelId, 16> {
    (0..len).map(|x| PixelId::new(x, 0)).collect()
}
