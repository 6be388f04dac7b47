//! Centralized CLI color functions.
//!
//! All functions automatically respect `NO_COLOR`, `FORCE_COLOR`, and TTY
//! detection via `owo-colors`' `if_supports_color()`. The `--no-color` flag
//! sets an internal flag that bypasses owo-colors entirely (no unsafe env
//! mutation needed).

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

/// Returns true when color output is disabled (--no-color flag).
fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

/// Type-safe RGB color with compile-time hex-to-component conversion.
#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const MOSS: Rgb = Rgb::from_hex(0x7FA65A); // Success
const AMBER: Rgb = Rgb::from_hex(0xC9A24B); // Warning
const CLAY: Rgb = Rgb::from_hex(0xC26D5C); // Error
const RIVER: Rgb = Rgb::from_hex(0x6FA3B8); // Accent/headings
const SLATE: Rgb = Rgb::from_hex(0x66707D); // Secondary info

fn paint(text: &str, color: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(color.r, color.g, color.b))
        .to_string()
}

pub fn success(text: &str) -> String {
    paint(text, MOSS)
}

pub fn warning(text: &str) -> String {
    paint(text, AMBER)
}

pub fn error(text: &str) -> String {
    paint(text, CLAY)
}

pub fn accent(text: &str) -> String {
    paint(text, RIVER)
}

pub fn muted(text: &str) -> String {
    paint(text, SLATE)
}
