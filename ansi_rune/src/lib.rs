/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # r3bl_ansi_rune
//!
//! Rust crate to represent text where every character carries its own optional
//! truecolor (24-bit) foreground and background color, and to convert that
//! representation to and from a string w/ ANSI escape sequences.
//!
//! The main types are:
//! - [RgbColor] - a color w/ three integer channels. Channels are clamped to `0..=255`
//!   when the color is attached to a character, not when the color is created.
//! - [StyledRune] - one [char] plus optional foreground & background color, and a flag
//!   that says whether a reset sequence follows it.
//! - [StyledRunes] - an ordered sequence of [StyledRune].
//!
//! And the main operations are:
//! - [StyledRunes::new_from_str] - color a plain string w/ a single fg / bg pair.
//! - [encode_runes] - generate the ANSI escape coded string.
//! - [parse_ansi_string] - parse an ANSI escape coded string back into [StyledRunes].
//! - [StyledRunes::plain_text] - the text w/out any escape sequences.
//! - [RgbColor::from_hsv] - build a color from hue, saturation and value.
//!
//! # Wire format
//!
//! Each character is optionally preceded by `ESC[38;2;R;G;Bm` (foreground) and / or
//! `ESC[48;2;R;G;Bm` (background), and optionally followed by `ESC[0m` (reset). Palette
//! (8-bit) colors and other SGR attributes (bold, italic, etc) are not supported.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_ansi_rune::*;
//!
//! let runes = StyledRunes::new_from_str(
//!     "Hello",
//!     Some(RgbColor::new(255, 128, 64)),
//!     None,
//! );
//! let encoded = encode_runes(&runes);
//! assert_eq!(encoded, "\x1b[38;2;255;128;64mHello\x1b[0m");
//!
//! let decoded = parse_ansi_string(&encoded);
//! assert_eq!(decoded.plain_text(), "Hello");
//! assert_eq!(encode_runes(&decoded), encoded);
//! ```
//!
//! # Error handling
//!
//! None of the operations in this crate can fail. Malformed escape sequences are
//! dropped, non numeric color codes parse to `0`, and out of range channels are
//! clamped. Dropped sequences are reported via [tracing] at the `TRACE` level.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod ansi_escape_codes;
pub mod decoder;
pub mod encoder;
pub mod rainbow;
pub mod rgb_color;
pub mod styled_rune;
pub mod styled_runes;
pub mod transform_color;

// Re-export.
pub use ansi_escape_codes::*;
pub use decoder::*;
pub use encoder::*;
pub use rainbow::*;
pub use rgb_color::*;
pub use styled_rune::*;
pub use styled_runes::*;
pub use transform_color::*;
