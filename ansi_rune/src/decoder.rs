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

//! Parse a string w/ ANSI escape sequences back into [StyledRunes].
//!
//! This is the inverse of [crate::encode_runes]. The input is scanned one code point at
//! a time by [AnsiRuneParser], which holds the color state that is waiting to be attached
//! to the next literal character:
//!
//! | Input at cursor                              | What happens                          |
//! |----------------------------------------------|---------------------------------------|
//! | `ESC[38;2;R;G;Bm`                            | pending fg is set, sequence consumed  |
//! | `ESC[48;2;R;G;Bm`                            | pending bg is set, sequence consumed  |
//! | any other `ESC[...m` (w/in the scan window)  | sequence consumed, nothing else       |
//! | char followed by `ESC[0m`                    | char emitted w/ `reset_after = true`  |
//! | anything else                                | char emitted w/ the pending colors    |
//!
//! Nothing in here can fail. Unknown or malformed sequences are dropped silently (and
//! reported at the `TRACE` level).

use std::num::IntErrorKind;

use smallvec::SmallVec;

use crate::{RgbColor,
            SgrCode,
            StyledRune,
            StyledRunes,
            sgr_code_impl::{BG_CODE,
                            CSI_INTRODUCER,
                            ESC,
                            FG_CODE,
                            PARAM_SEPARATOR,
                            SGR_TERMINATOR}};

/// Offset (from the `ESC`) of the first character that may be the `m` terminator.
pub const SGR_SCAN_START: usize = 2;
/// Offset (from the `ESC`) one past the last character that may be the `m` terminator.
/// Sequences whose `m` is further away than this are not recognized.
pub const SGR_SCAN_END: usize = 30;
/// Number of characters that are searched for the `m` terminator.
pub const MAX_SGR_SCAN_WINDOW: usize = SGR_SCAN_END - SGR_SCAN_START;
/// `38;2;R;G;B` and `48;2;R;G;B` both have exactly this many parameters.
pub const TRUECOLOR_PARAM_COUNT: usize = 5;

/// `ESC[0m` as characters.
const RESET_CHARS: [char; 4] = [ESC, CSI_INTRODUCER, '0', SGR_TERMINATOR];

/// Parse `input` into [StyledRunes]. Colors set by escape sequences are attached to the
/// next literal character only, and a reset sequence marks the character just before it.
///
/// ```rust
/// use r3bl_ansi_rune::*;
///
/// let runes = parse_ansi_string("\x1b[38;2;1;2;3mab\x1b[0m");
/// assert_eq!(runes.plain_text(), "ab");
/// assert_eq!(runes[0].fg(), Some(RgbColor::new(1, 2, 3)));
/// assert_eq!(runes[1].fg(), None);
/// assert!(runes[1].reset_after());
/// ```
#[must_use]
pub fn parse_ansi_string(input: &str) -> StyledRunes { AnsiRuneParser::new(input).parse() }

impl StyledRunes {
    /// Same as [parse_ansi_string].
    #[must_use]
    pub fn from_ansi_str(input: &str) -> Self { parse_ansi_string(input) }
}

/// Color state that is waiting for the next literal character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PendingStyle {
    fg: Option<RgbColor>,
    bg: Option<RgbColor>,
    reset: bool,
}

impl PendingStyle {
    /// Attach the pending state to `character` and clear it for the next one.
    fn take_rune(&mut self, character: char) -> StyledRune {
        let it = StyledRune::new(character, self.fg, self.bg, self.reset);
        *self = Self::default();
        it
    }

    fn apply(&mut self, sgr_code: SgrCode) {
        match sgr_code {
            SgrCode::ForegroundRGB(red, green, blue) => {
                self.fg = Some(RgbColor::new(red, green, blue));
            }
            SgrCode::BackgroundRGB(red, green, blue) => {
                self.bg = Some(RgbColor::new(red, green, blue));
            }
            // Already recorded by the lookahead on the character before the sequence.
            SgrCode::Reset => {}
        }
    }
}

/// State machine w/ a cursor over the code points of the input.
#[derive(Debug)]
pub struct AnsiRuneParser {
    chars: SmallVec<[char; 64]>,
    cursor: usize,
    pending: PendingStyle,
    acc: StyledRunes,
}

impl AnsiRuneParser {
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            cursor: 0,
            pending: PendingStyle::default(),
            acc: StyledRunes::new(),
        }
    }

    /// Run the state machine to the end of the input.
    #[must_use]
    pub fn parse(mut self) -> StyledRunes {
        while self.cursor < self.chars.len() {
            self.step();
        }

        tracing::debug!(
            message = "parsed ansi string",
            input_len = self.chars.len(),
            rune_count = self.acc.len()
        );

        self.acc
    }

    /// Handle the character at the cursor and advance the cursor past everything it
    /// consumed.
    fn step(&mut self) {
        let current = self.chars[self.cursor];

        if current == ESC {
            if let Some(terminator_index) = self.find_sgr_terminator() {
                self.consume_sgr(terminator_index);
                return;
            }
        }

        if self.is_followed_by_reset() {
            self.pending.reset = true;
        }

        let rune = self.pending.take_rune(current);
        self.acc.push(rune);
        self.cursor += 1;
    }

    /// The cursor is on an `ESC`. Returns the index of the `m` that terminates the
    /// sequence, if it is `ESC[` and the `m` is w/in [MAX_SGR_SCAN_WINDOW] characters.
    fn find_sgr_terminator(&self) -> Option<usize> {
        let esc_index = self.cursor;

        if self.chars.get(esc_index + 1) != Some(&CSI_INTRODUCER) {
            return None;
        }

        (esc_index + SGR_SCAN_START..esc_index + SGR_SCAN_END)
            .find(|&index| self.chars.get(index) == Some(&SGR_TERMINATOR))
    }

    /// Apply the sequence between the cursor and `terminator_index` (if it is one that
    /// is understood) and skip past it either way.
    fn consume_sgr(&mut self, terminator_index: usize) {
        let params: String = self.chars[self.cursor + SGR_SCAN_START..terminator_index]
            .iter()
            .collect();

        match parse_sgr_params(&params) {
            Some(sgr_code) => self.pending.apply(sgr_code),
            None => {
                tracing::trace!(message = "dropped unknown sgr sequence", params = %params);
            }
        }

        self.cursor = terminator_index + 1;
    }

    /// Is the cursor immediately followed by `ESC[0m`?
    fn is_followed_by_reset(&self) -> bool {
        let start = self.cursor + 1;
        self.chars.get(start..start + RESET_CHARS.len()) == Some(&RESET_CHARS[..])
    }
}

/// Parse the parameters of an SGR sequence, i.e. everything between `ESC[` and `m`.
///
/// - `0` is [SgrCode::Reset].
/// - Exactly [TRUECOLOR_PARAM_COUNT] parameters starting w/ [FG_CODE] or [BG_CODE] are a
///   truecolor fg or bg. The second parameter is not checked. Channels that are not
///   numbers are `0`, numbers too large for an `i32` saturate.
/// - Everything else is [None].
#[must_use]
pub fn parse_sgr_params(params: &str) -> Option<SgrCode> {
    if params == "0" {
        return Some(SgrCode::Reset);
    }

    let fields: SmallVec<[&str; TRUECOLOR_PARAM_COUNT]> =
        params.split(PARAM_SEPARATOR).collect();

    let [kind, _, red, green, blue] = fields.as_slice() else {
        return None;
    };

    let (red, green, blue) = (
        parse_channel(red),
        parse_channel(green),
        parse_channel(blue),
    );

    match *kind {
        FG_CODE => Some(SgrCode::ForegroundRGB(red, green, blue)),
        BG_CODE => Some(SgrCode::BackgroundRGB(red, green, blue)),
        _ => None,
    }
}

/// Numbers that don't fit in an `i32` saturate, so that clamping still takes them to the
/// nearest end of `0..=255`. Anything that is not a number is `0`.
fn parse_channel(field: &str) -> i32 {
    match field.parse::<i32>() {
        Ok(it) => it,
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => i32::MAX,
            IntErrorKind::NegOverflow => i32::MIN,
            _ => 0,
        },
    }
}
