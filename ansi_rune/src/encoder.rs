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

//! Convert [StyledRune] and [StyledRunes] into strings w/ ANSI escape sequences.
//!
//! Every rune is encoded on its own and the results are joined in order. No state is
//! carried from one rune to the next, which is why [StyledRunes::new_from_str] only puts
//! the colors on the first rune and the reset on the last one.

use std::fmt::{Display, Formatter, Result, Write};

use smallstr::SmallString;

use crate::{SgrCode, StyledRune, StyledRunes};

/// `ESC[38;2;255;255;255m` + `ESC[48;2;255;255;255m` + a 4 byte char + `ESC[0m`.
pub const DEFAULT_ENCODED_RUNE_SIZE: usize = 48;

pub type EncodedRune = SmallString<[u8; DEFAULT_ENCODED_RUNE_SIZE]>;

/// Write the escape coded form of a single `rune` to `acc`.
///
/// 1. The [crate::EMPTY_RUNE] sentinel writes nothing.
/// 2. Otherwise the fg sequence (if any), the bg sequence (if any), the character, and
///    the reset sequence (if `reset_after`).
///
/// # Errors
///
/// Only if `acc` itself fails to accept the output.
pub fn write_rune(acc: &mut impl Write, rune: &StyledRune) -> Result {
    if rune.is_empty() {
        return Ok(());
    }

    if let Some(color) = rune.fg() {
        write!(acc, "{}", SgrCode::fg(color))?;
    }
    if let Some(color) = rune.bg() {
        write!(acc, "{}", SgrCode::bg(color))?;
    }
    acc.write_char(rune.character())?;
    if rune.reset_after() {
        write!(acc, "{}", SgrCode::Reset)?;
    }

    Ok(())
}

/// Write the escape coded form of all the `runes` to `acc`, in order.
///
/// # Errors
///
/// Only if `acc` itself fails to accept the output.
pub fn write_runes(acc: &mut impl Write, runes: &StyledRunes) -> Result {
    for rune in runes {
        write_rune(acc, rune)?;
    }
    Ok(())
}

/// Returns the escape coded form of a single `rune`. The result lives on the stack.
#[must_use]
pub fn encode_rune(rune: &StyledRune) -> EncodedRune {
    let mut acc = EncodedRune::new();
    // Writing to a `SmallString` never fails.
    _ = write_rune(&mut acc, rune);
    acc
}

/// Returns the escape coded form of all the `runes`.
#[must_use]
pub fn encode_runes(runes: &StyledRunes) -> String {
    let mut acc = String::with_capacity(runes.len());
    // Writing to a `String` never fails.
    _ = write_runes(&mut acc, runes);
    acc
}

/// Wrapper that implements [Display] using the escape coded form, so that it can be used
/// directly in `format!`, `println!`, etc. w/out allocating an intermediate [String].
#[derive(Debug, Clone, Copy)]
pub struct AnsiEncoded<'a, T>(pub &'a T);

impl Display for AnsiEncoded<'_, StyledRune> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write_rune(f, self.0) }
}

impl Display for AnsiEncoded<'_, StyledRunes> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write_runes(f, self.0) }
}

mod styled_rune_encode_impl {
    use super::{AnsiEncoded, EncodedRune, encode_rune};
    use crate::StyledRune;

    impl StyledRune {
        #[must_use]
        pub fn to_ansi_string(&self) -> String { encode_rune(self).into_string() }

        /// This is different than [StyledRune::to_ansi_string], because it doesn't
        /// allocate a new [String], but instead allocates an inline buffer on the stack.
        #[must_use]
        pub fn to_small_str(&self) -> EncodedRune { encode_rune(self) }

        #[must_use]
        pub fn ansi(&self) -> AnsiEncoded<'_, StyledRune> { AnsiEncoded(self) }
    }
}

mod styled_runes_encode_impl {
    use super::{AnsiEncoded, encode_runes};
    use crate::StyledRunes;

    impl StyledRunes {
        #[must_use]
        pub fn to_ansi_string(&self) -> String { encode_runes(self) }

        #[must_use]
        pub fn ansi(&self) -> AnsiEncoded<'_, StyledRunes> { AnsiEncoded(self) }

        pub fn println(&self) {
            println!("{}", self.ansi());
        }
    }
}
