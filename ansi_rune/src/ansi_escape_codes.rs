/*
 *   Copyright (c) 2023-2025 R3BL LLC
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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::RgbColor;

/// The only SGR codes that this crate generates or understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    ForegroundRGB(i32, i32, i32),
    BackgroundRGB(i32, i32, i32),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, RgbColor, SgrCode};

    pub const ESC: char = '\x1b';
    pub const CSI: &str = "\x1b[";
    pub const CSI_INTRODUCER: char = '[';
    pub const SGR: &str = "m";
    pub const SGR_TERMINATOR: char = 'm';
    pub const PARAM_SEPARATOR: char = ';';

    /// First parameter of a "set foreground" sequence.
    pub const FG_CODE: &str = "38";
    /// First parameter of a "set background" sequence.
    pub const BG_CODE: &str = "48";
    /// Second parameter of a truecolor sequence (as opposed to `5` for 8-bit colors).
    pub const TRUECOLOR_CODE: &str = "2";

    /// The full reset sequence: `ESC[0m`.
    pub const RESET: &str = "\x1b[0m";

    impl SgrCode {
        #[must_use]
        pub fn fg(color: RgbColor) -> Self {
            let RgbColor { red, green, blue } = color;
            SgrCode::ForegroundRGB(red, green, blue)
        }

        #[must_use]
        pub fn bg(color: RgbColor) -> Self {
            let RgbColor { red, green, blue } = color;
            SgrCode::BackgroundRGB(red, green, blue)
        }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                  => write!(f, "{CSI}0{SGR}"),
                SgrCode::ForegroundRGB(r, g, b) => write!(f, "{CSI}{FG_CODE};{TRUECOLOR_CODE};{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b) => write!(f, "{CSI}{BG_CODE};{TRUECOLOR_CODE};{r};{g};{b}{SGR}"),
            }
        }
    }
}
