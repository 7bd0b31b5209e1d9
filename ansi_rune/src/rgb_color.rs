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

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://gist.github.com/XVilka/8346728>

/// Lower bound of every channel once a color is clamped.
pub const CHANNEL_MIN: i32 = 0;
/// Upper bound of every channel once a color is clamped.
pub const CHANNEL_MAX: i32 = 255;

/// A truecolor (24-bit) color.
///
/// The channels are plain integers and can hold any value. They are adjusted to the
/// `0..=255` range on use, i.e. when [RgbColor::clamp] is called, which happens whenever a
/// color is attached to a [crate::StyledRune]. So an [RgbColor] that you create yourself
/// is not guaranteed to be in range, but one you get back from a [crate::StyledRune] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

mod rgb_color_impl {
    use super::{CHANNEL_MAX, CHANNEL_MIN, RgbColor};

    impl RgbColor {
        #[must_use]
        pub const fn new(red: i32, green: i32, blue: i32) -> Self {
            Self { red, green, blue }
        }

        /// Returns a copy of `self` w/ each channel restricted to `0..=255`. Calling this
        /// more than once has no further effect.
        #[must_use]
        pub fn clamp(self) -> Self {
            Self {
                red: clamp_channel(self.red),
                green: clamp_channel(self.green),
                blue: clamp_channel(self.blue),
            }
        }

        /// Same as [RgbColor::clamp] but for a color that may be absent. [None] stays
        /// [None].
        #[must_use]
        pub fn clamp_opt(maybe_color: Option<Self>) -> Option<Self> {
            maybe_color.map(Self::clamp)
        }

        /// Returns `true` if every channel is already in `0..=255`.
        #[must_use]
        pub fn is_in_range(&self) -> bool { *self == self.clamp() }
    }

    pub(crate) fn clamp_channel(value: i32) -> i32 {
        value.clamp(CHANNEL_MIN, CHANNEL_MAX)
    }

    impl From<(i32, i32, i32)> for RgbColor {
        fn from((red, green, blue): (i32, i32, i32)) -> Self {
            Self::new(red, green, blue)
        }
    }

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            Self::new(i32::from(red), i32::from(green), i32::from(blue))
        }
    }
}
