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

use std::fmt::{Display, Formatter, Result};

use crate::RgbColor;

/// The code point that marks an "empty" rune. It encodes to an empty string.
pub const EMPTY_RUNE: char = '\0';

/// A single [char] w/ its own optional foreground and background color.
///
/// - The colors are owned by value and are clamped to `0..=255` when the rune is
///   created, so two runes made from the same [RgbColor] never share anything.
/// - `reset_after` means that a reset sequence (`ESC[0m`) is emitted right after this
///   rune when it is encoded. It is how a run of colored runes is terminated.
///
/// There is no way to mutate a rune once it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyledRune {
    character: char,
    fg: Option<RgbColor>,
    bg: Option<RgbColor>,
    reset_after: bool,
}

impl Default for StyledRune {
    fn default() -> Self { Self::new(EMPTY_RUNE, None, None, false) }
}

mod styled_rune_impl {
    use super::{EMPTY_RUNE, RgbColor, StyledRune};

    impl StyledRune {
        #[must_use]
        pub fn new(
            character: char,
            fg: Option<RgbColor>,
            bg: Option<RgbColor>,
            reset_after: bool,
        ) -> Self {
            Self {
                character,
                fg: RgbColor::clamp_opt(fg),
                bg: RgbColor::clamp_opt(bg),
                reset_after,
            }
        }

        /// A rune w/ no colors and no reset.
        #[must_use]
        pub fn plain(character: char) -> Self { Self::new(character, None, None, false) }

        #[must_use]
        pub fn character(&self) -> char { self.character }

        #[must_use]
        pub fn fg(&self) -> Option<RgbColor> { self.fg }

        #[must_use]
        pub fn bg(&self) -> Option<RgbColor> { self.bg }

        #[must_use]
        pub fn reset_after(&self) -> bool { self.reset_after }

        /// Returns `true` if either the foreground or the background color is set.
        #[must_use]
        pub fn has_color(&self) -> bool { self.fg.is_some() || self.bg.is_some() }

        /// Returns `true` for the [EMPTY_RUNE] sentinel.
        #[must_use]
        pub fn is_empty(&self) -> bool { self.character == EMPTY_RUNE }
    }
}

/// Only the character, w/out any escape sequences. Use
/// [StyledRune::to_ansi_string](crate::StyledRune::to_ansi_string) for the encoded form.
impl Display for StyledRune {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.character) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{EMPTY_RUNE, StyledRune};
    use crate::RgbColor;

    #[test]
    fn test_new_clamps_colors() {
        let rune = StyledRune::new(
            'a',
            Some(RgbColor::new(-1, 300, 10)),
            Some(RgbColor::new(256, 0, -256)),
            true,
        );
        assert_eq!(rune.character(), 'a');
        assert_eq!(rune.fg(), Some(RgbColor::new(0, 255, 10)));
        assert_eq!(rune.bg(), Some(RgbColor::new(255, 0, 0)));
        assert!(rune.reset_after());
        assert!(rune.has_color());
    }

    #[test]
    fn test_new_without_colors() {
        let rune = StyledRune::new('b', None, None, false);
        assert_eq!(rune.fg(), None);
        assert_eq!(rune.bg(), None);
        assert!(!rune.reset_after());
        assert!(!rune.has_color());
        assert_eq!(rune, StyledRune::plain('b'));
    }

    #[test]
    fn test_runes_do_not_share_colors() {
        let mut color = RgbColor::new(500, 10, 10);
        let first = StyledRune::new('x', Some(color), None, false);
        color.green = 99;
        let second = StyledRune::new('y', Some(color), None, false);

        assert_eq!(first.fg(), Some(RgbColor::new(255, 10, 10)));
        assert_eq!(second.fg(), Some(RgbColor::new(255, 99, 10)));
        // The source color itself is never adjusted.
        assert_eq!(color, RgbColor::new(500, 99, 10));
    }

    #[test]
    fn test_display_is_plain_character() {
        let rune = StyledRune::new('é', Some(RgbColor::new(1, 2, 3)), None, true);
        assert_eq!(rune.to_string(), "é");
    }

    #[test]
    fn test_default_is_empty() {
        let rune = StyledRune::default();
        assert!(rune.is_empty());
        assert_eq!(rune.character(), EMPTY_RUNE);
    }
}
