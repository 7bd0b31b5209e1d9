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

use crate::{HUE_MAX, RgbColor, StyledRune, StyledRunes};

/// Configuration for [colorize_uncolored]. The gradient walks the whole hue circle once
/// across the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowConfig {
    /// Rotates the gradient by this many runes.
    pub step: usize,
    pub saturation: i32,
    pub value: i32,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            step: 0,
            saturation: 200,
            value: 255,
        }
    }
}

impl RainbowConfig {
    /// Hue (in degrees) for the rune at `index` in a text of `len` runes.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn hue_at(&self, index: usize, len: usize) -> i32 {
        if len == 0 {
            return 0;
        }
        let position = index.wrapping_add(self.step) % len;
        let fraction = position as f64 / len as f64;
        // `fraction` is in `0.0..1.0` so this fits in an `i32`.
        (fraction * f64::from(HUE_MAX)) as i32
    }

    #[must_use]
    pub fn color_at(&self, index: usize, len: usize) -> RgbColor {
        RgbColor::from_hsv(self.hue_at(index, len), self.saturation, self.value)
    }
}

/// Give every rune that has neither a fg nor a bg color a fg color from a rainbow
/// gradient, followed by a reset. Runes that already have a color are kept as they are.
#[must_use]
pub fn colorize_uncolored(runes: &StyledRunes, config: &RainbowConfig) -> StyledRunes {
    let len = runes.len();

    runes
        .iter()
        .enumerate()
        .map(|(index, rune)| {
            if rune.has_color() {
                *rune
            } else {
                let fg = config.color_at(index, len);
                StyledRune::new(rune.character(), Some(fg), None, true)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{RainbowConfig, colorize_uncolored};
    use crate::{RgbColor, StyledRune, StyledRunes, encode_runes, parse_ansi_string};

    #[test_case(0, 4, 0)]
    #[test_case(1, 4, 90)]
    #[test_case(2, 4, 180)]
    #[test_case(3, 4, 270)]
    #[test_case(0, 0, 0)]
    fn test_hue_at(index: usize, len: usize, hue: i32) {
        assert_eq!(RainbowConfig::default().hue_at(index, len), hue);
    }

    #[test]
    fn test_hue_at_with_step_wraps() {
        let config = RainbowConfig {
            step: 3,
            ..Default::default()
        };
        assert_eq!(config.hue_at(0, 4), 270);
        assert_eq!(config.hue_at(1, 4), 0);
    }

    #[test]
    fn test_colorize_empty() {
        let runes = colorize_uncolored(&StyledRunes::new(), &RainbowConfig::default());
        assert!(runes.is_empty());
    }

    #[test]
    fn test_colorize_plain_text() {
        let config = RainbowConfig {
            step: 0,
            saturation: 255,
            value: 255,
        };
        let runes = colorize_uncolored(&parse_ansi_string("ab"), &config);
        assert_eq!(
            runes[0],
            StyledRune::new('a', Some(RgbColor::new(255, 0, 0)), None, true)
        );
        assert_eq!(
            runes[1],
            StyledRune::new('b', Some(RgbColor::new(0, 255, 255)), None, true)
        );
        assert_eq!(
            encode_runes(&runes),
            "\x1b[38;2;255;0;0ma\x1b[0m\x1b[38;2;0;255;255mb\x1b[0m"
        );
    }

    #[test]
    fn test_colorize_keeps_colored_runes() {
        let colored = StyledRune::new('a', None, Some(RgbColor::new(1, 2, 3)), false);
        let input = StyledRunes::from(vec![colored, StyledRune::plain('b')]);
        let runes = colorize_uncolored(&input, &RainbowConfig::default());
        assert_eq!(runes[0], colored);
        assert!(runes[1].fg().is_some());
        assert!(runes[1].reset_after());
        assert_eq!(runes.plain_text(), "ab");
    }
}
