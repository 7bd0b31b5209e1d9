/*
 *   Copyright (c) 2024-2025 R3BL LLC
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
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#HSV_to_RGB>
//! - <https://github.com/Qix-/color-convert/>

use crate::RgbColor;

pub trait TransformColor {
    /// Returns a [RgbColor] representation of the `self` color.
    fn as_rgb(&self) -> RgbColor;
}

pub const HUE_MAX: i32 = 360;
pub const SATURATION_MAX: i32 = 255;
pub const VALUE_MAX: i32 = 255;

/// Width of each of the six hue bands, in degrees.
const HUE_BAND_WIDTH: f64 = 60.0;

/// Hue in degrees (`0..=360`), saturation and value in `0..=255`. Out of range values
/// are clamped when the color is converted, see [HsvColor::as_rgb].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HsvColor {
    pub hue: i32,
    pub saturation: i32,
    pub value: i32,
}

impl HsvColor {
    #[must_use]
    pub const fn new(hue: i32, saturation: i32, value: i32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl TransformColor for RgbColor {
    fn as_rgb(&self) -> RgbColor { *self }
}

impl TransformColor for HsvColor {
    /// The hue circle is split in six bands: `[0,60)`, `[60,120)`, `[120,180)`,
    /// `[180,240)`, `[240,300)` and `[300,360]`. In each band one channel is at `max`
    /// (the value), one is at `min` (value minus saturation), and the third moves
    /// linearly between them. Hue `0` and `360` produce the same color.
    #[allow(clippy::cast_possible_truncation)]
    fn as_rgb(&self) -> RgbColor {
        let hue = f64::from(self.hue.clamp(0, HUE_MAX));
        let saturation = f64::from(self.saturation.clamp(0, SATURATION_MAX));
        let value = f64::from(self.value.clamp(0, VALUE_MAX));

        let max = value;
        let min = max - (saturation / f64::from(SATURATION_MAX)) * max;

        // `offset` is the distance (in degrees) from the band edge where the channel is
        // at `min`.
        let ramp = |offset: f64| min + (offset / HUE_BAND_WIDTH) * (max - min);

        #[rustfmt::skip]
        let (red, green, blue) = match hue {
            h if h < 60.0  => (max,              ramp(h),          min),
            h if h < 120.0 => (ramp(120.0 - h),  max,              min),
            h if h < 180.0 => (min,              max,              ramp(h - 120.0)),
            h if h < 240.0 => (min,              ramp(240.0 - h),  max),
            h if h < 300.0 => (ramp(h - 240.0),  min,              max),
            h              => (max,              min,              ramp(360.0 - h)),
        };

        // All three are in `0.0..=255.0` so the casts can't truncate.
        RgbColor::new(
            red.round() as i32,
            green.round() as i32,
            blue.round() as i32,
        )
    }
}

impl RgbColor {
    /// Build a color from hue (`0..=360` degrees), saturation (`0..=255`) and value
    /// (`0..=255`). Each argument is clamped to its range first.
    #[must_use]
    pub fn from_hsv(hue: i32, saturation: i32, value: i32) -> Self {
        HsvColor::new(hue, saturation, value).as_rgb()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{HsvColor, TransformColor};
    use crate::RgbColor;

    #[test_case(0, 255, 0, 0)]
    #[test_case(60, 255, 255, 0)]
    #[test_case(120, 0, 255, 0)]
    #[test_case(180, 0, 255, 255)]
    #[test_case(240, 0, 0, 255)]
    #[test_case(300, 255, 0, 255)]
    #[test_case(360, 255, 0, 0)]
    fn test_from_hsv_fully_saturated_band_edges(hue: i32, red: i32, green: i32, blue: i32) {
        assert_eq!(RgbColor::from_hsv(hue, 255, 255), RgbColor::new(red, green, blue));
    }

    #[test]
    fn test_from_hsv_mid_band() {
        // 30 degrees is half way between red and yellow.
        assert_eq!(RgbColor::from_hsv(30, 255, 255), RgbColor::new(255, 128, 0));
        // 210 degrees is half way between cyan and blue.
        assert_eq!(RgbColor::from_hsv(210, 255, 255), RgbColor::new(0, 128, 255));
    }

    #[test]
    fn test_from_hsv_zero_saturation_is_gray() {
        for hue in [0, 45, 90, 135, 180, 225, 270, 315, 360] {
            assert_eq!(RgbColor::from_hsv(hue, 0, 200), RgbColor::new(200, 200, 200));
        }
    }

    #[test]
    fn test_from_hsv_zero_value_is_black() {
        assert_eq!(RgbColor::from_hsv(123, 255, 0), RgbColor::new(0, 0, 0));
    }

    #[test_case(200, 255)]
    #[test_case(255, 255)]
    #[test_case(100, 180)]
    #[test_case(0, 50)]
    fn test_from_hsv_hue_wraps(saturation: i32, value: i32) {
        assert_eq!(
            RgbColor::from_hsv(0, saturation, value),
            RgbColor::from_hsv(360, saturation, value)
        );
    }

    #[test_case(200, 255)]
    #[test_case(255, 255)]
    #[test_case(100, 180)]
    fn test_from_hsv_band_boundaries_are_continuous(saturation: i32, value: i32) {
        for boundary in [60, 120, 180, 240, 300] {
            let before = RgbColor::from_hsv(boundary - 1, saturation, value);
            let at = RgbColor::from_hsv(boundary, saturation, value);
            // One degree of hue moves a channel by at most `255 / 60` (~4.25) steps.
            for (lhs, rhs) in [
                (before.red, at.red),
                (before.green, at.green),
                (before.blue, at.blue),
            ] {
                assert!(
                    (lhs - rhs).abs() <= 5,
                    "jump at hue {boundary}: {before:?} -> {at:?}"
                );
            }
        }
    }

    #[test]
    fn test_from_hsv_clamps_inputs() {
        assert_eq!(RgbColor::from_hsv(-90, 255, 255), RgbColor::from_hsv(0, 255, 255));
        assert_eq!(RgbColor::from_hsv(720, 255, 255), RgbColor::from_hsv(360, 255, 255));
        assert_eq!(RgbColor::from_hsv(90, 999, 999), RgbColor::from_hsv(90, 255, 255));
        assert_eq!(RgbColor::from_hsv(90, -1, -1), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_from_hsv_output_always_in_range() {
        for hue in (0..=360).step_by(7) {
            assert!(RgbColor::from_hsv(hue, 200, 255).is_in_range());
        }
    }

    #[test]
    fn test_rgb_color_as_rgb() {
        let color = RgbColor::new(1, 2, 3);
        assert_eq!(color.as_rgb(), color);
    }

    #[test]
    fn test_hsv_color_as_rgb() {
        assert_eq!(HsvColor::new(240, 255, 255).as_rgb(), RgbColor::new(0, 0, 255));
    }
}
