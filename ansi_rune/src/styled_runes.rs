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

use std::{fmt::{Display, Formatter, Result},
          ops::Deref};

use smallvec::SmallVec;

use crate::{RgbColor, StyledRune};

/// The main struct that we have to consider is `StyledRunes`. It is an ordered sequence
/// of [StyledRune], in display order. The runes are owned in a stack allocated buffer
/// (which can spill to the heap if it gets larger than
/// [sizing::DEFAULT_STYLED_RUNES_SIZE]).
///
/// - Create one from plain text and a single fg / bg pair using
///   [StyledRunes::new_from_str].
/// - Create one from a string w/ ANSI escape sequences using
///   [StyledRunes::from_ansi_str](crate::StyledRunes::from_ansi_str).
/// - Or collect it from an iterator of [StyledRune].
///
/// Once built it can't be changed. Reads go through [Deref] (to a slice),
/// [StyledRunes::iter] and [StyledRunes::into_inner].
///
/// The [Display] trait implementation renders the plain text. Use
/// [StyledRunes::to_ansi_string](crate::StyledRunes::to_ansi_string) to get the escape
/// coded string.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_rune::*;
///
/// let runes = StyledRunes::new_from_str(
///     "Hi!",
///     Some(RgbColor::new(255, 0, 0)),
///     Some(RgbColor::new(0, 0, 255)),
/// );
/// assert_eq!(runes.len(), 3);
/// assert_eq!(runes.plain_text(), "Hi!");
/// assert!(runes[0].has_color());
/// assert!(runes[2].reset_after());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledRunes {
    runes: sizing::InlineVecStyledRunes,
}

pub mod sizing {
    use super::{SmallVec, StyledRune};

    // PERF: A whole line of terminal output fits without spilling to the heap.
    pub const DEFAULT_STYLED_RUNES_SIZE: usize = 32;
    pub type InlineVecStyledRunes = SmallVec<[StyledRune; DEFAULT_STYLED_RUNES_SIZE]>;
}

mod styled_runes_impl {
    use super::{RgbColor, StyledRune, StyledRunes, sizing::InlineVecStyledRunes};

    impl StyledRunes {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        /// Color the whole of `text` w/ a single fg / bg pair.
        ///
        /// The colors are only attached to the first rune, so they are emitted once at
        /// the start of the run. If there is more than one rune and at least one color
        /// is given, the last rune has no colors of its own and carries `reset_after`,
        /// so the reset is emitted once at the end of the run. Interior runes have no
        /// colors and no reset.
        ///
        /// A single rune string gets its colors but no reset. Callers that need the run
        /// terminated in that case have to add the reset themselves.
        #[must_use]
        pub fn new_from_str(
            text: &str,
            fg: Option<RgbColor>,
            bg: Option<RgbColor>,
        ) -> Self {
            let rune_count = text.chars().count();
            let has_color = fg.is_some() || bg.is_some();

            text.chars()
                .enumerate()
                .map(|(index, character)| {
                    if index == 0 {
                        StyledRune::new(character, fg, bg, false)
                    } else if index == rune_count - 1 && has_color {
                        StyledRune::new(character, None, None, true)
                    } else {
                        StyledRune::plain(character)
                    }
                })
                .collect()
        }

        /// The text w/out any colors or escape sequences.
        #[must_use]
        pub fn plain_text(&self) -> String {
            self.runes.iter().map(StyledRune::character).collect()
        }

        pub(crate) fn push(&mut self, rune: StyledRune) { self.runes.push(rune); }

        pub fn iter(&self) -> std::slice::Iter<'_, StyledRune> { self.runes.iter() }

        #[must_use]
        pub fn into_inner(self) -> InlineVecStyledRunes { self.runes }
    }
}

mod conversions_impl {
    use super::{StyledRune,
                StyledRunes,
                sizing::{self, InlineVecStyledRunes}};

    impl FromIterator<StyledRune> for StyledRunes {
        fn from_iter<I: IntoIterator<Item = StyledRune>>(iter: I) -> Self {
            Self {
                runes: iter.into_iter().collect(),
            }
        }
    }

    impl From<Vec<StyledRune>> for StyledRunes {
        fn from(vec: Vec<StyledRune>) -> Self {
            Self {
                runes: InlineVecStyledRunes::from_vec(vec),
            }
        }
    }

    impl From<InlineVecStyledRunes> for StyledRunes {
        fn from(runes: InlineVecStyledRunes) -> Self { Self { runes } }
    }

    impl<'a> IntoIterator for &'a StyledRunes {
        type Item = &'a StyledRune;
        type IntoIter = std::slice::Iter<'a, StyledRune>;

        fn into_iter(self) -> Self::IntoIter { self.runes.iter() }
    }

    impl IntoIterator for StyledRunes {
        type Item = StyledRune;
        type IntoIter = smallvec::IntoIter<[StyledRune; sizing::DEFAULT_STYLED_RUNES_SIZE]>;

        fn into_iter(self) -> Self::IntoIter { self.runes.into_iter() }
    }
}

impl Deref for StyledRunes {
    type Target = [StyledRune];

    fn deref(&self) -> &Self::Target { &self.runes }
}

mod display_trait_impl {
    use super::{Display, Formatter, Result, StyledRunes};

    impl Display for StyledRunes {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for rune in &self.runes {
                write!(f, "{rune}")?;
            }
            Ok(())
        }
    }
}
