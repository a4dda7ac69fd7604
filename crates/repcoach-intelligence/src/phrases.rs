// ABOUTME: Categorized feedback phrase sets with uniform random selection
// ABOUTME: Encouragement for stalled users plus down and up cues for pushups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const ENCOURAGEMENT: [&str; 4] = [
    "You can do it!",
    "Push through!",
    "Almost there!",
    "Don't give up!",
];

const PUSHUP_DOWN_CUES: [&str; 3] = ["Go lower.", "Chest to the floor.", "Nice and controlled."];

const PUSHUP_UP_CUES: [&str; 3] = ["Push all the way up.", "Extend your arms.", "Power up!"];

/// Named phrase set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCategory {
    /// Shown while the user is stalled in the flexed stage
    Encouragement,
    /// Shown on entering the flexed stage
    DownCue,
    /// Shown on leaving the top of the movement
    UpCue,
}

impl PhraseCategory {
    /// Every phrase in this category
    #[must_use]
    pub const fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Encouragement => &ENCOURAGEMENT,
            Self::DownCue => &PUSHUP_DOWN_CUES,
            Self::UpCue => &PUSHUP_UP_CUES,
        }
    }

    /// Whether `phrase` belongs to this category
    #[must_use]
    pub fn contains(self, phrase: &str) -> bool {
        self.phrases().contains(&phrase)
    }
}

/// Uniform pick with replacement from the thread-local RNG
#[must_use]
pub fn pick(category: PhraseCategory) -> &'static str {
    pick_with(category, &mut rand::thread_rng())
}

/// Uniform pick with replacement from the given RNG
#[must_use]
pub fn pick_with<R: Rng + ?Sized>(category: PhraseCategory, rng: &mut R) -> &'static str {
    // Every category is a non-empty const array
    category.phrases().choose(rng).copied().unwrap_or_default()
}
