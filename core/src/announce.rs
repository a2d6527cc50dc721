use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spoken cardinal form of a pool number, e.g. `23` is "twenty three".
pub fn number_to_words(number: Number) -> Option<String> {
    if !is_valid_number(number) {
        return None;
    }

    let number = usize::from(number);
    let mut words = String::new();
    match number {
        1..=9 => words.push_str(ONES[number]),
        10..=19 => words.push_str(TEENS[number - 10]),
        _ => {
            words.push_str(TENS[number / 10]);
            if number % 10 > 0 {
                words.push(' ');
                words.push_str(ONES[number % 10]);
            }
        }
    }
    Some(words)
}

/// Speech parameters a voice backend should use.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub rate: f32,
    pub volume: f32,
    pub pitch: f32,
}

impl Voice {
    pub const CALLER: Self = Self {
        rate: 0.7,
        volume: 0.9,
        pitch: 1.1,
    };

    pub const HOST: Self = Self {
        rate: 0.8,
        volume: 0.9,
        pitch: 1.0,
    };
}

/// Something worth saying out loud.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Announcement {
    Number(Number),
    GameComplete,
    NewGame { player: Option<String> },
    Welcome { player: String },
}

impl Announcement {
    pub fn voice(&self) -> Voice {
        match self {
            Self::Number(_) => Voice::CALLER,
            Self::GameComplete | Self::NewGame { .. } | Self::Welcome { .. } => Voice::HOST,
        }
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => match number_to_words(*number) {
                Some(words) => write!(f, "Number {number}, {words}"),
                None => write!(f, "Number {number}"),
            },
            Self::GameComplete => f.write_str("Game complete! All numbers have been picked!"),
            Self::NewGame { player: Some(player) } => {
                write!(f, "New game started for {player}! Let's play Tambola!")
            }
            Self::NewGame { player: None } => f.write_str("New game started! Let's play Tambola!"),
            Self::Welcome { player } => write!(f, "Welcome {player}! Let's start playing Tambola!"),
        }
    }
}

/// Port for voicing game events.
///
/// Calls are fire-and-forget: implementations must return promptly and swallow their own failures, the session never
/// looks at the outcome.
pub trait Announcer {
    fn announce(&mut self, announcement: &Announcement);
}

/// Announcer that says nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Silent;

impl Announcer for Silent {
    fn announce(&mut self, _announcement: &Announcement) {}
}
