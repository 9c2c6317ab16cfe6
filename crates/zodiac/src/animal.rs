//! The twelve-animal cycle.

use std::fmt;

use serde::{Serialize, Serializer};

/// Year of the cycle that maps to [`Animal::Rat`].
pub const RAT_ANCHOR_YEAR: i32 = 2020;

/// A zodiac animal, in cycle order starting at Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Animal {
    /// All animals in cycle order.
    pub const ALL: [Animal; 12] = [
        Animal::Rat,
        Animal::Ox,
        Animal::Tiger,
        Animal::Rabbit,
        Animal::Dragon,
        Animal::Snake,
        Animal::Horse,
        Animal::Goat,
        Animal::Monkey,
        Animal::Rooster,
        Animal::Dog,
        Animal::Pig,
    ];

    /// Returns the animal at `index` (taken modulo 12).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns the animal for a zodiac year.
    pub fn for_year(zodiac_year: i32) -> Self {
        Self::from_index(cycle_index(zodiac_year))
    }

    /// Position in the cycle, 0 for Rat through 11 for Pig.
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name of the animal.
    pub fn label(self) -> &'static str {
        match self {
            Animal::Rat => "Rat",
            Animal::Ox => "Ox",
            Animal::Tiger => "Tiger",
            Animal::Rabbit => "Rabbit",
            Animal::Dragon => "Dragon",
            Animal::Snake => "Snake",
            Animal::Horse => "Horse",
            Animal::Goat => "Goat",
            Animal::Monkey => "Monkey",
            Animal::Rooster => "Rooster",
            Animal::Dog => "Dog",
            Animal::Pig => "Pig",
        }
    }
}

/// `(zodiac_year - 2020) mod 12`, always in `0..12`.
pub fn cycle_index(zodiac_year: i32) -> usize {
    (zodiac_year - RAT_ANCHOR_YEAR).rem_euclid(12) as usize
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Animal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
