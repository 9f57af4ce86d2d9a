#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use client::*;
pub use clue::*;
pub use controller::*;
pub use error::*;
pub use sample::*;
pub use types::*;

mod board;
mod client;
mod clue;
mod controller;
mod error;
mod sample;
mod types;

#[cfg(test)]
mod testing;

pub const MAX_CATEGORIES: u8 = 12;
pub const MAX_CLUES_PER_CATEGORY: u8 = 10;
/// Largest `count` the jService listing honours; bigger requests come back truncated.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Shape of one board: how many categories (columns) and clues per category (rows).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: u8,
    pub clues_per_category: u8,
}

impl GameConfig {
    pub const fn new_unchecked(categories: u8, clues_per_category: u8) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    pub fn new(categories: u8, clues_per_category: u8) -> Self {
        let categories = categories.clamp(1, MAX_CATEGORIES);
        let clues_per_category = clues_per_category.clamp(1, MAX_CLUES_PER_CATEGORY);
        Self::new_unchecked(categories, clues_per_category)
    }

    pub const fn total_spaces(&self) -> usize {
        self.categories as usize * self.clues_per_category as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(6, 5)
    }
}

/// How much of the remote category listing is scanned for eligible categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    pub page_size: u32,
    pub max_pages: u32,
}

impl ListingConfig {
    /// Page size is clamped to `1..=MAX_PAGE_SIZE` so a full page is never mistaken for
    /// the end of the listing.
    pub fn new(page_size: u32, max_pages: u32) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            max_pages: max_pages.max(1),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            max_pages: 10,
        }
    }
}
