use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Interaction progress of one board space, advanced by closing its overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceState {
    Unstarted,
    Started,
    Complete,
}

impl SpaceState {
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for SpaceState {
    fn default() -> Self {
        Self::Unstarted
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// All state of one game: the sampled categories and per-space progress.
///
/// Every category holds the same number of clues. Only [`Board::reveal`] and
/// [`Board::dismiss_modal`] mutate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
    space_state: Vec<Vec<SpaceState>>,
}

impl Board {
    /// Builds a fresh board, every clue hidden and every space unstarted.
    ///
    /// Categories must all have the same clue count.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let clues_per_category = categories.first().map_or(0, |c| c.clues.len());
        if let Some((index, category)) = categories
            .iter()
            .enumerate()
            .find(|(_, category)| category.clues.len() != clues_per_category)
        {
            return Err(BoardError::UnevenCategory {
                category: index,
                clues: category.clues.len(),
                expected: clues_per_category,
            });
        }

        let space_state = vec![vec![SpaceState::default(); clues_per_category]; categories.len()];
        Ok(Self {
            categories,
            space_state,
        })
    }

    /// `(categories, clues_per_category)`
    pub fn size(&self) -> Coord2 {
        (
            self.categories.len(),
            self.categories.first().map_or(0, |c| c.clues.len()),
        )
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, category: usize) -> Option<&Category> {
        self.categories.get(category)
    }

    pub fn clue(&self, category: usize, clue: usize) -> Option<&Clue> {
        self.categories.get(category)?.clues.get(clue)
    }

    pub fn space_state(&self, category: usize, clue: usize) -> Option<SpaceState> {
        self.space_state.get(category)?.get(clue).copied()
    }

    pub fn validate_coords(&self, category: usize, clue: usize) -> Result<Coord2> {
        let (categories, clues) = self.size();
        if category < categories && clue < clues {
            Ok((category, clue))
        } else {
            Err(BoardError::InvalidCoords { category, clue })
        }
    }

    /// Every space has had its overlay closed twice.
    pub fn is_complete(&self) -> bool {
        self.space_state
            .iter()
            .flatten()
            .all(|state| state.is_complete())
    }

    /// Advances a clue Hidden -> Question -> Answer and returns what to show.
    ///
    /// Once the answer is showing, further calls return it again unchanged.
    pub fn reveal(&mut self, category: usize, clue: usize) -> Result<Reveal> {
        let (category, clue) = self.validate_coords(category, clue)?;
        let reveal = self.categories[category].clues[clue].reveal();
        log::trace!("reveal ({}, {}): {:?}", category, clue, reveal.kind);
        Ok(reveal)
    }

    /// Advances a space Unstarted -> Started -> Complete when its overlay closes.
    pub fn dismiss_modal(&mut self, category: usize, clue: usize) -> Result<SpaceState> {
        use SpaceState::*;

        let (category, clue) = self.validate_coords(category, clue)?;
        let state = &mut self.space_state[category][clue];
        *state = match *state {
            Unstarted => Started,
            Started | Complete => Complete,
        };
        log::trace!("dismiss ({}, {}): {:?}", category, clue, state);
        Ok(*state)
    }
}
