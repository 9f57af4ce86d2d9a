/// Opaque category identifier handed out by the quiz API.
pub type CategoryId = u32;

/// Board position `(category_index, clue_index)`: grid column, then grid row.
pub type Coord2 = (usize, usize);
