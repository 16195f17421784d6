use crate::domain::properties::TileKind;

/// Fixed-size tile array. Immutable after generation, so reads need no lock.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl WorldGrid {
    /// Returns `None` unless `tiles.len() == width * height` and both dimensions are non-zero.
    pub fn new(width: usize, height: usize, tiles: Vec<TileKind>) -> Option<Self> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(tiles.len()) {
            return None;
        }
        Some(Self {
            width,
            height,
            tiles,
        })
    }

    /// Grid where every cell holds the same kind.
    pub fn filled(width: usize, height: usize, kind: TileKind) -> Option<Self> {
        Self::new(width, height, vec![kind; width.checked_mul(height)?])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    /// Floors world coordinates to a cell. Anything outside the grid reads as `TileKind::None`.
    pub fn tile_at(&self, x: f64, y: f64) -> TileKind {
        let (fx, fy) = (x.floor(), y.floor());
        // NaN fails both comparisons and falls through to the sentinel.
        if !(fx >= 0.0 && fy >= 0.0 && fx < self.width as f64 && fy < self.height as f64) {
            return TileKind::None;
        }
        self.tiles[fy as usize * self.width + fx as usize]
    }

    /// Overwrites a single cell. Used while building a grid; returns false when out of range.
    pub fn set(&mut self, x: usize, y: usize, kind: TileKind) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.tiles[y * self.width + x] = kind;
        true
    }
}
