use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Grid of cells with a fixed mine layout.
///
/// Coordinates are `(row, col)` and sizes are `(height, width)`, matching the
/// `ndarray` shape of the underlying grid.
///
/// Only serializable: every board is built through `from_mine_mask`, which
/// keeps the mine count and neighbor counts consistent with the layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds the grid from a mine mask, computing every neighbor count.
    pub(crate) fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let dim = mine_mask.dim();
        let size: Coord2 = (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        );

        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(dim, |(row, col)| {
            let is_mine = mine_mask[(row, col)];
            if is_mine {
                mine_count += 1;
            }
            // row and col are bounded by `size`, which fits in a `Coord`
            let coords = (row as Coord, col as Coord);
            let neighbor_mines = NeighborIter::new(coords, size)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            Cell::new(is_mine, neighbor_mines as u8)
        });

        Self { cells, mine_count }
    }

    /// Builds a board of `size` (`(height, width)`) with mines at exactly the
    /// given coordinates. Duplicate coordinates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self, LayoutError> {
        let (height, width) = size;
        if !GameConfig::side_in_range(width.into()) || !GameConfig::side_in_range(height.into()) {
            return Err(LayoutError::InvalidSize);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= height || coords.1 >= width {
                return Err(LayoutError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.width(), self.height(), self.mine_count)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (height, width) = self.size();
        coords.0 < height && coords.1 < width
    }

    pub fn cell(&self, coords: Coord2) -> &Cell {
        &self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Iterates every cell in row-major order together with its coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub(crate) fn iter_mines_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().filter(|cell| cell.is_mine())
    }

    pub(crate) fn grid(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        self.cell(coords)
    }
}
