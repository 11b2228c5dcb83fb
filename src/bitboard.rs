//! A fixed-capacity bit grid packed into a single unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. Unlike a
//! const-generic board, the width and height are chosen at runtime (they come
//! from the game configuration), but `width * height` must still fit into the
//! bits of `T`. Cells are addressed with [`GridLocation`] in row-major order.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::GridLocation;

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested `width * height` exceeds the capacity of `T::BITS`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Width or height is zero.
    EmptyBoard,
    /// Location lies outside `[0, width) x [0, height)`.
    IndexOutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed T::BITS={}", cells, capacity)
            }
            BitBoardError::EmptyBoard => write!(f, "EmptyBoard: width and height must be > 0"),
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A `width × height` set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    width: usize,
    height: usize,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells `T` can hold.
    #[inline]
    pub fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Fallible constructor: all cells cleared.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BitBoardError> {
        if width == 0 || height == 0 {
            return Err(BitBoardError::EmptyBoard);
        }
        let capacity = Self::capacity();
        let cells = width
            .checked_mul(height)
            .ok_or(BitBoardError::SizeTooLarge {
                cells: usize::MAX,
                capacity,
            })?;
        if cells > capacity {
            return Err(BitBoardError::SizeTooLarge { cells, capacity });
        }
        Ok(BitGrid {
            bits: T::zero(),
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at `loc`.
    pub fn contains(&self, loc: GridLocation) -> Result<bool, BitBoardError> {
        let idx = self.index(loc)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at `loc`. Returns `true` if it was previously clear.
    pub fn insert(&mut self, loc: GridLocation) -> Result<bool, BitBoardError> {
        let idx = self.index(loc)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Clears the bit at `loc`.
    pub fn remove(&mut self, loc: GridLocation) -> Result<(), BitBoardError> {
        let idx = self.index(loc)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Clears all bits.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, loc: GridLocation) -> Result<usize, BitBoardError> {
        if loc.x < 0 || loc.y < 0 || loc.x as usize >= self.width || loc.y as usize >= self.height
        {
            Err(BitBoardError::IndexOutOfBounds { x: loc.x, y: loc.y })
        } else {
            Ok(loc.y as usize * self.width + loc.x as usize)
        }
    }

    #[inline]
    fn bit_at(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }

    #[inline]
    fn location_of(&self, idx: usize) -> GridLocation {
        GridLocation::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Iterator over the set cells.
    #[inline]
    pub fn iter_set(&self) -> Cells<'_, T> {
        Cells {
            grid: self,
            idx: 0,
            want: true,
        }
    }

    /// Iterator over the clear cells.
    #[inline]
    pub fn iter_unset(&self) -> Cells<'_, T> {
        Cells {
            grid: self,
            idx: 0,
            want: false,
        }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitGrid<{}, {}x{}>:",
            any::type_name::<T>(),
            self.width,
            self.height
        )?;
        fmt::Display::fmt(self, f)?;
        writeln!(f)
    }
}

impl<T> fmt::Display for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let bit = if self.bit_at(y * self.width + x) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set (or clear) cells of a bit grid, row by row.
#[derive(Clone, Copy)]
pub struct Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
    want: bool,
}

impl<'a, T> Iterator for Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = GridLocation;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let total = self.grid.width * self.grid.height;
        while self.idx < total {
            let idx = self.idx;
            self.idx += 1;
            if self.grid.bit_at(idx) == self.want {
                return Some(self.grid.location_of(idx));
            }
        }
        None
    }
}

/// Set of attacked locations used by the match controller.
pub type MoveGrid = BitGrid<u128>;
