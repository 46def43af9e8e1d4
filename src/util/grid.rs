pub use direction::*;

use {
    super::Parse,
    glam::IVec2,
    nom::{
        character::complete::line_ending,
        combinator::opt,
        error::{Error as NomError, ErrorKind as NomErrorKind},
        multi::many1,
        sequence::terminated,
        Err, IResult,
    },
    std::fmt::{Debug, DebugList, Formatter, Result as FmtResult},
};

mod direction {
    use {
        glam::IVec2,
        static_assertions::const_assert,
        strum::{EnumCount, EnumIter},
    };

    #[derive(Clone, Copy, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
    #[repr(u8)]
    pub enum Direction {
        #[default]
        North,
        East,
        South,
        West,
    }

    // The cyclic arithmetic below masks by `MASK`, which only produces valid discriminants while
    // there are exactly four variants.
    const_assert!(Direction::COUNT == 4_usize);

    impl Direction {
        const MASK: u8 = Self::COUNT as u8 - 1_u8;

        #[inline]
        pub const fn vec(self) -> IVec2 {
            match self {
                Self::North => IVec2::NEG_Y,
                Self::East => IVec2::X,
                Self::South => IVec2::Y,
                Self::West => IVec2::NEG_X,
            }
        }

        #[inline]
        pub const fn from_u8(value: u8) -> Self {
            match value & Self::MASK {
                0_u8 => Self::North,
                1_u8 => Self::East,
                2_u8 => Self::South,
                _ => Self::West,
            }
        }

        /// Rotates 90 degrees clockwise.
        #[inline]
        pub const fn turn_right(self) -> Self {
            Self::from_u8(self as u8 + 1_u8)
        }

        /// Rotates 90 degrees counterclockwise.
        #[inline]
        pub const fn turn_left(self) -> Self {
            Self::from_u8(self as u8 + Self::COUNT as u8 - 1_u8)
        }

        #[inline]
        pub const fn rev(self) -> Self {
            Self::from_u8(self as u8 + Self::COUNT as u8 / 2_u8)
        }
    }

    impl From<Direction> for IVec2 {
        fn from(value: Direction) -> Self {
            value.vec()
        }
    }

    impl From<u8> for Direction {
        fn from(value: u8) -> Self {
            Self::from_u8(value)
        }
    }
}

pub fn manhattan_magnitude(pos: IVec2) -> i32 {
    let abs: IVec2 = pos.abs();

    abs.x + abs.y
}

pub fn manhattan_distance(a: IVec2, b: IVec2) -> i32 {
    manhattan_magnitude(a - b)
}

/// A rectangular field of cells backed by a flat `Vec`, indexed by `IVec2` positions with `y`
/// growing downwards.
pub struct Grid2D<T> {
    cells: Vec<T>,

    /// Should only contain non-negative values, but is signed for ease of position arithmetic
    dimensions: IVec2,
}

impl<T> Grid2D<T> {
    pub fn try_from_cells_and_width(cells: Vec<T>, width: usize) -> Option<Self> {
        (width != 0_usize && cells.len() % width == 0_usize).then(|| {
            let height: usize = cells.len() / width;

            Self {
                cells,
                dimensions: IVec2::new(width as i32, height as i32),
            }
        })
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmplt(self.dimensions).all()
    }

    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn try_index_from_pos(&self, pos: IVec2) -> Option<usize> {
        self.contains(pos).then(|| self.index_from_pos(pos))
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        let width: usize = self.dimensions.x as usize;

        IVec2::new((index % width) as i32, (index / width) as i32)
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &mut self.cells[index])
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = IVec2> {
        let dimensions: IVec2 = self.dimensions;

        (0_i32..dimensions.y)
            .flat_map(move |y| (0_i32..dimensions.x).map(move |x| IVec2::new(x, y)))
    }

    pub fn iter_filtered_positions<'a, P: Fn(&T) -> bool + 'a>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = IVec2> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| predicate(cell).then(|| self.pos_from_index(index)))
    }

    pub fn iter_positions_with_cell<'a>(&'a self, target: &'a T) -> impl Iterator<Item = IVec2> + 'a
    where
        T: PartialEq,
    {
        self.iter_filtered_positions(|cell| *cell == *target)
    }

    /// Returns the position of the sole cell equal to `target`, or `None` if there are zero or
    /// multiple such cells.
    pub fn try_find_single_position_with_cell(&self, target: &T) -> Option<IVec2>
    where
        T: PartialEq,
    {
        let mut positions = self.iter_positions_with_cell(target);
        let pos: IVec2 = positions.next()?;

        positions.next().is_none().then_some(pos)
    }
}

impl<T: Clone> Clone for Grid2D<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            dimensions: self.dimensions,
        }
    }
}

impl<T: Debug> Debug for Grid2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Grid2D")?;

        let mut row_list: DebugList = f.debug_list();

        for y in 0_i32..self.dimensions.y {
            let start: usize = (y * self.dimensions.x) as usize;

            row_list.entry(&&self.cells[start..start + self.dimensions.x as usize]);
        }

        row_list.finish()
    }
}

impl<T: PartialEq> PartialEq for Grid2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && self.cells == other.cells
    }
}

impl<T: Copy + Into<char>> From<&Grid2D<T>> for String {
    fn from(value: &Grid2D<T>) -> Self {
        let width: usize = value.dimensions.x as usize;
        let mut string: String =
            String::with_capacity((width + 1_usize) * value.dimensions.y as usize);

        for (index, cell) in value.cells.iter().enumerate() {
            string.push((*cell).into());

            if index % width == width - 1_usize {
                string.push('\n');
            }
        }

        string
    }
}

/// Parses cells row by row, requiring every row to have the length of the first.
impl<T: Parse> Parse for Grid2D<T> {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let (input, rows): (&str, Vec<Vec<T>>) =
            many1(terminated(many1(T::parse), opt(line_ending)))(input)?;
        let width: usize = rows[0_usize].len();

        if rows.iter().any(|row: &Vec<T>| row.len() != width) {
            return Err(Err::Failure(NomError::new(input, NomErrorKind::Verify)));
        }

        let cells: Vec<T> = rows.into_iter().flatten().collect();

        Grid2D::try_from_cells_and_width(cells, width)
            .map(|grid: Self| (input, grid))
            .ok_or_else(|| Err::Failure(NomError::new(input, NomErrorKind::Verify)))
    }
}
