use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map_opt, error::Error, Err, IResult},
    rayon::iter::{IntoParallelIterator, ParallelIterator},
    std::collections::HashSet,
    strum::EnumCount,
};

/* --- Day 6: Guard Gallivant ---

A guard starts at `^` facing north, walking straight until blocked by an obstruction (`#`), at
which point she turns right, repeating until she leaves the mapped area. Part one counts the
distinct positions she visits. Part two counts the empty positions where a single new obstruction
would trap her in a loop. */

define_cell! {
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Cell {
        Empty = b'.',
        Obstruction = b'#',
        Guard = b'^',
    }
}

enum PatrolOutcome {
    Exited(HashSet<IVec2>),
    Looped,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid2D<Cell>,
    guard_pos: IVec2,
}

impl Solution {
    /// Walks the patrol until the guard exits or revisits a `(position, direction)` state, with
    /// `extra_obstruction` standing in for a cell mutation.
    fn patrol(&self, extra_obstruction: Option<IVec2>) -> PatrolOutcome {
        let mut visited_states: HashSet<(IVec2, Direction)> = HashSet::new();
        let mut pos: IVec2 = self.guard_pos;
        let mut dir: Direction = Direction::North;

        loop {
            if !visited_states.insert((pos, dir)) {
                return PatrolOutcome::Looped;
            }

            let mut next_pos: IVec2 = pos + dir.vec();
            let mut turns: usize = 0_usize;

            while extra_obstruction == Some(next_pos)
                || self.grid.get(next_pos) == Some(&Cell::Obstruction)
            {
                // Obstructions on all four sides pin the guard in place.
                if turns == Direction::COUNT {
                    return PatrolOutcome::Looped;
                }

                dir = dir.turn_right();
                next_pos = pos + dir.vec();
                turns += 1_usize;
            }

            if !self.grid.contains(next_pos) {
                return PatrolOutcome::Exited(
                    visited_states
                        .into_iter()
                        .map(|(pos, _)| pos)
                        .collect(),
                );
            }

            pos = next_pos;
        }
    }

    fn visited_position_count(&self) -> usize {
        match self.patrol(None) {
            PatrolOutcome::Exited(visited_positions) => visited_positions.len(),
            PatrolOutcome::Looped => 0_usize,
        }
    }

    fn looping_obstruction_count(&self) -> usize {
        // Only positions on the original route can change the patrol.
        let candidates: Vec<IVec2> = match self.patrol(None) {
            PatrolOutcome::Exited(mut visited_positions) => {
                visited_positions.remove(&self.guard_pos);

                visited_positions.into_iter().collect()
            }
            PatrolOutcome::Looped => Vec::new(),
        };

        candidates
            .into_par_iter()
            .filter(|&candidate: &IVec2| {
                matches!(self.patrol(Some(candidate)), PatrolOutcome::Looped)
            })
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(Grid2D::parse, |grid: Grid2D<Cell>| {
            let guard_pos: IVec2 = grid.try_find_single_position_with_cell(&Cell::Guard)?;

            Some(Self { grid, guard_pos })
        })(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.visited_position_count());
    }

    /// Rayon turns the obstruction sweep from coffee-break slow into unnoticeable.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.looping_obstruction_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
