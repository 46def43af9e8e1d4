use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
};

/* --- Day 4: Ceres Search ---

A word search. Part one counts every occurrence of XMAS, in all eight directions, overlapping
allowed. Part two instead counts X-shaped crossings: an A with MAS running along both diagonals
through it, in either orientation. */

define_cell! {
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Letter {
        X = b'X',
        M = b'M',
        A = b'A',
        S = b'S',
    }
}

const XMAS: [Letter; 4_usize] = [Letter::X, Letter::M, Letter::A, Letter::S];

const ALL_DELTAS: [IVec2; 8_usize] = [
    IVec2::new(-1_i32, -1_i32),
    IVec2::new(0_i32, -1_i32),
    IVec2::new(1_i32, -1_i32),
    IVec2::new(-1_i32, 0_i32),
    IVec2::new(1_i32, 0_i32),
    IVec2::new(-1_i32, 1_i32),
    IVec2::new(0_i32, 1_i32),
    IVec2::new(1_i32, 1_i32),
];

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Letter>);

impl Solution {
    fn word_matches_at(&self, pos: IVec2, delta: IVec2) -> bool {
        XMAS.into_iter().enumerate().all(|(offset, letter)| {
            self.0.get(pos + delta * offset as i32) == Some(&letter)
        })
    }

    fn xmas_count(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Letter::X)
            .map(|pos: IVec2| {
                ALL_DELTAS
                    .into_iter()
                    .filter(|&delta| self.word_matches_at(pos, delta))
                    .count()
            })
            .sum()
    }

    fn diagonal_is_mas(&self, pos: IVec2, delta: IVec2) -> bool {
        matches!(
            (self.0.get(pos - delta), self.0.get(pos + delta)),
            (Some(Letter::M), Some(Letter::S)) | (Some(Letter::S), Some(Letter::M))
        )
    }

    fn x_mas_count(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Letter::A)
            .filter(|&pos: &IVec2| {
                self.diagonal_is_mas(pos, IVec2::ONE)
                    && self.diagonal_is_mas(pos, IVec2::new(1_i32, -1_i32))
            })
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.xmas_count());
    }

    /// Misread this one at first as any crossing pair of MAS runs, but only the diagonals count.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.x_mas_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &["\
        MMMSXXMASM\n\
        MSAMXMSMSA\n\
        AMXSXMAAMM\n\
        MSAMASMSMX\n\
        XMASAMXAMM\n\
        XXAMMXXAMA\n\
        SMSMSASXSS\n\
        SAXAMASAAA\n\
        MAMMMXMMMM\n\
        MXMXAXMASX\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .map(|&solution_str| solution_str.try_into().unwrap())
                .collect()
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution(0_usize);

        assert_eq!(solution.0.dimensions(), IVec2::new(10_i32, 10_i32));
        assert_eq!(
            solution.0.iter_positions_with_cell(&Letter::X).count(),
            19_usize
        );
    }

    #[test]
    fn test_xmas_count() {
        for (index, xmas_count) in [18_usize].into_iter().enumerate() {
            assert_eq!(solution(index).xmas_count(), xmas_count);
        }
    }

    #[test]
    fn test_x_mas_count() {
        for (index, x_mas_count) in [9_usize].into_iter().enumerate() {
            assert_eq!(solution(index).x_mas_count(), x_mas_count);
        }
    }
}
