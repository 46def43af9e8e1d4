use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::satisfy,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::HashSet,
    strum::IntoEnumIterator,
};

/* --- Day 10: Hoof It ---

A topographic map of heights 0-9. Hiking trails start at height 0, end at height 9, and climb by
exactly 1 per orthogonal step. Part one sums each trailhead's score, the number of distinct
summits it can reach. Part two sums each trailhead's rating, the number of distinct trails that
start there. */

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, PartialEq)]
struct Height(u8);

impl Parse for Height {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(satisfy(|c: char| c.is_ascii_digit()), |c: char| {
            Self(c as u8 - b'0')
        })(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Height>);

impl Solution {
    const TRAILHEAD: Height = Height(0_u8);
    const SUMMIT: Height = Height(9_u8);

    fn for_each_trail_end<F: FnMut(IVec2)>(&self, trailhead: IVec2, f: &mut F) {
        let mut stack: Vec<IVec2> = vec![trailhead];

        while let Some(pos) = stack.pop() {
            let height: Height = *self.0.get(pos).unwrap_or(&Self::TRAILHEAD);

            if height == Self::SUMMIT {
                f(pos);

                continue;
            }

            for dir in Direction::iter() {
                let next_pos: IVec2 = pos + dir.vec();

                if self.0.get(next_pos) == Some(&Height(height.0 + 1_u8)) {
                    stack.push(next_pos);
                }
            }
        }
    }

    fn trailhead_score_sum(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Self::TRAILHEAD)
            .map(|trailhead: IVec2| {
                let mut summits: HashSet<IVec2> = HashSet::new();

                self.for_each_trail_end(trailhead, &mut |summit| {
                    summits.insert(summit);
                });

                summits.len()
            })
            .sum()
    }

    fn trailhead_rating_sum(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Self::TRAILHEAD)
            .map(|trailhead: IVec2| {
                let mut trail_count: usize = 0_usize;

                self.for_each_trail_end(trailhead, &mut |_| trail_count += 1_usize);

                trail_count
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.trailhead_score_sum());
    }

    /// Scores dedupe the summits, ratings count every path, so the rating search is the score
    /// search without the set.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.trailhead_rating_sum());
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
        89010123\n\
        78121874\n\
        87430965\n\
        96549874\n\
        45678903\n\
        32019012\n\
        01329801\n\
        10456732\n"];

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

        assert_eq!(solution.0.dimensions(), IVec2::new(8_i32, 8_i32));
        assert_eq!(
            solution
                .0
                .iter_positions_with_cell(&Solution::TRAILHEAD)
                .count(),
            9_usize
        );
    }

    #[test]
    fn test_trailhead_score_sum() {
        for (index, score_sum) in [36_usize].into_iter().enumerate() {
            assert_eq!(solution(index).trailhead_score_sum(), score_sum);
        }
    }

    #[test]
    fn test_trailhead_rating_sum() {
        for (index, rating_sum) in [81_usize].into_iter().enumerate() {
            assert_eq!(solution(index).trailhead_rating_sum(), rating_sum);
        }
    }
}
