use {
    crate::*,
    nom::{
        bytes::complete::tag,
        combinator::map,
        error::Error,
        multi::separated_list1,
        Err, IResult,
    },
    std::collections::HashMap,
};

/* --- Day 11: Plutonian Pebbles ---

A line of engraved stones changes simultaneously with every blink: a 0 becomes a 1, a stone with
an even number of digits splits into its left and right halves, and anything else is multiplied
by 2024. Part one counts the stones after 25 blinks, part two after 75. Order never actually
matters, so stones can be counted independently. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u64>);

type StoneCountCache = HashMap<(u64, u8), u64>;

impl Solution {
    fn try_split_digits(stone: u64) -> Option<(u64, u64)> {
        let digit_count: u32 = stone.checked_ilog10()? + 1_u32;

        (digit_count % 2_u32 == 0_u32).then(|| {
            let half_shift: u64 = 10_u64.pow(digit_count / 2_u32);

            (stone / half_shift, stone % half_shift)
        })
    }

    fn count_stones(stone: u64, blinks: u8, cache: &mut StoneCountCache) -> u64 {
        if blinks == 0_u8 {
            1_u64
        } else if let Some(&count) = cache.get(&(stone, blinks)) {
            count
        } else {
            let count: u64 = if stone == 0_u64 {
                Self::count_stones(1_u64, blinks - 1_u8, cache)
            } else if let Some((left, right)) = Self::try_split_digits(stone) {
                Self::count_stones(left, blinks - 1_u8, cache)
                    + Self::count_stones(right, blinks - 1_u8, cache)
            } else {
                Self::count_stones(stone * 2024_u64, blinks - 1_u8, cache)
            };

            cache.insert((stone, blinks), count);

            count
        }
    }

    fn stone_count_after_blinks(&self, blinks: u8) -> u64 {
        let mut cache: StoneCountCache = StoneCountCache::new();

        self.0
            .iter()
            .map(|&stone| Self::count_stones(stone, blinks, &mut cache))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(tag(" "), parse_integer), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.stone_count_after_blinks(25_u8));
    }

    /// The memo keyed on `(stone, blinks)` is what makes 75 blinks tractable.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.stone_count_after_blinks(75_u8));
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

    const SOLUTION_STRS: &'static [&'static str] = &["0 1 10 99 999", "125 17"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![
                Solution(vec![0_u64, 1_u64, 10_u64, 99_u64, 999_u64]),
                Solution(vec![125_u64, 17_u64]),
            ]
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        for (index, solution_str) in SOLUTION_STRS.iter().copied().enumerate() {
            assert_eq!(
                Solution::try_from(solution_str).as_ref(),
                Ok(solution(index))
            );
        }
    }

    #[test]
    fn test_try_split_digits() {
        assert_eq!(Solution::try_split_digits(0_u64), None);
        assert_eq!(Solution::try_split_digits(7_u64), None);
        assert_eq!(Solution::try_split_digits(10_u64), Some((1_u64, 0_u64)));
        assert_eq!(Solution::try_split_digits(253000_u64), Some((253_u64, 0_u64)));
        assert_eq!(Solution::try_split_digits(512072_u64), Some((512_u64, 72_u64)));
    }

    #[test]
    fn test_stone_count_after_blinks() {
        assert_eq!(solution(0_usize).stone_count_after_blinks(1_u8), 7_u64);
        assert_eq!(solution(1_usize).stone_count_after_blinks(6_u8), 22_u64);
        assert_eq!(solution(1_usize).stone_count_after_blinks(25_u8), 55312_u64);
    }
}
