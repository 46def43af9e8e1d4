use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::terminated,
        Err, IResult,
    },
};

/* --- Day 2: Red-Nosed Reports ---

Each report is a line of levels. A report is safe if the levels are all increasing or all
decreasing, with adjacent levels differing by at least one and at most three. Part one counts the
safe reports. Part two adds the Problem Dampener: a report also counts as safe if removing a
single level makes it safe. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Report(Vec<i32>);

impl Report {
    fn levels_are_safe(levels: &[i32]) -> bool {
        let increasing: bool = levels
            .windows(2_usize)
            .all(|window| (1_i32..=3_i32).contains(&(window[1_usize] - window[0_usize])));
        let decreasing: bool = levels
            .windows(2_usize)
            .all(|window| (1_i32..=3_i32).contains(&(window[0_usize] - window[1_usize])));

        increasing || decreasing
    }

    fn is_safe(&self) -> bool {
        Self::levels_are_safe(&self.0)
    }

    fn is_safe_with_dampener(&self) -> bool {
        self.is_safe()
            || (0_usize..self.0.len()).any(|skipped_index| {
                let mut levels: Vec<i32> = self.0.clone();

                levels.remove(skipped_index);

                Self::levels_are_safe(&levels)
            })
    }
}

impl Parse for Report {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(tag(" "), parse_integer), Self)(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Report>);

impl Solution {
    fn safe_report_count(&self) -> usize {
        self.0.iter().filter(|report| report.is_safe()).count()
    }

    fn safe_report_count_with_dampener(&self) -> usize {
        self.0
            .iter()
            .filter(|report| report.is_safe_with_dampener())
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Report::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.safe_report_count());
    }

    /// Brute force over the removed index is plenty fast at these report lengths.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.safe_report_count_with_dampener());
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
        7 6 4 2 1\n\
        1 2 7 8 9\n\
        9 7 6 2 1\n\
        1 3 2 4 5\n\
        8 6 4 4 1\n\
        1 3 6 7 9\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution(vec![
                Report(vec![7_i32, 6_i32, 4_i32, 2_i32, 1_i32]),
                Report(vec![1_i32, 2_i32, 7_i32, 8_i32, 9_i32]),
                Report(vec![9_i32, 7_i32, 6_i32, 2_i32, 1_i32]),
                Report(vec![1_i32, 3_i32, 2_i32, 4_i32, 5_i32]),
                Report(vec![8_i32, 6_i32, 4_i32, 4_i32, 1_i32]),
                Report(vec![1_i32, 3_i32, 6_i32, 7_i32, 9_i32]),
            ])]
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
    fn test_safe_report_count() {
        for (index, safe_report_count) in [2_usize].into_iter().enumerate() {
            assert_eq!(solution(index).safe_report_count(), safe_report_count);
        }
    }

    #[test]
    fn test_safe_report_count_with_dampener() {
        for (index, safe_report_count) in [4_usize].into_iter().enumerate() {
            assert_eq!(
                solution(index).safe_report_count_with_dampener(),
                safe_report_count
            );
        }
    }
}
