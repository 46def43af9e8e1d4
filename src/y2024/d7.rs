use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    rayon::iter::{IntoParallelRefIterator, ParallelIterator},
};

/* --- Day 7: Bridge Repair ---

Each calibration equation has a test value and a list of operands that must be combined
left-to-right (no precedence) with `+` and `*` to produce it. Part one sums the test values of the
solvable equations. Part two adds a `||` concatenation operator and sums again. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

impl Equation {
    fn concatenate(left: u64, right: u64) -> u64 {
        let mut shift: u64 = 10_u64;

        while shift <= right {
            shift *= 10_u64;
        }

        left * shift + right
    }

    fn can_produce(test_value: u64, accumulator: u64, operands: &[u64], concatenation: bool) -> bool {
        match operands.split_first() {
            None => accumulator == test_value,
            // All operators only grow the accumulator, so overshoots can be pruned.
            Some(_) if accumulator > test_value => false,
            Some((&operand, rest)) => {
                Self::can_produce(test_value, accumulator + operand, rest, concatenation)
                    || Self::can_produce(test_value, accumulator * operand, rest, concatenation)
                    || (concatenation
                        && Self::can_produce(
                            test_value,
                            Self::concatenate(accumulator, operand),
                            rest,
                            concatenation,
                        ))
            }
        }
    }

    fn is_solvable(&self, concatenation: bool) -> bool {
        self.operands
            .split_first()
            .map_or(false, |(&first, rest)| {
                Self::can_produce(self.test_value, first, rest, concatenation)
            })
    }
}

impl Parse for Equation {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                parse_integer,
                tag(": "),
                separated_list1(tag(" "), parse_integer),
            ),
            |(test_value, operands)| Self {
                test_value,
                operands,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Equation>);

impl Solution {
    fn total_calibration_result(&self, concatenation: bool) -> u64 {
        self.0
            .par_iter()
            .filter(|equation| equation.is_solvable(concatenation))
            .map(|equation| equation.test_value)
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Equation::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_calibration_result(false));
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_calibration_result(true));
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
        190: 10 19\n\
        3267: 81 40 27\n\
        83: 17 5\n\
        156: 15 6\n\
        7290: 6 8 6 15\n\
        161011: 16 10 13\n\
        192: 17 8 14\n\
        21037: 9 7 18 13\n\
        292: 11 6 16 20\n"];

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

        assert_eq!(solution.0.len(), 9_usize);
        assert_eq!(
            solution.0[0_usize],
            Equation {
                test_value: 190_u64,
                operands: vec![10_u64, 19_u64]
            }
        );
    }

    #[test]
    fn test_concatenate() {
        assert_eq!(Equation::concatenate(15_u64, 6_u64), 156_u64);
        assert_eq!(Equation::concatenate(48_u64, 6_u64), 486_u64);
        assert_eq!(Equation::concatenate(1_u64, 0_u64), 10_u64);
    }

    #[test]
    fn test_total_calibration_result() {
        for (index, (without_concatenation, with_concatenation)) in
            [(3749_u64, 11387_u64)].into_iter().enumerate()
        {
            assert_eq!(
                solution(index).total_calibration_result(false),
                without_concatenation
            );
            assert_eq!(
                solution(index).total_calibration_result(true),
                with_concatenation
            );
        }
    }
}
