use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::anychar,
        combinator::{map, verify},
        error::Error,
        multi::many0,
        sequence::{delimited, separated_pair},
        Err, IResult,
    },
};

/* --- Day 3: Mull It Over ---

The input is corrupted memory. Part one: scan for valid `mul(X,Y)` instructions, where X and Y are
1-3 digit numbers, and sum the products. Part two: `do()` and `don't()` instructions enable and
disable subsequent `mul`s, starting enabled; sum only the enabled products. */

#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

impl Instruction {
    fn parse_operand<'i>(input: &'i str) -> IResult<&'i str, u32> {
        verify(parse_integer, |&operand: &u32| operand < 1000_u32)(input)
    }
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                delimited(
                    tag("mul("),
                    separated_pair(Self::parse_operand, tag(","), Self::parse_operand),
                    tag(")"),
                ),
                |(left, right)| Self::Mul(left, right),
            ),
            map(tag("do()"), |_| Self::Do),
            map(tag("don't()"), |_| Self::Dont),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    fn mul_sum(&self) -> u32 {
        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(left, right) => left * right,
                _ => 0_u32,
            })
            .sum()
    }

    fn enabled_mul_sum(&self) -> u32 {
        let mut enabled: bool = true;

        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(left, right) => {
                    if enabled {
                        left * right
                    } else {
                        0_u32
                    }
                }
                Instruction::Do => {
                    enabled = true;

                    0_u32
                }
                Instruction::Dont => {
                    enabled = false;

                    0_u32
                }
            })
            .sum()
    }
}

/// Skips over corrupted characters one at a time, collecting any instructions that parse.
impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(alt((map(Instruction::parse, Some), map(anychar, |_| None)))),
            |instructions: Vec<Option<Instruction>>| {
                Self(instructions.into_iter().flatten().collect())
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.mul_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.enabled_mul_sum());
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

    const SOLUTION_STRS: &'static [&'static str] = &[
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))",
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
    ];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            use Instruction::{Do, Dont, Mul};

            vec![
                Solution(vec![
                    Mul(2_u32, 4_u32),
                    Mul(5_u32, 5_u32),
                    Mul(11_u32, 8_u32),
                    Mul(8_u32, 5_u32),
                ]),
                Solution(vec![
                    Mul(2_u32, 4_u32),
                    Dont,
                    Mul(5_u32, 5_u32),
                    Mul(11_u32, 8_u32),
                    Do,
                    Mul(8_u32, 5_u32),
                ]),
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
    fn test_negative_operand_is_corruption() {
        let solution: Solution = Solution::try_from("xmul(-1,2)ymul(2,4)").unwrap();

        assert_eq!(solution.0, vec![Instruction::Mul(2_u32, 4_u32)]);
        assert_eq!(solution.mul_sum(), 8_u32);
    }

    #[test]
    fn test_mul_sum() {
        for (index, mul_sum) in [161_u32, 161_u32].into_iter().enumerate() {
            assert_eq!(solution(index).mul_sum(), mul_sum);
        }
    }

    #[test]
    fn test_enabled_mul_sum() {
        for (index, enabled_mul_sum) in [161_u32, 48_u32].into_iter().enumerate() {
            assert_eq!(solution(index).enabled_mul_sum(), enabled_mul_sum);
        }
    }
}
