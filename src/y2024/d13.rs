use {
    crate::*,
    glam::I64Vec2,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{delimited, separated_pair, terminated, tuple},
        Err, IResult,
    },
};

/* --- Day 13: Claw Contraption ---

Each claw machine has an A button (3 tokens) and a B button (1 token), each moving the claw by a
fixed vector, and a prize position. Part one sums the fewest tokens needed to win every winnable
prize. Part two adds 10000000000000 to both prize coordinates, which rules out iteration but not
linear algebra: the two button vectors are never parallel in practice, so each machine has at most
one candidate solution, found by Cramer's rule and checked for non-negative integrality. */

const A_TOKEN_COST: i64 = 3_i64;
const B_TOKEN_COST: i64 = 1_i64;
const PRIZE_OFFSET: i64 = 10000000000000_i64;

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ClawMachine {
    button_a: I64Vec2,
    button_b: I64Vec2,
    prize: I64Vec2,
}

impl ClawMachine {
    fn parse_xy_pair<'i>(
        separator_x: &'static str,
        separator_y: &'static str,
    ) -> impl FnMut(&'i str) -> IResult<&'i str, I64Vec2> {
        map(
            separated_pair(
                delimited(tag(separator_x), parse_integer, tag(", ")),
                tag(separator_y),
                parse_integer,
            ),
            |(x, y)| I64Vec2::new(x, y),
        )
    }

    /// Solves `a * button_a + b * button_b == prize` for non-negative integers by Cramer's rule,
    /// returning the token cost.
    fn min_win_cost(&self, prize_offset: i64) -> Option<i64> {
        let prize: I64Vec2 = self.prize + I64Vec2::splat(prize_offset);
        let determinant: i64 =
            self.button_a.x * self.button_b.y - self.button_a.y * self.button_b.x;

        if determinant == 0_i64 {
            return None;
        }

        let a_numerator: i64 = prize.x * self.button_b.y - prize.y * self.button_b.x;
        let b_numerator: i64 = self.button_a.x * prize.y - self.button_a.y * prize.x;

        (a_numerator % determinant == 0_i64 && b_numerator % determinant == 0_i64)
            .then(|| {
                let a: i64 = a_numerator / determinant;
                let b: i64 = b_numerator / determinant;

                (a >= 0_i64 && b >= 0_i64).then_some(a * A_TOKEN_COST + b * B_TOKEN_COST)
            })
            .flatten()
    }
}

impl Parse for ClawMachine {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                terminated(
                    Self::parse_xy_pair("Button A: X+", "Y+"),
                    line_ending,
                ),
                terminated(
                    Self::parse_xy_pair("Button B: X+", "Y+"),
                    line_ending,
                ),
                Self::parse_xy_pair("Prize: X=", "Y="),
            )),
            |(button_a, button_b, prize)| Self {
                button_a,
                button_b,
                prize,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ClawMachine>);

impl Solution {
    fn min_total_cost(&self, prize_offset: i64) -> i64 {
        self.0
            .iter()
            .filter_map(|claw_machine| claw_machine.min_win_cost(prize_offset))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(
                ClawMachine::parse,
                opt(tuple((line_ending, opt(line_ending)))),
            )),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.min_total_cost(0_i64));
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.min_total_cost(PRIZE_OFFSET));
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
