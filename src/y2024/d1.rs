use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
};

/* --- Day 1: Historian Hysteria ---

Two groups of Historians each compiled a list of location IDs, presented side by side. Part one:
pair up the smallest left number with the smallest right number, second-smallest with
second-smallest, and so on, then sum the absolute differences within each pair. Part two: for each
left number, multiply it by the number of times it appears in the right list, and sum those
similarity scores. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct LocationPair {
    left: u32,
    right: u32,
}

impl Parse for LocationPair {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(parse_integer, tag("   "), parse_integer),
            |(left, right)| Self { left, right },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<LocationPair>);

impl Solution {
    fn sorted_columns(&self) -> (Vec<u32>, Vec<u32>) {
        let mut left: Vec<u32> = self.0.iter().map(|pair| pair.left).collect();
        let mut right: Vec<u32> = self.0.iter().map(|pair| pair.right).collect();

        left.sort_unstable();
        right.sort_unstable();

        (left, right)
    }

    fn total_distance(&self) -> u32 {
        let (left, right): (Vec<u32>, Vec<u32>) = self.sorted_columns();

        left.into_iter()
            .zip(right)
            .map(|(left, right)| left.abs_diff(right))
            .sum()
    }

    fn similarity_score(&self) -> u32 {
        self.0
            .iter()
            .map(|pair| {
                pair.left
                    * self
                        .0
                        .iter()
                        .filter(|other| other.right == pair.left)
                        .count() as u32
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(LocationPair::parse, opt(line_ending))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    /// A gentle start.
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_distance());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.similarity_score());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
