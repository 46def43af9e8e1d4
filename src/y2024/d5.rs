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
    std::cmp::Ordering,
};

/* --- Day 5: Print Queue ---

The input is a set of `X|Y` page ordering rules followed by updates, each a list of page numbers.
Part one sums the middle page of every update already consistent with the rules. Part two sorts
the inconsistent updates into rule order and sums their middle pages instead. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct OrderingRule {
    before: u32,
    after: u32,
}

impl Parse for OrderingRule {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(parse_integer, tag("|"), parse_integer),
            |(before, after)| Self { before, after },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Update(Vec<u32>);

impl Update {
    fn middle_page(&self) -> u32 {
        self.0[self.0.len() / 2_usize]
    }
}

impl Parse for Update {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(tag(","), parse_integer), Self)(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    rules: Vec<OrderingRule>,
    updates: Vec<Update>,
}

impl Solution {
    fn compare_pages(&self, left: u32, right: u32) -> Ordering {
        if self
            .rules
            .iter()
            .any(|rule| rule.before == left && rule.after == right)
        {
            Ordering::Less
        } else if self
            .rules
            .iter()
            .any(|rule| rule.before == right && rule.after == left)
        {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn update_is_ordered(&self, update: &Update) -> bool {
        update.0.is_sorted_by(|&left, &right| {
            self.compare_pages(left, right) != Ordering::Greater
        })
    }

    fn ordered_middle_page_sum(&self) -> u32 {
        self.updates
            .iter()
            .filter(|update| self.update_is_ordered(update))
            .map(Update::middle_page)
            .sum()
    }

    fn reordered_middle_page_sum(&self) -> u32 {
        self.updates
            .iter()
            .filter(|update| !self.update_is_ordered(update))
            .map(|update| {
                let mut pages: Vec<u32> = update.0.clone();

                pages.sort_by(|&left, &right| self.compare_pages(left, right));

                Update(pages).middle_page()
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                many0(terminated(OrderingRule::parse, opt(line_ending))),
                line_ending,
                many0(terminated(Update::parse, opt(line_ending))),
            ),
            |(rules, updates)| Self { rules, updates },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.ordered_middle_page_sum());
    }

    /// The rules conveniently cover every page pair that actually shares an update, so a plain
    /// comparison sort suffices.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.reordered_middle_page_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
