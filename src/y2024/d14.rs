use {
    crate::*,
    glam::IVec2,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{preceded, separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashSet,
};

/* --- Day 14: Restroom Redoubt ---

Robots patrol a 101x103 grid, each with a position and velocity, teleporting around the edges.
Part one: after 100 seconds, multiply the robot counts of the four quadrants (robots exactly on
the middle row or column count for nobody). Part two: find the fewest seconds until the robots
arrange themselves into a Christmas tree, which turns out to be the first time no two robots
share a position. */

const FLOOR_DIMENSIONS: IVec2 = IVec2::new(101_i32, 103_i32);

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Robot {
    pos: IVec2,
    velocity: IVec2,
}

impl Robot {
    fn pos_after(&self, seconds: i32, dimensions: IVec2) -> IVec2 {
        ((self.pos + self.velocity * seconds) % dimensions + dimensions) % dimensions
    }
}

impl Parse for Robot {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        fn parse_ivec2<'i>(input: &'i str) -> IResult<&'i str, IVec2> {
            map(
                separated_pair(parse_integer, tag(","), parse_integer),
                |(x, y)| IVec2::new(x, y),
            )(input)
        }

        map(
            separated_pair(
                preceded(tag("p="), parse_ivec2),
                tag(" v="),
                parse_ivec2,
            ),
            |(pos, velocity)| Self { pos, velocity },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Robot>);

impl Solution {
    fn safety_factor(&self, seconds: i32, dimensions: IVec2) -> usize {
        let middle: IVec2 = dimensions / 2_i32;
        let mut quadrant_counts: [usize; 4_usize] = [0_usize; 4_usize];

        for robot in &self.0 {
            let pos: IVec2 = robot.pos_after(seconds, dimensions);

            if pos.x != middle.x && pos.y != middle.y {
                let quadrant: usize = (pos.x > middle.x) as usize
                    + 2_usize * (pos.y > middle.y) as usize;

                quadrant_counts[quadrant] += 1_usize;
            }
        }

        quadrant_counts.into_iter().product()
    }

    fn seconds_until_all_distinct(&self, dimensions: IVec2) -> i32 {
        let mut positions: HashSet<IVec2> = HashSet::with_capacity(self.0.len());

        // Positions repeat with period lcm(width, height), so the search is bounded.
        (0_i32..dimensions.x * dimensions.y)
            .find(|&seconds| {
                positions.clear();

                self.0
                    .iter()
                    .all(|robot| positions.insert(robot.pos_after(seconds, dimensions)))
            })
            .unwrap_or(-1_i32)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Robot::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.safety_factor(100_i32, FLOOR_DIMENSIONS));
    }

    /// All-distinct positions as a tree heuristic felt like a gamble, but it works on the real
    /// input and needs no picture rendering.
    fn q2_internal(&mut self, args: &QuestionArgs) {
        let seconds: i32 = self.seconds_until_all_distinct(FLOOR_DIMENSIONS);

        if args.verbose {
            let mut grid: Grid2D<Pixel> = Grid2D::try_from_cells_and_width(
                vec![
                    Pixel::Empty;
                    (FLOOR_DIMENSIONS.x * FLOOR_DIMENSIONS.y) as usize
                ],
                FLOOR_DIMENSIONS.x as usize,
            )
            .unwrap_or_else(|| unreachable!("floor dimensions are constant and non-zero"));

            for robot in &self.0 {
                if let Some(cell) = grid.get_mut(robot.pos_after(seconds, FLOOR_DIMENSIONS)) {
                    *cell = Pixel::Robot;
                }
            }

            log::debug!("robot arrangement:\n{}", String::from(&grid));
        }

        dbg!(seconds);
    }
}

define_cell! {
    #[derive(Clone, Copy)]
    enum Pixel {
        Empty = b'.',
        Robot = b'#',
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
