use {
    crate::*,
    glam::IVec2,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt, value},
        error::Error,
        multi::many1,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashSet,
};

/* --- Day 15: Warehouse Woes ---

A lanternfish warehouse robot pushes boxes (`O`) around between walls (`#`), following a scripted
move sequence and refusing any push that would shove a box into a wall. Part one sums the GPS
coordinates (100 times the distance from the top edge plus the distance from the left edge) of
all boxes after the script runs. Part two doubles the warehouse's width, making every box two
cells wide, so a vertical push can fan out over several boxes at once; the GPS coordinate of a
wide box comes from its left cell. */

define_cell! {
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Cell {
        Empty = b'.',
        Wall = b'#',
        Box = b'O',
        Robot = b'@',
    }
}

fn parse_move<'i>(input: &'i str) -> IResult<&'i str, Direction> {
    alt((
        value(Direction::North, tag("^")),
        value(Direction::East, tag(">")),
        value(Direction::South, tag("v")),
        value(Direction::West, tag("<")),
    ))(input)
}

struct NarrowWarehouse {
    walls: HashSet<IVec2>,
    boxes: HashSet<IVec2>,
    robot: IVec2,
}

impl NarrowWarehouse {
    fn step(&mut self, dir: Direction) {
        let delta: IVec2 = dir.vec();
        let first_box: IVec2 = self.robot + delta;
        let mut past_boxes: IVec2 = first_box;

        while self.boxes.contains(&past_boxes) {
            past_boxes += delta;
        }

        if self.walls.contains(&past_boxes) {
            return;
        }

        // The whole run of boxes shifts by one, which is the same as teleporting the first box
        // to the far end.
        if past_boxes != first_box {
            self.boxes.remove(&first_box);
            self.boxes.insert(past_boxes);
        }

        self.robot = first_box;
    }
}

struct WideWarehouse {
    walls: HashSet<IVec2>,
    boxes: HashSet<IVec2>,
    robot: IVec2,
}

impl WideWarehouse {
    /// The left cell of the box covering `pos`, if any.
    fn box_left_at(&self, pos: IVec2) -> Option<IVec2> {
        if self.boxes.contains(&pos) {
            Some(pos)
        } else if self.boxes.contains(&(pos - IVec2::X)) {
            Some(pos - IVec2::X)
        } else {
            None
        }
    }

    /// The cells a box with left cell `box_left` would newly occupy after moving by `delta`.
    fn box_target_cells(box_left: IVec2, delta: IVec2) -> Vec<IVec2> {
        match delta.x {
            -1_i32 => vec![box_left - IVec2::X],
            1_i32 => vec![box_left + 2_i32 * IVec2::X],
            _ => vec![box_left + delta, box_left + IVec2::X + delta],
        }
    }

    fn can_box_move(&self, box_left: IVec2, delta: IVec2) -> bool {
        Self::box_target_cells(box_left, delta)
            .into_iter()
            .all(|cell: IVec2| {
                !self.walls.contains(&cell)
                    && self
                        .box_left_at(cell)
                        .map_or(true, |other: IVec2| self.can_box_move(other, delta))
            })
    }

    /// Caller must have verified `can_box_move` first. Blockers are re-resolved per target cell
    /// since moving one may clear the other's path.
    fn move_box(&mut self, box_left: IVec2, delta: IVec2) {
        for cell in Self::box_target_cells(box_left, delta) {
            if let Some(other) = self.box_left_at(cell) {
                if other != box_left {
                    self.move_box(other, delta);
                }
            }
        }

        self.boxes.remove(&box_left);
        self.boxes.insert(box_left + delta);
    }

    fn step(&mut self, dir: Direction) {
        let delta: IVec2 = dir.vec();
        let target: IVec2 = self.robot + delta;

        if self.walls.contains(&target) {
            return;
        }

        match self.box_left_at(target) {
            None => self.robot = target,
            Some(box_left) => {
                if self.can_box_move(box_left, delta) {
                    self.move_box(box_left, delta);
                    self.robot = target;
                }
            }
        }
    }
}

fn gps_coordinate_sum(boxes: &HashSet<IVec2>) -> i32 {
    boxes.iter().map(|box_pos: &IVec2| 100_i32 * box_pos.y + box_pos.x).sum()
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid2D<Cell>,
    moves: Vec<Direction>,
}

impl Solution {
    fn narrow_warehouse(&self) -> Option<NarrowWarehouse> {
        Some(NarrowWarehouse {
            walls: self
                .grid
                .iter_positions_with_cell(&Cell::Wall)
                .collect(),
            boxes: self.grid.iter_positions_with_cell(&Cell::Box).collect(),
            robot: self.grid.try_find_single_position_with_cell(&Cell::Robot)?,
        })
    }

    fn wide_warehouse(&self) -> Option<WideWarehouse> {
        let widen = |pos: IVec2| IVec2::new(2_i32 * pos.x, pos.y);

        Some(WideWarehouse {
            walls: self
                .grid
                .iter_positions_with_cell(&Cell::Wall)
                .flat_map(|pos: IVec2| [widen(pos), widen(pos) + IVec2::X])
                .collect(),
            boxes: self
                .grid
                .iter_positions_with_cell(&Cell::Box)
                .map(widen)
                .collect(),
            robot: widen(self.grid.try_find_single_position_with_cell(&Cell::Robot)?),
        })
    }

    fn narrow_gps_sum(&self) -> i32 {
        self.narrow_warehouse().map_or(0_i32, |mut warehouse| {
            for &dir in &self.moves {
                warehouse.step(dir);
            }

            gps_coordinate_sum(&warehouse.boxes)
        })
    }

    fn wide_gps_sum(&self) -> i32 {
        self.wide_warehouse().map_or(0_i32, |mut warehouse| {
            for &dir in &self.moves {
                warehouse.step(dir);
            }

            gps_coordinate_sum(&warehouse.boxes)
        })
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                Grid2D::parse,
                line_ending,
                many1(terminated(parse_move, opt(line_ending))),
            ),
            |(grid, moves)| Self { grid, moves },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.narrow_gps_sum());
    }

    /// The per-cell blocker re-resolution in `move_box` took a while to get right for staggered
    /// vertical pushes.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.wide_gps_sum());
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
        "\
        ########\n\
        #..O.O.#\n\
        ##@.O..#\n\
        #...O..#\n\
        #.#.O..#\n\
        #...O..#\n\
        #......#\n\
        ########\n\
        \n\
        <^^>>>vv<v>>v<<\n",
        "\
        ##########\n\
        #..O..O.O#\n\
        #......O.#\n\
        #.OO..O.O#\n\
        #..O@..O.#\n\
        #O#..O...#\n\
        #O..O..O.#\n\
        #.OO.O.OO#\n\
        #....O...#\n\
        ##########\n\
        \n\
        <vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^\n\
        vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v\n\
        ><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<\n\
        <<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^\n\
        ^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><\n\
        ^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^\n\
        >^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^\n\
        <><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>\n\
        ^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>\n\
        v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^\n",
    ];

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
        let small: &Solution = solution(0_usize);

        assert_eq!(small.grid.dimensions(), IVec2::new(8_i32, 8_i32));
        assert_eq!(small.moves.len(), 15_usize);
        assert_eq!(
            small.moves[..4_usize],
            [
                Direction::West,
                Direction::North,
                Direction::North,
                Direction::East
            ]
        );
        assert_eq!(solution(1_usize).moves.len(), 700_usize);
    }

    #[test]
    fn test_narrow_gps_sum() {
        for (index, gps_sum) in [2028_i32, 10092_i32].into_iter().enumerate() {
            assert_eq!(solution(index).narrow_gps_sum(), gps_sum);
        }
    }

    #[test]
    fn test_wide_gps_sum() {
        assert_eq!(solution(1_usize).wide_gps_sum(), 9021_i32);
    }
}
