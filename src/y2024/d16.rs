use {
    crate::*,
    glam::IVec2,
    nom::{
        combinator::map_opt,
        error::Error,
        Err, IResult,
    },
    std::collections::{HashMap, HashSet},
    strum::IntoEnumIterator,
};

/* --- Day 16: Reindeer Maze ---

The Reindeer Olympics maze. A reindeer starts on the S tile facing east and wants to reach the E
tile with the lowest possible score, where moving forward one tile costs 1 point and rotating 90
degrees clockwise or counterclockwise costs 1000 points. Part one asks for the lowest score. Part
two asks how many tiles lie on at least one best path, good seats for spectating. */

define_cell! {
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Cell {
        Empty = b'.',
        Wall = b'#',
        Start = b'S',
        End = b'E',
    }
}

const STEP_COST: u32 = 1_u32;
const TURN_COST: u32 = 1000_u32;
const START_DIR: Direction = Direction::East;

/// A reindeer mid-run. Two states on the same tile facing different ways really are different
/// vertices: one may need a costly rotation that the other has already paid for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct ReindeerState {
    pos: IVec2,
    dir: Direction,
}

/// No rotation sequence reaches the end tile on its own, so a maze whose end is walled off has no
/// score at all.
#[derive(Debug, Eq, PartialEq)]
pub struct UnreachableEnd;

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    maze: Grid2D<Cell>,
    start: IVec2,
    end: IVec2,
}

struct MazeSearch<'s>(&'s Solution);

impl<'s> CostRelaxation for MazeSearch<'s> {
    type Vertex = ReindeerState;
    type Cost = u32;

    fn start(&self) -> Self::Vertex {
        ReindeerState {
            pos: self.0.start,
            dir: START_DIR,
        }
    }

    fn neighbors(&self, vertex: Self::Vertex, neighbors: &mut Vec<(Self::Vertex, Self::Cost)>) {
        let forward_pos: IVec2 = vertex.pos + vertex.dir.vec();

        if matches!(
            self.0.maze.get(forward_pos),
            Some(Cell::Empty | Cell::Start | Cell::End)
        ) {
            neighbors.push((
                ReindeerState {
                    pos: forward_pos,
                    dir: vertex.dir,
                },
                STEP_COST,
            ));
        }

        for dir in [vertex.dir.turn_left(), vertex.dir.turn_right()] {
            neighbors.push((
                ReindeerState {
                    pos: vertex.pos,
                    dir,
                },
                TURN_COST,
            ));
        }
    }
}

impl Solution {
    fn best_costs(&self) -> HashMap<ReindeerState, u32> {
        MazeSearch(self).best_costs()
    }

    /// The end tile counts as reached regardless of facing, so the score is the minimum over all
    /// four end states.
    fn lowest_score_from(&self, best_costs: &HashMap<ReindeerState, u32>) -> Option<u32> {
        Direction::iter()
            .filter_map(|dir: Direction| {
                best_costs
                    .get(&ReindeerState { pos: self.end, dir })
                    .copied()
            })
            .min()
    }

    fn try_lowest_score(&self) -> Result<u32, UnreachableEnd> {
        self.lowest_score_from(&self.best_costs())
            .ok_or(UnreachableEnd)
    }

    /// Walks the converged cost table backwards from the cheapest end states, accepting a
    /// predecessor exactly when its recorded cost plus the connecting edge reproduces the
    /// successor's cost, then counts the distinct tiles touched.
    fn best_path_tile_count(&self) -> usize {
        let best_costs: HashMap<ReindeerState, u32> = self.best_costs();

        let Some(lowest_score) = self.lowest_score_from(&best_costs) else {
            return 0_usize;
        };

        let mut on_best_path: HashSet<ReindeerState> = Direction::iter()
            .map(|dir: Direction| ReindeerState { pos: self.end, dir })
            .filter(|state: &ReindeerState| best_costs.get(state) == Some(&lowest_score))
            .collect();
        let mut stack: Vec<ReindeerState> = on_best_path.iter().copied().collect();

        while let Some(state) = stack.pop() {
            let Some(&cost) = best_costs.get(&state) else {
                continue;
            };

            let predecessors: [(ReindeerState, u32); 3_usize] = [
                (
                    ReindeerState {
                        pos: state.pos - state.dir.vec(),
                        dir: state.dir,
                    },
                    STEP_COST,
                ),
                (
                    ReindeerState {
                        pos: state.pos,
                        dir: state.dir.turn_left(),
                    },
                    TURN_COST,
                ),
                (
                    ReindeerState {
                        pos: state.pos,
                        dir: state.dir.turn_right(),
                    },
                    TURN_COST,
                ),
            ];

            for (predecessor, edge_cost) in predecessors {
                if cost
                    .checked_sub(edge_cost)
                    .map_or(false, |predecessor_cost: u32| {
                        best_costs.get(&predecessor) == Some(&predecessor_cost)
                    })
                    && on_best_path.insert(predecessor)
                {
                    stack.push(predecessor);
                }
            }
        }

        on_best_path
            .into_iter()
            .map(|state: ReindeerState| state.pos)
            .collect::<HashSet<IVec2>>()
            .len()
    }
}

/// Rejects mazes without exactly one start and exactly one end tile.
impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(Grid2D::parse, |maze: Grid2D<Cell>| {
            let start: IVec2 = maze.try_find_single_position_with_cell(&Cell::Start)?;
            let end: IVec2 = maze.try_find_single_position_with_cell(&Cell::End)?;

            Some(Self { maze, start, end })
        })(input)
    }
}

impl RunQuestions for Solution {
    /// Plain Dijkstra once the vertex carries the facing.
    fn q1_internal(&mut self, args: &QuestionArgs) {
        if args.verbose {
            log::debug!(
                "maze dimensions {}, start {}, end {}",
                self.maze.dimensions(),
                self.start,
                self.end
            );
        }

        match self.try_lowest_score() {
            Ok(lowest_score) => {
                dbg!(lowest_score);
            }
            Err(UnreachableEnd) => eprintln!("The end tile cannot be reached from the start tile."),
        }
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.best_path_tile_count());
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
    use {
        super::*,
        std::{
            sync::OnceLock,
            thread::{spawn, JoinHandle},
        },
    };

    const SOLUTION_STRS: &'static [&'static str] = &[
        "\
        ###############\n\
        #.......#....E#\n\
        #.#.###.#.###.#\n\
        #.....#.#...#.#\n\
        #.###.#####.#.#\n\
        #.#.#.......#.#\n\
        #.#.#####.###.#\n\
        #...........#.#\n\
        ###.#.#####.#.#\n\
        #...#.....#.#.#\n\
        #.#.#.###.#.#.#\n\
        #.....#...#.#.#\n\
        #.###.#.#.#.#.#\n\
        #S..#.....#...#\n\
        ###############\n",
        "\
        #################\n\
        #...#...#...#..E#\n\
        #.#.#.#.#.#.#.#.#\n\
        #.#.#.#...#...#.#\n\
        #.#.#.#.###.#.#.#\n\
        #...#.#.#.....#.#\n\
        #.#.#.#.#.#####.#\n\
        #.#...#.#.#.....#\n\
        #.#.#####.#.###.#\n\
        #.#.#.......#...#\n\
        #.#.###.#####.###\n\
        #.#.#...#.....#.#\n\
        #.#.#.#####.###.#\n\
        #.#.#.........#.#\n\
        #.#.#.#########.#\n\
        #S#.............#\n\
        #################\n",
        "\
        ####\n\
        #SE#\n\
        ####\n",
        "\
        #####\n\
        #S.E#\n\
        #####\n",
        "\
        ###\n\
        #E#\n\
        #.#\n\
        #S#\n\
        ###\n",
        "\
        #####\n\
        #S#E#\n\
        #####\n",
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
        let solution: &Solution = solution(0_usize);

        assert_eq!(solution.maze.dimensions(), IVec2::new(15_i32, 15_i32));
        assert_eq!(solution.start, IVec2::new(1_i32, 13_i32));
        assert_eq!(solution.end, IVec2::new(13_i32, 1_i32));
    }

    #[test]
    fn test_try_from_str_rejects_bad_mazes() {
        // Zero or duplicated start or end tiles.
        assert!(Solution::try_from(
            "\
            ####\n\
            #.E#\n\
            ####\n"
        )
        .is_err());
        assert!(Solution::try_from(
            "\
            #####\n\
            #SSE#\n\
            #####\n"
        )
        .is_err());
        assert!(Solution::try_from(
            "\
            #####\n\
            #S..#\n\
            #####\n"
        )
        .is_err());
        assert!(Solution::try_from(
            "\
            #####\n\
            #SEE#\n\
            #####\n"
        )
        .is_err());

        // Ragged rows.
        assert!(Solution::try_from(
            "\
            ####\n\
            #SE##\n\
            ####\n"
        )
        .is_err());
    }

    #[test]
    fn test_try_lowest_score() {
        for (index, lowest_score) in [
            Ok(7036_u32),
            Ok(11048_u32),
            // A single step east.
            Ok(1_u32),
            // A straight corridor costs its Manhattan distance.
            Ok(2_u32),
            // Two steps north after a counterclockwise rotation.
            Ok(1002_u32),
            // A wall between S and E exhausts the frontier.
            Err(UnreachableEnd),
        ]
        .into_iter()
        .enumerate()
        {
            assert_eq!(solution(index).try_lowest_score(), lowest_score);
        }
    }

    #[test]
    fn test_lowest_score_is_deterministic() {
        for index in 0_usize..2_usize {
            assert_eq!(
                solution(index).try_lowest_score(),
                solution(index).try_lowest_score()
            );
        }
    }

    #[test]
    fn test_lowest_score_agrees_across_threads() {
        let handles: Vec<JoinHandle<Result<u32, UnreachableEnd>>> = (0_usize..8_usize)
            .map(|_| {
                spawn(|| {
                    let solution: Solution = SOLUTION_STRS[0_usize].try_into().unwrap();

                    solution.try_lowest_score()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(7036_u32));
        }
    }

    #[test]
    fn test_lowest_score_at_least_manhattan_distance() {
        for index in 0_usize..5_usize {
            let solution: &Solution = solution(index);

            assert!(
                solution.try_lowest_score().unwrap()
                    >= manhattan_distance(solution.start, solution.end) as u32
            );
        }
    }

    #[test]
    fn test_best_path_tile_count() {
        for (index, tile_count) in [45_usize, 64_usize].into_iter().enumerate() {
            assert_eq!(solution(index).best_path_tile_count(), tile_count);
        }
    }

    #[test]
    fn test_best_path_tile_count_unreachable() {
        assert_eq!(solution(5_usize).best_path_tile_count(), 0_usize);
    }
}
