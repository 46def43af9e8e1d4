use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::satisfy,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::HashSet,
    strum::IntoEnumIterator,
};

/* --- Day 12: Garden Groups ---

Garden plots with the same plant type form connected regions. Part one prices each region at area
times perimeter. Part two prices it at area times number of sides, which equals the region's
corner count. The total fencing price is the sum over all regions. */

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, PartialEq)]
struct Plant(char);

impl Parse for Plant {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(satisfy(|c: char| c.is_ascii_uppercase()), Self)(input)
    }
}

struct Region {
    plots: HashSet<IVec2>,
}

impl Region {
    fn area(&self) -> usize {
        self.plots.len()
    }

    fn perimeter(&self) -> usize {
        self.plots
            .iter()
            .map(|&plot: &IVec2| {
                Direction::iter()
                    .filter(|dir: &Direction| !self.plots.contains(&(plot + dir.vec())))
                    .count()
            })
            .sum()
    }

    /// Every side starts and ends at a corner, so the side count equals the corner count. A plot
    /// contributes a convex corner where two adjacent orthogonal neighbors are both outside, and
    /// a concave corner where both are inside but the diagonal between them is outside.
    fn corner_count(&self) -> usize {
        self.plots
            .iter()
            .map(|&plot: &IVec2| {
                Direction::iter()
                    .filter(|&dir: &Direction| {
                        let side_a: bool = self.plots.contains(&(plot + dir.vec()));
                        let side_b: bool =
                            self.plots.contains(&(plot + dir.turn_right().vec()));
                        let diagonal: bool = self
                            .plots
                            .contains(&(plot + dir.vec() + dir.turn_right().vec()));

                        (!side_a && !side_b) || (side_a && side_b && !diagonal)
                    })
                    .count()
            })
            .sum()
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Plant>);

impl Solution {
    fn regions(&self) -> Vec<Region> {
        let mut visited: HashSet<IVec2> = HashSet::new();
        let mut regions: Vec<Region> = Vec::new();

        for pos in self.0.iter_positions() {
            if visited.contains(&pos) {
                continue;
            }

            let plant: Plant = *match self.0.get(pos) {
                Some(plant) => plant,
                None => continue,
            };
            let mut plots: HashSet<IVec2> = HashSet::new();
            let mut stack: Vec<IVec2> = vec![pos];

            while let Some(plot) = stack.pop() {
                if !visited.insert(plot) {
                    continue;
                }

                plots.insert(plot);

                for dir in Direction::iter() {
                    let neighbor: IVec2 = plot + dir.vec();

                    if !visited.contains(&neighbor) && self.0.get(neighbor) == Some(&plant) {
                        stack.push(neighbor);
                    }
                }
            }

            regions.push(Region { plots });
        }

        regions
    }

    fn perimeter_price(&self) -> usize {
        self.regions()
            .into_iter()
            .map(|region| region.area() * region.perimeter())
            .sum()
    }

    fn side_price(&self) -> usize {
        self.regions()
            .into_iter()
            .map(|region| region.area() * region.corner_count())
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.perimeter_price());
    }

    /// Counting corners dodges all the bookkeeping of merging collinear fence segments.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.side_price());
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
        AAAA\n\
        BBCD\n\
        BBCC\n\
        EEEC\n",
        "\
        OOOOO\n\
        OXOXO\n\
        OOOOO\n\
        OXOXO\n\
        OOOOO\n",
        "\
        RRRRIICCFF\n\
        RRRRIICCCF\n\
        VVRRRCCFFF\n\
        VVRCCCJFFF\n\
        VVVVCJJCFE\n\
        VVIVCCJJEE\n\
        VVIIICJJEE\n\
        MIIIIIJJEE\n\
        MIIISIJEEE\n\
        MMMISSJEEE\n",
        "\
        EEEEE\n\
        EXXXX\n\
        EEEEE\n\
        EXXXX\n\
        EEEEE\n",
        "\
        AAAAAA\n\
        AAABBA\n\
        AAABBA\n\
        ABBAAA\n\
        ABBAAA\n\
        AAAAAA\n",
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
    fn test_regions() {
        assert_eq!(solution(0_usize).regions().len(), 5_usize);
        assert_eq!(solution(1_usize).regions().len(), 5_usize);
        assert_eq!(solution(2_usize).regions().len(), 11_usize);
    }

    #[test]
    fn test_perimeter_price() {
        for (index, price) in [140_usize, 772_usize, 1930_usize].into_iter().enumerate() {
            assert_eq!(solution(index).perimeter_price(), price);
        }
    }

    #[test]
    fn test_side_price() {
        for (index, price) in [80_usize, 436_usize, 1206_usize, 236_usize, 368_usize]
            .into_iter()
            .enumerate()
        {
            assert_eq!(solution(index).side_price(), price);
        }
    }
}
