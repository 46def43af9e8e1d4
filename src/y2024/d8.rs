use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::satisfy,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::{HashMap, HashSet},
};

/* --- Day 8: Resonant Collinearity ---

Antennas of the same frequency (any alphanumeric character) create antinodes. Part one: an
antinode appears at the two points collinear with a pair where one antenna is twice as far away as
the other; count the distinct in-bounds antinodes. Part two: resonant harmonics put an antinode at
every in-bounds grid position exactly in line with a same-frequency pair, antennas included. */

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct Frequency(Option<char>);

impl Parse for Frequency {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            satisfy(|c: char| c == '.' || c.is_ascii_alphanumeric()),
            |c: char| Self((c != '.').then_some(c)),
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Frequency>);

impl Solution {
    fn antennas_by_frequency(&self) -> HashMap<char, Vec<IVec2>> {
        let mut antennas: HashMap<char, Vec<IVec2>> = HashMap::new();

        for pos in self.0.iter_filtered_positions(|frequency| frequency.0.is_some()) {
            if let Some(&Frequency(Some(frequency))) = self.0.get(pos) {
                antennas.entry(frequency).or_default().push(pos);
            }
        }

        antennas
    }

    fn iter_antenna_pairs(antennas: &[IVec2]) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        antennas.iter().enumerate().flat_map(|(index, &a)| {
            antennas[index + 1_usize..].iter().map(move |&b| (a, b))
        })
    }

    fn antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        for antennas in self.antennas_by_frequency().values() {
            for (a, b) in Self::iter_antenna_pairs(antennas) {
                for antinode in [2_i32 * b - a, 2_i32 * a - b] {
                    if self.0.contains(antinode) {
                        antinodes.insert(antinode);
                    }
                }
            }
        }

        antinodes.len()
    }

    fn resonant_antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        for antennas in self.antennas_by_frequency().values() {
            for (a, b) in Self::iter_antenna_pairs(antennas) {
                let delta: IVec2 = b - a;

                for (mut antinode, step) in [(b, delta), (a, -delta)] {
                    while self.0.contains(antinode) {
                        antinodes.insert(antinode);
                        antinode += step;
                    }
                }
            }
        }

        antinodes.len()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.antinode_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.resonant_antinode_count());
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
        ............\n\
        ........0...\n\
        .....0......\n\
        .......0....\n\
        ....0.......\n\
        ......A.....\n\
        ............\n\
        ............\n\
        ........A...\n\
        .........A..\n\
        ............\n\
        ............\n"];

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
        let antennas: HashMap<char, Vec<IVec2>> = solution(0_usize).antennas_by_frequency();

        assert_eq!(antennas.len(), 2_usize);
        assert_eq!(antennas[&'0'].len(), 4_usize);
        assert_eq!(antennas[&'A'].len(), 3_usize);
    }

    #[test]
    fn test_antinode_count() {
        for (index, antinode_count) in [14_usize].into_iter().enumerate() {
            assert_eq!(solution(index).antinode_count(), antinode_count);
        }
    }

    #[test]
    fn test_resonant_antinode_count() {
        for (index, antinode_count) in [34_usize].into_iter().enumerate() {
            assert_eq!(solution(index).resonant_antinode_count(), antinode_count);
        }
    }
}
