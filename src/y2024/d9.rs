use {
    crate::*,
    nom::{
        character::complete::satisfy,
        combinator::map,
        error::Error,
        multi::many1,
        Err, IResult,
    },
};

/* --- Day 9: Disk Fragmenter ---

The disk map is a single line of digits alternating between file lengths and free-space lengths,
with file IDs assigned in order. Part one compacts block by block, moving blocks from the end of
the disk into the leftmost free block, then computes the checksum (sum of block position times
file ID). Part two moves whole files instead, in decreasing ID order, each into the leftmost span
of free space that fits and lies left of the file, attempting each file only once. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct FileSpan {
    id: usize,
    start: usize,
    len: usize,
}

impl FileSpan {
    /// Position-weighted ID sum over the span, `id * (start + start + 1 + ...)`.
    fn checksum(&self) -> u64 {
        let block_position_sum: u64 =
            (self.start..self.start + self.len).sum::<usize>() as u64;

        self.id as u64 * block_position_sum
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct FreeSpan {
    start: usize,
    len: usize,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u8>);

impl Solution {
    fn spans(&self) -> (Vec<FileSpan>, Vec<FreeSpan>) {
        let mut files: Vec<FileSpan> = Vec::new();
        let mut frees: Vec<FreeSpan> = Vec::new();
        let mut start: usize = 0_usize;

        for (index, &digit) in self.0.iter().enumerate() {
            let len: usize = digit as usize;

            if index % 2_usize == 0_usize {
                files.push(FileSpan {
                    id: index / 2_usize,
                    start,
                    len,
                });
            } else if len > 0_usize {
                frees.push(FreeSpan { start, len });
            }

            start += len;
        }

        (files, frees)
    }

    fn blocks(&self) -> Vec<Option<usize>> {
        let (files, _): (Vec<FileSpan>, Vec<FreeSpan>) = self.spans();
        let disk_len: usize = self.0.iter().map(|&digit| digit as usize).sum();
        let mut blocks: Vec<Option<usize>> = vec![None; disk_len];

        for file in files {
            blocks[file.start..file.start + file.len].fill(Some(file.id));
        }

        blocks
    }

    fn compacted_checksum(&self) -> u64 {
        let mut blocks: Vec<Option<usize>> = self.blocks();
        let mut left: usize = 0_usize;
        let mut right: usize = blocks.len();

        while left < right {
            if blocks[left].is_some() {
                left += 1_usize;
            } else if blocks[right - 1_usize].is_none() {
                right -= 1_usize;
            } else {
                blocks.swap(left, right - 1_usize);
            }
        }

        blocks
            .into_iter()
            .enumerate()
            .map(|(position, id)| position as u64 * id.unwrap_or_default() as u64)
            .sum()
    }

    fn defragmented_checksum(&self) -> u64 {
        let (mut files, mut frees): (Vec<FileSpan>, Vec<FreeSpan>) = self.spans();

        for file in files.iter_mut().rev() {
            if let Some(free) = frees
                .iter_mut()
                .take_while(|free| free.start < file.start)
                .find(|free| free.len >= file.len)
            {
                file.start = free.start;
                free.start += file.len;
                free.len -= file.len;
            }
        }

        files.iter().map(FileSpan::checksum).sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many1(map(satisfy(|c: char| c.is_ascii_digit()), |c: char| {
                c as u8 - b'0'
            })),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.compacted_checksum());
    }

    /// Exhausted free spans stay in the list with zero length, which is harmless since nothing
    /// fits them.
    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.defragmented_checksum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
