pub use {grid::*, search::*};

use {
    clap::Parser,
    memmap::Mmap,
    nom::{
        bytes::complete::tag,
        character::complete::digit1,
        combinator::{map_res, opt},
        sequence::tuple,
        IResult,
    },
    num::{CheckedSub, Integer},
    std::{
        any::type_name,
        fmt::Debug,
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, FromStr, Utf8Error},
    },
};

mod grid;
mod search;

#[derive(Debug, Parser)]
pub struct QuestionArgs {
    /// Log extra detail while solving, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path, `input/y2024/d<DAY>.txt` if empty
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// The day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// The question to run, both if omitted
    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub question: u8,

    #[command(flatten)]
    pub question_args: QuestionArgs,
}

impl Args {
    fn try_to_solution<S>(&self) -> Option<S>
    where
        S: for<'a> TryFrom<&'a str>,
        for<'a> <S as TryFrom<&'a str>>::Error: Debug,
    {
        let default_file_path: String;
        let file_path: &str = if self.input_file_path.is_empty() {
            default_file_path = format!("input/y2024/d{}.txt", self.day);

            &default_file_path
        } else {
            &self.input_file_path
        };

        // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're
        // done parsing it
        unsafe {
            open_utf8_file(file_path, |s| {
                s.try_into().map_or_else(
                    |error| {
                        eprintln!(
                            "Failed to convert file \"{file_path}\" to type {}:\n{error:#?}",
                            type_name::<S>()
                        );

                        None
                    },
                    Some,
                )
            })
        }
        .unwrap_or_else(|error| {
            eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

            None
        })
    }
}

pub trait RunQuestions
where
    Self: Sized + for<'a> TryFrom<&'a str>,
    for<'a> <Self as TryFrom<&'a str>>::Error: Debug,
{
    fn q1_internal(&mut self, args: &QuestionArgs);
    fn q2_internal(&mut self, args: &QuestionArgs);

    fn q1(args: &Args) {
        if let Some(mut solution) = args.try_to_solution::<Self>() {
            solution.q1_internal(&args.question_args);
        }
    }

    fn q2(args: &Args) {
        if let Some(mut solution) = args.try_to_solution::<Self>() {
            solution.q2_internal(&args.question_args);
        }
    }

    fn both(args: &Args) {
        if let Some(mut solution) = args.try_to_solution::<Self>() {
            solution.q1_internal(&args.question_args);
            solution.q2_internal(&args.question_args);
        }
    }
}

#[derive(Clone, Copy)]
pub struct DayFunctions {
    pub q1: fn(&Args),
    pub q2: fn(&Args),
    pub both: fn(&Args),
}

impl DayFunctions {
    fn run(&self, args: &Args) {
        match args.question {
            0 => (self.both)(args),
            1 => (self.q1)(args),
            2 => (self.q2)(args),
            question => unreachable!(
                "A valid Args will have a question value in the range 0..=2, but {question} was \
                encountered."
            ),
        }
    }
}

/// A `(day, functions)` table built from `d<DAY>` module identifiers by the `days!` macro.
#[derive(Default)]
pub struct DayRegistry {
    days: Vec<Option<DayFunctions>>,
    min: u8,
}

impl DayRegistry {
    pub fn run(&self, args: &Args) {
        match args
            .day
            .checked_sub(self.min)
            .and_then(|day| self.days.get(day as usize))
            .copied()
            .flatten()
        {
            None => eprintln!(
                "Day {} has no registered solution (valid days are {}..{}).",
                args.day,
                self.min,
                self.min as usize + self.days.len()
            ),
            Some(day_functions) => day_functions.run(args),
        }
    }

    pub fn try_from_entries(entries: Vec<(&str, DayFunctions)>) -> Option<Self> {
        let mut parsed: Vec<(u8, DayFunctions)> = Vec::with_capacity(entries.len());

        for (name, day_functions) in entries {
            match name.strip_prefix('d').and_then(|day| day.parse().ok()) {
                Some(day) => parsed.push((day, day_functions)),
                None => {
                    eprintln!("Invalid day module name \"{name}\"");

                    return None;
                }
            }
        }

        let min: u8 = parsed.iter().map(|(day, _)| *day).min()?;
        let max: u8 = parsed.iter().map(|(day, _)| *day).max()?;
        let mut days: Vec<Option<DayFunctions>> = Vec::with_capacity((max + 1_u8 - min) as usize);

        days.resize_with((max + 1_u8 - min) as usize, || None);

        for (day, day_functions) in parsed {
            days[(day - min) as usize] = Some(day_functions);
        }

        Some(Self { days, min })
    }
}

#[macro_export]
macro_rules! days {
    [ $( $day:ident ),* $(,)? ] => {
        pub mod y2024 {
            $( pub mod $day; )*
        }

        pub fn day_registry() -> &'static DayRegistry {
            static ONCE_LOCK: std::sync::OnceLock<DayRegistry> = std::sync::OnceLock::new();

            ONCE_LOCK.get_or_init(|| {
                DayRegistry::try_from_entries(vec![ $(
                    (
                        stringify!($day),
                        DayFunctions {
                            q1: y2024::$day::Solution::q1,
                            q2: y2024::$day::Solution::q2,
                            both: y2024::$day::Solution::both,
                        },
                    ),
                )* ])
                .unwrap_or_else(DayRegistry::default)
            })
        }
    };
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes a `&str` over the file to a
/// provided callback function
///
/// # Errors
///
/// Returns a `Result::Err`-wrapped `std::io::Error` if the file can't be opened, can't be mapped,
/// or isn't valid UTF-8. `f` is only executed if no error is encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function: there is no guarantee that an
/// external process won't modify the file while it is mapped as an immutable string slice.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}

pub fn parse_integer<'i, I: CheckedSub + FromStr + Integer>(input: &'i str) -> IResult<&'i str, I> {
    map_res(
        tuple((opt(tag("-")), map_res(digit1, I::from_str))),
        |(minus, value): (Option<&str>, I)| {
            if minus.is_some() {
                // A minus sign on an unsigned integer is a parse failure, not a panic.
                I::zero().checked_sub(&value).ok_or(())
            } else {
                Ok(value)
            }
        },
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<u32>("42"), Ok(("", 42_u32)));
        assert_eq!(parse_integer::<u32>("42,7"), Ok((",7", 42_u32)));
        assert_eq!(parse_integer::<i32>("-42"), Ok(("", -42_i32)));
        assert_eq!(parse_integer::<u32>("-0"), Ok(("", 0_u32)));
        assert!(parse_integer::<u32>("-42").is_err());
        assert!(parse_integer::<i32>("x").is_err());
    }
}

/// Defines a byte-backed grid cell enum along with its character conversions and `Parse`
/// implementation.
#[macro_export]
macro_rules! define_cell {
    {
        $( #[$attr:meta] )*
        $vis:vis enum $cell:ident {
            $(
                $( #[$variant_attr:meta] )*
                $variant:ident = $byte:literal,
            )*
        }
    } => {
        $( #[$attr] )*
        #[repr(u8)]
        $vis enum $cell {
            $(
                $( #[$variant_attr] )*
                $variant = $byte,
            )*
        }

        impl TryFrom<char> for $cell {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                match u8::try_from(value) {
                    $( Ok($byte) => Ok(Self::$variant), )*
                    _ => Err(()),
                }
            }
        }

        impl From<$cell> for char {
            fn from(value: $cell) -> Self {
                value as u8 as char
            }
        }

        impl $crate::Parse for $cell {
            fn parse<'i>(input: &'i str) -> ::nom::IResult<&'i str, Self> {
                ::nom::combinator::map_res(
                    ::nom::character::complete::anychar,
                    $cell::try_from,
                )(input)
            }
        }
    };
}
