use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Credit grade assigned by LendingClub, A (best) to G
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
        Grade::G,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
            Grade::F => 'F',
            Grade::G => 'G',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Grade::A),
            'B' => Some(Grade::B),
            'C' => Some(Grade::C),
            'D' => Some(Grade::D),
            'E' => Some(Grade::E),
            'F' => Some(Grade::F),
            'G' => Some(Grade::G),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Grade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Grade::from_char), chars.next()) {
            (Some(grade), None) => Ok(grade),
            _ => Err(Error::parse(format!("invalid grade: '{}'", s))
                .with_hint("grades are single letters from A to G")),
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.to_string()
    }
}

/// Grade refined by a level from 1 to 5, e.g. `B2`
///
/// Orders by grade first, then level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubGrade {
    grade: Grade,
    level: u8,
}

impl SubGrade {
    pub fn new(grade: Grade, level: u8) -> Result<Self, Error> {
        if !(1..=5).contains(&level) {
            return Err(Error::parse(format!(
                "invalid sub-grade level {} for grade {}",
                level, grade
            )));
        }
        Ok(Self { grade, level })
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl fmt::Display for SubGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.grade, self.level)
    }
}

impl FromStr for SubGrade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let grade = chars.next().and_then(Grade::from_char);
        let level = chars.as_str().parse::<u8>().ok();

        match (grade, level) {
            (Some(grade), Some(level)) => SubGrade::new(grade, level),
            _ => Err(Error::parse(format!("invalid sub-grade: '{}'", s))),
        }
    }
}

impl TryFrom<String> for SubGrade {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubGrade> for String {
    fn from(sub_grade: SubGrade) -> Self {
        sub_grade.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_parse() {
        assert_eq!("A".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!("g".parse::<Grade>().unwrap(), Grade::G);
        assert!("H".parse::<Grade>().is_err());
        assert!("AB".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_sub_grade_ordering() {
        let a5: SubGrade = "A5".parse().unwrap();
        let b1: SubGrade = "B1".parse().unwrap();
        let b2: SubGrade = "B2".parse().unwrap();

        assert!(a5 < b1);
        assert!(b1 < b2);
        assert_eq!(b2.grade(), Grade::B);
        assert_eq!(b2.level(), 2);
        assert_eq!(b2.to_string(), "B2");
    }

    #[test]
    fn test_sub_grade_rejects_bad_level() {
        assert!("C0".parse::<SubGrade>().is_err());
        assert!("C6".parse::<SubGrade>().is_err());
        assert!("C".parse::<SubGrade>().is_err());
    }

    #[test]
    fn test_serde_round_trip_uses_plain_strings() {
        let json = serde_json::to_string(&SubGrade::new(Grade::D, 3).unwrap()).unwrap();
        assert_eq!(json, "\"D3\"");
        let grade: Grade = serde_json::from_str("\"E\"").unwrap();
        assert_eq!(grade, Grade::E);
    }
}
