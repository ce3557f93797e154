//! Domain wrapper types for the activity listing BDD tests.

use std::fmt;
use std::str::FromStr;

/// Count of repositories served or expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RepositoryCount(u32);

impl RepositoryCount {
    pub(crate) const fn new(value: u32) -> Self {
        Self(value)
    }

    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for RepositoryCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl fmt::Display for RepositoryCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Count of commits per repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CommitCount(u32);

impl CommitCount {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for CommitCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl fmt::Display for CommitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total number of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageCount(u32);

impl PageCount {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for PageCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u32>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("PageCount must be >= 1".to_owned());
        }

        Ok(Self(value))
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
