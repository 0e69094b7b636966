use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl ContactId {
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Picks an id derived from `now_millis` that is strictly greater than
    /// every id in `existing`. When the largest id is `i64::MAX` the smallest
    /// unused positive id is returned instead.
    pub fn next_after<'a, I>(existing: I, now_millis: i64) -> Self
    where
        I: IntoIterator<Item = &'a ContactId>,
    {
        let ids: Vec<i64> = existing.into_iter().map(|id| id.0).collect();
        let Some(max) = ids.iter().copied().max() else {
            return Self(now_millis.max(1));
        };
        match max.checked_add(1) {
            Some(floor) => Self(now_millis.max(floor)),
            None => Self(smallest_unused(ids)),
        }
    }
}

fn smallest_unused(mut ids: Vec<i64>) -> i64 {
    ids.retain(|id| *id > 0);
    ids.sort_unstable();
    ids.dedup();
    let mut candidate = 1;
    for id in ids {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidContactId(s.to_string()))
    }
}
