use std::{fmt, ops};

use derive_new::new;
use serde::{Deserialize, Serialize};


// Result of one player in one round. `score` is what the bid earned and may be negative; `bonus`
// is awarded on top for capturing special cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, new, Serialize, Deserialize)]
pub struct Score {
    pub score: i32,
    #[serde(default)]
    pub bonus: i32,
}

impl Score {
    pub const ZERO: Self = Self { score: 0, bonus: 0 };

    pub fn total(&self) -> i64 { i64::from(self.score) + i64::from(self.bonus) }
}

// Saturates: scores are not validated, so sums over many rounds may exceed `i32`.
impl ops::Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            score: self.score.saturating_add(rhs.score),
            bonus: self.bonus.saturating_add(rhs.bonus),
        }
    }
}
impl ops::AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl std::iter::Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self { iter.fold(Self::ZERO, |acc, s| acc + s) }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bonus == 0 {
            write!(f, "{}", self.score)
        } else {
            write!(f, "{} ({:+} bonus)", self.total(), self.bonus)
        }
    }
}
