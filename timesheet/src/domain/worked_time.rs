use std::{fmt, iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

/// An amount of tracked time as whole hours plus minutes, always normalized
/// so that `minutes < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct WorkedTime {
    pub hours: u64,
    pub minutes: u64,
}

impl WorkedTime {
    pub const ZERO: WorkedTime = WorkedTime {
        hours: 0,
        minutes: 0,
    };

    pub fn from_minutes(total: u64) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    /// Normalizes overflowing minutes into hours.
    pub fn from_hours_minutes(hours: u64, minutes: u64) -> Self {
        Self::from_minutes(hours * 60 + minutes)
    }

    pub fn total_minutes(&self) -> u64 {
        self.hours * 60 + self.minutes
    }
}

impl Add for WorkedTime {
    type Output = WorkedTime;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_minutes(self.total_minutes() + rhs.total_minutes())
    }
}

impl Sum for WorkedTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(WorkedTime::ZERO, Add::add)
    }
}

impl fmt::Display for WorkedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_minutes() {
        assert_eq!(
            WorkedTime::from_hours_minutes(1, 75),
            WorkedTime {
                hours: 2,
                minutes: 15
            }
        );
        assert_eq!(WorkedTime::from_minutes(59).hours, 0);
    }

    #[test]
    fn sums_with_carry() {
        let total: WorkedTime = [
            WorkedTime::from_hours_minutes(7, 45),
            WorkedTime::from_hours_minutes(0, 30),
            WorkedTime::ZERO,
        ]
        .into_iter()
        .sum();
        assert_eq!(total, WorkedTime::from_hours_minutes(8, 15));
        assert_eq!(total.to_string(), "8h 15m");
    }
}
