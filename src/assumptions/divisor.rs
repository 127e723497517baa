//! Months divisor schedule for annuitizing the personal account
//!
//! The personal pension is the account balance at retirement divided by a
//! number of months fixed by the retirement age. The schedule below is the
//! statutory one and must not be edited; every personal-pension figure
//! depends on it.

use crate::error::{PensionError, PensionResult};

/// First tabulated retirement age
const FIRST_AGE: u8 = 40;

/// Months divisor by retirement age, starting at `FIRST_AGE`
const COLLECTION_MONTHS: [u32; 31] = [
    233, // 40
    230, // 41
    226, // 42
    223, // 43
    220, // 44
    216, // 45
    212, // 46
    208, // 47
    204, // 48
    199, // 49
    195, // 50
    190, // 51
    185, // 52
    180, // 53
    175, // 54
    170, // 55
    164, // 56
    158, // 57
    152, // 58
    145, // 59
    139, // 60
    132, // 61
    125, // 62
    117, // 63
    109, // 64
    101, // 65
    93,  // 66
    84,  // 67
    75,  // 68
    65,  // 69
    56,  // 70
];

/// Retirement age to months divisor lookup
///
/// Read-only; safe to share across threads without locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetirementDivisorTable {
    first_age: u8,
    months: &'static [u32],
}

impl RetirementDivisorTable {
    /// The statutory schedule (ages 40 to 70)
    pub const fn statutory() -> Self {
        Self {
            first_age: FIRST_AGE,
            months: &COLLECTION_MONTHS,
        }
    }

    /// Months divisor for a retirement age
    ///
    /// Ages outside the table are an error; there is no nearest-age fallback.
    pub fn divisor_for(&self, age: u8) -> PensionResult<u32> {
        if !self.contains(age) {
            return Err(PensionError::OutOfRange {
                age,
                min_age: self.min_age(),
                max_age: self.max_age(),
            });
        }
        Ok(self.months[(age - self.first_age) as usize])
    }

    /// Whether the age has a tabulated divisor
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min_age() && age <= self.max_age()
    }

    pub fn min_age(&self) -> u8 {
        self.first_age
    }

    pub fn max_age(&self) -> u8 {
        self.first_age + (self.months.len() as u8 - 1)
    }

    /// Iterate `(age, months)` in ascending age order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.months
            .iter()
            .enumerate()
            .map(move |(offset, &months)| (self.first_age + offset as u8, months))
    }
}

impl Default for RetirementDivisorTable {
    fn default() -> Self {
        Self::statutory()
    }
}
