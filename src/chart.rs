// Chart aggregation - per-class male/female counts
//
// Buckets passengers into exactly three groups, one per ticket class, for the
// grouped bar chart. Classes are mapped explicitly; a record whose class is
// missing or outside 1..=3 is skipped and counted, never indexed blindly.

use crate::model::{Passenger, Sex};

/// Ticket classes shown on the chart, in display order
pub const CLASSES: [u8; 3] = [1, 2, 3];

/// Male/female counts for one ticket class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBucket {
    pub p_class: u8,
    pub male: u64,
    pub female: u64,
}

impl ChartBucket {
    pub const fn empty(p_class: u8) -> Self {
        Self {
            p_class,
            male: 0,
            female: 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.male + self.female
    }
}

/// The three class buckets plus the records that could not be placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBreakdown {
    pub buckets: [ChartBucket; 3],
    /// Records with a missing or out-of-range class
    pub skipped: usize,
}

impl Default for ClassBreakdown {
    fn default() -> Self {
        Self {
            buckets: CLASSES.map(ChartBucket::empty),
            skipped: 0,
        }
    }
}

impl ClassBreakdown {
    /// Passengers counted on the chart
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(ChartBucket::total).sum()
    }

    /// Tallest bar, used to scale the chart
    pub fn max_count(&self) -> u64 {
        self.buckets
            .iter()
            .map(|b| b.male.max(b.female))
            .max()
            .unwrap_or(0)
    }

    pub fn bucket(&self, p_class: u8) -> Option<&ChartBucket> {
        bucket_index(i64::from(p_class)).map(|idx| &self.buckets[idx])
    }
}

/// Position of a ticket class in `CLASSES`
pub fn bucket_index(p_class: i64) -> Option<usize> {
    match p_class {
        1 => Some(0),
        2 => Some(1),
        3 => Some(2),
        _ => None,
    }
}

/// Count male and female passengers per ticket class
///
/// Passengers whose sex is neither male nor female are not counted. The
/// result does not depend on the order of `passengers`.
pub fn aggregate(passengers: &[Passenger]) -> ClassBreakdown {
    let mut breakdown = ClassBreakdown::default();

    for passenger in passengers {
        let Some(idx) = passenger.p_class.and_then(bucket_index) else {
            tracing::debug!(
                passenger_id = passenger.passenger_id,
                p_class = ?passenger.p_class,
                "Skipping passenger with unknown ticket class"
            );
            breakdown.skipped += 1;
            continue;
        };

        let bucket = &mut breakdown.buckets[idx];
        match passenger.sex {
            Some(Sex::Male) => bucket.male += 1,
            Some(Sex::Female) => bucket.female += 1,
            _ => {}
        }
    }

    breakdown
}
