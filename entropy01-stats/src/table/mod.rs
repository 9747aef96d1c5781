// entropy01-stats/src/table/mod.rs
//! The static chi-square probability table for one degree of freedom.

/// One row of a chi-square table: the chance that a truly random column
/// produces a statistic at least as large as `cutoff`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiLevel {
    pub probability: f64,
    pub cutoff: f64,
}

/// Where a chi-square statistic lands in a [`ChiTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bin {
    /// Ordinary bin `i`, between levels `i` and `i + 1`.
    Level(usize),
    /// At or beyond the sentinel level: less likely than anything tabulated.
    Excess,
}

/// An ordered chi-square table.
///
/// Probabilities descend from 1.0 while cutoffs ascend from 0.0. The last
/// level is a sentinel: it closes the final ordinary bin and everything at or
/// past its cutoff is classified as [`Bin::Excess`].
#[derive(Debug, Clone, Copy)]
pub struct ChiTable {
    levels: &'static [ChiLevel],
}

const fn level(probability: f64, cutoff: f64) -> ChiLevel {
    ChiLevel { probability, cutoff }
}

static ONE_DEGREE_LEVELS: [ChiLevel; 14] = [
    level(1.000, 0.0),
    level(0.990, 0.000157),
    level(0.975, 0.000982),
    level(0.950, 0.00393),
    level(0.900, 0.0158),
    level(0.750, 0.1015),
    level(0.500, 0.4549),
    level(0.250, 1.323),
    level(0.100, 2.706),
    level(0.050, 3.841),
    level(0.025, 5.024),
    level(0.010, 6.635),
    level(0.005, 7.879),
    level(0.001, 10.828),
];

/// Upper-tail chi-square critical values for one degree of freedom.
pub static ONE_DEGREE: ChiTable = ChiTable { levels: &ONE_DEGREE_LEVELS };

impl ChiTable {
    /// Wraps a caller-supplied level list.
    ///
    /// Returns `None` unless there are at least two levels, probabilities are
    /// non-increasing within `[0, 1]` and cutoffs are non-decreasing.
    pub fn new(levels: &'static [ChiLevel]) -> Option<Self> {
        if levels.len() < 2 {
            return None;
        }
        let in_range = levels.iter().all(|l| (0.0..=1.0).contains(&l.probability));
        let ordered = levels.windows(2).all(|w| {
            w[0].probability >= w[1].probability && w[0].cutoff <= w[1].cutoff
        });
        if in_range && ordered {
            Some(Self { levels })
        } else {
            None
        }
    }

    pub fn levels(&self) -> &'static [ChiLevel] {
        self.levels
    }

    /// Number of ordinary bins, excluding excess.
    pub fn bin_count(&self) -> usize {
        self.levels.len() - 1
    }

    /// Probability range `(low, high)` covered by ordinary bin `index`.
    pub fn bounds(&self, index: usize) -> (f64, f64) {
        (self.levels[index + 1].probability, self.levels[index].probability)
    }

    /// Weight bin `index` contributes to the entropy estimate per column.
    ///
    /// This is the probability paired with the bin's upper chi-square cutoff.
    pub fn weight(&self, index: usize) -> f64 {
        self.levels[index + 1].probability
    }

    /// Classifies a chi-square statistic, starting from the least probable end.
    pub fn classify(&self, statistic: f64) -> Bin {
        let sentinel = self.bin_count();
        if statistic >= self.levels[sentinel].cutoff {
            return Bin::Excess;
        }
        self.levels[..sentinel]
            .iter()
            .rposition(|l| statistic >= l.cutoff)
            .map_or(Bin::Level(0), Bin::Level)
    }
}
