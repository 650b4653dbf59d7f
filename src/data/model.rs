use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// SeriesName – the three plotted series
// ---------------------------------------------------------------------------

/// Names of the series produced by one load, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeriesName {
    Value,
    Differential,
    Integrate,
}

impl SeriesName {
    pub const ALL: [SeriesName; 3] = [
        SeriesName::Value,
        SeriesName::Differential,
        SeriesName::Integrate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesName::Value => "Value",
            SeriesName::Differential => "Differential",
            SeriesName::Integrate => "Integrate",
        }
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeriesName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown series name: {s}"))
    }
}

// ---------------------------------------------------------------------------
// SeriesBundle – the complete result of one load
// ---------------------------------------------------------------------------

/// Decoded samples together with their derived series.
///
/// All three vectors have the same length. A bundle is only ever built whole
/// by [`SeriesBundle::new`], so callers never observe a partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesBundle {
    /// Raw decoded samples.
    pub value: Vec<i16>,
    /// First difference; element 0 is always 0.
    pub differential: Vec<i32>,
    /// Running prefix sum of `value`.
    pub integrate: Vec<i64>,
}

impl SeriesBundle {
    /// Assemble a bundle. Panics in debug builds if the lengths disagree.
    pub fn new(value: Vec<i16>, differential: Vec<i32>, integrate: Vec<i64>) -> Self {
        debug_assert_eq!(value.len(), differential.len());
        debug_assert_eq!(value.len(), integrate.len());
        SeriesBundle {
            value,
            differential,
            integrate,
        }
    }

    /// Number of samples (shared by every series).
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the bundle holds no samples.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// A series widened to `f64`, suitable for any plotting backend.
    pub fn values_f64(&self, name: SeriesName) -> Vec<f64> {
        match name {
            SeriesName::Value => self.value.iter().map(|&v| f64::from(v)).collect(),
            SeriesName::Differential => self.differential.iter().map(|&v| f64::from(v)).collect(),
            SeriesName::Integrate => self.integrate.iter().map(|&v| v as f64).collect(),
        }
    }

    /// `[sample index, value]` pairs for one series.
    pub fn plot_points(&self, name: SeriesName) -> Vec<[f64; 2]> {
        self.values_f64(name)
            .into_iter()
            .enumerate()
            .map(|(i, y)| [i as f64, y])
            .collect()
    }

    /// Min / max / last of a series, or `None` when the bundle is empty.
    pub fn summary(&self, name: SeriesName) -> Option<SeriesSummary> {
        fn summarize<T: Copy + Ord + Into<i64>>(xs: &[T]) -> Option<SeriesSummary> {
            let last = *xs.last()?;
            let min = xs.iter().copied().min()?;
            let max = xs.iter().copied().max()?;
            Some(SeriesSummary {
                len: xs.len(),
                min: min.into(),
                max: max.into(),
                last: last.into(),
            })
        }
        match name {
            SeriesName::Value => summarize(&self.value),
            SeriesName::Differential => summarize(&self.differential),
            SeriesName::Integrate => summarize(&self.integrate),
        }
    }
}

/// Descriptive statistics shown next to each series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSummary {
    pub len: usize,
    pub min: i64,
    pub max: i64,
    pub last: i64,
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples, min {}, max {}, last {}",
            self.len, self.min, self.max, self.last
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> SeriesBundle {
        SeriesBundle::new(vec![3, -1, 4], vec![0, -4, 5], vec![3, 2, 6])
    }

    #[test]
    fn series_names_round_trip_through_strings() {
        for name in SeriesName::ALL {
            assert_eq!(name.as_str().parse::<SeriesName>().unwrap(), name);
        }
        assert!("Derivative".parse::<SeriesName>().is_err());
    }

    #[test]
    fn plot_points_use_sample_index_as_x() {
        let points = bundle().plot_points(SeriesName::Differential);
        assert_eq!(points, vec![[0.0, 0.0], [1.0, -4.0], [2.0, 5.0]]);
    }

    #[test]
    fn summary_reports_extremes_and_last() {
        let s = bundle().summary(SeriesName::Value).unwrap();
        assert_eq!(s, SeriesSummary { len: 3, min: -1, max: 4, last: 4 });
        assert!(SeriesBundle::new(vec![], vec![], vec![])
            .summary(SeriesName::Integrate)
            .is_none());
    }
}
