//! Sparkline geometry: a trailing series reduced to a drawable path.

use crate::core::model::TrailPoint;

/// Fixed canvas the path coordinates are expressed in.
pub const SPARK_WIDTH: f64 = 120.0;
pub const SPARK_HEIGHT: f64 = 36.0;
// Breathing room so the stroke is not clipped at the extremes.
const INSET: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn class(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// One chronological point: original date label and a finite value.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkPoint {
    pub date: String,
    pub value: f64,
}

/// A rendered sparkline plus the chronological series behind it, retained
/// so pointer lookup never recomputes the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub path: String,
    pub guide_top: f64,
    pub guide_bottom: f64,
    pub trend: Trend,
    pub points: Vec<SparkPoint>,
    pub lo: f64,
    pub hi: f64,
}

impl Sparkline {
    /// Build from a newest-first trailing series. Returns `None` when fewer
    /// than two finite values survive filtering.
    pub fn build(trailing: &[TrailPoint]) -> Option<Self> {
        let points: Vec<SparkPoint> = trailing
            .iter()
            .rev()
            .filter_map(|p| {
                p.value.filter(|v| v.is_finite()).map(|value| SparkPoint {
                    date: p.date.clone(),
                    value,
                })
            })
            .collect();
        if points.len() < 2 {
            return None;
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in &points {
            lo = lo.min(p.value);
            hi = hi.max(p.value);
        }
        // A flat series would divide by zero; widen the range instead of
        // special-casing the draw loop.
        if lo == hi {
            lo -= 1.0;
            hi += 1.0;
        }

        let span = hi - lo;
        let n = points.len();
        let mut path = String::new();
        for (i, p) in points.iter().enumerate() {
            let x = INSET + (SPARK_WIDTH - 2.0 * INSET) * (i as f64 / (n - 1) as f64);
            let y = INSET + (SPARK_HEIGHT - 2.0 * INSET) * (1.0 - (p.value - lo) / span);
            if i == 0 {
                path.push_str(&format!("M {x:.1} {y:.1}"));
            } else {
                path.push_str(&format!(" L {x:.1} {y:.1}"));
            }
        }

        let trend = if points[n - 1].value >= points[0].value {
            Trend::Up
        } else {
            Trend::Down
        };

        Some(Sparkline {
            path,
            guide_top: INSET,
            guide_bottom: SPARK_HEIGHT - INSET,
            trend,
            points,
            lo,
            hi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trailing(values: &[f64]) -> Vec<TrailPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| TrailPoint {
                date: format!("d{i}"),
                value: Some(*v),
            })
            .collect()
    }

    #[test]
    fn reverses_newest_first_input_to_chronological_order() {
        // Document order is newest first: 100 today, 80 two days ago.
        let spark = Sparkline::build(&trailing(&[100.0, 90.0, 80.0])).unwrap();
        assert_eq!(spark.points.first().unwrap().value, 80.0);
        assert_eq!(spark.points.last().unwrap().value, 100.0);
        assert_eq!(spark.trend, Trend::Up);
        assert!(spark.path.starts_with("M "));
        assert_eq!(spark.path.matches(" L ").count(), 2);
    }

    #[test]
    fn falling_series_classifies_down() {
        let spark = Sparkline::build(&trailing(&[80.0, 90.0, 100.0])).unwrap();
        assert_eq!(spark.trend, Trend::Down);
    }

    #[test]
    fn degenerate_series_widens_bounds_instead_of_dividing_by_zero() {
        let spark = Sparkline::build(&trailing(&[5.0, 5.0, 5.0])).unwrap();
        assert_eq!(spark.lo, 4.0);
        assert_eq!(spark.hi, 6.0);
        assert!(spark.path.split(" L ").count() == 3);
        assert!(!spark.path.contains("NaN"));
    }

    #[test]
    fn short_or_unusable_series_yields_nothing() {
        assert!(Sparkline::build(&[]).is_none());
        assert!(Sparkline::build(&trailing(&[42.0])).is_none());

        let mut mostly_junk = trailing(&[1.0]);
        mostly_junk.push(TrailPoint {
            date: "d1".into(),
            value: Some(f64::NAN),
        });
        mostly_junk.push(TrailPoint {
            date: "d2".into(),
            value: None,
        });
        assert!(Sparkline::build(&mostly_junk).is_none());
    }

    #[test]
    fn non_finite_entries_are_skipped_not_fatal() {
        let mut series = trailing(&[30.0, 20.0, 10.0]);
        series.insert(
            1,
            TrailPoint {
                date: "gap".into(),
                value: Some(f64::INFINITY),
            },
        );
        let spark = Sparkline::build(&series).unwrap();
        assert_eq!(spark.points.len(), 3);
        assert_eq!(spark.lo, 10.0);
        assert_eq!(spark.hi, 30.0);
    }
}
