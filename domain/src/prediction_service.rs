//! Income forecast for the Predictions view.
//!
//! The forecast itself is static mock data; this module derives the
//! shortfall for the next day and how many extra gigs would close it.

use shared::PredictionPoint;

pub const DEFAULT_DAILY_TARGET: f64 = 2000.0;
/// Average payout of one delivery
pub const AVG_DELIVERY_PAYOUT: f64 = 80.0;
/// Average payout of one ride
pub const AVG_RIDE_PAYOUT: f64 = 200.0;

/// How a single day compares with the target
#[derive(Debug, Clone, PartialEq)]
pub struct DayComparison {
    pub day: String,
    pub value: f64,
    pub diff: f64,
    pub is_above: bool,
}

/// Plan for closing the predicted gap on the next day
#[derive(Debug, Clone, PartialEq)]
pub struct ShortfallPlan {
    pub day: String,
    pub predicted: f64,
    pub gap: f64,
    pub is_shortfall: bool,
    pub extra_deliveries: u32,
    pub extra_rides: u32,
}

#[derive(Debug, Clone)]
pub struct PredictionService {
    daily_target: f64,
}

impl PredictionService {
    pub fn new(daily_target: f64) -> Self {
        Self { daily_target }
    }

    pub fn daily_target(&self) -> f64 {
        self.daily_target
    }

    /// Shortfall plan for the last point in the series (the forecast day).
    /// Returns None for an empty series.
    pub fn next_day_plan(&self, points: &[PredictionPoint]) -> Option<ShortfallPlan> {
        let next = points.last()?;
        let gap = self.daily_target - next.predicted;
        let is_shortfall = gap > 0.0;

        let (extra_deliveries, extra_rides) = if is_shortfall {
            (
                (gap / AVG_DELIVERY_PAYOUT).ceil() as u32,
                (gap / AVG_RIDE_PAYOUT).ceil() as u32,
            )
        } else {
            (0, 0)
        };

        Some(ShortfallPlan {
            day: next.day.clone(),
            predicted: next.predicted,
            gap,
            is_shortfall,
            extra_deliveries,
            extra_rides,
        })
    }

    /// Compare a day's value (actual when known, predicted otherwise) with the target
    pub fn compare(&self, point: &PredictionPoint) -> DayComparison {
        let value = point.value();
        let diff = value - self.daily_target;
        DayComparison {
            day: point.day.clone(),
            value,
            diff,
            is_above: diff >= 0.0,
        }
    }

    /// Days (with known actuals) on which the target was met
    pub fn days_on_target(&self, points: &[PredictionPoint]) -> usize {
        points
            .iter()
            .filter_map(|point| point.actual)
            .filter(|actual| *actual >= self.daily_target)
            .count()
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::prediction_data;

    fn point(day: &str, actual: Option<f64>, predicted: f64) -> PredictionPoint {
        PredictionPoint {
            day: day.to_string(),
            actual,
            predicted,
        }
    }

    #[test]
    fn test_monday_shortfall_plan() {
        let service = PredictionService::default();

        let plan = service.next_day_plan(&prediction_data()).unwrap();

        assert_eq!(plan.day, "Mon");
        assert_eq!(plan.predicted, 1200.0);
        assert_eq!(plan.gap, 800.0);
        assert!(plan.is_shortfall);
        assert_eq!(plan.extra_deliveries, 10);
        assert_eq!(plan.extra_rides, 4);
    }

    #[test]
    fn test_gig_counts_round_up() {
        let service = PredictionService::new(2000.0);

        let plan = service.next_day_plan(&[point("Mon", None, 1990.0)]).unwrap();

        assert_eq!(plan.gap, 10.0);
        assert_eq!(plan.extra_deliveries, 1);
        assert_eq!(plan.extra_rides, 1);
    }

    #[test]
    fn test_no_shortfall_when_forecast_meets_target() {
        let service = PredictionService::default();

        let plan = service.next_day_plan(&[point("Mon", None, 2500.0)]).unwrap();

        assert!(!plan.is_shortfall);
        assert_eq!(plan.gap, -500.0);
        assert_eq!(plan.extra_deliveries, 0);
        assert_eq!(plan.extra_rides, 0);
    }

    #[test]
    fn test_empty_series_has_no_plan() {
        assert!(PredictionService::default().next_day_plan(&[]).is_none());
    }

    #[test]
    fn test_compare_uses_actual_then_predicted() {
        let service = PredictionService::default();

        let saturday = service.compare(&point("Sat", Some(2700.0), 2900.0));
        assert_eq!(saturday.diff, 700.0);
        assert!(saturday.is_above);

        let monday = service.compare(&point("Mon", None, 1200.0));
        assert_eq!(monday.value, 1200.0);
        assert_eq!(monday.diff, -800.0);
        assert!(!monday.is_above);

        let exact = service.compare(&point("Fri", Some(2000.0), 1800.0));
        assert!(exact.is_above);
    }

    #[test]
    fn test_days_on_target() {
        let service = PredictionService::default();
        // Sat 2700 and Sun 2600
        assert_eq!(service.days_on_target(&prediction_data()), 2);
    }
}
