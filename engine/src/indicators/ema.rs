// Exponential Moving Average (EMA) indicator implementation
use super::IndicatorCalculator;
use serde_json::Value;
use shared::models::Candle;

/// Recursive EMA with smoothing factor `2 / (period + 1)`, seeded with the first close.
///
/// The recursion runs from the first sample, but values are only reported once
/// `period` samples have been seen.
pub struct Ema {
    name: String,
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("EMA({})", period),
            period,
        }
    }
}

impl IndicatorCalculator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period })
    }

    fn calculate(&self, data: &[Candle]) -> Vec<Option<f64>> {
        if self.period == 0 || data.len() < self.period {
            return vec![None; data.len()];
        }

        let alpha = 2.0 / (self.period as f64 + 1.0);
        let mut results = Vec::with_capacity(data.len());
        let mut previous_ema = data[0].close;

        for (i, candle) in data.iter().enumerate() {
            if i > 0 {
                previous_ema = alpha * candle.close + (1.0 - alpha) * previous_ema;
            }
            results.push((i + 1 >= self.period).then_some(previous_ema));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::{assert_close, closes};

    #[test]
    fn test_ema_calculation() {
        let results = Ema::new(3).calculate(&closes(&[10.0, 11.0, 12.0, 13.0, 14.0]));
        // alpha = 0.5: 10 -> 10.5 -> 11.25 -> 12.125 -> 13.0625
        assert_eq!(results.len(), 5);
        assert_eq!(results[0], None);
        assert_eq!(results[1], None);
        assert_close(&results[2..], &[11.25, 12.125, 13.0625]);
    }

    #[test]
    fn test_ema_constant_series() {
        let results = Ema::new(20).calculate(&closes(&[42.0; 25]));
        assert!(results[..19].iter().all(Option::is_none));
        assert_close(&results[19..], &[42.0; 6]);
    }

    #[test]
    fn test_ema_insufficient_data() {
        assert_eq!(Ema::new(5).calculate(&closes(&[1.0, 2.0])), vec![None, None]);
    }

    #[test]
    fn test_ema_period_one_tracks_close() {
        let results = Ema::new(1).calculate(&closes(&[3.0, 7.0, 5.0]));
        assert_close(&results, &[3.0, 7.0, 5.0]);
    }
}
