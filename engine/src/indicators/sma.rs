// Simple Moving Average (SMA) indicator implementation
use super::IndicatorCalculator;
use serde_json::Value;
use shared::models::Candle;

pub struct Sma {
    name: String,
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("SMA({})", period),
            period,
        }
    }
}

impl IndicatorCalculator for Sma {
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

        let mut results = vec![None; self.period - 1];

        let mut sum: f64 = data.iter().take(self.period).map(|c| c.close).sum();
        results.push(Some(sum / self.period as f64));

        // Slide the window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period].close + data[i].close;
            results.push(Some(sum / self.period as f64));
        }
        results
    }
}
