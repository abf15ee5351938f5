//! Derived trip metrics: travel time and fuel cost estimates

use serde::{Deserialize, Serialize};

use crate::Error;

/// Physical constants used to derive trip metrics from a distance.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Fuel consumption, liters per 100 km.
    pub consumption_per_100km: f64,
    /// Fuel price, currency units per liter.
    pub price_per_liter: f64,
    /// Assumed average travel speed, km/h.
    pub average_speed_kmh: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            consumption_per_100km: 3.5,
            price_per_liter: 1.60,
            average_speed_kmh: 35.0,
        }
    }
}

impl CostModel {
    /// Checks the constants are usable: the speed must be positive and
    /// everything finite.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] otherwise.
    pub fn validate(&self) -> Result<(), Error> {
        let finite = self.consumption_per_100km.is_finite()
            && self.price_per_liter.is_finite()
            && self.average_speed_kmh.is_finite();
        if !finite || self.average_speed_kmh <= 0.0 {
            return Err(Error::InvalidData(
                "cost model constants must be finite with a positive speed".to_string(),
            ));
        }
        Ok(())
    }
}

/// Metrics derived from a path's total distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripMetrics {
    pub distance_km: f64,
    pub estimated_time_minutes: u32,
    pub average_speed_kmh: f64,
    pub fuel_cost: f64,
}

/// Derives travel time and fuel cost from a raw distance in meters.
///
/// Pure: the same distance and model always yield the same metrics.
/// Rounding is half-away-from-zero (`f64::round`) at both sites: the
/// time to whole minutes, the fuel cost to two decimals.
///
/// # Errors
///
/// [`Error::InvalidMetric`] if `distance_m` is negative or non-finite.
/// Distances reaching this function come from the resolver and are
/// non-negative by construction, so this is a contract check on the
/// caller, not an expected path.
pub fn derive_metrics(distance_m: f64, model: &CostModel) -> Result<TripMetrics, Error> {
    if !distance_m.is_finite() || distance_m < 0.0 {
        return Err(Error::InvalidMetric(distance_m));
    }

    let distance_km = distance_m / 1000.0;
    let estimated_time_minutes = (distance_km / model.average_speed_kmh * 60.0).round() as u32;
    let fuel_liters = (distance_km / 100.0) * model.consumption_per_100km;
    let fuel_cost = round_2dp(fuel_liters * model.price_per_liter);

    Ok(TripMetrics {
        distance_km,
        estimated_time_minutes,
        average_speed_kmh: model.average_speed_kmh,
        fuel_cost,
    })
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
