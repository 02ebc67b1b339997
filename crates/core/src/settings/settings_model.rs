//! Analytics settings model.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Tunable thresholds for the return and root-finding engines.
///
/// Defaults reproduce the documented policy; a host application may load an
/// override from JSON, but every field is validated before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSettings {
    /// Day count used when converting a holding period into years.
    pub days_per_year: f64,
    /// Minimum holding period before TWR is annualized.
    pub twr_annualize_min_days: i64,
    /// TWR is never annualized at or below this total return (fraction, e.g. -0.5).
    pub twr_loss_floor: f64,
    /// Annualized TWR beyond +/- this fraction falls back to the total return.
    pub twr_annualized_cap: f64,
    /// Minimum capital-weighted holding period before MWR is annualized.
    pub mwr_annualize_min_days: f64,
    /// Annualized MWR beyond +/- this fraction falls back to the total return.
    pub mwr_annualized_cap: f64,
    pub irr: IrrSettings,
}

/// Newton-Raphson parameters for the money-weighted return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IrrSettings {
    pub initial_guess: f64,
    pub derivative_step: f64,
    pub tolerance: f64,
    pub max_iterations: u32,
    pub min_rate: f64,
    pub max_rate: f64,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        AnalyticsSettings {
            days_per_year: 365.0,
            twr_annualize_min_days: 90,
            twr_loss_floor: -0.5,
            twr_annualized_cap: 1.0,
            mwr_annualize_min_days: 30.0,
            mwr_annualized_cap: 10.0,
            irr: IrrSettings::default(),
        }
    }
}

impl Default for IrrSettings {
    fn default() -> Self {
        IrrSettings {
            initial_guess: 0.10,
            derivative_step: 1e-4,
            tolerance: 1e-4,
            max_iterations: 100,
            min_rate: -0.99,
            max_rate: 10.0,
        }
    }
}

impl AnalyticsSettings {
    /// Parses settings from JSON; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: AnalyticsSettings = serde_json::from_str(raw)
            .map_err(|e| Error::ConfigIO(format!("Unable to parse analytics settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.days_per_year.is_finite() && self.days_per_year > 0.0) {
            return Err(invalid("daysPerYear", self.days_per_year));
        }
        if self.twr_annualize_min_days < 1 {
            return Err(invalid("twrAnnualizeMinDays", self.twr_annualize_min_days));
        }
        if !(self.twr_loss_floor.is_finite() && self.twr_loss_floor > -1.0) {
            return Err(invalid("twrLossFloor", self.twr_loss_floor));
        }
        if !(self.twr_annualized_cap.is_finite() && self.twr_annualized_cap > 0.0) {
            return Err(invalid("twrAnnualizedCap", self.twr_annualized_cap));
        }
        if !(self.mwr_annualize_min_days.is_finite() && self.mwr_annualize_min_days > 0.0) {
            return Err(invalid("mwrAnnualizeMinDays", self.mwr_annualize_min_days));
        }
        if !(self.mwr_annualized_cap.is_finite() && self.mwr_annualized_cap > 0.0) {
            return Err(invalid("mwrAnnualizedCap", self.mwr_annualized_cap));
        }
        self.irr.validate()
    }
}

impl IrrSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.derivative_step.is_finite() && self.derivative_step > 0.0) {
            return Err(invalid("irr.derivativeStep", self.derivative_step));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(invalid("irr.tolerance", self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(invalid("irr.maxIterations", self.max_iterations));
        }
        // The lower bound must stay above -100%, otherwise (1 + r) reaches zero.
        if !(self.min_rate > -1.0 && self.min_rate < self.max_rate && self.max_rate.is_finite()) {
            return Err(Error::InvalidConfigValue(format!(
                "irr rate bounds [{}, {}] are invalid",
                self.min_rate, self.max_rate
            )));
        }
        if !(self.initial_guess >= self.min_rate && self.initial_guess <= self.max_rate) {
            return Err(invalid("irr.initialGuess", self.initial_guess));
        }
        Ok(())
    }
}

fn invalid(key: &str, value: impl std::fmt::Display) -> Error {
    Error::InvalidConfigValue(format!("{} = {}", key, value))
}
