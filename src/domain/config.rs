// ============================================================================
// Instrument Precision Configuration
// Tick/lot grid of one instrument and the display precision it implies
// ============================================================================

use crate::numeric::{
    format_normalized, format_with_precision, quantize_down, PrecisionError, PrecisionResult,
    Step, NORMALIZE_DIGITS,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Price and amount grid for a trading instrument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InstrumentPrecision {
    /// The trading instrument (e.g., "BTC-USD", "AAPL")
    pub instrument: String,

    /// Optional: Price tick size (minimum price increment)
    /// None means prices are not quantized
    #[cfg_attr(feature = "serde", serde(default))]
    pub tick_size: Option<f64>,

    /// Optional: Lot size (minimum amount increment)
    /// None means amounts are not quantized
    #[cfg_attr(feature = "serde", serde(default))]
    pub lot_size: Option<f64>,
}

impl InstrumentPrecision {
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            tick_size: None,
            lot_size: None,
        }
    }

    /// Builder method: Set price tick size
    pub fn with_tick_size(mut self, tick: f64) -> Self {
        self.tick_size = Some(tick);
        self
    }

    /// Builder method: Set lot size
    pub fn with_lot_size(mut self, lot: f64) -> Self {
        self.lot_size = Some(lot);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> PrecisionResult<()> {
        if self.instrument.is_empty() {
            return Err(PrecisionError::InvalidConfig("instrument cannot be empty"));
        }

        if let Some(tick) = self.tick_size {
            if Step::new(tick).is_err() {
                return Err(PrecisionError::InvalidConfig("tick size must be positive"));
            }
        }

        if let Some(lot) = self.lot_size {
            if Step::new(lot).is_err() {
                return Err(PrecisionError::InvalidConfig("lot size must be positive"));
            }
        }

        Ok(())
    }

    /// Round a price down onto the tick grid (unchanged without a tick size).
    pub fn quantize_price(&self, price: f64) -> PrecisionResult<f64> {
        quantize_on(price, self.tick_size)
    }

    /// Round an amount down onto the lot grid (unchanged without a lot size).
    pub fn quantize_amount(&self, amount: f64) -> PrecisionResult<f64> {
        quantize_on(amount, self.lot_size)
    }

    /// Fractional digits shown for prices
    pub fn price_decimals(&self) -> u32 {
        display_decimals(self.tick_size)
    }

    /// Fractional digits shown for amounts
    pub fn amount_decimals(&self) -> u32 {
        display_decimals(self.lot_size)
    }

    /// Quantize and render a price at the tick's precision.
    pub fn format_price(&self, price: f64) -> PrecisionResult<String> {
        let quantized = self.quantize_price(price)?;
        Ok(render(quantized, self.tick_size, self.price_decimals()))
    }

    /// Quantize and render an amount at the lot's precision.
    pub fn format_amount(&self, amount: f64) -> PrecisionResult<String> {
        let quantized = self.quantize_amount(amount)?;
        Ok(render(quantized, self.lot_size, self.amount_decimals()))
    }
}

#[cfg(feature = "serde")]
impl InstrumentPrecision {
    /// Parse and validate a configuration from JSON.
    ///
    /// # Errors
    /// - `InvalidInput` if the JSON is malformed
    /// - `InvalidConfig` if the parsed configuration fails validation
    pub fn from_json(json: &str) -> PrecisionResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            tracing::warn!("Failed to parse instrument precision: {}", err);
            PrecisionError::InvalidInput
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn quantize_on(value: f64, step: Option<f64>) -> PrecisionResult<f64> {
    match step {
        Some(step) => quantize_down(value, step),
        None => Ok(value),
    }
}

fn display_decimals(step: Option<f64>) -> u32 {
    match step.and_then(|step| Step::new(step).ok()) {
        // Fractional steps below the 12-digit inference width read as 0 digits
        Some(step) if step.decimals() <= 0 && step.get() < 1.0 => NORMALIZE_DIGITS,
        Some(step) => step.decimals().max(0) as u32,
        None => NORMALIZE_DIGITS,
    }
}

fn render(value: f64, step: Option<f64>, digits: u32) -> String {
    match step {
        Some(_) => format_with_precision(value, digits),
        None => format_normalized(value),
    }
}
