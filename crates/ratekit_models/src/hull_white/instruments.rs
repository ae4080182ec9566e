//! Swaption instrument descriptions and market quotes.

use ratekit_core::types::PricingError;

/// Option exercise style for a zero-coupon bond option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy the bond at the strike.
    Call,
    /// Right to sell the bond at the strike.
    Put,
}

/// Which leg the swaption holder pays on exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwaptionStyle {
    /// Holder pays fixed and receives floating.
    Payer,
    /// Holder receives fixed and pays floating.
    Receiver,
}

/// A European swaption on a fixed-for-floating swap with unit notional.
///
/// Times are year fractions from the valuation date. The underlying swap
/// runs from `tenor_start` to `tenor_end` with fixed payments every
/// `fixed_frequency` years.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanSwaption {
    /// Fixed rate of the underlying swap.
    pub swap_rate: f64,
    /// Option expiry in years.
    pub expiry: f64,
    /// Start of the underlying swap in years.
    pub tenor_start: f64,
    /// End of the underlying swap in years.
    pub tenor_end: f64,
    /// Fixed-leg payment interval in years (e.g. 0.5 for semi-annual).
    pub fixed_frequency: f64,
    /// Payer or receiver.
    pub style: SwaptionStyle,
}

impl EuropeanSwaption {
    /// Creates a swaption after validating its schedule.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] when the expiry is negative,
    /// the tenor is empty or inverted, the frequency is not strictly
    /// positive, or the swap rate is not finite.
    pub fn new(
        swap_rate: f64,
        expiry: f64,
        tenor_start: f64,
        tenor_end: f64,
        fixed_frequency: f64,
        style: SwaptionStyle,
    ) -> Result<Self, PricingError> {
        let swaption = Self {
            swap_rate,
            expiry,
            tenor_start,
            tenor_end,
            fixed_frequency,
            style,
        };
        swaption.validate()?;
        Ok(swaption)
    }

    /// Checks the schedule invariants. Called by [`Self::new`] and again
    /// by the pricer, since the fields are public.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.swap_rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "swap rate must be finite, got {}",
                self.swap_rate
            )));
        }
        if !self.expiry.is_finite() || self.expiry < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "expiry must be non-negative, got {}",
                self.expiry
            )));
        }
        if !self.tenor_start.is_finite() || self.tenor_start < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "tenor start must be non-negative, got {}",
                self.tenor_start
            )));
        }
        if !self.tenor_end.is_finite() || self.tenor_end <= self.tenor_start {
            return Err(PricingError::InvalidInput(format!(
                "tenor end must exceed tenor start, got [{}, {}]",
                self.tenor_start, self.tenor_end
            )));
        }
        if !self.fixed_frequency.is_finite() || self.fixed_frequency <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "fixed frequency must be strictly positive, got {}",
                self.fixed_frequency
            )));
        }
        Ok(())
    }

    /// Fixed-leg payment dates strictly after the option expiry.
    ///
    /// The schedule enumerates `[tenor_start, tenor_end]` stepped by the
    /// fixed frequency, `tenor_start + k * fixed_frequency` for
    /// `k = 0..=n` with `n = round((tenor_end - tenor_start) / freq)`,
    /// built by integer stepping so that accumulated floating-point error
    /// cannot drop or duplicate a date. Dates at or before expiry carry
    /// no optionality and are excluded; for the common spot-starting case
    /// (`tenor_start == expiry`) that drops `tenor_start` itself, while a
    /// forward-starting underlying keeps it.
    pub fn payment_dates(&self) -> Vec<f64> {
        let n = ((self.tenor_end - self.tenor_start) / self.fixed_frequency).round() as usize;
        (0..=n)
            .map(|k| self.tenor_start + k as f64 * self.fixed_frequency)
            .filter(|&t| t > self.expiry)
            .collect()
    }
}

/// A swaption together with its observed market price, used as a
/// calibration target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSwaption {
    /// Instrument description.
    pub instrument: EuropeanSwaption,
    /// Observed price per unit notional.
    pub market_price: f64,
}

impl MarketSwaption {
    /// Pairs an instrument with its quoted price.
    pub fn new(instrument: EuropeanSwaption, market_price: f64) -> Self {
        Self {
            instrument,
            market_price,
        }
    }
}
