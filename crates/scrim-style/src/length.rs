#![forbid(unsafe_code)]

//! Unit-aware length arithmetic for token derivation.
//!
//! Token derivation combines numeric design tokens (font sizes, paddings,
//! durations) with ordinary arithmetic and defers unit rendering to the
//! style assembly step. `Length` keeps the magnitude and unit together so
//! a derived value can be resolved to its printable CSS form exactly once,
//! preserving the derivation order and f64 semantics of every step.
//!
//! Invariants:
//! - Arithmetic never panics; combining two different concrete units is a
//!   caller contract violation and resolves to the left operand's unit.
//! - A dimensionless length adopts the concrete unit of the other operand.
//!
//! # Example
//!
//! ```
//! use scrim_style::length::Length;
//!
//! let header = Length::raw(16.0).mul(1.5).add(Length::px(16.0).mul(2.0));
//! assert_eq!(header.resolve(), "56px");
//! ```

use core::fmt;

/// Unit attached to a [`Length`].
///
/// `None` marks a dimensionless magnitude: line heights stay bare numbers,
/// while dimensionless geometry is treated as pixels by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    #[default]
    None,
    Px,
    Percent,
    Ms,
}

impl Unit {
    /// Printable suffix for this unit.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Px => "px",
            Self::Percent => "%",
            Self::Ms => "ms",
        }
    }

    /// Resolve the unit of a two-operand combination.
    ///
    /// Equal units keep the unit; a dimensionless side adopts the other.
    /// Two different concrete units keep the left unit.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::None, u) => u,
            (u, _) => u,
        }
    }
}

/// A magnitude with an attached unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Length {
    /// A dimensionless value.
    #[must_use]
    pub const fn raw(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::None,
        }
    }

    /// A pixel value.
    #[must_use]
    pub const fn px(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Px,
        }
    }

    /// A percentage value.
    #[must_use]
    pub const fn percent(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Percent,
        }
    }

    /// A millisecond duration.
    #[must_use]
    pub const fn ms(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Ms,
        }
    }

    /// Zero pixels. Emitted, never omitted, by the style assembler.
    pub const ZERO: Self = Self::px(0.0);

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            magnitude: self.magnitude + other.magnitude,
            unit: self.unit.combine(other.unit),
        }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self {
            magnitude: self.magnitude - other.magnitude,
            unit: self.unit.combine(other.unit),
        }
    }

    #[must_use]
    pub fn mul(self, factor: f64) -> Self {
        Self {
            magnitude: self.magnitude * factor,
            unit: self.unit,
        }
    }

    #[must_use]
    pub fn div(self, divisor: f64) -> Self {
        Self {
            magnitude: self.magnitude / divisor,
            unit: self.unit,
        }
    }

    /// Reinterpret a dimensionless value as pixels; concrete units are kept.
    #[must_use]
    pub const fn as_px(self) -> Self {
        match self.unit {
            Unit::None => Self::px(self.magnitude),
            _ => self,
        }
    }

    /// Whether the magnitude is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }

    /// The final printable value, e.g. `"16px"`, `"1.5"`, `"100%"`.
    #[must_use]
    pub fn resolve(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole magnitudes print without a fractional part.
        if self.magnitude.fract() == 0.0 && self.magnitude.abs() < 1e15 {
            write!(f, "{}{}", self.magnitude as i64, self.unit.suffix())
        } else {
            write!(f, "{}{}", self.magnitude, self.unit.suffix())
        }
    }
}
