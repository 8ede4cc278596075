//! Catalog filtering.
//!
//! Four independent predicates (free-text search, price band, transmission,
//! category) combined with AND. Filtering is pure and keeps catalog order.

use crate::catalog::{Transmission, Vehicle};

/// Daily-rate bands offered by the fleet filter bar. Bands are half-open
/// `[low, high)`; the top band is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBand {
    #[default]
    All,
    UpTo400,
    From400To700,
    From700To1000,
    Over1000,
}

impl PriceBand {
    pub const ALL_BANDS: [Self; 5] = [
        Self::All,
        Self::UpTo400,
        Self::From400To700,
        Self::From700To1000,
        Self::Over1000,
    ];

    /// Select-option value used by the filter bar.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::UpTo400 => "0-400",
            Self::From400To700 => "400-700",
            Self::From700To1000 => "700-1000",
            Self::Over1000 => "1000+",
        }
    }

    /// Parse a select-option value; unknown values fall back to `All`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL_BANDS
            .into_iter()
            .find(|band| band.value() == value)
            .unwrap_or_default()
    }

    const fn bounds(self) -> (f64, Option<f64>) {
        match self {
            Self::All => (0.0, None),
            Self::UpTo400 => (0.0, Some(400.0)),
            Self::From400To700 => (400.0, Some(700.0)),
            Self::From700To1000 => (700.0, Some(1000.0)),
            Self::Over1000 => (1000.0, None),
        }
    }

    #[must_use]
    pub fn contains(self, rate: f64) -> bool {
        let (low, high) = self.bounds();
        rate >= low && high.is_none_or(|h| rate < h)
    }

    /// Static display label for the numeric bands. `All` is translated by
    /// the presentation layer instead.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "",
            Self::UpTo400 => "0 - 400 DH",
            Self::From400To700 => "400 - 700 DH",
            Self::From700To1000 => "700 - 1000 DH",
            Self::Over1000 => "1000+ DH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransmissionFilter {
    #[default]
    All,
    Only(Transmission),
}

impl TransmissionFilter {
    #[must_use]
    pub fn matches(self, transmission: Transmission) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == transmission,
        }
    }

    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(Transmission::Automatic) => "auto",
            Self::Only(Transmission::Manual) => "manual",
        }
    }

    /// Parse a select-option value; unknown values fall back to `All`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "auto" => Self::Only(Transmission::Automatic),
            "manual" => Self::Only(Transmission::Manual),
            _ => Self::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => tag == category,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Tag(tag) => tag,
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }
}

/// Ephemeral view-state criteria; reset through [`FilterCriteria::clear`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub price: PriceBand,
    pub transmission: TransmissionFilter,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search.is_empty()
            && self.price == PriceBand::All
            && self.transmission == TransmissionFilter::All
            && self.category == CategoryFilter::All
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn matches(&self, car: &Vehicle) -> bool {
        let term = self.search.to_lowercase();
        let search_ok = self.search.is_empty()
            || car.brand.to_lowercase().contains(&term)
            || car.model.to_lowercase().contains(&term);

        search_ok
            && self.price.contains(car.price_per_day)
            && self.transmission.matches(car.transmission)
            && self.category.matches(&car.category)
    }

    /// Apply every predicate, preserving catalog order.
    #[must_use]
    pub fn apply(&self, cars: &[Vehicle]) -> Vec<Vehicle> {
        cars.iter().filter(|car| self.matches(car)).cloned().collect()
    }
}
