//! Catalog data model.
//!
//! Vehicle records are owned by the rental backend; the client fetches them
//! fresh on each page visit and treats them as read-only.

use crate::lang::Lang;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    #[serde(rename = "auto")]
    Automatic,
    #[serde(rename = "manual")]
    Manual,
}

impl Transmission {
    /// Translation key for the display label.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Automatic => "specs.transmission.auto",
            Self::Manual => "specs.transmission.manual",
        }
    }
}

/// Fuel kinds keep the backend's French wire spelling for petrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fuel {
    #[serde(rename = "essence")]
    Petrol,
    #[serde(rename = "diesel")]
    Diesel,
}

impl Fuel {
    /// Translation key for the display label.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Petrol => "specs.fuel.petrol",
            Self::Diesel => "specs.fuel.diesel",
        }
    }
}

/// Per-language description strings. Missing entries fall back to French.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Descriptions {
    #[serde(default)]
    pub fr: String,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl Descriptions {
    #[must_use]
    pub fn for_lang(&self, lang: Lang) -> &str {
        let text = match lang {
            Lang::Fr => &self.fr,
            Lang::En => &self.en,
            Lang::Ar => &self.ar,
        };
        if text.is_empty() { &self.fr } else { text }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price_per_day: f64,
    pub currency: String,
    pub seats: u8,
    pub transmission: Transmission,
    pub fuel: Fuel,
    /// Free-form tag the fleet filter matches exactly.
    pub category: String,
    #[serde(default = "Vehicle::default_quantity")]
    pub quantity: u32,
    pub image: String,
    pub gallery: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: Descriptions,
}

impl Vehicle {
    const fn default_quantity() -> u32 {
        1
    }

    /// "Brand Model (Year)", the form used in selects and image alt text.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::{Descriptions, Fuel, Transmission, Vehicle};
    use crate::lang::Lang;

    const RECORD: &str = r#"{
        "id": "clio-5-2025",
        "model": "Clio 5",
        "brand": "Renault",
        "year": 2025,
        "price_per_day": 300,
        "currency": "DH",
        "seats": 5,
        "transmission": "manual",
        "fuel": "essence",
        "category": "compact",
        "quantity": 2,
        "image": "/cars/clio.jpg",
        "gallery": ["/cars/clio.jpg"],
        "features": ["Climatisation", "Bluetooth"],
        "description": {
            "fr": "Citadine économique.",
            "en": "Economical city car.",
            "ar": "سيارة اقتصادية."
        }
    }"#;

    #[test]
    fn deserializes_backend_record() {
        let car: Vehicle = serde_json::from_str(RECORD).expect("record should parse");
        assert_eq!(car.id, "clio-5-2025");
        assert_eq!(car.transmission, Transmission::Manual);
        assert_eq!(car.fuel, Fuel::Petrol);
        assert_eq!(car.quantity, 2);
        assert_eq!(car.display_name(), "Renault Clio 5 (2025)");
    }

    #[test]
    fn quantity_defaults_to_one() {
        let trimmed = RECORD.replace("\"quantity\": 2,", "");
        let car: Vehicle = serde_json::from_str(&trimmed).expect("record should parse");
        assert_eq!(car.quantity, 1);
    }

    #[test]
    fn wire_values_round_trip() {
        let json = serde_json::to_string(&Transmission::Automatic).expect("serialize");
        assert_eq!(json, "\"auto\"");
        let json = serde_json::to_string(&Fuel::Petrol).expect("serialize");
        assert_eq!(json, "\"essence\"");
    }

    #[test]
    fn descriptions_fall_back_to_french() {
        let desc = Descriptions {
            fr: "Texte français".to_string(),
            en: String::new(),
            ar: String::new(),
        };
        assert_eq!(desc.for_lang(Lang::En), "Texte français");
        assert_eq!(desc.for_lang(Lang::Ar), "Texte français");
        assert_eq!(desc.for_lang(Lang::Fr), "Texte français");
    }
}
