//! Messaging-handoff composition.
//!
//! Renders the prefilled WhatsApp texts: the structured booking request
//! block, plus the short inquiry lines used by the detail page and the
//! floating contact button. Output is an opaque string; percent-encoding
//! is the link builder's concern.

use crate::booking::BookingDraft;
use crate::catalog::{Fuel, Transmission, Vehicle};
use crate::lang::Lang;
use crate::quote::Quote;
use crate::site;
use chrono::NaiveDate;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Fixed per-language strings for the booking block. The UI bundles live in
/// the web crate; the composer carries its own table so the handoff text is
/// identical wherever it is produced.
struct Labels {
    greeting: &'static str,
    vehicle_section: &'static str,
    model: &'static str,
    year: &'static str,
    transmission: &'static str,
    fuel: &'static str,
    seats: &'static str,
    seats_unit: &'static str,
    price: &'static str,
    per_day: &'static str,
    booking_section: &'static str,
    from: &'static str,
    to: &'static str,
    duration: &'static str,
    day_one: &'static str,
    day_many: &'static str,
    pickup_location: &'static str,
    total_section: &'static str,
    contact_section: &'static str,
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    notes: &'static str,
    closing: &'static str,
    not_selected: &'static str,
    not_provided: &'static str,
    transmission_auto: &'static str,
    transmission_manual: &'static str,
    fuel_petrol: &'static str,
    fuel_diesel: &'static str,
}

const FR: Labels = Labels {
    greeting: "Bonjour",
    vehicle_section: "Détails du véhicule",
    model: "Modèle",
    year: "Année",
    transmission: "Transmission",
    fuel: "Carburant",
    seats: "Places",
    seats_unit: "places",
    price: "Prix",
    per_day: "jour",
    booking_section: "Détails de la réservation",
    from: "Du",
    to: "Au",
    duration: "Durée",
    day_one: "jour",
    day_many: "jours",
    pickup_location: "Lieu de prise en charge",
    total_section: "Coût Total",
    contact_section: "Informations de contact",
    name: "Nom",
    phone: "Tél",
    email: "Email",
    notes: "Message",
    closing: "Merci! Veuillez confirmer la disponibilité.",
    not_selected: "Non sélectionné",
    not_provided: "Non fourni",
    transmission_auto: "Automatique",
    transmission_manual: "Manuelle",
    fuel_petrol: "Essence",
    fuel_diesel: "Diesel",
};

const EN: Labels = Labels {
    greeting: "Hello",
    vehicle_section: "Vehicle Details",
    model: "Model",
    year: "Year",
    transmission: "Transmission",
    fuel: "Fuel",
    seats: "Seats",
    seats_unit: "seats",
    price: "Price",
    per_day: "day",
    booking_section: "Booking Details",
    from: "From",
    to: "To",
    duration: "Duration",
    day_one: "day",
    day_many: "days",
    pickup_location: "Pickup Location",
    total_section: "Total Cost",
    contact_section: "Contact Info",
    name: "Name",
    phone: "Phone",
    email: "Email",
    notes: "Notes",
    closing: "Thank you! Please confirm availability.",
    not_selected: "Not selected",
    not_provided: "Not provided",
    transmission_auto: "Automatic",
    transmission_manual: "Manual",
    fuel_petrol: "Petrol",
    fuel_diesel: "Diesel",
};

const AR: Labels = Labels {
    greeting: "مرحباً",
    vehicle_section: "تفاصيل السيارة",
    model: "الموديل",
    year: "السنة",
    transmission: "ناقل الحركة",
    fuel: "الوقود",
    seats: "عدد المقاعد",
    seats_unit: "مقاعد",
    price: "السعر",
    per_day: "يوم",
    booking_section: "تفاصيل الحجز",
    from: "من",
    to: "إلى",
    duration: "المدة",
    day_one: "يوم",
    day_many: "أيام",
    pickup_location: "مكان الاستلام",
    total_section: "التكلفة الإجمالية",
    contact_section: "معلومات الاتصال",
    name: "الاسم",
    phone: "الهاتف",
    email: "البريد الإلكتروني",
    notes: "ملاحظات",
    closing: "شكراً لك! أرجو تأكيد التوفر.",
    not_selected: "غير محدد",
    not_provided: "غير محدد",
    transmission_auto: "أوتوماتيك",
    transmission_manual: "يدوي",
    fuel_petrol: "بنزين",
    fuel_diesel: "Diesel",
};

const fn labels(lang: Lang) -> &'static Labels {
    match lang {
        Lang::Fr => &FR,
        Lang::En => &EN,
        Lang::Ar => &AR,
    }
}

fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%d/%m/%Y").to_string())
}

/// Whole amounts print without decimals, everything else with two.
#[allow(clippy::cast_possible_truncation)] // integral check precedes the cast
fn fmt_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

fn transmission_label(labels: &Labels, transmission: Transmission) -> &'static str {
    match transmission {
        Transmission::Automatic => labels.transmission_auto,
        Transmission::Manual => labels.transmission_manual,
    }
}

fn fuel_label(labels: &Labels, fuel: Fuel) -> &'static str {
    match fuel {
        Fuel::Petrol => labels.fuel_petrol,
        Fuel::Diesel => labels.fuel_diesel,
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

/// Render the structured booking request block.
///
/// Four sections in stable order (vehicle, dates, total, contact), each
/// under a divider-framed heading. Absent values render per-language
/// placeholders, so a fully empty draft still composes — the booking page
/// uses that for its live preview. Required-field enforcement happens in
/// [`BookingDraft::validate`] before a real submission.
#[must_use]
pub fn compose_booking(
    vehicle: Option<&Vehicle>,
    draft: &BookingDraft,
    quote: &Quote,
    lang: Lang,
) -> String {
    let l = labels(lang);
    let currency = vehicle.map_or("DH", |car| car.currency.as_str());

    let model = vehicle.map_or_else(
        || l.not_selected.to_string(),
        |car| format!("{} {}", car.brand, car.model),
    );
    let year = vehicle.map_or_else(|| "-".to_string(), |car| car.year.to_string());
    let transmission =
        vehicle.map_or("-", |car| transmission_label(l, car.transmission));
    let fuel = vehicle.map_or("-", |car| fuel_label(l, car.fuel));
    let seats = vehicle.map_or_else(|| "-".to_string(), |car| car.seats.to_string());
    let rate = vehicle.map_or_else(|| "-".to_string(), |car| fmt_amount(car.price_per_day));

    let (duration, total) = if quote.is_available() {
        let unit = if quote.days > 1 { l.day_many } else { l.day_one };
        (
            format!("{} {unit}", quote.days),
            format!("{} {currency}", fmt_amount(quote.total)),
        )
    } else {
        ("-".to_string(), "-".to_string())
    };

    let email = if draft.email.trim().is_empty() {
        l.not_provided
    } else {
        draft.email.as_str()
    };

    let mut text = format!("{} {}! 🚗\n\n", l.greeting, site::NAME);
    text.push_str(&format!(
        "{DIVIDER}\n🚗 {}:\n{DIVIDER}\n\
         • {}: {model}\n\
         • {}: {year}\n\
         • {}: {transmission}\n\
         • {}: {fuel}\n\
         • {}: {seats} {}\n\
         • {}: {rate} {currency}/{}\n\n",
        l.vehicle_section,
        l.model,
        l.year,
        l.transmission,
        l.fuel,
        l.seats,
        l.seats_unit,
        l.price,
        l.per_day,
    ));
    text.push_str(&format!(
        "{DIVIDER}\n📅 {}:\n{DIVIDER}\n\
         • {}: {}\n\
         • {}: {}\n\
         • {}: {duration}\n\
         • {}: {}\n\n",
        l.booking_section,
        l.from,
        fmt_date(draft.pickup_date),
        l.to,
        fmt_date(draft.return_date),
        l.duration,
        l.pickup_location,
        or_dash(&draft.pickup_location),
    ));
    text.push_str(&format!(
        "{DIVIDER}\n💰 {}: {total}\n{DIVIDER}\n\n",
        l.total_section,
    ));
    text.push_str(&format!(
        "👤 {}:\n{}: {}\n{}: {}\n{}: {email}",
        l.contact_section,
        l.name,
        or_dash(&draft.full_name),
        l.phone,
        or_dash(&draft.phone),
        l.email,
    ));
    if !draft.message.trim().is_empty() {
        text.push_str(&format!("\n\n📝 {}: {}", l.notes, draft.message));
    }
    text.push_str(&format!("\n\n{}", l.closing));
    text
}

/// Short prefilled text for the detail page's direct WhatsApp action.
#[must_use]
pub fn compose_inquiry(vehicle: &Vehicle, lang: Lang) -> String {
    let name = vehicle.display_name();
    match lang {
        Lang::Fr => format!("Bonjour, je souhaite réserver la {name}."),
        Lang::En => format!("Hello, I would like to book the {name}."),
        Lang::Ar => format!("مرحباً، أرغب في حجز {name}."),
    }
}

/// Prefilled text for the floating contact button.
#[must_use]
pub const fn compose_general_inquiry(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => "Bonjour ! Je souhaite me renseigner sur vos services de location de voitures.",
        Lang::En => "Hello! I would like to inquire about your car rental services.",
        Lang::Ar => "مرحباً! أرغب في الاستفسار عن خدمات تأجير السيارات.",
    }
}

#[cfg(test)]
mod tests {
    use super::{compose_booking, compose_general_inquiry, compose_inquiry};
    use crate::booking::BookingDraft;
    use crate::catalog::{Descriptions, Fuel, Transmission, Vehicle};
    use crate::lang::Lang;
    use crate::quote::{Quote, quote};
    use chrono::NaiveDate;

    fn car() -> Vehicle {
        Vehicle {
            id: "q8-2024".to_string(),
            brand: "Audi".to_string(),
            model: "Q8".to_string(),
            year: 2024,
            price_per_day: 1600.0,
            currency: "DH".to_string(),
            seats: 5,
            transmission: Transmission::Automatic,
            fuel: Fuel::Diesel,
            category: "suv-premium".to_string(),
            quantity: 1,
            image: String::new(),
            gallery: vec![],
            features: vec![],
            description: Descriptions::default(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn empty_draft_composes_with_placeholders() {
        for lang in Lang::ALL {
            let text = compose_booking(None, &BookingDraft::default(), &Quote::default(), lang);
            assert!(text.contains(super::labels(lang).not_selected));
            assert!(text.contains(super::labels(lang).not_provided));
            assert!(text.contains(": -"));
        }
    }

    #[test]
    fn sections_appear_in_stable_order() {
        let draft = BookingDraft {
            full_name: "Yasmine Alaoui".to_string(),
            phone: "+212600000000".to_string(),
            car_id: "q8-2024".to_string(),
            pickup_date: Some(day(2025, 3, 1)),
            return_date: Some(day(2025, 3, 5)),
            pickup_location: "casablanca".to_string(),
            ..BookingDraft::default()
        };
        let q = quote(draft.pickup_date, draft.return_date, 1600.0);
        let text = compose_booking(Some(&car()), &draft, &q, Lang::En);

        let vehicle = text.find("Vehicle Details").expect("vehicle section");
        let dates = text.find("Booking Details").expect("dates section");
        let total = text.find("Total Cost").expect("total section");
        let contact = text.find("Contact Info").expect("contact section");
        assert!(vehicle < dates && dates < total && total < contact);

        assert!(text.contains("Audi Q8"));
        assert!(text.contains("From: 01/03/2025"));
        assert!(text.contains("Duration: 4 days"));
        assert!(text.contains("Total Cost: 6400 DH"));
        assert!(text.contains("Email: Not provided"));
    }

    #[test]
    fn single_day_uses_singular_unit() {
        let draft = BookingDraft {
            pickup_date: Some(day(2025, 3, 1)),
            return_date: Some(day(2025, 3, 1)),
            ..BookingDraft::default()
        };
        let q = quote(draft.pickup_date, draft.return_date, 300.0);
        let text = compose_booking(Some(&car()), &draft, &q, Lang::Fr);
        assert!(text.contains("Durée: 1 jour\n"));
    }

    #[test]
    fn notes_section_only_appears_with_a_message() {
        let mut draft = BookingDraft::default();
        let without = compose_booking(None, &draft, &Quote::default(), Lang::En);
        assert!(!without.contains("📝"));

        draft.message = "Child seat please".to_string();
        let with = compose_booking(None, &draft, &Quote::default(), Lang::En);
        assert!(with.contains("📝 Notes: Child seat please"));
    }

    #[test]
    fn enum_labels_are_language_specific() {
        let draft = BookingDraft::default();
        let fr = compose_booking(Some(&car()), &draft, &Quote::default(), Lang::Fr);
        assert!(fr.contains("Automatique"));
        let ar = compose_booking(Some(&car()), &draft, &Quote::default(), Lang::Ar);
        assert!(ar.contains("أوتوماتيك"));
    }

    #[test]
    fn inquiries_mention_the_vehicle() {
        let text = compose_inquiry(&car(), Lang::En);
        assert!(text.contains("Audi Q8 (2024)"));
        assert!(!compose_general_inquiry(Lang::Ar).is_empty());
    }
}
