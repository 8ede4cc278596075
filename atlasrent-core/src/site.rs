//! Site-wide constants: brand identity, contact channels and the static
//! content blocks (testimonials, standalone gallery) that never come from
//! the backend.

use crate::lang::Lang;

pub const NAME: &str = "ATLAS RENT";
pub const PHONE: &str = "+212661234567";
/// WhatsApp account, international format without `+` as `wa.me` expects.
pub const WHATSAPP: &str = "212661234567";
pub const EMAIL: &str = "contact@atlasrent.ma";
pub const HOURS: &str = "24/7";
pub const INSTAGRAM: &str = "https://www.instagram.com/atlasrent";

#[must_use]
pub const fn tagline(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => "Location de Voiture",
        Lang::En => "Car Rental",
        Lang::Ar => "تأجير السيارات",
    }
}

#[must_use]
pub const fn address(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => "Casablanca, Maroc",
        Lang::En => "Casablanca, Morocco",
        Lang::Ar => "الدار البيضاء، المغرب",
    }
}

#[must_use]
pub const fn delivery_zone(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => "Livraison disponible dans tout le Maroc",
        Lang::En => "Delivery available throughout Morocco",
        Lang::Ar => "التوصيل متاح في جميع أنحاء المغرب",
    }
}

pub struct Testimonial {
    pub name: &'static str,
    pub rating: u8,
    pub date: &'static str,
    comment_fr: &'static str,
    comment_en: &'static str,
    comment_ar: &'static str,
}

impl Testimonial {
    #[must_use]
    pub const fn comment(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Fr => self.comment_fr,
            Lang::En => self.comment_en,
            Lang::Ar => self.comment_ar,
        }
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Mohammed A.",
        rating: 5,
        date: "2025-01-15",
        comment_fr: "Service impeccable ! Voiture propre et en excellent état.",
        comment_en: "Impeccable service! Clean car in excellent condition.",
        comment_ar: "خدمة لا تشوبها شائبة! سيارة نظيفة وفي حالة ممتازة.",
    },
    Testimonial {
        name: "Sophie L.",
        rating: 5,
        date: "2025-01-10",
        comment_fr: "Équipe très professionnelle et prix compétitifs.",
        comment_en: "Very professional team and competitive prices.",
        comment_ar: "فريق محترف للغاية وأسعار تنافسية.",
    },
    Testimonial {
        name: "Ahmed K.",
        rating: 5,
        date: "2025-01-05",
        comment_fr: "Une expérience exceptionnelle du début à la fin.",
        comment_en: "An exceptional experience from start to finish.",
        comment_ar: "تجربة استثنائية من البداية إلى النهاية.",
    },
];

pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "/cars/touareg.jpg", alt: "Volkswagen Touareg" },
    GalleryImage { src: "/cars/accent.jpg", alt: "Hyundai Accent" },
    GalleryImage { src: "/cars/megane.jpg", alt: "Renault Megane" },
    GalleryImage { src: "/cars/evoque.jpg", alt: "Range Rover Evoque" },
    GalleryImage { src: "/cars/clio.jpg", alt: "Renault Clio" },
    GalleryImage { src: "/cars/golf8.jpg", alt: "Volkswagen Golf 8" },
];

#[cfg(test)]
mod tests {
    use super::{GALLERY, TESTIMONIALS, address};
    use crate::lang::Lang;

    #[test]
    fn every_language_has_an_address() {
        for lang in Lang::ALL {
            assert!(!address(lang).is_empty());
        }
    }

    #[test]
    fn static_content_is_populated() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= 5));
        assert!(!GALLERY.is_empty());
    }
}
