pub mod car_card;
pub mod footer;
pub mod navbar;
pub mod whatsapp_fab;

pub use car_card::CarCard;
pub use footer::Footer;
pub use navbar::Navbar;
pub use whatsapp_fab::WhatsAppFab;
