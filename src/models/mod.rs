pub mod role;
pub mod auth;
pub mod donation;
pub mod route;
pub mod people;
pub mod stock;
pub mod stats;

pub use role::Role;
pub use auth::{LoginRequest, LoginResponse, Session};
pub use donation::{Donation, DonationStatus, NewDonation};
pub use route::{Route, RouteStatus, RouteStatusUpdate};
pub use people::{Address, Donor, Recipient};
pub use stock::StockItem;
pub use stats::{ApiStatus, Stats};
