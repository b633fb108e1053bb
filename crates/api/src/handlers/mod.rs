pub mod ai;
pub mod auth;
pub mod events;
pub mod lost_and_found;
pub mod marketplace;
pub mod ticket_exchange;
