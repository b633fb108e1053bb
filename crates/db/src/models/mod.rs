pub mod campus_event;
pub mod lost_found_item;
pub mod marketplace_item;
pub mod session;
pub mod ticket_listing;
pub mod user;
