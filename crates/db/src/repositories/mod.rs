mod campus_event_repo;
mod lost_found_repo;
mod marketplace_repo;
mod session_repo;
mod ticket_listing_repo;
mod user_repo;

pub use campus_event_repo::CampusEventRepo;
pub use lost_found_repo::LostFoundRepo;
pub use marketplace_repo::MarketplaceRepo;
pub use session_repo::SessionRepo;
pub use ticket_listing_repo::TicketListingRepo;
pub use user_repo::UserRepo;
