mod availability;
mod booking;

pub use availability::{common_free_slots, query_available, query_available_for, quorum_available};
pub use booking::book;
