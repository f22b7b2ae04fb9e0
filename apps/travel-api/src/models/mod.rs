pub mod availability;
pub mod destination;
pub mod preferences;
pub mod profile;
pub mod restrictions;
pub mod user;
