pub mod record;
pub mod session;
pub mod user;
