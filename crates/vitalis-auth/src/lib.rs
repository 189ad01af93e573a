//! vitalis-auth
//!
//! Operator accounts (JSON-file user store with bcrypt hashes) and the HS256
//! bearer tokens issued to them.

pub mod error;
pub mod jwt;
pub mod users;
