pub mod aggregate;
pub mod balance;
pub mod pairing;
pub mod projection;
pub mod required;
