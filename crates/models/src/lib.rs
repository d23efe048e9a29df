//! SeaORM entities for `users`, `contacts` and `addresses`, plus the
//! connection helpers and row lookups shared by the service layer.

pub mod errors;
pub mod db;
pub mod user;
pub mod contact;
pub mod address;

#[cfg(test)]
mod tests;
