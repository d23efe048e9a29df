//! Service layer: business operations for users, contacts and addresses.
//! - Each operation validates its request, checks ownership, then persists.
//! - Entities and lookups live in the `models` crate.

pub mod errors;
pub mod validation;
pub mod pagination;
pub mod domain;
pub mod user_service;
pub mod contact_service;
pub mod address_service;
#[cfg(test)]
pub mod test_support;
