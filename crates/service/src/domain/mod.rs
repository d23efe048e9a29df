//! Request and response shapes exchanged with the HTTP layer.
//!
//! Requests carry their `validator` rules; responses are the public views of
//! entity rows and never expose internal columns such as the password hash.

pub mod user;
pub mod contact;
pub mod address;
