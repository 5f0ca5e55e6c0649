//! Wire models and GraphQL operations shared by the Nuber Eats client crates.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod graphql;
pub mod models;
