//! Database access layer
//!
//! One module per table. Functions take `&PgPool` for single statements and
//! a generic executor where they also run inside a transaction.

pub mod compagnies;
pub mod employes;
pub mod evaluations;
pub mod niveaux;
pub mod questions;
pub mod reponses;
pub mod users;
