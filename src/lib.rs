//! # Mock checkout
//!
//! Sandbox card form for a store's payment links. The form normalizes the
//! card fields as they are typed, reports a user-chosen outcome to the
//! store's order-processing endpoint and sends the user back to the store.
//! No real card authorization happens anywhere.

pub mod checkout;
pub mod config;
pub mod consts;
pub mod errors;
pub mod form;
pub mod logger;
pub mod models;
pub mod services;
