//! Terminal front end over the price table and converter

pub mod convert;
pub mod prices;
pub mod setup;
pub mod ui;
