//! Sehri/Iftar schedules, daily prayer times and the holiday calendar for the
//! districts of Bangladesh, in Bengali and English.
//!
//! Times come from a fixed Dhaka reference table shifted by a per-district
//! minute offset; nothing here does astronomy.

pub mod calendar;
pub mod config;
pub mod db;
pub mod districts;
pub mod models;
pub mod prayer_times;
pub mod tracker;
pub mod utils;
