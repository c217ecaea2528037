//! Thin clients for the third-party services the trip planner proxies:
//! Google Places text search (restaurants, sights) and Wikipedia
//! (article lookup + page summary).

mod client;
mod domain;
mod wiki;

pub use client::*;
pub use domain::*;
pub use wiki::*;
