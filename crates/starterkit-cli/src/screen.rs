//! Text renderings of each page of the site.

pub mod components;
pub mod docs;
pub mod theme;
