// src/render/mod.rs
//! Document builders. Everything here is pure: days in, strings out.
//! Markup goes through `maud`, so inserted text is escaped unless it is
//! wrapped in `PreEscaped` (only the bundled CSS/JS and script JSON are).
pub mod index;
pub mod notes;
pub mod page;
pub mod site;
