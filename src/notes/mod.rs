//! Release notes presentation
//!
//! Release notes arrive as markdown from a [`crate::version::source::ReleaseNotesSource`]
//! and are turned into terminal text here. The caller picks the [`render::RenderStyle`].

pub mod render;

pub use render::{RenderStyle, render};
