pub mod io;
pub mod models;
pub mod rendering;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use models::{article::*, catalog::*};
pub use rendering::{ContentBlock, ParagraphBreak, RenderOptions, render, render_with};
