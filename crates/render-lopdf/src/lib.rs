//! A PDF drawing backend using lopdf.
//!
//! Instructions are laid out immediately against a Letter page with one-inch
//! margins: the backend tracks a text cursor, wraps words at the right margin,
//! breaks pages, and keeps everything in memory until `finish` writes the file.

mod backend;
mod fonts;
mod images;
mod text;

pub use backend::{LopdfBackend, PageGeometry};
pub use fonts::{FontRegistry, STANDARD_FONTS};
pub use text::{to_win_ansi, wrap_lines};
