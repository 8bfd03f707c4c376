pub mod font;
pub mod list;
pub mod stylesheet;

pub use font::bold_variant;
pub use list::{DEPTH_ALPHABETS, IndicatorAlphabet, LIST_DEPTHS};
pub use stylesheet::{
    Indent, StyleEntry, StyleName, StyleOverride, StyleOverrides, StyleTable, UnknownStyleName,
};
