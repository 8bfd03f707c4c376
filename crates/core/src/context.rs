use deltapdf_style::{StyleOverrides, StyleTable};

use crate::numbering::ListCounters;

/// Mutable state for exactly one build: the style table and the list counters.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    pub styles: StyleTable,
    pub counters: ListCounters,
}

impl BuildContext {
    /// A fresh context with default styles, `overrides` merged on top, and zeroed counters.
    pub fn new(overrides: &StyleOverrides) -> Self {
        let mut ctx = Self::default();
        ctx.styles.configure(overrides);
        ctx
    }
}
