//! Application view routing

/// Application view/route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Builder, // Two-step workflow builder
    Saved,   // Saved workflows list
}

/// Focused column inside the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderPane {
    Apps,
    Options,
}
