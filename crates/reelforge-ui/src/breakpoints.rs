//! Responsive breakpoint definitions for the Web UI.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short name emitted as the body `data-bp` attribute.
    pub name: &'static str,
    /// Inclusive minimum viewport width.
    pub min_width: u16,
    /// Inclusive maximum viewport width; open-ended when `None`.
    pub max_width: Option<u16>,
}

/// Phone portrait.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(639),
};
/// Phone landscape.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 640,
    max_width: Some(767),
};
/// Tablet.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1023),
};
/// Laptop.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: Some(1279),
};
/// Desktop.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1280,
    max_width: Some(1535),
};
/// Wide desktop.
pub const XXL: Breakpoint = Breakpoint {
    name: "2xl",
    min_width: 1536,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 6] = [XS, SM, MD, LG, XL, XXL];

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XXL)
}
