//! Symbolic names of the fonts and colors every new document starts with.

/// Font codes registered in the default font table.
pub mod font {
    pub const TIMES_NEW_ROMAN: &str = "times_new_roman";
    pub const SYMBOL: &str = "symbol";
    pub const ARIAL: &str = "arial";
    pub const COMIC_SANS_MS: &str = "comic_sans_ms";
    pub const COURIER_NEW: &str = "courier_new";
}

/// Color names registered in the default color table.
pub mod color {
    pub const BLACK: &str = "black";
    pub const BLUE: &str = "blue";
    pub const AQUA: &str = "aqua";
    pub const LIME: &str = "lime";
    pub const GREEN: &str = "green";
    pub const MAGENTA: &str = "magenta";
    pub const RED: &str = "red";
    pub const YELLOW: &str = "yellow";
    pub const WHITE: &str = "white";
    pub const NAVY: &str = "navy";
    pub const TEAL: &str = "teal";
    pub const PURPLE: &str = "purple";
    pub const MAROON: &str = "maroon";
    pub const OLIVE: &str = "olive";
    pub const GRAY: &str = "gray";
    pub const SILVER: &str = "silver";
}
