//! Static vendor prefix tables.
//!
//! Property keys are kebab-case names without a vendor prefix.

use phf::phf_map;

/// Vendor spellings, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vendor {
    Webkit,
    Moz,
    Ms,
}

impl Vendor {
    /// Prefix used in kebab-case names, e.g. `-webkit-`.
    pub fn kebab(self) -> &'static str {
        match self {
            Vendor::Webkit => "-webkit-",
            Vendor::Moz => "-moz-",
            Vendor::Ms => "-ms-",
        }
    }

    /// Prefix used in camel-case names, e.g. `Webkit`.
    pub fn camel(self) -> &'static str {
        match self {
            Vendor::Webkit => "Webkit",
            Vendor::Moz => "Moz",
            Vendor::Ms => "ms",
        }
    }
}

use Vendor::{Moz, Ms, Webkit};

const WEBKIT: &[Vendor] = &[Webkit];
const WEBKIT_MOZ: &[Vendor] = &[Webkit, Moz];
const WEBKIT_MS: &[Vendor] = &[Webkit, Ms];
const ALL: &[Vendor] = &[Webkit, Moz, Ms];

/// Properties that need prefixed copies, and the vendors to copy for.
pub static PROPERTY_PREFIXES: phf::Map<&'static str, &'static [Vendor]> = phf_map! {
    "transform" => ALL,
    "transform-origin" => ALL,
    "transform-origin-x" => ALL,
    "transform-origin-y" => ALL,
    "transform-style" => WEBKIT_MOZ,
    "backface-visibility" => WEBKIT_MOZ,
    "perspective" => WEBKIT_MOZ,
    "perspective-origin" => WEBKIT_MOZ,
    "user-select" => ALL,
    "hyphens" => ALL,
    "text-size-adjust" => ALL,
    "appearance" => WEBKIT_MOZ,
    "box-sizing" => WEBKIT_MOZ,
    "animation" => WEBKIT_MOZ,
    "animation-name" => WEBKIT_MOZ,
    "animation-duration" => WEBKIT_MOZ,
    "animation-delay" => WEBKIT_MOZ,
    "animation-direction" => WEBKIT_MOZ,
    "animation-fill-mode" => WEBKIT_MOZ,
    "animation-iteration-count" => WEBKIT_MOZ,
    "animation-play-state" => WEBKIT_MOZ,
    "animation-timing-function" => WEBKIT_MOZ,
    "transition" => WEBKIT_MOZ,
    "transition-delay" => WEBKIT_MOZ,
    "transition-duration" => WEBKIT_MOZ,
    "transition-property" => WEBKIT_MOZ,
    "transition-timing-function" => WEBKIT_MOZ,
    "columns" => WEBKIT_MOZ,
    "column-count" => WEBKIT_MOZ,
    "column-gap" => WEBKIT_MOZ,
    "column-rule" => WEBKIT_MOZ,
    "column-width" => WEBKIT_MOZ,
    "flex" => WEBKIT_MS,
    "flex-basis" => WEBKIT_MS,
    "flex-direction" => WEBKIT_MS,
    "flex-flow" => WEBKIT_MS,
    "flex-grow" => WEBKIT_MS,
    "flex-shrink" => WEBKIT_MS,
    "flex-wrap" => WEBKIT_MS,
    "align-content" => WEBKIT,
    "align-items" => WEBKIT,
    "align-self" => WEBKIT,
    "justify-content" => WEBKIT,
    "order" => WEBKIT,
    "backdrop-filter" => WEBKIT,
    "filter" => WEBKIT,
    "clip-path" => WEBKIT,
    "mask" => WEBKIT,
    "mask-image" => WEBKIT,
    "mask-size" => WEBKIT,
    "mask-position" => WEBKIT,
    "mask-repeat" => WEBKIT,
    "box-decoration-break" => WEBKIT,
    "font-kerning" => WEBKIT,
    "text-emphasis" => WEBKIT,
    "text-emphasis-color" => WEBKIT,
    "text-emphasis-position" => WEBKIT,
    "text-emphasis-style" => WEBKIT,
    "scroll-snap-type" => WEBKIT_MS,
    "grid-template-columns" => &[Ms],
    "grid-template-rows" => &[Ms],
    "break-after" => &[Ms],
    "break-before" => &[Ms],
    "break-inside" => &[Ms],
    "region-fragment" => WEBKIT_MS,
    "wrap-flow" => &[Ms],
    "wrap-through" => &[Ms],
    "wrap-margin" => &[Ms],
};

/// Keyword values with legacy spellings, listed oldest first and ending in
/// the standard keyword.
pub static DISPLAY_VALUES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "flex" => &["-webkit-box", "-moz-box", "-ms-flexbox", "-webkit-flex", "flex"],
    "inline-flex" => &[
        "-webkit-inline-box",
        "-moz-inline-box",
        "-ms-inline-flexbox",
        "-webkit-inline-flex",
        "inline-flex",
    ],
};

pub static POSITION_VALUES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "sticky" => &["-webkit-sticky", "sticky"],
};

pub static CURSOR_VALUES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "grab" => &["-webkit-grab", "-moz-grab", "grab"],
    "grabbing" => &["-webkit-grabbing", "-moz-grabbing", "grabbing"],
    "zoom-in" => &["-webkit-zoom-in", "-moz-zoom-in", "zoom-in"],
    "zoom-out" => &["-webkit-zoom-out", "-moz-zoom-out", "zoom-out"],
};

pub static SIZING_VALUES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "min-content" => &["-webkit-min-content", "-moz-min-content", "min-content"],
    "max-content" => &["-webkit-max-content", "-moz-max-content", "max-content"],
    "fit-content" => &["-webkit-fit-content", "-moz-fit-content", "fit-content"],
    "fill-available" => &["-webkit-fill-available", "-moz-available", "fill-available"],
};

/// Properties whose values take [`SIZING_VALUES`].
pub const SIZING_PROPERTIES: &[&str] = &[
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "flex-basis",
    "column-width",
];

/// Properties whose values may hold gradient functions.
pub const GRADIENT_PROPERTIES: &[&str] = &[
    "background",
    "background-image",
    "border-image",
    "list-style-image",
    "mask-image",
];

pub const GRADIENT_FUNCTIONS: &[&str] = &[
    "linear-gradient(",
    "radial-gradient(",
    "repeating-linear-gradient(",
    "repeating-radial-gradient(",
];
