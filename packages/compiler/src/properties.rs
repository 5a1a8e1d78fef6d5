//! Property schema - naming, grammar classes and shorthand relationships
//!
//! This is also the lookup surface for the linter, which validates keys
//! without emitting anything.

use std::collections::BTreeSet;

/// Legacy authoring aliases and the property they stand for
const ALIASES: &[(&str, &str)] = &[
    ("marginStart", "margin-inline-start"),
    ("marginEnd", "margin-inline-end"),
    ("paddingStart", "padding-inline-start"),
    ("paddingEnd", "padding-inline-end"),
    ("start", "inset-inline-start"),
    ("end", "inset-inline-end"),
];

/// Properties whose numeric values take no unit
const UNITLESS: &[&str] = &[
    "animation-iteration-count",
    "aspect-ratio",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "column-count",
    "columns",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-shrink",
    "flood-opacity",
    "font-weight",
    "grid-area",
    "grid-column",
    "grid-column-end",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-start",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
];

/// Properties whose numeric values are milliseconds
const TIME: &[&str] = &[
    "animation-delay",
    "animation-duration",
    "transition-delay",
    "transition-duration",
];

/// Properties where `0px` and `0` are not interchangeable
const KEEP_ZERO_UNITS: &[&str] = &["flex", "flex-basis"];

/// Properties that only accept numbers, plus the keywords each allows
const NUMERIC_ONLY: &[(&str, &[&str])] = &[
    ("animation-iteration-count", &["infinite"]),
    ("flex-grow", &[]),
    ("flex-shrink", &[]),
    ("font-weight", &["normal", "bold", "bolder", "lighter"]),
    ("opacity", &[]),
    ("order", &[]),
    ("z-index", &["auto"]),
];

/// Keywords every property accepts
pub const GLOBAL_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert", "revert-layer"];

/// Direct longhands of each shorthand
const SHORTHANDS: &[(&str, &[&str])] = &[
    ("animation", &[
        "animation-name",
        "animation-duration",
        "animation-timing-function",
        "animation-delay",
        "animation-iteration-count",
        "animation-direction",
        "animation-fill-mode",
        "animation-play-state",
    ]),
    ("background", &[
        "background-attachment",
        "background-clip",
        "background-color",
        "background-image",
        "background-origin",
        "background-position",
        "background-repeat",
        "background-size",
    ]),
    ("background-position", &["background-position-x", "background-position-y"]),
    ("border", &[
        "border-width",
        "border-style",
        "border-color",
        "border-top",
        "border-right",
        "border-bottom",
        "border-left",
        "border-block",
        "border-inline",
        "border-image",
    ]),
    ("border-block", &[
        "border-block-width",
        "border-block-style",
        "border-block-color",
        "border-block-start",
        "border-block-end",
    ]),
    ("border-block-start", &[
        "border-block-start-width",
        "border-block-start-style",
        "border-block-start-color",
    ]),
    ("border-block-end", &[
        "border-block-end-width",
        "border-block-end-style",
        "border-block-end-color",
    ]),
    ("border-block-width", &["border-block-start-width", "border-block-end-width"]),
    ("border-block-style", &["border-block-start-style", "border-block-end-style"]),
    ("border-block-color", &["border-block-start-color", "border-block-end-color"]),
    ("border-inline", &[
        "border-inline-width",
        "border-inline-style",
        "border-inline-color",
        "border-inline-start",
        "border-inline-end",
    ]),
    ("border-inline-start", &[
        "border-inline-start-width",
        "border-inline-start-style",
        "border-inline-start-color",
    ]),
    ("border-inline-end", &[
        "border-inline-end-width",
        "border-inline-end-style",
        "border-inline-end-color",
    ]),
    ("border-inline-width", &["border-inline-start-width", "border-inline-end-width"]),
    ("border-inline-style", &["border-inline-start-style", "border-inline-end-style"]),
    ("border-inline-color", &["border-inline-start-color", "border-inline-end-color"]),
    ("border-image", &[
        "border-image-source",
        "border-image-slice",
        "border-image-width",
        "border-image-outset",
        "border-image-repeat",
    ]),
    ("border-top", &["border-top-width", "border-top-style", "border-top-color"]),
    ("border-right", &["border-right-width", "border-right-style", "border-right-color"]),
    ("border-bottom", &["border-bottom-width", "border-bottom-style", "border-bottom-color"]),
    ("border-left", &["border-left-width", "border-left-style", "border-left-color"]),
    ("border-width", &[
        "border-top-width",
        "border-right-width",
        "border-bottom-width",
        "border-left-width",
    ]),
    ("border-style", &[
        "border-top-style",
        "border-right-style",
        "border-bottom-style",
        "border-left-style",
    ]),
    ("border-color", &[
        "border-top-color",
        "border-right-color",
        "border-bottom-color",
        "border-left-color",
    ]),
    ("border-radius", &[
        "border-top-left-radius",
        "border-top-right-radius",
        "border-bottom-right-radius",
        "border-bottom-left-radius",
    ]),
    ("column-rule", &["column-rule-width", "column-rule-style", "column-rule-color"]),
    ("columns", &["column-width", "column-count"]),
    ("container", &["container-name", "container-type"]),
    ("flex", &["flex-grow", "flex-shrink", "flex-basis"]),
    ("flex-flow", &["flex-direction", "flex-wrap"]),
    ("font", &[
        "font-family",
        "font-size",
        "font-style",
        "font-variant",
        "font-weight",
        "line-height",
    ]),
    ("gap", &["row-gap", "column-gap"]),
    ("grid", &["grid-template", "grid-auto-rows", "grid-auto-columns", "grid-auto-flow"]),
    ("grid-area", &["grid-row", "grid-column"]),
    ("grid-column", &["grid-column-start", "grid-column-end"]),
    ("grid-row", &["grid-row-start", "grid-row-end"]),
    ("grid-template", &["grid-template-rows", "grid-template-columns", "grid-template-areas"]),
    ("inset", &["top", "right", "bottom", "left", "inset-block", "inset-inline"]),
    ("inset-block", &["inset-block-start", "inset-block-end"]),
    ("inset-inline", &["inset-inline-start", "inset-inline-end"]),
    ("list-style", &["list-style-type", "list-style-position", "list-style-image"]),
    ("margin", &[
        "margin-top",
        "margin-right",
        "margin-bottom",
        "margin-left",
        "margin-block",
        "margin-inline",
    ]),
    ("margin-block", &["margin-block-start", "margin-block-end"]),
    ("margin-inline", &["margin-inline-start", "margin-inline-end"]),
    ("mask", &[
        "mask-image",
        "mask-mode",
        "mask-repeat",
        "mask-position",
        "mask-clip",
        "mask-origin",
        "mask-size",
        "mask-composite",
    ]),
    ("outline", &["outline-color", "outline-style", "outline-width"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    ("overscroll-behavior", &["overscroll-behavior-x", "overscroll-behavior-y"]),
    ("padding", &[
        "padding-top",
        "padding-right",
        "padding-bottom",
        "padding-left",
        "padding-block",
        "padding-inline",
    ]),
    ("padding-block", &["padding-block-start", "padding-block-end"]),
    ("padding-inline", &["padding-inline-start", "padding-inline-end"]),
    ("place-content", &["align-content", "justify-content"]),
    ("place-items", &["align-items", "justify-items"]),
    ("place-self", &["align-self", "justify-self"]),
    ("scroll-margin", &[
        "scroll-margin-top",
        "scroll-margin-right",
        "scroll-margin-bottom",
        "scroll-margin-left",
    ]),
    ("scroll-padding", &[
        "scroll-padding-top",
        "scroll-padding-right",
        "scroll-padding-bottom",
        "scroll-padding-left",
    ]),
    ("text-decoration", &[
        "text-decoration-line",
        "text-decoration-color",
        "text-decoration-style",
        "text-decoration-thickness",
    ]),
    ("transition", &[
        "transition-property",
        "transition-duration",
        "transition-timing-function",
        "transition-delay",
    ]),
];

/// Logical longhands and the physical properties they can land on
const LOGICAL_TO_PHYSICAL: &[(&str, &[&str])] = &[
    ("margin-inline-start", &["margin-left", "margin-right"]),
    ("margin-inline-end", &["margin-left", "margin-right"]),
    ("margin-block-start", &["margin-top"]),
    ("margin-block-end", &["margin-bottom"]),
    ("padding-inline-start", &["padding-left", "padding-right"]),
    ("padding-inline-end", &["padding-left", "padding-right"]),
    ("padding-block-start", &["padding-top"]),
    ("padding-block-end", &["padding-bottom"]),
    ("inset-inline-start", &["left", "right"]),
    ("inset-inline-end", &["left", "right"]),
    ("inset-block-start", &["top"]),
    ("inset-block-end", &["bottom"]),
];

/// Deepest shorthand nesting in the table above, plus headroom
pub const MAX_SHORTHAND_DEPTH: u32 = 4;

const KNOWN_PROPERTIES: &[&str] = &[
    "accent-color", "align-content", "align-items", "align-self", "all", "animation",
    "animation-delay", "animation-direction", "animation-duration", "animation-fill-mode",
    "animation-iteration-count", "animation-name", "animation-play-state",
    "animation-timing-function", "appearance", "aspect-ratio", "backdrop-filter",
    "backface-visibility", "background", "background-attachment", "background-blend-mode",
    "background-clip", "background-color", "background-image", "background-origin",
    "background-position", "background-position-x", "background-position-y",
    "background-repeat", "background-size", "block-size", "border", "border-block",
    "border-block-color", "border-block-end", "border-block-start", "border-block-style",
    "border-block-width", "border-bottom", "border-bottom-color", "border-bottom-left-radius",
    "border-bottom-right-radius", "border-bottom-style", "border-bottom-width",
    "border-collapse", "border-color", "border-end-end-radius", "border-end-start-radius",
    "border-image", "border-image-outset", "border-image-repeat", "border-image-slice",
    "border-image-source", "border-image-width", "border-inline", "border-inline-color",
    "border-inline-end", "border-inline-start", "border-inline-style", "border-inline-width",
    "border-left", "border-left-color", "border-left-style", "border-left-width",
    "border-radius", "border-right", "border-right-color", "border-right-style",
    "border-right-width", "border-spacing", "border-start-end-radius",
    "border-start-start-radius", "border-style", "border-top", "border-top-color",
    "border-top-left-radius", "border-top-right-radius", "border-top-style",
    "border-top-width", "border-width", "bottom", "box-shadow", "box-sizing", "break-after",
    "break-before", "break-inside", "caption-side", "caret-color", "clear", "clip",
    "clip-path", "color", "color-scheme", "column-count", "column-fill", "column-gap",
    "column-rule", "column-span", "column-width", "columns", "contain", "container",
    "container-name", "container-type", "content", "content-visibility", "counter-increment",
    "counter-reset", "counter-set", "cursor", "direction", "display", "empty-cells", "fill",
    "fill-opacity", "filter", "flex", "flex-basis", "flex-direction", "flex-flow", "flex-grow",
    "flex-shrink", "flex-wrap", "float", "flood-opacity", "font", "font-family",
    "font-feature-settings", "font-kerning", "font-size", "font-size-adjust", "font-stretch",
    "font-style", "font-variant", "font-variant-numeric", "font-variation-settings",
    "font-weight", "gap", "grid", "grid-area", "grid-auto-columns", "grid-auto-flow",
    "grid-auto-rows", "grid-column", "grid-column-end", "grid-column-start", "grid-row",
    "grid-row-end", "grid-row-start", "grid-template", "grid-template-areas",
    "grid-template-columns", "grid-template-rows", "height", "hyphens", "image-rendering",
    "inline-size", "inset", "inset-block", "inset-block-end", "inset-block-start",
    "inset-inline", "inset-inline-end", "inset-inline-start", "isolation", "justify-content",
    "justify-items", "justify-self", "left", "letter-spacing", "line-clamp", "line-height",
    "list-style", "list-style-image", "list-style-position", "list-style-type", "margin",
    "margin-block", "margin-block-end", "margin-block-start", "margin-bottom",
    "margin-inline", "margin-inline-end", "margin-inline-start", "margin-left",
    "margin-right", "margin-top", "mask", "mask-image", "max-block-size", "max-height",
    "max-inline-size", "max-width", "min-block-size", "min-height", "min-inline-size",
    "min-width", "mix-blend-mode", "object-fit", "object-position", "opacity", "order",
    "orphans", "outline", "outline-color", "outline-offset", "outline-style", "outline-width",
    "overflow", "overflow-anchor", "overflow-wrap", "overflow-x", "overflow-y",
    "overscroll-behavior", "overscroll-behavior-x", "overscroll-behavior-y", "padding",
    "padding-block", "padding-block-end", "padding-block-start", "padding-bottom",
    "padding-inline", "padding-inline-end", "padding-inline-start", "padding-left",
    "padding-right", "padding-top", "perspective", "perspective-origin", "place-content",
    "place-items", "place-self", "pointer-events", "position", "quotes", "resize", "right",
    "rotate", "row-gap", "scale", "scroll-behavior", "scroll-margin", "scroll-padding",
    "scroll-snap-align", "scroll-snap-type", "scrollbar-color", "scrollbar-gutter",
    "scrollbar-width", "shape-outside", "speak", "stop-color", "stop-opacity", "stroke",
    "stroke-dasharray", "stroke-dashoffset", "stroke-linecap", "stroke-linejoin",
    "stroke-miterlimit", "stroke-opacity", "stroke-width", "tab-size", "table-layout",
    "text-align", "text-align-last", "text-decoration", "text-decoration-color",
    "text-decoration-line", "text-decoration-style", "text-decoration-thickness",
    "text-indent", "text-overflow", "text-rendering", "text-shadow", "text-transform",
    "text-underline-offset", "text-underline-position", "top", "touch-action", "transform",
    "transform-origin", "transform-style", "transition", "transition-delay",
    "transition-duration", "transition-property", "transition-timing-function", "translate",
    "unicode-bidi", "user-select", "vertical-align", "visibility", "white-space", "widows",
    "width", "will-change", "word-break", "word-spacing", "word-wrap", "writing-mode",
    "z-index", "zoom",
    // Longhands of the logical border, column-rule, mask and scroll shorthands
    "border-block-end-color", "border-block-end-style", "border-block-end-width",
    "border-block-start-color", "border-block-start-style", "border-block-start-width",
    "border-inline-end-color", "border-inline-end-style", "border-inline-end-width",
    "border-inline-start-color", "border-inline-start-style", "border-inline-start-width",
    "column-rule-color", "column-rule-style", "column-rule-width", "mask-clip",
    "mask-composite", "mask-mode", "mask-origin", "mask-position", "mask-repeat", "mask-size",
    "scroll-margin-bottom", "scroll-margin-left", "scroll-margin-right", "scroll-margin-top",
    "scroll-padding-bottom", "scroll-padding-left", "scroll-padding-right",
    "scroll-padding-top",
];

const PSEUDO_CLASSES: &[&str] = &[
    ":active", ":autofill", ":checked", ":default", ":disabled", ":empty", ":enabled",
    ":first-child", ":first-of-type", ":focus", ":focus-visible", ":focus-within",
    ":hover", ":in-range", ":indeterminate", ":invalid", ":last-child", ":last-of-type",
    ":link", ":only-child", ":only-of-type", ":optional", ":out-of-range",
    ":placeholder-shown", ":read-only", ":read-write", ":required", ":target", ":valid",
    ":visited",
];

const PSEUDO_ELEMENTS: &[&str] = &[
    "::after", "::backdrop", "::before", "::cue", "::file-selector-button",
    "::first-letter", "::first-line", "::marker", "::placeholder", "::selection",
    "::-moz-focus-inner", "::-webkit-inner-spin-button", "::-webkit-outer-spin-button",
    "::-webkit-scrollbar", "::-webkit-scrollbar-thumb", "::-webkit-scrollbar-track",
    "::-webkit-search-cancel-button", "::-webkit-search-decoration",
    "::-webkit-search-results-button", "::-webkit-search-results-decoration",
];

/// Cascade order among user-action pseudo-classes (LVHFA)
const PSEUDO_CLASS_ORDER: &[&str] = &[
    ":link",
    ":visited",
    ":hover",
    ":focus-within",
    ":focus",
    ":focus-visible",
    ":active",
];

/// Resolve an authored key (`marginTop`, `margin-top`, `WebkitAppearance`,
/// `marginStart`) to its CSS property name
pub fn css_property_name(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }
    if let Some((_, property)) = ALIASES.iter().find(|(alias, _)| *alias == key) {
        return property.to_string();
    }
    if key.contains('-') {
        return key.to_ascii_lowercase();
    }

    let mut name = String::with_capacity(key.len() + 4);
    if key.starts_with("ms") && key[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        name.push('-');
    }
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Canonical compiled-object key for a CSS property (`margin-top` →
/// `marginTop`, `-webkit-appearance` → `WebkitAppearance`)
pub fn style_key(css_property: &str) -> String {
    if css_property.starts_with("--") {
        return css_property.to_string();
    }

    let vendor_ms = css_property.strip_prefix("-ms-").map(|rest| format!("ms-{}", rest));
    let source = vendor_ms.as_deref().unwrap_or(css_property);

    let mut key = String::with_capacity(source.len());
    let mut upper_next = false;
    for ch in source.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            key.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            key.push(ch);
        }
    }
    key
}

pub fn is_custom_property(property: &str) -> bool {
    property.starts_with("--")
}

pub fn is_unitless(property: &str) -> bool {
    is_custom_property(property) || UNITLESS.contains(&property)
}

pub fn is_time_property(property: &str) -> bool {
    TIME.contains(&property)
}

pub fn keeps_zero_units(property: &str) -> bool {
    is_custom_property(property) || KEEP_ZERO_UNITS.contains(&property)
}

/// Keywords accepted by a numbers-only property, `None` for other properties
pub fn numeric_keywords(property: &str) -> Option<&'static [&'static str]> {
    NUMERIC_ONLY
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, keywords)| *keywords)
}

pub fn is_known_property(property: &str) -> bool {
    is_custom_property(property)
        || KNOWN_PROPERTIES.contains(&property)
        || property.starts_with("-webkit-")
        || property.starts_with("-moz-")
        || property.starts_with("-ms-")
}

pub fn is_valid_pseudo(pseudo: &str) -> bool {
    if PSEUDO_CLASSES.contains(&pseudo) || PSEUDO_ELEMENTS.contains(&pseudo) {
        return true;
    }
    // Functional pseudo-classes with an argument list
    [":nth-child(", ":nth-last-child(", ":nth-of-type(", ":nth-last-of-type(", ":not(", ":is(", ":where(", ":has("]
        .iter()
        .any(|prefix| pseudo.starts_with(*prefix) && pseudo.ends_with(')'))
}

/// Rank of a pseudo selector within the pseudo bucket; later ranks win
pub fn pseudo_rank(pseudo: &str) -> u32 {
    PSEUDO_CLASS_ORDER
        .iter()
        .position(|candidate| *candidate == pseudo)
        .map(|index| index as u32 + 1)
        .unwrap_or(0)
}

pub fn longhands(property: &str) -> &'static [&'static str] {
    SHORTHANDS
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, children)| *children)
        .unwrap_or(&[])
}

/// Every property with longhands
pub fn shorthands() -> impl Iterator<Item = &'static str> {
    SHORTHANDS.iter().map(|(name, _)| *name)
}

pub fn is_shorthand(property: &str) -> bool {
    !longhands(property).is_empty()
}

/// Number of shorthand levels below a property; longhands are 0
pub fn shorthand_depth(property: &str) -> u32 {
    longhands(property)
        .iter()
        .map(|child| shorthand_depth(child) + 1)
        .max()
        .unwrap_or(0)
}

fn physical_counterparts(property: &str) -> &'static [&'static str] {
    LOGICAL_TO_PHYSICAL
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, physical)| *physical)
        .unwrap_or(&[])
}

/// Physical properties that some logical property can land on
pub fn has_logical_counterpart(property: &str) -> bool {
    LOGICAL_TO_PHYSICAL
        .iter()
        .any(|(_, physical)| physical.contains(&property))
}

/// Every property that setting `property` overrides: transitive longhands
/// and the physical sides of logical properties, sorted
pub fn resets(property: &str) -> Vec<&'static str> {
    let mut found = BTreeSet::new();
    collect_resets(property, &mut found);
    found.into_iter().collect()
}

fn collect_resets(property: &str, found: &mut BTreeSet<&'static str>) {
    for physical in physical_counterparts(property) {
        found.insert(*physical);
    }
    for child in longhands(property) {
        if found.insert(*child) {
            collect_resets(child, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("marginTop"), "margin-top");
        assert_eq!(css_property_name("margin-top"), "margin-top");
        assert_eq!(css_property_name("color"), "color");
        assert_eq!(css_property_name("WebkitAppearance"), "-webkit-appearance");
        assert_eq!(css_property_name("MozOsxFontSmoothing"), "-moz-osx-font-smoothing");
        assert_eq!(css_property_name("msTransform"), "-ms-transform");
        assert_eq!(css_property_name("marginStart"), "margin-inline-start");
        assert_eq!(css_property_name("--brand-color"), "--brand-color");
    }

    #[test]
    fn test_style_key_inverts_css_property_name() {
        for key in ["marginTop", "color", "WebkitAppearance", "msTransform", "backgroundColor", "--brand-color"] {
            assert_eq!(style_key(&css_property_name(key)), key);
        }
        assert_eq!(style_key("margin-inline-start"), "marginInlineStart");
    }

    #[test]
    fn test_shorthand_depth() {
        assert_eq!(shorthand_depth("margin-top"), 0);
        assert_eq!(shorthand_depth("border-width"), 1);
        assert_eq!(shorthand_depth("border"), 3);
        assert_eq!(shorthand_depth("margin"), 2);
        for (name, _) in SHORTHANDS {
            assert!(shorthand_depth(name) <= MAX_SHORTHAND_DEPTH, "{} is too deep", name);
        }
    }

    #[test]
    fn test_resets_include_transitive_longhands() {
        let margin = resets("margin");
        for longhand in ["margin-top", "margin-left", "margin-inline", "margin-inline-start", "margin-block-end"] {
            assert!(margin.contains(&longhand), "missing {}", longhand);
        }
        assert!(!margin.contains(&"margin"));

        let border = resets("border");
        assert!(border.contains(&"border-top-width"));
        assert!(border.contains(&"border-left-color"));
    }

    #[test]
    fn test_logical_properties_reset_physical_sides() {
        assert_eq!(resets("margin-inline-start"), vec!["margin-left", "margin-right"]);
        assert!(resets("margin-left").is_empty());
        assert!(has_logical_counterpart("margin-left"));
        assert!(!has_logical_counterpart("margin-inline-start"));
    }

    #[test]
    fn test_background_resets_match_longhands() {
        assert_eq!(
            resets("background"),
            vec![
                "background-attachment",
                "background-clip",
                "background-color",
                "background-image",
                "background-origin",
                "background-position",
                "background-position-x",
                "background-position-y",
                "background-repeat",
                "background-size",
            ]
        );
    }

    #[test]
    fn test_shorthand_table_only_names_known_properties() {
        for (name, children) in SHORTHANDS {
            assert!(is_known_property(name), "{} is not a known property", name);
            for child in *children {
                assert!(is_known_property(child), "{} (from {}) is not a known property", child, name);
            }
        }
    }

    #[test]
    fn test_side_and_axis_properties_are_longhands() {
        // `grid-row-start`, `overscroll-behavior-x`, `border-block-end` and
        // friends must be reset by the property their name extends
        const SUFFIXES: &[&str] = &[
            "-x", "-y", "-start", "-end", "-top", "-right", "-bottom", "-left", "-block", "-inline",
        ];
        for property in KNOWN_PROPERTIES {
            let overridden = resets(property);
            for suffix in SUFFIXES {
                let longhand = format!("{}{}", property, suffix);
                if KNOWN_PROPERTIES.contains(&longhand.as_str()) {
                    assert!(
                        overridden.contains(&longhand.as_str()),
                        "{} does not reset {}",
                        property,
                        longhand
                    );
                }
            }
        }
    }

    #[test]
    fn test_pseudo_whitelist() {
        assert!(is_valid_pseudo(":hover"));
        assert!(is_valid_pseudo("::-webkit-search-decoration"));
        assert!(is_valid_pseudo(":nth-child(2n+1)"));
        assert!(!is_valid_pseudo(":hovered"));
        assert!(!is_valid_pseudo("::befor"));
    }

    #[test]
    fn test_pseudo_rank_follows_lvhfa() {
        assert!(pseudo_rank(":visited") > pseudo_rank(":link"));
        assert!(pseudo_rank(":hover") > pseudo_rank(":visited"));
        assert!(pseudo_rank(":focus") > pseudo_rank(":hover"));
        assert!(pseudo_rank(":active") > pseudo_rank(":focus-visible"));
        assert_eq!(pseudo_rank("::before"), 0);
    }

    #[test]
    fn test_known_properties() {
        assert!(is_known_property("margin-top"));
        assert!(is_known_property("--anything"));
        assert!(is_known_property("-webkit-font-smoothing"));
        assert!(!is_known_property("colour"));
    }
}
