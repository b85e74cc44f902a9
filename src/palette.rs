//! Named color presets for nodes and group regions.
//!
//! Hosts typically expose these in a context menu; the library itself only
//! consumes [`default_group_color`] when constructing a new group.

/// One named preset: title-bar color, body color, and the matching group
/// region color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub title_color: &'static str,
    pub body_color: &'static str,
    pub group_color: &'static str,
}

/// Group color used when a name is unknown or the palette is bypassed.
pub const FALLBACK_GROUP_COLOR: &str = "#AAA";

pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry { name: "red", title_color: "#322", body_color: "#533", group_color: "#A88" },
    PaletteEntry { name: "brown", title_color: "#332922", body_color: "#593930", group_color: "#b06634" },
    PaletteEntry { name: "green", title_color: "#232", body_color: "#353", group_color: "#8A8" },
    PaletteEntry { name: "blue", title_color: "#223", body_color: "#335", group_color: "#88A" },
    PaletteEntry { name: "pale_blue", title_color: "#2a363b", body_color: "#3f5159", group_color: "#3f789e" },
    PaletteEntry { name: "cyan", title_color: "#233", body_color: "#355", group_color: "#8AA" },
    PaletteEntry { name: "purple", title_color: "#323", body_color: "#535", group_color: "#a1309b" },
    PaletteEntry { name: "yellow", title_color: "#432", body_color: "#653", group_color: "#b58b2a" },
    PaletteEntry { name: "black", title_color: "#222", body_color: "#000", group_color: "#444" },
];

/// Look up a preset by name.
pub fn lookup(name: &str) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.name == name)
}

/// Group color for a named preset, with the gray fallback for unknown
/// names.
pub fn group_color(name: &str) -> &'static str {
    lookup(name).map_or(FALLBACK_GROUP_COLOR, |entry| entry.group_color)
}

/// Color assigned to freshly created group regions: the pale-blue preset,
/// or gray if that entry were ever removed from the palette.
pub fn default_group_color() -> &'static str {
    group_color("pale_blue")
}
