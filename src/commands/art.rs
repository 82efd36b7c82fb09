//! Block-letter banners printed above the content commands.
//!
//! Kept as line slices so renderers can measure and clip them without
//! re-splitting.

/// Banner printed above `cr -about`.
pub const ABOUT: &[&str] = &[
    " █████╗ ██████╗  ██████╗ ██╗   ██╗████████╗",
    "██╔══██╗██╔══██╗██╔═══██╗██║   ██║╚══██╔══╝",
    "███████║██████╔╝██║   ██║██║   ██║   ██║",
    "██╔══██║██╔══██╗██║   ██║██║   ██║   ██║",
    "██║  ██║██████╔╝╚██████╔╝╚██████╔╝   ██║",
    "╚═╝  ╚═╝╚═════╝  ╚═════╝  ╚═════╝    ╚═╝",
];

pub const SKILLS: &[&str] = &[
    "███████╗██╗  ██╗██╗██╗     ██╗     ███████╗",
    "██╔════╝██║ ██╔╝██║██║     ██║     ██╔════╝",
    "███████╗█████╔╝ ██║██║     ██║     ███████╗",
    "╚════██║██╔═██╗ ██║██║     ██║     ╚════██║",
    "███████║██║  ██╗██║███████╗███████╗███████║",
    "╚══════╝╚═╝  ╚═╝╚═╝╚══════╝╚══════╝╚══════╝",
];

pub const PROJECTS: &[&str] = &[
    "██████╗ ██████╗  ██████╗      ██╗███████╗ ██████╗████████╗███████╗",
    "██╔══██╗██╔══██╗██╔═══██╗     ██║██╔════╝██╔════╝╚══██╔══╝██╔════╝",
    "██████╔╝██████╔╝██║   ██║     ██║█████╗  ██║        ██║   ███████╗",
    "██╔═══╝ ██╔══██╗██║   ██║██   ██║██╔══╝  ██║        ██║   ╚════██║",
    "██║     ██║  ██║╚██████╔╝╚█████╔╝███████╗╚██████╗   ██║   ███████║",
    "╚═╝     ╚═╝  ╚═╝ ╚═════╝  ╚════╝ ╚══════╝ ╚═════╝   ╚═╝   ╚══════╝",
];

pub const CONTACT: &[&str] = &[
    " ██████╗ ██████╗ ███╗   ██╗████████╗ █████╗  ██████╗████████╗",
    "██╔════╝██╔═══██╗████╗  ██║╚══██╔══╝██╔══██╗██╔════╝╚══██╔══╝",
    "██║     ██║   ██║██╔██╗ ██║   ██║   ███████║██║        ██║",
    "██║     ██║   ██║██║╚██╗██║   ██║   ██╔══██║██║        ██║",
    "╚██████╗╚██████╔╝██║ ╚████║   ██║   ██║  ██║╚██████╗   ██║",
    " ╚═════╝ ╚═════╝ ╚═╝  ╚═══╝   ╚═╝   ╚═╝  ╚═╝ ╚═════╝   ╚═╝",
];

pub const CERTIFICATIONS: &[&str] = &[
    " ██████╗███████╗██████╗ ████████╗██╗███████╗██╗ ██████╗ ██████╗ ████████╗██╗ ██████╗ ███╗   ██╗███████╗",
    "██╔════╝██╔════╝██╔══██╗╚══██╔══╝██║██╔════╝██║██╔════╝██╔══██╗╚══██╔══╝██║██╔═══██╗████╗  ██║██╔════╝",
    "██║     █████╗  ██████╔╝   ██║   ██║█████╗  ██║██║     ██████╔╝   ██║   ██║██║   ██║██╔██╗ ██║███████╗",
    "██║     ██╔══╝  ██╔══██╗   ██║   ██║██╔══╝  ██║██║     ██╔══██╗   ██║   ██║██║   ██║██║╚██╗██║╚════██║",
    "╚██████╗███████╗██║  ██║   ██║   ██║██║     ██║╚██████╗██║  ██║   ██║   ██║╚██████╔╝██║ ╚████║███████║",
    " ╚═════╝╚══════╝╚═╝  ╚═╝   ╚═╝   ╚═╝╚═╝     ╚═╝ ╚═════╝╚═╝  ╚═╝   ╚═╝   ╚═╝ ╚═════╝ ╚═╝  ╚═══╝╚══════╝",
];

/// Two-line banner: "DFIR BY" over "CROM8O".
pub const CHALLENGES: &[&str] = &[
    "██████╗ ███████╗██╗██████╗     ██████╗ ██╗   ██╗",
    "██╔══██╗██╔════╝██║██╔══██╗    ██╔══██╗╚██╗ ██╔╝",
    "██║  ██║█████╗  ██║██████╔╝    ██████╔╝ ╚████╔╝",
    "██║  ██║██╔══╝  ██║██╔══██╗    ██╔══██╗  ╚██╔╝",
    "██████╔╝██║     ██║██║  ██║    ██████╔╝   ██║",
    "╚═════╝ ╚═╝     ╚═╝╚═╝  ╚═╝    ╚═════╝    ╚═╝",
    "██████╗██████╗  ██████╗ ███╗   ███╗ █████╗  ██████╗",
    "██╔════╝██╔══██╗██╔═══██╗████╗ ████║██╔══██╗██╔═══██╗",
    "██║     ██████╔╝██║   ██║██╔████╔██║╚█████╔╝██║   ██║",
    "██║     ██╔══██╗██║   ██║██║╚██╔╝██║██╔══██╗██║   ██║",
    "╚██████╗██║  ██║╚██████╔╝██║ ╚═╝ ██║╚█████╔╝╚██████╔╝",
    " ╚═════╝╚═╝  ╚═╝ ╚═════╝ ╚═╝     ╚═╝ ╚═════╝ ╚═════╝",
];

/// Joins a banner into a single block.
pub fn render(art: &[&str]) -> String {
    art.join("\n")
}
