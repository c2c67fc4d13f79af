//! The fixed set of files generated from a source logo.

use crate::variant::Variant;
use std::fmt;

/// Background of the adaptive icon and the splash screens (`#1a1a1a`).
pub const DARK_BACKGROUND: [u8; 3] = [26, 26, 26];

/// Output folder below the assets directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    Icons,
    Logos,
    Splash,
}

impl Folder {
    pub const ALL: [Folder; 3] = [Folder::Logos, Folder::Icons, Folder::Splash];

    pub fn dir_name(self) -> &'static str {
        match self {
            Folder::Icons => "icons",
            Folder::Logos => "logos",
            Folder::Splash => "splash",
        }
    }
}

/// Which platform an output is meant for. Only used for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Mobile,
    Desktop,
    Web,
    Splash,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Group::Mobile => "mobile app icons",
            Group::Desktop => "desktop console icons",
            Group::Web => "web interface logos",
            Group::Splash => "splash screens",
        })
    }
}

/// Edge length of the square logo placed on a canvas, in percent of a canvas dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoScale {
    /// Percent of the shorter canvas edge.
    MinEdge(u32),
    /// Percent of the canvas width.
    Width(u32),
}

impl LogoScale {
    pub fn edge(self, width: u32, height: u32) -> u32 {
        match self {
            LogoScale::MinEdge(percent) => width.min(height) * percent / 100,
            LogoScale::Width(percent) => width * percent / 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// The variant stretched to the output size.
    Resize(Variant),
    /// The variant centered on an opaque solid canvas.
    Canvas {
        variant: Variant,
        background: [u8; 3],
        logo: LogoScale,
    },
    /// Multi-size ICO of the color variant. Sizes above 256px are dropped.
    Ico(&'static [u32]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSpec {
    pub group: Group,
    pub folder: Folder,
    pub file_name: &'static str,
    /// For ICO files, the largest packed entry.
    pub width: u32,
    pub height: u32,
    pub render: Render,
}

const fn resized(group: Group, folder: Folder, file_name: &'static str, size: u32) -> OutputSpec {
    OutputSpec {
        group,
        folder,
        file_name,
        width: size,
        height: size,
        render: Render::Resize(Variant::Color),
    }
}

const fn splash(file_name: &'static str, width: u32, height: u32, logo: LogoScale) -> OutputSpec {
    OutputSpec {
        group: Group::Splash,
        folder: Folder::Splash,
        file_name,
        width,
        height,
        render: Render::Canvas {
            variant: Variant::White,
            background: DARK_BACKGROUND,
            logo,
        },
    }
}

pub const DESKTOP_ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256, 512];
pub const FAVICON_SIZES: &[u32] = &[16, 32, 48];

/// Every generated file, in generation order.
pub const PLAN: &[OutputSpec] = &[
    OutputSpec {
        group: Group::Mobile,
        folder: Folder::Icons,
        file_name: "adaptive-icon.png",
        width: 1024,
        height: 1024,
        render: Render::Canvas {
            variant: Variant::Color,
            background: DARK_BACKGROUND,
            logo: LogoScale::Width(60),
        },
    },
    resized(Group::Mobile, Folder::Icons, "icon-36x36.png", 36),
    resized(Group::Mobile, Folder::Icons, "icon-48x48.png", 48),
    resized(Group::Mobile, Folder::Icons, "icon-72x72.png", 72),
    resized(Group::Mobile, Folder::Icons, "icon-96x96.png", 96),
    resized(Group::Mobile, Folder::Icons, "icon-144x144.png", 144),
    resized(Group::Mobile, Folder::Icons, "icon-192x192.png", 192),
    resized(Group::Mobile, Folder::Icons, "icon-512x512.png", 512),
    resized(Group::Desktop, Folder::Icons, "icon_16x16.png", 16),
    resized(Group::Desktop, Folder::Icons, "icon_32x32.png", 32),
    resized(Group::Desktop, Folder::Icons, "icon_48x48.png", 48),
    resized(Group::Desktop, Folder::Icons, "icon_64x64.png", 64),
    resized(Group::Desktop, Folder::Icons, "icon_128x128.png", 128),
    resized(Group::Desktop, Folder::Icons, "icon_256x256.png", 256),
    resized(Group::Desktop, Folder::Icons, "icon_512x512.png", 512),
    OutputSpec {
        group: Group::Desktop,
        folder: Folder::Icons,
        file_name: "icon.ico",
        width: 256,
        height: 256,
        render: Render::Ico(DESKTOP_ICO_SIZES),
    },
    // Stand-in for a macOS .icns
    resized(Group::Desktop, Folder::Icons, "icon.icns.png", 1024),
    OutputSpec {
        group: Group::Web,
        folder: Folder::Logos,
        file_name: "logo-header.png",
        width: 400,
        height: 100,
        render: Render::Resize(Variant::Color),
    },
    resized(Group::Web, Folder::Logos, "logo-login.png", 300),
    OutputSpec {
        group: Group::Web,
        folder: Folder::Logos,
        file_name: "favicon.ico",
        width: 48,
        height: 48,
        render: Render::Ico(FAVICON_SIZES),
    },
    // iPhone X/11/12
    splash("splash.png", 1242, 2688, LogoScale::MinEdge(20)),
    splash("splash-android.png", 1080, 1920, LogoScale::Width(15)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn file_names_are_unique_per_folder() {
        let mut seen = HashSet::new();
        for spec in PLAN {
            assert!(
                seen.insert((spec.folder, spec.file_name)),
                "duplicate output {}/{}",
                spec.folder.dir_name(),
                spec.file_name
            );
        }
        assert_eq!(seen.len(), 22);
    }

    #[test]
    fn groups_are_contiguous() {
        let mut groups: Vec<Group> = PLAN.iter().map(|spec| spec.group).collect();
        groups.dedup();
        assert_eq!(
            groups,
            [Group::Mobile, Group::Desktop, Group::Web, Group::Splash]
        );
    }

    #[test]
    fn logo_edges_truncate() {
        assert_eq!(LogoScale::Width(60).edge(1024, 1024), 614);
        assert_eq!(LogoScale::MinEdge(20).edge(1242, 2688), 248);
        assert_eq!(LogoScale::Width(15).edge(1080, 1920), 162);
    }

    #[test]
    fn ico_dimensions_are_the_largest_entry() {
        for spec in PLAN {
            if let Render::Ico(sizes) = spec.render {
                let largest = crate::IconSizes::new(sizes).packed().max();
                assert_eq!(largest, Some(spec.width));
                assert_eq!(spec.width, spec.height);
            }
        }
    }
}
