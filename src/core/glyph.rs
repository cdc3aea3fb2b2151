//! Vector glyphs used across the page.
//!
//! Each glyph is a list of stroke paths on a 24x24 grid, drawn with
//! `currentColor` so text color classes apply.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    PlusSquare,
    Puzzle,
    Zap,
    Users,
    Book,
    ChevronDown,
    Menu,
    Close,
    Mail,
    Facebook,
}

impl Glyph {
    pub const ALL: [Glyph; 10] = [
        Glyph::PlusSquare,
        Glyph::Puzzle,
        Glyph::Zap,
        Glyph::Users,
        Glyph::Book,
        Glyph::ChevronDown,
        Glyph::Menu,
        Glyph::Close,
        Glyph::Mail,
        Glyph::Facebook,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Glyph::PlusSquare => "plus-square",
            Glyph::Puzzle => "puzzle",
            Glyph::Zap => "zap",
            Glyph::Users => "users",
            Glyph::Book => "book",
            Glyph::ChevronDown => "chevron-down",
            Glyph::Menu => "menu",
            Glyph::Close => "x",
            Glyph::Mail => "mail",
            Glyph::Facebook => "facebook",
        }
    }

    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::PlusSquare => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M8 12h8",
                "M12 8v8",
            ],
            Glyph::Puzzle => &[
                "M19.44 7.85c-.05.32.06.65.29.88l1.57 1.57c.47.47.7 1.09.7 1.7s-.23 1.23-.7 1.7l-1.61 1.61a.98.98 0 0 1-.84.28c-.47-.07-.8-.48-.97-.93a2.5 2.5 0 1 0-3.21 3.21c.45.17.86.5.93.97a.98.98 0 0 1-.28.84l-1.61 1.61a2.4 2.4 0 0 1-1.7.7 2.4 2.4 0 0 1-1.7-.7l-1.57-1.57a1.03 1.03 0 0 0-.88-.29c-.49.07-.84.5-1.02.97a2.5 2.5 0 1 1-3.24-3.24c.46-.18.9-.53.97-1.02a1.03 1.03 0 0 0-.29-.88l-1.57-1.57A2.4 2.4 0 0 1 2 12c0-.62.24-1.23.7-1.7l1.53-1.53c.24-.24.58-.35.92-.3.51.08.88.53 1.07 1.01a2.5 2.5 0 1 0 3.26-3.26c-.48-.19-.93-.56-1.01-1.07-.05-.34.06-.68.3-.92L10.3 2.7A2.4 2.4 0 0 1 12 2c.62 0 1.23.24 1.7.7l1.57 1.57c.23.23.56.34.88.29.49-.07.84-.5 1.02-.97a2.5 2.5 0 1 1 3.24 3.24c-.46.18-.9.53-.97 1.02z",
            ],
            Glyph::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Glyph::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Glyph::Book => &["M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"],
            Glyph::ChevronDown => &["m6 9 6 6 6-6"],
            Glyph::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Glyph::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
        }
    }
}
