use crate::scanner::StatusRecord;
use std::fmt::Write;

/// terminal colour sequences, wrapped in \x01..\x02 so readline does not
/// count them towards the prompt width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    /// light magenta, marks a diverged branch
    pub magenta: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const ANSI: Self = Self {
        red: "\x01\x1b[31m\x02",
        green: "\x01\x1b[32m\x02",
        yellow: "\x01\x1b[33m\x02",
        magenta: "\x01\x1b[95m\x02",
        reset: "\x01\x1b[0m\x02",
    };
}

/// symbols placed after the branch name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// in sync with upstream (or no upstream at all)
    pub bullet: &'static str,
    /// push needed
    pub ahead: &'static str,
    /// pull needed
    pub behind: &'static str,
    pub diverged: &'static str,
}

impl Glyphs {
    pub const FANCY: Self = Self {
        bullet: "ꔷ", // U+A537
        ahead: "➡ ", // U+27A1
        behind: "⬅ ", // U+2B05
        diverged: "⬍ ", // U+2B0D
    };

    pub const ASCII: Self = Self {
        bullet: "*",
        ahead: "->",
        behind: "<-",
        diverged: "|",
    };
}

/// everything the renderer needs besides the record itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub palette: Palette,
    pub glyphs: Glyphs,
}

impl RenderStyle {
    pub fn new(plain: bool) -> Self {
        if plain { Self::plain() } else { Self::decorated() }
    }

    pub fn decorated() -> Self {
        Self {
            palette: Palette::ANSI,
            glyphs: Glyphs::FANCY,
        }
    }

    /// ascii glyphs only
    pub fn plain() -> Self {
        Self {
            palette: Palette::ANSI,
            glyphs: Glyphs::ASCII,
        }
    }
}

/// format a record as the prompt fragment, e.g. `(main ꔷ) `
pub fn render(record: &StatusRecord, style: &RenderStyle) -> String {
    let RenderStyle { palette, glyphs } = style;
    let mut out = String::from("(");

    // staged wins over unstaged, unstaged over untracked
    let branch_color = if record.has_staged_changes {
        Some(palette.green)
    } else if record.has_unstaged_changes {
        Some(palette.red)
    } else if record.has_untracked_files {
        Some(palette.yellow)
    } else {
        None
    };

    match branch_color {
        Some(color) => {
            let _ = write!(out, "{color}{}{}", record.branch, palette.reset);
        }
        None => out.push_str(&record.branch),
    }

    if let Some(diverged) = record.diverged {
        let _ = write!(
            out,
            " {}{}{}{}{}",
            diverged.local, palette.magenta, glyphs.diverged, palette.reset, diverged.remote
        );
    } else if let Some(ahead) = record.ahead {
        let _ = write!(out, "{}{}{ahead}{}", palette.red, glyphs.ahead, palette.reset);
    } else if let Some(behind) = record.behind {
        let _ = write!(out, "{}{}{behind}{}", palette.yellow, glyphs.behind, palette.reset);
    } else {
        let _ = write!(out, " {}", glyphs.bullet);
    }

    out.push_str(") ");
    out
}
