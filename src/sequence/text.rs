use std::fmt::Write as _;

use super::{Base, Duplex};

/// Bases per block in the text helix.
pub const DEFAULT_BASES_PER_LINE: usize = 50;

/// Hex swatch per base, shared by every textual color key.
#[must_use]
pub const fn base_hex(base: Base) -> &'static str {
    match base {
        Base::A => "#FF6B6B",
        Base::T => "#4ECDC4",
        Base::G => "#FFE66D",
        Base::C => "#95E1D3",
    }
}

/// Render the duplex as stacked `5' … 3'` / `3' … 5'` blocks joined by a
/// row of `|` bonds, `bases_per_line` pairs per block.
#[must_use]
pub fn text_helix(duplex: &Duplex, bases_per_line: usize) -> String {
    let per_line = bases_per_line.max(1);
    let primary = duplex.primary().to_string();
    let complement = duplex.complement().to_string();
    let len = duplex.len();

    let mut out = String::new();
    for start in (0..len).step_by(per_line) {
        let end = (start + per_line).min(len);
        let top = &primary[start..end];
        let bottom = &complement[start..end];
        let _ = writeln!(out, "Position {start:3}–{:3}:", end - 1);
        let _ = writeln!(out, "5' {top} 3'");
        let _ = writeln!(out, "   {}", "|".repeat(top.len()));
        let _ = writeln!(out, "3' {bottom} 5'");
        let _ = writeln!(out);
    }
    out
}

/// One-line color key, e.g. `A–T #FF6B6B  T–A #4ECDC4 …`.
#[must_use]
pub fn legend_text() -> String {
    let mut out = String::from("Color key:");
    for base in Base::ALL {
        let _ = write!(out, "  {base}–{} {}", base.complement(), base_hex(base));
    }
    out
}
