use std::fmt::Write as _;

use super::{Base, Strand};

/// Source label used for randomly generated strands.
pub const RANDOM_SOURCE: &str = "Random Generation";

/// Per-base counts and GC/AT content of a strand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    /// Counts indexed by [`Base::index`].
    counts: [usize; 4],
    /// Total number of bases.
    pub total: usize,
}

impl Composition {
    /// Count the bases of `strand`.
    #[must_use]
    pub fn of(strand: &Strand) -> Self {
        let mut counts = [0usize; 4];
        for base in strand.bases() {
            counts[base.index()] += 1;
        }
        Self {
            counts,
            total: strand.len(),
        }
    }

    /// Occurrences of `base`.
    #[must_use]
    pub fn count(&self, base: Base) -> usize {
        self.counts[base.index()]
    }

    /// Largest single-base count (0 for an empty strand).
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Share of `base` in percent; 0 for an empty strand.
    #[must_use]
    pub fn percent(&self, base: Base) -> f64 {
        percent_of(self.count(base), self.total)
    }

    /// G + C share in percent; 0 for an empty strand.
    #[must_use]
    pub fn gc_percent(&self) -> f64 {
        percent_of(self.count(Base::G) + self.count(Base::C), self.total)
    }

    /// A + T share in percent, the remainder of [`gc_percent`](Self::gc_percent).
    #[must_use]
    pub fn at_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 - self.gc_percent()
        }
    }
}

fn percent_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Multi-line statistics report for `strand`.
#[must_use]
pub fn statistics_text(strand: &Strand, source: &str) -> String {
    let comp = Composition::of(strand);
    let mut out = String::new();
    let _ = writeln!(out, "Source: {source}");
    let _ = writeln!(out, "Total length: {} base pairs", comp.total);
    let _ = writeln!(out, "GC Content: {:.2}%", comp.gc_percent());
    let _ = writeln!(out, "AT Content: {:.2}%", comp.at_percent());
    let _ = writeln!(out);
    let _ = write!(out, "Base counts:");
    for base in Base::ALL {
        let _ = write!(
            out,
            "\n  {base}–{}: {} pairs ({:.1}%)",
            base.complement(),
            comp.count(base),
            comp.percent(base)
        );
    }
    out
}

/// Horizontal bar chart of the four base counts, bars scaled so the most
/// frequent base spans `width` cells.
#[must_use]
pub fn composition_chart(strand: &Strand, width: usize) -> String {
    let comp = Composition::of(strand);
    let max = comp.max_count();
    let mut out = String::from("Base Composition");
    for base in Base::ALL {
        let count = comp.count(base);
        let cells = if max == 0 { 0 } else { count * width / max };
        let _ = write!(out, "\n{base} |{:<width$}| {count}", "█".repeat(cells));
    }
    let _ = write!(
        out,
        "\nGC {:.1}% / AT {:.1}%",
        comp.gc_percent(),
        comp.at_percent()
    );
    out
}
