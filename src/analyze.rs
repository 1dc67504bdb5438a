use anyhow::{Context, Result};
use log::info;

use crate::counter;
use crate::input;
use crate::report::Totals;
use crate::topn::{self, TopN};

/// Ranked words for one body of text, plus the totals they were drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub top: TopN,
    pub totals: Totals,
}

/// Ranks the `n` most frequent words of `text`.
///
/// Pipeline: Tokenize → Count → Heapify → Extract top `n`.
pub fn analyze_text(text: &str, n: usize) -> Analysis {
    let counts = counter::count(text);
    let totals = Totals {
        total_words: counts.total(),
        distinct_words: counts.distinct(),
    };
    info!(
        "counted {} words ({} distinct)",
        totals.total_words, totals.distinct_words
    );

    let top = topn::top_n(counts, n);
    info!("selected {} of {} requested words", top.returned(), n);

    Analysis { top, totals }
}

/// Reads `source` (a path, or `-` for stdin) and ranks its `n` most frequent words.
pub fn analyze_source(source: &str, n: usize) -> Result<Analysis> {
    let text = input::read_text(source)
        .with_context(|| format!("Failed to read text from '{}'", source))?;
    Ok(analyze_text(&text, n))
}
