use std::fmt::Write as _;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use crate::topn::{TopN, WordFrequency};

/// How the ranked words are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// `NN:word` pairs on a single line
    #[default]
    Text,
    /// A JSON object with the ranked words and summary counts
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Summary of the input, shown alongside the ranking in JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_words: u64,
    pub distinct_words: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    requested: usize,
    returned: usize,
    truncated: bool,
    total_words: u64,
    distinct_words: usize,
    words: &'a [WordFrequency],
}

/// The notice printed when fewer words exist than were requested.
pub fn shortfall_notice(top: &TopN) -> Option<String> {
    top.is_truncated().then(|| {
        format!(
            "There are less words than {} retrieving {} instead.",
            top.requested,
            top.returned()
        )
    })
}

/// Render the ranking as `<count>:<word>` pairs, counts zero-padded to two digits.
pub fn render_text(top: &TopN) -> String {
    let mut out = String::new();
    if let Some(notice) = shortfall_notice(top) {
        out.push_str(&notice);
        out.push('\n');
    }

    let line = top
        .entries
        .iter()
        .map(|e| format!("{:02}:{}", e.count, e.word))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{}", line);
    out
}

pub fn render_json(top: &TopN, totals: Totals) -> Result<String> {
    let report = JsonReport {
        requested: top.requested,
        returned: top.returned(),
        truncated: top.is_truncated(),
        total_words: totals.total_words,
        distinct_words: totals.distinct_words,
        words: &top.entries,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render(top: &TopN, totals: Totals, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(top)),
        Format::Json => render_json(top, totals),
    }
}
