//! # Training Reports
//!
//! Presenters for [`TrainResults`]; training itself never prints.
//!
//! The text report renders each round as:
//! ```text
//! merge 1: ("u", "g") -> ug
//! vocab: ["h ug </w>", "p ug </w>", "p u n </w>", "b u n </w>"]
//! --------------------
//! ```

use std::io::Write;

use serde::Serialize;

use crate::errors::PSResult;
use crate::training::{CountType, MergeEvent, SymbolType, TrainResults};

const SEPARATOR_WIDTH: usize = 20;

/// Report formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// The per-round text report.
    #[default]
    Text,

    /// A single JSON document; see [`TrainReport`].
    Json,
}

/// Serializable form of a [`MergeEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRecord {
    /// The round number.
    pub round: usize,

    /// The ``[left, right]`` pair.
    pub pair: [String; 2],

    /// The merged symbol.
    pub merged: String,

    /// The pair's count when selected (saturating at ``u64::MAX``).
    pub count: u64,

    /// The vocabulary keys after the merge, when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocab_keys: Option<Vec<String>>,
}

impl<S: SymbolType, C: CountType> From<&MergeEvent<S, C>> for MergeRecord {
    fn from(event: &MergeEvent<S, C>) -> Self {
        Self {
            round: event.round,
            pair: [
                event.pair.0.as_ref().to_string(),
                event.pair.1.as_ref().to_string(),
            ],
            merged: event.merged.as_ref().to_string(),
            count: event.count.to_u64().unwrap_or(u64::MAX),
            vocab_keys: event.vocab_keys.clone(),
        }
    }
}

/// Serializable vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabRecord {
    /// The space-delimited word representation.
    pub word: String,

    /// The word frequency (saturating at ``u64::MAX``).
    pub count: u64,
}

/// Serializable form of [`TrainResults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainReport {
    /// Why training stopped.
    pub halt_reason: String,

    /// The merges, in order.
    pub merges: Vec<MergeRecord>,

    /// The final vocabulary, in insertion order.
    pub vocab: Vec<VocabRecord>,
}

impl<S: SymbolType, C: CountType> From<&TrainResults<S, C>> for TrainReport {
    fn from(results: &TrainResults<S, C>) -> Self {
        Self {
            halt_reason: results.halt_reason.to_string(),
            merges: results.history.iter().map(MergeRecord::from).collect(),
            vocab: results
                .vocab
                .iter()
                .map(|(word, count)| VocabRecord {
                    word: word.to_string(),
                    count: count.to_u64().unwrap_or(u64::MAX),
                })
                .collect(),
        }
    }
}

/// Render one event in the text format, without the trailing separator.
pub fn render_event_text<S: SymbolType, C: CountType>(event: &MergeEvent<S, C>) -> String {
    let mut text = format!(
        "merge {}: ({:?}, {:?}) -> {}",
        event.round,
        event.pair.0.as_ref(),
        event.pair.1.as_ref(),
        event.merged.as_ref()
    );
    if let Some(keys) = &event.vocab_keys {
        text.push_str(&format!("\nvocab: {keys:?}"));
    }
    text
}

/// Write the text report: each event, then a separator line.
pub fn write_text_report<S, C, W>(
    events: &[MergeEvent<S, C>],
    writer: &mut W,
) -> PSResult<()>
where
    S: SymbolType,
    C: CountType,
    W: Write + ?Sized,
{
    let separator = "-".repeat(SEPARATOR_WIDTH);
    for event in events {
        writeln!(writer, "{}", render_event_text(event))?;
        writeln!(writer, "{separator}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the results as a pretty-printed [`TrainReport`] JSON document.
pub fn write_json_report<S, C, W>(
    results: &TrainResults<S, C>,
    writer: &mut W,
) -> PSResult<()>
where
    S: SymbolType,
    C: CountType,
    W: Write + ?Sized,
{
    let report = TrainReport::from(results);
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the results in `format`.
pub fn write_report<S, C, W>(
    results: &TrainResults<S, C>,
    format: ReportFormat,
    writer: &mut W,
) -> PSResult<()>
where
    S: SymbolType,
    C: CountType,
    W: Write + ?Sized,
{
    match format {
        ReportFormat::Text => write_text_report(&results.history, writer),
        ReportFormat::Json => write_json_report(results, writer),
    }
}

#[cfg(test)]
mod tests {
    use compact_str::CompactString;

    use super::*;
    use crate::training::{MergeTrainerOptions, train};
    use crate::vocab::Vocabulary;

    fn demo_results(snapshots: bool) -> TrainResults<CompactString, u32> {
        let vocab = Vocabulary::from_representations([
            ("h u g </w>", 1),
            ("p u g </w>", 1),
            ("p u n </w>", 1),
            ("b u n </w>", 1),
        ])
        .unwrap();
        train(
            vocab,
            MergeTrainerOptions::new(2).with_record_snapshots(snapshots),
        )
        .unwrap()
    }

    #[test]
    fn test_text_report() {
        let results = demo_results(true);

        let mut buf: Vec<u8> = Vec::new();
        write_report(&results, ReportFormat::Text, &mut buf).unwrap();

        let expected = concat!(
            "merge 1: (\"u\", \"g\") -> ug\n",
            "vocab: [\"h ug </w>\", \"p ug </w>\", \"p u n </w>\", \"b u n </w>\"]\n",
            "--------------------\n",
            "merge 2: (\"ug\", \"</w>\") -> ug</w>\n",
            "vocab: [\"h ug</w>\", \"p ug</w>\", \"p u n </w>\", \"b u n </w>\"]\n",
            "--------------------\n",
        );
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_text_report_without_snapshots() {
        let results = demo_results(false);
        assert_eq!(
            render_event_text(&results.history[1]),
            "merge 2: (\"ug\", \"</w>\") -> ug</w>"
        );
    }

    #[test]
    fn test_json_report() {
        let results = demo_results(false);

        let mut buf: Vec<u8> = Vec::new();
        write_report(&results, ReportFormat::Json, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["halt_reason"], "round_budget_exhausted");
        assert_eq!(value["merges"][0]["round"], 1);
        assert_eq!(value["merges"][0]["pair"], serde_json::json!(["u", "g"]));
        assert_eq!(value["merges"][1]["merged"], "ug</w>");
        assert_eq!(value["merges"][1]["count"], 2);
        assert!(value["merges"][0].get("vocab_keys").is_none());
        assert_eq!(value["vocab"][2]["word"], "p u n </w>");
        assert_eq!(value["vocab"][2]["count"], 1);
    }
}
