use coindata_core::{factory, AssetId};
use serde::Serialize;

use crate::output::Report;

#[derive(Debug, Serialize)]
pub struct SourcesReport {
    sources: Vec<SourceEntry>,
}

#[derive(Debug, Serialize)]
struct SourceEntry {
    asset: AssetId,
    feed: String,
}

pub fn run() -> SourcesReport {
    SourcesReport {
        sources: AssetId::ALL
            .into_iter()
            .map(|asset| SourceEntry {
                asset,
                feed: factory::default_feed(asset).location.to_string(),
            })
            .collect(),
    }
}

impl Report for SourcesReport {
    fn text_lines(&self) -> Vec<String> {
        self.sources
            .iter()
            .map(|entry| format!("{:<4} {}", entry.asset.as_str(), entry.feed))
            .collect()
    }
}
