use serde::Serialize;

use crate::core::data::{Catalog, TranslationType};

/// Translation progress of a single catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub file_path: String,
    pub language: String,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Vanished and obsolete entries.
    pub stale: usize,
    /// Finished share of live messages, in percent.
    pub completion: f64,
}

impl CatalogStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut finished = 0;
        let mut unfinished = 0;
        let mut stale = 0;

        for (_, message) in catalog.messages() {
            match message.translation.kind {
                TranslationType::Vanished | TranslationType::Obsolete => stale += 1,
                _ if message.translation.is_complete() => finished += 1,
                _ => unfinished += 1,
            }
        }

        Self {
            file_path: catalog.file_path.clone(),
            language: catalog.language.clone(),
            contexts: catalog.contexts.len(),
            messages: catalog.message_count(),
            finished,
            unfinished,
            stale,
            completion: completion(finished, finished + unfinished),
        }
    }

    pub fn live(&self) -> usize {
        self.finished + self.unfinished
    }
}

/// Percentage rounded to one decimal. An empty catalog is complete.
fn completion(finished: usize, live: usize) -> f64 {
    if live == 0 {
        return 100.0;
    }
    let percent = finished as f64 * 100.0 / live as f64;
    (percent * 10.0).round() / 10.0
}
