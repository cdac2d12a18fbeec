//! Dataset Comparison State
//!
//! Upload lifecycle for the CSV comparison card. A failed upload keeps
//! the previous summary on screen and only raises the error message.

use leptos::*;

/// Summary returned by the comparison endpoint.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ComparisonResult {
    pub records_uploaded: usize,
    pub features_uploaded: usize,
    pub matching_features: usize,
    #[serde(default)]
    pub similarity_score: f64,
}

impl ComparisonResult {
    /// Similarity as a rounded 0-100 score for the gauge.
    pub fn usability_score(&self) -> f64 {
        (self.similarity_score * 100.0).round()
    }
}

/// Reactive upload state for the comparison card.
#[derive(Clone, Copy)]
pub struct ComparisonStore {
    /// Name of the most recently chosen file.
    pub file_name: RwSignal<Option<String>>,
    /// Last successful summary. Survives later failures.
    pub result: RwSignal<Option<ComparisonResult>>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
}

impl ComparisonStore {
    pub fn new() -> Self {
        Self {
            file_name: create_rw_signal(None),
            result: create_rw_signal(None),
            error: create_rw_signal(None),
            busy: create_rw_signal(false),
        }
    }

    /// Start an upload for the named file.
    pub fn begin(&self, file_name: String) {
        self.file_name.set(Some(file_name));
        self.error.set(None);
        self.busy.set(true);
    }

    /// Replace the summary with a fresh one.
    pub fn succeed(&self, result: ComparisonResult) {
        self.result.set(Some(result));
        self.busy.set(false);
    }

    /// Raise the error message. The previous summary stays intact.
    pub fn fail(&self, message: String) {
        self.error.set(Some(message));
        self.busy.set(false);
    }
}

impl Default for ComparisonStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(records: usize) -> ComparisonResult {
        ComparisonResult {
            records_uploaded: records,
            features_uploaded: 80,
            matching_features: 60,
            similarity_score: 0.91,
        }
    }

    #[test]
    fn test_usability_score() {
        assert_eq!(summary(10).usability_score(), 91.0);
        let empty = ComparisonResult {
            records_uploaded: 0,
            features_uploaded: 0,
            matching_features: 0,
            similarity_score: 0.0,
        };
        assert_eq!(empty.usability_score(), 0.0);
    }

    #[test]
    fn test_failed_upload_keeps_previous_summary() {
        let runtime = create_runtime();
        let store = ComparisonStore::new();
        store.begin("first.csv".to_string());
        store.succeed(summary(500));
        store.begin("second.csv".to_string());
        store.fail("Failed to process dataset. Please check the file format.".to_string());
        assert_eq!(store.result.get_untracked(), Some(summary(500)));
        assert!(store.error.get_untracked().is_some());
        assert!(!store.busy.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_begin_clears_stale_error() {
        let runtime = create_runtime();
        let store = ComparisonStore::new();
        store.fail("boom".to_string());
        store.begin("data.csv".to_string());
        assert_eq!(store.error.get_untracked(), None);
        assert!(store.busy.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_result_parses_without_similarity() {
        let json = r#"{"records_uploaded": 12, "features_uploaded": 4, "matching_features": 3}"#;
        let parsed: ComparisonResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.records_uploaded, 12);
        assert_eq!(parsed.similarity_score, 0.0);
    }
}
