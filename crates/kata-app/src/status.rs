use kata_types::SkipReason;

/// What happened to each document of a run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub analyzed: Vec<String>,
    pub skipped: Vec<(String, SkipReason)>,
    pub failed: Vec<(String, String)>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.analyzed.len() + self.skipped.len() + self.failed.len()
    }
}

pub fn describe_skip(reason: &SkipReason) -> String {
    match reason {
        SkipReason::TooShort { tokens, required } => {
            format!("document too short for analysis ({tokens} tokens, need {required})")
        }
        SkipReason::AlreadyAnalyzed => "already analyzed".to_string(),
        SkipReason::Cancelled => "cancelled".to_string(),
    }
}
