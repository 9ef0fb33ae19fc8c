use std::collections::HashSet;

use kata_config::text::TextConfig;
use unicode_normalization::UnicodeNormalization;

/// Function words and boilerplate common to academic papers (Indonesian).
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "dan", "yang", "di", "ke", "dari", "ini", "itu", "pada", "untuk", "dengan", "adalah",
    "sebagai", "juga", "karena", "oleh", "dalam", "akan", "dapat", "penelitian", "data", "hasil",
    "analisis", "kesimpulan", "metode", "jurnal", "paper", "bab", "tabel", "gambar", "abstrak",
    "keyword",
];

/// Turns raw document text into the cleaned token sequence the graph is built from
pub trait TokenProducer: Send + Sync {
    fn tokens(&self, text: &str) -> Vec<String>;
}

/// Plain-text cleaner: NFKC, drop digits and punctuation, lowercase, split on
/// whitespace, then keep alphabetic non-stopwords of a minimum length.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    stopwords: HashSet<String>,
    min_word_len: usize,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCleaner {
    pub fn new() -> Self {
        Self::from_config(&TextConfig::default())
    }

    pub fn from_config(config: &TextConfig) -> Self {
        let stopwords = DEFAULT_STOPWORDS
            .iter()
            .map(|word| word.to_string())
            .chain(config.extra_stopwords.iter().map(|word| word.to_lowercase()))
            .collect();

        Self {
            stopwords,
            min_word_len: config.min_word_len,
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Normalized, lowercased text with digits and punctuation removed
    pub fn normalize(&self, text: &str) -> String {
        text.nfkc()
            .filter(|c| !c.is_numeric())
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    fn keep(&self, word: &str) -> bool {
        word.chars().all(char::is_alphabetic)
            && word.chars().count() >= self.min_word_len
            && !self.is_stopword(word)
    }
}

impl TokenProducer for TextCleaner {
    fn tokens(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        normalized
            .split_whitespace()
            .filter(|word| self.keep(word))
            .map(str::to_string)
            .collect()
    }
}
