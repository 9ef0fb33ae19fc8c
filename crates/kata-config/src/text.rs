use serde::{Deserialize, Serialize};

fn default_min_word_len() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Added on top of the built-in stopword list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_word_len: default_min_word_len(),
            extra_stopwords: vec![],
        }
    }
}
