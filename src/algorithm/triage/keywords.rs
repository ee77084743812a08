//! Free-text keyword matching
//!
//! Notes typed by staff are normalised into tokens and looked up in a
//! dictionary of medical terms. Each term is a synonym of a canonical concept
//! (e.g., "pecho", "torax" and "tórax" all mean chest pain) and every concept
//! carries one severity class.

use super::severity::Severity;
use crate::config::{KeywordEntry, TriageConfig};
use crate::models::triage::KeywordHit;
use rustc_hash::{FxHashMap, FxHashSet};

/// Built-in concepts: (concept, severity, synonyms)
const DEFAULT_KEYWORDS: &[(&str, Severity, &[&str])] = &[
    // Critical
    ("dolor_toracico", Severity::Critical, &["pecho", "torax", "tórax"]),
    (
        "dificultad_respiratoria",
        Severity::Critical,
        &["respirar", "ahogo", "disnea"],
    ),
    (
        "perdida_consciencia",
        Severity::Critical,
        &["inconsciente", "desmayo", "desmayado", "desmayada"],
    ),
    ("sangrado", Severity::Critical, &["sangrado", "hemorragia"]),
    (
        "convulsion",
        Severity::Critical,
        &["convulsion", "convulsión", "convulsiones"],
    ),
    // Urgent
    ("fiebre", Severity::Urgent, &["fiebre"]),
    (
        "vomito",
        Severity::Urgent,
        &["vomito", "vómito", "vomitos", "vómitos"],
    ),
    ("dolor_abdominal", Severity::Urgent, &["abdomen", "abdominal"]),
    // Non-urgent
    ("mareo", Severity::NonUrgent, &["mareo", "mareos"]),
    ("diarrea", Severity::NonUrgent, &["diarrea"]),
    (
        "nausea",
        Severity::NonUrgent,
        &["nausea", "náusea", "nauseas", "náuseas"],
    ),
    ("tos", Severity::NonUrgent, &["tos"]),
    ("fatiga", Severity::NonUrgent, &["cansancio", "fatiga"]),
    ("malestar", Severity::NonUrgent, &["malestar"]),
    (
        "picazon",
        Severity::NonUrgent,
        &["picazon", "picazón", "comezon", "comezón"],
    ),
];

/// Spanish function words never treated as keywords
const SPANISH_STOPWORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "si", "de", "del",
    "a", "en", "para", "por", "con", "al", "lo", "le", "ha", "he", "que", "es", "no", "son",
    "era", "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas", "aquel", "aquella",
    "me", "mi", "tu", "te", "se", "nos", "su", "sus", "como", "cuando", "donde", "quien", "cual",
    "mas", "más", "mientras", "antes", "despues", "después", "ahora", "durante",
];

/// Characters treated as word separators besides whitespace
const PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '¿', '¡', '(', ')', '"', '\''];

/// Built-in keyword entries
#[must_use]
pub fn default_entries() -> Vec<KeywordEntry> {
    DEFAULT_KEYWORDS
        .iter()
        .map(|(concept, severity, terms)| KeywordEntry {
            concept: (*concept).to_string(),
            severity: *severity,
            terms: terms.iter().map(|t| (*t).to_string()).collect(),
        })
        .collect()
}

/// Built-in stopword list
#[must_use]
pub fn default_stopwords() -> Vec<String> {
    SPANISH_STOPWORDS.iter().map(|w| (*w).to_string()).collect()
}

/// Lower-case `text`, treat punctuation as whitespace and split into tokens
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c.is_whitespace() || PUNCTUATION.contains(&c))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

#[derive(Debug, Clone)]
struct TermInfo {
    concept: String,
    severity: Severity,
}

/// Compiled term → severity lookup
#[derive(Debug, Clone)]
pub struct KeywordDictionary {
    terms: FxHashMap<String, TermInfo>,
    stopwords: FxHashSet<String>,
    min_token_chars: usize,
}

impl KeywordDictionary {
    /// Compile the keyword section of a configuration
    ///
    /// Terms are stored lower-cased. A term listed under two concepts keeps
    /// the last one; `TriageConfig::validate` rejects such configurations,
    /// along with terms `scan` could never produce.
    #[must_use]
    pub fn from_config(config: &TriageConfig) -> Self {
        let mut terms = FxHashMap::default();
        for entry in &config.keywords {
            for term in &entry.terms {
                terms.insert(
                    term.trim().to_lowercase(),
                    TermInfo {
                        concept: entry.concept.clone(),
                        severity: entry.severity,
                    },
                );
            }
        }

        let stopwords = config
            .stopwords
            .iter()
            .map(|w| w.trim().to_lowercase())
            .collect();

        Self {
            terms,
            stopwords,
            min_token_chars: config.min_token_chars,
        }
    }

    /// Number of distinct terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the dictionary has no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Classify a single term, returning its concept and severity
    #[must_use]
    pub fn classify(&self, term: &str) -> Option<(&str, Severity)> {
        self.terms
            .get(&term.to_lowercase())
            .map(|info| (info.concept.as_str(), info.severity))
    }

    /// Find every keyword occurrence in `text`, in reading order
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<KeywordHit> {
        tokenize(text)
            .filter(|token| token.chars().count() >= self.min_token_chars)
            .filter(|token| !self.stopwords.contains(token))
            .filter_map(|token| {
                let info = self.terms.get(&token)?;
                Some(KeywordHit {
                    term: token,
                    concept: info.concept.clone(),
                    severity: info.severity,
                })
            })
            .collect()
    }
}
