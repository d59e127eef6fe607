//! Spoken-language detection from text samples, phone numbers, and
//! administrative regions, combined by weighted voting.

mod lexicon;

pub use lexicon::DEFAULT_LANGUAGE;

use crate::engines::round2;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed voting weights per signal. Text is the most reliable source.
const TEXT_WEIGHT: f64 = 3.0;
const PHONE_WEIGHT: f64 = 1.0;
const REGION_WEIGHT: f64 = 1.5;

/// A lexicon pattern failed to compile.
#[derive(Debug, thiserror::Error)]
#[error("invalid lexicon pattern '{pattern}'")]
pub struct LexiconError {
    pattern: String,
    #[source]
    source: regex::Error,
}

struct CompiledLanguage {
    name: &'static str,
    keywords: &'static [&'static str],
    patterns: Vec<Regex>,
    phone_prefixes: &'static [&'static str],
}

/// Signal source for a single detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    Text,
    Phone,
    Region,
    Combined,
    Default,
}

/// One contributing per-signal guess inside a combined detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionSignal {
    pub method: DetectionMethod,
    pub language: String,
    pub confidence: f64,
    pub weight: f64,
}

/// Runner-up language with its normalized vote share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageAlternative {
    pub language: String,
    pub score: f64,
}

/// Outcome of a combined detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub language: String,
    pub confidence: f64,
    pub method: DetectionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detections: Option<Vec<DetectionSignal>>,
    pub alternatives: Vec<LanguageAlternative>,
}

impl DetectionResult {
    fn fallback() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            confidence: 0.5,
            method: DetectionMethod::Default,
            detections: None,
            alternatives: Vec::new(),
        }
    }
}

/// Stateless detector holding the compiled lexicon. Safe to share
/// across request handlers; every call is a pure function of its
/// arguments.
pub struct LanguageDetector {
    languages: Vec<CompiledLanguage>,
}

impl LanguageDetector {
    /// Compile the static lexicon once at construction.
    pub fn new() -> Result<Self, LexiconError> {
        let mut languages = Vec::with_capacity(lexicon::LEXICON.len());
        for entry in lexicon::LEXICON {
            let mut patterns = Vec::with_capacity(entry.patterns.len());
            for pattern in entry.patterns {
                let regex = Regex::new(pattern).map_err(|source| LexiconError {
                    pattern: (*pattern).to_string(),
                    source,
                })?;
                patterns.push(regex);
            }
            languages.push(CompiledLanguage {
                name: entry.name,
                keywords: entry.keywords,
                patterns,
                phone_prefixes: entry.phone_prefixes,
            });
        }
        Ok(Self { languages })
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            self.languages.iter().map(|language| language.name).collect();
        names.push(DEFAULT_LANGUAGE);
        names
    }

    /// Score each language by keyword containment (+1 each) and
    /// word-boundary pattern hits (+2 per match). Confidence is the
    /// winner's share of the total, with a +0.2 bonus when the raw
    /// score reaches 5, capped at 1.0.
    pub fn detect_from_text(&self, text: &str) -> (&'static str, f64) {
        if text.trim().chars().count() < 3 {
            return (DEFAULT_LANGUAGE, 0.5);
        }

        let text_lower = text.to_lowercase();
        let mut scores: Vec<(&'static str, u32)> = Vec::with_capacity(self.languages.len());

        for language in &self.languages {
            let mut score = 0u32;
            for keyword in language.keywords {
                if text_lower.contains(keyword) {
                    score += 1;
                }
            }
            for pattern in &language.patterns {
                score += pattern.find_iter(&text_lower).count() as u32 * 2;
            }
            scores.push((language.name, score));
        }

        let total: u32 = scores.iter().map(|(_, score)| score).sum();
        let (winner, best) = scores
            .iter()
            .fold(("", 0u32), |acc, &(name, score)| {
                if score > acc.1 {
                    (name, score)
                } else {
                    acc
                }
            });

        if best == 0 {
            return (DEFAULT_LANGUAGE, 0.5);
        }

        let mut confidence = best as f64 / total as f64;
        if best >= 5 {
            confidence = (confidence + 0.2).min(1.0);
        }

        (winner, round2(confidence))
    }

    /// Guess from the national dialing prefix. Medium confidence on a
    /// table hit, low otherwise.
    pub fn detect_from_phone(&self, phone: &str) -> (&'static str, f64) {
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

        let prefix: String = if digits.starts_with("233") {
            digits.chars().skip(3).take(3).collect()
        } else if digits.starts_with('0') {
            digits.chars().skip(1).take(3).collect()
        } else {
            return (DEFAULT_LANGUAGE, 0.3);
        };

        for language in &self.languages {
            if language.phone_prefixes.contains(&prefix.as_str()) {
                return (language.name, 0.6);
            }
        }

        (DEFAULT_LANGUAGE, 0.3)
    }

    /// Region lookup. Regions map to a dominant language with fixed
    /// confidence 0.7; unknown regions fall back at 0.5.
    pub fn detect_from_region(&self, region: &str) -> (&'static str, f64) {
        match lexicon::region_language(region) {
            Some(language) => (language, 0.7),
            None => (DEFAULT_LANGUAGE, 0.5),
        }
    }

    /// Weighted vote across whichever signals were supplied. Each
    /// signal contributes confidence x weight to its language; the
    /// final confidence divides the winning total by the sum of the
    /// supplied weights only.
    pub fn detect_combined(
        &self,
        text: Option<&str>,
        phone: Option<&str>,
        region: Option<&str>,
    ) -> DetectionResult {
        let mut detections = Vec::new();

        if let Some(text) = text.filter(|value| !value.is_empty()) {
            let (language, confidence) = self.detect_from_text(text);
            detections.push(DetectionSignal {
                method: DetectionMethod::Text,
                language: language.to_string(),
                confidence,
                weight: TEXT_WEIGHT,
            });
        }

        if let Some(phone) = phone.filter(|value| !value.is_empty()) {
            let (language, confidence) = self.detect_from_phone(phone);
            detections.push(DetectionSignal {
                method: DetectionMethod::Phone,
                language: language.to_string(),
                confidence,
                weight: PHONE_WEIGHT,
            });
        }

        if let Some(region) = region.filter(|value| !value.is_empty()) {
            let (language, confidence) = self.detect_from_region(region);
            detections.push(DetectionSignal {
                method: DetectionMethod::Region,
                language: language.to_string(),
                confidence,
                weight: REGION_WEIGHT,
            });
        }

        if detections.is_empty() {
            return DetectionResult::fallback();
        }

        // Accumulate votes preserving encounter order so ties resolve
        // deterministically under the stable sort below.
        let mut totals: Vec<(String, f64)> = Vec::new();
        for detection in &detections {
            let weighted = detection.confidence * detection.weight;
            match totals
                .iter_mut()
                .find(|(language, _)| *language == detection.language)
            {
                Some((_, total)) => *total += weighted,
                None => totals.push((detection.language.clone(), weighted)),
            }
        }

        let total_weight: f64 = detections.iter().map(|detection| detection.weight).sum();
        totals.sort_by(|a, b| b.1.total_cmp(&a.1));

        let (winner, winning_total) = totals[0].clone();
        let alternatives = totals
            .iter()
            .skip(1)
            .take(3)
            .map(|(language, score)| LanguageAlternative {
                language: language.clone(),
                score: round2(score / total_weight),
            })
            .collect();

        DetectionResult {
            language: winner,
            confidence: round2(winning_total / total_weight),
            method: DetectionMethod::Combined,
            detections: Some(detections),
            alternatives,
        }
    }
}
