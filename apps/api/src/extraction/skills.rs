//! Keyword skill extraction and text → skill vector conversion.
//!
//! Keyword matching is case-insensitive and word-boundary aware, so "go" does
//! not fire inside "google" while "c++" and "node.js" still match as written.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::keywords::SkillCategory;
use crate::vector::{create_empty_vector, SkillDimension, SkillVector};

static GOOGLE_CLOUD_PLATFORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"google\s+cloud\s+platform").expect("GOOGLE_CLOUD_PLATFORM: compile-time constant")
});
static LEADERSHIP_VERBS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:led|managed|supervised)\b").expect("LEADERSHIP_VERBS: compile-time constant")
});
static COMMUNICATION_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:communicat|present|collaborat)")
        .expect("COMMUNICATION_HINT: compile-time constant")
});
static PROJECT_MANAGEMENT_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bproject\s+manag").expect("PROJECT_MANAGEMENT_HINT: compile-time constant")
});
static EXCELLENT_COMMUNICATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"excellent\s+communication")
        .expect("EXCELLENT_COMMUNICATION: compile-time constant")
});
static SENIORITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"senior|lead|principal|staff").expect("SENIORITY: compile-time constant")
});

const GCP: &str = "gcp";
const INFERRED_LEADERSHIP: &str = "leadership";
const INFERRED_COMMUNICATION: &str = "communication";
const INFERRED_PROJECT_MANAGEMENT: &str = "project management";

/// Weight given to problem solving and teamwork for any text.
const BASELINE_WEIGHT: f64 = 0.5;
/// Added to leadership and problem solving when a seniority marker is present.
const SENIORITY_BOOST: f64 = 0.2;
const SENIORITY_CAP: f64 = 0.9;
/// Per distinct leadership keyword found.
const LEADERSHIP_INCREMENT: f64 = 0.3;
const DOMAIN_WEIGHT: f64 = 0.7;

/// `min(cap, base + count * step)`, applied only when count > 0.
#[derive(Debug, Clone, Copy)]
struct Saturation {
    base: f64,
    step: f64,
    cap: f64,
}

impl Saturation {
    const fn new(base: f64, step: f64, cap: f64) -> Self {
        Self { base, step, cap }
    }

    fn apply(self, count: usize) -> Option<f64> {
        (count > 0).then(|| (self.base + count as f64 * self.step).min(self.cap))
    }
}

const PROGRAMMING_CURVE: Saturation = Saturation::new(0.4, 0.15, 0.9);
const WEB_CURVE: Saturation = Saturation::new(0.4, 0.15, 0.9);
const MOBILE_CURVE: Saturation = Saturation::new(0.4, 0.15, 0.9);
const CLOUD_CURVE: Saturation = Saturation::new(0.3, 0.1, 0.8);
const DEVOPS_CURVE: Saturation = Saturation::new(0.2, 0.1, 0.7);
const DATA_CURVE: Saturation = Saturation::new(0.3, 0.15, 0.9);
const LEADERSHIP_CURVE: Saturation = Saturation::new(0.2, LEADERSHIP_INCREMENT, 0.9);

// ────────────────────────────────────────────────────────────────────────────
// Keyword matching
// ────────────────────────────────────────────────────────────────────────────

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Counts non-overlapping occurrences of `keyword` in `haystack` that are not
/// glued to a neighbouring word character. Both inputs must already be lowercase.
pub(crate) fn count_keyword(haystack: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    haystack
        .match_indices(keyword)
        .filter(|&(start, matched)| {
            let before = haystack[..start].chars().next_back();
            let after = haystack[start + matched.len()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .count()
}

/// Insertion-ordered, duplicate-free list of skill tokens.
#[derive(Default)]
struct SkillSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl SkillSet {
    fn insert(&mut self, skill: &str) {
        if self.seen.insert(skill.to_string()) {
            self.ordered.push(skill.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Extracts the de-duplicated set of skill tokens mentioned in `text`.
///
/// Order: dictionary order of literal keyword hits, then the normalized and
/// inferred tokens ("gcp", "leadership", "communication", "project management").
pub fn extract_skills_from_text(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found = SkillSet::default();

    for category in SkillCategory::ALL {
        for keyword in category.keywords() {
            if count_keyword(&lower, keyword) > 0 {
                found.insert(keyword);
            }
        }
    }

    if GOOGLE_CLOUD_PLATFORM.is_match(&lower) {
        found.insert(GCP);
    }

    // Contextual soft skills, added on top of literal hits
    if LEADERSHIP_VERBS.is_match(&lower) {
        found.insert(INFERRED_LEADERSHIP);
    }
    if COMMUNICATION_HINT.is_match(&lower) {
        found.insert(INFERRED_COMMUNICATION);
    }
    if PROJECT_MANAGEMENT_HINT.is_match(&lower) {
        found.insert(INFERRED_PROJECT_MANAGEMENT);
    }

    found.into_vec()
}

// ────────────────────────────────────────────────────────────────────────────
// Text → vector
// ────────────────────────────────────────────────────────────────────────────

/// Builds an un-normalized skill vector from free text.
///
/// Counted categories sum keyword occurrences (repeats included) and feed a
/// saturating curve. Leadership counts distinct keywords, data counts distinct
/// skills, and domains are presence-only. Problem solving and teamwork always
/// start at the baseline.
pub fn text_to_vector(text: &str) -> SkillVector {
    use SkillDimension::*;

    let mut vector = create_empty_vector();
    let lower = text.to_lowercase();
    let skills = extract_skills_from_text(text);

    // Inferred tokens that never literally appear still count once.
    let counts: HashMap<&str, usize> = skills
        .iter()
        .map(|s| (s.as_str(), count_keyword(&lower, s).max(1)))
        .collect();
    let category_count = |category: SkillCategory| -> usize {
        category
            .keywords()
            .iter()
            .map(|k| counts.get(k).copied().unwrap_or(0))
            .sum()
    };
    let has_skill = |skill: &str| counts.contains_key(skill);

    if let Some(w) = PROGRAMMING_CURVE.apply(category_count(SkillCategory::Programming)) {
        vector[Programming] = w;
    }
    if let Some(w) = WEB_CURVE.apply(category_count(SkillCategory::WebDevelopment)) {
        vector[WebDevelopment] = w;
    }
    if let Some(w) = MOBILE_CURVE.apply(category_count(SkillCategory::MobileDevelopment)) {
        vector[MobileDevelopment] = w;
    }

    let cloud_count = category_count(SkillCategory::Cloud);
    if let Some(w) = CLOUD_CURVE.apply(cloud_count) {
        vector[CloudComputing] = w;
    }
    if let Some(w) = DEVOPS_CURVE.apply(cloud_count) {
        vector[DevOps] = w;
    }

    let distinct_data = SkillCategory::Data
        .keywords()
        .iter()
        .filter(|&&k| has_skill(k))
        .count();
    if let Some(w) = DATA_CURVE.apply(distinct_data) {
        vector[DataAnalysis] = w;
        if has_skill("machine learning") || has_skill("deep learning") {
            vector[MachineLearning] = 0.8;
        }
    }

    let distinct_leadership = SkillCategory::Leadership
        .keywords()
        .iter()
        .filter(|&&k| lower.contains(k))
        .count();
    if let Some(w) = LEADERSHIP_CURVE.apply(distinct_leadership) {
        vector[Leadership] = w;
    }

    if has_skill(INFERRED_COMMUNICATION) || lower.contains("communicat") {
        vector[Communication] = if EXCELLENT_COMMUNICATION.is_match(&lower) {
            0.8
        } else {
            0.6
        };
    }

    if has_skill(INFERRED_PROJECT_MANAGEMENT) || PROJECT_MANAGEMENT_HINT.is_match(&lower) {
        vector[ProjectManagement] = 0.7;
    }

    let mentions_any = |category: SkillCategory| {
        category.keywords().iter().any(|k| lower.contains(*k))
    };
    if mentions_any(SkillCategory::Finance) {
        vector[Finance] = DOMAIN_WEIGHT;
    }
    if mentions_any(SkillCategory::Healthcare) {
        vector[Healthcare] = DOMAIN_WEIGHT;
    }

    vector[ProblemSolving] = BASELINE_WEIGHT;
    vector[Teamwork] = BASELINE_WEIGHT;

    if SENIORITY.is_match(&lower) {
        vector[Leadership] = (vector[Leadership] + SENIORITY_BOOST).min(SENIORITY_CAP);
        vector[ProblemSolving] = (vector[ProblemSolving] + SENIORITY_BOOST).min(SENIORITY_CAP);
    }

    vector
}
