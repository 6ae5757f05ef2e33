//! Years-of-experience parsing and current-role identification.

use std::sync::LazyLock;

use regex::Regex;

/// Label used when no role pattern matches.
pub const FALLBACK_ROLE: &str = "Professional";

static NO_EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bno\s+(?:prior\s+)?experience\b|\bfresh\s+graduate\b")
        .expect("NO_EXPERIENCE: compile-time constant")
});
static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*[-–]\s*(\d+(?:\.\d+)?)\s*years?")
        .expect("YEAR_RANGE: compile-time constant")
});
static YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\+?\s*years?").expect("YEARS: compile-time constant")
});
static OVER_YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)over\s+(\d+(?:\.\d+)?)\s*years?").expect("OVER_YEARS: compile-time constant")
});
static MONTHS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*months?").expect("MONTHS: compile-time constant")
});

/// Role patterns, most specific first. The first match wins.
const ROLE_PATTERNS: &[(&str, &str)] = &[
    (r"software\s+engineer", "Software Engineer"),
    (r"full[\s-]*stack\s+developer", "Full Stack Developer"),
    (r"front[\s-]?end\s+developer", "Frontend Developer"),
    (r"back[\s-]?end\s+developer", "Backend Developer"),
    (r"python\s+developer", "Python Developer"),
    (r"javascript\s+developer", "JavaScript Developer"),
    (r"engineering\s+manager", "Engineering Manager"),
    (r"product\s+manager", "Product Manager"),
    (r"ui/ux\s+designer", "UI/UX Designer"),
    (r"ux\s+designer", "UX Designer"),
    (r"data\s+scientist", "Data Scientist"),
    (r"data\s+analyst", "Data Analyst"),
    (r"vp\s+(?:of\s+)?engineering", "VP Engineering"),
    (r"dev\s*ops", "DevOps Engineer"),
    (r"machine\s+learning\s+engineer", "Machine Learning Engineer"),
    (r"(?:mobile|ios|android)\s+developer", "Mobile Developer"),
    (r"\bdeveloper\b", "Software Developer"),
];

static ROLE_REGEXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ROLE_PATTERNS
        .iter()
        .map(|&(pattern, role)| {
            let regex = Regex::new(&format!("(?i){pattern}"))
                .expect("ROLE_PATTERNS: compile-time constants");
            (regex, role)
        })
        .collect()
});

fn capture_number(captures: &regex::Captures<'_>, group: usize) -> f64 {
    captures
        .get(group)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parses the years of experience mentioned in `text`.
///
/// Precedence: explicit "no experience"/"fresh graduate" → 0, then "N-M years"
/// (mean of the bounds), "N+ years"/"N years", "over N years", "N months"
/// (as a fraction of a year). Returns 0 when nothing matches.
pub fn extract_years_of_experience(text: &str) -> f64 {
    if NO_EXPERIENCE.is_match(text) {
        return 0.0;
    }

    if let Some(caps) = YEAR_RANGE.captures(text) {
        return (capture_number(&caps, 1) + capture_number(&caps, 2)) / 2.0;
    }

    for pattern in [&*YEARS, &*OVER_YEARS] {
        if let Some(caps) = pattern.captures(text) {
            return capture_number(&caps, 1);
        }
    }

    if let Some(caps) = MONTHS.captures(text) {
        return capture_number(&caps, 1) / 12.0;
    }

    0.0
}

/// Returns the canonical label of the first role pattern found in `text`,
/// or `FALLBACK_ROLE`.
pub fn identify_current_role(text: &str) -> String {
    ROLE_REGEXES
        .iter()
        .find(|(regex, _)| regex.is_match(text))
        .map(|(_, role)| role.to_string())
        .unwrap_or_else(|| FALLBACK_ROLE.to_string())
}
