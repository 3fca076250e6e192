use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::ScoreReport;

const BASE_SCORE: i16 = 100;

// Shaped-token patterns, not full validation; unusual-but-legal formats may
// miss and that is accepted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("EMAIL_RE is a valid regex pattern")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}")
        .expect("PHONE_RE is a valid regex pattern")
});
static SPECIAL_CHAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\s.,;:!?()\-'/]").expect("SPECIAL_CHAR_RE is a valid regex pattern")
});
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("YEAR_RE is a valid regex pattern"));
static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{4}\b")
        .expect("MONTH_YEAR_RE is a valid regex pattern")
});
static NUMERIC_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}/\d{4}").expect("NUMERIC_DATE_RE is a valid regex pattern"));
static CAPS_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("CAPS_WORD_RE is a valid regex pattern"));

const ACTION_VERBS: [&str; 16] = [
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "designed",
    "analyzed",
    "improved",
    "coordinated",
    "achieved",
    "executed",
    "established",
    "built",
    "optimized",
    "delivered",
    "increased",
];

const REQUIRED_SECTIONS: [(&str, &[&str]); 3] = [
    (
        "Experience",
        &[
            "experience",
            "work history",
            "employment",
            "professional experience",
            "work experience",
        ],
    ),
    (
        "Education",
        &[
            "education",
            "qualification",
            "degree",
            "academic",
            "university",
            "college",
        ],
    ),
    (
        "Skills",
        &[
            "skills",
            "technical skills",
            "competencies",
            "proficiencies",
            "expertise",
        ],
    ),
];

const SUMMARY_KEYWORDS: [&str; 5] = [
    "summary",
    "objective",
    "profile",
    "about me",
    "professional summary",
];

const BULLET_GLYPHS: [char; 9] = ['•', '◦', '○', '■', '▪', '-', '*', '►', '→'];

/// Outcome of one independent check. Checks never see each other's state;
/// the scorer folds all outcomes into a single report.
#[derive(Debug, Default)]
struct CheckOutcome {
    penalty: i16,
    issues: Vec<String>,
    suggestions: Vec<String>,
    details: Vec<(&'static str, String)>,
}

impl CheckOutcome {
    fn clean() -> Self {
        CheckOutcome::default()
    }

    fn detail(name: &'static str, value: impl Into<String>) -> Self {
        CheckOutcome {
            details: vec![(name, value.into())],
            ..CheckOutcome::default()
        }
    }
}

/// Heuristic scorer for how reliably applicant-tracking software will parse a
/// resume. Pure and total: any string input, including the empty string,
/// produces a complete report.
pub struct AtsScorer;

impl AtsScorer {
    pub fn score(text: &str) -> ScoreReport {
        let lower = text.to_lowercase();
        let char_count = text.chars().count();

        let outcomes = [
            Self::check_length(char_count),
            Self::check_contact_info(text),
            Self::check_sections(&lower),
            Self::check_action_verbs(&lower),
            Self::check_formatting(text, char_count),
            Self::check_bullets(text, char_count),
            Self::check_dates(text),
            Self::check_experience_depth(&lower),
            Self::check_headers(text, char_count),
        ];

        let mut penalty_total: i16 = 0;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();
        let mut details = BTreeMap::new();

        for outcome in outcomes {
            penalty_total += outcome.penalty;
            issues.extend(outcome.issues);
            suggestions.extend(outcome.suggestions);
            for (name, value) in outcome.details {
                details.insert(name.to_string(), value);
            }
        }

        ScoreReport::from_accumulated(BASE_SCORE - penalty_total, issues, suggestions, details)
    }

    fn check_length(char_count: usize) -> CheckOutcome {
        if char_count < 300 {
            CheckOutcome {
                penalty: 25,
                issues: vec!["Resume is too short - lacks sufficient detail".to_string()],
                suggestions: vec![
                    "Add more details about your experience, skills, and achievements".to_string(),
                ],
                details: vec![("length", "Poor".to_string())],
            }
        } else if char_count < 800 {
            CheckOutcome {
                penalty: 10,
                issues: vec!["Resume could be more detailed".to_string()],
                suggestions: vec![
                    "Expand on your key achievements and responsibilities".to_string()
                ],
                details: vec![("length", "Fair".to_string())],
            }
        } else {
            CheckOutcome::detail("length", "Good")
        }
    }

    fn check_contact_info(text: &str) -> CheckOutcome {
        let has_email = EMAIL_RE.is_match(text);
        let has_phone = PHONE_RE.is_match(text);

        let mut outcome = CheckOutcome::detail(
            "contact_info",
            if has_email && has_phone {
                "Complete"
            } else {
                "Incomplete"
            },
        );

        if !has_email {
            outcome.penalty += 15;
            outcome.issues.push("Missing email address".to_string());
            outcome
                .suggestions
                .push("Add a professional email address at the top of your resume".to_string());
        }
        if !has_phone {
            outcome.penalty += 10;
            outcome.issues.push("Missing phone number".to_string());
            outcome
                .suggestions
                .push("Include your contact phone number".to_string());
        }

        outcome
    }

    fn check_sections(lower: &str) -> CheckOutcome {
        let mut outcome = CheckOutcome::clean();
        let mut found = 0;

        for (section, keywords) in REQUIRED_SECTIONS {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                found += 1;
            } else {
                outcome.penalty += 15;
                outcome
                    .issues
                    .push(format!("Missing '{}' section", section));
                outcome
                    .suggestions
                    .push(format!("Add a clear '{}' section to your resume", section));
            }
        }

        // Summary is counted but carries no penalty
        if SUMMARY_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            found += 1;
        }

        outcome
            .details
            .push(("sections", format!("{}/4 key sections found", found)));
        outcome
    }

    fn check_action_verbs(lower: &str) -> CheckOutcome {
        let verb_count = ACTION_VERBS
            .iter()
            .filter(|verb| lower.contains(*verb))
            .count();

        if verb_count < 3 {
            CheckOutcome {
                penalty: 12,
                issues: vec!["Limited use of strong action verbs".to_string()],
                suggestions: vec![
                    "Use more action verbs like: developed, managed, led, implemented, achieved"
                        .to_string(),
                ],
                details: vec![("action_verbs", "Poor".to_string())],
            }
        } else if verb_count < 6 {
            CheckOutcome::detail("action_verbs", "Fair")
        } else {
            CheckOutcome::detail("action_verbs", "Good")
        }
    }

    fn check_formatting(text: &str, char_count: usize) -> CheckOutcome {
        let special_count = SPECIAL_CHAR_RE.find_iter(text).count();
        let ratio = special_count as f64 / char_count.max(1) as f64;

        if ratio > 0.08 {
            CheckOutcome {
                penalty: 12,
                issues: vec![
                    "Excessive special characters detected (likely from complex formatting)"
                        .to_string(),
                ],
                suggestions: vec![
                    "Avoid tables, text boxes, and graphics. Use simple bullet points".to_string(),
                ],
                details: vec![("formatting", "Complex (may cause ATS issues)".to_string())],
            }
        } else {
            CheckOutcome::detail("formatting", "Simple (ATS-friendly)")
        }
    }

    fn check_bullets(text: &str, char_count: usize) -> CheckOutcome {
        let has_bullets = text.chars().any(|c| BULLET_GLYPHS.contains(&c));

        if !has_bullets && char_count > 500 {
            CheckOutcome {
                penalty: 8,
                issues: vec!["No bullet points found - content may be hard to parse".to_string()],
                suggestions: vec![
                    "Use bullet points to list your responsibilities and achievements".to_string(),
                ],
                details: vec![],
            }
        } else {
            CheckOutcome::clean()
        }
    }

    fn check_dates(text: &str) -> CheckOutcome {
        let date_count = YEAR_RE.find_iter(text).count()
            + MONTH_YEAR_RE.find_iter(text).count()
            + NUMERIC_DATE_RE.find_iter(text).count();

        if date_count < 2 {
            CheckOutcome {
                penalty: 8,
                issues: vec!["Missing dates for experience or education".to_string()],
                suggestions: vec![
                    "Include dates (MM/YYYY format) for your work experience and education"
                        .to_string(),
                ],
                details: vec![],
            }
        } else {
            CheckOutcome::clean()
        }
    }

    fn check_experience_depth(lower: &str) -> CheckOutcome {
        let Some(index) = lower.find("experience") else {
            return CheckOutcome::clean();
        };

        let tail_len = lower[index..].chars().take(500).count();
        if tail_len < 200 {
            CheckOutcome {
                penalty: 10,
                issues: vec!["Work experience section seems too brief".to_string()],
                suggestions: vec![
                    "Provide more details about your roles, responsibilities, and achievements"
                        .to_string(),
                ],
                details: vec![],
            }
        } else {
            CheckOutcome::clean()
        }
    }

    fn check_headers(text: &str, char_count: usize) -> CheckOutcome {
        let caps_words = CAPS_WORD_RE.find_iter(text).count();

        if caps_words < 3 && char_count > 500 {
            CheckOutcome {
                penalty: 5,
                issues: vec![],
                suggestions: vec![
                    "Consider using clear section headers (e.g., EXPERIENCE, EDUCATION, SKILLS)"
                        .to_string(),
                ],
                details: vec![],
            }
        } else {
            CheckOutcome::clean()
        }
    }
}
