//! Requirement extraction heuristics
//!
//! Segments plain proposal text into discrete requirement statements:
//! numbered items, dash bullets, modal-keyword lines, and verb-bearing
//! sentences. Extraction is a best-effort upstream step; the matching
//! engine is agnostic to how the statement list was produced.

use once_cell::sync::Lazy;
use regex::Regex;
use rfpmatch_matching::{Priority, RequirementStatement};

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)[.)]\s+(.+)").expect("valid regex"));

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

const MODAL_KEYWORDS: &[&str] = &["need", "must", "should", "require", "shall", "has to"];

const REQUIREMENT_VERBS: &[&str] = &[
    "support",
    "provide",
    "include",
    "have",
    "be",
    "do",
    "work",
    "integrate",
];

const SENTENCE_KEYWORDS: &[&str] = &[
    "must",
    "shall",
    "should",
    "need",
    "require",
    "support",
    "provide",
    "include",
    "have",
    "ensure",
    "capable of",
    "able to",
    "comply with",
    "meet",
];

const CHARS_PER_PAGE: usize = 3000;

fn estimate_page(position: usize) -> u32 {
    (position / CHARS_PER_PAGE) as u32 + 1
}

fn mandatory_or_desirable(lower: &str) -> Priority {
    if lower.contains("must") || lower.contains("shall") {
        Priority::Mandatory
    } else {
        Priority::Desirable
    }
}

/// Simple category tag from the statement text
fn categorize(lower: &str) -> &'static str {
    const COMMERCIAL: &[&str] = &["price", "cost", "budget", "payment"];
    const SECURITY: &[&str] = &["security", "encrypt", "access", "auth"];
    const SUPPORT: &[&str] = &["support", "help", "maintenance"];

    if COMMERCIAL.iter().any(|w| lower.contains(w)) {
        "commercial"
    } else if SECURITY.iter().any(|w| lower.contains(w)) {
        "security"
    } else if SUPPORT.iter().any(|w| lower.contains(w)) {
        "support"
    } else {
        "technical"
    }
}

fn statement(text: &str, page: u32, priority: Priority) -> RequirementStatement {
    let lower = text.to_lowercase();
    RequirementStatement::new(text, page, priority).with_category(categorize(&lower))
}

/// Segment plain text into requirement statements.
///
/// Line-oriented patterns run first; if they find fewer than three
/// statements the text is re-scanned sentence by sentence.
pub fn extract_requirements(text: &str) -> Vec<RequirementStatement> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut requirements = Vec::new();
    let mut offset = 0usize;

    for raw_line in normalized.split('\n') {
        let position = offset;
        offset += raw_line.len() + 1;

        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let page = estimate_page(position);
        let lower = line.to_lowercase();

        // Numbered requirements (1., 2), ...)
        if let Some(caps) = NUMBERED_ITEM.captures(line) {
            if line.len() > 10 {
                let req_text = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
                if req_text.len() > 15 {
                    requirements.push(statement(req_text, page, Priority::Mandatory));
                    continue;
                }
            }
        }

        // Dash bullets
        if let Some(rest) = line.strip_prefix("- ") {
            if line.len() > 10 {
                requirements.push(statement(rest.trim(), page, Priority::Desirable));
                continue;
            }
        }

        // Modal keyword lines
        if MODAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            requirements.push(statement(line, page, mandatory_or_desirable(&lower)));
            continue;
        }

        // Longer verb-bearing lines
        if line.len() > 20
            && line.split_whitespace().count() > 4
            && REQUIREMENT_VERBS.iter().any(|verb| lower.contains(verb))
        {
            requirements.push(statement(line, page, Priority::Optional));
        }
    }

    if requirements.len() < 3 {
        return extract_by_sentences(&normalized);
    }

    requirements
}

/// Fallback: scan sentence by sentence for requirement-like phrasing
fn extract_by_sentences(text: &str) -> Vec<RequirementStatement> {
    let sentences: Vec<&str> = SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut requirements = Vec::new();
    let mut offset = 0usize;

    for sentence in &sentences {
        let page = estimate_page(offset);
        offset += sentence.len() + 1;

        if sentence.len() < 20 {
            continue;
        }

        let lower = sentence.to_lowercase();
        if SENTENCE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            requirements.push(statement(sentence, page, mandatory_or_desirable(&lower)));
        }
    }

    // Still nothing usable: take the first meaningful sentences as optional
    if requirements.len() < 2 {
        requirements = sentences
            .iter()
            .filter(|s| s.len() > 30)
            .take(10)
            .map(|s| statement(s, 1, Priority::Optional))
            .collect();
    }

    requirements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_items_are_mandatory() {
        let text = "1. The system must integrate with our SAP landscape\n\
                    2. Provide role-based access control for all users\n\
                    3. Include disaster recovery across regions";
        let reqs = extract_requirements(text);
        assert_eq!(reqs.len(), 3);
        assert!(reqs.iter().all(|r| r.priority == Priority::Mandatory));
        assert!(reqs[0].text.starts_with("The system must"));
    }

    #[test]
    fn test_bullets_are_desirable() {
        let text = "1. The system must integrate with our SAP landscape today\n\
                    2. Provide role-based access control for all users\n\
                    - nightly backups of the production database\n\
                    - dashboards for plant supervisors";
        let reqs = extract_requirements(text);
        assert_eq!(reqs.len(), 4);
        assert_eq!(reqs[2].priority, Priority::Desirable);
        assert_eq!(reqs[2].text, "nightly backups of the production database");
    }

    #[test]
    fn test_modal_lines_classified_by_strength() {
        let text = "The platform must encrypt data at rest everywhere\n\
                    The vendor should offer onsite training sessions\n\
                    We need 24x7 support coverage for all plants";
        let reqs = extract_requirements(text);
        assert_eq!(reqs.len(), 3);
        assert_eq!(reqs[0].priority, Priority::Mandatory);
        assert_eq!(reqs[1].priority, Priority::Desirable);
        assert_eq!(reqs[2].priority, Priority::Desirable);
    }

    #[test]
    fn test_sentence_fallback_when_lines_sparse() {
        let text = "Our organization intends to modernize. The chosen platform must support \
                    multi-region deployments. Vendors shall comply with local data laws.";
        let reqs = extract_requirements(text);
        assert!(reqs.len() >= 2);
        assert!(reqs.iter().any(|r| r.priority == Priority::Mandatory));
    }

    #[test]
    fn test_category_tagging() {
        let text = "1. The system must encrypt all authentication tokens in transit\n\
                    2. Provide a detailed cost and payment schedule upfront\n\
                    3. Include maintenance and support for three years minimum";
        let reqs = extract_requirements(text);
        assert_eq!(reqs[0].category, "security");
        assert_eq!(reqs[1].category, "commercial");
        assert_eq!(reqs[2].category, "support");
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_requirements("").is_empty());
        assert!(extract_requirements("short").is_empty());
    }
}
