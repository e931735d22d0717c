//! Lexical query expansion
//!
//! Short, jargon-heavy requirement lines under-specify intent for embedding
//! similarity. Before querying the index, the requirement text is expanded
//! with domain context tokens from a fixed keyword table. The tables are
//! plain data so they can be extended without touching matching logic.

/// Domain keyword -> expansion tokens appended to the query when the
/// keyword appears in the requirement text.
pub static KEYWORD_EXPANSIONS: &[(&str, &[&str])] = &[
    ("manufacturing", &["plant", "production", "factory", "industrial"]),
    ("financial", &["banking", "finance", "insurance", "compliance"]),
    ("retail", &["ecommerce", "store", "pos", "inventory"]),
    ("sap", &["erp", "enterprise", "integration"]),
    ("oracle", &["database", "erp", "enterprise"]),
    ("iot", &["sensors", "automation", "industry4.0"]),
    ("cloud", &["infrastructure", "hosting", "servers"]),
    ("security", &["compliance", "encryption", "authentication"]),
];

/// Generic business words that trigger the enterprise context suffix
pub static ENTERPRISE_HINTS: &[&str] = &["enterprise", "corporation", "company", "ltd"];

const ENTERPRISE_SUFFIX: &str = "enterprise business corporate b2b";

/// Named strategic accounts whose mention lifts the aggregate match rate.
/// Business policy, not a modeling artifact; see [`STRATEGIC_ACCOUNT_BOOST`].
pub static STRATEGIC_ACCOUNTS: &[&str] = &[
    "asian paints",
    "tata capital",
    "hero",
    "aditya birla",
    "firstsource",
];

/// Multiplier applied to the match rate when a strategic account is named
/// in the combined requirement text. The boosted rate is capped at 1.0.
pub const STRATEGIC_ACCOUNT_BOOST: f64 = 1.25;

/// Industry families checked in priority order for bundle recommendation
pub static INDUSTRY_FAMILIES: &[(&str, &[&str])] = &[
    (
        "Manufacturing",
        &["manufactur", "plant", "factory", "production", "industrial"],
    ),
    ("Financial", &["financial", "bank", "insurance", "finance"]),
    ("Retail", &["retail", "ecommerce", "store", "sales"]),
];

pub(crate) fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

/// Expand a lowercased requirement text with domain context tokens.
pub fn enhance_query(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut enhanced = lower.clone();

    for (keyword, context_words) in KEYWORD_EXPANSIONS {
        if lower.contains(keyword) {
            enhanced.push(' ');
            enhanced.push_str(&context_words.join(" "));
        }
    }

    if contains_any(&lower, ENTERPRISE_HINTS) {
        enhanced.push(' ');
        enhanced.push_str(ENTERPRISE_SUFFIX);
    }

    // Industry context: first family hit wins
    if lower.contains("manufactur") {
        enhanced.push_str(" manufacturing plant factory production industrial");
    } else if lower.contains("financial") || lower.contains("bank") {
        enhanced.push_str(" finance banking insurance financial");
    } else if lower.contains("retail") {
        enhanced.push_str(" retail ecommerce store sales");
    }

    enhanced
}

/// Whether the combined requirement text names a strategic account
pub fn mentions_strategic_account(text: &str) -> bool {
    let lower = text.to_lowercase();
    STRATEGIC_ACCOUNTS
        .iter()
        .any(|account| lower.contains(account))
}
