use std::collections::HashSet;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    ScamPhishing,
    HackingExploit,
    HateSpeech,
    Cyberbullying,
    Misinformation,
    PrivacyRisk,
    MentalHealthRisk,
    Neutral,
}

impl Category {
    /// Every category, in rule priority order, Neutral last.
    pub const ALL: [Category; 8] = [
        Category::ScamPhishing,
        Category::HackingExploit,
        Category::HateSpeech,
        Category::Cyberbullying,
        Category::Misinformation,
        Category::PrivacyRisk,
        Category::MentalHealthRisk,
        Category::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ScamPhishing => "Scam/Phishing",
            Category::HackingExploit => "Hacking/Exploit",
            Category::HateSpeech => "Hate Speech",
            Category::Cyberbullying => "Cyberbullying",
            Category::Misinformation => "Misinformation",
            Category::PrivacyRisk => "Privacy Risk",
            Category::MentalHealthRisk => "Mental Health Risk",
            Category::Neutral => "Neutral",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(RiskLevel::High),
            "medium" => Some(RiskLevel::Medium),
            "low" => Some(RiskLevel::Low),
            _ => None,
        }
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Medium)
    }
}

// Pattern tables are a compatibility contract with earlier HarmWatch
// releases. Some entries are deliberately broad single words ("free", "win",
// "hate") and some stems never match their inflected forms ("depress" vs
// "depression") - kept as-is, not to be tightened in place.
const SCAM_PHISHING_PATTERNS: &[&str] = &[
    r"\bverify your account\b",
    r"\bfree\b",
    r"\bprize\b",
    r"\bwin\b",
    r"\botp\b",
    r"\bpassword\b",
    r"\blogin\b",
];
const HACKING_PATTERNS: &[&str] = &[r"\bhack(?:ed|ing)?\b", r"\bbreach\b", r"\bexploit\b"];
const HATE_SPEECH_PATTERNS: &[&str] = &[r"\bracist\b", r"\bterrorist\b", r"\bgo back\b"];
const CYBERBULLYING_PATTERNS: &[&str] = &[
    r"\bidiot\b",
    r"\bstupid\b",
    r"\bkill yourself\b",
    r"\bhate\b",
];
const MISINFORMATION_PATTERNS: &[&str] = &[r"\bfake news\b", r"\bhoax\b", r"\bmisleading\b"];
const PRIVACY_PATTERNS: &[&str] = &[r"\bprivacy\b", r"\bexpose(?:d)?\b", r"\bdoxx?\b"];
const MENTAL_HEALTH_PATTERNS: &[&str] = &[
    r"\bdepress\b",
    r"\bsuicid\b",
    r"\blonely\b",
    r"\bself harm\b",
];

/// Link-shortener hosts treated as a strong phishing signal.
const SUSPICIOUS_DOMAINS: &[&str] = &["bit.ly", "tinyurl.com", "t.co"];

/// One category's pattern set with its fixed risk level.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    pub risk: RiskLevel,
    patterns: Vec<Regex>,
}

impl CategoryRule {
    pub fn new(category: Category, risk: RiskLevel, patterns: &[&str]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
            .collect::<std::result::Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            category,
            risk,
            patterns,
        })
    }

    /// True if any of the rule's patterns matches the text.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// Immutable rule tables: the ordered category tuples plus the
/// suspicious-domain set. Constructed once at startup and passed to the
/// classifier; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
    suspicious_domains: HashSet<String>,
}

impl RuleSet {
    /// Build a rule set from custom tables. Evaluation order follows the
    /// order of `rules`: a text matching several tables resolves to the
    /// earliest entry.
    pub fn from_rules(
        rules: Vec<CategoryRule>,
        suspicious_domains: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            rules,
            suspicious_domains: suspicious_domains
                .into_iter()
                .map(|d| d.to_lowercase())
                .collect(),
        }
    }

    /// The fixed production tables. The tuple order is a compatibility
    /// contract: scam/phishing first, then hacking, hate speech,
    /// cyberbullying, misinformation, privacy, mental health.
    pub fn builtin() -> Self {
        let rules = vec![
            (Category::ScamPhishing, RiskLevel::High, SCAM_PHISHING_PATTERNS),
            (Category::HackingExploit, RiskLevel::High, HACKING_PATTERNS),
            (Category::HateSpeech, RiskLevel::Medium, HATE_SPEECH_PATTERNS),
            (Category::Cyberbullying, RiskLevel::Medium, CYBERBULLYING_PATTERNS),
            (Category::Misinformation, RiskLevel::Medium, MISINFORMATION_PATTERNS),
            (Category::PrivacyRisk, RiskLevel::Medium, PRIVACY_PATTERNS),
            (Category::MentalHealthRisk, RiskLevel::Medium, MENTAL_HEALTH_PATTERNS),
        ]
        .into_iter()
        .map(|(category, risk, patterns)| {
            CategoryRule::new(category, risk, patterns).expect("built-in pattern table must compile")
        })
        .collect();

        Self::from_rules(rules, SUSPICIOUS_DOMAINS.iter().map(|d| d.to_string()))
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn is_suspicious_domain(&self, domain: &str) -> bool {
        self.suspicious_domains.contains(&domain.to_lowercase())
    }
}
