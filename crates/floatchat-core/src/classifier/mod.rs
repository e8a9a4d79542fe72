#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GREETING: &str = "Hello! I'm your ocean data assistant. Ask me anything about ARGO floats, salinity, temperature, or ocean conditions. Try asking: 'Show me temperature profiles in the Arabian Sea' or 'What's the salinity trend near the equator?'";

pub const TEMPERATURE_REPLY: &str = "I found temperature data for your query. The ARGO floats show interesting thermal patterns in this region. Temperature profiles indicate seasonal variations with surface warming and deeper thermoclines. I'm generating visualizations for you on the dashboard.";

pub const SALINITY_REPLY: &str = "Analyzing salinity profiles from ARGO floats... The data shows varying salinity levels across different depths and locations. Surface salinity appears to be influenced by evaporation and freshwater inputs. Check the dashboard for detailed salinity maps and trends.";

pub const ARABIAN_SEA_REPLY: &str = "The Arabian Sea shows fascinating oceanographic patterns! ARGO floats in this region reveal high salinity levels due to intense evaporation, warm surface temperatures, and unique circulation patterns. The oxygen minimum zone is particularly pronounced here.";

pub const EQUATOR_REPLY: &str = "Near the equatorial region, ARGO data reveals the influence of equatorial upwelling, trade winds, and the Intertropical Convergence Zone. Temperature and salinity patterns show distinct seasonal variations with cooler upwelled water and varying precipitation effects.";

pub const FLOATS_REPLY: &str = "ARGO floats are autonomous profiling instruments that drift with ocean currents, diving to depths of up to 2000m every 10 days to collect temperature and salinity data. There are currently over 4000 active floats worldwide providing real-time ocean observations.";

pub const DEFAULT_REPLY: &str = "I understand you're interested in ocean data. I can help you explore ARGO float observations, including temperature, salinity, and biogeochemical parameters. Try asking about specific regions, time periods, or oceanographic phenomena you'd like to investigate.";

/// Trigger words that mark a message as a data query
pub const DATA_QUERY_KEYWORDS: &[&str] = &[
    "temperature",
    "salinity",
    "show",
    "data",
    "profile",
    "map",
    "chart",
    "arabian sea",
    "equator",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("rule '{rule}' has no keywords")]
    NoKeywords { rule: String },
    #[error("rule '{rule}' contains an empty keyword")]
    EmptyKeyword { rule: String },
}

/// Lowercased keywords matched by substring containment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Build a keyword set, normalizing every keyword to lowercase
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty or a keyword is blank
    pub fn new<I, S>(owner: &str, keywords: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(ClassifierError::EmptyKeyword {
                    rule: owner.to_string(),
                });
            }
            normalized.push(keyword);
        }
        if normalized.is_empty() {
            return Err(ClassifierError::NoKeywords {
                rule: owner.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    fn builtin(keywords: &[&str]) -> Self {
        Self(keywords.iter().map(|k| (*k).to_string()).collect())
    }

    /// First keyword contained in `lowered`, in declaration order
    #[must_use]
    pub fn first_match(&self, lowered: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|keyword| lowered.contains(keyword.as_str()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.0
    }
}

/// One entry of the reply table: any keyword selects the reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRule {
    pub name: String,
    pub keywords: Vec<String>,
    pub reply: String,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    name: String,
    keywords: KeywordSet,
    reply: String,
}

/// Outcome of classifying one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Name of the matching rule, `None` when the default reply was used
    pub rule: Option<String>,
    pub matched_keyword: Option<String>,
    pub reply: String,
}

impl Classification {
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.rule.is_none()
    }
}

/// Ordered first-match-wins reply table
///
/// Rules are evaluated in order and the first rule with any keyword contained
/// in the lowercased input decides the reply. Input that matches no rule gets
/// the default reply, so classification never fails.
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    rules: Vec<CompiledRule>,
    default_reply: String,
}

impl QueryClassifier {
    /// Build a classifier from an explicit rule list
    ///
    /// # Errors
    ///
    /// Returns an error if a rule has no keywords or a blank keyword
    pub fn new(rules: Vec<ReplyRule>, default_reply: String) -> Result<Self, ClassifierError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let keywords = KeywordSet::new(&rule.name, &rule.keywords)?;
            compiled.push(CompiledRule {
                name: rule.name,
                keywords,
                reply: rule.reply,
            });
        }
        log::debug!("Loaded {} reply rules", compiled.len());
        Ok(Self {
            rules: compiled,
            default_reply,
        })
    }

    /// The built-in ocean data reply table
    #[must_use]
    pub fn builtin() -> Self {
        let table: [(&str, &[&str], &str); 5] = [
            ("temperature", &["temperature", "temp"], TEMPERATURE_REPLY),
            ("salinity", &["salinity"], SALINITY_REPLY),
            ("arabian_sea", &["arabian sea"], ARABIAN_SEA_REPLY),
            ("equator", &["equator"], EQUATOR_REPLY),
            ("floats", &["float", "argo"], FLOATS_REPLY),
        ];
        let rules = table
            .iter()
            .map(|(name, keywords, reply)| CompiledRule {
                name: (*name).to_string(),
                keywords: KeywordSet::builtin(keywords),
                reply: (*reply).to_string(),
            })
            .collect();
        Self {
            rules,
            default_reply: DEFAULT_REPLY.to_string(),
        }
    }

    #[must_use]
    pub fn with_default_reply(mut self, default_reply: String) -> Self {
        self.default_reply = default_reply;
        self
    }

    #[must_use]
    pub fn classify(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();
        for rule in &self.rules {
            if let Some(keyword) = rule.keywords.first_match(&lowered) {
                log::debug!("Matched rule '{}' on keyword '{keyword}'", rule.name);
                return Classification {
                    rule: Some(rule.name.clone()),
                    matched_keyword: Some(keyword.to_string()),
                    reply: rule.reply.clone(),
                };
            }
        }

        log::debug!("No reply rule matched, using default reply");
        Classification {
            rule: None,
            matched_keyword: None,
            reply: self.default_reply.clone(),
        }
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Decides whether a message should be mirrored onto the dashboard
///
/// Independent of [`QueryClassifier`]: it never affects which reply is chosen.
#[derive(Debug, Clone)]
pub struct DataQueryDetector {
    keywords: KeywordSet,
}

impl DataQueryDetector {
    /// # Errors
    ///
    /// Returns an error if the keyword list is empty or contains a blank entry
    pub fn new<I, S>(keywords: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            keywords: KeywordSet::new("data_query", keywords)?,
        })
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self {
            keywords: KeywordSet::builtin(DATA_QUERY_KEYWORDS),
        }
    }

    #[must_use]
    pub fn is_data_query(&self, text: &str) -> bool {
        self.keywords.first_match(&text.to_lowercase()).is_some()
    }
}

impl Default for DataQueryDetector {
    fn default() -> Self {
        Self::builtin()
    }
}
