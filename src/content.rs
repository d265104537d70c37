//! Static page content.
//!
//! Every table the page renders lives in `content/site.json`, which is baked
//! into the binary at compile time and parsed once at startup. The parsed
//! [`SiteContent`] is handed to the sections through a Yew context and never
//! mutated afterwards.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid site content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonPoint {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonColumn {
    pub title: String,
    pub tone: String,
    pub mood: String,
    pub points: Vec<ComparisonPoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FactCard {
    pub front: String,
    pub back: String,
    pub icon: String,
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub link: String,
    pub icon: String,
    pub kind: String,
    pub gradient: String,
}

impl Resource {
    /// `#` links point back into the page rather than at an external site.
    pub fn is_external(&self) -> bool {
        !self.link.starts_with('#')
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuideHighlight {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub expertise: String,
    /// Portrait URL. Members without one get an initials badge.
    #[serde(default)]
    pub image: Option<String>,
    pub social: SocialLinks,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamStat {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub hero_stats: Vec<HeroStat>,
    pub comparison: Vec<ComparisonColumn>,
    pub fact_cards: Vec<FactCard>,
    pub resources: Vec<Resource>,
    pub guide_highlights: Vec<GuideHighlight>,
    pub team_members: Vec<TeamMember>,
    pub team_stats: Vec<TeamStat>,
    pub hashtags: Vec<String>,
    pub chat_greeting: String,
    pub faq: Vec<FaqEntry>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.faq.is_empty() {
            return Err(ContentError::Invalid("FAQ table is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &self.faq {
            if !seen.insert(entry.question.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate FAQ question: {}",
                    entry.question
                )));
            }
        }

        if let Some(resource) = self.resources.iter().find(|r| r.link.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "resource '{}' has no link",
                resource.title
            )));
        }

        if self.chat_greeting.trim().is_empty() {
            return Err(ContentError::Invalid("chat greeting is empty".to_string()));
        }

        Ok(())
    }

    pub fn answer_for(&self, question: &str) -> Option<&FaqEntry> {
        self.faq.iter().find(|entry| entry.question == question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.hero_stats.len(), 3);
        assert_eq!(content.fact_cards.len(), 4);
        assert_eq!(content.resources.len(), 4);
        assert_eq!(content.team_members.len(), 4);
        assert_eq!(content.team_stats.len(), 4);
        assert_eq!(content.faq.len(), 4);
        assert_eq!(content.comparison.len(), 2);
    }

    #[test]
    fn answer_lookup_is_verbatim() {
        let content = SiteContent::load().unwrap();
        let entry = content.answer_for("What is anaemia?").unwrap();
        assert!(entry.answer.starts_with("Anaemia is a condition where your blood"));
        assert!(content.answer_for("what is anaemia?").is_none());
        assert!(content.answer_for("What is anaemia").is_none());
    }

    #[test]
    fn local_health_centers_link_stays_in_page() {
        let content = SiteContent::load().unwrap();
        let local = content
            .resources
            .iter()
            .find(|r| r.title == "Local Health Centers")
            .unwrap();
        assert!(!local.is_external());
        assert!(content.resources[0].is_external());
    }

    #[test]
    fn duplicate_questions_are_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        let first = value["faq"][0].clone();
        value["faq"].as_array_mut().unwrap().push(first);

        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn empty_faq_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value["faq"] = serde_json::json!([]);

        assert!(matches!(
            SiteContent::from_json(&value.to_string()),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn members_without_portrait_fall_back_to_initials() {
        let content = SiteContent::load().unwrap();
        let first = &content.team_members[0];
        assert!(first.image.is_none());
        assert_eq!(first.initials(), "PS");
        assert!(content.team_members.iter().all(|m| m.initials().chars().count() == 2));
    }
}
