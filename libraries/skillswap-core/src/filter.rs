//! Discovery filters and the predicate repositories evaluate.
//!
//! A [`DiscoveryFilter`] is the raw `skill` / `search` pair a caller sends.
//! [`DiscoveryPredicate::from_filter`] turns it into a list of
//! [`TextClause`]s that are ANDed together on top of the visibility rule
//! (public, not banned, not admin). Each clause is an OR over profile fields
//! of a literal, case-insensitive substring test. Nothing here builds a regex
//! or a `LIKE` pattern from user input.

use crate::types::UserProfile;
use serde::{Deserialize, Serialize};

/// Fold a string for case-insensitive comparison.
///
/// Lowercases one character at a time, so no context rules (such as the
/// Greek word-final sigma) apply, and maps `ς` onto `σ`. Storage layers must
/// index with the same folding so in-memory and SQL evaluation agree.
pub fn fold_case(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

/// Filters accepted by the discovery endpoint.
///
/// Empty strings count as "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryFilter {
    /// Match against offered or wanted skills
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,

    /// Match against name, offered or wanted skills
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl DiscoveryFilter {
    /// An empty filter (every discoverable profile).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skill filter.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    /// Set the free-text search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The skill filter, if non-empty.
    pub fn skill(&self) -> Option<&str> {
        self.skill.as_deref().filter(|s| !s.is_empty())
    }

    /// The search term, if non-empty.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// True when neither filter is set.
    pub fn is_empty(&self) -> bool {
        self.skill().is_none() && self.search().is_none()
    }

    /// Copy with empty fields dropped, suitable for a query string.
    pub fn normalized(&self) -> Self {
        Self {
            skill: self.skill().map(str::to_string),
            search: self.search().map(str::to_string),
        }
    }
}

/// How `skill` and `search` combine when both are supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPrecedence {
    /// `search` replaces `skill`; the skill filter is ignored.
    #[default]
    SearchOverridesSkill,
    /// Both clauses must hold.
    Conjunctive,
}

/// Profile fields a text clause can look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// Display name
    Name,
    /// Any entry of `skills_offered`
    SkillsOffered,
    /// Any entry of `skills_wanted`
    SkillsWanted,
}

/// A case-insensitive substring test ORed over a set of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextClause {
    needle: String,
    fields: Vec<ProfileField>,
}

impl TextClause {
    /// Build a clause over arbitrary fields. The needle is folded here.
    pub fn new(needle: &str, fields: impl Into<Vec<ProfileField>>) -> Self {
        Self {
            needle: fold_case(needle),
            fields: fields.into(),
        }
    }

    /// Clause for the `skill` filter: offered or wanted skills.
    pub fn skill(term: &str) -> Self {
        Self::new(
            term,
            [ProfileField::SkillsOffered, ProfileField::SkillsWanted],
        )
    }

    /// Clause for the `search` filter: name, offered or wanted skills.
    pub fn search(term: &str) -> Self {
        Self::new(
            term,
            [
                ProfileField::Name,
                ProfileField::SkillsOffered,
                ProfileField::SkillsWanted,
            ],
        )
    }

    /// Folded needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Fields searched by this clause.
    pub fn fields(&self) -> &[ProfileField] {
        &self.fields
    }

    /// Evaluate against a stored profile.
    pub fn matches(&self, profile: &UserProfile) -> bool {
        self.fields.iter().any(|field| match field {
            ProfileField::Name => self.hit(&profile.name),
            ProfileField::SkillsOffered => profile.skills_offered.iter().any(|s| self.hit(s)),
            ProfileField::SkillsWanted => profile.skills_wanted.iter().any(|s| self.hit(s)),
        })
    }

    fn hit(&self, haystack: &str) -> bool {
        fold_case(haystack).contains(&self.needle)
    }
}

/// The full discovery predicate: visibility rule AND every clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryPredicate {
    clauses: Vec<TextClause>,
}

impl DiscoveryPredicate {
    /// Only the visibility rule.
    pub fn visible_only() -> Self {
        Self::default()
    }

    /// Add a clause that must also hold.
    pub fn and(mut self, clause: TextClause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Build the predicate for a request.
    pub fn from_filter(filter: &DiscoveryFilter, precedence: FilterPrecedence) -> Self {
        let skill = filter.skill().map(TextClause::skill);
        let search = filter.search().map(TextClause::search);

        let clauses = match (precedence, search) {
            (FilterPrecedence::SearchOverridesSkill, Some(search)) => vec![search],
            (_, search) => skill.into_iter().chain(search).collect(),
        };

        Self { clauses }
    }

    /// Text clauses, all of which must match.
    pub fn clauses(&self) -> &[TextClause] {
        &self.clauses
    }

    /// Evaluate against a stored profile, visibility included.
    pub fn matches(&self, profile: &UserProfile) -> bool {
        profile.is_discoverable() && self.clauses.iter().all(|c| c.matches(profile))
    }
}
