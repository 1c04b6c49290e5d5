//! What the discovery page renders.

use skillswap_core::{PublicProfile, UserId};
use std::fmt;

/// Skills shown per list before collapsing into "+N more".
pub const MAX_VISIBLE_SKILLS: usize = 3;

/// Shown when a finished request returned nobody.
pub const EMPTY_STATE_MESSAGE: &str = "No users found matching your criteria.";

/// Discovery is unauthenticated, so every card routes to sign-in.
pub const SIGN_IN_CTA: CallToAction = CallToAction {
    label: "Sign In to Send Request",
    route: "/login",
};

/// Top-level render state of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Only a loading indicator
    Loading,
    /// Request finished with no results
    Empty { message: &'static str },
    /// One card per result
    Cards(Vec<ProfileCard>),
}

/// Navigation target on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: &'static str,
}

/// A truncated skill list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillList {
    /// First [`MAX_VISIBLE_SKILLS`] entries
    pub shown: Vec<String>,
    /// How many entries were cut
    pub hidden: usize,
}

impl SkillList {
    pub fn from_skills(skills: &[String]) -> Self {
        Self {
            shown: skills.iter().take(MAX_VISIBLE_SKILLS).cloned().collect(),
            hidden: skills.len().saturating_sub(MAX_VISIBLE_SKILLS),
        }
    }

    /// "+N more" when entries were cut.
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

/// One result card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub id: UserId,
    pub name: String,
    pub location: Option<String>,
    pub rating_label: String,
    pub availability: Option<String>,
    pub skills_offered: SkillList,
    pub skills_wanted: SkillList,
    pub call_to_action: CallToAction,
}

/// `"<rating>/5"` once someone has rated the user, otherwise "No ratings".
pub fn rating_label(profile: &PublicProfile) -> String {
    if profile.total_ratings > 0 {
        format!("{}/5", profile.rating)
    } else {
        "No ratings".to_string()
    }
}

impl From<&PublicProfile> for ProfileCard {
    fn from(profile: &PublicProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            location: profile.location.clone().filter(|l| !l.is_empty()),
            rating_label: rating_label(profile),
            availability: profile.availability.clone().filter(|a| !a.is_empty()),
            skills_offered: SkillList::from_skills(&profile.skills_offered),
            skills_wanted: SkillList::from_skills(&profile.skills_wanted),
            call_to_action: SIGN_IN_CTA,
        }
    }
}

impl PageView {
    /// Build the view for a page state.
    pub fn build(loading: bool, results: &[PublicProfile]) -> Self {
        if loading {
            PageView::Loading
        } else if results.is_empty() {
            PageView::Empty {
                message: EMPTY_STATE_MESSAGE,
            }
        } else {
            PageView::Cards(results.iter().map(ProfileCard::from).collect())
        }
    }
}

impl fmt::Display for SkillList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shown.is_empty() {
            return write!(f, "-");
        }
        write!(f, "{}", self.shown.join(", "))?;
        if let Some(more) = self.more_label() {
            write!(f, " {more}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  [{}]", self.name, self.rating_label)?;
        if let Some(location) = &self.location {
            writeln!(f, "  {location}")?;
        }
        if let Some(availability) = &self.availability {
            writeln!(f, "  Availability: {availability}")?;
        }
        writeln!(f, "  Skills Offered: {}", self.skills_offered)?;
        writeln!(f, "  Skills Wanted: {}", self.skills_wanted)?;
        write!(
            f,
            "  -> {} ({})",
            self.call_to_action.label, self.call_to_action.route
        )
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageView::Loading => write!(f, "Loading..."),
            PageView::Empty { message } => write!(f, "{message}"),
            PageView::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                        writeln!(f)?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}
