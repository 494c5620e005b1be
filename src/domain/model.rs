use serde::{Deserialize, Serialize};

/// Sign of the most recent index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "i8")]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    pub fn from_delta(delta: i64) -> Self {
        match delta.signum() {
            1 => Direction::Forward,
            -1 => Direction::Backward,
            _ => Direction::None,
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.sign()
    }
}

/// The only mutable state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CarouselState {
    pub active_index: usize,
    pub direction: Direction,
}

/// Where one ring item sits for a given active index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub angle_deg: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
    pub opacity: f64,
    pub stack_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    LinkedIn,
    GitHub,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
    pub label: String,
}

/// A team member shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub social: SocialLinks,
}

/// `"#"` is used in rosters as a "no link yet" marker.
pub(crate) fn usable_link(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "#")
}

impl TeamMember {
    /// Character painted on the avatar disc.
    pub fn initial(&self) -> Option<char> {
        self.name.trim_start().chars().next()
    }

    pub fn links(&self) -> Vec<SocialLink> {
        let mut links = Vec::new();

        if let Some(href) = usable_link(&self.social.linkedin) {
            links.push(SocialLink {
                kind: SocialKind::LinkedIn,
                href: href.to_string(),
                label: format!("{} LinkedIn", self.name),
            });
        }
        if let Some(href) = usable_link(&self.social.github) {
            links.push(SocialLink {
                kind: SocialKind::GitHub,
                href: href.to_string(),
                label: format!("{} GitHub", self.name),
            });
        }
        if let Some(address) = usable_link(&self.social.email) {
            links.push(SocialLink {
                kind: SocialKind::Email,
                href: format!("mailto:{}", address),
                label: format!("Email {}", self.name),
            });
        }

        links
    }
}
