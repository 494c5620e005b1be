use crate::config::CarouselOptions;
use crate::domain::model::{usable_link, TeamMember};
use crate::utils::error::{CarouselError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_ROSTER: &str = include_str!("../../demos/team.toml");

/// A team roster file: carousel options plus the members in ring order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub carousel: CarouselOptions,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl RosterConfig {
    /// Loads a roster from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// The demo team bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_ROSTER)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CarouselError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.members.is_empty() {
            return Err(CarouselError::MissingConfigError {
                field: "members".to_string(),
            });
        }

        self.carousel.validate()?;
        for member in &self.members {
            member.validate()?;
        }
        Ok(())
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl Validate for TeamMember {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("members.name", &self.name)?;
        validate_non_empty_string("members.role", &self.role)?;

        if let Some(linkedin) = usable_link(&self.social.linkedin) {
            validate_url("members.social.linkedin", linkedin)?;
        }
        if let Some(github) = usable_link(&self.social.github) {
            validate_url("members.social.github", github)?;
        }
        if let Some(email) = usable_link(&self.social.email) {
            validate_email("members.social.email", email)?;
        }
        Ok(())
    }
}
