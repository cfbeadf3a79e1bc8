use serde::{Deserialize, Serialize};

// ===== CONFIG TYPES =====

const BLEND_MODES: [&str; 5] = ["normal", "difference", "exclusion", "multiply", "screen"];
const BAR_POSITIONS: [&str; 2] = ["top", "bottom"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("showcase config is not valid TOML: {0}")]
    Parse(String),
    #[error("unknown blend mode '{0}'")]
    UnknownBlendMode(String),
    #[error("unknown scroll progress position '{0}'")]
    UnknownPosition(String),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
}

/// Settings of the demo app, read from `showcase.toml`.
///
/// Missing sections and fields fall back to the component defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub cursor: CursorSection,
    pub scroll_progress: ScrollProgressSection,
    pub table: TableSection,
    pub toast: ToastSection,
}

impl ShowcaseConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|error| ConfigError::Parse(error.to_string()))?;
        config.validate()
    }

    /// Rejects values the components cannot render. The page size is left
    /// as written; the table snaps it to its nearest preset.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !BLEND_MODES.contains(&self.cursor.blend_mode.as_str()) {
            return Err(ConfigError::UnknownBlendMode(self.cursor.blend_mode));
        }
        if !BAR_POSITIONS.contains(&self.scroll_progress.position.as_str()) {
            return Err(ConfigError::UnknownPosition(self.scroll_progress.position));
        }
        if !(self.cursor.size > 0.0) {
            return Err(ConfigError::NotPositive("cursor.size"));
        }
        if self.scroll_progress.height == 0 {
            return Err(ConfigError::NotPositive("scroll_progress.height"));
        }
        if self.table.initial_page_size == 0 {
            return Err(ConfigError::NotPositive("table.initial_page_size"));
        }
        Ok(self)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CursorSection {
    pub color: String,
    pub size: f64,
    pub trail: bool,
    pub blend_mode: String,
}

impl Default for CursorSection {
    fn default() -> Self {
        Self {
            color: "#ccff00".to_string(),
            size: 32.0,
            trail: true,
            blend_mode: "difference".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollProgressSection {
    pub position: String,
    pub color: String,
    pub height: u32,
    pub glow: bool,
    pub z_index: i32,
}

impl Default for ScrollProgressSection {
    fn default() -> Self {
        Self {
            position: "top".to_string(),
            color: "#ccff00".to_string(),
            height: 3,
            glow: true,
            z_index: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TableSection {
    pub initial_page_size: usize,
}

impl Default for TableSection {
    fn default() -> Self {
        Self { initial_page_size: 10 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ToastSection {
    pub timeout_ms: u32,
}

impl Default for ToastSection {
    fn default() -> Self {
        Self { timeout_ms: 5000 }
    }
}

// ===== DEMO DATA =====

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

const DEMO_USERS: [(&str, &str, UserStatus); 23] = [
    ("Alex Chen", "Admin", UserStatus::Active),
    ("Sarah Miller", "Editor", UserStatus::Active),
    ("James Wilson", "Viewer", UserStatus::Inactive),
    ("Emily Davis", "Admin", UserStatus::Active),
    ("Michael Brown", "Editor", UserStatus::Active),
    ("Olivia Taylor", "Viewer", UserStatus::Active),
    ("Daniel Martinez", "Editor", UserStatus::Inactive),
    ("Sophia Anderson", "Admin", UserStatus::Active),
    ("Lucas Thomas", "Viewer", UserStatus::Active),
    ("Mia Jackson", "Editor", UserStatus::Active),
    ("Ethan White", "Viewer", UserStatus::Inactive),
    ("Ava Harris", "Admin", UserStatus::Active),
    ("Noah Martin", "Editor", UserStatus::Active),
    ("Isabella Thompson", "Viewer", UserStatus::Active),
    ("Liam Garcia", "Editor", UserStatus::Inactive),
    ("Charlotte Robinson", "Admin", UserStatus::Active),
    ("Mason Clark", "Viewer", UserStatus::Active),
    ("Amelia Lewis", "Editor", UserStatus::Active),
    ("Logan Lee", "Viewer", UserStatus::Inactive),
    ("Harper Walker", "Admin", UserStatus::Active),
    ("Elijah Hall", "Editor", UserStatus::Active),
    ("Evelyn Allen", "Viewer", UserStatus::Active),
    ("Oliver Young", "Editor", UserStatus::Inactive),
];

/// User records shown in the data table demo. Emails use the lowercased first name.
pub fn demo_users() -> Vec<UserRecord> {
    DEMO_USERS
        .iter()
        .zip(1..)
        .map(|(&(name, role, status), id)| {
            let first_name = name.split_whitespace().next().unwrap_or(name);
            UserRecord {
                id,
                name: name.to_string(),
                email: format!("{}@minimax.io", first_name.to_lowercase()),
                role: role.to_string(),
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_component_defaults() {
        let config = ShowcaseConfig::parse("").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.toast.timeout_ms, 5000);
        assert_eq!(config.scroll_progress.height, 3);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ShowcaseConfig::parse(
            r##"
            [cursor]
            color = "#ff0066"

            [table]
            initial_page_size = 20
            "##,
        )
        .unwrap();
        assert_eq!(config.cursor.color, "#ff0066");
        assert!(config.cursor.trail);
        assert_eq!(config.table.initial_page_size, 20);
    }

    #[test]
    fn page_size_is_kept_as_written() {
        let config = ShowcaseConfig::parse("[table]\ninitial_page_size = 27").unwrap();
        assert_eq!(config.table.initial_page_size, 27);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            ShowcaseConfig::parse("[cursor]\nblend_mode = \"overlay\""),
            Err(ConfigError::UnknownBlendMode("overlay".to_string()))
        );
        assert_eq!(
            ShowcaseConfig::parse("[scroll_progress]\nposition = \"left\""),
            Err(ConfigError::UnknownPosition("left".to_string()))
        );
    }

    #[test]
    fn non_positive_sizes_are_rejected() {
        assert_eq!(
            ShowcaseConfig::parse("[cursor]\nsize = 0.0"),
            Err(ConfigError::NotPositive("cursor.size"))
        );
        assert_eq!(
            ShowcaseConfig::parse("[scroll_progress]\nheight = 0"),
            Err(ConfigError::NotPositive("scroll_progress.height"))
        );
        assert_eq!(
            ShowcaseConfig::parse("[table]\ninitial_page_size = 0"),
            Err(ConfigError::NotPositive("table.initial_page_size"))
        );
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(ShowcaseConfig::parse("[cursor"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn demo_users_start_with_the_known_five() {
        let users = demo_users();
        assert_eq!(users.len(), 23);
        let first: Vec<_> = users[..5].iter().map(|user| (user.id, user.name.as_str(), user.role.as_str())).collect();
        assert_eq!(
            first,
            vec![
                (1, "Alex Chen", "Admin"),
                (2, "Sarah Miller", "Editor"),
                (3, "James Wilson", "Viewer"),
                (4, "Emily Davis", "Admin"),
                (5, "Michael Brown", "Editor"),
            ]
        );
        assert_eq!(users[0].email, "alex@minimax.io");
        assert_eq!(users[2].status, UserStatus::Inactive);
        assert!(users.iter().all(|user| user.email.ends_with("@minimax.io")));
    }
}
