//! Configuration loading for the myeongham terminal card.
//!
//! Reads `config.toml` from the platform config directory. The card is
//! decorative, so a missing or broken config never stops it from starting:
//! every failure falls back to the built-in sample profile.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use myeongham_core::{AnimationSpeed, BackgroundStyle, ColorTheme};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Who the card is about.
    pub profile: Profile,
    /// How the card looks.
    pub appearance: Appearance,
}

/// The person shown on the card.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Short form rendered as large letter art on the hero view.
    pub display_name: String,
    /// Job title shown under the name.
    pub title: String,
    /// One-liner typed out on the hero view.
    pub tagline: String,
    /// Where the person is based.
    pub location: String,
    /// Contact email.
    pub email: String,
    /// Biography lines for the about section.
    pub about: Vec<String>,
    /// Bullet points for the about section.
    pub highlights: Vec<String>,
    /// External links for the contact section.
    pub links: Vec<Link>,
    /// Skills with proficiency levels.
    pub skills: Vec<Skill>,
    /// Projects to show off.
    pub projects: Vec<Project>,
}

/// A labeled external link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A skill with a proficiency level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent. Values above 100 are treated as 100.
    pub level: u8,
}

impl Skill {
    /// Proficiency clamped to 0-100.
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

/// A project entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Technology tags.
    pub tech: Vec<String>,
}

/// Appearance settings.
///
/// Stored as plain strings so this crate stays the only one with a serde
/// dependency; the typed accessors resolve them through the core enums and
/// fall back to defaults for unknown names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Background style name ("starfield", "code-rain", "none").
    pub background: String,
    /// Animation speed name ("slow", "medium", "fast").
    pub speed: String,
    /// Accent color theme name.
    pub theme: String,
}

impl Appearance {
    /// Background style, defaulting on unknown names.
    pub fn background(&self) -> BackgroundStyle {
        BackgroundStyle::parse(&self.background).unwrap_or_default()
    }

    /// Animation speed, defaulting on unknown names.
    pub fn speed(&self) -> AnimationSpeed {
        AnimationSpeed::parse(&self.speed).unwrap_or_default()
    }

    /// Color theme, defaulting on unknown names.
    pub fn theme(&self) -> ColorTheme {
        ColorTheme::parse(&self.theme).unwrap_or_default()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Han Mirae".to_string(),
            display_name: "MIRAE".to_string(),
            title: "Systems Programmer".to_string(),
            tagline: "I build quiet, reliable tools for loud, unreliable machines.".to_string(),
            location: "Seoul, KR".to_string(),
            email: "mirae@example.com".to_string(),
            about: vec![
                "Systems programmer with a soft spot for terminals.".to_string(),
                "I care about software that starts fast, fails loudly, and reads well.".to_string(),
            ],
            highlights: vec![
                "Ships small tools that do one thing".to_string(),
                "Writes documentation people actually read".to_string(),
                "Debugs with printf and patience".to_string(),
            ],
            links: vec![Link {
                label: "web".to_string(),
                url: "https://example.com".to_string(),
            }],
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    level: 90,
                },
                Skill {
                    name: "Terminal UIs".to_string(),
                    level: 85,
                },
                Skill {
                    name: "Systems Design".to_string(),
                    level: 75,
                },
                Skill {
                    name: "Technical Writing".to_string(),
                    level: 70,
                },
            ],
            projects: vec![
                Project {
                    name: "sigil".to_string(),
                    description: "Structure-aware hex viewer for the terminal.".to_string(),
                    tech: vec!["rust".to_string(), "ratatui".to_string()],
                },
                Project {
                    name: "mokcha".to_string(),
                    description: "Offline-first feed reader that lives in a tmux pane.".to_string(),
                    tech: vec!["rust".to_string(), "sqlite".to_string()],
                },
            ],
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: BackgroundStyle::default().as_str().to_string(),
            speed: AnimationSpeed::default().as_str().to_string(),
            theme: ColorTheme::default().as_str().to_string(),
        }
    }
}

impl Config {
    /// Load the config from the platform config directory.
    ///
    /// Falls back to the defaults when the file is missing or unparsable.
    pub fn load() -> Self {
        Self::path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|text| Self::from_toml(&text).ok())
            .unwrap_or_default()
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Platform path of `config.toml`, if a home directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "myeongham").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
