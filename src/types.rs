use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl Message {
    pub fn new(role: Role, content: String, timestamp: f64) -> Self {
        Self {
            role,
            content,
            timestamp,
        }
    }

    pub fn user(content: String, timestamp: f64) -> Self {
        Self::new(Role::User, content, timestamp)
    }

    pub fn assistant(content: String, timestamp: f64) -> Self {
        Self::new(Role::Assistant, content, timestamp)
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Answers collected during first-run setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    pub name: String,
    pub school_level: String,
    pub subjects: Vec<String>,
    pub study_goals: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// A file the user picked. Only the handle's metadata is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyTab {
    Chat,
    Upload,
    Voice,
    Scan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkTab {
    Assistant,
    Tutors,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupsTab {
    Discover,
    MyGroups,
    Schedule,
    Create,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = OnboardingProfile {
            name: "Sam".to_string(),
            school_level: "Graduate School".to_string(),
            subjects: vec!["Art".to_string()],
            study_goals: vec!["Test Preparation".to_string()],
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["schoolLevel"], "Graduate School");
        assert_eq!(json["studyGoals"][0], "Test Preparation");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(Theme::Light.toggled().is_dark());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_message_roles() {
        assert!(Message::assistant("hi".to_string(), 0.0).is_assistant());
        assert!(!Message::user("hi".to_string(), 0.0).is_assistant());
    }
}
