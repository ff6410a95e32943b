//! Task kinds and difficulty levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The content-generation modes supported by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Summarize,
    Flashcards,
    Questions,
    Mindmap,
    StudyPlan,
}

impl TaskKind {
    /// Every task kind, in registry order.
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Summarize,
        TaskKind::Flashcards,
        TaskKind::Questions,
        TaskKind::Mindmap,
        TaskKind::StudyPlan,
    ];

    /// Wire name of the task kind (the inbound `type` field).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Flashcards => "flashcards",
            Self::Questions => "questions",
            Self::Mindmap => "mindmap",
            Self::StudyPlan => "study-plan",
        }
    }

    /// Whether the model is asked for a JSON array of objects.
    pub fn expects_structured(&self) -> bool {
        matches!(self, Self::Flashcards | Self::Questions)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown task type: {}", s))
    }
}

/// Difficulty level for generated quiz questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(format!(
                "Invalid difficulty '{}' (use easy, medium, or hard)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_kind_round_trips_wire_names() {
        for kind in TaskKind::ALL {
            assert_eq!(kind.as_str().parse::<TaskKind>(), Ok(kind));
        }
        assert_eq!("study-plan".parse::<TaskKind>(), Ok(TaskKind::StudyPlan));
    }

    #[test]
    fn test_task_kind_rejects_unknown() {
        assert!("translate".parse::<TaskKind>().is_err());
        assert!("Summarize".parse::<TaskKind>().is_err());
        assert!("study_plan".parse::<TaskKind>().is_err());
    }

    #[test]
    fn test_structured_kinds() {
        assert!(TaskKind::Flashcards.expects_structured());
        assert!(TaskKind::Questions.expects_structured());
        assert!(!TaskKind::Summarize.expects_structured());
        assert!(!TaskKind::Mindmap.expects_structured());
        assert!(!TaskKind::StudyPlan.expects_structured());
    }

    #[test]
    fn test_task_kind_serde_matches_wire_names() {
        let json = serde_json::to_string(&TaskKind::StudyPlan).unwrap();
        assert_eq!(json, "\"study-plan\"");
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
