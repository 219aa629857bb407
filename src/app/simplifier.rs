use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy - Simple explanations",
            Difficulty::Medium => "Medium - Balanced approach",
            Difficulty::Advanced => "Advanced - Detailed analysis",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(SiteError::ValidationError {
                message: format!("unknown difficulty '{}', expected easy, medium or advanced", other),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedOutput {
    pub summary: String,
    pub key_points: Vec<String>,
    pub explanation: String,
}

/// Study Simplifier 示範工具。
///
/// 不做任何文字分析：等待固定時間後回傳套上難度的固定文字。
#[derive(Debug, Clone)]
pub struct StudySimplifier {
    delay: Duration,
}

impl Default for StudySimplifier {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl StudySimplifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn simplify(&self, input: &str, difficulty: Difficulty) -> Result<SimplifiedOutput> {
        if input.trim().is_empty() {
            return Err(SiteError::ValidationError {
                message: "Enter a topic or some text to simplify".to_string(),
            });
        }

        tracing::debug!(
            "Simplifying {} chars at {} difficulty",
            input.chars().count(),
            difficulty
        );
        tokio::time::sleep(self.delay).await;

        Ok(canned_output(difficulty))
    }
}

fn canned_output(difficulty: Difficulty) -> SimplifiedOutput {
    SimplifiedOutput {
        summary: format!(
            "Simplified version of your content at {} difficulty level. This tool helps break down complex topics into digestible information.",
            difficulty
        ),
        key_points: [
            "Main concept identified and clarified",
            "Complex terminology explained in simple terms",
            "Practical examples provided for better understanding",
            "Step-by-step breakdown of the topic",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        explanation: format!(
            "Based on your input and selected difficulty level ({}), here's a comprehensive breakdown: The content has been analyzed and restructured to match your learning needs. Key concepts have been identified and explained using appropriate language complexity. This approach ensures better retention and understanding of the material.",
            difficulty
        ),
    }
}
