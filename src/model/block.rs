use serde::{Deserialize, Serialize};

/// Single unit of lesson content: a kind-specific payload plus the shared
/// delivery configuration. Every block is renderable; whether it is
/// scoreable or timeable depends on the content kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub content: BlockContent,
    #[serde(default)]
    pub config: BlockConfig,
}

/// Content payload, tagged by `type`. Consumers match exhaustively; there
/// is no untyped bag of optional fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum BlockContent {
    Text {
        body: String,
    },
    McqSingle {
        prompt: String,
        options: Vec<McqOption>,
    },
    McqMulti {
        prompt: String,
        options: Vec<McqOption>,
    },
    FillBlank {
        text: String,
        answers: Vec<String>,
    },
    CueCardSpeaking {
        prompt: String,
        cue_points: Vec<String>,
        sample_answer: Option<String>,
    },
    AudioClip {
        asset_name: String,
        transcript: Option<String>,
    },
}

impl BlockContent {
    pub fn kind(&self) -> &'static str {
        match self {
            BlockContent::Text { .. } => "text",
            BlockContent::McqSingle { .. } => "mcq_single",
            BlockContent::McqMulti { .. } => "mcq_multi",
            BlockContent::FillBlank { .. } => "fill_blank",
            BlockContent::CueCardSpeaking { .. } => "cue_card_speaking",
            BlockContent::AudioClip { .. } => "audio_clip",
        }
    }

    /// Blocks that produce a score when answered.
    pub fn is_scoreable(&self) -> bool {
        matches!(
            self,
            BlockContent::McqSingle { .. }
                | BlockContent::McqMulti { .. }
                | BlockContent::FillBlank { .. }
        )
    }

    /// Blocks that can run under a countdown timer.
    pub fn is_timeable(&self) -> bool {
        matches!(
            self,
            BlockContent::McqSingle { .. }
                | BlockContent::McqMulti { .. }
                | BlockContent::FillBlank { .. }
                | BlockContent::CueCardSpeaking { .. }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct McqOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockConfig {
    #[serde(default)]
    pub timer_seconds: Option<u32>,
    #[serde(default)]
    pub max_attempts: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub ai_enabled: bool,
    #[serde(default)]
    pub speaking: Option<SpeakingConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpeakingConfig {
    pub min_seconds: u32,
    pub max_seconds: u32,
    #[serde(default)]
    pub auto_advance: bool,
}
