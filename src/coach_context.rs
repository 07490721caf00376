// ABOUTME: Builds the Italian context block handed to the wellness voice agent
// ABOUTME: Greeting, current emotion state, current skin state, and key user insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

//! Context block assembly for the voice coaching agent.
//!
//! The agent's system prompt is extended with the user's current state so
//! its answers stay personal. This module only assembles the text; the
//! agent session itself lives outside this crate.

use serde::{Deserialize, Serialize};

/// Current emotional state of the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionContext {
    /// Dominant emotion label; an empty label suppresses the block
    pub dominant_emotion: String,
    /// Valence, -1 (negative) to +1 (positive)
    pub valence: f64,
    /// Arousal, -1 (calm) to +1 (excited)
    pub arousal: f64,
    /// Classifier confidence, 0 to 1
    pub confidence: f64,
}

/// Current skin analysis state of the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinContext {
    /// Overall skin score, 0-100
    pub overall_score: f64,
    /// Hydration score, 0-100
    pub hydration_score: f64,
}

/// Assembles the Italian context block for the voice agent.
#[derive(Debug, Clone, Default)]
pub struct CoachContextBuilder {
    first_name: Option<String>,
    emotion: Option<EmotionContext>,
    skin: Option<SkinContext>,
    insights: Vec<String>,
}

impl CoachContextBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            first_name: None,
            emotion: None,
            skin: None,
            insights: Vec::new(),
        }
    }

    /// Set the user's first name, used in the greeting line.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Attach the current emotional state.
    #[must_use]
    pub fn with_emotion(mut self, emotion: EmotionContext) -> Self {
        self.emotion = Some(emotion);
        self
    }

    /// Attach the current skin state.
    #[must_use]
    pub const fn with_skin(mut self, skin: SkinContext) -> Self {
        self.skin = Some(skin);
        self
    }

    /// Attach the user's insight tags; only the first three are rendered.
    #[must_use]
    pub fn with_insights(mut self, insights: Vec<String>) -> Self {
        self.insights = insights;
        self
    }

    /// Render the context block.
    #[must_use]
    pub fn build(self) -> String {
        let mut sections = Vec::new();

        sections.push(self.first_name.as_ref().map_or_else(
            || "Ciao!".to_owned(),
            |name| format!("Ciao {name}!"),
        ));

        if let Some(emotion) = &self.emotion {
            if !emotion.dominant_emotion.is_empty() {
                sections.push(format!(
                    "STATO EMOTIVO ATTUALE:\n\
                     - Emozione dominante: {}\n\
                     - Valence: {:.2} (da -1 negativo a +1 positivo)\n\
                     - Arousal: {:.2} (da -1 calmo a +1 eccitato)\n\
                     - Confidenza: {:.1}%",
                    emotion.dominant_emotion,
                    emotion.valence,
                    emotion.arousal,
                    emotion.confidence * 100.0,
                ));
            }
        }

        if let Some(skin) = self.skin {
            sections.push(format!(
                "STATO PELLE ATTUALE:\n\
                 - Punteggio complessivo: {:.0}/100\n\
                 - Idratazione: {:.0}/100",
                skin.overall_score, skin.hydration_score,
            ));
        }

        if !self.insights.is_empty() {
            let key_indicators: Vec<&str> = self
                .insights
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            sections.push(format!(
                "INSIGHTS UTENTE:\n- Indicatori chiave: {}",
                key_indicators.join(", "),
            ));
        }

        sections.join("\n\n")
    }
}
