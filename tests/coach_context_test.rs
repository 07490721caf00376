// ABOUTME: Unit tests for the voice agent context block builder
// ABOUTME: Pins greeting, block presence and omission, rounding, and insight truncation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yachai Wellness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use yachai_intelligence::{CoachContextBuilder, EmotionContext, SkinContext};

fn emotion(label: &str) -> EmotionContext {
    EmotionContext {
        dominant_emotion: label.to_owned(),
        valence: 0.62,
        arousal: 0.35,
        confidence: 0.87,
    }
}

#[test]
fn test_full_context_contains_all_blocks() {
    let context = CoachContextBuilder::new()
        .with_first_name("Giulia")
        .with_emotion(emotion("felicità"))
        .with_skin(SkinContext {
            overall_score: 78.0,
            hydration_score: 64.0,
        })
        .with_insights(vec![
            "sonno irregolare".to_owned(),
            "stress serale".to_owned(),
        ])
        .build();

    assert!(context.starts_with("Ciao Giulia!"));
    assert!(context.contains("STATO EMOTIVO ATTUALE"));
    assert!(context.contains("Emozione dominante: felicità"));
    assert!(context.contains("Valence: 0.62"));
    assert!(context.contains("Confidenza: 87.0%"));
    assert!(context.contains("STATO PELLE ATTUALE"));
    assert!(context.contains("Punteggio complessivo: 78/100"));
    assert!(context.contains("Idratazione: 64/100"));
    assert!(context.contains("INSIGHTS UTENTE"));
    assert!(context.contains("sonno irregolare, stress serale"));
}

#[test]
fn test_without_name_greets_generically() {
    let context = CoachContextBuilder::new().build();
    assert_eq!(context, "Ciao!");
}

#[test]
fn test_empty_emotion_label_suppresses_block() {
    let context = CoachContextBuilder::new().with_emotion(emotion("")).build();
    assert!(!context.contains("STATO EMOTIVO ATTUALE"));
}

#[test]
fn test_insights_truncated_to_three() {
    let context = CoachContextBuilder::new()
        .with_insights(vec![
            "uno".to_owned(),
            "due".to_owned(),
            "tre".to_owned(),
            "quattro".to_owned(),
        ])
        .build();

    assert!(context.contains("uno, due, tre"));
    assert!(!context.contains("quattro"));
}

#[test]
fn test_skin_scores_rounded_to_integers() {
    let context = CoachContextBuilder::new()
        .with_skin(SkinContext {
            overall_score: 77.6,
            hydration_score: 63.2,
        })
        .build();

    assert!(context.contains("Punteggio complessivo: 78/100"));
    assert!(context.contains("Idratazione: 63/100"));
}
