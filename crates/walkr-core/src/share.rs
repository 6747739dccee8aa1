//! Share links for generated workouts.
//!
//! The share text itself is built by the generator; this module only wraps
//! it into URLs for the platforms that accept text through the web.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, ValidationError};
use crate::generator::GeneratedWorkout;

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Twitter,
    Instagram,
    Tiktok,
}

impl std::str::FromStr for SharePlatform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(SharePlatform::Twitter),
            "instagram" | "insta" => Ok(SharePlatform::Instagram),
            "tiktok" => Ok(SharePlatform::Tiktok),
            other => Err(ValidationError::InvalidValue {
                field: "platform".into(),
                message: format!("unknown platform '{other}'"),
            }),
        }
    }
}

/// How to share on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShareAction {
    /// Open this URL.
    Open { url: String },
    /// The platform has no web text share; copy the text and paste it there.
    CopyText { text: String },
}

/// Public page for a saved workout: `{base_url}/workout/{id}`.
pub fn workout_url(base_url: &str, id: &str) -> Result<Url> {
    let raw = format!("{}/workout/{}", base_url.trim_end_matches('/'), id);
    parse(&raw, "share.base_url")
}

/// Tweet composer pre-filled with `text`.
pub fn twitter_intent(text: &str) -> Result<Url> {
    let mut url = parse(TWITTER_INTENT, "twitter intent")?;
    url.query_pairs_mut().append_pair("text", text);
    Ok(url)
}

fn parse(raw: &str, field: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| {
        ValidationError::InvalidValue {
            field: field.into(),
            message: format!("{raw}: {e}"),
        }
        .into()
    })
}

/// Share text plus optional extra hashtags appended on their own paragraph.
pub fn decorated_text(workout: &GeneratedWorkout, hashtags: &[String]) -> String {
    if hashtags.is_empty() {
        return workout.share_text.clone();
    }
    format!("{}\n\n{}", workout.share_text, hashtags.join(" "))
}

pub fn share_action(
    workout: &GeneratedWorkout,
    platform: SharePlatform,
    hashtags: &[String],
) -> Result<ShareAction> {
    let text = decorated_text(workout, hashtags);
    Ok(match platform {
        SharePlatform::Twitter => ShareAction::Open {
            url: twitter_intent(&text)?.to_string(),
        },
        SharePlatform::Instagram | SharePlatform::Tiktok => ShareAction::CopyText { text },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_workout, WorkoutRequest};

    #[test]
    fn workout_url_tolerates_trailing_slash() {
        let a = workout_url("https://walkr.example", "abc123").unwrap();
        let b = workout_url("https://walkr.example/", "abc123").unwrap();
        assert_eq!(a.as_str(), "https://walkr.example/workout/abc123");
        assert_eq!(a, b);
    }

    #[test]
    fn workout_url_rejects_garbage_base() {
        assert!(workout_url("not a url", "abc").is_err());
    }

    #[test]
    fn twitter_intent_encodes_text() {
        let url = twitter_intent("Line one\n#Walkr & more").unwrap();
        assert!(url.as_str().starts_with("https://twitter.com/intent/tweet?text="));
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, "Line one\n#Walkr & more");
    }

    #[test]
    fn instagram_and_tiktok_copy_text() {
        let workout = generate_workout(&WorkoutRequest::new("Cardio", 10, "Bodyweight")).unwrap();
        let action = share_action(&workout, SharePlatform::Instagram, &[]).unwrap();
        assert_eq!(
            action,
            ShareAction::CopyText {
                text: workout.share_text.clone()
            }
        );
        match share_action(&workout, SharePlatform::Twitter, &["#Fitness".into()]).unwrap() {
            ShareAction::Open { url } => assert!(url.contains("twitter.com")),
            other => panic!("expected Open, got {other:?}"),
        }
    }

    #[test]
    fn platform_parsing() {
        assert_eq!("X".parse::<SharePlatform>().unwrap(), SharePlatform::Twitter);
        assert!("myspace".parse::<SharePlatform>().is_err());
    }
}
