use super::*;

/// Orders stories by score, highest first. Stories with equal scores keep
/// their relative order.
pub(crate) fn rank(mut stories: Vec<Story>) -> Vec<Story> {
  stories.sort_by_key(|story| Reverse(story.score));
  stories
}

/// Saturates at the bounds chrono can represent.
pub(crate) fn utc_from_epoch_seconds(seconds: i64) -> DateTime<Utc> {
  DateTime::from_timestamp(seconds, 0).unwrap_or(if seconds < 0 {
    DateTime::<Utc>::MIN_UTC
  } else {
    DateTime::<Utc>::MAX_UTC
  })
}
