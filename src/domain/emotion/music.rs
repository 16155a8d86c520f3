//! Emotion to background music mapping.

use serde::Serialize;

use super::EmotionType;

/// Public path prefix every audio asset is served under.
pub const AUDIO_PREFIX: &str = "/audio/";

/// Background tracks played during the rebirth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MusicTrack {
    /// "今年也算顺顺利利"
    ShunLi,
    /// "慢慢迎着新年"
    ManMan,
    /// "热闹已经在路上"
    ReNao,
    /// "回家这件小事"
    HuiJia,
}

impl MusicTrack {
    /// Every distinct track.
    pub const ALL: [MusicTrack; 4] = [
        MusicTrack::ShunLi,
        MusicTrack::ManMan,
        MusicTrack::ReNao,
        MusicTrack::HuiJia,
    ];

    /// Track played for an emotion.
    pub fn for_emotion(emotion: EmotionType) -> Self {
        match emotion {
            EmotionType::Stress => MusicTrack::ShunLi,
            EmotionType::Regret | EmotionType::Lost => MusicTrack::ManMan,
            EmotionType::Anger => MusicTrack::ReNao,
            EmotionType::Default => MusicTrack::HuiJia,
        }
    }

    /// Track played for a raw, possibly unrecognized, label.
    pub fn for_label(label: &str) -> Self {
        Self::for_emotion(EmotionType::from_label(label))
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            MusicTrack::ShunLi => "shun_li.mp3",
            MusicTrack::ManMan => "man_man.mp3",
            MusicTrack::ReNao => "re_nao.mp3",
            MusicTrack::HuiJia => "hui_jia.mp3",
        }
    }

    /// Public path of the track, e.g. `/audio/hui_jia.mp3`.
    pub fn public_path(&self) -> String {
        format!("{}{}", AUDIO_PREFIX, self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_emotion_has_a_track() {
        assert_eq!(MusicTrack::for_emotion(EmotionType::Stress).file_name(), "shun_li.mp3");
        assert_eq!(MusicTrack::for_emotion(EmotionType::Regret).file_name(), "man_man.mp3");
        assert_eq!(MusicTrack::for_emotion(EmotionType::Anger).file_name(), "re_nao.mp3");
        assert_eq!(MusicTrack::for_emotion(EmotionType::Lost).file_name(), "man_man.mp3");
        assert_eq!(MusicTrack::for_emotion(EmotionType::Default).file_name(), "hui_jia.mp3");
    }

    #[test]
    fn unrecognized_label_uses_default_track() {
        assert_eq!(MusicTrack::for_label("euphoria"), MusicTrack::HuiJia);
        assert_eq!(MusicTrack::for_label("").public_path(), "/audio/hui_jia.mp3");
    }

    #[test]
    fn public_path_carries_prefix() {
        for track in MusicTrack::ALL {
            assert!(track.public_path().starts_with(AUDIO_PREFIX));
        }
    }
}
