//! Deterministic keyword classifier used whenever the upstream model is
//! unavailable.
//!
//! Keyword groups are scanned in a fixed priority order and the first group
//! with a substring hit wins. Each label carries one canned script (healing
//! text, keyword, lighting), so the output shape matches an upstream reply.

use super::{AnalysisResult, EmotionType};

/// (label, trigger substrings) in priority order.
const KEYWORD_GROUPS: &[(EmotionType, &[&str])] = &[
    (EmotionType::Stress, &["焦虑", "压力", "累"]),
    (EmotionType::Regret, &["遗憾", "难过", "失恋"]),
    (EmotionType::Anger, &["愤怒", "不公", "气"]),
    (EmotionType::Lost, &["迷茫", "不知道"]),
];

/// Canned reply for one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CannedScript {
    pub healing_text: &'static str,
    pub soul_keyword: &'static str,
    pub lighting_coefficient: f64,
}

/// Returns the canned script for a label.
pub fn canned_script(emotion: EmotionType) -> CannedScript {
    match emotion {
        EmotionType::Stress => CannedScript {
            healing_text: "那些压垮你的重力，最终会变成你脚下的基岩。站上去，风会小很多。",
            soul_keyword: "基岩",
            lighting_coefficient: 0.7,
        },
        EmotionType::Regret => CannedScript {
            healing_text: "那些没能如愿的遗憾，像是缝进骨缝里的旧针脚。它们不再让你疼，但让你在下一次起风时，有了更厚实的底色。",
            soul_keyword: "底色",
            lighting_coefficient: 0.4,
        },
        EmotionType::Anger => CannedScript {
            healing_text: "被火烧过的地方，土壤总是最肥沃的。你的愤怒不是毁灭，是一场等待发芽的春耕。",
            soul_keyword: "春耕",
            lighting_coefficient: 0.9,
        },
        EmotionType::Lost => CannedScript {
            healing_text: "雾气并不是终点，而是导航失灵时的保护色。关掉雷达，听听水流的声音。",
            soul_keyword: "听流",
            lighting_coefficient: 0.6,
        },
        EmotionType::Default => CannedScript {
            healing_text: "时间不是流逝的，它只是换了一种方式，像年轮一样，由于你的经历而增加了厚度。",
            soul_keyword: "年轮",
            lighting_coefficient: 0.5,
        },
    }
}

/// Keyword-substring emotion classifier. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackClassifier;

impl FallbackClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Detects the label for `text`; `Default` when no group matches.
    pub fn detect(&self, text: &str) -> EmotionType {
        KEYWORD_GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(emotion, _)| *emotion)
            .unwrap_or_default()
    }

    /// Classifies `text` and assembles the canned result for its label.
    pub fn classify(&self, text: &str) -> AnalysisResult {
        let emotion = self.detect(text);
        let script = canned_script(emotion);
        AnalysisResult::new(
            emotion,
            script.healing_text,
            script.soul_keyword,
            script.lighting_coefficient,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pressure_classifies_as_stress() {
        let result = FallbackClassifier::new().classify("最近工作压力好大");

        assert_eq!(result.emotion_type, EmotionType::Stress);
        assert_eq!(result.soul_keyword, "基岩");
        assert_eq!(
            result.healing_text,
            "那些压垮你的重力，最终会变成你脚下的基岩。站上去，风会小很多。"
        );
        assert_eq!(result.lighting_coefficient, 0.7);
        assert_eq!(result.music_file, "/audio/shun_li.mp3");
    }

    #[test]
    fn breakup_classifies_as_regret() {
        let result = FallbackClassifier::new().classify("今年失恋了");

        assert_eq!(result.emotion_type, EmotionType::Regret);
        assert_eq!(result.soul_keyword, "底色");
        assert_eq!(result.music_file, "/audio/man_man.mp3");
    }

    #[test]
    fn unfairness_classifies_as_anger() {
        let classifier = FallbackClassifier::new();
        assert_eq!(classifier.detect("这太不公平了"), EmotionType::Anger);
    }

    #[test]
    fn uncertainty_classifies_as_lost() {
        let result = FallbackClassifier::new().classify("我不知道未来该去哪");

        assert_eq!(result.emotion_type, EmotionType::Lost);
        assert_eq!(result.soul_keyword, "听流");
    }

    #[test]
    fn no_keyword_classifies_as_default() {
        let result = FallbackClassifier::new().classify("今天吃了一碗面");

        assert_eq!(result.emotion_type, EmotionType::Default);
        assert_eq!(result.soul_keyword, "年轮");
        assert_eq!(result.lighting_coefficient, 0.5);
        assert_eq!(result.music_file, "/audio/hui_jia.mp3");
    }

    #[test]
    fn earlier_group_wins_when_several_match() {
        // "累" (stress) outranks "失恋" (regret) and "气" (anger)
        let classifier = FallbackClassifier::new();
        assert_eq!(classifier.detect("失恋让我很累，也很生气"), EmotionType::Stress);
        assert_eq!(classifier.detect("失恋让我很生气"), EmotionType::Regret);
    }

    #[test]
    fn every_canned_keyword_is_two_characters() {
        for emotion in EmotionType::ALL {
            assert_eq!(canned_script(emotion).soul_keyword.chars().count(), 2);
        }
    }

    proptest! {
        #[test]
        fn classify_always_yields_consistent_result(text in "\\PC*") {
            let result = FallbackClassifier::new().classify(&text);
            let script = canned_script(result.emotion_type);

            prop_assert!(EmotionType::ALL.contains(&result.emotion_type));
            prop_assert!(!result.music_file.is_empty());
            prop_assert_eq!(result.soul_keyword.as_str(), script.soul_keyword);
            prop_assert!((0.0..=1.0).contains(&result.lighting_coefficient));
        }

        #[test]
        fn classify_is_deterministic(text in "\\PC*") {
            let classifier = FallbackClassifier::new();
            prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
        }
    }
}
