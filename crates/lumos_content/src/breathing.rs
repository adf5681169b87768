//! Breathing pattern catalog. Pacing/animation belongs to the UI layer;
//! this is only the data the UI paces against.

use lumos_core::locale::Language;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreathingPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    /// Seconds per step, parallel to `steps`.
    pub durations: &'static [u32],
    pub benefits: &'static str,
}

impl BreathingPattern {
    /// Length of one full breath cycle in seconds.
    pub fn cycle_seconds(&self) -> u32 {
        self.durations.iter().sum()
    }
}

const PATTERNS_EN: &[BreathingPattern] = &[
    BreathingPattern {
        id: "4-7-8",
        name: "4-7-8 Breathing",
        description: "Inhale for 4, hold for 7, exhale for 8 seconds",
        steps: &["Inhale", "Hold", "Exhale"],
        durations: &[4, 7, 8],
        benefits: "Reduces anxiety and promotes sleep",
    },
    BreathingPattern {
        id: "box",
        name: "Box Breathing",
        description: "Inhale, hold, exhale, hold - each for 4 seconds",
        steps: &["Inhale", "Hold", "Exhale", "Hold"],
        durations: &[4, 4, 4, 4],
        benefits: "Improves focus and reduces stress",
    },
    BreathingPattern {
        id: "triangle",
        name: "Triangle Breathing",
        description: "Inhale for 4, hold for 4, exhale for 4 seconds",
        steps: &["Inhale", "Hold", "Exhale"],
        durations: &[4, 4, 4],
        benefits: "Simple technique for beginners",
    },
];

const PATTERNS_HI: &[BreathingPattern] = &[
    BreathingPattern {
        id: "4-7-8",
        name: "4-7-8 सांस लेना",
        description: "4 सेकंड सांस लें, 7 सेकंड रोकें, 8 सेकंड छोड़ें",
        steps: &["सांस लें", "रोकें", "छोड़ें"],
        durations: &[4, 7, 8],
        benefits: "चिंता कम करता है और नींद में सहायक है",
    },
    BreathingPattern {
        id: "box",
        name: "बॉक्स ब्रीदिंग",
        description: "सांस लें, रोकें, छोड़ें, रोकें - हर एक 4 सेकंड के लिए",
        steps: &["सांस लें", "रोकें", "छोड़ें", "रोकें"],
        durations: &[4, 4, 4, 4],
        benefits: "फोकस बढ़ाता है और तनाव कम करता है",
    },
    BreathingPattern {
        id: "triangle",
        name: "त्रिकोण सांस",
        description: "4 सेकंड सांस लें, 4 सेकंड रोकें, 4 सेकंड छोड़ें",
        steps: &["सांस लें", "रोकें", "छोड़ें"],
        durations: &[4, 4, 4],
        benefits: "शुरुआती लोगों के लिए सरल तकनीक",
    },
];

pub fn patterns(language: Language) -> &'static [BreathingPattern] {
    match language {
        Language::En => PATTERNS_EN,
        Language::Hi => PATTERNS_HI,
    }
}

pub fn find(id: &str, language: Language) -> Option<BreathingPattern> {
    patterns(language).iter().find(|p| p.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_and_durations_stay_parallel() {
        for language in Language::ALL {
            for pattern in patterns(language) {
                assert_eq!(pattern.steps.len(), pattern.durations.len(), "{}", pattern.id);
            }
        }
    }

    #[test]
    fn test_cycle_seconds() {
        let p = find("4-7-8", Language::En).unwrap();
        assert_eq!(p.cycle_seconds(), 19);
        let p = find("box", Language::En).unwrap();
        assert_eq!(p.cycle_seconds(), 16);
    }

    #[test]
    fn test_find_unknown_id() {
        assert!(find("square", Language::En).is_none());
    }
}
