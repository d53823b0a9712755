use serde::Serialize;
use std::fmt;

/// Letter grade, ordered from worst (`F`) to best (`APlus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

/// Inclusive lower bounds, highest first. Anything below the last entry is `F`.
const GRADE_THRESHOLDS: [(i32, Grade); 10] = [
    (800, Grade::APlus),
    (750, Grade::A),
    (700, Grade::AMinus),
    (650, Grade::BPlus),
    (600, Grade::B),
    (550, Grade::BMinus),
    (500, Grade::CPlus),
    (450, Grade::C),
    (400, Grade::CMinus),
    (350, Grade::D),
];

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::F => "F",
            Grade::D => "D",
            Grade::CMinus => "C-",
            Grade::C => "C",
            Grade::CPlus => "C+",
            Grade::BMinus => "B-",
            Grade::B => "B",
            Grade::BPlus => "B+",
            Grade::AMinus => "A-",
            Grade::A => "A",
            Grade::APlus => "A+",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade for a score. Total over every integer; anything under 350 is `F`.
pub fn grade_for(score: i32) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for(800), Grade::APlus);
        assert_eq!(grade_for(799), Grade::A);
        assert_eq!(grade_for(300), Grade::F);
        assert_eq!(grade_for(0), Grade::F);
        assert_eq!(grade_for(850), Grade::APlus);
    }

    #[test]
    fn test_every_threshold_is_inclusive() {
        for (min, grade) in GRADE_THRESHOLDS {
            assert_eq!(grade_for(min), grade, "at {}", min);
            assert!(grade_for(min - 1) < grade, "below {}", min);
        }
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(grade_for(i32::MIN), Grade::F);
        assert_eq!(grade_for(-50), Grade::F);
        assert_eq!(grade_for(349), Grade::F);
        assert_eq!(grade_for(10_000), Grade::APlus);
        assert_eq!(grade_for(i32::MAX), Grade::APlus);
    }

    #[test]
    fn test_grade_monotonic() {
        let mut previous = grade_for(0);
        for score in 1..=900 {
            let grade = grade_for(score);
            assert!(grade >= previous, "grade dropped at {}", score);
            previous = grade;
        }
    }

    #[test]
    fn test_grade_labels() {
        assert_eq!(Grade::BPlus.to_string(), "B+");
        assert_eq!(Grade::CMinus.to_string(), "C-");
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
    }
}
