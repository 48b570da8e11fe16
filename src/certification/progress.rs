use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{EmployeeProfile, LevelRequirement};
use super::grade::GradeScale;

pub const EVALUATION_WEIGHT: f64 = 0.30;
pub const TRAINING_WEIGHT: f64 = 0.30;
pub const SKILLS_WEIGHT: f64 = 0.25;
pub const EXPERIENCE_WEIGHT: f64 = 0.15;

const EVALUATION_BASELINE: f64 = 50.0;

/// Completion percentages in `[0, 100]`, independent of the pass/fail verdict.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressScores {
    pub evaluation: f64,
    pub training: f64,
    pub skills: f64,
    pub experience: f64,
    pub overall: f64,
}

/// Score a profile against an already-effective requirement (job override applied).
pub fn progress(
    profile: &EmployeeProfile,
    requirement: &LevelRequirement,
    grades: &GradeScale,
) -> ProgressScores {
    let evaluation = clamp(evaluation_progress(profile, requirement, grades));
    let training = clamp(coverage(
        &profile.completed_courses,
        &requirement.required_courses,
    ));
    let skills = clamp(coverage(&profile.skills, &requirement.required_skills));
    let experience = clamp(experience_progress(profile, requirement));

    let overall = evaluation * EVALUATION_WEIGHT
        + training * TRAINING_WEIGHT
        + skills * SKILLS_WEIGHT
        + experience * EXPERIENCE_WEIGHT;

    ProgressScores {
        evaluation: round_to_tenth(evaluation),
        training: round_to_tenth(training),
        skills: round_to_tenth(skills),
        experience: round_to_tenth(experience),
        overall: round_to_tenth(clamp(overall)),
    }
}

fn evaluation_progress(
    profile: &EmployeeProfile,
    requirement: &LevelRequirement,
    grades: &GradeScale,
) -> f64 {
    let Some(recent) = &profile.recent_evaluation else {
        return 0.0;
    };

    if grades.satisfies(&recent.overall_grade, &requirement.min_evaluation_grade) {
        return 100.0;
    }

    let required = grades.ordinal(&requirement.min_evaluation_grade);
    let ratio = if required > 0 {
        (f64::from(grades.ordinal(&recent.overall_grade)) / f64::from(required)).clamp(0.0, 1.0)
    } else {
        0.0
    };

    EVALUATION_BASELINE + (100.0 - EVALUATION_BASELINE) * ratio
}

fn coverage(held: &BTreeSet<String>, required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 100.0;
    }

    let covered = required.intersection(held).count();
    covered as f64 / required.len() as f64 * 100.0
}

fn experience_progress(profile: &EmployeeProfile, requirement: &LevelRequirement) -> f64 {
    if requirement.min_years_in_level <= 0.0 {
        return 100.0;
    }

    (profile.years_in_current_level / requirement.min_years_in_level * 100.0).min(100.0)
}

fn clamp(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
