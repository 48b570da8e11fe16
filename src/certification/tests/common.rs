use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::certification::domain::{
    EmployeeProfile, EvaluationRecord, JobSpecificOverride, LevelRequirement, SkillProficiency,
};
use crate::certification::EligibilityEngine;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::default()
}

pub(super) fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn grades(items: &[&str]) -> Vec<EvaluationRecord> {
    items.iter().map(|grade| EvaluationRecord::new(*grade)).collect()
}

pub(super) fn senior_requirement() -> LevelRequirement {
    LevelRequirement {
        level: "Lv.3".to_string(),
        level_name: "Senior".to_string(),
        min_evaluation_grade: "B+".to_string(),
        consecutive_evaluations: 2,
        required_courses: set(&["LDR-001", "LDR-002"]),
        required_course_categories: BTreeMap::new(),
        min_training_hours: 40.0,
        required_skills: set(&["mentoring", "project_management"]),
        skill_proficiency_level: SkillProficiency::Intermediate,
        min_years_in_level: 2.0,
        min_total_years: 4.0,
    }
}

/// Meets every senior requirement with some margin.
pub(super) fn qualified_profile() -> EmployeeProfile {
    EmployeeProfile {
        level: "Lv.2".to_string(),
        recent_evaluation: Some(EvaluationRecord::new("A")),
        evaluation_history: grades(&["A", "A", "B"]),
        completed_courses: set(&["CORE-101", "LDR-001", "LDR-002"]),
        total_training_hours: 52.0,
        skills: set(&["communication", "mentoring", "project_management"]),
        years_in_current_level: 3.0,
        total_career_years: 6.0,
        course_category_counts: BTreeMap::new(),
    }
}

/// Falls short on every senior requirement.
pub(super) fn newcomer_profile() -> EmployeeProfile {
    EmployeeProfile {
        level: "Lv.2".to_string(),
        recent_evaluation: None,
        evaluation_history: Vec::new(),
        completed_courses: BTreeSet::new(),
        total_training_hours: 4.0,
        skills: BTreeSet::new(),
        years_in_current_level: 0.5,
        total_career_years: 0.5,
        course_category_counts: BTreeMap::new(),
    }
}

pub(super) fn engineering_override() -> JobSpecificOverride {
    JobSpecificOverride {
        job_specific_courses: set(&["ENG-201", "LDR-001"]),
        job_specific_skills: set(&["system_design"]),
        override_eval_grade: Some("A".to_string()),
    }
}
