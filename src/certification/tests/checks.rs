use super::common::*;
use crate::certification::checks::{
    check_evaluation, check_experience, check_skills, check_training, CategoryShortfall,
    EvaluationShortfall, HoursShortfall,
};
use crate::certification::domain::{EvaluationRecord, JobSpecificOverride};
use crate::certification::grade::GradeScale;

#[test]
fn evaluation_passes_with_consecutive_grades_above_minimum() {
    let mut profile = qualified_profile();
    profile.recent_evaluation = Some(EvaluationRecord::new("A"));
    profile.evaluation_history = grades(&["A", "A"]);

    let result = check_evaluation(&profile, &senior_requirement(), None, &GradeScale::default());

    assert!(result.passed);
    assert!(result.missing.is_none());
}

#[test]
fn evaluation_fails_without_history() {
    let profile = newcomer_profile();

    let result = check_evaluation(&profile, &senior_requirement(), None, &GradeScale::default());

    assert!(!result.passed);
    let gap = result.missing.expect("gap reported");
    assert_eq!(gap.shortfall, EvaluationShortfall::NoEvaluationHistory);
    assert_eq!(gap.message, "no evaluation history");
    assert_eq!(gap.required_grade, "B+");
    assert_eq!(gap.consecutive_required, 2);
    assert_eq!(gap.current_grade, None);
}

#[test]
fn evaluation_reports_grade_below_minimum() {
    let mut profile = qualified_profile();
    profile.recent_evaluation = Some(EvaluationRecord::new("B"));
    profile.evaluation_history = grades(&["B", "A", "A"]);

    let result = check_evaluation(&profile, &senior_requirement(), None, &GradeScale::default());

    let gap = result.missing.expect("gap reported");
    assert_eq!(gap.shortfall, EvaluationShortfall::GradeBelowMinimum);
    assert_eq!(gap.current_grade.as_deref(), Some("B"));
    assert_eq!(gap.consecutive_count, 0);
    assert!(gap.message.contains("below"));
}

#[test]
fn consecutive_run_stops_at_first_failing_entry() {
    let mut profile = qualified_profile();
    profile.evaluation_history = grades(&["A", "B", "S", "S"]);

    let result = check_evaluation(&profile, &senior_requirement(), None, &GradeScale::default());

    let gap = result.missing.expect("gap reported");
    assert_eq!(gap.shortfall, EvaluationShortfall::InsufficientConsecutive);
    assert_eq!(gap.consecutive_count, 1);
    assert_eq!(gap.consecutive_required, 2);
    assert!(gap.message.contains("consecutive"));
}

#[test]
fn long_history_run_is_counted_in_full() {
    let mut profile = qualified_profile();
    profile.evaluation_history = vec![EvaluationRecord::new("A"); 70_000];
    let mut requirement = senior_requirement();
    requirement.consecutive_evaluations = 70_001;

    let result = check_evaluation(&profile, &requirement, None, &GradeScale::default());

    let gap = result.missing.expect("gap reported");
    assert_eq!(gap.shortfall, EvaluationShortfall::InsufficientConsecutive);
    assert_eq!(gap.consecutive_count, 70_000);
}

#[test]
fn override_grade_replaces_level_minimum() {
    let mut profile = qualified_profile();
    profile.recent_evaluation = Some(EvaluationRecord::new("B+"));
    profile.evaluation_history = grades(&["B+", "B+"]);
    let requirement = senior_requirement();

    let base = check_evaluation(&profile, &requirement, None, &GradeScale::default());
    assert!(base.passed);

    let job = engineering_override();
    let raised = check_evaluation(&profile, &requirement, Some(&job), &GradeScale::default());
    let gap = raised.missing.expect("override raises the bar");
    assert_eq!(gap.required_grade, "A");

    let blank = JobSpecificOverride {
        override_eval_grade: Some("  ".to_string()),
        ..JobSpecificOverride::default()
    };
    let ignored = check_evaluation(&profile, &requirement, Some(&blank), &GradeScale::default());
    assert!(ignored.passed);
}

#[test]
fn training_reports_every_missing_course() {
    let mut profile = qualified_profile();
    profile.completed_courses = set(&[]);

    let result = check_training(&profile, &senior_requirement(), None);

    assert!(!result.passed);
    let gap = result.missing.expect("gap reported");
    assert_eq!(gap.courses, vec!["LDR-001".to_string(), "LDR-002".to_string()]);
    assert!(gap.categories.is_empty());
    assert!(gap.hours.is_none());
}

#[test]
fn training_unions_job_courses_without_duplicates() {
    let mut profile = qualified_profile();
    profile.completed_courses = set(&["LDR-002"]);
    let job = engineering_override();

    let result = check_training(&profile, &senior_requirement(), Some(&job));

    let gap = result.missing.expect("gap reported");
    assert_eq!(gap.courses, vec!["ENG-201".to_string(), "LDR-001".to_string()]);
}

#[test]
fn category_requirements_count_zero_without_profile_counts() {
    let profile = qualified_profile();
    let mut requirement = senior_requirement();
    requirement
        .required_course_categories
        .insert("leadership".to_string(), 1);
    requirement
        .required_course_categories
        .insert("optional".to_string(), 0);

    let result = check_training(&profile, &requirement, None);

    let gap = result.missing.expect("category unmet");
    assert_eq!(gap.categories.len(), 1);
    assert_eq!(
        gap.categories.get("leadership"),
        Some(&CategoryShortfall {
            required: 1,
            completed: 0
        })
    );
    assert!(gap.courses.is_empty());
}

#[test]
fn supplied_category_counts_satisfy_requirements() {
    let mut profile = qualified_profile();
    profile
        .course_category_counts
        .insert("leadership".to_string(), 2);
    let mut requirement = senior_requirement();
    requirement
        .required_course_categories
        .insert("leadership".to_string(), 2);

    let result = check_training(&profile, &requirement, None);

    assert!(result.passed);
}

#[test]
fn training_hours_shortfall_is_reported_alone() {
    let mut profile = qualified_profile();
    profile.total_training_hours = 25.0;

    let result = check_training(&profile, &senior_requirement(), None);

    let gap = result.missing.expect("hours unmet");
    assert!(gap.courses.is_empty());
    assert_eq!(
        gap.hours,
        Some(HoursShortfall {
            current: 25.0,
            required: 40.0
        })
    );
}

#[test]
fn skills_report_missing_entries_including_job_skills() {
    let mut profile = qualified_profile();
    profile.skills = set(&["mentoring"]);
    let job = engineering_override();

    let result = check_skills(&profile, &senior_requirement(), Some(&job));

    let gap = result.missing.expect("gap reported");
    assert_eq!(
        gap.skills,
        vec!["project_management".to_string(), "system_design".to_string()]
    );
    assert_eq!(
        gap.required_proficiency,
        crate::certification::SkillProficiency::Intermediate
    );
}

#[test]
fn empty_skill_requirement_is_vacuously_met() {
    let mut requirement = senior_requirement();
    requirement.required_skills.clear();

    let result = check_skills(&newcomer_profile(), &requirement, None);

    assert!(result.passed);
    assert!(result.missing.is_none());
}

#[test]
fn experience_reports_level_shortage() {
    let mut profile = qualified_profile();
    profile.years_in_current_level = 1.0;
    let mut requirement = senior_requirement();
    requirement.min_years_in_level = 3.0;

    let result = check_experience(&profile, &requirement);

    assert!(!result.passed);
    let gap = result.missing.expect("gap reported");
    let level = gap.level_years.expect("level shortage");
    assert_eq!(level.current, 1.0);
    assert_eq!(level.required, 3.0);
    assert_eq!(level.shortage, 2.0);
    assert!(gap.total_years.is_none());
}

#[test]
fn experience_reports_total_years_independently() {
    let mut profile = qualified_profile();
    profile.total_career_years = 2.5;

    let result = check_experience(&profile, &senior_requirement());

    let gap = result.missing.expect("gap reported");
    assert!(gap.level_years.is_none());
    let total = gap.total_years.expect("total shortage");
    assert_eq!(total.shortage, 1.5);
}
