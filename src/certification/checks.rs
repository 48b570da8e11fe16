use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::domain::{EmployeeProfile, JobSpecificOverride, LevelRequirement, SkillProficiency};
use super::grade::GradeScale;

/// Outcome of a single dimension check. `missing` is populated only on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult<G> {
    pub passed: bool,
    pub missing: Option<G>,
}

impl<G> CheckResult<G> {
    pub(crate) fn pass() -> Self {
        Self {
            passed: true,
            missing: None,
        }
    }

    pub(crate) fn fail(gap: G) -> Self {
        Self {
            passed: false,
            missing: Some(gap),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationShortfall {
    NoEvaluationHistory,
    GradeBelowMinimum,
    InsufficientConsecutive,
}

impl EvaluationShortfall {
    pub fn message(self) -> &'static str {
        match self {
            EvaluationShortfall::NoEvaluationHistory => "no evaluation history",
            EvaluationShortfall::GradeBelowMinimum => {
                "most recent evaluation grade is below the required minimum"
            }
            EvaluationShortfall::InsufficientConsecutive => {
                "not enough consecutive evaluations at or above the required grade"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationGap {
    pub shortfall: EvaluationShortfall,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_grade: Option<String>,
    pub required_grade: String,
    pub consecutive_count: u32,
    pub consecutive_required: u32,
}

impl EvaluationGap {
    fn new(
        shortfall: EvaluationShortfall,
        current_grade: Option<String>,
        required_grade: String,
        consecutive_count: u32,
        consecutive_required: u32,
    ) -> Self {
        Self {
            shortfall,
            message: shortfall.message().to_string(),
            current_grade,
            required_grade,
            consecutive_count,
            consecutive_required,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShortfall {
    pub required: u32,
    pub completed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursShortfall {
    pub current: f64,
    pub required: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingGap {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, CategoryShortfall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<HoursShortfall>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skills: Vec<String>,
    pub required_proficiency: SkillProficiency,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearsShortfall {
    pub current: f64,
    pub required: f64,
    pub shortage: f64,
}

impl YearsShortfall {
    fn new(current: f64, required: f64) -> Self {
        Self {
            current,
            required,
            shortage: (required - current).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceGap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_years: Option<YearsShortfall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_years: Option<YearsShortfall>,
}

/// Per-dimension gap detail. A dimension that passed is `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MissingRequirements {
    pub evaluation: Option<EvaluationGap>,
    pub training: Option<TrainingGap>,
    pub skills: Option<SkillGap>,
    pub experience: Option<ExperienceGap>,
}

impl MissingRequirements {
    pub fn is_empty(&self) -> bool {
        self.evaluation.is_none()
            && self.training.is_none()
            && self.skills.is_none()
            && self.experience.is_none()
    }
}

pub fn check_evaluation(
    profile: &EmployeeProfile,
    requirement: &LevelRequirement,
    job: Option<&JobSpecificOverride>,
    grades: &GradeScale,
) -> CheckResult<EvaluationGap> {
    let required_grade = match job {
        Some(job) => job.effective_grade(&requirement.min_evaluation_grade),
        None => requirement.min_evaluation_grade.clone(),
    };
    let consecutive_required = requirement.consecutive_evaluations;

    let Some(recent) = &profile.recent_evaluation else {
        return CheckResult::fail(EvaluationGap::new(
            EvaluationShortfall::NoEvaluationHistory,
            None,
            required_grade,
            0,
            consecutive_required,
        ));
    };

    let grade_ok = grades.satisfies(&recent.overall_grade, &required_grade);
    let run = profile
        .evaluation_history
        .iter()
        .take_while(|record| grades.satisfies(&record.overall_grade, &required_grade))
        .count();
    let consecutive_count = u32::try_from(run).unwrap_or(u32::MAX);
    let consecutive_ok = consecutive_count >= consecutive_required;

    if grade_ok && consecutive_ok {
        return CheckResult::pass();
    }

    let shortfall = if grade_ok {
        EvaluationShortfall::InsufficientConsecutive
    } else {
        EvaluationShortfall::GradeBelowMinimum
    };

    CheckResult::fail(EvaluationGap::new(
        shortfall,
        Some(recent.overall_grade.clone()),
        required_grade,
        consecutive_count,
        consecutive_required,
    ))
}

pub fn check_training(
    profile: &EmployeeProfile,
    requirement: &LevelRequirement,
    job: Option<&JobSpecificOverride>,
) -> CheckResult<TrainingGap> {
    let mut required_courses: BTreeSet<&str> = requirement
        .required_courses
        .iter()
        .map(String::as_str)
        .collect();
    if let Some(job) = job {
        required_courses.extend(job.job_specific_courses.iter().map(String::as_str));
    }

    let courses: Vec<String> = required_courses
        .into_iter()
        .filter(|course| !profile.completed_courses.contains(*course))
        .map(str::to_string)
        .collect();

    let categories: BTreeMap<String, CategoryShortfall> = requirement
        .required_course_categories
        .iter()
        .filter_map(|(category, &required)| {
            let completed = profile.completed_in_category(category);
            (completed < required)
                .then(|| (category.clone(), CategoryShortfall { required, completed }))
        })
        .collect();

    let hours = (profile.total_training_hours < requirement.min_training_hours).then(|| {
        HoursShortfall {
            current: profile.total_training_hours,
            required: requirement.min_training_hours,
        }
    });

    if courses.is_empty() && categories.is_empty() && hours.is_none() {
        return CheckResult::pass();
    }

    CheckResult::fail(TrainingGap {
        courses,
        categories,
        hours,
    })
}

pub fn check_skills(
    profile: &EmployeeProfile,
    requirement: &LevelRequirement,
    job: Option<&JobSpecificOverride>,
) -> CheckResult<SkillGap> {
    let mut required_skills: BTreeSet<&str> = requirement
        .required_skills
        .iter()
        .map(String::as_str)
        .collect();
    if let Some(job) = job {
        required_skills.extend(job.job_specific_skills.iter().map(String::as_str));
    }

    let skills: Vec<String> = required_skills
        .into_iter()
        .filter(|skill| !profile.skills.contains(*skill))
        .map(str::to_string)
        .collect();

    if skills.is_empty() {
        return CheckResult::pass();
    }

    CheckResult::fail(SkillGap {
        skills,
        required_proficiency: requirement.skill_proficiency_level,
    })
}

pub fn check_experience(
    profile: &EmployeeProfile,
    requirement: &LevelRequirement,
) -> CheckResult<ExperienceGap> {
    let level_years = (profile.years_in_current_level < requirement.min_years_in_level).then(|| {
        YearsShortfall::new(profile.years_in_current_level, requirement.min_years_in_level)
    });
    let total_years = (profile.total_career_years < requirement.min_total_years)
        .then(|| YearsShortfall::new(profile.total_career_years, requirement.min_total_years));

    if level_years.is_none() && total_years.is_none() {
        return CheckResult::pass();
    }

    CheckResult::fail(ExperienceGap {
        level_years,
        total_years,
    })
}
