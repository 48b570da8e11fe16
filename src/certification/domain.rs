use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A single performance evaluation as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub overall_grade: String,
}

impl EvaluationRecord {
    pub fn new(grade: impl Into<String>) -> Self {
        Self {
            overall_grade: grade.into(),
        }
    }
}

/// Immutable snapshot of everything the engine knows about an employee.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub level: String,
    #[serde(default)]
    pub recent_evaluation: Option<EvaluationRecord>,
    /// Most recent first.
    #[serde(default)]
    pub evaluation_history: Vec<EvaluationRecord>,
    #[serde(default)]
    pub completed_courses: BTreeSet<String>,
    #[serde(default)]
    pub total_training_hours: f64,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub years_in_current_level: f64,
    #[serde(default)]
    pub total_career_years: f64,
    /// Completed course counts per training category. Categories missing here count
    /// as zero completions.
    #[serde(default)]
    pub course_category_counts: BTreeMap<String, u32>,
}

impl EmployeeProfile {
    pub fn completed_in_category(&self, category: &str) -> u32 {
        self.course_category_counts
            .get(category)
            .copied()
            .unwrap_or(0)
    }
}

/// Expected proficiency for a level's required skills.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillProficiency {
    #[default]
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillProficiency {
    pub fn label(self) -> &'static str {
        match self {
            SkillProficiency::Basic => "basic",
            SkillProficiency::Intermediate => "intermediate",
            SkillProficiency::Advanced => "advanced",
            SkillProficiency::Expert => "expert",
        }
    }
}

/// Requirements an employee must meet to certify into `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRequirement {
    pub level: String,
    pub level_name: String,
    pub min_evaluation_grade: String,
    pub consecutive_evaluations: u32,
    #[serde(default)]
    pub required_courses: BTreeSet<String>,
    #[serde(default)]
    pub required_course_categories: BTreeMap<String, u32>,
    #[serde(default)]
    pub min_training_hours: f64,
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub skill_proficiency_level: SkillProficiency,
    #[serde(default)]
    pub min_years_in_level: f64,
    #[serde(default)]
    pub min_total_years: f64,
}

impl LevelRequirement {
    /// Layer a job-specific override onto this requirement.
    pub fn with_override(&self, job: Option<&JobSpecificOverride>) -> LevelRequirement {
        let mut effective = self.clone();
        if let Some(job) = job {
            effective.min_evaluation_grade = job.effective_grade(&self.min_evaluation_grade);
            effective
                .required_courses
                .extend(job.job_specific_courses.iter().cloned());
            effective
                .required_skills
                .extend(job.job_specific_skills.iter().cloned());
        }
        effective
    }
}

/// Additional or replacement requirements for a particular job within a level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobSpecificOverride {
    #[serde(default)]
    pub job_specific_courses: BTreeSet<String>,
    #[serde(default)]
    pub job_specific_skills: BTreeSet<String>,
    #[serde(default)]
    pub override_eval_grade: Option<String>,
}

impl JobSpecificOverride {
    /// The override grade when present and non-blank, otherwise `base`.
    pub fn effective_grade(&self, base: &str) -> String {
        match self.override_eval_grade.as_deref().map(str::trim) {
            Some(grade) if !grade.is_empty() => grade.to_string(),
            _ => base.to_string(),
        }
    }
}

/// Requirement and optional override resolved for one target level and job.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequirement {
    pub requirement: LevelRequirement,
    pub job_override: Option<JobSpecificOverride>,
}

impl ResolvedRequirement {
    pub fn job_override(&self) -> Option<&JobSpecificOverride> {
        self.job_override.as_ref()
    }
}
