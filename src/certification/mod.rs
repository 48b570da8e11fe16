//! Growth-level certification eligibility.
//!
//! [`EligibilityEngine`] is a pure evaluator: given an employee snapshot, a resolved
//! level requirement, an optional job override and the evaluation date, it runs the
//! evaluation, training, skill and experience checks and assembles a
//! [`CertificationResult`]. Requirement lookup lives in [`catalog`] and the logging
//! facade in [`service`].

pub mod catalog;
pub mod checks;
pub mod domain;
pub mod estimation;
pub mod grade;
pub mod policy;
pub mod progress;
pub mod recommendation;
pub mod report;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, JobOverrideEntry, RequirementCatalog};
pub use checks::{
    CategoryShortfall, CheckResult, EvaluationGap, EvaluationShortfall, ExperienceGap,
    HoursShortfall, MissingRequirements, SkillGap, TrainingGap, YearsShortfall,
};
pub use domain::{
    EmployeeProfile, EvaluationRecord, JobSpecificOverride, LevelRequirement,
    ResolvedRequirement, SkillProficiency,
};
pub use grade::GradeScale;
pub use policy::{DimensionChecks, Verdict};
pub use progress::ProgressScores;
pub use service::{CertificationError, CertificationService};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying a grade scale to profiles and requirements.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    grades: GradeScale,
}

impl EligibilityEngine {
    pub fn new(grades: GradeScale) -> Self {
        Self { grades }
    }

    pub fn grades(&self) -> &GradeScale {
        &self.grades
    }

    /// Evaluate `profile` against `requirement`. All four checks always run so the
    /// result carries the full gap picture.
    pub fn evaluate(
        &self,
        profile: &EmployeeProfile,
        requirement: &LevelRequirement,
        job: Option<&JobSpecificOverride>,
        today: NaiveDate,
    ) -> CertificationResult {
        let evaluation = checks::check_evaluation(profile, requirement, job, &self.grades);
        let training = checks::check_training(profile, requirement, job);
        let skills = checks::check_skills(profile, requirement, job);
        let experience = checks::check_experience(profile, requirement);

        let dimension_checks = DimensionChecks {
            evaluation: evaluation.passed,
            training: training.passed,
            skills: skills.passed,
            experience: experience.passed,
        };
        let verdict = dimension_checks.verdict();

        let missing_requirements = MissingRequirements {
            evaluation: evaluation.missing,
            training: training.missing,
            skills: skills.missing,
            experience: experience.missing,
        };

        let (expected_certification_date, recommendations) = if verdict == Verdict::Satisfied {
            (None, Vec::new())
        } else {
            (
                estimation::estimate_date(&missing_requirements, today),
                recommendation::recommend(&missing_requirements),
            )
        };

        let effective = requirement.with_override(job);
        let progress = progress::progress(profile, &effective, &self.grades);

        CertificationResult {
            verdict,
            current_level: profile.level.clone(),
            target_level: requirement.level.clone(),
            checks: dimension_checks,
            missing_requirements,
            expected_certification_date,
            recommendations,
            progress,
        }
    }

    pub fn evaluate_resolved(
        &self,
        profile: &EmployeeProfile,
        resolved: &ResolvedRequirement,
        today: NaiveDate,
    ) -> CertificationResult {
        self.evaluate(
            profile,
            &resolved.requirement,
            resolved.job_override(),
            today,
        )
    }
}

/// Everything the engine reports for one profile and target level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationResult {
    pub verdict: Verdict,
    pub current_level: String,
    pub target_level: String,
    pub checks: DimensionChecks,
    pub missing_requirements: MissingRequirements,
    pub expected_certification_date: Option<NaiveDate>,
    pub recommendations: Vec<String>,
    pub progress: ProgressScores,
}

impl CertificationResult {
    pub fn is_eligible(&self) -> bool {
        self.verdict == Verdict::Satisfied
    }
}
