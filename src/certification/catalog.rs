use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{JobSpecificOverride, LevelRequirement, ResolvedRequirement, SkillProficiency};
use super::grade::GradeScale;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no requirement configured for level '{0}'")]
    UnknownLevel(String),
    #[error("level '{0}' is configured more than once")]
    DuplicateLevel(String),
    #[error("invalid requirement for level '{level}': {reason}")]
    InvalidRequirement { level: String, reason: String },
    #[error("job override '{job}' references unknown level '{level}'")]
    UnknownOverrideLevel { level: String, job: String },
    #[error("job override '{job}' for level '{level}' is configured more than once")]
    DuplicateOverride { level: String, job: String },
    #[error("unable to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Catalog file entry attaching an override to one job within a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOverrideEntry {
    pub level: String,
    pub job: String,
    pub requirements: JobSpecificOverride,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    grade_scale: Option<GradeScale>,
    levels: Vec<LevelRequirement>,
    #[serde(default)]
    job_overrides: Vec<JobOverrideEntry>,
}

/// Validated career ladder: per-level requirements plus per-job overrides.
#[derive(Debug, Clone)]
pub struct RequirementCatalog {
    grades: GradeScale,
    levels: Vec<LevelRequirement>,
    overrides: BTreeMap<(String, String), JobSpecificOverride>,
}

impl RequirementCatalog {
    pub fn new(
        grades: GradeScale,
        levels: Vec<LevelRequirement>,
        job_overrides: Vec<JobOverrideEntry>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for requirement in &levels {
            if !seen.insert(requirement.level.clone()) {
                return Err(CatalogError::DuplicateLevel(requirement.level.clone()));
            }
            validate_requirement(requirement, &grades)?;
        }

        let mut overrides = BTreeMap::new();
        for entry in job_overrides {
            if !seen.contains(&entry.level) {
                return Err(CatalogError::UnknownOverrideLevel {
                    level: entry.level,
                    job: entry.job,
                });
            }
            if let Some(grade) = entry.requirements.override_eval_grade.as_deref() {
                if !grade.trim().is_empty() && !grades.contains(grade) {
                    return Err(CatalogError::InvalidRequirement {
                        level: entry.level,
                        reason: format!(
                            "override grade '{grade}' for job '{}' is not on the grade scale",
                            entry.job
                        ),
                    });
                }
            }

            let key = (entry.level, entry.job);
            if overrides.contains_key(&key) {
                let (level, job) = key;
                return Err(CatalogError::DuplicateOverride { level, job });
            }
            overrides.insert(key, entry.requirements);
        }

        Ok(Self {
            grades,
            levels,
            overrides,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::new(
            file.grade_scale.unwrap_or_default(),
            file.levels,
            file.job_overrides,
        )
    }

    /// Built-in five level ladder used when no catalog file is configured.
    pub fn standard() -> Self {
        let levels = vec![
            requirement(LevelSpec {
                level: "Lv.1",
                name: "Associate",
                grade: "C",
                consecutive: 1,
                courses: &[],
                categories: &[],
                hours: 0.0,
                skills: &[],
                proficiency: SkillProficiency::Basic,
                years_in_level: 0.0,
                total_years: 0.0,
            }),
            requirement(LevelSpec {
                level: "Lv.2",
                name: "Professional",
                grade: "B",
                consecutive: 1,
                courses: &["CORE-101", "ONB-101"],
                categories: &[],
                hours: 20.0,
                skills: &["communication", "teamwork"],
                proficiency: SkillProficiency::Basic,
                years_in_level: 1.0,
                total_years: 1.0,
            }),
            requirement(LevelSpec {
                level: "Lv.3",
                name: "Senior",
                grade: "B+",
                consecutive: 2,
                courses: &["LDR-001", "LDR-002"],
                categories: &[],
                hours: 40.0,
                skills: &["mentoring", "project_management"],
                proficiency: SkillProficiency::Intermediate,
                years_in_level: 2.0,
                total_years: 4.0,
            }),
            requirement(LevelSpec {
                level: "Lv.4",
                name: "Lead",
                grade: "A",
                consecutive: 2,
                courses: &["LDR-101", "STR-201"],
                categories: &[("leadership", 2), ("strategy", 1)],
                hours: 60.0,
                skills: &["coaching", "stakeholder_management", "strategic_planning"],
                proficiency: SkillProficiency::Advanced,
                years_in_level: 3.0,
                total_years: 7.0,
            }),
            requirement(LevelSpec {
                level: "Lv.5",
                name: "Principal",
                grade: "A+",
                consecutive: 3,
                courses: &["EXE-301", "STR-301"],
                categories: &[("leadership", 3), ("strategy", 2)],
                hours: 80.0,
                skills: &[
                    "executive_communication",
                    "organizational_design",
                    "strategic_planning",
                ],
                proficiency: SkillProficiency::Expert,
                years_in_level: 3.0,
                total_years: 10.0,
            }),
        ];

        let job_overrides = vec![
            JobOverrideEntry {
                level: "Lv.3".to_string(),
                job: "software_engineer".to_string(),
                requirements: JobSpecificOverride {
                    job_specific_courses: to_set(&["ENG-201"]),
                    job_specific_skills: to_set(&["system_design"]),
                    override_eval_grade: None,
                },
            },
            JobOverrideEntry {
                level: "Lv.4".to_string(),
                job: "sales_manager".to_string(),
                requirements: JobSpecificOverride {
                    job_specific_courses: BTreeSet::new(),
                    job_specific_skills: to_set(&["negotiation"]),
                    override_eval_grade: Some("A+".to_string()),
                },
            },
        ];

        Self {
            grades: GradeScale::default(),
            levels,
            overrides: job_overrides
                .into_iter()
                .map(|entry| ((entry.level, entry.job), entry.requirements))
                .collect(),
        }
    }

    pub fn grades(&self) -> &GradeScale {
        &self.grades
    }

    /// Levels in ladder order.
    pub fn levels(&self) -> &[LevelRequirement] {
        &self.levels
    }

    pub fn requirement(&self, level: &str) -> Option<&LevelRequirement> {
        self.levels.iter().find(|requirement| requirement.level == level)
    }

    pub fn override_for(&self, level: &str, job: &str) -> Option<&JobSpecificOverride> {
        self.overrides.get(&(level.to_string(), job.to_string()))
    }

    /// Jobs with overrides configured for `level`.
    pub fn jobs_for(&self, level: &str) -> Vec<&str> {
        self.overrides
            .keys()
            .filter(|(override_level, _)| override_level == level)
            .map(|(_, job)| job.as_str())
            .collect()
    }

    /// The level after `current` in ladder order.
    pub fn next_level(&self, current: &str) -> Option<&LevelRequirement> {
        let position = self
            .levels
            .iter()
            .position(|requirement| requirement.level == current)?;
        self.levels.get(position + 1)
    }

    /// Requirement for `level` plus the override for `job`, if one exists. A job
    /// without an override is not an error; an unknown level is.
    pub fn resolve(
        &self,
        level: &str,
        job: Option<&str>,
    ) -> Result<ResolvedRequirement, CatalogError> {
        let requirement = self
            .requirement(level)
            .ok_or_else(|| CatalogError::UnknownLevel(level.to_string()))?;
        let job_override = job.and_then(|job| self.override_for(level, job)).cloned();

        Ok(ResolvedRequirement {
            requirement: requirement.clone(),
            job_override,
        })
    }
}

impl Default for RequirementCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_requirement(
    requirement: &LevelRequirement,
    grades: &GradeScale,
) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRequirement {
        level: requirement.level.clone(),
        reason,
    };

    if requirement.consecutive_evaluations == 0 {
        return Err(invalid(
            "consecutive_evaluations must be at least 1".to_string(),
        ));
    }

    if !grades.contains(&requirement.min_evaluation_grade) {
        return Err(invalid(format!(
            "grade '{}' is not on the grade scale",
            requirement.min_evaluation_grade
        )));
    }

    for (field, value) in [
        ("min_training_hours", requirement.min_training_hours),
        ("min_years_in_level", requirement.min_years_in_level),
        ("min_total_years", requirement.min_total_years),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!(
                "{field} must be a non-negative number, found {value}"
            )));
        }
    }

    Ok(())
}

struct LevelSpec {
    level: &'static str,
    name: &'static str,
    grade: &'static str,
    consecutive: u32,
    courses: &'static [&'static str],
    categories: &'static [(&'static str, u32)],
    hours: f64,
    skills: &'static [&'static str],
    proficiency: SkillProficiency,
    years_in_level: f64,
    total_years: f64,
}

fn requirement(spec: LevelSpec) -> LevelRequirement {
    LevelRequirement {
        level: spec.level.to_string(),
        level_name: spec.name.to_string(),
        min_evaluation_grade: spec.grade.to_string(),
        consecutive_evaluations: spec.consecutive,
        required_courses: to_set(spec.courses),
        required_course_categories: spec
            .categories
            .iter()
            .map(|(category, count)| (category.to_string(), *count))
            .collect(),
        min_training_hours: spec.hours,
        required_skills: to_set(spec.skills),
        skill_proficiency_level: spec.proficiency,
        min_years_in_level: spec.years_in_level,
        min_total_years: spec.total_years,
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}
