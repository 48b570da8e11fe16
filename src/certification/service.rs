use chrono::NaiveDate;
use tracing::{debug, info};

use super::catalog::{CatalogError, RequirementCatalog};
use super::domain::EmployeeProfile;
use super::{CertificationResult, EligibilityEngine};

#[derive(Debug, thiserror::Error)]
pub enum CertificationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("level '{0}' has no higher level configured in the catalog")]
    NoNextLevel(String),
}

/// Resolves requirements from the catalog and runs the engine against them.
#[derive(Debug, Clone)]
pub struct CertificationService {
    catalog: RequirementCatalog,
    engine: EligibilityEngine,
}

impl CertificationService {
    pub fn new(catalog: RequirementCatalog) -> Self {
        let engine = EligibilityEngine::new(catalog.grades().clone());
        Self { catalog, engine }
    }

    pub fn catalog(&self) -> &RequirementCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    pub fn assess(
        &self,
        profile: &EmployeeProfile,
        target_level: &str,
        job: Option<&str>,
        today: NaiveDate,
    ) -> Result<CertificationResult, CertificationError> {
        let resolved = self.catalog.resolve(target_level, job)?;
        debug!(
            target_level,
            job,
            job_override = resolved.job_override.is_some(),
            "resolved level requirement"
        );

        let result = self.engine.evaluate_resolved(profile, &resolved, today);
        info!(
            current_level = %result.current_level,
            target_level = %result.target_level,
            verdict = result.verdict.label(),
            overall_progress = result.progress.overall,
            "certification assessed"
        );

        Ok(result)
    }

    /// Assess against the level following the profile's current level.
    pub fn assess_next_level(
        &self,
        profile: &EmployeeProfile,
        job: Option<&str>,
        today: NaiveDate,
    ) -> Result<CertificationResult, CertificationError> {
        if self.catalog.requirement(&profile.level).is_none() {
            return Err(CatalogError::UnknownLevel(profile.level.clone()).into());
        }

        let next = self
            .catalog
            .next_level(&profile.level)
            .ok_or_else(|| CertificationError::NoNextLevel(profile.level.clone()))?;
        let target = next.level.clone();

        self.assess(profile, &target, job, today)
    }
}

impl Default for CertificationService {
    fn default() -> Self {
        Self::new(RequirementCatalog::standard())
    }
}
