use chrono::{Days, NaiveDate};

use super::checks::{EvaluationGap, ExperienceGap, MissingRequirements, SkillGap, TrainingGap};

pub const EVALUATION_CYCLE_DAYS: u64 = 90;
pub const DAYS_PER_COURSE: u64 = 30;
pub const STUDY_HOURS_PER_MONTH: f64 = 20.0;
pub const DAYS_PER_MONTH: u64 = 30;
pub const DAYS_PER_SKILL: u64 = 60;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Days needed to close every reported gap, assuming gaps close in parallel.
pub fn estimate_days(missing: &MissingRequirements) -> u64 {
    [
        missing.evaluation.as_ref().map_or(0, evaluation_days),
        missing.training.as_ref().map_or(0, training_days),
        missing.skills.as_ref().map_or(0, skill_days),
        missing.experience.as_ref().map_or(0, experience_days),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

/// Date by which the gaps could plausibly be closed, or `None` when nothing is missing.
pub fn estimate_date(missing: &MissingRequirements, today: NaiveDate) -> Option<NaiveDate> {
    let days = estimate_days(missing);
    if days == 0 {
        return None;
    }

    Some(
        today
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX),
    )
}

fn evaluation_days(gap: &EvaluationGap) -> u64 {
    // At least one more evaluation cycle is needed even when the run length is long
    // enough but the latest grade fell short.
    let cycles = gap
        .consecutive_required
        .saturating_sub(gap.consecutive_count)
        .max(1);
    u64::from(cycles) * EVALUATION_CYCLE_DAYS
}

fn training_days(gap: &TrainingGap) -> u64 {
    let course_days = (gap.courses.len() as u64).saturating_mul(DAYS_PER_COURSE);

    let category_days = gap
        .categories
        .values()
        .map(|shortfall| u64::from(shortfall.required.saturating_sub(shortfall.completed)))
        .fold(0u64, u64::saturating_add)
        .saturating_mul(DAYS_PER_COURSE);

    // Float to int casts saturate, so huge gaps clamp to u64::MAX days.
    let hour_days = gap.hours.map_or(0, |hours| {
        let months = ((hours.required - hours.current).max(0.0) / STUDY_HOURS_PER_MONTH).ceil();
        (months as u64).saturating_mul(DAYS_PER_MONTH)
    });

    course_days.max(category_days).max(hour_days)
}

fn skill_days(gap: &SkillGap) -> u64 {
    (gap.skills.len() as u64).saturating_mul(DAYS_PER_SKILL)
}

fn experience_days(gap: &ExperienceGap) -> u64 {
    [gap.level_years, gap.total_years]
        .into_iter()
        .flatten()
        .map(|shortfall| (shortfall.shortage.max(0.0) * DAYS_PER_YEAR).ceil() as u64)
        .max()
        .unwrap_or(0)
}
