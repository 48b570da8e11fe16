use super::checks::{EvaluationGap, ExperienceGap, MissingRequirements, SkillGap, TrainingGap};

const LISTED_ITEMS: usize = 3;

/// One action per failing dimension, ordered evaluation, training, skills, experience.
pub fn recommend(missing: &MissingRequirements) -> Vec<String> {
    [
        missing.evaluation.as_ref().map(evaluation_action),
        missing.training.as_ref().and_then(training_action),
        missing.skills.as_ref().and_then(skill_action),
        missing.experience.as_ref().and_then(experience_action),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn evaluation_action(gap: &EvaluationGap) -> String {
    format!(
        "Achieve a grade of {} or higher on the next evaluation",
        gap.required_grade
    )
}

fn training_action(gap: &TrainingGap) -> Option<String> {
    if !gap.courses.is_empty() {
        return Some(format!(
            "Complete required courses: {}",
            list_preview(&gap.courses)
        ));
    }

    if let Some(hours) = gap.hours {
        return Some(format!(
            "Complete {} more training hours",
            format_amount(hours.required - hours.current)
        ));
    }

    if !gap.categories.is_empty() {
        let categories: Vec<String> = gap
            .categories
            .iter()
            .map(|(category, shortfall)| {
                format!(
                    "{category} ({} more)",
                    shortfall.required.saturating_sub(shortfall.completed)
                )
            })
            .collect();
        return Some(format!(
            "Complete courses in categories: {}",
            list_preview(&categories)
        ));
    }

    None
}

fn skill_action(gap: &SkillGap) -> Option<String> {
    (!gap.skills.is_empty()).then(|| format!("Develop skills: {}", list_preview(&gap.skills)))
}

fn experience_action(gap: &ExperienceGap) -> Option<String> {
    // Total-career shortfalls stay in the gap detail only.
    gap.level_years.map(|shortfall| {
        format!(
            "Accumulate {} more years at the current level",
            format_amount(shortfall.shortage)
        )
    })
}

fn list_preview(items: &[String]) -> String {
    let shown = items
        .iter()
        .take(LISTED_ITEMS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > LISTED_ITEMS {
        format!("{shown}, ...")
    } else {
        shown
    }
}

/// Whole numbers without a trailing `.0`, everything else to one decimal.
pub(crate) fn format_amount(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
