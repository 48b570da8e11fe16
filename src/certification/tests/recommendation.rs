use std::collections::BTreeMap;

use crate::certification::checks::{
    CategoryShortfall, ExperienceGap, HoursShortfall, MissingRequirements, SkillGap, TrainingGap,
    YearsShortfall,
};
use crate::certification::recommendation::{format_amount, recommend};
use crate::certification::SkillProficiency;

#[test]
fn no_gaps_means_no_recommendations() {
    assert!(recommend(&MissingRequirements::default()).is_empty());
}

#[test]
fn long_lists_are_truncated_to_three_entries() {
    let missing = MissingRequirements {
        training: Some(TrainingGap {
            courses: vec![
                "LDR-101".into(),
                "LDR-102".into(),
                "STR-201".into(),
                "STR-202".into(),
            ],
            ..TrainingGap::default()
        }),
        skills: Some(SkillGap {
            skills: vec!["coaching".into(), "negotiation".into(), "planning".into()],
            required_proficiency: SkillProficiency::Advanced,
        }),
        ..MissingRequirements::default()
    };

    assert_eq!(
        recommend(&missing),
        vec![
            "Complete required courses: LDR-101, LDR-102, STR-201, ...".to_string(),
            "Develop skills: coaching, negotiation, planning".to_string(),
        ]
    );
}

#[test]
fn training_falls_back_to_hours_then_categories() {
    let hours_only = MissingRequirements {
        training: Some(TrainingGap {
            hours: Some(HoursShortfall {
                current: 12.5,
                required: 40.0,
            }),
            ..TrainingGap::default()
        }),
        ..MissingRequirements::default()
    };
    assert_eq!(
        recommend(&hours_only),
        vec!["Complete 27.5 more training hours".to_string()]
    );

    let mut categories = BTreeMap::new();
    categories.insert(
        "strategy".to_string(),
        CategoryShortfall {
            required: 2,
            completed: 0,
        },
    );
    let categories_only = MissingRequirements {
        training: Some(TrainingGap {
            categories,
            ..TrainingGap::default()
        }),
        ..MissingRequirements::default()
    };
    assert_eq!(
        recommend(&categories_only),
        vec!["Complete courses in categories: strategy (2 more)".to_string()]
    );
}

#[test]
fn total_career_shortage_is_not_messaged() {
    let missing = MissingRequirements {
        experience: Some(ExperienceGap {
            level_years: None,
            total_years: Some(YearsShortfall {
                current: 3.0,
                required: 7.0,
                shortage: 4.0,
            }),
        }),
        ..MissingRequirements::default()
    };

    assert!(recommend(&missing).is_empty());
}

#[test]
fn amounts_drop_trailing_zero() {
    assert_eq!(format_amount(2.0), "2");
    assert_eq!(format_amount(1.5), "1.5");
    assert_eq!(format_amount(0.25), "0.3");
}
