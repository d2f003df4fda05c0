//! Weekly schedules keyed by activity level.
//!
//! Every schedule lists Monday through Sunday exactly once. A day is either a
//! training day (muscle groups plus the specific muscles used to narrow the
//! catalog query), a `Rest` day, or a `Recovery` day.

use chrono::Weekday;

use crate::models::ActivityLevel;

pub const REST: &str = "Rest";
pub const RECOVERY: &str = "Recovery";

const REST_GROUPS: &[&str] = &[REST];
const RECOVERY_GROUPS: &[&str] = &[RECOVERY];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTemplate {
    pub day: Weekday,
    pub muscle_groups: &'static [&'static str],
    pub specific_muscles: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Rest,
    Recovery,
    Training,
}

impl DayTemplate {
    const fn training(
        day: Weekday,
        muscle_groups: &'static [&'static str],
        specific_muscles: &'static [&'static str],
    ) -> Self {
        Self {
            day,
            muscle_groups,
            specific_muscles,
        }
    }

    const fn rest(day: Weekday) -> Self {
        Self::training(day, REST_GROUPS, &[])
    }

    const fn recovery(day: Weekday) -> Self {
        Self::training(day, RECOVERY_GROUPS, &[])
    }

    pub fn kind(&self) -> DayKind {
        if self.muscle_groups.contains(&REST) {
            DayKind::Rest
        } else if self.muscle_groups.contains(&RECOVERY) {
            DayKind::Recovery
        } else {
            DayKind::Training
        }
    }

    /// Label stored on the plan day, e.g. "Upper Body and Core".
    pub fn focus(&self) -> String {
        self.muscle_groups.join(" and ")
    }
}

pub type WeekTemplate = [DayTemplate; 7];

static SEDENTARY: WeekTemplate = [
    DayTemplate::training(Weekday::Mon, &["Upper Body"], &["Chest", "Triceps"]),
    DayTemplate::rest(Weekday::Tue),
    DayTemplate::rest(Weekday::Wed),
    DayTemplate::rest(Weekday::Thu),
    DayTemplate::rest(Weekday::Fri),
    DayTemplate::rest(Weekday::Sat),
    DayTemplate::rest(Weekday::Sun),
];

static LIGHTLY_ACTIVE: WeekTemplate = [
    DayTemplate::training(Weekday::Mon, &["Upper Body"], &["Chest", "Back", "Shoulders"]),
    DayTemplate::rest(Weekday::Tue),
    DayTemplate::training(Weekday::Wed, &["Lower Body"], &["Quadriceps", "Hamstrings", "Glutes"]),
    DayTemplate::rest(Weekday::Thu),
    DayTemplate::training(Weekday::Fri, &["Core"], &["Abdominals", "Obliques"]),
    DayTemplate::rest(Weekday::Sat),
    DayTemplate::rest(Weekday::Sun),
];

static MODERATELY_ACTIVE: WeekTemplate = [
    DayTemplate::training(Weekday::Mon, &["Upper Body"], &["Chest", "Triceps"]),
    DayTemplate::training(Weekday::Tue, &["Lower Body"], &["Quadriceps", "Glutes"]),
    DayTemplate::rest(Weekday::Wed),
    DayTemplate::training(Weekday::Thu, &["Upper Body"], &["Back", "Biceps"]),
    DayTemplate::training(Weekday::Fri, &["Lower Body"], &["Hamstrings", "Calves"]),
    DayTemplate::training(Weekday::Sat, &["Core"], &["Abdominals", "Obliques"]),
    DayTemplate::recovery(Weekday::Sun),
];

static VERY_ACTIVE: WeekTemplate = [
    DayTemplate::training(Weekday::Mon, &["Upper Body"], &["Chest", "Triceps"]),
    DayTemplate::training(Weekday::Tue, &["Lower Body"], &["Quadriceps", "Glutes"]),
    DayTemplate::training(Weekday::Wed, &["Upper Body"], &["Back", "Biceps"]),
    DayTemplate::training(Weekday::Thu, &["Lower Body"], &["Hamstrings", "Calves"]),
    DayTemplate::training(Weekday::Fri, &["Core"], &["Abdominals", "Obliques", "Lower Back"]),
    DayTemplate::training(Weekday::Sat, &["Upper Body"], &["Shoulders", "Chest"]),
    DayTemplate::recovery(Weekday::Sun),
];

static EXTREMELY_ACTIVE: WeekTemplate = [
    DayTemplate::training(Weekday::Mon, &["Upper Body", "Core"], &["Chest", "Abdominals"]),
    DayTemplate::training(Weekday::Tue, &["Lower Body"], &["Quadriceps", "Hamstrings"]),
    DayTemplate::training(Weekday::Wed, &["Upper Body"], &["Back", "Shoulders"]),
    DayTemplate::training(Weekday::Thu, &["Lower Body"], &["Glutes", "Calves"]),
    DayTemplate::training(
        Weekday::Fri,
        &["Upper Body", "Lower Body"],
        &["Chest", "Back", "Quadriceps"],
    ),
    DayTemplate::training(Weekday::Sat, &["Core"], &["Obliques", "Lower Back"]),
    DayTemplate::recovery(Weekday::Sun),
];

pub fn templates_for(level: ActivityLevel) -> &'static WeekTemplate {
    match level {
        ActivityLevel::Sedentary => &SEDENTARY,
        ActivityLevel::LightlyActive => &LIGHTLY_ACTIVE,
        ActivityLevel::ModeratelyActive => &MODERATELY_ACTIVE,
        ActivityLevel::VeryActive => &VERY_ACTIVE,
        ActivityLevel::ExtremelyActive => &EXTREMELY_ACTIVE,
    }
}

/// Lookup by stored level name; unknown names get the moderately active week.
pub fn templates_for_name(level: &str) -> &'static WeekTemplate {
    level
        .parse::<ActivityLevel>()
        .map(templates_for)
        .unwrap_or(&MODERATELY_ACTIVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WEEK;
    use pretty_assertions::assert_eq;

    fn focuses(level: ActivityLevel) -> Vec<String> {
        templates_for(level).iter().map(DayTemplate::focus).collect()
    }

    #[test]
    fn test_every_level_covers_the_week_once_in_order() {
        for level in ActivityLevel::ALL {
            let days: Vec<Weekday> = templates_for(level).iter().map(|t| t.day).collect();
            assert_eq!(days, WEEK.to_vec(), "{level}");
        }
    }

    #[test]
    fn test_unknown_level_name_uses_moderately_active() {
        assert_eq!(
            templates_for_name("couch_potato"),
            templates_for(ActivityLevel::ModeratelyActive)
        );
        assert_eq!(templates_for_name(""), templates_for_name("moderately_active"));
        assert_eq!(
            templates_for_name("very_active"),
            templates_for(ActivityLevel::VeryActive)
        );
    }

    #[test]
    fn test_very_active_schedule() {
        assert_eq!(
            focuses(ActivityLevel::VeryActive),
            vec![
                "Upper Body",
                "Lower Body",
                "Upper Body",
                "Lower Body",
                "Core",
                "Upper Body",
                "Recovery"
            ]
        );
    }

    #[test]
    fn test_sedentary_trains_only_on_monday() {
        let week = templates_for(ActivityLevel::Sedentary);
        assert_eq!(week[0].kind(), DayKind::Training);
        assert!(week[1..].iter().all(|t| t.kind() == DayKind::Rest));
    }

    #[test]
    fn test_recovery_day_only_from_moderately_active_up() {
        for level in ActivityLevel::ALL {
            let has_recovery = templates_for(level)
                .iter()
                .any(|t| t.kind() == DayKind::Recovery);
            let expected = matches!(
                level,
                ActivityLevel::ModeratelyActive
                    | ActivityLevel::VeryActive
                    | ActivityLevel::ExtremelyActive
            );
            assert_eq!(has_recovery, expected, "{level}");
        }
    }

    #[test]
    fn test_training_days_name_specific_muscles() {
        for level in ActivityLevel::ALL {
            for template in templates_for(level) {
                if template.kind() == DayKind::Training {
                    assert!(!template.specific_muscles.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_combined_focus_label() {
        let monday = templates_for(ActivityLevel::ExtremelyActive)[0];
        assert_eq!(monday.focus(), "Upper Body and Core");
    }
}
