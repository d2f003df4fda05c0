//! Human-readable notes attached to a generated plan.

pub const CLOSING_NOTE: &str = "Always listen to your body and adjust the plan as needed.";

const GOAL_NOTES: &[(&str, &str)] = &[
    (
        "weight_loss",
        "This plan favors compound movements at a moderate intensity to burn calories while preserving muscle.",
    ),
    (
        "muscle_gain",
        "This plan emphasizes challenging lifts and progressive overload to stimulate muscle growth.",
    ),
    (
        "maintenance",
        "This plan balances strength and conditioning work to help you maintain your current fitness.",
    ),
    (
        "endurance",
        "This plan builds muscular endurance through steady volume across the week.",
    ),
    (
        "general_fitness",
        "This plan offers a well-rounded mix of exercises to improve overall health and fitness.",
    ),
];
const GOAL_FALLBACK: &str = "This plan is designed to support your fitness goals.";

const ACTIVITY_NOTES: &[(&str, &str)] = &[
    (
        "sedentary",
        "A single training day gives your body time to adapt to regular exercise.",
    ),
    (
        "lightly_active",
        "Three training days with rest in between build a sustainable routine.",
    ),
    (
        "moderately_active",
        "Five training days plus a rest day and an active recovery day balance effort and recovery.",
    ),
    (
        "very_active",
        "Six training days and an active recovery day suit your high activity level.",
    ),
    (
        "extremely_active",
        "A demanding six-day split with combined sessions and active recovery matches your training capacity.",
    ),
];
const ACTIVITY_FALLBACK: &str = "The weekly schedule is matched to your activity level.";

const FOCUS_NOTES: &[(&str, &str)] = &[
    (
        "strength",
        "Rest at least two minutes between heavy sets to keep your strength up.",
    ),
    (
        "hypertrophy",
        "Control the lowering phase of every rep to maximize time under tension.",
    ),
    (
        "cardio",
        "Keep rest periods short to hold your heart rate up throughout each session.",
    ),
    (
        "flexibility",
        "Finish every session with a few minutes of stretching for the muscles you trained.",
    ),
    (
        "balance",
        "Perform unilateral movements slowly to challenge your stability.",
    ),
];
const FOCUS_FALLBACK: &str = "Each session targets a balanced mix of muscle groups.";

fn lookup(table: &[(&str, &'static str)], key: &str, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(fallback, |(_, note)| *note)
}

pub fn goal_note(fitness_goal: &str) -> &'static str {
    lookup(GOAL_NOTES, fitness_goal, GOAL_FALLBACK)
}

pub fn activity_note(activity_level: &str) -> &'static str {
    lookup(ACTIVITY_NOTES, activity_level, ACTIVITY_FALLBACK)
}

pub fn focus_note(primary_focus: &str) -> &'static str {
    lookup(FOCUS_NOTES, primary_focus, FOCUS_FALLBACK)
}

pub fn generate_plan_notes(fitness_goal: &str, activity_level: &str, primary_focus: &str) -> String {
    [
        goal_note(fitness_goal),
        activity_note(activity_level),
        focus_note(primary_focus),
        CLOSING_NOTE,
    ]
    .join(" ")
}
