//! In-process backend with snapshot transactions.
//!
//! `begin` clones the committed state; `commit` swaps the working copy back in.
//! Concurrent units of work are last-writer-wins. Used by the test suite and
//! for running the API without PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc, Weekday};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    DatabaseError, ExerciseCatalog, PlanDatabase, PlanHeaderStore, PlanStore, UnitOfWork,
};
use crate::models::{
    sedentary_fallback, weekday_name, ExerciseCandidate, ExerciseQuery, NewPlanExercise,
    NewWorkoutPlan, PlanDay, PlanDayDetail, PlanExerciseDetail, WorkoutPlan,
};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    exercises: Vec<ExerciseCandidate>,
    plans: Vec<WorkoutPlan>,
    plan_days: Vec<PlanDay>,
    plan_exercises: Vec<NewPlanExercise>,
    next_plan_id: i32,
    next_plan_day_id: i32,
    fail_catalog_queries: bool,
}

#[derive(Clone)]
pub struct MemoryDatabase {
    state: Arc<Mutex<MemoryState>>,
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDatabase {
    /// An empty store whose catalog holds only the bodyweight fallback pair,
    /// matching what the seed migration inserts.
    pub fn new() -> Self {
        Self::with_exercises(Vec::new())
    }

    /// Seeds the catalog with `exercises` on top of the fallback pair. An
    /// exercise reusing a fallback id replaces that row.
    pub fn with_exercises(exercises: Vec<ExerciseCandidate>) -> Self {
        let mut catalog: Vec<ExerciseCandidate> = sedentary_fallback()
            .into_iter()
            .filter(|seeded| exercises.iter().all(|e| e.exercise_id != seeded.exercise_id))
            .collect();
        catalog.extend(exercises);

        Self {
            state: Arc::new(Mutex::new(MemoryState {
                exercises: catalog,
                ..MemoryState::default()
            })),
        }
    }

    /// Makes every catalog read fail until switched off again.
    pub fn fail_catalog_queries(&self, fail: bool) -> Result<(), DatabaseError> {
        self.lock()?.fail_catalog_queries = fail;
        Ok(())
    }

    /// Committed plan headers, in insertion order.
    pub fn plans(&self) -> Result<Vec<WorkoutPlan>, DatabaseError> {
        Ok(self.lock()?.plans.clone())
    }

    /// Committed day rows for `plan_id`, in insertion order.
    pub fn plan_days(&self, plan_id: i32) -> Result<Vec<PlanDay>, DatabaseError> {
        Ok(self
            .lock()?
            .plan_days
            .iter()
            .filter(|day| day.plan_id == plan_id)
            .cloned()
            .collect())
    }

    /// Committed exercise rows attached to `plan_day_id`, in insertion order.
    pub fn plan_exercises(&self, plan_day_id: i32) -> Result<Vec<NewPlanExercise>, DatabaseError> {
        Ok(self
            .lock()?
            .plan_exercises
            .iter()
            .filter(|exercise| exercise.plan_day_id == plan_day_id)
            .cloned()
            .collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, DatabaseError> {
        self.state
            .lock()
            .map_err(|_| DatabaseError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl PlanDatabase for MemoryDatabase {
    type UnitOfWork = MemoryUnitOfWork;

    async fn begin(&self) -> Result<MemoryUnitOfWork, DatabaseError> {
        let working = self.lock()?.clone();
        Ok(MemoryUnitOfWork {
            shared: Arc::clone(&self.state),
            working,
        })
    }
}

pub struct MemoryUnitOfWork {
    shared: Arc<Mutex<MemoryState>>,
    working: MemoryState,
}

impl MemoryUnitOfWork {
    fn check_catalog(&self) -> Result<(), DatabaseError> {
        if self.working.fail_catalog_queries {
            return Err(DatabaseError::Unavailable(
                "exercise catalog is offline".to_string(),
            ));
        }
        Ok(())
    }
}

fn intersects(tags: &[String], wanted: &[String]) -> bool {
    tags.iter().any(|tag| wanted.contains(tag))
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn commit(self) -> Result<(), DatabaseError> {
        let mut shared = self
            .shared
            .lock()
            .map_err(|_| DatabaseError::Unavailable("memory store lock poisoned".to_string()))?;
        *shared = self.working;
        Ok(())
    }

    async fn rollback(self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[async_trait]
impl ExerciseCatalog for MemoryUnitOfWork {
    async fn find_exercises(
        &mut self,
        query: &ExerciseQuery,
    ) -> Result<Vec<ExerciseCandidate>, DatabaseError> {
        self.check_catalog()?;

        let mut matches: Vec<ExerciseCandidate> = self
            .working
            .exercises
            .iter()
            .filter(|e| {
                intersects(&e.muscle_groups, &query.muscle_groups_or_muscles)
                    || intersects(&e.muscles, &query.muscle_groups_or_muscles)
            })
            .filter(|e| {
                query.specific_muscles.is_empty() || intersects(&e.muscles, &query.specific_muscles)
            })
            .filter(|e| {
                query
                    .difficulties
                    .as_ref()
                    .map_or(true, |allowed| allowed.contains(&e.difficulty))
            })
            .cloned()
            .collect();

        matches.sort_by_key(|e| e.exercise_id);
        matches.truncate(query.limit);
        Ok(matches)
    }

    async fn list_exercises(
        &mut self,
        muscle_group: Option<&str>,
    ) -> Result<Vec<ExerciseCandidate>, DatabaseError> {
        self.check_catalog()?;

        let mut exercises: Vec<ExerciseCandidate> = self
            .working
            .exercises
            .iter()
            .filter(|e| muscle_group.map_or(true, |group| e.muscle_groups.iter().any(|g| g == group)))
            .cloned()
            .collect();

        exercises.sort_by_key(|e| e.exercise_id);
        Ok(exercises)
    }
}

#[async_trait]
impl PlanStore for MemoryUnitOfWork {
    async fn plan_exists(&mut self, plan_id: i32) -> Result<bool, DatabaseError> {
        Ok(self.working.plans.iter().any(|p| p.plan_id == plan_id))
    }

    async fn create_plan_day(
        &mut self,
        plan_id: i32,
        day_of_week: Weekday,
        focus: &str,
    ) -> Result<i32, DatabaseError> {
        self.working.next_plan_day_id += 1;
        let plan_day_id = self.working.next_plan_day_id;

        self.working.plan_days.push(PlanDay {
            plan_day_id,
            plan_id,
            day_of_week: weekday_name(day_of_week).to_string(),
            focus: focus.to_string(),
        });

        Ok(plan_day_id)
    }

    async fn create_plan_exercise(&mut self, exercise: &NewPlanExercise) -> Result<(), DatabaseError> {
        self.working.plan_exercises.push(exercise.clone());
        Ok(())
    }

    async fn delete_plan_days_and_exercises(&mut self, plan_id: i32) -> Result<u64, DatabaseError> {
        let removed_days: Vec<i32> = self
            .working
            .plan_days
            .iter()
            .filter(|day| day.plan_id == plan_id)
            .map(|day| day.plan_day_id)
            .collect();

        self.working
            .plan_exercises
            .retain(|e| !removed_days.contains(&e.plan_day_id));
        self.working.plan_days.retain(|day| day.plan_id != plan_id);

        Ok(removed_days.len() as u64)
    }

    async fn count_plan_days(&mut self, plan_id: i32) -> Result<i64, DatabaseError> {
        Ok(self
            .working
            .plan_days
            .iter()
            .filter(|day| day.plan_id == plan_id)
            .count() as i64)
    }
}

#[async_trait]
impl PlanHeaderStore for MemoryUnitOfWork {
    async fn latest_plan_created_at(
        &mut self,
        user_id: i32,
    ) -> Result<Option<DateTime<Utc>>, DatabaseError> {
        Ok(self
            .working
            .plans
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| p.created_at)
            .max())
    }

    async fn create_plan(&mut self, plan: &NewWorkoutPlan) -> Result<WorkoutPlan, DatabaseError> {
        self.working.next_plan_id += 1;
        let now = Utc::now();

        let created = WorkoutPlan {
            plan_id: self.working.next_plan_id,
            user_id: plan.user_id,
            plan_name: plan.plan_name.clone(),
            fitness_goal: plan.fitness_goal.as_str().to_string(),
            activity_level: plan.activity_level.as_str().to_string(),
            primary_focus: plan.primary_focus.clone(),
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        };

        self.working.plans.push(created.clone());
        Ok(created)
    }

    async fn update_plan(
        &mut self,
        plan_id: i32,
        plan: &NewWorkoutPlan,
    ) -> Result<Option<WorkoutPlan>, DatabaseError> {
        let Some(existing) = self
            .working
            .plans
            .iter_mut()
            .find(|p| p.plan_id == plan_id && p.user_id == plan.user_id)
        else {
            return Ok(None);
        };

        existing.plan_name = plan.plan_name.clone();
        existing.fitness_goal = plan.fitness_goal.as_str().to_string();
        existing.activity_level = plan.activity_level.as_str().to_string();
        existing.primary_focus = plan.primary_focus.clone();
        existing.updated_at = Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn find_plan(
        &mut self,
        plan_id: i32,
        user_id: i32,
    ) -> Result<Option<WorkoutPlan>, DatabaseError> {
        Ok(self
            .working
            .plans
            .iter()
            .find(|p| p.plan_id == plan_id && p.user_id == user_id)
            .cloned())
    }

    async fn list_plans(&mut self, user_id: i32) -> Result<Vec<WorkoutPlan>, DatabaseError> {
        let mut plans: Vec<WorkoutPlan> = self
            .working
            .plans
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();

        plans.sort_by(|a, b| (b.created_at, b.plan_id).cmp(&(a.created_at, a.plan_id)));
        Ok(plans)
    }

    async fn plan_days(&mut self, plan_id: i32) -> Result<Vec<PlanDayDetail>, DatabaseError> {
        let working = &self.working;

        Ok(working
            .plan_days
            .iter()
            .filter(|day| day.plan_id == plan_id)
            .map(|day| {
                let mut exercises: Vec<PlanExerciseDetail> = working
                    .plan_exercises
                    .iter()
                    .filter(|pe| pe.plan_day_id == day.plan_day_id)
                    .filter_map(|pe| {
                        let catalog_entry = working
                            .exercises
                            .iter()
                            .find(|e| e.exercise_id == pe.exercise_id)
                            .cloned()?;
                        Some(PlanExerciseDetail {
                            plan_day_id: pe.plan_day_id,
                            exercise_id: pe.exercise_id,
                            name: catalog_entry.name,
                            difficulty: catalog_entry.difficulty,
                            sets: pe.sets,
                            reps: pe.reps,
                            order_index: pe.order_index,
                        })
                    })
                    .collect();
                exercises.sort_by_key(|e| e.order_index);

                PlanDayDetail {
                    plan_day_id: day.plan_day_id,
                    day_of_week: day.day_of_week.clone(),
                    focus: day.focus.clone(),
                    exercises,
                }
            })
            .collect())
    }

    async fn delete_plan(&mut self, plan_id: i32, user_id: i32) -> Result<bool, DatabaseError> {
        let owned = self
            .working
            .plans
            .iter()
            .any(|p| p.plan_id == plan_id && p.user_id == user_id);
        if !owned {
            return Ok(false);
        }

        self.delete_plan_days_and_exercises(plan_id).await?;
        self.working.plans.retain(|p| p.plan_id != plan_id);
        Ok(true)
    }
}
