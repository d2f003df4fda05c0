use async_trait::async_trait;
use chrono::{DateTime, Utc, Weekday};
use sqlx::{PgPool, Postgres, Transaction};

use super::{
    DatabaseError, ExerciseCatalog, PlanDatabase, PlanHeaderStore, PlanStore, UnitOfWork,
};
use crate::models::{
    weekday_name, ExerciseCandidate, ExerciseQuery, NewPlanExercise, NewWorkoutPlan, PlanDay,
    PlanDayDetail, PlanExerciseDetail, WorkoutPlan,
};

const EXERCISE_COLUMNS: &str = r#"
    e.exercise_id, e.name, e.difficulty, e.equipment_options, e.video_url,
    ARRAY(SELECT g.muscle_group FROM exercise_muscle_groups g
          WHERE g.exercise_id = e.exercise_id ORDER BY g.muscle_group) AS muscle_groups,
    ARRAY(SELECT m.muscle FROM exercise_muscles m
          WHERE m.exercise_id = e.exercise_id ORDER BY m.muscle) AS muscles
"#;

const PLAN_COLUMNS: &str = r#"
    plan_id, user_id, plan_name, fitness_goal, activity_level, primary_focus,
    status, created_at, updated_at
"#;

#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanDatabase for PgDatabase {
    type UnitOfWork = PgUnitOfWork;

    async fn begin(&self) -> Result<PgUnitOfWork, DatabaseError> {
        let tx = self.pool.begin().await?;
        Ok(PgUnitOfWork { tx })
    }
}

/// A PostgreSQL transaction. Rolled back by sqlx if dropped uncommitted.
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn commit(self) -> Result<(), DatabaseError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), DatabaseError> {
        self.tx.rollback().await?;
        Ok(())
    }
}

#[async_trait]
impl ExerciseCatalog for PgUnitOfWork {
    async fn find_exercises(
        &mut self,
        query: &ExerciseQuery,
    ) -> Result<Vec<ExerciseCandidate>, DatabaseError> {
        let sql = format!(
            r#"
            SELECT {EXERCISE_COLUMNS}
            FROM exercises e
            WHERE (
                EXISTS (SELECT 1 FROM exercise_muscle_groups g
                        WHERE g.exercise_id = e.exercise_id AND g.muscle_group = ANY($1))
                OR EXISTS (SELECT 1 FROM exercise_muscles m
                           WHERE m.exercise_id = e.exercise_id AND m.muscle = ANY($1))
            )
            AND (
                cardinality($2::text[]) = 0
                OR EXISTS (SELECT 1 FROM exercise_muscles m
                           WHERE m.exercise_id = e.exercise_id AND m.muscle = ANY($2))
            )
            AND ($3::text[] IS NULL OR e.difficulty::text = ANY($3))
            ORDER BY e.exercise_id
            LIMIT $4
            "#
        );

        let exercises = sqlx::query_as::<_, ExerciseCandidate>(&sql)
            .bind(&query.muscle_groups_or_muscles)
            .bind(&query.specific_muscles)
            .bind(query.difficulty_names())
            .bind(query.limit as i64)
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(exercises)
    }

    async fn list_exercises(
        &mut self,
        muscle_group: Option<&str>,
    ) -> Result<Vec<ExerciseCandidate>, DatabaseError> {
        let sql = format!(
            r#"
            SELECT {EXERCISE_COLUMNS}
            FROM exercises e
            WHERE $1::text IS NULL
               OR EXISTS (SELECT 1 FROM exercise_muscle_groups g
                          WHERE g.exercise_id = e.exercise_id AND g.muscle_group = $1)
            ORDER BY e.exercise_id
            "#
        );

        let exercises = sqlx::query_as::<_, ExerciseCandidate>(&sql)
            .bind(muscle_group)
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(exercises)
    }
}

#[async_trait]
impl PlanStore for PgUnitOfWork {
    async fn plan_exists(&mut self, plan_id: i32) -> Result<bool, DatabaseError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM workout_plans WHERE plan_id = $1)")
                .bind(plan_id)
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(exists)
    }

    async fn create_plan_day(
        &mut self,
        plan_id: i32,
        day_of_week: Weekday,
        focus: &str,
    ) -> Result<i32, DatabaseError> {
        let plan_day_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO workout_plan_days (plan_id, day_of_week, focus)
            VALUES ($1, $2, $3)
            RETURNING plan_day_id
            "#,
        )
        .bind(plan_id)
        .bind(weekday_name(day_of_week))
        .bind(focus)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(plan_day_id)
    }

    async fn create_plan_exercise(&mut self, exercise: &NewPlanExercise) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO workout_plan_exercises (plan_day_id, exercise_id, sets, reps, order_index)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(exercise.plan_day_id)
        .bind(exercise.exercise_id)
        .bind(exercise.sets)
        .bind(exercise.reps)
        .bind(exercise.order_index)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn delete_plan_days_and_exercises(&mut self, plan_id: i32) -> Result<u64, DatabaseError> {
        sqlx::query(
            r#"
            DELETE FROM workout_plan_exercises
            WHERE plan_day_id IN (SELECT plan_day_id FROM workout_plan_days WHERE plan_id = $1)
            "#,
        )
        .bind(plan_id)
        .execute(&mut *self.tx)
        .await?;

        let result = sqlx::query("DELETE FROM workout_plan_days WHERE plan_id = $1")
            .bind(plan_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count_plan_days(&mut self, plan_id: i32) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_plan_days WHERE plan_id = $1")
            .bind(plan_id)
            .fetch_one(&mut *self.tx)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl PlanHeaderStore for PgUnitOfWork {
    async fn latest_plan_created_at(
        &mut self,
        user_id: i32,
    ) -> Result<Option<DateTime<Utc>>, DatabaseError> {
        let created_at: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT MAX(created_at) FROM workout_plans WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(created_at)
    }

    async fn create_plan(&mut self, plan: &NewWorkoutPlan) -> Result<WorkoutPlan, DatabaseError> {
        let sql = format!(
            r#"
            INSERT INTO workout_plans (user_id, plan_name, fitness_goal, activity_level, primary_focus)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PLAN_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, WorkoutPlan>(&sql)
            .bind(plan.user_id)
            .bind(&plan.plan_name)
            .bind(plan.fitness_goal.as_str())
            .bind(plan.activity_level.as_str())
            .bind(&plan.primary_focus)
            .fetch_one(&mut *self.tx)
            .await?;

        Ok(created)
    }

    async fn update_plan(
        &mut self,
        plan_id: i32,
        plan: &NewWorkoutPlan,
    ) -> Result<Option<WorkoutPlan>, DatabaseError> {
        let sql = format!(
            r#"
            UPDATE workout_plans
            SET plan_name = $3,
                fitness_goal = $4,
                activity_level = $5,
                primary_focus = $6,
                updated_at = NOW()
            WHERE plan_id = $1 AND user_id = $2
            RETURNING {PLAN_COLUMNS}
            "#
        );

        let updated = sqlx::query_as::<_, WorkoutPlan>(&sql)
            .bind(plan_id)
            .bind(plan.user_id)
            .bind(&plan.plan_name)
            .bind(plan.fitness_goal.as_str())
            .bind(plan.activity_level.as_str())
            .bind(&plan.primary_focus)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(updated)
    }

    async fn find_plan(
        &mut self,
        plan_id: i32,
        user_id: i32,
    ) -> Result<Option<WorkoutPlan>, DatabaseError> {
        let sql = format!("SELECT {PLAN_COLUMNS} FROM workout_plans WHERE plan_id = $1 AND user_id = $2");

        let plan = sqlx::query_as::<_, WorkoutPlan>(&sql)
            .bind(plan_id)
            .bind(user_id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(plan)
    }

    async fn list_plans(&mut self, user_id: i32) -> Result<Vec<WorkoutPlan>, DatabaseError> {
        let sql = format!(
            "SELECT {PLAN_COLUMNS} FROM workout_plans WHERE user_id = $1 ORDER BY created_at DESC, plan_id DESC"
        );

        let plans = sqlx::query_as::<_, WorkoutPlan>(&sql)
            .bind(user_id)
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(plans)
    }

    async fn plan_days(&mut self, plan_id: i32) -> Result<Vec<PlanDayDetail>, DatabaseError> {
        let days = sqlx::query_as::<_, PlanDay>(
            r#"
            SELECT plan_day_id, plan_id, day_of_week, focus
            FROM workout_plan_days
            WHERE plan_id = $1
            ORDER BY plan_day_id
            "#,
        )
        .bind(plan_id)
        .fetch_all(&mut *self.tx)
        .await?;

        let exercises = sqlx::query_as::<_, PlanExerciseDetail>(
            r#"
            SELECT pe.plan_day_id, pe.exercise_id, e.name, e.difficulty,
                   pe.sets, pe.reps, pe.order_index
            FROM workout_plan_exercises pe
            JOIN workout_plan_days d ON d.plan_day_id = pe.plan_day_id
            JOIN exercises e ON e.exercise_id = pe.exercise_id
            WHERE d.plan_id = $1
            ORDER BY pe.plan_day_id, pe.order_index
            "#,
        )
        .bind(plan_id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(days
            .into_iter()
            .map(|day| PlanDayDetail {
                exercises: exercises
                    .iter()
                    .filter(|e| e.plan_day_id == day.plan_day_id)
                    .cloned()
                    .collect(),
                plan_day_id: day.plan_day_id,
                day_of_week: day.day_of_week,
                focus: day.focus,
            })
            .collect())
    }

    async fn delete_plan(&mut self, plan_id: i32, user_id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM workout_plans WHERE plan_id = $1 AND user_id = $2")
            .bind(plan_id)
            .bind(user_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
