//! Built-in exercise library, workout programs and progress log

use crate::models::{
    Difficulty, Equipment, Exercise, MuscleGroup, PersonalRecord, ProgramCategory, ProgramPhase,
    ProgressLog, StrengthEntry, WeightEntry, WorkoutProgram,
};

const BENCH_IMAGE: &str = "bench_press_exercise_demonstration.png";
const SQUAT_IMAGE: &str = "squat_exercise_demonstration.png";
const DEADLIFT_IMAGE: &str = "deadlift_exercise_demonstration.png";

const STRENGTH_IMAGE: &str = "strength_training_workout_thumbnail.png";
const CARDIO_IMAGE: &str = "cardio_workout_thumbnail.png";
const HIIT_IMAGE: &str = "hiit_workout_thumbnail.png";

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: u32,
    name: &str,
    muscle: MuscleGroup,
    equipment: Equipment,
    difficulty: Difficulty,
    image: &str,
    description: &str,
    instructions: &[&str],
) -> Exercise {
    Exercise {
        id,
        name: name.to_string(),
        muscle,
        equipment,
        difficulty,
        image: image.to_string(),
        description: description.to_string(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn exercises() -> Vec<Exercise> {
    use Difficulty::*;
    use Equipment::*;
    use MuscleGroup::*;

    vec![
        exercise(
            1,
            "Barbell Bench Press",
            Chest,
            Barbell,
            Intermediate,
            BENCH_IMAGE,
            "The bench press is a compound exercise that targets the muscles of the chest, shoulders, and triceps.",
            &[
                "Lie on a flat bench with your eyes under the bar.",
                "Grip the bar slightly wider than shoulder-width.",
                "Unrack the bar and lower it to your mid-chest.",
                "Press the bar back up to the starting position.",
            ],
        ),
        exercise(
            2,
            "Barbell Squat",
            Legs,
            Barbell,
            Advanced,
            SQUAT_IMAGE,
            "The squat is the king of all leg exercises, targeting the quads, hamstrings, and glutes.",
            &[
                "Place the barbell on your upper back.",
                "Stand with feet shoulder-width apart.",
                "Lower your hips back and down as if sitting in a chair.",
                "Drive back up through your heels.",
            ],
        ),
        exercise(
            3,
            "Deadlift",
            Back,
            Barbell,
            Advanced,
            DEADLIFT_IMAGE,
            "A total body movement that primarily targets the posterior chain.",
            &[
                "Stand with feet hip-width apart, mid-foot under the bar.",
                "Hinge at hips to grip the bar.",
                "Keep chest up and back flat.",
                "Drive through legs to lift the bar.",
            ],
        ),
        exercise(
            4,
            "Dumbbell Flyes",
            Chest,
            Dumbbells,
            Beginner,
            BENCH_IMAGE,
            "An isolation exercise for the chest muscles.",
            &[
                "Lie on a bench with dumbbells in hand.",
                "Lower weights out to sides with slight bend in elbows.",
                "Bring weights back together at the top.",
            ],
        ),
        exercise(
            5,
            "Leg Press",
            Legs,
            Machine,
            Beginner,
            SQUAT_IMAGE,
            "A machine-based compound leg exercise.",
            &[
                "Sit in machine with feet on platform.",
                "Lower platform until knees are at 90 degrees.",
                "Press platform back up.",
            ],
        ),
        exercise(
            6,
            "Pull Ups",
            Back,
            Bodyweight,
            Intermediate,
            DEADLIFT_IMAGE,
            "The ultimate bodyweight back builder.",
            &[
                "Grip bar with palms facing away.",
                "Pull yourself up until chin is over bar.",
                "Lower yourself with control.",
            ],
        ),
        exercise(
            7,
            "Push Ups",
            Chest,
            Bodyweight,
            Beginner,
            BENCH_IMAGE,
            "A classic bodyweight chest exercise.",
            &[
                "Start in plank position.",
                "Lower chest to floor.",
                "Push back up to starting position.",
            ],
        ),
        exercise(
            8,
            "Lunges",
            Legs,
            Dumbbells,
            Beginner,
            SQUAT_IMAGE,
            "Unilateral leg exercise for balance and strength.",
            &[
                "Step forward with one leg.",
                "Lower back knee toward ground.",
                "Push back to standing.",
            ],
        ),
    ]
}

struct ProgramSeed<'a> {
    id: u32,
    title: &'a str,
    description: &'a str,
    long_description: &'a str,
    level: Difficulty,
    duration_weeks: u32,
    days_per_week: u32,
    category: ProgramCategory,
    image: &'a str,
    phases: &'a [(&'a str, &'a str)],
}

impl ProgramSeed<'_> {
    fn build(self) -> WorkoutProgram {
        WorkoutProgram {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            long_description: self.long_description.to_string(),
            level: self.level,
            duration_weeks: self.duration_weeks,
            days_per_week: self.days_per_week,
            category: self.category,
            image: self.image.to_string(),
            phases: self
                .phases
                .iter()
                .map(|(title, focus)| ProgramPhase {
                    title: title.to_string(),
                    focus: focus.to_string(),
                })
                .collect(),
        }
    }
}

pub(super) fn programs() -> Vec<WorkoutProgram> {
    vec![
        ProgramSeed {
            id: 1,
            title: "Hypertrophy Master",
            description: "A 12-week program focused on maximum muscle growth using a PPL split.",
            long_description: "This program is designed for intermediate to advanced lifters looking to maximize hypertrophy. It utilizes a Push/Pull/Legs split performed 6 days a week. Each session focuses on compound movements followed by isolation exercises to target all muscle groups effectively.",
            level: Difficulty::Advanced,
            duration_weeks: 12,
            days_per_week: 6,
            category: ProgramCategory::Strength,
            image: STRENGTH_IMAGE,
            phases: &[
                ("Week 1-4", "Volume Accumulation"),
                ("Week 5-8", "Intensity & Strength"),
                ("Week 9-12", "Peak Performance"),
            ],
        }
        .build(),
        ProgramSeed {
            id: 2,
            title: "Beginner Strength",
            description: "Build a solid foundation with compound movements and linear progression.",
            long_description: "Perfect for those new to lifting. This program focuses on mastering the big 3 lifts (Squat, Bench, Deadlift) and building a base level of strength.",
            level: Difficulty::Beginner,
            duration_weeks: 8,
            days_per_week: 3,
            category: ProgramCategory::Strength,
            image: STRENGTH_IMAGE,
            phases: &[
                ("Week 1-4", "Technique Mastery"),
                ("Week 5-8", "Linear Progression"),
            ],
        }
        .build(),
        ProgramSeed {
            id: 3,
            title: "HIIT Burner",
            description: "High intensity intervals to torch fat and improve cardiovascular health.",
            long_description: "Short on time but want big results? This HIIT program combines bodyweight exercises and sprints to maximize calorie burn during and after your workout.",
            level: Difficulty::Intermediate,
            duration_weeks: 4,
            days_per_week: 4,
            category: ProgramCategory::Cardio,
            image: HIIT_IMAGE,
            phases: &[
                ("Week 1-2", "Conditioning Base"),
                ("Week 3-4", "Max Intensity Intervals"),
            ],
        }
        .build(),
        ProgramSeed {
            id: 4,
            title: "Marathon Prep",
            description: "Endurance focused running plan to get you race ready.",
            long_description: "A structured running plan to take you from 10k to marathon distance. Includes long runs, tempo runs, and recovery sessions.",
            level: Difficulty::Intermediate,
            duration_weeks: 16,
            days_per_week: 5,
            category: ProgramCategory::Cardio,
            image: CARDIO_IMAGE,
            phases: &[
                ("Week 1-4", "Base Building"),
                ("Week 5-12", "Distance Increase"),
                ("Week 13-16", "Taper & Race"),
            ],
        }
        .build(),
        ProgramSeed {
            id: 5,
            title: "Functional Fitness",
            description: "Improve daily movement patterns and overall mobility.",
            long_description: "Move better, feel better. This program targets mobility, core strength, and functional movement patterns used in daily life.",
            level: Difficulty::AllLevels,
            duration_weeks: 6,
            days_per_week: 3,
            category: ProgramCategory::Mobility,
            image: HIIT_IMAGE,
            phases: &[
                ("Week 1-2", "Mobility Basics"),
                ("Week 3-4", "Stability & Control"),
                ("Week 5-6", "Dynamic Movement"),
            ],
        }
        .build(),
    ]
}

const WEIGH_INS: [(&str, f64); 8] = [
    ("Jan 1", 185.0),
    ("Jan 8", 184.0),
    ("Jan 15", 183.0),
    ("Jan 22", 182.5),
    ("Jan 29", 181.0),
    ("Feb 5", 180.5),
    ("Feb 12", 180.0),
    ("Feb 19", 179.0),
];

// (month, bench, squat, deadlift)
const ONE_REP_MAXES: [(&str, u32, u32, u32); 3] = [
    ("Jan", 135, 185, 225),
    ("Feb", 145, 205, 245),
    ("Mar", 155, 225, 275),
];

const RECORDS: [(&str, &str, &str); 3] = [
    ("Deadlift", "2024-03-15", "275 lbs"),
    ("5k Run", "2024-02-28", "24:30"),
    ("Bench Press", "2024-02-10", "155 lbs"),
];

pub(super) fn progress() -> ProgressLog {
    ProgressLog {
        weight: WEIGH_INS
            .iter()
            .map(|&(date, weight_lb)| WeightEntry {
                date: date.to_string(),
                weight_lb,
            })
            .collect(),
        strength: ONE_REP_MAXES
            .iter()
            .map(|&(date, bench_lb, squat_lb, deadlift_lb)| StrengthEntry {
                date: date.to_string(),
                bench_lb,
                squat_lb,
                deadlift_lb,
            })
            .collect(),
        records: RECORDS
            .iter()
            .map(|&(activity, date, value)| PersonalRecord {
                activity: activity.to_string(),
                date: date.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}
