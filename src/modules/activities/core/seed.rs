use crate::modules::activities::core::activity::Activity;

/// Activities offered by Mergington High School at startup.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Basketball Team",
            "Practice and compete in inter-school basketball games",
            "Wednesdays, 4:00 PM - 6:00 PM",
            15,
        )
        .with_participants(["liam@mergington.edu"]),
        Activity::new(
            "Swimming Club",
            "Improve swimming technique and train for competitions",
            "Saturdays, 9:00 AM - 11:00 AM",
            10,
        )
        .with_participants(["ava@mergington.edu"]),
        Activity::new(
            "Art Studio",
            "Explore painting, drawing and sculpture",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
        )
        .with_participants(["mia@mergington.edu", "noah@mergington.edu"]),
        Activity::new(
            "Drama Club",
            "Act, direct and produce school theater performances",
            "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
            25,
        )
        .with_participants(["isabella@mergington.edu"]),
        Activity::new(
            "Math Olympiad",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["ethan@mergington.edu", "lucas@mergington.edu"]),
        Activity::new(
            "Science Club",
            "Run hands-on experiments and prepare for the science fair",
            "Fridays, 2:00 PM - 3:30 PM",
            18,
        )
        .with_participants(["amelia@mergington.edu"]),
    ]
}
