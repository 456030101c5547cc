//! Built-in activity catalogue.
//!
//! Nine activities, each starting with two registered students. The
//! registry is rebuilt from this list on every process start, so these are
//! also the values a restart returns to.

use mergington_types::Activity;

/// Helper to build a `(name, activity)` seed entry.
fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> (String, Activity) {
    let mut activity = Activity::new(description, schedule, max_participants);
    activity.participants = participants.iter().map(|p| (*p).to_owned()).collect();
    (name.to_owned(), activity)
}

/// The default activity catalogue.
pub fn default_activities() -> Vec<(String, Activity)> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Wednesdays, 4:00 PM - 5:30 PM",
            18,
            &["lucas@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Basketball Club",
            "Practice basketball skills and play friendly games",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["liam@mergington.edu", "ava@mergington.edu"],
        ),
        activity(
            "Art Workshop",
            "Explore painting, drawing, and other visual arts",
            "Mondays, 4:00 PM - 5:30 PM",
            16,
            &["ella@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Act, direct, and participate in school theater productions",
            "Fridays, 3:30 PM - 5:30 PM",
            20,
            &["isabella@mergington.edu", "jack@mergington.edu"],
        ),
        activity(
            "Math Olympiad",
            "Prepare for math competitions and solve challenging problems",
            "Tuesdays, 4:00 PM - 5:00 PM",
            10,
            &["ethan@mergington.edu", "grace@mergington.edu"],
        ),
        activity(
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Thursdays, 4:00 PM - 5:30 PM",
            14,
            &["alex@mergington.edu", "chloe@mergington.edu"],
        ),
    ]
}
