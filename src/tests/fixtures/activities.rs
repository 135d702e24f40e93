// Shared test fixtures for activities and registries.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::activities::adapters::outbound::registry_in_memory::InMemoryActivityRegistry;
use crate::modules::activities::core::activity::Activity;

pub fn make_activity(name: &str, max_participants: usize) -> Activity {
    Activity::new(
        name,
        format!("{name} description"),
        "Fridays, 3:30 PM - 5:00 PM",
        max_participants,
    )
}

/// Small registry: two roomy activities with seeded members and one that
/// holds a single participant.
pub fn make_registry() -> InMemoryActivityRegistry {
    InMemoryActivityRegistry::new(vec![
        make_activity("Chess Club", 12).with_participants(["michael@mergington.edu"]),
        make_activity("Programming Class", 20)
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        make_activity("Tiny Workshop", 1),
    ])
}
