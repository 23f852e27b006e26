//! Deterministic person names for sample users, drawn from curated lists.

use crate::rng::SeedRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (first + last) deterministically
    pub fn generate_full_name(rng: &mut SeedRng) -> String {
        let first_name = rng.pick(Self::first_names());
        let last_name = rng.pick(Self::last_names());
        format!("{first_name} {last_name}")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
            "Thomas", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul",
            "Andrew", "Joshua", "Kevin", "Brian", "Ryan", "Jacob", "Nicholas", "Eric",
            "Samuel", "Noah", "Ethan", "Dylan", "Jordan", "Gabriel", "Elijah", "Logan",
            "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Susan", "Jessica",
            "Sarah", "Karen", "Lisa", "Nancy", "Ashley", "Emily", "Michelle", "Amanda",
            "Melissa", "Rebecca", "Laura", "Amy", "Angela", "Anna", "Emma", "Nicole",
            "Samantha", "Rachel", "Maria", "Olivia", "Hannah", "Sophia", "Grace", "Ava",
            "Alex", "Casey", "Riley", "Quinn", "Avery", "Morgan", "Taylor", "Robin",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
            "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
            "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen",
            "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera",
            "Campbell", "Mitchell", "Carter", "Roberts", "Patel", "Kim", "Chen", "Tran",
        ]
    }
}
