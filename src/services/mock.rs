//! Demo roster generation
//!
//! Produces plausible customer profiles for local runs and benchmarks. All
//! randomness comes from the caller's RNG so a seed reproduces the roster.

use crate::models::{Gender, MaritalStatus, Preference, Profile};
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

const MALE_NAMES: &[&str] = &[
    "Raj", "Arjun", "Vikram", "Rohit", "Amit", "Karan", "Nikhil", "Ravi", "Suresh", "Deepak",
];
const FEMALE_NAMES: &[&str] = &[
    "Priya", "Anita", "Kavya", "Sneha", "Pooja", "Meera", "Sasha", "Ritika", "Neha", "Divya",
];
const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Kumar", "Singh", "Gupta", "Agarwal", "Jain", "Shah", "Mehta", "Verma",
];
const CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai", "Pune", "Kolkata", "Ahmedabad",
];
const COLLEGES: &[&str] = &[
    "IIT Delhi", "IIM Bangalore", "Delhi University", "Mumbai University", "VIT", "SRM", "Manipal",
];
const DEGREES: &[&str] = &["B.Tech", "MBA", "B.Com", "M.Tech", "CA", "B.Sc", "M.Sc", "BBA"];
const COMPANIES: &[&str] = &[
    "TCS", "Infosys", "Wipro", "Google", "Microsoft", "Amazon", "Flipkart", "Accenture",
];
const DESIGNATIONS: &[&str] = &[
    "Software Engineer", "Manager", "Senior Developer", "Consultant", "Analyst", "Team Lead",
];
const RELIGIONS: &[&str] = &["Hindu", "Christian", "Muslim", "Sikh", "Jain"];
const CASTES: &[&str] = &["General", "OBC", "SC", "ST", "Brahmin", "Kshatriya", "Vaishya"];
const LANGUAGE_PAIRS: &[[&str; 2]] = &[
    ["Hindi", "English"],
    ["English", "Tamil"],
    ["Hindi", "Marathi"],
    ["English", "Telugu"],
    ["Hindi", "Gujarati"],
];

/// A fully populated profile with neutral defaults
///
/// Men default to 30 years / 175 cm / 1,000,000; women to 27 / 160 / 700,000.
/// Both live in Mumbai, want kids, are open to relocating and are Hindu
/// consultants at Deloitte with a B.Com from Mumbai University.
pub fn base_profile(id: &str, first_name: &str, gender: Gender) -> Profile {
    let (age, height_cm, income) = match gender {
        Gender::Male => (30, 175, 1_000_000),
        Gender::Female => (27, 160, 700_000),
    };

    Profile {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: String::new(),
        gender,
        age,
        country: "India".to_string(),
        city: "Mumbai".to_string(),
        height_cm,
        income,
        undergraduate_college: "Mumbai University".to_string(),
        degree: "B.Com".to_string(),
        current_company: "Deloitte".to_string(),
        designation: "Consultant".to_string(),
        marital_status: MaritalStatus::Single,
        languages_known: Default::default(),
        siblings: 1,
        caste: "General".to_string(),
        religion: "Hindu".to_string(),
        want_kids: Preference::Yes,
        open_to_relocate: Preference::Yes,
        open_to_pets: Preference::Maybe,
        created_at: None,
        last_active: None,
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[&str]) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

/// Skewed yes/maybe/no draw for relocation and pets
fn openness<R: Rng + ?Sized>(rng: &mut R) -> Preference {
    if rng.gen::<f64>() > 0.6 {
        Preference::Yes
    } else if rng.gen::<f64>() > 0.3 {
        Preference::Maybe
    } else {
        Preference::No
    }
}

fn wants_kids<R: Rng + ?Sized>(rng: &mut R) -> Preference {
    if rng.gen::<f64>() > 0.7 {
        Preference::Maybe
    } else if rng.gen::<f64>() > 0.3 {
        Preference::Yes
    } else {
        Preference::No
    }
}

/// Generate `count` profiles alternating male and female, ids `cust_1..`
pub fn generate_mock_profiles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Profile> {
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
            let first_name = match gender {
                Gender::Male => pick(rng, MALE_NAMES),
                Gender::Female => pick(rng, FEMALE_NAMES),
            };

            let mut profile = base_profile(&format!("cust_{}", i + 1), &first_name, gender);
            profile.last_name = pick(rng, LAST_NAMES);
            profile.age = rng.gen_range(25..40);
            profile.city = pick(rng, CITIES);
            profile.height_cm = match gender {
                Gender::Male => rng.gen_range(165..190),
                Gender::Female => rng.gen_range(150..170),
            };
            profile.income = match gender {
                Gender::Male => 800_000 + rng.gen_range(0..1_500_000),
                Gender::Female => 600_000 + rng.gen_range(0..1_200_000),
            };
            profile.undergraduate_college = pick(rng, COLLEGES);
            profile.degree = pick(rng, DEGREES);
            profile.current_company = pick(rng, COMPANIES);
            profile.designation = pick(rng, DESIGNATIONS);
            profile.marital_status = if rng.gen::<f64>() > 0.9 {
                MaritalStatus::Divorced
            } else {
                MaritalStatus::Single
            };
            profile.languages_known = LANGUAGE_PAIRS
                .choose(rng)
                .map(|pair| pair.iter().map(|l| l.to_string()).collect())
                .unwrap_or_default();
            profile.siblings = rng.gen_range(0..4);
            profile.caste = pick(rng, CASTES);
            profile.religion = pick(rng, RELIGIONS);
            profile.want_kids = wants_kids(rng);
            profile.open_to_relocate = openness(rng);
            profile.open_to_pets = openness(rng);
            profile.created_at = Some(now - Duration::days(rng.gen_range(0..90)));
            profile.last_active = Some(now - Duration::days(rng.gen_range(0..7)));
            profile
        })
        .collect()
}
