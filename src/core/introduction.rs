use crate::models::{Gender, MatchIntroduction, MatchScore, Profile, Recommendation};
use rand::Rng;

pub const MAX_HIGHLIGHTS: usize = 4;

/// Institution markers that count as premier education
const TOP_TIER_MARKERS: &[&str] = &["IIT", "IIM", "BITS", "NIT", "IIIT"];

const HIGH_CLOSING: &str = "We're particularly excited about this introduction given the strong \
                            alignment in your core values and life goals.";
const MEDIUM_CLOSING: &str =
    "While every match is unique, we see promising potential for a meaningful connection.";

/// Opening paragraph styles for an introduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrativeTemplate {
    Excited,
    SharedValues,
    Personal,
}

impl NarrativeTemplate {
    pub const ALL: [NarrativeTemplate; 3] = [
        NarrativeTemplate::Excited,
        NarrativeTemplate::SharedValues,
        NarrativeTemplate::Personal,
    ];

    /// Uniform pick; callers control determinism through the RNG.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    fn render(self, subject: &Profile, candidate: &Profile) -> String {
        match self {
            NarrativeTemplate::Excited => format!(
                "We're excited to introduce {}, a {}-year-old {} at {}. Based on {}'s preferences \
                 and our compatibility analysis, we believe this could be a wonderful match.",
                candidate.first_name,
                candidate.age,
                candidate.designation,
                candidate.current_company,
                subject.first_name,
            ),
            NarrativeTemplate::SharedValues => format!(
                "Meet {} - a {} from {} who shares many of {}'s values and life goals. Our \
                 matching algorithm indicates strong compatibility across multiple dimensions.",
                candidate.first_name, candidate.designation, candidate.city, subject.first_name,
            ),
            NarrativeTemplate::Personal => format!(
                "{}, we'd love to introduce you to {}, a {}-year-old professional who we think \
                 could be an excellent match based on your shared interests and complementary \
                 qualities.",
                subject.first_name, candidate.first_name, candidate.age,
            ),
        }
    }
}

pub fn is_top_tier_education(college: &str) -> bool {
    TOP_TIER_MARKERS.iter().any(|marker| college.contains(marker))
}

/// Up to four highlight lines, in fixed priority order
pub fn match_highlights(subject: &Profile, candidate: &Profile, score: &MatchScore) -> Vec<String> {
    let factors = &score.factors;
    let mut highlights = Vec::new();

    if factors.age >= 85.0 {
        highlights.push(format!(
            "Perfect age compatibility ({} year difference)",
            subject.age.abs_diff(candidate.age)
        ));
    }

    if factors.profession >= 75.0 {
        highlights.push("Both are established professionals in their fields".to_string());
    }

    if subject.city == candidate.city {
        highlights.push(format!("Both based in {}", subject.city));
    } else if factors.relocation >= 70.0 {
        highlights.push("Open to relocation for the right match".to_string());
    }

    if is_top_tier_education(&subject.undergraduate_college)
        && is_top_tier_education(&candidate.undergraduate_college)
    {
        highlights.push("Both from premier educational institutions".to_string());
    }

    if factors.children >= 90.0 {
        highlights.push("Aligned family planning goals".to_string());
    }

    if subject.gender == Gender::Male && factors.income >= 80.0 {
        highlights.push("Complementary career aspirations".to_string());
    }

    highlights.truncate(MAX_HIGHLIGHTS);
    highlights
}

/// Assemble the narrative from a template, the highlights and a closing line
pub fn craft_narrative(
    template: NarrativeTemplate,
    subject: &Profile,
    candidate: &Profile,
    highlights: &[String],
    recommendation: Recommendation,
) -> String {
    let mut narrative = template.render(subject, candidate);

    if !highlights.is_empty() {
        narrative.push_str("\n\nKey compatibility factors:\n");
        let bullets: Vec<String> = highlights.iter().map(|h| format!("• {}", h)).collect();
        narrative.push_str(&bullets.join("\n"));
    }

    match recommendation {
        Recommendation::High => {
            narrative.push_str("\n\n");
            narrative.push_str(HIGH_CLOSING);
        }
        Recommendation::Medium => {
            narrative.push_str("\n\n");
            narrative.push_str(MEDIUM_CLOSING);
        }
        Recommendation::Low => {}
    }

    narrative
}

/// Introduce `candidate` to `subject` using the thread-local RNG for the
/// template pick
pub fn generate_introduction(
    subject: &Profile,
    candidate: &Profile,
    score: &MatchScore,
) -> MatchIntroduction {
    generate_introduction_with_rng(subject, candidate, score, &mut rand::thread_rng())
}

/// Introduce `candidate` to `subject`, drawing the template from `rng`
pub fn generate_introduction_with_rng<R: Rng + ?Sized>(
    subject: &Profile,
    candidate: &Profile,
    score: &MatchScore,
    rng: &mut R,
) -> MatchIntroduction {
    let highlights = match_highlights(subject, candidate, score);
    let template = NarrativeTemplate::choose(rng);
    let narrative = craft_narrative(
        template,
        subject,
        candidate,
        &highlights,
        score.recommendation,
    );

    MatchIntroduction {
        subject_name: subject.full_name(),
        candidate_name: candidate.full_name(),
        narrative,
        highlights,
    }
}
