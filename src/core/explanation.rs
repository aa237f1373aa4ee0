use crate::models::FactorSet;

/// Rationale for a male subject.
///
/// Strengths and concerns are collected per factor; when strengths outnumber
/// concerns the result reads "Strong match potential", otherwise it lists both
/// under "Mixed compatibility".
pub fn male_subject_explanation(factors: &FactorSet) -> String {
    let mut strengths = Vec::new();
    let mut concerns = Vec::new();

    if factors.age >= 80.0 {
        strengths.push("Ideal age gap");
    } else if factors.age < 60.0 {
        concerns.push("Age difference may be challenging");
    }

    if factors.income >= 80.0 {
        strengths.push("Compatible income levels");
    } else if factors.income < 60.0 {
        concerns.push("Significant income disparity");
    }

    if factors.height >= 85.0 {
        strengths.push("Good height compatibility");
    }

    if factors.children >= 90.0 {
        strengths.push("Aligned on having children");
    } else if factors.children < 50.0 {
        concerns.push("Different views on children");
    }

    if factors.relocation >= 80.0 {
        strengths.push("Location compatibility");
    }

    if strengths.len() > concerns.len() {
        format!("Strong match potential: {}", strengths.join(", "))
    } else {
        format!(
            "Mixed compatibility: {} but {}",
            concerns.join(", "),
            strengths.join(", ")
        )
    }
}

/// Rationale for a female subject.
///
/// Three or more strengths produce "Excellent match" naming the first three.
/// Concerns are tracked but never rendered.
pub fn female_subject_explanation(factors: &FactorSet) -> String {
    let strengths: Vec<&str> = [
        (factors.age >= 80.0, "Good age compatibility"),
        (factors.income >= 80.0, "Financial stability"),
        (factors.height >= 85.0, "Height compatibility"),
        (factors.children >= 90.0, "Shared family goals"),
        (factors.relocation >= 80.0, "Location flexibility"),
        (factors.profession >= 70.0, "Career balance"),
    ]
    .into_iter()
    .filter_map(|(hit, phrase)| hit.then_some(phrase))
    .collect();

    if strengths.len() >= 3 {
        format!("Excellent match: {}", strengths[..3].join(", "))
    } else if strengths.is_empty() {
        "Moderate compatibility with some challenges".to_string()
    } else {
        format!("Moderate compatibility with {}", strengths.join(", "))
    }
}
