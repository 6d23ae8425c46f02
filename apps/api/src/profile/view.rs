use serde::Serialize;

use crate::profile::dates::{education_date_range, position_date_range};
use crate::profile::raw::{Education, ImageVariant, Position, RawProfile, Skill};

/// Shown when the provider has no profile picture for the member.
pub const DEFAULT_PROFILE_PICTURE: &str =
    "https://images.unsplash.com/photo-1633332755192-727a05c4013d?w=400&h=400&fit=crop";

/// Render-ready profile. Every optional provider field has been resolved to a
/// concrete value or an explicit `None`, and every section carries its own
/// visibility flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub is_top_voice: bool,
    pub is_creator: bool,
    pub profile_picture_url: String,
    pub background_image_url: Option<String>,
    pub location: Option<String>,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub skills: Vec<SkillView>,
    pub show_summary: bool,
    pub show_location: bool,
    pub show_experience: bool,
    pub show_education: bool,
    pub show_skills: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub title: String,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub company_industry: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    /// e.g. `"Jan 2019 - Present · London"`
    pub date_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub school_name: String,
    /// Degree, then `" · <field of study>"` when a field is given.
    pub degree_line: Option<String>,
    pub logo_url: Option<String>,
    /// Year range, only when at least one side has a year.
    pub date_range: Option<String>,
    pub grade: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub name: String,
    pub passed_skill_assessment: bool,
    /// Endorsement count to display; `None` for zero or unknown counts.
    pub endorsement_badge: Option<String>,
}

/// Derives the view model from a raw payload. Total over every `RawProfile`.
pub fn normalize(raw: &RawProfile) -> ProfileView {
    let first_name = non_empty(raw.first_name.as_deref());
    let last_name = non_empty(raw.last_name.as_deref());
    let full_name = [first_name.as_deref(), last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let summary = non_empty(raw.summary.as_deref());
    let location = raw.geo.as_ref().and_then(|geo| {
        non_empty(geo.full.as_deref()).or_else(|| non_empty(geo.city.as_deref()))
    });

    let experience: Vec<ExperienceView> = raw.position.iter().map(experience_view).collect();
    let education: Vec<EducationView> = raw.educations.iter().map(education_view).collect();
    let skills: Vec<SkillView> = raw.skills.iter().map(skill_view).collect();

    ProfileView {
        full_name,
        first_name,
        last_name,
        username: non_empty(raw.username.as_deref()),
        headline: non_empty(raw.headline.as_deref()),
        show_summary: summary.is_some(),
        summary,
        is_top_voice: raw.is_top_voice.unwrap_or(false),
        is_creator: raw.is_creator.unwrap_or(false),
        profile_picture_url: non_empty(raw.profile_picture.as_deref())
            .unwrap_or_else(|| DEFAULT_PROFILE_PICTURE.to_string()),
        background_image_url: first_image_url(&raw.background_image),
        show_location: location.is_some(),
        location,
        show_experience: !experience.is_empty(),
        show_education: !education.is_empty(),
        show_skills: !skills.is_empty(),
        experience,
        education,
        skills,
    }
}

fn experience_view(position: &Position) -> ExperienceView {
    ExperienceView {
        title: position.title.clone().unwrap_or_default(),
        company_name: position.company_name.clone().unwrap_or_default(),
        company_logo_url: non_empty(position.company_logo.as_deref()),
        company_industry: non_empty(position.company_industry.as_deref()),
        employment_type: non_empty(position.employment_type.as_deref()),
        description: non_empty(position.description.as_deref()),
        date_range: position_date_range(
            position.start.as_ref(),
            position.end.as_ref(),
            position.location.as_deref(),
        ),
    }
}

fn education_view(education: &Education) -> EducationView {
    let degree = non_empty(education.degree.as_deref());
    let field = non_empty(education.field_of_study.as_deref());
    let degree_line = match (degree, field) {
        (Some(degree), Some(field)) => Some(format!("{degree} · {field}")),
        (Some(degree), None) => Some(degree),
        (None, Some(field)) => Some(format!("· {field}")),
        (None, None) => None,
    };

    EducationView {
        school_name: education.school_name.clone().unwrap_or_default(),
        degree_line,
        logo_url: first_image_url(&education.logo),
        date_range: education_date_range(education.start.as_ref(), education.end.as_ref()),
        grade: non_empty(education.grade.as_deref()),
        description: non_empty(education.description.as_deref()),
    }
}

fn skill_view(skill: &Skill) -> SkillView {
    SkillView {
        name: skill.name.clone().unwrap_or_default(),
        passed_skill_assessment: skill.passed_skill_assessment.unwrap_or(false),
        endorsement_badge: skill
            .endorsements_count
            .filter(|count| *count > 0)
            .map(|count| count.to_string()),
    }
}

/// URL of the first variant, if the list has one and it is non-empty.
fn first_image_url(variants: &[ImageVariant]) -> Option<String> {
    variants
        .first()
        .and_then(|v| non_empty(v.url.as_deref()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
