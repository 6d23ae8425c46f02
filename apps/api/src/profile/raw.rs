//! Raw profile payload as returned by the profile-data provider.
//!
//! Every field is optional and every field is read leniently: a value whose JSON
//! type does not match the expected one is treated as absent. Lists keep their
//! length and order; an element that cannot be read becomes an all-absent entry.
#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub urn: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub is_top_voice: Option<bool>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub is_creator: Option<bool>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub profile_picture: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub background_image: Vec<ImageVariant>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub geo: Option<Geo>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub educations: Vec<Education>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub position: Vec<Position>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub full_positions: Vec<Position>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub skills: Vec<Skill>,
}

impl RawProfile {
    /// Reads a provider payload. Total: anything that is not a JSON object
    /// yields the empty profile.
    pub fn from_json(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// One size variant of an image (background image, school logo).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageVariant {
    #[serde(default, deserialize_with = "lenient::int")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geo {
    #[serde(default, deserialize_with = "lenient::option")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub full: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub country_code: Option<String>,
}

/// Partial calendar date. `year` decides validity; `day` is carried but never displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DateInfo {
    #[serde(default, deserialize_with = "lenient::int")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub month: Option<u32>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub day: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "lenient::record")]
    pub start: Option<DateInfo>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub end: Option<DateInfo>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub field_of_study: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub activities: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub school_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub logo: Vec<ImageVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default, deserialize_with = "lenient::int")]
    pub company_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub company_username: Option<String>,
    #[serde(rename = "companyURL", default, deserialize_with = "lenient::option")]
    pub company_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub company_logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub company_industry: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub company_staff_count_range: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub multi_locale_title: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub multi_locale_company_name: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub employment_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub start: Option<DateInfo>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub end: Option<DateInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default, deserialize_with = "lenient::option")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub passed_skill_assessment: Option<bool>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub endorsements_count: Option<u64>,
}

/// Field deserializers that never reject a payload.
///
/// Derived struct impls also accept a JSON array as a positional struct, so
/// struct-typed fields and list elements go through `record`/`list`, which
/// only read JSON objects.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Reads any JSON value and keeps it only if it has the expected shape.
    pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).ok())
    }

    /// Like `option`, for nested records: anything but a JSON object is absent.
    pub fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(object(Value::deserialize(deserializer)?))
    }

    /// Integer fields. Integral floats such as `2019.0` count as integers;
    /// fractions and out-of-range values are absent.
    pub fn int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<i64>,
    {
        let number = match Value::deserialize(deserializer)? {
            Value::Number(number) => number,
            _ => return Ok(None),
        };
        let whole = number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        });
        Ok(whole.and_then(|n| T::try_from(n).ok()))
    }

    /// Reads a JSON array of records element by element. Elements that are not
    /// readable objects become `T::default()` so positions are preserved; a
    /// non-array is an empty list.
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let items = match Value::deserialize(deserializer)? {
            Value::Array(items) => items,
            _ => return Ok(Vec::new()),
        };
        Ok(items
            .into_iter()
            .map(|item| object(item).unwrap_or_default())
            .collect())
    }

    fn object<T: DeserializeOwned>(value: Value) -> Option<T> {
        if !value.is_object() {
            return None;
        }
        T::deserialize(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_empty_profile() {
        assert_eq!(RawProfile::from_json(json!({})), RawProfile::default());
    }

    #[test]
    fn test_non_object_payload_is_empty_profile() {
        assert_eq!(RawProfile::from_json(json!(null)), RawProfile::default());
        assert_eq!(RawProfile::from_json(json!([1, 2, 3])), RawProfile::default());
        assert_eq!(RawProfile::from_json(json!("oops")), RawProfile::default());
    }

    #[test]
    fn test_reads_camel_case_fields() {
        let raw = RawProfile::from_json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "isTopVoice": true,
            "profilePicture": "https://img.example/ada.jpg",
            "geo": { "city": "London", "countryCode": "GB" },
            "position": [{ "companyURL": "https://acme.example", "companyName": "Acme" }]
        }));

        assert_eq!(raw.first_name.as_deref(), Some("Ada"));
        assert_eq!(raw.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(raw.is_top_voice, Some(true));
        let geo = raw.geo.unwrap();
        assert_eq!(geo.city.as_deref(), Some("London"));
        assert_eq!(geo.country_code.as_deref(), Some("GB"));
        assert_eq!(
            raw.position[0].company_url.as_deref(),
            Some("https://acme.example")
        );
    }

    #[test]
    fn test_mismatched_types_are_absent() {
        let raw = RawProfile::from_json(json!({
            "headline": 42,
            "isCreator": "yes",
            "skills": { "not": "a list" },
            "geo": "Paris",
            "summary": null
        }));

        assert_eq!(raw.headline, None);
        assert_eq!(raw.is_creator, None);
        assert!(raw.skills.is_empty());
        assert_eq!(raw.geo, None);
        assert_eq!(raw.summary, None);
    }

    #[test]
    fn test_unreadable_list_items_keep_their_slot() {
        let raw = RawProfile::from_json(json!({
            "position": [{ "title": "A" }, 7, { "title": "C" }]
        }));

        assert_eq!(raw.position.len(), 3);
        assert_eq!(raw.position[0].title.as_deref(), Some("A"));
        assert_eq!(raw.position[1], Position::default());
        assert_eq!(raw.position[2].title.as_deref(), Some("C"));
    }

    #[test]
    fn test_negative_endorsement_count_is_absent() {
        let raw = RawProfile::from_json(json!({
            "skills": [{ "name": "Rust", "endorsementsCount": -3 }]
        }));
        assert_eq!(raw.skills[0].name.as_deref(), Some("Rust"));
        assert_eq!(raw.skills[0].endorsements_count, None);
    }

    #[test]
    fn test_array_shaped_records_are_absent() {
        let raw = RawProfile::from_json(json!({
            "geo": ["France", "Paris", "Paris, France"],
            "position": [{ "start": [2020, 3], "end": { "year": 2021 } }],
            "educations": [["2015", "2019"]],
            "skills": [["Rust", false, 7]],
            "backgroundImage": [[800, 200, "https://img.example/bg.jpg"]]
        }));

        assert_eq!(raw.geo, None);
        assert_eq!(raw.position[0].start, None);
        assert_eq!(raw.position[0].end.unwrap().year, Some(2021));
        assert_eq!(raw.educations, vec![Education::default()]);
        assert_eq!(raw.skills, vec![Skill::default()]);
        assert_eq!(raw.background_image, vec![ImageVariant::default()]);
    }

    #[test]
    fn test_array_payload_is_not_read_positionally() {
        let raw = RawProfile::from_json(json!([42, "urn:li:1", "ada", "Ada"]));
        assert_eq!(raw, RawProfile::default());
    }

    #[test]
    fn test_integral_floats_are_integers() {
        let raw = RawProfile::from_json(json!({
            "id": 7.0,
            "skills": [{ "name": "Rust", "endorsementsCount": 5.0 }],
            "position": [{ "start": { "year": 2019.0, "month": 1.0 } }]
        }));

        assert_eq!(raw.id, Some(7));
        assert_eq!(raw.skills[0].endorsements_count, Some(5));
        let start = raw.position[0].start.unwrap();
        assert_eq!(start.year, Some(2019));
        assert_eq!(start.month, Some(1));
    }

    #[test]
    fn test_fractional_or_out_of_range_numbers_are_absent() {
        let raw = RawProfile::from_json(json!({
            "skills": [{ "endorsementsCount": 2.5 }],
            "backgroundImage": [{ "width": 1e20, "height": -1 }],
            "position": [{ "start": { "year": "2019", "month": 3 } }]
        }));

        assert_eq!(raw.skills[0].endorsements_count, None);
        assert_eq!(raw.background_image[0].width, None);
        assert_eq!(raw.background_image[0].height, None);
        assert_eq!(raw.position[0].start.unwrap().year, None);
    }

    #[test]
    fn test_partial_dates() {
        let raw = RawProfile::from_json(json!({
            "educations": [{ "start": { "year": 2015 }, "end": { "month": 6 } }]
        }));
        let edu = &raw.educations[0];
        assert_eq!(edu.start.unwrap().year, Some(2015));
        assert_eq!(edu.start.unwrap().month, None);
        assert_eq!(edu.end.unwrap().year, None);
        assert_eq!(edu.end.unwrap().month, Some(6));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = RawProfile::from_json(json!({
            "username": "ada",
            "somethingNew": { "deeply": ["nested"] }
        }));
        assert_eq!(raw.username.as_deref(), Some("ada"));
    }
}
