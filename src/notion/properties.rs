//! Raw page layouts of the two databases.
//!
//! Every property is optional on the wire: a missing property, a `null`
//! value, an empty array or a value of the wrong type all read as absence.

use crate::models::{InterviewEvent, Member};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `T` when the value has the expected shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRef {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeopleProperty {
    #[serde(default, deserialize_with = "lenient")]
    pub people: Option<Vec<PersonRef>>,
}

impl PeopleProperty {
    fn first_id(&self) -> Option<String> {
        self.people
            .as_ref()?
            .first()?
            .id
            .clone()
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateValue {
    /// Kept raw: only presence matters, whatever its type.
    #[serde(default)]
    pub start: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateProperty {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<DateValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichText {
    #[serde(default, deserialize_with = "lenient")]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitleProperty {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<Vec<RichText>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NumberProperty {
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckboxProperty {
    #[serde(default, deserialize_with = "lenient")]
    pub checkbox: Option<bool>,
}

// ---------------------------
// Stamp rally log
// ---------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StampRallyProperties {
    #[serde(rename = "Interviewer", default, deserialize_with = "lenient")]
    pub interviewer: Option<PeopleProperty>,
    #[serde(rename = "Interviewee", default, deserialize_with = "lenient")]
    pub interviewee: Option<PeopleProperty>,
    #[serde(rename = "Date", default, deserialize_with = "lenient")]
    pub date: Option<DateProperty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StampRallyPage {
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<StampRallyProperties>,
}

impl From<StampRallyPage> for InterviewEvent {
    fn from(page: StampRallyPage) -> Self {
        let p = page.properties.unwrap_or_default();
        // done ⇔ a start value is present and not null
        let done = p
            .date
            .and_then(|d| d.date)
            .and_then(|d| d.start)
            .is_some_and(|s| !s.is_null());

        InterviewEvent {
            interviewer: p.interviewer.and_then(|x| x.first_id()),
            interviewee: p.interviewee.and_then(|x| x.first_id()),
            done,
        }
    }
}

// ---------------------------
// Member roster
// ---------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberProperties {
    #[serde(rename = "アカウント", default, deserialize_with = "lenient")]
    pub account: Option<PeopleProperty>,
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: Option<TitleProperty>,
    #[serde(rename = "社員番号", default, deserialize_with = "lenient")]
    pub employee_number: Option<NumberProperty>,
    #[serde(rename = "旧メンバー", default, deserialize_with = "lenient")]
    pub former_member: Option<CheckboxProperty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberPage {
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<MemberProperties>,
}

impl From<MemberPage> for Member {
    fn from(page: MemberPage) -> Self {
        let p = page.properties.unwrap_or_default();

        let name = p
            .name
            .and_then(|t| t.title)
            .and_then(|t| t.into_iter().next())
            .and_then(|t| t.plain_text)
            .filter(|s| !s.is_empty());

        let former = p
            .former_member
            .and_then(|c| c.checkbox)
            .unwrap_or(false);

        Member {
            id: p.account.and_then(|a| a.first_id()),
            name,
            rank: p.employee_number.and_then(|n| n.number),
            active: !former,
        }
    }
}
