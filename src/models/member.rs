use serde::Serialize;

/// A roster candidate as read from the member database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Employee number; members without one sort last.
    pub rank: Option<f64>,
    pub active: bool,
}

impl Member {
    pub fn new(id: &str, name: &str, rank: Option<f64>) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            rank,
            active: true,
        }
    }

    /// Display name, empty when missing.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Only active members with both a name and an identity take part.
    pub fn is_eligible(&self) -> bool {
        self.active
            && self.name.as_deref().is_some_and(|n| !n.is_empty())
            && self.id.as_deref().is_some_and(|i| !i.is_empty())
    }
}
