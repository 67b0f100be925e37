use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DrillRecord {
    /// Opaque identity token, assigned once at creation.
    pub id: String,
    pub name: String,
    pub shots: u32,
    /// Calendar date only; the single dimension used for filtering.
    pub date: NaiveDate,
}

impl DrillRecord {
    pub fn new(name: &str, shots: u32, date: NaiveDate) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            shots,
            date,
        })
    }
}
