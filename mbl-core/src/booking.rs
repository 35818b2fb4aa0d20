use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw booking submission as received from the site. Every field is optional;
/// validation happens in [`crate::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingSubmission {
    pub location: Option<String>,
    pub location_name: Option<String>,
    pub guests_count: Option<f64>,
    #[serde(rename = "dateISO")]
    pub date_iso: Option<String>,
    pub time_slot: Option<String>,
    pub contact: Option<Contact>,
    pub guests: Option<Vec<Guest>>,
    pub addons: Option<Addons>,
    pub price: Option<Price>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub pickup_location: Option<String>,
    pub special_request: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guest {
    pub full_name: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub id_number: Option<String>,
    pub weight_kg: Option<f64>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Addons {
    pub pickup: bool,
    pub flycam: bool,
    pub camera360: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub currency: Option<String>,
    pub per_person: Option<f64>,
    pub total: Option<f64>,
}

/// Normalized booking. `location` is always an accepted catalog key,
/// `location_name` is non-empty, `guests_count` is positive and `created_at`
/// is always set (a display label, never re-parsed downstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalBooking {
    pub location: String,
    pub location_name: String,
    pub guests_count: u32,
    #[serde(rename = "dateISO", skip_serializing_if = "Option::is_none")]
    pub date_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<Vec<Guest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<Addons>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    pub created_at: String,
}

/// Clients send either the submission directly or wrapped one level under a
/// `payload` key. Unwrapped exactly once, at the boundary.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.get("payload").is_some_and(Value::is_object) => {
            map.remove("payload").unwrap_or(Value::Null)
        }
        other => other,
    }
}
