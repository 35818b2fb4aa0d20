use chrono::{FixedOffset, Utc};

use crate::booking::{BookingSubmission, CanonicalBooking};
use crate::catalog::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Invalid location: {received}")]
    InvalidLocation {
        /// The location key or display name as the client sent it.
        received: String,
        accepted_keys: Vec<String>,
    },
}

/// "Now" as a human-readable label in the site's timezone (UTC+7, no DST).
/// This is a display string for the notification footer, not a timestamp.
pub fn local_timestamp_label() -> String {
    let offset = FixedOffset::east_opt(7 * 3600).expect("UTC+7 is a valid offset");
    Utc::now()
        .with_timezone(&offset)
        .format("%H:%M:%S %-d/%-m/%Y")
        .to_string()
}

/// Turn an untrusted submission into a canonical booking, or reject it when
/// the destination cannot be resolved against the catalog.
///
/// Pure in (submission, catalog, clock); the clock is only consulted when the
/// client did not supply `createdAt`.
pub fn normalize(
    raw: BookingSubmission,
    catalog: &Catalog,
    now: impl FnOnce() -> String,
) -> Result<CanonicalBooking, NormalizeError> {
    let accepted = catalog.accepted_keys();

    // Resolve the destination: trimmed key first, exact display-name match second.
    let mut key = raw.location.as_deref().unwrap_or("").trim().to_string();
    if key.is_empty() || !accepted.contains(&key) {
        let by_name = raw.location_name.as_deref().unwrap_or("").trim();
        if let Some(found) = accepted
            .iter()
            .find(|k| catalog.name_of(Some(k.as_str()), None) == by_name)
        {
            key = found.clone();
        }
    }
    if key.is_empty() || !accepted.contains(&key) {
        let received = raw
            .location
            .filter(|s| !s.is_empty())
            .or(raw.location_name)
            .unwrap_or_default();
        return Err(NormalizeError::InvalidLocation {
            received,
            accepted_keys: accepted,
        });
    }

    // The canonical count is a positive integer: fractional submissions
    // truncate, and values below 1 fall through to the list-length fallback.
    let guest_list_len = raw.guests.as_ref().map_or(0, |g| g.len()) as u32;
    let guests_count = match raw.guests_count {
        Some(n) if n.is_finite() && n >= 1.0 => n as u32,
        _ if guest_list_len > 0 => guest_list_len,
        _ => 1,
    };

    // Caller-supplied createdAt is honored verbatim; it only ever feeds the
    // escaped notification footer.
    let created_at = raw.created_at.filter(|s| !s.is_empty()).unwrap_or_else(now);

    let location_name = catalog.name_of(Some(&key), raw.location_name.as_deref());

    Ok(CanonicalBooking {
        location: key,
        location_name,
        guests_count,
        date_iso: raw.date_iso,
        time_slot: raw.time_slot,
        contact: raw.contact,
        guests: raw.guests,
        addons: raw.addons,
        price: raw.price,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Guest;

    fn fixed_now() -> String {
        "10:00:00 25/8/2026".to_string()
    }

    fn submission(location: Option<&str>, name: Option<&str>) -> BookingSubmission {
        BookingSubmission {
            location: location.map(String::from),
            location_name: name.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn exact_key_wins_over_display_name() {
        let catalog = Catalog::default();
        let raw = submission(Some("doi-bu"), Some("Lang Biang (Đà Lạt)"));
        let booking = normalize(raw, &catalog, fixed_now).unwrap();
        assert_eq!(booking.location, "doi-bu");
        assert_eq!(booking.location_name, "Đồi Bù (Hòa Bình)");
    }

    #[test]
    fn display_name_resolves_when_key_is_invalid() {
        let catalog = Catalog::default();
        let raw = submission(Some("nope"), Some("Lang Biang (Đà Lạt)"));
        let booking = normalize(raw, &catalog, fixed_now).unwrap();
        assert_eq!(booking.location, "lang-biang");
    }

    #[test]
    fn key_is_trimmed_before_lookup() {
        let catalog = Catalog::default();
        let raw = submission(Some("  doi-bu  "), None);
        let booking = normalize(raw, &catalog, fixed_now).unwrap();
        assert_eq!(booking.location, "doi-bu");
    }

    #[test]
    fn unresolvable_location_reports_accepted_keys() {
        let catalog = Catalog::default();
        let raw = submission(Some("mars"), Some("Olympus Mons"));
        let err = normalize(raw, &catalog, fixed_now).unwrap_err();
        let NormalizeError::InvalidLocation {
            received,
            accepted_keys,
        } = err;
        assert_eq!(received, "mars");
        assert!(!accepted_keys.is_empty());
    }

    #[test]
    fn allow_list_restricts_otherwise_valid_keys() {
        let catalog = Catalog::new(vec!["son-tra".into()]);
        let raw = submission(Some("doi-bu"), None);
        assert!(normalize(raw, &catalog, fixed_now).is_err());
    }

    #[test]
    fn guest_count_falls_back_to_list_length_then_one() {
        let catalog = Catalog::default();

        let mut raw = submission(Some("doi-bu"), None);
        raw.guests_count = Some(0.0);
        raw.guests = Some(vec![Guest::default(), Guest::default(), Guest::default()]);
        assert_eq!(normalize(raw, &catalog, fixed_now).unwrap().guests_count, 3);

        let raw = submission(Some("doi-bu"), None);
        assert_eq!(normalize(raw, &catalog, fixed_now).unwrap().guests_count, 1);

        let mut raw = submission(Some("doi-bu"), None);
        raw.guests_count = Some(5.0);
        raw.guests = Some(vec![Guest::default(), Guest::default()]);
        assert_eq!(normalize(raw, &catalog, fixed_now).unwrap().guests_count, 5);
    }

    #[test]
    fn fractional_guest_counts_resolve_to_positive_integers() {
        let catalog = Catalog::default();

        // below one: treated like an absent count
        let mut raw = submission(Some("doi-bu"), None);
        raw.guests_count = Some(0.5);
        raw.guests = Some(vec![Guest::default(), Guest::default()]);
        assert_eq!(normalize(raw, &catalog, fixed_now).unwrap().guests_count, 2);

        let mut raw = submission(Some("doi-bu"), None);
        raw.guests_count = Some(0.5);
        assert_eq!(normalize(raw, &catalog, fixed_now).unwrap().guests_count, 1);

        // above one: truncated
        let mut raw = submission(Some("doi-bu"), None);
        raw.guests_count = Some(2.7);
        assert_eq!(normalize(raw, &catalog, fixed_now).unwrap().guests_count, 2);

        let mut raw = submission(Some("doi-bu"), None);
        raw.guests_count = Some(f64::INFINITY);
        assert_eq!(normalize(raw, &catalog, fixed_now).unwrap().guests_count, 1);
    }

    #[test]
    fn caller_supplied_created_at_is_kept_verbatim() {
        let catalog = Catalog::default();
        let mut raw = submission(Some("doi-bu"), None);
        raw.created_at = Some("hôm qua".into());
        let booking = normalize(raw, &catalog, fixed_now).unwrap();
        assert_eq!(booking.created_at, "hôm qua");
    }

    #[test]
    fn missing_created_at_uses_the_clock() {
        let catalog = Catalog::default();
        let raw = submission(Some("doi-bu"), None);
        let booking = normalize(raw, &catalog, fixed_now).unwrap();
        assert_eq!(booking.created_at, "10:00:00 25/8/2026");
    }
}
