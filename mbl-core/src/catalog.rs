/// Bookable paragliding sites: stable destination key -> Vietnamese display name.
const SPOTS: &[(&str, &str)] = &[
    ("doi-bu", "Đồi Bù (Hòa Bình)"),
    ("vien-nam", "Viên Nam (Hà Nội)"),
    ("khau-pha", "Đèo Khau Phạ (Mù Cang Chải)"),
    ("son-tra", "Bán đảo Sơn Trà (Đà Nẵng)"),
    ("lang-biang", "Lang Biang (Đà Lạt)"),
    ("hon-ba", "Hòn Bà (Nha Trang)"),
];

const PLACEHOLDER: &str = "—";

/// Read-only destination catalog. Loaded once at startup; an operator-supplied
/// allow-list narrows the accepted keys without touching the display table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    allow_list: Vec<String>,
}

impl Catalog {
    pub fn new(allow_list: Vec<String>) -> Self {
        Self { allow_list }
    }

    /// Keys a booking may reference: the configured allow-list if non-empty,
    /// otherwise every key in the static table. Order is preserved.
    pub fn accepted_keys(&self) -> Vec<String> {
        if self.allow_list.is_empty() {
            SPOTS.iter().map(|(k, _)| (*k).to_string()).collect()
        } else {
            self.allow_list.clone()
        }
    }

    pub fn display_name(key: &str) -> Option<&'static str> {
        SPOTS.iter().find(|(k, _)| *k == key).map(|(_, name)| *name)
    }

    /// Display name for `key`, falling back to `fallback`, then the key
    /// itself, then a placeholder dash. Empty strings count as absent.
    pub fn name_of(&self, key: Option<&str>, fallback: Option<&str>) -> String {
        if let Some(name) = key.filter(|k| !k.is_empty()).and_then(Self::display_name) {
            return name.to_string();
        }
        if let Some(f) = fallback.filter(|f| !f.is_empty()) {
            return f.to_string();
        }
        match key.filter(|k| !k.is_empty()) {
            Some(k) => k.to_string(),
            None => PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_keys_defaults_to_full_table() {
        let catalog = Catalog::default();
        let keys = catalog.accepted_keys();
        assert_eq!(keys.len(), SPOTS.len());
        assert!(keys.contains(&"doi-bu".to_string()));
    }

    #[test]
    fn allow_list_overrides_table_keys() {
        let catalog = Catalog::new(vec!["doi-bu".into(), "son-tra".into()]);
        assert_eq!(catalog.accepted_keys(), vec!["doi-bu", "son-tra"]);
    }

    #[test]
    fn name_of_prefers_table_then_fallback_then_key() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.name_of(Some("doi-bu"), Some("ignored")),
            "Đồi Bù (Hòa Bình)"
        );
        assert_eq!(catalog.name_of(Some("unknown"), Some("Tên tùy ý")), "Tên tùy ý");
        assert_eq!(catalog.name_of(Some("unknown"), None), "unknown");
        assert_eq!(catalog.name_of(None, None), "—");
        assert_eq!(catalog.name_of(Some(""), Some("")), "—");
    }
}
