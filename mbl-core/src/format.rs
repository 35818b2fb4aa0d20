use crate::booking::CanonicalBooking;

/// Escape the three markup metacharacters Telegram's HTML mode cares about.
/// Applied to every user-supplied string before it enters the message.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Vietnamese-đồng amount with `.` thousand grouping, e.g. `1.234.567 ₫`.
/// Missing or non-finite amounts render as a placeholder dash.
pub fn format_vnd(amount: Option<f64>) -> String {
    let Some(n) = amount.filter(|n| n.is_finite()) else {
        return "—".to_string();
    };
    let negative = n < 0.0;
    let mut v = n.abs().round() as u64;
    let mut groups = Vec::new();
    while v >= 1000 {
        groups.push(format!("{:03}", v % 1000));
        v /= 1000;
    }
    groups.push(v.to_string());
    groups.reverse();
    let digits = groups.join(".");
    if negative {
        format!("-{} ₫", digits)
    } else {
        format!("{} ₫", digits)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Render a canonical booking as the operator notification text.
///
/// One logical line per field, joined by newlines; blank optional lines are
/// dropped entirely. Pure and deterministic: the same booking always renders
/// to the same bytes.
pub fn render_message(booking: &CanonicalBooking) -> String {
    let contact = booking.contact.clone().unwrap_or_default();
    let guests = booking.guests.as_deref().unwrap_or(&[]);

    let guest_lines = if guests.is_empty() {
        "—".to_string()
    } else {
        guests
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let mut attrs: Vec<String> = Vec::new();
                if let Some(dob) = non_empty(g.dob.as_deref()) {
                    attrs.push(format!("DOB: {}", escape_html(dob)));
                }
                if let Some(gender) = non_empty(g.gender.as_deref()) {
                    attrs.push(escape_html(gender));
                }
                if let Some(id) = non_empty(g.id_number.as_deref()) {
                    attrs.push(format!("ID: {}", escape_html(id)));
                }
                if let Some(w) = g.weight_kg {
                    attrs.push(format!("Wt: {}kg", w));
                }
                if let Some(nat) = non_empty(g.nationality.as_deref()) {
                    attrs.push(format!("QT: {}", escape_html(nat)));
                }
                let details = if attrs.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", attrs.join(" · "))
                };
                format!(
                    "{}. {}{}",
                    i + 1,
                    escape_html(g.full_name.as_deref().unwrap_or("")),
                    details
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    // Fixed order: flycam, camera360, pickup.
    let addons = booking.addons.unwrap_or_default();
    let mut addon_lines: Vec<&str> = Vec::new();
    if addons.flycam {
        addon_lines.push("• Flycam");
    }
    if addons.camera360 {
        addon_lines.push("• Camera 360");
    }
    if addons.pickup {
        addon_lines.push("• Đón trả");
    }

    let price = booking.price.as_ref();
    let per_person = format_vnd(price.and_then(|p| p.per_person));
    let total = format_vnd(price.and_then(|p| p.total));

    let mut lines: Vec<String> = vec![
        "🛒 <b>ĐƠN ĐẶT BAY MỚI</b>".to_string(),
        format!(
            "📍 <b>Điểm:</b> {} ({})",
            escape_html(&booking.location_name),
            escape_html(&booking.location)
        ),
        format!(
            "📅 <b>Thời gian:</b> {} {}",
            escape_html(booking.date_iso.as_deref().unwrap_or("")),
            escape_html(booking.time_slot.as_deref().unwrap_or(""))
        ),
        format!("👥 <b>Số khách:</b> {}", booking.guests_count),
        "<b>Liên hệ</b>".to_string(),
        format!(
            "• 📞 {} · ✉️ {}",
            escape_html(contact.phone.as_deref().unwrap_or("")),
            escape_html(contact.email.as_deref().unwrap_or(""))
        ),
    ];
    if let Some(pickup) = non_empty(contact.pickup_location.as_deref()) {
        lines.push(format!("• 🚗 Điểm đón: {}", escape_html(pickup)));
    }
    if let Some(request) = non_empty(contact.special_request.as_deref()) {
        lines.push(format!("• 📝 Y/c đặc biệt: {}", escape_html(request)));
    }
    lines.push("<b>Chi phí</b>".to_string());
    lines.push(format!("• Giá/khách (sau giảm): {}", per_person));
    if !addon_lines.is_empty() {
        let indented: Vec<String> = addon_lines.iter().map(|l| format!("   {}", l)).collect();
        lines.push(format!("• Phụ thu:\n{}", indented.join("\n")));
    }
    lines.push(format!("• <b>Tổng tạm tính:</b> {}", total));
    lines.push("<b>Danh sách khách</b>".to_string());
    lines.push(guest_lines);
    lines.push(format!("⏱️ {}", escape_html(&booking.created_at)));

    lines.join("\n")
}
