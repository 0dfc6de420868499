//! Summary display formatting

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a calendar month (1-12)
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Format the total line, mentioning any active filters
pub fn format_summary(total: f64, month: Option<u32>, category_name: Option<&str>) -> String {
    let mut output = format!("Total expenses: ${:.2}", total);

    if let Some(m) = month {
        output.push_str(&format!(" for {}", month_name(m)));
    }
    if let Some(name) = category_name {
        output.push_str(&format!(" in category '{}'", name));
    }

    output
}
