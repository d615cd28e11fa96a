/// City directory backing route suggestions and the mock catalog.
/// Static on purpose: the engine never talks to a real geography service.
const CITIES: &[&str] = &[
    "Agra",
    "Ahmedabad",
    "Amritsar",
    "Bengaluru",
    "Bhopal",
    "Chandigarh",
    "Chennai",
    "Coimbatore",
    "Dehradun",
    "Delhi",
    "Goa",
    "Guwahati",
    "Hyderabad",
    "Indore",
    "Jaipur",
    "Jodhpur",
    "Kochi",
    "Kolkata",
    "Lucknow",
    "Madurai",
    "Mangaluru",
    "Mumbai",
    "Mysuru",
    "Nagpur",
    "Nashik",
    "Patna",
    "Pune",
    "Shimla",
    "Surat",
    "Udaipur",
    "Varanasi",
    "Vijayawada",
    "Visakhapatnam",
];

/// Well-travelled corridors surfaced as one-tap searches.
const POPULAR_ROUTES: &[(&str, &str)] = &[
    ("Mumbai", "Pune"),
    ("Delhi", "Jaipur"),
    ("Bengaluru", "Chennai"),
    ("Hyderabad", "Vijayawada"),
    ("Delhi", "Chandigarh"),
    ("Mumbai", "Goa"),
    ("Pune", "Nashik"),
    ("Chennai", "Coimbatore"),
];

/// How many suggestions a lookup returns at most.
pub const SUGGESTION_LIMIT: usize = 5;

/// Every city the directory knows, alphabetical.
pub fn all() -> &'static [&'static str] {
    CITIES
}

/// Frequently searched source/destination pairs.
pub fn popular_routes() -> &'static [(&'static str, &'static str)] {
    POPULAR_ROUTES
}

/// Case-insensitive substring lookup, capped at `limit` hits.
/// A blank query suggests nothing rather than everything.
pub fn suggest(query: &str, limit: usize) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    CITIES
        .iter()
        .filter(|city| city.to_lowercase().contains(&needle))
        .take(limit)
        .copied()
        .collect()
}
