use super::name_utils::normalize_name;

pub const FALLBACK_GENRE: &str = "ALTRI";

/// keywords are matched as substrings of the normalized name, so they're all lowercase
///
/// order matters, it's the order the tags come out in. A channel can (and does) land in more
/// than one of these, "Sport Italia" is both MEDIASET and SPORT.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "SKY",
        &[
            "sky cin",
            "tv 8",
            "fox",
            "comedy central",
            "animal planet",
            "nat geo",
            "tv8",
            "sky atl",
            "sky uno",
            "sky prima",
            "sky serie",
            "sky arte",
            "sky docum",
            "sky natu",
            "cielo",
            "history",
            "sky tg",
        ],
    ),
    ("RAI", &["rai"]),
    (
        "MEDIASET",
        &[
            "mediaset",
            "canale 5",
            "rete 4",
            "italia",
            "focus",
            "tg com 24",
            "tgcom 24",
            "premium crime",
            "iris",
            "mediaset iris",
            "cine 34",
            "27 twenty seven",
            "27 twentyseven",
        ],
    ),
    (
        "DISCOVERY",
        &[
            "discovery",
            "real time",
            "investigation",
            "top crime",
            "wwe",
            "hgtv",
            "nove",
            "dmax",
            "food network",
            "warner tv",
        ],
    ),
    (
        "SPORT",
        &[
            "sport",
            "dazn",
            "tennis",
            "moto",
            "f1",
            "golf",
            "sportitalia",
            "sport italia",
            "solo calcio",
            "solocalcio",
        ],
    ),
    (
        "BAMBINI",
        &["boing", "cartoon", "k2", "discovery k2", "nick", "super", "frisbee"],
    ),
];

/// every category with at least one keyword hit, in table order, or just the fallback
pub fn categorize_channel(name: &str) -> Vec<String> {
    let cleaned = normalize_name(name);

    let mut genres: Vec<String> = CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| cleaned.contains(kw)))
        .map(|(category, _)| category.to_string())
        .collect();

    if genres.is_empty() {
        genres.push(FALLBACK_GENRE.to_string());
    }

    genres
}
