use api::server::utils::genre_utils::{CATEGORY_KEYWORDS, FALLBACK_GENRE, categorize_channel};

#[test]
fn tag_rai_anywhere_in_the_name() {
    assert_eq!(categorize_channel("Rai 1"), vec!["RAI"]);
    assert!(categorize_channel("RAI GULP (HD)").contains(&"RAI".to_string()));
    assert!(categorize_channel("Rai Sport").contains(&"RAI".to_string()));
}

#[test]
fn fall_back_when_nothing_matches() {
    assert_eq!(categorize_channel("Qvc"), vec![FALLBACK_GENRE]);
    assert_eq!(categorize_channel(""), vec![FALLBACK_GENRE]);
}

#[test]
fn allow_multiple_categories_in_table_order() {
    assert_eq!(categorize_channel("Sport Italia"), vec!["MEDIASET", "SPORT"]);
    assert_eq!(categorize_channel("Rai Sport (HD)"), vec!["RAI", "SPORT"]);
}

#[test]
fn ignore_parenthesized_text() {
    // "(Sport)" would otherwise tag this as SPORT
    assert_eq!(categorize_channel("Canale 5 (Sport)"), vec!["MEDIASET"]);
}

#[test]
fn never_fall_back_alongside_a_match() {
    let genres = categorize_channel("Boing");
    assert_eq!(genres, vec!["BAMBINI"]);
    assert!(!genres.contains(&FALLBACK_GENRE.to_string()));
}

#[test]
fn keep_keywords_lowercase() {
    for (_, keywords) in CATEGORY_KEYWORDS {
        for kw in *keywords {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }
}
