use api::server::utils::name_utils::normalize_name;

#[test]
fn strip_parenthesized_suffix() {
    assert_eq!(normalize_name("Rai 1 (HD)"), "rai 1");
    assert_eq!(normalize_name("Canale 5 (Backup) (FHD)"), "canale 5");
}

#[test]
fn trim_and_lowercase() {
    assert_eq!(normalize_name("  Sky Uno "), "sky uno");
    assert_eq!(normalize_name("DMAX"), "dmax");
}

#[test]
fn empty_stays_empty() {
    assert_eq!(normalize_name(""), "");
    assert_eq!(normalize_name("   "), "");
    assert_eq!(normalize_name("(HD)"), "");
}

#[test]
fn be_idempotent() {
    for name in ["Rai 1 (HD)", "  Sky Uno ", "Italia 1 (Backup) ", "(1) Boing", ""] {
        let once = normalize_name(name);
        assert_eq!(normalize_name(&once), once);
    }
}
