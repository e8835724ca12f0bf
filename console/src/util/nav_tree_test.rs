use super::*;
use crate::util::i18n::{Locale, t};

fn all_hrefs() -> Vec<&'static str> {
    let mut hrefs = Vec::new();
    for section in NAVIGATION {
        for item in section.items {
            hrefs.push(item.href);
            hrefs.extend(item.children.iter().map(|child| child.href));
        }
    }
    hrefs
}

#[test]
fn sections_are_manage_then_configuration() {
    let names: Vec<_> = NAVIGATION.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["manage", "configuration"]);
}

#[test]
fn manage_entries_are_direct_links() {
    let manage = &NAVIGATION[0];
    assert_eq!(manage.items.len(), 4);
    assert!(manage.items.iter().all(|item| !item.is_group()));
}

#[test]
fn configuration_entries_are_groups() {
    let config = &NAVIGATION[1];
    assert_eq!(config.items.len(), 6);
    assert!(config.items.iter().all(NavItem::is_group));
}

#[test]
fn every_href_is_inside_admin_tree_and_unique() {
    let hrefs = all_hrefs();
    assert!(hrefs.iter().all(|href| href.starts_with("/admin/")));
    let mut sorted = hrefs.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), hrefs.len());
}

#[test]
fn every_label_is_translated() {
    for section in NAVIGATION {
        let mut keys = vec![section.label_key()];
        for item in section.items {
            keys.push(item.label_key(section));
            keys.extend(item.children.iter().map(|child| child.label_key(section, item)));
        }
        for key in keys {
            for locale in Locale::ALL {
                assert_ne!(t(locale, &key), key, "missing {key} for {locale:?}");
            }
        }
    }
}

#[test]
fn find_by_href_resolves_nested_entries() {
    assert_eq!(find_by_href("/admin/manage/users").as_deref(), Some("console.manage.users.title"));
    assert_eq!(
        find_by_href("/admin/config/general/email").as_deref(),
        Some("console.configuration.general.emailConfiguration.title")
    );
    assert_eq!(
        find_by_href("/admin/config/transactions/").as_deref(),
        Some("console.configuration.transactions.title")
    );
    assert_eq!(find_by_href("/admin/unknown"), None);
}

#[test]
fn unknown_icon_falls_back_to_settings_glyph() {
    assert_eq!(icon_for("nothing"), "\u{2699}");
    assert_eq!(icon_for("general"), "\u{2699}");
    assert_eq!(icon_for("commissions"), "%");
}
