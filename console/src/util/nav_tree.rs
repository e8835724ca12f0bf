//! Static navigation tree for the console sidebar.
//!
//! Two sections (`manage`, `configuration`). Every entry has a stable name
//! used for its label key and icon, and an href under `/admin`. Configuration
//! groups carry their own children, one level deep.

#[cfg(test)]
#[path = "nav_tree_test.rs"]
mod nav_tree_test;

/// Leaf link inside a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Sidebar entry: a direct link or, with `children`, an expandable group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub children: &'static [NavLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub name: &'static str,
    pub icon: &'static str,
    pub items: &'static [NavItem],
}

impl NavSection {
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("console.{}.title", self.name)
    }
}

impl NavItem {
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    #[must_use]
    pub fn label_key(&self, section: &NavSection) -> String {
        format!("console.{}.{}.title", section.name, self.name)
    }
}

impl NavLink {
    #[must_use]
    pub fn label_key(&self, section: &NavSection, item: &NavItem) -> String {
        format!("console.{}.{}.{}.title", section.name, item.name, self.name)
    }
}

const fn link(name: &'static str, href: &'static str) -> NavLink {
    NavLink { name, href }
}

const fn leaf(name: &'static str, href: &'static str) -> NavItem {
    NavItem { name, href, children: &[] }
}

const fn group(name: &'static str, href: &'static str, children: &'static [NavLink]) -> NavItem {
    NavItem { name, href, children }
}

pub const NAVIGATION: &[NavSection] = &[
    NavSection {
        name: "manage",
        icon: "\u{25A6}",
        items: &[
            leaf("users", "/admin/manage/users"),
            leaf("listings", "/admin/manage/listings"),
            leaf("transactions", "/admin/manage/transactions"),
            leaf("reviews", "/admin/manage/reviews"),
        ],
    },
    NavSection {
        name: "configuration",
        icon: "\u{2692}",
        items: &[
            group(
                "general",
                "/admin/config/general",
                &[
                    link("emailConfiguration", "/admin/config/general/email"),
                    link("localization", "/admin/config/general/localization"),
                    link("accessControl", "/admin/config/general/access"),
                ],
            ),
            group(
                "content",
                "/admin/config/content",
                &[
                    link("navBar", "/admin/config/content/navbar"),
                    link("footer", "/admin/config/content/footer"),
                    link("pages", "/admin/config/content/pages"),
                    link("texts", "/admin/config/content/texts"),
                    link("messagingTemplates", "/admin/config/content/messaging"),
                ],
            ),
            group(
                "design",
                "/admin/config/design",
                &[link("branding", "/admin/config/design/branding"), link("layout", "/admin/config/design/layout")],
            ),
            group(
                "users",
                "/admin/config/users",
                &[link("userTypes", "/admin/config/users/types"), link("userFields", "/admin/config/users/fields")],
            ),
            group(
                "listings",
                "/admin/config/listings",
                &[
                    link("listingTypes", "/admin/config/listings/types"),
                    link("listingCategories", "/admin/config/listings/categories"),
                    link("listingFields", "/admin/config/listings/fields"),
                    link("listingSearch", "/admin/config/listings/search"),
                ],
            ),
            group(
                "transactions",
                "/admin/config/transactions",
                &[
                    link("commissions", "/admin/config/transactions/commissions"),
                    link("minimumSize", "/admin/config/transactions/minimum-size"),
                ],
            ),
        ],
    },
];

/// Glyph for an entry name; unknown names get the generic settings glyph.
#[must_use]
pub fn icon_for(name: &str) -> &'static str {
    match name {
        "users" | "userTypes" | "userFields" => "\u{263A}",
        "listings" => "\u{2630}",
        "transactions" | "minimumSize" => "$",
        "reviews" => "\u{2605}",
        "content" | "pages" | "texts" => "\u{2261}",
        "design" | "branding" => "\u{2756}",
        "emailConfiguration" | "messagingTemplates" => "\u{2709}",
        "localization" => "\u{25CE}",
        "accessControl" => "\u{26BF}",
        "navBar" | "footer" | "layout" => "\u{25A4}",
        "listingTypes" | "listingCategories" => "\u{2691}",
        "listingFields" => "\u{2637}",
        "listingSearch" => "\u{2315}",
        "commissions" => "%",
        _ => "\u{2699}",
    }
}

/// Label key of the entry whose href equals `path` (any depth).
#[must_use]
pub fn find_by_href(path: &str) -> Option<String> {
    let path = path.trim_end_matches('/');
    for section in NAVIGATION {
        for item in section.items {
            if item.href == path {
                return Some(item.label_key(section));
            }
            if let Some(child) = item.children.iter().find(|child| child.href == path) {
                return Some(child.label_key(section, item));
            }
        }
    }
    None
}
