use crate::model::{EntryRef, MenuEntry};

/// Resolve which entry is active for `current_path`.
///
/// Top-level entries are scanned in order. A top-level entry whose path
/// equals `current_path` wins; otherwise its sub-items are scanned before
/// moving on. Matching is exact string equality: no trailing-slash,
/// query-string or case normalization. The first match in tree order wins,
/// so at most one entry is ever reported.
pub fn resolve_active(
    current_path: &str,
    entries: &[MenuEntry],
) -> Option<EntryRef> {
    for (parent, entry) in entries.iter().enumerate() {
        if entry.matches(current_path) {
            return Some(EntryRef::Top { index: parent });
        }

        if let Some(index) = entry
            .sub_items()
            .iter()
            .position(|child| child.matches(current_path))
        {
            return Some(EntryRef::Sub { parent, index });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::resolve_active;
    use crate::model::{EntryRef, MenuEntry};

    fn entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::link("Dashboard", "/"),
            MenuEntry::group(
                "Sales",
                vec![
                    MenuEntry::link("Orders", "/sales/orders"),
                    MenuEntry::link("Customers", "/sales/customers"),
                ],
            ),
            MenuEntry::link("Settings", "/settings"),
        ]
    }

    /// Every route declared anywhere in the menu.
    fn declared_paths(entries: &[MenuEntry]) -> Vec<String> {
        let mut paths = Vec::new();
        for entry in entries {
            paths.extend(entry.path().map(ToString::to_string));
            for child in entry.sub_items() {
                paths.extend(child.path().map(ToString::to_string));
            }
        }
        paths
    }

    #[test]
    fn given_top_level_path_when_resolved_then_top_entry_is_active() {
        assert_eq!(
            resolve_active("/settings", &entries()),
            Some(EntryRef::Top { index: 2 })
        );
    }

    #[test]
    fn given_child_path_when_resolved_then_sub_entry_is_active() {
        assert_eq!(
            resolve_active("/sales/customers", &entries()),
            Some(EntryRef::Sub {
                parent: 1,
                index: 1,
            })
        );
    }

    #[test]
    fn given_empty_tree_when_resolved_then_nothing_is_active() {
        assert_eq!(resolve_active("/", &[]), None);
    }

    #[test]
    fn given_near_miss_paths_when_resolved_then_matching_is_exact() {
        let entries = entries();

        assert_eq!(resolve_active("/settings/", &entries), None);
        assert_eq!(resolve_active("/sales", &entries), None);
        assert_eq!(resolve_active("/Settings", &entries), None);
        assert_eq!(resolve_active("/sales/orders?page=2", &entries), None);
        assert_eq!(resolve_active("", &entries), None);
    }

    #[test]
    fn given_duplicate_paths_when_resolved_then_first_match_in_tree_order_wins()
     {
        let entries = vec![
            MenuEntry::group(
                "Sales",
                vec![MenuEntry::link("Orders", "/orders")],
            ),
            MenuEntry::link("Orders", "/orders"),
        ];

        assert_eq!(
            resolve_active("/orders", &entries),
            Some(EntryRef::Sub {
                parent: 0,
                index: 0,
            })
        );
    }

    #[test]
    fn given_group_with_own_path_when_resolved_then_group_wins_over_children()
    {
        let entries = vec![
            MenuEntry::group(
                "Reports",
                vec![MenuEntry::link("Monthly", "/reports")],
            )
            .with_path("/reports"),
        ];

        assert_eq!(
            resolve_active("/reports", &entries),
            Some(EntryRef::Top { index: 0 })
        );
    }

    #[test]
    fn given_any_route_when_resolved_then_result_exists_iff_some_path_matches()
    {
        let entries = entries();
        let declared = declared_paths(&entries);
        let candidates =
            ["/", "/sales/orders", "/sales/customers", "/settings"]
                .into_iter()
                .chain(["/nope", "/sales", "", "/settings/"]);

        for candidate in candidates {
            let resolved = resolve_active(candidate, &entries);
            let expected = declared.iter().any(|path| path == candidate);
            assert_eq!(resolved.is_some(), expected, "path {candidate:?}");
        }
    }

    #[test]
    fn given_same_inputs_when_resolved_twice_then_results_are_identical() {
        let entries = entries();

        let first = resolve_active("/sales/orders", &entries);
        let second = resolve_active("/sales/orders", &entries);

        assert_eq!(first, second);
    }
}
