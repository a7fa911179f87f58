use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_FILES: [&str; 6] =
    ["mod", "event", "model", "reducer", "state", "view"];

#[test]
fn given_widgets_when_validating_layout_then_every_widget_complies() {
    let widgets_dir =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/widgets");
    let mut violations: Vec<String> = Vec::new();

    let declared = declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let on_disk = child_dirs(&widgets_dir);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared widgets {declared:?} do not match directories {on_disk:?}",
            widgets_dir.display()
        ));
    }

    for widget in &on_disk {
        validate_widget_dir(&widgets_dir.join(widget), widget, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, widget: &str, violations: &mut Vec<String>) {
    let files = rs_stems(dir);
    for required in REQUIRED_FILES {
        if !files.contains(required) {
            violations.push(format!(
                "{}: missing {required}.rs",
                dir.display()
            ));
        }
    }

    let declared = declared_modules(&dir.join("mod.rs"), violations);
    let expected: BTreeSet<String> =
        files.iter().filter(|stem| *stem != "mod").cloned().collect();
    if declared != expected {
        violations.push(format!(
            "{}: declared modules {declared:?} do not match files {expected:?}",
            dir.display()
        ));
    }

    let prefix = snake_to_pascal_case(widget);
    for stem in &files {
        let path = dir.join(format!("{stem}.rs"));
        let file = parse(&path);
        let source = fs::read_to_string(&path).unwrap_or_default();

        for item in &file.items {
            if let Item::Use(item_use) = item {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        path.display()
                    ));
                }
            }
        }

        for forbidden in ["crate::app::", "crate::state::", "crate::routers::"] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: widgets must not depend on {forbidden}",
                    path.display()
                ));
            }
        }

        match stem.as_str() {
            "event" => validate_event_file(&path, &file, &prefix, violations),
            "view" => validate_view_file(&path, &file, &source, &prefix, violations),
            _ => {},
        }
    }
}

fn validate_event_file(
    path: &Path,
    file: &syn::File,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let enums: BTreeSet<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
            _ => None,
        })
        .collect();

    for contract in ["Intent", "Event"] {
        let name = format!("{prefix}{contract}");
        if !enums.contains(&name) {
            violations.push(format!("{}: missing enum {name}", path.display()));
        }
    }
}

fn validate_view_file(
    path: &Path,
    file: &syn::File,
    source: &str,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let has_view = file.items.iter().any(|item| {
        matches!(item, Item::Fn(item_fn)
            if item_fn.sig.ident == "view" && is_pub_crate(&item_fn.vis))
    });
    if !has_view {
        violations.push(format!(
            "{}: expected a pub(crate) fn view",
            path.display()
        ));
    }

    let props = format!("{prefix}ViewProps");
    let has_props = file.items.iter().any(|item| {
        matches!(item, Item::Struct(item_struct) if item_struct.ident == props)
    });
    if !has_props {
        violations.push(format!("{}: missing struct {props}", path.display()));
    }

    for forbidden in ["log::", "Task::", "Instant::now", "std::fs::"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: side effects are forbidden in views: {forbidden}",
                path.display()
            ));
        }
    }
}

fn declared_modules(mod_rs: &Path, violations: &mut Vec<String>) -> BTreeSet<String> {
    let file = parse(mod_rs);
    let mut modules = BTreeSet::new();

    for item in &file.items {
        if let Item::Mod(item_mod) = item {
            if item_mod.content.is_some() {
                if item_mod.ident != "tests" {
                    violations.push(format!(
                        "{}: inline module '{}' is forbidden",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
                continue;
            }
            modules.insert(item_mod.ident.to_string());
        }
    }

    modules
}

fn parse(path: &Path) -> syn::File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn child_dirs(dir: &Path) -> BTreeSet<String> {
    read_dir(dir)
        .filter(|path| path.is_dir())
        .filter_map(|path| file_name(&path))
        .collect()
}

fn rs_stems(dir: &Path) -> BTreeSet<String> {
    read_dir(dir)
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        })
        .collect()
}

fn read_dir(dir: &Path) -> impl Iterator<Item = PathBuf> {
    fs::read_dir(dir)
        .unwrap_or_else(|err| {
            panic!("failed to read dir {}: {err}", dir.display())
        })
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
