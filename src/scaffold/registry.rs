//! # Component Registry
//!
//! The constant table of installable components. Entries are looked up by
//! name (case-insensitive) and never mutated.

use super::templates;
use std::fmt;

/// One file of a descriptor: a project-relative path plus its renderer.
#[derive(Clone, Copy)]
pub struct FileTemplate {
    path: &'static str,
    render: fn() -> String,
}

impl FileTemplate {
    pub const fn new(path: &'static str, render: fn() -> String) -> Self {
        Self { path, render }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn render(&self) -> String {
        (self.render)()
    }
}

impl fmt::Debug for FileTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileTemplate")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// An installable component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub files: &'static [FileTemplate],
    pub dependencies: &'static [&'static str],
}

/// Read-only view of a descriptor for `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
}

impl fmt::Display for ComponentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {:<10} {}", self.name, self.description)?;
        for feature in &self.features {
            writeln!(f, "             - {}", feature)?;
        }
        Ok(())
    }
}

/// Files written by `init`.
pub static BASELINE_FILES: [FileTemplate; 3] = [
    FileTemplate::new("lib/utils.ts", templates::utils_ts),
    FileTemplate::new("app/globals.css", templates::globals_css),
    FileTemplate::new("tailwind.config.ts", templates::tailwind_config_ts),
];

/// Packages the baseline files import.
pub static BASELINE_DEPENDENCIES: [&str; 2] = ["clsx", "tailwind-merge"];

const UTIL_DEPS: &[&str] = &["clsx", "tailwind-merge"];
const ICON_DEPS: &[&str] = &["clsx", "tailwind-merge", "lucide-react"];

pub static REGISTRY: [ComponentDescriptor; 9] = [
    ComponentDescriptor {
        name: "button",
        description: "Glowing button in every neon variant",
        features: &[
            "Six color variants from one style table",
            "Three sizes (sm, md, lg)",
            "Forwards refs and native button props",
        ],
        files: &[FileTemplate::new("components/ui/button.tsx", templates::button_tsx)],
        dependencies: UTIL_DEPS,
    },
    ComponentDescriptor {
        name: "badge",
        description: "Outlined status badge",
        features: &["Optional pulse animation", "Respects reduced motion"],
        files: &[FileTemplate::new("components/ui/badge.tsx", templates::badge_tsx)],
        dependencies: UTIL_DEPS,
    },
    ComponentDescriptor {
        name: "card",
        description: "Translucent card with glowing border",
        features: &["Header, title and content slots", "Backdrop blur"],
        files: &[FileTemplate::new("components/ui/card.tsx", templates::card_tsx)],
        dependencies: UTIL_DEPS,
    },
    ComponentDescriptor {
        name: "input",
        description: "Text input, controlled or uncontrolled",
        features: &[
            "Controlled and uncontrolled value",
            "maxLength truncation",
            "Change callback on every keystroke",
        ],
        files: &[FileTemplate::new("components/ui/input.tsx", templates::input_tsx)],
        dependencies: UTIL_DEPS,
    },
    ComponentDescriptor {
        name: "textarea",
        description: "Multi-line input with character counter",
        features: &[
            "Controlled and uncontrolled value",
            "Live character counter with maxLength",
        ],
        files: &[FileTemplate::new("components/ui/textarea.tsx", templates::textarea_tsx)],
        dependencies: UTIL_DEPS,
    },
    ComponentDescriptor {
        name: "switch",
        description: "Accessible on/off switch",
        features: &["Controlled and uncontrolled checked state", "role=switch semantics"],
        files: &[FileTemplate::new("components/ui/switch.tsx", templates::switch_tsx)],
        dependencies: UTIL_DEPS,
    },
    ComponentDescriptor {
        name: "radio",
        description: "Radio group with glowing indicator",
        features: &["Controlled and uncontrolled selection", "Keyboard accessible"],
        files: &[FileTemplate::new("components/ui/radio.tsx", templates::radio_tsx)],
        dependencies: UTIL_DEPS,
    },
    ComponentDescriptor {
        name: "dropdown",
        description: "Dropdown with single and multi select",
        features: &[
            "Single or multiple selection",
            "Disabled options",
            "Controlled and uncontrolled value",
        ],
        files: &[FileTemplate::new("components/ui/dropdown.tsx", templates::dropdown_tsx)],
        dependencies: ICON_DEPS,
    },
    ComponentDescriptor {
        name: "modal",
        description: "Dialog overlay with escape-to-close",
        features: &[
            "Controlled and uncontrolled open state",
            "Escape and backdrop close",
        ],
        files: &[FileTemplate::new("components/ui/modal.tsx", templates::modal_tsx)],
        dependencies: ICON_DEPS,
    },
];

impl ComponentDescriptor {
    pub fn summary(&self) -> ComponentSummary {
        ComponentSummary {
            name: self.name,
            description: self.description,
            features: self.features.to_vec(),
        }
    }
}

/// Look up a component by name (case-insensitive, surrounding whitespace ignored).
pub fn find_component(name: &str) -> Option<&'static ComponentDescriptor> {
    let name = name.trim();
    REGISTRY.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn component_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|c| c.name).collect()
}

/// Summaries of every registered component, in registry order.
pub fn list() -> Vec<ComponentSummary> {
    REGISTRY.iter().map(ComponentDescriptor::summary).collect()
}

/// Human-readable listing printed by `neonkit list`.
pub fn format_listing() -> String {
    let mut out = String::from("Available components:\n\n");
    for summary in list() {
        out.push_str(&summary.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names = component_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_every_descriptor_has_files() {
        for component in &REGISTRY {
            assert!(!component.files.is_empty(), "{} has no files", component.name);
        }
    }

    #[test]
    fn test_dependencies_have_no_duplicates() {
        for component in &REGISTRY {
            let unique: HashSet<_> = component.dependencies.iter().collect();
            assert_eq!(unique.len(), component.dependencies.len(), "{}", component.name);
        }
    }

    #[test]
    fn test_find_component_case_insensitive() {
        assert_eq!(find_component("Button").map(|c| c.name), Some("button"));
        assert_eq!(find_component(" MODAL ").map(|c| c.name), Some("modal"));
        assert!(find_component("carousel").is_none());
    }

    #[test]
    fn test_listing_mentions_every_component_and_feature() {
        let listing = format_listing();
        for component in &REGISTRY {
            assert!(listing.contains(component.name));
            for feature in component.features {
                assert!(listing.contains(feature));
            }
        }
    }

    #[test]
    fn test_file_template_renders() {
        let template = BASELINE_FILES[0];
        assert_eq!(template.path(), "lib/utils.ts");
        assert!(template.render().contains("twMerge"));
    }
}
