//! Tool catalog and availability probes.
//!
//! Defines the fixed set of tools devstrap knows how to install, their
//! category partition, and the PATH probes that decide whether a tool is
//! already present. The catalog is an immutable value constructed once at
//! startup and passed explicitly, so tests can substitute a synthetic one.

use std::fmt;

/// The two fixed categories partitioning the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Day-one basics: Docker, Git, net-tools.
    Essential,
    /// Cloud & DevOps tooling: Terraform, AWS CLI, kubectl, and friends.
    CloudDevOps,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Essential => f.write_str("essential"),
            Category::CloudDevOps => f.write_str("cloud-devops"),
        }
    }
}

/// A tool devstrap can install.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    /// Unique identifier, used on the CLI (`devstrap install docker`).
    pub id: &'static str,

    /// Human-readable label for menus and status output.
    pub label: &'static str,

    /// Category the tool belongs to.
    pub category: Category,

    /// Executables probed on PATH; any one present means installed.
    /// Usually a single entry — net-tools ships several binaries and
    /// aws-cli's binary is named `aws`, so the probe list is explicit.
    pub binaries: &'static [&'static str],
}

/// Ordered, immutable catalog of installable tools.
///
/// Insertion order defines display and iteration order. Identifiers are
/// unique within the catalog.
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
}

impl Catalog {
    /// The standard devstrap catalog.
    pub fn standard() -> Self {
        Self {
            tools: vec![
                ToolDescriptor {
                    id: "docker",
                    label: "Docker",
                    category: Category::Essential,
                    binaries: &["docker"],
                },
                ToolDescriptor {
                    id: "git",
                    label: "Git",
                    category: Category::Essential,
                    binaries: &["git"],
                },
                ToolDescriptor {
                    id: "net-tools",
                    label: "net-tools",
                    category: Category::Essential,
                    binaries: &["netstat", "ifconfig", "route"],
                },
                ToolDescriptor {
                    id: "terraform",
                    label: "Terraform",
                    category: Category::CloudDevOps,
                    binaries: &["terraform"],
                },
                ToolDescriptor {
                    id: "aws-cli",
                    label: "AWS CLI",
                    category: Category::CloudDevOps,
                    binaries: &["aws"],
                },
                ToolDescriptor {
                    id: "kubectl",
                    label: "kubectl",
                    category: Category::CloudDevOps,
                    binaries: &["kubectl"],
                },
                ToolDescriptor {
                    id: "watch",
                    label: "watch",
                    category: Category::CloudDevOps,
                    binaries: &["watch"],
                },
                ToolDescriptor {
                    id: "helm",
                    label: "Helm",
                    category: Category::CloudDevOps,
                    binaries: &["helm"],
                },
                ToolDescriptor {
                    id: "helmfile",
                    label: "Helmfile",
                    category: Category::CloudDevOps,
                    binaries: &["helmfile"],
                },
                ToolDescriptor {
                    id: "k9s",
                    label: "K9s",
                    category: Category::CloudDevOps,
                    binaries: &["k9s"],
                },
            ],
        }
    }

    /// Build a catalog from explicit descriptors (synthetic catalogs in tests).
    pub fn from_tools(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// All tools in catalog order.
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// The essential subsequence, in catalog order.
    pub fn essentials(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.by_category(Category::Essential)
    }

    /// The cloud & DevOps subsequence, in catalog order.
    pub fn cloud_devops(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.by_category(Category::CloudDevOps)
    }

    fn by_category(&self, category: Category) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter().filter(move |t| t.category == category)
    }

    /// Look up a tool by identifier.
    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Whether the identifier names a catalog tool.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Check whether a tool is already installed.
    ///
    /// Re-evaluated on every call: installation changes system state
    /// mid-run, so the probe result must never be cached. Unknown
    /// identifiers degrade to `false` rather than erroring — recognition
    /// validation happens one layer up, in the CLI.
    pub fn is_installed(&self, id: &str) -> bool {
        self.is_installed_with(id, binary_on_path)
    }

    /// [`Catalog::is_installed`] with an injected PATH lookup.
    pub fn is_installed_with(&self, id: &str, on_path: impl Fn(&str) -> bool) -> bool {
        match self.get(id) {
            Some(tool) => tool.binaries.iter().any(|binary| on_path(binary)),
            None => false,
        }
    }
}

/// Check whether an executable is present on PATH.
pub fn binary_on_path(binary: &str) -> bool {
    which::which(binary).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_all_ten_tools() {
        let catalog = Catalog::standard();
        let ids: Vec<_> = catalog.tools().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            [
                "docker",
                "git",
                "net-tools",
                "terraform",
                "aws-cli",
                "kubectl",
                "watch",
                "helm",
                "helmfile",
                "k9s"
            ]
        );
    }

    #[test]
    fn essentials_precede_cloud_devops() {
        let catalog = Catalog::standard();
        let essentials: Vec<_> = catalog.essentials().map(|t| t.id).collect();
        assert_eq!(essentials, ["docker", "git", "net-tools"]);

        let cloud: Vec<_> = catalog.cloud_devops().map(|t| t.id).collect();
        assert_eq!(cloud.len(), 7);
        assert_eq!(cloud[0], "terraform");
    }

    #[test]
    fn identifiers_are_unique() {
        let catalog = Catalog::standard();
        let mut ids: Vec<_> = catalog.tools().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.tools().len());
    }

    #[test]
    fn get_unknown_returns_none() {
        let catalog = Catalog::standard();
        assert!(catalog.get("frobnicator").is_none());
        assert!(!catalog.contains("frobnicator"));
    }

    #[test]
    fn is_installed_unknown_is_false_not_error() {
        let catalog = Catalog::standard();
        assert!(!catalog.is_installed_with("frobnicator", |_| true));
    }

    #[test]
    fn aws_cli_probes_the_aws_binary() {
        let catalog = Catalog::standard();
        assert!(catalog.is_installed_with("aws-cli", |b| b == "aws"));
        assert!(!catalog.is_installed_with("aws-cli", |b| b == "aws-cli"));
    }

    #[test]
    fn net_tools_accepts_any_of_three_binaries() {
        let catalog = Catalog::standard();
        for binary in ["netstat", "ifconfig", "route"] {
            assert!(catalog.is_installed_with("net-tools", |b| b == binary));
        }
        assert!(!catalog.is_installed_with("net-tools", |_| false));
    }

    #[test]
    fn probe_is_reevaluated_per_call() {
        use std::cell::Cell;

        let catalog = Catalog::standard();
        let calls = Cell::new(0u32);
        let probe = |_: &str| {
            calls.set(calls.get() + 1);
            false
        };

        let _ = catalog.is_installed_with("git", probe);
        let _ = catalog.is_installed_with("git", probe);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn synthetic_catalog_supports_custom_tools() {
        let catalog = Catalog::from_tools(vec![ToolDescriptor {
            id: "widget",
            label: "Widget",
            category: Category::Essential,
            binaries: &["widget"],
        }]);
        assert!(catalog.contains("widget"));
        assert!(!catalog.contains("docker"));
    }
}
