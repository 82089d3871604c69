//! The standard procedure table.
//!
//! Every command sequence for the ten catalog tools on the three supported
//! platforms. Linux procedures register signing keys and repositories where
//! a vendor ships them (Docker, HashiCorp), download release binaries for
//! tools without distro packages (kubectl, Helm, Helmfile), and install the
//! rest through apt/yum. macOS procedures lean entirely on Homebrew.
//!
//! Cleanup of downloaded archives is best-effort: a failed `rm` never fails
//! an otherwise successful install.

use crate::catalog::Catalog;
use crate::platform::Platform;

use super::procedure::{Procedure, ProcedureTable, Step};

/// Build the full standard table for the given catalog.
pub fn standard_table(catalog: &Catalog) -> ProcedureTable {
    let mut table = ProcedureTable::new();
    for tool in catalog.tools() {
        for platform in Platform::ALL {
            if let Some(steps) = steps_for(tool.id, platform) {
                table.insert(Procedure {
                    tool: tool.id.to_string(),
                    platform,
                    steps,
                });
            }
        }
    }
    table
}

/// The fixed step sequence for one (tool, platform) pair.
fn steps_for(tool: &str, platform: Platform) -> Option<Vec<Step>> {
    use Platform::{CentOs, MacOs, Ubuntu};

    let steps = match (tool, platform) {
        ("docker", Ubuntu) => vec![
            Step::critical("Update apt package index", "sudo apt-get update"),
            Step::critical(
                "Install apt prerequisites",
                "sudo apt-get install -y apt-transport-https ca-certificates curl gnupg lsb-release",
            ),
            Step::critical(
                "Register Docker signing key",
                "curl -fsSL https://download.docker.com/linux/ubuntu/gpg | sudo gpg --dearmor -o /usr/share/keyrings/docker-archive-keyring.gpg",
            ),
            Step::critical(
                "Register Docker apt repository",
                r#"echo "deb [arch=$(dpkg --print-architecture) signed-by=/usr/share/keyrings/docker-archive-keyring.gpg] https://download.docker.com/linux/ubuntu $(lsb_release -cs) stable" | sudo tee /etc/apt/sources.list.d/docker.list > /dev/null"#,
            ),
            Step::critical("Refresh apt package index", "sudo apt-get update"),
            Step::critical(
                "Install Docker Engine",
                "sudo apt-get install -y docker-ce docker-ce-cli containerd.io",
            ),
            Step::critical(
                "Add current user to the docker group",
                "sudo usermod -aG docker $USER",
            ),
            Step::critical("Start Docker service", "sudo systemctl start docker"),
            Step::critical("Enable Docker service at boot", "sudo systemctl enable docker"),
        ],
        ("docker", CentOs) => vec![
            Step::critical("Install yum-utils", "sudo yum install -y yum-utils"),
            Step::critical(
                "Register Docker yum repository",
                "sudo yum-config-manager --add-repo https://download.docker.com/linux/centos/docker-ce.repo",
            ),
            Step::critical(
                "Install Docker Engine",
                "sudo yum install -y docker-ce docker-ce-cli containerd.io",
            ),
            Step::critical("Start Docker service", "sudo systemctl start docker"),
            Step::critical("Enable Docker service at boot", "sudo systemctl enable docker"),
            Step::critical(
                "Add current user to the docker group",
                "sudo usermod -aG docker $USER",
            ),
        ],
        ("docker", MacOs) => vec![Step::critical(
            "Install Docker Desktop via Homebrew",
            "brew install --cask docker",
        )],

        ("git", Ubuntu) => vec![
            Step::critical("Update apt package index", "sudo apt-get update"),
            Step::critical("Install Git", "sudo apt-get install -y git"),
        ],
        ("git", CentOs) => vec![Step::critical("Install Git", "sudo yum install -y git")],
        ("git", MacOs) => vec![Step::critical("Install Git via Homebrew", "brew install git")],

        ("net-tools", Ubuntu) => vec![
            Step::critical("Update apt package index", "sudo apt-get update"),
            Step::critical("Install net-tools", "sudo apt-get install -y net-tools"),
        ],
        ("net-tools", CentOs) => vec![Step::critical(
            "Install net-tools",
            "sudo yum install -y net-tools",
        )],
        ("net-tools", MacOs) => vec![Step::critical(
            "Install net-tools via Homebrew",
            "brew install net-tools",
        )],

        ("terraform", Ubuntu) => vec![
            Step::critical(
                "Register HashiCorp signing key",
                "wget -O- https://apt.releases.hashicorp.com/gpg | sudo gpg --dearmor -o /usr/share/keyrings/hashicorp-archive-keyring.gpg",
            ),
            Step::critical(
                "Register HashiCorp apt repository",
                r#"echo "deb [signed-by=/usr/share/keyrings/hashicorp-archive-keyring.gpg] https://apt.releases.hashicorp.com $(lsb_release -cs) main" | sudo tee /etc/apt/sources.list.d/hashicorp.list"#,
            ),
            Step::critical("Update apt package index", "sudo apt-get update"),
            Step::critical("Install Terraform", "sudo apt-get install -y terraform"),
        ],
        ("terraform", CentOs) => vec![
            Step::critical(
                "Register HashiCorp yum repository",
                "sudo yum-config-manager --add-repo https://rpm.releases.hashicorp.com/RHEL/hashicorp.repo",
            ),
            Step::critical("Install Terraform", "sudo yum -y install terraform"),
        ],
        ("terraform", MacOs) => vec![Step::critical(
            "Install Terraform via Homebrew",
            "brew install terraform",
        )],

        ("aws-cli", Ubuntu) => vec![
            Step::critical(
                "Download AWS CLI installer",
                "curl https://awscli.amazonaws.com/awscli-exe-linux-x86_64.zip -o awscliv2.zip",
            ),
            Step::critical("Update apt package index", "sudo apt-get update"),
            Step::critical("Install unzip", "sudo apt-get install -y unzip"),
            Step::critical("Extract AWS CLI installer", "unzip awscliv2.zip"),
            Step::critical("Run AWS CLI installer", "sudo ./aws/install"),
            Step::best_effort(
                "Remove downloaded installer",
                "rm -rf awscliv2.zip aws",
            ),
        ],
        ("aws-cli", CentOs) => vec![
            Step::critical(
                "Download AWS CLI installer",
                "curl https://awscli.amazonaws.com/awscli-exe-linux-x86_64.zip -o awscliv2.zip",
            ),
            Step::critical("Install unzip", "sudo yum install -y unzip"),
            Step::critical("Extract AWS CLI installer", "unzip awscliv2.zip"),
            Step::critical("Run AWS CLI installer", "sudo ./aws/install"),
            Step::best_effort(
                "Remove downloaded installer",
                "rm -rf awscliv2.zip aws",
            ),
        ],
        ("aws-cli", MacOs) => vec![Step::critical(
            "Install AWS CLI via Homebrew",
            "brew install awscli",
        )],

        ("kubectl", Ubuntu | CentOs) => vec![
            Step::critical(
                "Download kubectl",
                "curl -LO https://dl.k8s.io/release/v1.28.0/bin/linux/amd64/kubectl",
            ),
            Step::critical("Make kubectl executable", "chmod +x kubectl"),
            Step::critical(
                "Move kubectl to /usr/local/bin",
                "sudo mv kubectl /usr/local/bin/",
            ),
        ],
        ("kubectl", MacOs) => vec![Step::critical(
            "Install kubectl via Homebrew",
            "brew install kubectl",
        )],

        ("watch", Ubuntu) => vec![
            Step::critical("Update apt package index", "sudo apt-get update"),
            Step::critical("Install procps", "sudo apt-get install -y procps"),
        ],
        ("watch", CentOs) => vec![Step::critical(
            "Install procps-ng",
            "sudo yum install -y procps-ng",
        )],
        ("watch", MacOs) => vec![Step::critical(
            "Install watch via Homebrew",
            "brew install watch",
        )],

        ("helm", Ubuntu | CentOs) => vec![
            Step::critical(
                "Download Helm archive",
                "curl https://get.helm.sh/helm-v3.12.0-linux-amd64.tar.gz -o helm.tar.gz",
            ),
            Step::critical("Extract Helm archive", "tar -xzf helm.tar.gz"),
            Step::critical(
                "Move helm to /usr/local/bin",
                "sudo mv linux-amd64/helm /usr/local/bin/",
            ),
            Step::best_effort(
                "Remove downloaded archive",
                "rm -rf helm.tar.gz linux-amd64",
            ),
        ],
        ("helm", MacOs) => vec![Step::critical(
            "Install Helm via Homebrew",
            "brew install helm",
        )],

        ("helmfile", Ubuntu | CentOs) => vec![
            Step::critical(
                "Download Helmfile",
                "curl -L https://github.com/helmfile/helmfile/releases/latest/download/helmfile_linux_amd64 -o helmfile",
            ),
            Step::critical("Make Helmfile executable", "chmod +x helmfile"),
            Step::critical(
                "Move helmfile to /usr/local/bin",
                "sudo mv helmfile /usr/local/bin/",
            ),
        ],
        ("helmfile", MacOs) => vec![Step::critical(
            "Install Helmfile via Homebrew",
            "brew install helmfile",
        )],

        ("k9s", Ubuntu | CentOs) => vec![Step::critical(
            "Install K9s via webinstall.dev",
            "curl -sS https://webinstall.dev/k9s | bash",
        )],
        ("k9s", MacOs) => vec![Step::critical(
            "Install K9s via Homebrew",
            "brew install k9s",
        )],

        _ => return None,
    };

    Some(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::procedure::StepKind;

    #[test]
    fn standard_table_covers_full_catalog() {
        let catalog = Catalog::standard();
        let table = standard_table(&catalog);
        assert!(table.validate(&catalog).is_empty());
    }

    #[test]
    fn unknown_tool_has_no_steps() {
        assert!(steps_for("frobnicator", Platform::Ubuntu).is_none());
    }

    #[test]
    fn macos_procedures_use_homebrew() {
        let catalog = Catalog::standard();
        let table = standard_table(&catalog);
        for tool in catalog.tools() {
            let procedure = table.get(tool.id, Platform::MacOs).unwrap();
            assert!(
                procedure.steps.iter().any(|s| s.command.starts_with("brew ")),
                "{} macOS procedure should call brew",
                tool.id
            );
        }
    }

    #[test]
    fn archive_cleanup_steps_are_best_effort() {
        let catalog = Catalog::standard();
        let table = standard_table(&catalog);
        for (tool, platform) in [
            ("aws-cli", Platform::Ubuntu),
            ("aws-cli", Platform::CentOs),
            ("helm", Platform::Ubuntu),
        ] {
            let procedure = table.get(tool, platform).unwrap();
            let cleanup = procedure
                .steps
                .iter()
                .find(|s| s.command.starts_with("rm "))
                .unwrap();
            assert_eq!(cleanup.kind, StepKind::BestEffort);
        }
    }

    #[test]
    fn docker_ubuntu_registers_repo_before_install() {
        let catalog = Catalog::standard();
        let table = standard_table(&catalog);
        let procedure = table.get("docker", Platform::Ubuntu).unwrap();

        let repo_idx = procedure
            .steps
            .iter()
            .position(|s| s.command.contains("sources.list.d/docker.list"))
            .unwrap();
        let install_idx = procedure
            .steps
            .iter()
            .position(|s| s.command.contains("install -y docker-ce"))
            .unwrap();
        assert!(repo_idx < install_idx);
    }

    #[test]
    fn centos_procedures_never_call_apt() {
        let catalog = Catalog::standard();
        let table = standard_table(&catalog);
        for tool in catalog.tools() {
            let procedure = table.get(tool.id, Platform::CentOs).unwrap();
            assert!(
                procedure.steps.iter().all(|s| !s.command.contains("apt-get")),
                "{} CentOS procedure should not use apt-get",
                tool.id
            );
        }
    }
}
