//! Log message catalogue
//!
//! Progress lines written during a run come in English or French. Error
//! details stay in English; only the surrounding sentence is translated.

use serde::{Deserialize, Serialize};

use crate::service::BranchOutcome;

/// Language of progress log lines
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    #[must_use]
    pub fn branch_name_set(self, branch: &str) -> String {
        match self {
            Self::En => format!("Branch name set to: {branch}"),
            Self::Fr => format!("Nom de la branche défini : {branch}"),
        }
    }

    #[must_use]
    pub fn configuring_git(self) -> String {
        match self {
            Self::En => "Configuring Git...".to_string(),
            Self::Fr => "Configuration de Git...".to_string(),
        }
    }

    #[must_use]
    pub fn fetching(self, remote: &str) -> String {
        match self {
            Self::En => format!("Updating remote references from '{remote}'..."),
            Self::Fr => format!("Mise à jour des références distantes depuis '{remote}'..."),
        }
    }

    #[must_use]
    pub fn checking_branch(self, branch: &str) -> String {
        match self {
            Self::En => format!("Checking if branch '{branch}' exists..."),
            Self::Fr => format!("Vérification de l'existence de la branche '{branch}'..."),
        }
    }

    #[must_use]
    pub fn branch_exists(self, branch: &str) -> String {
        match self {
            Self::En => format!("Branch '{branch}' already exists. No action taken."),
            Self::Fr => format!("La branche '{branch}' existe déjà. Aucune action effectuée."),
        }
    }

    #[must_use]
    pub fn creating_branch(self, branch: &str, base: &str) -> String {
        match self {
            Self::En => format!("Creating branch '{branch}' from '{base}'."),
            Self::Fr => format!("Création de la branche '{branch}' à partir de '{base}'."),
        }
    }

    #[must_use]
    pub fn branch_created(self, branch: &str) -> String {
        match self {
            Self::En => format!("Branch '{branch}' successfully created and pushed."),
            Self::Fr => format!("Branche '{branch}' créée et poussée avec succès."),
        }
    }

    #[must_use]
    pub fn assigning(self, branch: &str, issue: i64) -> String {
        match self {
            Self::En => format!("Assigning branch '{branch}' to issue #{issue}."),
            Self::Fr => format!("Assignation de la branche '{branch}' au ticket #{issue}."),
        }
    }

    #[must_use]
    pub fn assigned(self, branch: &str, issue: i64) -> String {
        match self {
            Self::En => format!("Branch '{branch}' successfully assigned to issue #{issue}."),
            Self::Fr => format!("Branche '{branch}' assignée avec succès au ticket #{issue}."),
        }
    }

    #[must_use]
    pub fn dry_run_create(self, branch: &str, base: &str) -> String {
        match self {
            Self::En => format!("[dry-run] Would create branch '{branch}' from '{base}'."),
            Self::Fr => {
                format!("[simulation] La branche '{branch}' serait créée à partir de '{base}'.")
            }
        }
    }

    #[must_use]
    pub fn dry_run_link(self, branch: &str, issue: i64) -> String {
        match self {
            Self::En => format!("[dry-run] Would assign branch '{branch}' to issue #{issue}."),
            Self::Fr => {
                format!("[simulation] La branche '{branch}' serait assignée au ticket #{issue}.")
            }
        }
    }

    /// Closing line of a successful run
    #[must_use]
    pub fn summary(self, branch: &str, outcome: BranchOutcome) -> String {
        match (self, outcome) {
            (Self::En, BranchOutcome::Created) => {
                format!("Done: created '{branch}' and linked it to the issue.")
            }
            (Self::En, BranchOutcome::AlreadyExists) => {
                format!("Done: linked existing branch '{branch}' to the issue.")
            }
            (Self::En, BranchOutcome::WouldCreate) => {
                format!("[dry-run] Done: '{branch}' would be created and linked.")
            }
            (Self::Fr, BranchOutcome::Created) => {
                format!("Terminé : '{branch}' créée et liée au ticket.")
            }
            (Self::Fr, BranchOutcome::AlreadyExists) => {
                format!("Terminé : branche existante '{branch}' liée au ticket.")
            }
            (Self::Fr, BranchOutcome::WouldCreate) => {
                format!("[simulation] Terminé : '{branch}' serait créée et liée.")
            }
        }
    }

    /// Diagnostic written right before a non-zero exit
    #[must_use]
    pub fn fatal(self, detail: &str) -> String {
        match self {
            Self::En => format!("Error: {detail}"),
            Self::Fr => format!("Erreur : {detail}"),
        }
    }
}
