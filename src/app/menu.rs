//! Menu catalogs and menu screen state

use crate::constants::{ADMIN_MENU_PROGRAM, ADMIN_MENU_TRAN, MENU_PROGRAM, MENU_TRAN};
use tracing::debug;

/// Where a menu option leads. Most legacy transactions are not part of this
/// client and fall through to a "not yet available" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    AccountView,
    CardList,
    CardDetail,
    Unavailable,
}

pub struct MenuOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub target: MenuTarget,
}

pub struct MenuCatalog {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub transaction_id: &'static str,
    pub program_name: &'static str,
    pub options: &'static [MenuOption],
}

pub const MAIN_MENU: MenuCatalog = MenuCatalog {
    title: "CardDemo - Main Menu",
    subtitle: "Back-office system functions",
    transaction_id: MENU_TRAN,
    program_name: MENU_PROGRAM,
    options: &[
        MenuOption {
            id: "account-view",
            label: "Account View",
            description: "Look up account information",
            target: MenuTarget::AccountView,
        },
        MenuOption {
            id: "account-update",
            label: "Account Update",
            description: "Modify account information",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "credit-card-list",
            label: "Credit Card List",
            description: "List credit cards",
            target: MenuTarget::CardList,
        },
        MenuOption {
            id: "credit-card-view",
            label: "Credit Card View",
            description: "View credit card data",
            target: MenuTarget::CardDetail,
        },
        MenuOption {
            id: "credit-card-update",
            label: "Credit Card Update",
            description: "Modify a credit card",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "transaction-list",
            label: "Transaction List",
            description: "List transactions",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "transaction-view",
            label: "Transaction View",
            description: "View transaction details",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "transaction-add",
            label: "Transaction Add",
            description: "Record a new transaction",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "transaction-reports",
            label: "Transaction Reports",
            description: "Generate transaction reports",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "bill-payment",
            label: "Bill Payment",
            description: "Process bill payments",
            target: MenuTarget::Unavailable,
        },
    ],
};

pub const ADMIN_MENU: MenuCatalog = MenuCatalog {
    title: "CardDemo - Administration Menu",
    subtitle: "Security and administration functions",
    transaction_id: ADMIN_MENU_TRAN,
    program_name: ADMIN_MENU_PROGRAM,
    options: &[
        MenuOption {
            id: "user-list",
            label: "User List (Security)",
            description: "List all system users",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "user-add",
            label: "User Add (Security)",
            description: "Add a new user to the system",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "user-update",
            label: "User Update (Security)",
            description: "Update user information",
            target: MenuTarget::Unavailable,
        },
        MenuOption {
            id: "user-delete",
            label: "User Delete (Security)",
            description: "Delete a user from the system",
            target: MenuTarget::Unavailable,
        },
    ],
};

/// Menu screen state: the option number field plus which catalog is showing
#[derive(Default)]
pub struct MenuScreen {
    pub admin: bool,
    pub option_input: String,
    pub error: Option<String>,
}

impl MenuScreen {
    pub fn catalog(&self) -> &'static MenuCatalog {
        if self.admin {
            &ADMIN_MENU
        } else {
            &MAIN_MENU
        }
    }

    /// Resolve the typed option number. Out-of-range or non-numeric input
    /// sets the screen error and resolves to nothing.
    pub fn submit(&mut self) -> Option<&'static MenuOption> {
        let options = self.catalog().options;
        match self.option_input.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => {
                self.error = None;
                self.option_input.clear();
                let option = &options[n - 1];
                debug!(option = option.id, "Menu option selected");
                Some(option)
            }
            _ => {
                self.error = Some(format!(
                    "Please enter a valid option number (1-{})",
                    options.len()
                ));
                None
            }
        }
    }

    /// Click path: pick an option by its position in the catalog.
    pub fn choose(&mut self, index: usize) -> Option<&'static MenuOption> {
        let option = self.catalog().options.get(index)?;
        self.error = None;
        self.option_input.clear();
        debug!(option = option.id, "Menu option selected");
        Some(option)
    }

    pub fn toggle_admin(&mut self) {
        self.admin = !self.admin;
        self.option_input.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shapes() {
        assert_eq!(MAIN_MENU.options.len(), 10);
        assert_eq!(ADMIN_MENU.options.len(), 4);
        assert!(ADMIN_MENU.options.iter().all(|o| o.target == MenuTarget::Unavailable));
    }

    #[test]
    fn test_implemented_targets() {
        let implemented: Vec<_> = MAIN_MENU
            .options
            .iter()
            .filter(|o| o.target != MenuTarget::Unavailable)
            .map(|o| o.id)
            .collect();
        assert_eq!(implemented, vec!["account-view", "credit-card-list", "credit-card-view"]);
    }

    #[test]
    fn test_submit_by_number() {
        let mut menu = MenuScreen::default();
        menu.option_input = "3".to_string();
        let option = menu.submit().unwrap();
        assert_eq!(option.id, "credit-card-list");
        assert!(menu.option_input.is_empty());
        assert!(menu.error.is_none());
    }

    #[test]
    fn test_submit_rejects_bad_input() {
        let mut menu = MenuScreen::default();
        for bad in ["", "0", "11", "abc"] {
            menu.option_input = bad.to_string();
            assert!(menu.submit().is_none(), "input {:?} should not resolve", bad);
            assert!(menu.error.is_some());
        }
    }

    #[test]
    fn test_admin_toggle_switches_catalog() {
        let mut menu = MenuScreen::default();
        assert_eq!(menu.catalog().transaction_id, "CC00");
        menu.toggle_admin();
        assert_eq!(menu.catalog().transaction_id, "CADM");
        menu.option_input = "2".to_string();
        assert_eq!(menu.submit().unwrap().id, "user-add");
    }
}
