//! User administration commands

use std::collections::BTreeSet;

use super::{User, UserStatus};
use crate::error::{PlatformError, Result};
use crate::notice::Notice;
use crate::store::Repository;
use crate::validation::{require, require_email};

/// Save edits made to a user in the admin dialog
pub fn update_user<R: Repository<User>>(repo: &mut R, mut user: User) -> Result<Notice> {
    user.name = require("name", &user.name, "Nome é obrigatório")?.to_string();
    user.email = require_email("email", &user.email)?.to_string();
    let id = user.id;
    repo.update(user)?;

    log::info!("Updated user {}", id);
    Ok(Notice::success(
        "Usuário atualizado (mock)",
        "As alterações foram salvas com sucesso.",
    ))
}

pub fn remove_user<R: Repository<User>>(repo: &mut R, id: u32) -> Result<Notice> {
    let removed = repo.remove(id)?;

    log::info!("Removed user {} ({})", removed.id, removed.email);
    Ok(Notice::success(
        "Usuário removido (mock)",
        "O usuário foi removido do sistema.",
    ))
}

/// Checked rows of the user table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck one row
    pub fn toggle(&mut self, id: u32, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Header checkbox: select every listed user, or none
    pub fn select_all(&mut self, users: &[User], checked: bool) {
        self.ids.clear();
        if checked {
            self.ids.extend(users.iter().map(|u| u.id));
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Whether the header checkbox shows as checked
    pub fn covers_all(&self, users: &[User]) -> bool {
        !users.is_empty() && users.iter().all(|u| self.contains(u.id))
    }
}

/// Mark every selected user inactive and clear the selection.
///
/// Ids that no longer exist are skipped and not counted.
pub fn deactivate_selected<R: Repository<User>>(repo: &mut R, selection: &mut Selection) -> Result<Notice> {
    if selection.is_empty() {
        return Err(PlatformError::unavailable(
            "Nenhum usuário selecionado",
            "Selecione ao menos um usuário para desativar.",
        ));
    }

    let mut count = 0;
    for id in selection.ids() {
        if let Some(mut user) = repo.find(id) {
            user.status = UserStatus::Inactive;
            repo.update(user)?;
            count += 1;
        }
    }
    selection.clear();

    log::info!("Deactivated {} users", count);
    Ok(Notice::success(
        "Ação concluída (mock)",
        format!("{} usuário(s) desativado(s).", count),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRepository;
    use crate::users::mock_users;

    fn repo() -> InMemoryRepository<User> {
        InMemoryRepository::with_records(mock_users())
    }

    #[test]
    fn test_update_user() {
        let mut users = repo();
        let mut ana = users.get(1).expect("seeded");
        ana.name = "  Ana Souza ".to_string();
        ana.status = UserStatus::Inactive;

        let notice = update_user(&mut users, ana).expect("valid edit");
        assert_eq!(notice.title, "Usuário atualizado (mock)");

        let saved = users.get(1).expect("still there");
        assert_eq!(saved.name, "Ana Souza");
        assert!(!saved.is_active());
    }

    #[test]
    fn test_update_rejects_bad_email() {
        let mut users = repo();
        let mut ana = users.get(1).expect("seeded");
        ana.email = "sem-arroba".to_string();
        assert!(matches!(update_user(&mut users, ana), Err(PlatformError::Validation { field: "email", .. })));
        assert_eq!(users.get(1).expect("seeded").email, "ana.silva@email.com");
    }

    #[test]
    fn test_remove_user() {
        let mut users = repo();
        remove_user(&mut users, 2).expect("known user");
        assert!(users.find(2).is_none());
        assert!(matches!(remove_user(&mut users, 2), Err(PlatformError::NotFound { .. })));
    }

    #[test]
    fn test_deactivate_selected() {
        let mut users = repo();
        let mut selection = Selection::new();
        selection.toggle(1, true);
        selection.toggle(2, true);
        selection.toggle(5, true);
        selection.toggle(5, false);
        selection.toggle(42, true);

        let notice = deactivate_selected(&mut users, &mut selection).expect("non-empty selection");
        assert_eq!(notice.description, "2 usuário(s) desativado(s).");
        assert!(selection.is_empty());
        assert!(!users.get(1).expect("seeded").is_active());
        assert!(!users.get(2).expect("seeded").is_active());
        assert!(users.get(5).expect("seeded").is_active());
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut users = repo();
        let mut selection = Selection::new();
        assert!(deactivate_selected(&mut users, &mut selection).is_err());
    }

    #[test]
    fn test_select_all() {
        let users = mock_users();
        let mut selection = Selection::new();
        assert!(!selection.covers_all(&users));

        selection.select_all(&users, true);
        assert_eq!(selection.len(), users.len());
        assert!(selection.covers_all(&users));

        selection.toggle(3, false);
        assert!(!selection.covers_all(&users));

        selection.select_all(&users, false);
        assert!(selection.is_empty());
    }
}
