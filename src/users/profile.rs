//! Commands on the signed-in user's own account

use super::User;
use crate::error::Result;
use crate::notice::Notice;
use crate::store::Repository;
use crate::validation::{require, require_email};

/// Save the name and e-mail edited on the profile screen
pub fn update_profile<R: Repository<User>>(repo: &mut R, id: u32, name: &str, email: &str) -> Result<Notice> {
    let name = require("name", name, "Nome é obrigatório")?;
    let email = require_email("email", email)?;

    let mut user = repo.get(id)?;
    user.name = name.to_string();
    user.email = email.to_string();
    repo.update(user)?;

    log::info!("Profile {} updated", id);
    Ok(Notice::success(
        "Perfil atualizado com sucesso",
        "Suas informações foram salvas.",
    ))
}

/// Remove the account. The client signs out after showing the notice.
pub fn delete_account<R: Repository<User>>(repo: &mut R, id: u32) -> Result<Notice> {
    repo.remove(id)?;

    log::info!("Account {} deleted", id);
    Ok(Notice::success(
        "Conta removida com sucesso (mock)",
        "Redirecionando para a tela de login...",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[test]
    fn test_update_profile() {
        let mut store = MockStore::seeded();
        let id = store.current_user_id;

        update_profile(&mut store.users, id, "João S. Silva", "joao@novo.com").expect("valid");
        let user = store.users.get(id).expect("profile user");
        assert_eq!(user.name, "João S. Silva");
        assert_eq!(user.email, "joao@novo.com");
    }

    #[test]
    fn test_update_profile_requires_name() {
        let mut store = MockStore::seeded();
        let id = store.current_user_id;
        let err = update_profile(&mut store.users, id, " ", "joao@novo.com").unwrap_err();
        assert_eq!(err.notice().description, "Nome é obrigatório");
        assert_eq!(store.users.get(id).expect("profile user").name, "João Silva");
    }

    #[test]
    fn test_delete_account() {
        let mut store = MockStore::seeded();
        let id = store.current_user_id;
        let notice = delete_account(&mut store.users, id).expect("existing account");
        assert!(notice.is_success());
        assert!(store.users.find(id).is_none());
    }
}
