//! User records and demo data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ymd;
use crate::store::Record;

/// Id of the user shown on the profile screens
pub const CURRENT_USER_ID: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserProfile {
    /// "aluno"
    Student,
    Admin,
}

impl UserProfile {
    pub fn label(&self) -> &'static str {
        match self {
            UserProfile::Student => "Aluno",
            UserProfile::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Ativo",
            UserStatus::Inactive => "Inativo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub profile: UserProfile,
    pub status: UserStatus,
    pub registration_date: NaiveDate,
}

impl Record for User {
    const ENTITY: &'static str = "user";

    fn id(&self) -> u32 {
        self.id
    }
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Accounts listed on the user administration screen plus the profile user
pub fn mock_users() -> Vec<User> {
    use UserProfile::{Admin, Student};
    use UserStatus::{Active, Inactive};

    let rows: &[(u32, &str, &str, UserProfile, UserStatus, NaiveDate)] = &[
        (1, "Ana Silva", "ana.silva@email.com", Student, Active, ymd(2024, 1, 15)),
        (2, "Carlos Santos", "carlos.santos@email.com", Student, Active, ymd(2024, 1, 20)),
        (3, "Maria Oliveira", "maria.oliveira@email.com", Admin, Active, ymd(2024, 1, 10)),
        (4, "João Pereira", "joao.pereira@email.com", Student, Inactive, ymd(2024, 2, 5)),
        (5, "Lucia Costa", "lucia.costa@email.com", Student, Active, ymd(2024, 2, 12)),
        (6, "Roberto Lima", "roberto.lima@email.com", Student, Active, ymd(2024, 2, 18)),
        (7, "Fernanda Rocha", "fernanda.rocha@email.com", Admin, Active, ymd(2024, 1, 8)),
        (8, "Paulo Dias", "paulo.dias@email.com", Student, Inactive, ymd(2024, 2, 25)),
        (CURRENT_USER_ID, "João Silva", "joao.silva@email.com", Student, Active, ymd(2024, 3, 1)),
    ];

    rows.iter()
        .map(|&(id, name, email, profile, status, registration_date)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            profile,
            status,
            registration_date,
        })
        .collect()
}
