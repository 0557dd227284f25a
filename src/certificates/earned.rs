//! Certificates earned by the signed-in student

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ymd;
use crate::error::Result;
use crate::notice::Notice;
use crate::store::{Record, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedCertificate {
    pub id: u32,
    pub course: String,
    pub workload_hours: u32,
    pub issue_date: NaiveDate,
    pub category: String,
}

impl Record for EarnedCertificate {
    const ENTITY: &'static str = "earned certificate";

    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// "recente"
    #[default]
    Newest,
    /// "antiga"
    Oldest,
}

/// Certificates ordered by issue date
pub fn sorted(mut certificates: Vec<EarnedCertificate>, order: SortOrder) -> Vec<EarnedCertificate> {
    match order {
        SortOrder::Newest => certificates.sort_by(|a, b| b.issue_date.cmp(&a.issue_date)),
        SortOrder::Oldest => certificates.sort_by(|a, b| a.issue_date.cmp(&b.issue_date)),
    }
    certificates
}

/// Start a (mock) download of the certificate file
pub fn download<R: Repository<EarnedCertificate>>(repo: &R, id: u32) -> Result<Notice> {
    let cert = repo.get(id)?;
    log::info!("Download requested for certificate {}", id);
    Ok(Notice::success(
        "Download iniciado (mock)",
        format!("Baixando certificado do curso \"{}\"", cert.course),
    ))
}

pub fn mock_earned() -> Vec<EarnedCertificate> {
    let rows: &[(u32, &str, u32, NaiveDate, &str)] = &[
        (1, "Investimentos para Iniciantes", 12, ymd(2024, 7, 20), "Investimentos"),
        (2, "Planejamento Financeiro Pessoal", 15, ymd(2024, 6, 15), "Planejamento"),
        (3, "Introdução à Renda Fixa", 10, ymd(2024, 5, 30), "Renda Fixa"),
        (4, "Fundos de Investimento", 18, ymd(2024, 4, 22), "Investimentos"),
        (5, "Educação Financeira Básica", 8, ymd(2024, 3, 10), "Educação"),
        (6, "Análise de Investimentos", 20, ymd(2024, 2, 5), "Investimentos"),
    ];

    rows.iter()
        .map(|&(id, course, workload_hours, issue_date, category)| EarnedCertificate {
            id,
            course: course.to_string(),
            workload_hours,
            issue_date,
            category: category.to_string(),
        })
        .collect()
}
