//! Issued certificate registry (admin screens)
//!
//! Admins filter the registry, revoke or reissue certificates, and generate
//! new ones for students who completed a course.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{self, ymd};
use crate::error::{PlatformError, Result};
use crate::notice::Notice;
use crate::store::{Record, Repository};
use crate::validation::require;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    Valid,
    Revoked,
}

impl CertificateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "Válido",
            CertificateStatus::Revoked => "Revogado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedCertificate {
    pub id: u32,
    pub student_name: String,
    pub course: String,
    pub workload_hours: u32,
    pub issue_date: NaiveDate,
    pub status: CertificateStatus,
}

impl Record for IssuedCertificate {
    const ENTITY: &'static str = "certificate";

    fn id(&self) -> u32 {
        self.id
    }
}

/// Course a certificate can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub name: &'static str,
    /// Suggested workload shown next to the course
    pub hours: u32,
}

pub const COURSES: &[Course] = &[
    Course { id: "fundamentos", name: "Fundamentos de Educação Financeira", hours: 20 },
    Course { id: "investimentos", name: "Introdução aos Investimentos", hours: 30 },
    Course { id: "planejamento", name: "Planejamento Financeiro Pessoal", hours: 25 },
];

impl Course {
    pub fn find(id: &str) -> Option<&'static Course> {
        COURSES.iter().find(|c| c.id == id)
    }
}

/// Registry filters. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateFilter {
    /// Case-insensitive substring of the student name
    pub student_name: Option<String>,
    /// Exact course name; "todos" means any course
    pub course: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl CertificateFilter {
    pub fn matches(&self, cert: &IssuedCertificate) -> bool {
        let name_ok = match self.student_name.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => cert
                .student_name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        };
        let course_ok = match self.course.as_deref() {
            None | Some("") | Some("todos") => true,
            Some(course) => cert.course == course,
        };
        name_ok && course_ok && dates::within(cert.issue_date, self.start, self.end)
    }

    pub fn apply(&self, certificates: &[IssuedCertificate]) -> Vec<IssuedCertificate> {
        certificates.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

/// Mark a certificate as revoked
pub fn revoke<R: Repository<IssuedCertificate>>(repo: &mut R, id: u32) -> Result<Notice> {
    let mut cert = repo.get(id)?;
    cert.status = CertificateStatus::Revoked;
    repo.update(cert)?;

    log::info!("Certificate {} revoked", id);
    Ok(Notice::success(
        "Certificado revogado (mock)",
        "O certificado foi revogado com sucesso.",
    ))
}

/// Issue a fresh valid copy of an existing certificate dated `today`.
/// The original record is left untouched.
pub fn reissue<R: Repository<IssuedCertificate>>(
    repo: &mut R,
    id: u32,
    today: NaiveDate,
) -> Result<(IssuedCertificate, Notice)> {
    let original = repo.get(id)?;
    let copy = IssuedCertificate {
        id: repo.next_id(),
        issue_date: today,
        status: CertificateStatus::Valid,
        ..original
    };
    repo.insert(copy.clone());

    log::info!("Certificate {} reissued as {}", id, copy.id);
    Ok((
        copy,
        Notice::success(
            "Certificado reemitido (mock)",
            "Um novo certificado foi gerado com sucesso.",
        ),
    ))
}

/// Certificate generation form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateRequest {
    pub student_name: String,
    pub course_id: String,
    pub workload_hours: u32,
    pub completion_date: Option<NaiveDate>,
}

impl CertificateRequest {
    /// Check every field, returning the selected course and completion date
    pub fn validate(&self) -> Result<(&'static Course, NaiveDate)> {
        require("student_name", &self.student_name, "Nome do aluno é obrigatório")?;
        let course = Course::find(self.course_id.trim())
            .ok_or_else(|| PlatformError::validation("course_id", "Selecione um curso"))?;
        if self.workload_hours < 1 {
            return Err(PlatformError::validation(
                "workload_hours",
                "Carga horária deve ser maior que 0",
            ));
        }
        let completion_date = self.completion_date.ok_or_else(|| {
            PlatformError::validation("completion_date", "Data de conclusão é obrigatória")
        })?;
        Ok((course, completion_date))
    }
}

/// Generate a valid certificate dated on the completion date
pub fn generate<R: Repository<IssuedCertificate>>(
    repo: &mut R,
    request: &CertificateRequest,
) -> Result<(IssuedCertificate, Notice)> {
    let (course, issue_date) = request.validate()?;

    let cert = IssuedCertificate {
        id: repo.next_id(),
        student_name: request.student_name.trim().to_string(),
        course: course.name.to_string(),
        workload_hours: request.workload_hours,
        issue_date,
        status: CertificateStatus::Valid,
    };
    repo.insert(cert.clone());

    log::info!("Certificate {} generated for {}", cert.id, cert.student_name);
    Ok((
        cert,
        Notice::success("Certificado gerado!", "Certificado criado com sucesso"),
    ))
}

/// Registry shown on the issued-certificates screen
pub fn mock_issued() -> Vec<IssuedCertificate> {
    use CertificateStatus::{Revoked, Valid};

    const BASICO: &str = "Desenvolvimento Infantil Básico";
    const AVANCADO: &str = "Primeiros Passos Avançado";
    const ESPECIAIS: &str = "Cuidados Especiais";

    let rows: &[(u32, &str, &str, u32, NaiveDate, CertificateStatus)] = &[
        (1, "Ana Silva", BASICO, 40, ymd(2024, 1, 20), Valid),
        (2, "Carlos Santos", AVANCADO, 60, ymd(2024, 1, 25), Valid),
        (3, "Maria Oliveira", ESPECIAIS, 30, ymd(2024, 2, 1), Revoked),
        (4, "João Pereira", BASICO, 40, ymd(2024, 2, 10), Valid),
        (5, "Lucia Costa", AVANCADO, 60, ymd(2024, 2, 15), Valid),
        (6, "Roberto Lima", ESPECIAIS, 30, ymd(2024, 2, 20), Valid),
        (7, "Fernanda Rocha", BASICO, 40, ymd(2024, 2, 25), Valid),
        (8, "Paulo Dias", AVANCADO, 60, ymd(2024, 3, 1), Revoked),
        (9, "Sandra Mendes", ESPECIAIS, 30, ymd(2024, 3, 5), Valid),
        (10, "Rafael Torres", BASICO, 40, ymd(2024, 3, 10), Valid),
    ];

    rows.iter()
        .map(|&(id, student, course, workload_hours, issue_date, status)| IssuedCertificate {
            id,
            student_name: student.to_string(),
            course: course.to_string(),
            workload_hours,
            issue_date,
            status,
        })
        .collect()
}
