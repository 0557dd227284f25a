//! Certificates: the admin registry of issued certificates and the
//! certificates a student has earned

pub mod issued;
pub mod earned;

pub use issued::{
    CertificateFilter, CertificateRequest, CertificateStatus, Course, IssuedCertificate,
    COURSES, generate, mock_issued, reissue, revoke,
};
pub use earned::{EarnedCertificate, SortOrder, download, mock_earned, sorted};
