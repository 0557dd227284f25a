use serde::{Deserialize, Serialize};

/// Investment category picked on the simulator screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentType {
    RendaFixa,
    Acoes,
    FundosImobiliarios,
}

impl InvestmentType {
    pub fn all() -> [InvestmentType; 3] {
        [
            InvestmentType::RendaFixa,
            InvestmentType::Acoes,
            InvestmentType::FundosImobiliarios,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            InvestmentType::RendaFixa => "renda-fixa",
            InvestmentType::Acoes => "acoes",
            InvestmentType::FundosImobiliarios => "fundos-imobiliarios",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentType::RendaFixa => "Renda Fixa",
            InvestmentType::Acoes => "Ações",
            InvestmentType::FundosImobiliarios => "Fundos Imobiliários",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.id() == id.trim())
    }
}
