use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const APPROVAL_COLUMN: &str = "a_peca_foi_aprovada";
pub const FINALIZED_AT_COLUMN: &str = "data_finalizacao";

/// Logical state behind the `a_peca_foi_aprovada` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Null or empty column.
    Pending,
    Evaluation,
    Approved,
    Rejected,
    Conditional,
}

impl ApprovalStatus {
    pub const ALL: [ApprovalStatus; 5] = [
        ApprovalStatus::Pending,
        ApprovalStatus::Evaluation,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
        ApprovalStatus::Conditional,
    ];

    pub const VERDICTS: [ApprovalStatus; 3] = [
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
        ApprovalStatus::Conditional,
    ];

    /// Stored literal; pending has none.
    pub fn as_db(&self) -> Option<&'static str> {
        match self {
            ApprovalStatus::Pending => None,
            ApprovalStatus::Evaluation => Some("Avaliação"),
            ApprovalStatus::Approved => Some("Sim"),
            ApprovalStatus::Rejected => Some("Não"),
            ApprovalStatus::Conditional => Some("Condicional"),
        }
    }

    /// Reads a stored value. Literals are matched exactly; anything outside
    /// the five states yields `None`.
    pub fn from_db(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => Some(ApprovalStatus::Pending),
            Some("Avaliação") => Some(ApprovalStatus::Evaluation),
            Some("Sim") => Some(ApprovalStatus::Approved),
            Some("Não") => Some(ApprovalStatus::Rejected),
            Some("Condicional") => Some(ApprovalStatus::Conditional),
            Some(_) => None,
        }
    }

    pub fn is_verdict(&self) -> bool {
        Self::VERDICTS.contains(self)
    }

    pub fn verdict_literals() -> Vec<&'static str> {
        Self::VERDICTS.iter().filter_map(|s| s.as_db()).collect()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown tab: {0}")]
pub struct TabParseError(pub String);

/// Approval bucket shown in one list tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum InspectionTab {
    #[default]
    #[serde(rename = "aprovadas")]
    Finalized,
    #[serde(rename = "inspecao")]
    Pending,
    #[serde(rename = "avaliacao")]
    Evaluation,
}

impl InspectionTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionTab::Finalized => "aprovadas",
            InspectionTab::Pending => "inspecao",
            InspectionTab::Evaluation => "avaliacao",
        }
    }

    pub fn matches(&self, status: ApprovalStatus) -> bool {
        match self {
            InspectionTab::Finalized => status.is_verdict(),
            InspectionTab::Pending => status == ApprovalStatus::Pending,
            InspectionTab::Evaluation => status == ApprovalStatus::Evaluation,
        }
    }
}

impl FromStr for InspectionTab {
    type Err = TabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aprovadas" | "finalized" => Ok(InspectionTab::Finalized),
            "inspecao" | "pending" => Ok(InspectionTab::Pending),
            "avaliacao" | "evaluation" => Ok(InspectionTab::Evaluation),
            _ => Err(TabParseError(s.to_string())),
        }
    }
}

/// Query string of `GET /api/inspecoes`.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams, ToSchema)]
pub struct InspectionListQuery {
    /// Case-insensitive substring over serial, OP, barcode, part, project and vehicle.
    #[validate(length(max = 120))]
    pub search: Option<String>,
    /// `aprovadas` (default, also used when empty), `inspecao` or `avaliacao`.
    pub tab: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionListFilter {
    pub search: Option<String>,
    pub tab: InspectionTab,
}

impl InspectionListFilter {
    pub const SEARCH_LIMIT: i64 = 100;
    pub const RECENT_LIMIT: i64 = 50;

    pub fn limit(&self) -> i64 {
        if self.search.is_some() {
            Self::SEARCH_LIMIT
        } else {
            Self::RECENT_LIMIT
        }
    }

    /// ILIKE pattern matching the search term as a literal substring.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|term| format!("%{}%", escape_like(term)))
    }
}

impl TryFrom<InspectionListQuery> for InspectionListFilter {
    type Error = TabParseError;

    fn try_from(query: InspectionListQuery) -> Result<Self, Self::Error> {
        let tab = match query.tab.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => InspectionTab::default(),
        };
        let search = query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(Self { search, tab })
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Fixed projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InspectionSummary {
    pub id: i32,
    pub data: Option<NaiveDateTime>,
    pub serial: Option<String>,
    pub codigo_de_barras: Option<String>,
    pub op: Option<i64>,
    pub peca: Option<String>,
    pub projeto: Option<String>,
    pub veiculo: Option<String>,
    pub produto: Option<String>,
    pub sensor: Option<String>,
    pub a_peca_foi_aprovada: Option<String>,
}

impl InspectionSummary {
    pub fn approval_status(&self) -> Option<ApprovalStatus> {
        ApprovalStatus::from_db(self.a_peca_foi_aprovada.as_deref())
    }
}

/// Outcome of a create, update or delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
    /// Identifier assigned on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl MutationResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }

    pub fn created(id: i32) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }
}
