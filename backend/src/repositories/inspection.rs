//! Inspection checklist repository.
//!
//! Each method issues exactly one statement. Reads take any executor; writes
//! are called with the connection of a transaction opened by the service.

use serde_json::Value;
use sqlx::{postgres::PgExecutor, Postgres, QueryBuilder};

use crate::config::PlantScope;
use crate::models::{
    fields::{ColumnName, InspectionFields},
    inspection::{
        ApprovalStatus, InspectionListFilter, InspectionSummary, InspectionTab,
        FINALIZED_AT_COLUMN,
    },
};

pub const TABLE_NAME: &str = "insp_final_checklist";
/// `data` and `op` are cast so `date`/`timestamptz` and `bigint` columns
/// decode as well.
const SUMMARY_COLUMNS: &str = "id, data::timestamp AS data, serial, codigo_de_barras, \
     op::bigint AS op, peca, projeto, veiculo, produto, sensor, a_peca_foi_aprovada";
const SEARCH_EXPRESSIONS: [&str; 7] = [
    "serial",
    "op::text",
    "codigo_de_barras",
    "peca",
    "(peca || op::text)",
    "projeto",
    "veiculo",
];

#[derive(Debug, Clone, Copy)]
pub struct InspectionRepository<'a> {
    scope: &'a PlantScope,
}

impl<'a> InspectionRepository<'a> {
    pub fn new(scope: &'a PlantScope) -> Self {
        Self { scope }
    }

    pub async fn list<'e, E>(
        &self,
        db: E,
        filter: &InspectionListFilter,
    ) -> Result<Vec<InspectionSummary>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = list_query(self.scope, filter);
        builder
            .build_query_as::<InspectionSummary>()
            .fetch_all(db)
            .await
    }

    /// Full row as a JSON object in column order.
    pub async fn find_by_id<'e, E>(&self, db: E, id: i32) -> Result<Option<Value>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT row_to_json(t) FROM {} AS t WHERE t.id = $1",
            TABLE_NAME
        );
        sqlx::query_scalar::<_, Value>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn insert<'e, E>(&self, db: E, fields: &InspectionFields) -> Result<i32, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = insert_statement(fields);
        sqlx::query_scalar::<_, i32>(&query)
            .bind(fields.to_document())
            .fetch_one(db)
            .await
    }

    /// Returns the number of rows touched; an unknown id touches none.
    pub async fn update<'e, E>(
        &self,
        db: E,
        id: i32,
        fields: &InspectionFields,
        stamp_finalized: bool,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = update_statement(fields, stamp_finalized);
        let result = sqlx::query(&query)
            .bind(fields.to_document())
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete<'e, E>(&self, db: E, id: i32) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("DELETE FROM {} WHERE id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        Ok(result.rows_affected())
    }
}

fn list_query<'q>(scope: &'q PlantScope, filter: &InspectionListFilter) -> QueryBuilder<'q, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE fabrica = ",
        SUMMARY_COLUMNS, TABLE_NAME
    ));
    builder.push_bind(scope.site.as_str());
    push_tab_filter(&mut builder, filter.tab);

    match filter.search_pattern() {
        Some(pattern) => {
            builder.push(" AND (");
            for (idx, expr) in SEARCH_EXPRESSIONS.iter().enumerate() {
                if idx > 0 {
                    builder.push(" OR ");
                }
                builder.push(*expr).push(" ILIKE ").push_bind(pattern.clone());
            }
            builder.push(")");
        }
        None => {
            builder.push(" AND data >= CURRENT_DATE - INTERVAL '1 month'");
        }
    }

    builder
        .push(" ORDER BY data DESC, id DESC LIMIT ")
        .push_bind(filter.limit());
    builder
}

fn push_tab_filter(builder: &mut QueryBuilder<'_, Postgres>, tab: InspectionTab) {
    match tab {
        InspectionTab::Finalized => {
            let verdicts: Vec<String> = ApprovalStatus::verdict_literals()
                .into_iter()
                .map(str::to_string)
                .collect();
            builder
                .push(" AND a_peca_foi_aprovada = ANY(")
                .push_bind(verdicts)
                .push(")");
        }
        InspectionTab::Pending => {
            builder.push(" AND (a_peca_foi_aprovada IS NULL OR a_peca_foi_aprovada = '')");
        }
        InspectionTab::Evaluation => {
            builder
                .push(" AND a_peca_foi_aprovada = ")
                .push_bind(ApprovalStatus::Evaluation.as_db().unwrap_or_default());
        }
    }
}

/// `INSERT` whose values come from one JSON parameter converted to the row
/// type by the store.
fn insert_statement(fields: &InspectionFields) -> String {
    let columns = fields
        .columns()
        .map(ColumnName::quoted)
        .collect::<Vec<_>>()
        .join(", ");
    let values = fields
        .columns()
        .map(|c| format!("r.{}", c.quoted()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {table} ({columns}) SELECT {values} \
         FROM jsonb_populate_record(NULL::{table}, $1) AS r RETURNING id",
        table = TABLE_NAME,
        columns = columns,
        values = values,
    )
}

fn update_statement(fields: &InspectionFields, stamp_finalized: bool) -> String {
    let mut assignments: Vec<String> = fields
        .columns()
        .map(|c| format!("{col} = r.{col}", col = c.quoted()))
        .collect();
    if stamp_finalized {
        assignments.push(format!("\"{}\" = NOW()", FINALIZED_AT_COLUMN));
    }
    format!(
        "UPDATE {table} SET {assignments} \
         FROM jsonb_populate_record(NULL::{table}, $1) AS r WHERE {table}.id = $2",
        table = TABLE_NAME,
        assignments = assignments.join(", "),
    )
}
