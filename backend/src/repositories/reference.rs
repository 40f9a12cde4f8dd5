//! Read-only lookups over reference tables maintained outside this service.

use sqlx::postgres::PgExecutor;

use crate::config::PlantScope;
use crate::models::reference::{parse_order_number, DefectType, OrderMetadata};

const ORDER_TABLE: &str = "dados_uso_geral.dados_op";
const OPERATOR_TABLE: &str = "operadores_producao";
const DEFECT_TABLE: &str = "dados_uso_geral.tipos_de_defeito";

#[derive(Debug, Clone, Copy)]
pub struct ReferenceRepository<'a> {
    scope: &'a PlantScope,
}

impl<'a> ReferenceRepository<'a> {
    pub fn new(scope: &'a PlantScope) -> Self {
        Self { scope }
    }

    /// Looks up an order by number. `op` may be zero-padded, as in barcode
    /// suffixes; non-numeric input finds nothing.
    pub async fn find_order<'e, E>(
        &self,
        db: E,
        op: &str,
    ) -> Result<Option<OrderMetadata>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT codigo_veiculo::text AS codigo_veiculo, modelo::text AS modelo, \
             produto::text AS produto, sensor::text AS sensor \
             FROM {} WHERE planta = $1 AND op = $2",
            ORDER_TABLE
        );
        let Some(number) = parse_order_number(op) else {
            return Ok(None);
        };
        sqlx::query_as::<_, OrderMetadata>(&query)
            .bind(&self.scope.plant)
            .bind(number)
            .fetch_optional(db)
            .await
    }

    pub async fn list_operators<'e, E>(&self, db: E) -> Result<Vec<String>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT nome_completo FROM {} \
             WHERE setor = $1 AND fabrica = $2 AND nome_completo IS NOT NULL \
             ORDER BY nome_completo",
            OPERATOR_TABLE
        );
        sqlx::query_scalar::<_, String>(&query)
            .bind(&self.scope.sector)
            .bind(&self.scope.site)
            .fetch_all(db)
            .await
    }

    pub async fn list_leaders<'e, E>(&self, db: E) -> Result<Vec<String>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT nome_completo FROM {} \
             WHERE operacao_ou_lideranca = $1 AND fabrica = $2 AND setor = $3 \
             AND nome_completo IS NOT NULL \
             ORDER BY nome_completo",
            OPERATOR_TABLE
        );
        sqlx::query_scalar::<_, String>(&query)
            .bind(&self.scope.leader_role)
            .bind(&self.scope.site)
            .bind(&self.scope.sector)
            .fetch_all(db)
            .await
    }

    pub async fn list_defect_types<'e, E>(&self, db: E) -> Result<Vec<DefectType>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT DISTINCT tipo_defeito FROM {} \
             WHERE bloco = $1 AND status = $2 AND tipo_defeito IS NOT NULL \
             ORDER BY tipo_defeito",
            DEFECT_TABLE
        );
        sqlx::query_as::<_, DefectType>(&query)
            .bind(&self.scope.defect_block)
            .bind(&self.scope.defect_status)
            .fetch_all(db)
            .await
    }

    pub async fn list_defect_descriptions<'e, E>(
        &self,
        db: E,
        defect_type: &str,
    ) -> Result<Vec<String>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT DISTINCT descricao_defeito FROM {} \
             WHERE bloco = $1 AND status = $2 AND tipo_defeito = $3 \
             AND descricao_defeito IS NOT NULL \
             ORDER BY descricao_defeito",
            DEFECT_TABLE
        );
        sqlx::query_scalar::<_, String>(&query)
            .bind(&self.scope.defect_block)
            .bind(&self.scope.defect_status)
            .bind(defect_type)
            .fetch_all(db)
            .await
    }
}
