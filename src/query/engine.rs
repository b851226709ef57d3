use crate::query::error::QueryError;
use log::{debug, info};
use polars::prelude::{DataFrame, IntoLazy};
use polars::sql::SQLContext;

/// An in-memory SQL engine over named Polars views.
///
/// Views are registered lazily; nothing is copied until a statement is collected.
pub struct QueryEngine {
    context: SQLContext,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self {
            context: SQLContext::new(),
        }
    }

    /// Registers `frame` under `name`, replacing any view already using that name.
    pub fn register(&mut self, name: &str, frame: DataFrame) {
        info!(
            "Registering view '{}' ({} rows, {} columns)",
            name,
            frame.height(),
            frame.width()
        );
        self.context.register(name, frame.lazy());
    }

    /// Runs one statement and collects its result.
    pub fn execute(&mut self, sql: &str) -> Result<DataFrame, QueryError> {
        debug!("Executing SQL: {}", sql);
        let to_error = |source| QueryError::Sql {
            sql: sql.to_string(),
            source,
        };
        let frame = self
            .context
            .execute(sql)
            .map_err(to_error)?
            .collect()
            .map_err(to_error)?;
        debug!("Statement returned shape {:?}", frame.shape());
        Ok(frame)
    }

    /// Registered view names, sorted.
    pub fn views(&self) -> Vec<String> {
        let mut views = self.context.get_tables();
        views.sort();
        views
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_register_and_query() -> Result<(), Box<dyn std::error::Error>> {
        let mut engine = QueryEngine::new();
        engine.register(
            "t",
            df!(
                "id" => [1, 2, 3],
                "name" => ["foo", "bar", "baz"],
            )?,
        );

        let res = engine.execute("SELECT name FROM t WHERE id > 1 ORDER BY id")?;
        let names: Vec<Option<&str>> = res.column("name")?.str()?.into_iter().collect();
        assert_eq!(names, vec![Some("bar"), Some("baz")]);
        assert_eq!(engine.views(), vec!["t".to_string()]);
        Ok(())
    }

    #[test]
    fn test_register_replaces_existing_view() -> Result<(), Box<dyn std::error::Error>> {
        let mut engine = QueryEngine::new();
        engine.register("t", df!("x" => [1.0, 2.0])?);
        engine.register("t", df!("x" => [7.0])?);

        let res = engine.execute("SELECT x FROM t")?;
        assert_eq!(res.height(), 1);
        assert_eq!(engine.views().len(), 1);
        Ok(())
    }

    #[test]
    fn test_malformed_sql_reports_statement() {
        let mut engine = QueryEngine::new();
        let err = engine.execute("SELEC nothing FROM nowhere").unwrap_err();
        match err {
            QueryError::Sql { sql, .. } => assert_eq!(sql, "SELEC nothing FROM nowhere"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_view_fails() {
        let mut engine = QueryEngine::new();
        assert!(engine.execute("SELECT * FROM missing").is_err());
    }
}
