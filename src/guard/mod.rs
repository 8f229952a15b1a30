//! Allow-list gate between SQL generation and execution: only a single
//! SELECT statement may reach the database.

use sqlparser::ast::Statement;
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::{ Parser, ParserError };
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("the model returned no SQL")]
    Empty,
    #[error("generated SQL does not parse: {0}")]
    Syntax(#[from] ParserError),
    #[error("expected a single statement, got {0}")]
    MultipleStatements(usize),
    #[error("only SELECT statements may be executed, got {0}")]
    NotReadOnly(String),
}

/// Strips markdown fences and blank lines from raw model output.
pub fn extract_sql(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with("```") && !line.trim().is_empty())
        .collect::<Vec<&str>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Returns the cleaned SQL only if the model output is exactly one statement
/// and that statement is a SELECT.
pub fn ensure_read_only(raw: &str) -> Result<String, GuardError> {
    let sql = extract_sql(raw);
    if sql.is_empty() {
        return Err(GuardError::Empty);
    }

    let statements = Parser::parse_sql(&MySqlDialect {}, &sql)?;
    match statements.as_slice() {
        [] => Err(GuardError::Empty),
        [Statement::Query(_)] => Ok(sql),
        [_other] => {
            let keyword = sql
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_ascii_uppercase();
            Err(GuardError::NotReadOnly(keyword))
        }
        many => Err(GuardError::MultipleStatements(many.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bare_select() {
        let sql = "SELECT ProductName, UnitPrice FROM Products;";
        assert_eq!(ensure_read_only(sql).unwrap(), sql);
    }

    #[test]
    fn test_accepts_lowercase_select() {
        assert!(ensure_read_only("select * from orders").is_ok());
    }

    #[test]
    fn test_strips_markdown_fences() {
        let raw = "```sql\nSELECT id FROM users;\n```";
        assert_eq!(ensure_read_only(raw).unwrap(), "SELECT id FROM users;");
    }

    #[test]
    fn test_rejects_insert() {
        let err = ensure_read_only("INSERT INTO users (name) VALUES ('x')").unwrap_err();
        assert!(matches!(err, GuardError::NotReadOnly(ref kw) if kw == "INSERT"));
    }

    #[test]
    fn test_rejects_drop() {
        let err = ensure_read_only("DROP TABLE users").unwrap_err();
        assert!(matches!(err, GuardError::NotReadOnly(ref kw) if kw == "DROP"));
    }

    #[test]
    fn test_rejects_update() {
        let err = ensure_read_only("UPDATE users SET name = 'x'").unwrap_err();
        assert!(matches!(err, GuardError::NotReadOnly(ref kw) if kw == "UPDATE"));
    }

    #[test]
    fn test_rejects_multiple_statements() {
        let err = ensure_read_only("SELECT 1; DROP TABLE users").unwrap_err();
        assert!(matches!(err, GuardError::MultipleStatements(2)));
    }

    #[test]
    fn test_rejects_prose() {
        assert!(matches!(
            ensure_read_only("I cannot answer that question."),
            Err(GuardError::Syntax(_))
        ));
    }

    #[test]
    fn test_rejects_empty_output() {
        assert!(matches!(ensure_read_only(""), Err(GuardError::Empty)));
        assert!(matches!(ensure_read_only("```\n```"), Err(GuardError::Empty)));
        assert!(matches!(ensure_read_only("   \n  "), Err(GuardError::Empty)));
    }
}
