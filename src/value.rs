//! SQL literal values and dialect-specific rendering.

use serde::{Deserialize, Serialize};

/// Target SQL dialect for string literal escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    MySql,
    Postgres,
    Sqlite,
    Mssql,
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "mssql" | "sqlserver" | "tsql" => Ok(Dialect::Mssql),
            _ => Err(format!(
                "Unknown dialect: {}. Use mysql, postgres, sqlite, or mssql",
                s
            )),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::MySql => write!(f, "mysql"),
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::Sqlite => write!(f, "sqlite"),
            Dialect::Mssql => write!(f, "mssql"),
        }
    }
}

/// A single literal in a VALUES list
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    /// Fixed two-decimal number (prices, ratings, GPAs, ...)
    Decimal(f64),
    String(String),
}

impl SqlValue {
    pub fn string(s: impl Into<String>) -> Self {
        SqlValue::String(s.into())
    }

    /// Render as a literal for the given dialect
    pub fn render(&self, dialect: Dialect) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Decimal(n) => format!("{:.2}", n),
            SqlValue::String(s) => match dialect {
                Dialect::MySql => format!("'{}'", escape_mysql_string(s)),
                Dialect::Postgres | Dialect::Sqlite => format!("'{}'", escape_quotes(s)),
                Dialect::Mssql => format!("N'{}'", escape_quotes(s)),
            },
        }
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Int(n)
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::String(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::String(s.to_string())
    }
}

fn escape_mysql_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn escape_quotes(s: &str) -> String {
    s.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_has_two_places() {
        assert_eq!(SqlValue::Decimal(5.5).render(Dialect::MySql), "5.50");
        assert_eq!(SqlValue::Decimal(499.999).render(Dialect::MySql), "500.00");
    }

    #[test]
    fn test_string_escaping_per_dialect() {
        let value = SqlValue::string("O'Hara");
        assert_eq!(value.render(Dialect::MySql), "'O\\'Hara'");
        assert_eq!(value.render(Dialect::Postgres), "'O''Hara'");
        assert_eq!(value.render(Dialect::Sqlite), "'O''Hara'");
        assert_eq!(value.render(Dialect::Mssql), "N'O''Hara'");
    }

    #[test]
    fn test_json_survives_quoting() {
        let value = SqlValue::string(r#"{"theme":"dark","lang":"en"}"#);
        assert_eq!(
            value.render(Dialect::Postgres),
            r#"'{"theme":"dark","lang":"en"}'"#
        );
    }

    #[test]
    fn test_dialect_parse() {
        assert_eq!("PG".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("sqlserver".parse::<Dialect>().unwrap(), Dialect::Mssql);
        assert!("oracle".parse::<Dialect>().is_err());
        assert_eq!(Dialect::default().to_string(), "mysql");
    }
}
