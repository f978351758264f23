//! Parsing of the schema statements the table layer emits.
//!
//! Only the three forms below are understood:
//!
//! ```text
//! CREATE TABLE [IF NOT EXISTS] <table>(<col> <type>, ..., PRIMARY KEY((<p>, ...), <c>, ...));
//! CREATE INDEX <name> ON <table>(<col>);
//! DROP TABLE [IF EXISTS] <table>;
//! ```

use crate::engine::{StorageError, StorageResult};

/// A parsed schema statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DdlCommand {
    CreateTable {
        name: String,
        if_not_exists: bool,
        columns: Vec<String>,
        partition_keys: Vec<String>,
        clustering_keys: Vec<String>,
    },
    CreateIndex {
        name: String,
        table: String,
        column: String,
    },
    DropTable {
        name: String,
        if_exists: bool,
    },
}

fn invalid(sql: &str, reason: &str) -> StorageError {
    StorageError::InvalidQuery(format!("{reason}: {sql}"))
}

/// Strip a case-insensitive keyword prefix, returning the trimmed rest.
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let head = input.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(input[keyword.len()..].trim_start())
    } else {
        None
    }
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = input[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

/// Split `name(body)` into `name` and `body`.
fn split_parenthesized<'a>(sql: &str, input: &'a str) -> StorageResult<(&'a str, &'a str)> {
    let open = input.find('(').ok_or_else(|| invalid(sql, "missing '('"))?;
    let close = input.rfind(')').ok_or_else(|| invalid(sql, "missing ')'"))?;
    if close < open {
        return Err(invalid(sql, "unbalanced parentheses"));
    }
    Ok((input[..open].trim(), &input[open + 1..close]))
}

fn parse_primary_key(sql: &str, spec: &str) -> StorageResult<(Vec<String>, Vec<String>)> {
    let spec = spec.trim();
    let inner = spec
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| invalid(sql, "malformed PRIMARY KEY"))?;
    let parts = split_top_level(inner);
    let Some((first, rest)) = parts.split_first() else {
        return Err(invalid(sql, "empty PRIMARY KEY"));
    };
    let partition_keys: Vec<String> = match first.strip_prefix('(') {
        Some(group) => {
            let group = group.strip_suffix(')').ok_or_else(|| invalid(sql, "malformed partition key"))?;
            split_top_level(group).into_iter().map(str::to_lowercase).collect()
        }
        None => vec![first.to_lowercase()],
    };
    if partition_keys.is_empty() {
        return Err(invalid(sql, "empty partition key"));
    }
    let clustering_keys = rest.iter().map(|c| c.to_lowercase()).collect();
    Ok((partition_keys, clustering_keys))
}

fn parse_create_table(sql: &str, rest: &str) -> StorageResult<DdlCommand> {
    let (if_not_exists, rest) = match strip_keyword(rest, "IF NOT EXISTS") {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let (name, body) = split_parenthesized(sql, rest)?;
    if name.is_empty() {
        return Err(invalid(sql, "missing table name"));
    }

    let mut columns = Vec::new();
    let mut primary_key = None;
    for part in split_top_level(body) {
        if let Some(spec) = strip_keyword(part, "PRIMARY KEY") {
            primary_key = Some(parse_primary_key(sql, spec)?);
        } else {
            let column = part
                .split_whitespace()
                .next()
                .ok_or_else(|| invalid(sql, "empty column definition"))?;
            columns.push(column.to_lowercase());
        }
    }
    let (partition_keys, clustering_keys) =
        primary_key.ok_or_else(|| invalid(sql, "missing PRIMARY KEY"))?;

    Ok(DdlCommand::CreateTable {
        name: name.to_lowercase(),
        if_not_exists,
        columns,
        partition_keys,
        clustering_keys,
    })
}

fn parse_create_index(sql: &str, rest: &str) -> StorageResult<DdlCommand> {
    let mut words = rest.splitn(2, char::is_whitespace);
    let name = words.next().filter(|n| !n.is_empty()).ok_or_else(|| invalid(sql, "missing index name"))?;
    let target = words
        .next()
        .and_then(|r| strip_keyword(r.trim_start(), "ON"))
        .ok_or_else(|| invalid(sql, "missing ON"))?;
    let (table, column) = split_parenthesized(sql, target)?;
    Ok(DdlCommand::CreateIndex {
        name: name.to_lowercase(),
        table: table.to_lowercase(),
        column: column.trim().to_lowercase(),
    })
}

/// Parse one schema statement.
pub(crate) fn parse(sql: &str) -> StorageResult<DdlCommand> {
    let statement = sql.trim().trim_end_matches(';').trim();

    if let Some(rest) = strip_keyword(statement, "CREATE TABLE") {
        parse_create_table(sql, rest)
    } else if let Some(rest) = strip_keyword(statement, "CREATE INDEX") {
        parse_create_index(sql, rest)
    } else if let Some(rest) = strip_keyword(statement, "DROP TABLE") {
        let (if_exists, name) = match strip_keyword(rest, "IF EXISTS") {
            Some(name) => (true, name),
            None => (false, rest),
        };
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(invalid(sql, "malformed table name"));
        }
        Ok(DdlCommand::DropTable { name: name.to_lowercase(), if_exists })
    } else {
        Err(invalid(sql, "unsupported statement"))
    }
}
