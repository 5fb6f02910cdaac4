//! Dotted-key helpers over TOML value trees.
//!
//! Used by config loading (environment overrides) and by the `config get` /
//! `config set` CLI commands.

use crate::{Error, Result};

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    if key.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };

    let mut current = root;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(leaf.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool → integer → float → string.
pub fn parse_value(s: &str) -> toml::Value {
    if s == "true" {
        return toml::Value::Boolean(true);
    }
    if s == "false" {
        return toml::Value::Boolean(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

/// Flatten a TOML tree into `(dotted.key, value)` leaves, in table order.
///
/// Arrays are treated as leaves.
pub fn leaf_keys(value: &toml::Value) -> Vec<(String, &toml::Value)> {
    let mut out = Vec::new();
    collect_leaves(value, String::new(), &mut out);
    out
}

fn collect_leaves<'a>(
    value: &'a toml::Value,
    prefix: String,
    out: &mut Vec<(String, &'a toml::Value)>,
) {
    match value.as_table() {
        Some(table) => {
            for (key, child) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaves(child, path, out);
            }
        }
        None => out.push((prefix, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // get_nested_value
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value_top_level() {
        let val: toml::Value = toml::from_str("port = 8080").unwrap();
        assert_eq!(
            get_nested_value(&val, "port"),
            Some(&toml::Value::Integer(8080))
        );
    }

    #[test]
    fn test_get_nested_value_nested() {
        let val: toml::Value = toml::from_str("[server]\nport = 3000").unwrap();
        assert_eq!(
            get_nested_value(&val, "server.port"),
            Some(&toml::Value::Integer(3000))
        );
    }

    #[test]
    fn test_get_nested_value_missing() {
        let val: toml::Value = toml::from_str("[server]\nport = 3000").unwrap();
        assert!(get_nested_value(&val, "nonexistent").is_none());
        assert!(get_nested_value(&val, "server.nonexistent").is_none());
        assert!(get_nested_value(&val, "server.port.deeper").is_none());
    }

    // ------------------------------------------------------------------------
    // set_nested_value
    // ------------------------------------------------------------------------

    #[test]
    fn test_set_nested_value_top_level() {
        let mut val: toml::Value = toml::from_str("port = 8080").unwrap();
        set_nested_value(&mut val, "port", toml::Value::Integer(9090)).unwrap();
        assert_eq!(
            get_nested_value(&val, "port"),
            Some(&toml::Value::Integer(9090))
        );
    }

    #[test]
    fn test_set_nested_value_creates_section() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "server.port", toml::Value::Integer(3000)).unwrap();
        assert_eq!(
            get_nested_value(&val, "server.port"),
            Some(&toml::Value::Integer(3000))
        );
    }

    #[test]
    fn test_set_nested_value_through_non_table_fails() {
        let mut val: toml::Value = toml::from_str("port = 8080").unwrap();
        let result = set_nested_value(&mut val, "port.inner", toml::Value::Integer(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_set_nested_value_empty_key() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        assert!(set_nested_value(&mut val, "", toml::Value::Integer(1)).is_err());
    }

    // ------------------------------------------------------------------------
    // parse_value / format_toml_value
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("false"), toml::Value::Boolean(false));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("-7"), toml::Value::Integer(-7));
        assert_eq!(parse_value("2.5"), toml::Value::Float(2.5));
        assert_eq!(
            parse_value("127.0.0.1"),
            toml::Value::String("127.0.0.1".to_string())
        );
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(
            format_toml_value(&toml::Value::String("public".into())),
            "public"
        );
        assert_eq!(format_toml_value(&toml::Value::Integer(3000)), "3000");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }

    // ------------------------------------------------------------------------
    // leaf_keys
    // ------------------------------------------------------------------------

    #[test]
    fn test_leaf_keys() {
        let val: toml::Value =
            toml::from_str("name = \"x\"\n[server]\nhost = \"h\"\nport = 1").unwrap();
        let keys: Vec<String> = leaf_keys(&val).into_iter().map(|(k, _)| k).collect();
        assert!(keys.contains(&"name".to_string()));
        assert!(keys.contains(&"server.host".to_string()));
        assert!(keys.contains(&"server.port".to_string()));
        assert_eq!(keys.len(), 3);
    }
}
