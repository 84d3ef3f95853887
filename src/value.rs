use indexmap::IndexMap;

/// Keyed members of an object, kept in first-insertion order.
pub type Map = IndexMap<String, Value>;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(n) => Some(n as f64),
            Value::Float(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(key)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List(vec![])
    };
    ( $( $x:expr ), * $(,)?) => {
        {
            let mut v: Vec<$crate::Value> = vec![];
            $(
                v.push($crate::Value::from($x));
            )*
            $crate::Value::List(v)
        }
    };
}

#[macro_export]
macro_rules! map {
    () => {
        $crate::Value::Map($crate::Map::new())
    };
    ( $( $k:expr => $v:expr ), * $(,)?) => {
        {
            let mut m = $crate::Map::new();
            $(
                m.insert($k.to_string(), $crate::Value::from($v));
            )*
            $crate::Value::Map(m)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn accessors() {
        let value = crate::map! {
            "name" => "rust",
            "year" => 2015i64,
            "ratio" => 0.5,
            "tags" => crate::list!["a", "b"],
            "none" => Value::Null
        };

        assert_eq!(value.get("name").and_then(Value::as_str), Some("rust"));
        assert_eq!(value.get("year").and_then(Value::as_i64), Some(2015));
        assert_eq!(value.get("year").and_then(Value::as_f64), Some(2015.0));
        assert_eq!(value.get("ratio").and_then(Value::as_f64), Some(0.5));
        assert_eq!(value.get("ratio").and_then(Value::as_i64), None);
        assert_eq!(
            value.get("tags").and_then(Value::as_list).map(|v| v.len()),
            Some(2)
        );
        assert_eq!(value.get("none").map(Value::is_null), Some(true));
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::Bool(true).get("name"), None);
    }

    #[test]
    fn map_keeps_insertion_order() {
        let value = crate::map! { "z" => 1i64, "a" => 2i64, "m" => 3i64 };
        let keys: Vec<&str> = value
            .as_map()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn empty_macros() {
        assert_eq!(crate::list![], Value::List(vec![]));
        assert_eq!(crate::map! {}, Value::Map(crate::Map::new()));
    }
}
