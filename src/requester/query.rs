use serde_json::{Map, Value};

/// Query pairs; a key may repeat (`locations=MSK&locations=SPB`)
pub type QueryPairs = Vec<(String, String)>;

/// Anything a client method accepts as query parameters
pub trait IntoQuery {
    fn into_query(self) -> QueryPairs;
}

impl IntoQuery for QueryPairs {
    fn into_query(self) -> QueryPairs {
        self
    }
}

impl IntoQuery for &[(&str, &str)] {
    fn into_query(self) -> QueryPairs {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl IntoQuery for Map<String, Value> {
    fn into_query(self) -> QueryPairs {
        let mut pairs = Vec::new();
        for (key, value) in self {
            push_value(&mut pairs, &key, value);
        }
        pairs
    }
}

/// Objects expand to pairs; any other value yields no parameters
impl IntoQuery for Value {
    fn into_query(self) -> QueryPairs {
        match self {
            Value::Object(map) => map.into_query(),
            _ => Vec::new(),
        }
    }
}

fn push_value(pairs: &mut QueryPairs, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                push_value(pairs, key, item);
            }
        }
        Value::String(s) => pairs.push((key.to_string(), s)),
        other => pairs.push((key.to_string(), other.to_string())),
    }
}
