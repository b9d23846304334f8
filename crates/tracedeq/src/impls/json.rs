//! JSON values.
//!
//! [`Value`] is a dynamically typed slot: `Null` holds no value and every other
//! variant unwraps to its payload, so `json!(1)` against `json!("1")` is a type
//! mismatch one level down, just as for any other dynamic slot.

use serde_json::{Map, Number, Value};

use crate::outcome::Scalar;
use crate::reflect::{Associative, Key, Reflect, Shape};

impl Reflect for Value {
    fn shape(&self) -> Shape<'_> {
        let inner: Option<&dyn Reflect> = match self {
            Value::Null => None,
            Value::Bool(v) => Some(v),
            Value::Number(v) => Some(v),
            Value::String(v) => Some(v),
            Value::Array(v) => Some(v),
            Value::Object(v) => Some(v),
        };
        Shape::Optional(inner)
    }
}

/// Non-negative integers are unsigned, negative ones signed, everything else
/// a float; `1` and `1.0` therefore differ, as they do for `Number`'s own `==`.
impl Reflect for Number {
    fn shape(&self) -> Shape<'_> {
        let scalar = if let Some(v) = self.as_u64() {
            Scalar::Uint(v.into())
        } else if let Some(v) = self.as_i64() {
            Scalar::Int(v.into())
        } else {
            Scalar::Float(self.as_f64().unwrap_or(f64::NAN))
        };
        Shape::Scalar(scalar)
    }
}

impl Associative for Map<String, Value> {
    fn len(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Vec<(&dyn Key, &dyn Reflect)> {
        self.iter()
            .map(|(k, v)| (k as &dyn Key, v as &dyn Reflect))
            .collect()
    }

    fn lookup(&self, key: &dyn Key) -> Option<&dyn Reflect> {
        let key = key.as_any().downcast_ref::<String>()?;
        self.get(key.as_str()).map(|v| v as &dyn Reflect)
    }
}

impl Reflect for Map<String, Value> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self)
    }
}
