//! JSON canónico: claves de mapas ordenadas lexicográficamente en cada nivel
//! de anidamiento; las secuencias conservan su orden original (el orden de los
//! pasos de landmark-processing es semántico y forma parte de la identidad).
//!
//! La forma canónica es la entrada del hash de identidad, por lo que no puede
//! contener elementos no deterministas: sin espacios, sin formato dependiente
//! de locale, sin identidad de objetos.

use serde_json::Value;
use std::collections::BTreeMap;

pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&serde_json::to_string(s).unwrap()),
        Value::Array(items) => {
            out.push('[');
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(v, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let ordered: BTreeMap<&String, &Value> = map.iter().collect();
            out.push('{');
            for (i, (k, v)) in ordered.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(k).unwrap());
                out.push(':');
                write_canonical(v, out);
            }
            out.push('}');
        }
    }
}
