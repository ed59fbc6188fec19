//! Identidad estable de una definición de flujo.
//!
//! El `definition_hash` se calcula con blake3 sobre la serialización canónica
//! (claves ordenadas, sin espacios) del contenido de los steps más la versión
//! del motor. Dos engines con las mismas pantallas en el mismo orden producen
//! el mismo hash sin importar el tipo concreto de step.

use serde_json::{json, Value};

use crate::constants::ENGINE_VERSION;
use crate::step::StepContent;

/// Serializa `value` con claves de objeto en orden lexicográfico.
pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key], out);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// Hash de la definición ordenada de steps.
pub fn definition_hash<S: StepContent>(steps: &[S]) -> String {
    let contents: Vec<Value> = steps.iter()
                                    .map(|s| {
                                        json!({
                                            "main_title": s.main_title(),
                                            "sub_title": s.sub_title(),
                                            "action_label": s.action_label(),
                                        })
                                    })
                                    .collect();
    let doc = json!({ "engine_version": ENGINE_VERSION, "steps": contents });
    hash_str(&to_canonical_json(&doc))
}
