//! Python backend.
//!
//! Statements stay at module level, so the body is not indented. Keys are
//! passed as positional string arguments; the value is keyword-only.

use mapgen_ir::ResolvedPath;

use super::{key_list, single_quoted, Backend};

pub struct PythonBackend;

impl Backend for PythonBackend {
    fn input_var(&self) -> &'static str {
        "input_data"
    }

    fn result_var(&self) -> &'static str {
        "result"
    }

    fn read(&self, source: &ResolvedPath<'_>) -> String {
        format!(
            "get_nested_value({}, {})",
            self.input_var(),
            key_list(source, single_quoted)
        )
    }

    fn write(&self, target: &ResolvedPath<'_>, value: &str) -> String {
        format!(
            "set_nested_value({}, {}, value={value})",
            self.result_var(),
            key_list(target, single_quoted)
        )
    }

    fn declare(&self, container: &ResolvedPath<'_>) -> String {
        self.write(container, "{}")
    }

    fn preamble(&self) -> &'static str {
        PREAMBLE
    }

    fn postamble(&self) -> &'static str {
        POSTAMBLE
    }
}

const PREAMBLE: &str = r"import json
from typing import Any


def get_nested_value(data: Any, *keys: str) -> Any:
    current = data
    for key in keys:
        if isinstance(current, dict):
            current = current.get(key)
        elif isinstance(current, list):
            current = current[int(key)]
        else:
            return None
    return current


def set_nested_value(data: dict, *keys: str, value: Any) -> None:
    current = data
    for key in keys[:-1]:
        if key not in current:
            current[key] = {}
        current = current[key]
    current[keys[-1]] = value


with open('input.json', 'r') as f:
    input_data = json.load(f)

result = {}
";

const POSTAMBLE: &str = r"print(json.dumps(result, indent=2))
";
