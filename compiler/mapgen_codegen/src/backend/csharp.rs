//! C# backend.
//!
//! Uses `System.Text.Json`. Nested input values deserialize as `JsonElement`,
//! so `GetValue` walks both dictionaries and elements. Paths are passed as a
//! single dotted string.

use mapgen_ir::ResolvedPath;

use super::{double_quoted, Backend};

pub struct CSharpBackend;

impl Backend for CSharpBackend {
    fn input_var(&self) -> &'static str {
        "input"
    }

    fn result_var(&self) -> &'static str {
        "result"
    }

    fn read(&self, source: &ResolvedPath<'_>) -> String {
        format!(
            "GetValue({}, {})",
            self.input_var(),
            double_quoted(source.as_str())
        )
    }

    fn write(&self, target: &ResolvedPath<'_>, value: &str) -> String {
        format!(
            "SetValue({}, {}, {value});",
            self.result_var(),
            double_quoted(target.as_str())
        )
    }

    fn declare(&self, container: &ResolvedPath<'_>) -> String {
        self.write(container, "new Dictionary<string, object>()")
    }

    fn preamble(&self) -> &'static str {
        PREAMBLE
    }

    fn postamble(&self) -> &'static str {
        POSTAMBLE
    }

    fn body_indent(&self) -> usize {
        8
    }
}

const PREAMBLE: &str = r#"using System;
using System.Collections.Generic;
using System.IO;
using System.Text.Json;

public class Mapper
{
    public static void Main()
    {
        string json = File.ReadAllText("input.json");
        var input = JsonSerializer.Deserialize<Dictionary<string, object>>(json);
        var result = new Dictionary<string, object>();
"#;

const POSTAMBLE: &str = r#"        Console.WriteLine(JsonSerializer.Serialize(result, new JsonSerializerOptions { WriteIndented = true }));
    }

    private static object GetValue(Dictionary<string, object> dict, string path)
    {
        object current = dict;
        foreach (var part in path.Split('.'))
        {
            switch (current)
            {
                case Dictionary<string, object> d:
                    current = d.GetValueOrDefault(part);
                    break;
                case JsonElement { ValueKind: JsonValueKind.Object } obj:
                    current = obj.TryGetProperty(part, out var field) ? (object)field : null;
                    break;
                case JsonElement { ValueKind: JsonValueKind.Array } arr when int.TryParse(part, out var index):
                    current = arr[index];
                    break;
                default:
                    return null;
            }
        }
        return current;
    }

    private static void SetValue(Dictionary<string, object> result, string path, object value)
    {
        var parts = path.Split('.');
        var current = result;
        for (int i = 0; i < parts.Length - 1; i++)
        {
            if (!current.ContainsKey(parts[i]))
            {
                current[parts[i]] = new Dictionary<string, object>();
            }
            current = (Dictionary<string, object>)current[parts[i]];
        }
        current[parts[^1]] = value;
    }
}
"#;
