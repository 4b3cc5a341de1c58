//! Java backend.
//!
//! Documents are `Map<String, Object>` trees loaded with Jackson. Paths are
//! passed to the helpers as `String[]` key arrays; `getValue` parses index
//! keys when it meets a `List`.

use mapgen_ir::ResolvedPath;

use super::{double_quoted, key_list, Backend};

pub struct JavaBackend;

impl JavaBackend {
    fn keys(path: &ResolvedPath<'_>) -> String {
        format!("new String[] {{ {} }}", key_list(path, double_quoted))
    }
}

impl Backend for JavaBackend {
    fn input_var(&self) -> &'static str {
        "input"
    }

    fn result_var(&self) -> &'static str {
        "result"
    }

    fn read(&self, source: &ResolvedPath<'_>) -> String {
        format!("getValue({}, {})", self.input_var(), Self::keys(source))
    }

    fn write(&self, target: &ResolvedPath<'_>, value: &str) -> String {
        format!(
            "setValue({}, {}, {value});",
            self.result_var(),
            Self::keys(target)
        )
    }

    fn declare(&self, container: &ResolvedPath<'_>) -> String {
        format!(
            "createNestedMap({}, {});",
            self.result_var(),
            Self::keys(container)
        )
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

const PREAMBLE: &str = r#"import com.fasterxml.jackson.databind.ObjectMapper;
import java.io.File;
import java.util.*;

public class Mapper {
    @SuppressWarnings("unchecked")
    public static void main(String[] args) throws Exception {
        ObjectMapper mapper = new ObjectMapper();
        Map<String, Object> input = mapper.readValue(new File("input.json"), Map.class);
        Map<String, Object> result = new LinkedHashMap<>();
"#;

const POSTAMBLE: &str = r#"        System.out.println(mapper.writerWithDefaultPrettyPrinter().writeValueAsString(result));
    }

    private static Object getValue(Map<String, Object> map, String[] keys) {
        Object current = map;
        for (String key : keys) {
            if (current instanceof Map) {
                current = ((Map<?, ?>) current).get(key);
            } else if (current instanceof List) {
                current = ((List<?>) current).get(Integer.parseInt(key));
            } else {
                return null;
            }
        }
        return current;
    }

    @SuppressWarnings("unchecked")
    private static Map<String, Object> createNestedMap(Map<String, Object> result, String[] keys) {
        Map<String, Object> current = result;
        for (String key : keys) {
            if (!current.containsKey(key)) {
                current.put(key, new LinkedHashMap<String, Object>());
            }
            current = (Map<String, Object>) current.get(key);
        }
        return current;
    }

    private static void setValue(Map<String, Object> result, String[] keys, Object value) {
        Map<String, Object> parent = createNestedMap(result, Arrays.copyOf(keys, keys.length - 1));
        parent.put(keys[keys.length - 1], value);
    }
}
"#;
