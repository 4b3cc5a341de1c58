//! Script backends: JavaScript, TypeScript and Groovy.
//!
//! All three read and write through member access and declare containers by
//! assigning an empty map literal. They differ only in the literal, the
//! statement terminator and the boilerplate.

use mapgen_ir::ResolvedPath;

use super::{member_access, Backend};

/// A backend with literal map syntax.
pub struct ScriptBackend {
    /// Empty map literal, e.g. `{}` or `[:]`.
    empty_map: &'static str,
    /// Appended to every statement.
    terminator: &'static str,
    preamble: &'static str,
    postamble: &'static str,
}

impl Backend for ScriptBackend {
    fn input_var(&self) -> &'static str {
        "input"
    }

    fn result_var(&self) -> &'static str {
        "result"
    }

    fn read(&self, source: &ResolvedPath<'_>) -> String {
        member_access(self.input_var(), source)
    }

    fn write(&self, target: &ResolvedPath<'_>, value: &str) -> String {
        format!(
            "{} = {value}{}",
            member_access(self.result_var(), target),
            self.terminator
        )
    }

    fn declare(&self, container: &ResolvedPath<'_>) -> String {
        self.write(container, self.empty_map)
    }

    fn preamble(&self) -> &'static str {
        self.preamble
    }

    fn postamble(&self) -> &'static str {
        self.postamble
    }
}

pub static JAVASCRIPT: ScriptBackend = ScriptBackend {
    empty_map: "{}",
    terminator: ";",
    preamble: "\
const input = require('./input.json');
const result = {};
",
    postamble: "\
console.log(JSON.stringify(result, null, 2));
",
};

pub static TYPESCRIPT: ScriptBackend = ScriptBackend {
    empty_map: "{}",
    terminator: ";",
    preamble: "\
interface Input {
    [key: string]: any;
}

interface Result {
    [key: string]: any;
}

const input: Input = require('./input.json');
const result: Result = {};
",
    postamble: "\
console.log(JSON.stringify(result, null, 2));
",
};

pub static GROOVY: ScriptBackend = ScriptBackend {
    empty_map: "[:]",
    terminator: "",
    preamble: "\
import groovy.json.JsonOutput
import groovy.json.JsonSlurper

def jsonSlurper = new JsonSlurper()
def input = jsonSlurper.parse(new File('input.json'))
def result = [:]
",
    postamble: "\
println JsonOutput.prettyPrint(JsonOutput.toJson(result))
",
};
