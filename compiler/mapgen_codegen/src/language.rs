//! Target language selection.

use std::fmt;

use crate::backend::{self, Backend};

/// A supported target language.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    #[default]
    Groovy,
    Java,
    Python,
    CSharp,
}

impl Language {
    /// Every language, in selector-listing order.
    pub const ALL: [Language; 6] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Groovy,
        Language::Java,
        Language::Python,
        Language::CSharp,
    ];

    /// Used for any selector that names no known language.
    pub const DEFAULT: Language = Language::Groovy;

    /// The selector string that names this language.
    pub fn selector(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Groovy => "groovy",
            Language::Java => "java",
            Language::Python => "python",
            Language::CSharp => "csharp",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Groovy => "Groovy",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::CSharp => "C#",
        }
    }

    /// Conventional file name for a generated program.
    ///
    /// Java and C# name the file after the public `Mapper` class.
    pub fn file_name(self) -> &'static str {
        match self {
            Language::JavaScript => "mapper.js",
            Language::TypeScript => "mapper.ts",
            Language::Groovy => "mapper.groovy",
            Language::Java => "Mapper.java",
            Language::Python => "mapper.py",
            Language::CSharp => "Mapper.cs",
        }
    }

    /// Exact, case-sensitive selector lookup.
    pub fn lookup(selector: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.selector() == selector)
    }

    /// Selector lookup with silent fallback to [`Language::DEFAULT`].
    pub fn from_selector(selector: &str) -> Language {
        Language::lookup(selector).unwrap_or(Language::DEFAULT)
    }

    /// The backend that emits this language.
    pub fn backend(self) -> &'static dyn Backend {
        match self {
            Language::JavaScript => &backend::script::JAVASCRIPT,
            Language::TypeScript => &backend::script::TYPESCRIPT,
            Language::Groovy => &backend::script::GROOVY,
            Language::Java => &backend::java::JavaBackend,
            Language::Python => &backend::python::PythonBackend,
            Language::CSharp => &backend::csharp::CSharpBackend,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
