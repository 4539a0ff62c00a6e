//! Grammar profiles: the ordered lexical rule sets for each supported
//! source language.
//!
//! A profile is pure data. Each rule pairs an optional [`Category`] with an
//! anchored regex; rules are tried in order and the first one that matches
//! at the cursor wins, so the order below IS the disambiguation policy.
//! Keywords come before the generic identifier rule, multi-character
//! operators before their single-character prefixes, and comment rules
//! before the operator rule that would otherwise claim `/`. Reordering
//! rules changes the language.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::scanner::token::Category;

/// The closed set of supported source languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    CLike,
    PythonLike,
}

impl Language {
    /// The shared, lazily-built profile for this language. Profiles never
    /// mutate after construction and may be used from many threads at once.
    pub fn profile(self) -> &'static Profile {
        match self {
            Language::CLike => &C_LIKE,
            Language::PythonLike => &PYTHON_LIKE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::CLike => write!(f, "C-like"),
            Language::PythonLike => write!(f, "Python-like"),
        }
    }
}

/// One lexical rule: a category and the pattern that recognizes it.
/// `category = None` marks ignorable input, matched but never emitted.
pub struct Rule {
    category: Option<Category>,
    pattern: Regex,
}

impl Rule {
    fn emit(category: Category, pattern: &str) -> Self {
        Self::compile(Some(category), pattern)
    }

    fn skip(pattern: &str) -> Self {
        Self::compile(None, pattern)
    }

    fn compile(category: Option<Category>, pattern: &str) -> Self {
        let anchored = format!(r"\A(?:{pattern})");
        let pattern = Regex::new(&anchored).expect("profile pattern must compile");
        Self { category, pattern }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Match this rule against the start of `rest`. Anchored: a match
    /// elsewhere in `rest` does not count.
    pub(crate) fn match_at<'s>(&self, rest: &'s str) -> Option<&'s str> {
        self.pattern.find(rest).map(|m| m.as_str())
    }
}

/// An ordered rule list for one language. Order is fixed at construction.
pub struct Profile {
    language: Language,
    rules: Vec<Rule>,
}

impl Profile {
    fn new(language: Language, rules: Vec<Rule>) -> Self {
        Self { language, rules }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

static C_LIKE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::new(
        Language::CLike,
        vec![
            // Comments first so `//` and `/*` never lex as division.
            Rule::emit(Category::Comment, r"//.*"),
            Rule::emit(Category::Comment, r"/\*[\s\S]*?\*/"),
            Rule::emit(Category::PreprocessorDirective, r"#[a-zA-Z]+"),
            Rule::emit(Category::Comment, r"#.*"),
            // Header refinements beat the generic `<` operator and string rules.
            Rule::emit(Category::StandardHeader, r"<[a-zA-Z_][\w/.]*\.h>"),
            Rule::emit(Category::UserHeader, r#""[a-zA-Z_][\w/.]*\.h""#),
            Rule::emit(
                Category::Keyword,
                r"(?:if|else|while|return|for|break|continue|print)\b",
            ),
            Rule::emit(Category::Identifier, r"[a-zA-Z_]\w*"),
            Rule::emit(Category::Float, r"\d+\.\d+"),
            Rule::emit(Category::Integer, r"\d+"),
            Rule::emit(Category::Operator, r"==|!=|<=|>=|<|>|\+|-|\*|/|%|="),
            Rule::emit(Category::Delimiter, r"[{}()\[\];,]"),
            Rule::emit(Category::String, r#""[^"]*""#),
            Rule::emit(Category::String, r"'[^']*'"),
            Rule::skip(r"\s+"),
        ],
    )
});

static PYTHON_LIKE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::new(
        Language::PythonLike,
        vec![
            Rule::emit(Category::Comment, r"#.*"),
            // Triple-quoted strings may span lines; they must precede the
            // single-line string rule sharing the same quote characters.
            Rule::emit(Category::String, r#""""[\s\S]*?"""|'''[\s\S]*?'''"#),
            Rule::emit(Category::String, r#""[^"\n]*"|'[^'\n]*'"#),
            Rule::emit(
                Category::Keyword,
                r"(?:False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b",
            ),
            Rule::emit(
                Category::Operator,
                r"==|!=|<=|>=|&&|\|\||[+\-*/]?=|[+\-*/%]|<|>",
            ),
            Rule::emit(Category::Delimiter, r"[;,(){}\[\].:]"),
            Rule::emit(Category::Identifier, r"[a-zA-Z_][a-zA-Z_0-9]*"),
            Rule::emit(Category::Float, r"\d+\.\d+"),
            Rule::emit(Category::Integer, r"\d+"),
            Rule::skip(r"\s+"),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    /// Index of the first rule carrying `category`, panicking if absent.
    fn first_index(profile: &Profile, category: Category) -> usize {
        profile
            .rules()
            .iter()
            .position(|r| r.category() == Some(category))
            .unwrap_or_else(|| panic!("{} profile has no {category} rule", profile.language()))
    }

    #[test]
    fn c_like_priority_order_is_preserved() {
        let p = Language::CLike.profile();
        assert!(first_index(p, Category::Comment) < first_index(p, Category::Operator));
        assert!(first_index(p, Category::Keyword) < first_index(p, Category::Identifier));
        assert!(first_index(p, Category::Float) < first_index(p, Category::Integer));
        assert!(first_index(p, Category::StandardHeader) < first_index(p, Category::Operator));
        assert!(first_index(p, Category::UserHeader) < first_index(p, Category::String));
        assert!(
            first_index(p, Category::PreprocessorDirective) < first_index(p, Category::Identifier)
        );
    }

    #[test]
    fn python_like_priority_order_is_preserved() {
        let p = Language::PythonLike.profile();
        assert!(first_index(p, Category::Comment) < first_index(p, Category::Operator));
        assert!(first_index(p, Category::Keyword) < first_index(p, Category::Identifier));
        assert!(first_index(p, Category::Keyword) < first_index(p, Category::Operator));
        assert!(first_index(p, Category::Float) < first_index(p, Category::Integer));
        assert!(first_index(p, Category::String) < first_index(p, Category::Keyword));
    }

    #[test]
    fn profile_construction_is_deterministic() {
        let order = |p: &Profile| {
            p.rules()
                .iter()
                .map(|r| r.category())
                .collect::<Vec<_>>()
        };
        for language in [Language::CLike, Language::PythonLike] {
            assert_eq!(order(language.profile()), order(language.profile()));
        }
    }

    #[test]
    fn every_required_category_is_reachable() {
        let required = [
            Category::Keyword,
            Category::Identifier,
            Category::Integer,
            Category::Float,
            Category::Operator,
            Category::Delimiter,
            Category::Comment,
            Category::String,
        ];
        for language in [Language::CLike, Language::PythonLike] {
            let profile = language.profile();
            for category in required {
                assert!(
                    profile
                        .rules()
                        .iter()
                        .any(|r| r.category() == Some(category)),
                    "{language} profile is missing {category}"
                );
            }
        }
    }

    #[test]
    fn profiles_end_with_ignorable_whitespace() {
        for language in [Language::CLike, Language::PythonLike] {
            let rules = language.profile().rules();
            assert_eq!(rules.last().and_then(Rule::category), None);
        }
    }

    #[test]
    fn rule_match_is_anchored() {
        let p = Language::CLike.profile();
        let integer = &p.rules()[first_index(p, Category::Integer)];
        assert_eq!(integer.match_at("42abc"), Some("42"));
        assert_eq!(integer.match_at("abc42"), None);
    }

    #[test]
    fn shared_profile_is_send_and_sync() {
        fn assert_sync<T: Send + Sync>(_: &T) {}
        assert_sync(Language::CLike.profile());
    }
}
