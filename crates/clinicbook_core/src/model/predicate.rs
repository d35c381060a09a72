//! Filter predicates for person list views.

use crate::model::person::{Name, Person, Tag};

/// Value-typed predicate so that model equality can compare active filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonPredicate {
    /// Shows every person.
    #[default]
    All,
    /// Any keyword equals a whole word of the name, case-insensitively.
    NameContainsKeywords(Vec<String>),
    /// Person carries the given tag.
    HasTag(Tag),
    /// Person name equals the given name exactly.
    NameIs(Name),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(keywords) => {
                person.name().as_str().split_whitespace().any(|word| {
                    let word = word.to_lowercase();
                    keywords.iter().any(|keyword| keyword.to_lowercase() == word)
                })
            }
            Self::HasTag(tag) => person.tags().contains(tag),
            Self::NameIs(name) => person.name() == name,
        }
    }
}
