// Validation rules for books, ordered as: null, id, name, existence.
//
// Purpose
// - Decide whether a candidate may be saved or updated, without touching the store.
//
// Responsibilities
// - Expose each rule as a plain function returning the failure it detects.
// - Assemble the rules into the save and update chains.
// - Turn the verdict into a `Validation` that keeps the candidate on rejection.
//
// Boundaries
// - The existence lookup is performed by the caller and handed in through `BookCandidate`.

use crate::modules::books::core::book::{Book, UncheckedBook, is_blank};
use crate::modules::books::core::failure::BookFailure;
use crate::shared::core::rule_chain::RuleChain;

pub fn is_null(candidate: Option<&UncheckedBook>) -> Option<BookFailure> {
    candidate.is_none().then_some(BookFailure::Null)
}

pub fn is_valid_id(id: Option<&str>) -> Option<BookFailure> {
    is_blank(id).then_some(BookFailure::IdBlank)
}

pub fn is_valid_name(name: Option<&str>) -> Option<BookFailure> {
    is_blank(name).then_some(BookFailure::NameBlank)
}

/// What the rules look at: the candidate plus whether its id is already stored.
#[derive(Debug, Clone, Copy)]
pub struct BookCandidate<'a> {
    pub book: Option<&'a UncheckedBook>,
    pub exists: bool,
}

impl<'a> BookCandidate<'a> {
    pub fn new(book: Option<&'a UncheckedBook>, exists: bool) -> Self {
        Self { book, exists }
    }

    fn id(&self) -> Option<&'a str> {
        self.book.and_then(|book| book.id.as_deref())
    }

    fn name(&self) -> Option<&'a str> {
        self.book.and_then(|book| book.name.as_deref())
    }
}

pub type BookRules<'a> = RuleChain<BookCandidate<'a>, BookFailure>;

fn common_rules<'a>() -> BookRules<'a> {
    let rules: BookRules<'a> = RuleChain::new();
    rules
        .rule("null", |candidate| is_null(candidate.book))
        .rule("id", |candidate| is_valid_id(candidate.id()))
        .rule("name", |candidate| is_valid_name(candidate.name()))
}

pub fn save_rules<'a>() -> BookRules<'a> {
    common_rules().rule("unique", |candidate| {
        candidate.exists.then_some(BookFailure::AlreadyExists)
    })
}

pub fn update_rules<'a>() -> BookRules<'a> {
    common_rules().rule("exists", |candidate| {
        (!candidate.exists).then_some(BookFailure::NotFound)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Save,
    Update,
}

impl Purpose {
    pub fn rules<'a>(self) -> BookRules<'a> {
        match self {
            Self::Save => save_rules(),
            Self::Update => update_rules(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(Book),
    Invalid {
        candidate: Option<UncheckedBook>,
        reason: BookFailure,
    },
}

impl Validation {
    /// Runs the rules for `purpose` over `candidate` and keeps the candidate if it is refused.
    pub fn check(purpose: Purpose, candidate: Option<UncheckedBook>, exists: bool) -> Self {
        let subject = BookCandidate::new(candidate.as_ref(), exists);
        let verdict = match purpose.rules().first_failure(&subject) {
            Some((rule, reason)) => {
                tracing::debug!(?purpose, rule, kind = reason.kind(), "book rejected by validation rule");
                Err(reason)
            }
            None => candidate
                .as_ref()
                .ok_or(BookFailure::Null)
                .and_then(Book::try_from),
        };
        match verdict {
            Ok(book) => Self::Valid(book),
            Err(reason) => Self::Invalid { candidate, reason },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}
