//! CSS-like selectors
//!
//! Supports the subset of selector syntax the page layer needs:
//!
//! - `tag`, `*`
//! - `#id`
//! - `.class`
//! - `[attr]`, `[attr=value]`, `[attr="value"]`
//! - compound selectors (`a.nav-link[href]`)
//! - comma-separated groups (`h2, p, .skill`)
//!
//! Descendant combinators are intentionally absent; scoped lookups go
//! through [`Document::query_within`](crate::Document::query_within).

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, value},
    error::{Error as NomError, ErrorKind},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded},
    IResult,
};
use smallvec::SmallVec;

use crate::dom::{Document, ElementId};
use crate::error::{Result, SelectorError};

/// A single selector component
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimpleSelector {
    /// `*`
    Universal,
    /// Element tag name, stored lowercase
    Tag(String),
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `[name]` or `[name=value]`
    Attr {
        /// Attribute name
        name: String,
        /// Required value, or `None` for a presence check
        value: Option<String>,
    },
}

impl SimpleSelector {
    /// Check whether `el` satisfies this component
    pub fn matches<D: Document + ?Sized>(&self, doc: &D, el: ElementId) -> bool {
        match self {
            SimpleSelector::Universal => true,
            SimpleSelector::Tag(tag) => doc
                .tag(el)
                .is_some_and(|actual| actual.eq_ignore_ascii_case(tag)),
            SimpleSelector::Id(id) => doc.attribute(el, "id").as_deref() == Some(id.as_str()),
            SimpleSelector::Class(class) => doc.has_class(el, class),
            SimpleSelector::Attr { name, value: None } => doc.attribute(el, name).is_some(),
            SimpleSelector::Attr {
                name,
                value: Some(expected),
            } => doc.attribute(el, name).as_deref() == Some(expected.as_str()),
        }
    }
}

/// Components that must all match the same element
type Compound = SmallVec<[SimpleSelector; 2]>;

/// A parsed selector: one or more comma-separated compound selectors
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    groups: Vec<Compound>,
}

impl Selector {
    /// Parse a selector string
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_core::Selector;
    ///
    /// let sel = Selector::parse("h2, p, .project-card").unwrap();
    /// assert_eq!(sel.group_count(), 3);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        match selector_list(trimmed) {
            Ok((rest, groups)) if rest.trim().is_empty() => Ok(Self { groups }),
            Ok((rest, _)) => Err(unexpected(trimmed, rest)),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(unexpected(trimmed, e.input)),
            Err(nom::Err::Incomplete(_)) => Err(unexpected(trimmed, "")),
        }
    }

    /// Selector matching a single id
    pub fn id(id: impl Into<String>) -> Self {
        Self::single(SimpleSelector::Id(id.into()))
    }

    /// Selector matching a single class
    pub fn class(class: impl Into<String>) -> Self {
        Self::single(SimpleSelector::Class(class.into()))
    }

    /// Selector matching a tag name
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::single(SimpleSelector::Tag(tag.into().to_ascii_lowercase()))
    }

    fn single(simple: SimpleSelector) -> Self {
        let mut compound = Compound::new();
        compound.push(simple);
        Self {
            groups: vec![compound],
        }
    }

    /// Combine with `other` into a selector matching either
    pub fn or(mut self, other: Selector) -> Self {
        self.groups.extend(other.groups);
        self
    }

    /// Number of comma-separated groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Check whether `el` matches any group
    pub fn matches<D: Document + ?Sized>(&self, doc: &D, el: ElementId) -> bool {
        self.groups
            .iter()
            .any(|compound| compound.iter().all(|simple| simple.matches(doc, el)))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            for simple in compound {
                match simple {
                    SimpleSelector::Universal => f.write_str("*")?,
                    SimpleSelector::Tag(tag) => f.write_str(tag)?,
                    SimpleSelector::Id(id) => write!(f, "#{id}")?,
                    SimpleSelector::Class(class) => write!(f, ".{class}")?,
                    SimpleSelector::Attr { name, value: None } => write!(f, "[{name}]")?,
                    SimpleSelector::Attr {
                        name,
                        value: Some(v),
                    } => write!(f, "[{name}=\"{v}\"]")?,
                }
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn unexpected(selector: &str, rest: &str) -> SelectorError {
    let rest = rest.trim_start();
    let column = selector.len() - rest.len() + 1;
    let found: String = rest.chars().take(12).collect();
    SelectorError::Unexpected {
        selector: selector.to_string(),
        column,
        found,
    }
}

// =============================================================================
// Parsers
// =============================================================================

/// Identifier: alphanumeric, hyphen, underscore
fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn tag_selector(input: &str) -> IResult<&str, SimpleSelector> {
    alt((
        value(SimpleSelector::Universal, char('*')),
        map(identifier, |tag: &str| {
            SimpleSelector::Tag(tag.to_ascii_lowercase())
        }),
    ))(input)
}

fn id_selector(input: &str) -> IResult<&str, SimpleSelector> {
    map(preceded(char('#'), identifier), |id: &str| {
        SimpleSelector::Id(id.to_string())
    })(input)
}

fn class_selector(input: &str) -> IResult<&str, SimpleSelector> {
    map(preceded(char('.'), identifier), |class: &str| {
        SimpleSelector::Class(class.to_string())
    })(input)
}

fn attr_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_until("\""), char('"')),
        delimited(char('\''), take_until("'"), char('\'')),
        identifier,
    ))(input)
}

fn attr_selector(input: &str) -> IResult<&str, SimpleSelector> {
    let (input, _) = char('[')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, name) = identifier(input)?;
    let (input, _) = multispace0(input)?;
    let (input, expected) = opt(preceded(pair(char('='), multispace0), attr_value))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(']')(input)?;

    Ok((
        input,
        SimpleSelector::Attr {
            name: name.to_string(),
            value: expected.map(str::to_string),
        },
    ))
}

fn compound(input: &str) -> IResult<&str, Compound> {
    let (input, head) = opt(tag_selector)(input)?;
    let (input, rest) = many0(alt((id_selector, class_selector, attr_selector)))(input)?;

    if head.is_none() && rest.is_empty() {
        return Err(nom::Err::Error(NomError::new(input, ErrorKind::Many1)));
    }

    let mut compound = Compound::new();
    compound.extend(head);
    compound.extend(rest);
    Ok((input, compound))
}

fn selector_list(input: &str) -> IResult<&str, Vec<Compound>> {
    separated_list1(delimited(multispace0, char(','), multispace0), compound)(input)
}
