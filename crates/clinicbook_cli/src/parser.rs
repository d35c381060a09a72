//! Text command parser.
//!
//! # Responsibility
//! - Turn one input line into a validated `Command`.
//! - Report syntax and field-format problems before the model is touched.
//!
//! Syntax: `<word> [preamble] [n/NAME] [p/PHONE] [t/TAG]...`, where a prefix
//! only counts when it starts a whitespace-separated token.

use clinicbook_core::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, EditPersonDescriptor,
    FindCommand, Index, ListCommand, Name, Person, PersonKind, PersonPredicate,
    PersonValidationError, Phone, Tag,
};
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PREFIX_NAME: &str = "n/";
const PREFIX_PHONE: &str = "p/";
const PREFIX_TAG: &str = "t/";
const PERSON_PREFIXES: [&str; 3] = [PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG];

const ADD_USAGE: &str = "add-<patient|doctor> n/NAME p/PHONE [t/TAG]...";
const EDIT_USAGE: &str = "edit-<patient|doctor> INDEX [n/NAME] [p/PHONE] [t/TAG]...";
const DELETE_USAGE: &str = "delete-<patient|doctor> INDEX";
const FIND_USAGE: &str = "find-<patient|doctor> KEYWORD [MORE_KEYWORDS]...";

/// One usage line per command word, shown when help is requested.
pub const COMMAND_USAGES: [&str; 8] = [
    ADD_USAGE,
    EDIT_USAGE,
    DELETE_USAGE,
    FIND_USAGE,
    "list-<patient|doctor>",
    "clear-<patient|doctor>",
    "help",
    "exit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    InvalidFormat(&'static str),
    InvalidIndex(String),
    InvalidValue(PersonValidationError),
    NoFieldEdited,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no command entered; type `help` for usage"),
            Self::UnknownCommand(word) => write!(f, "unknown command `{word}`"),
            Self::InvalidFormat(usage) => write!(f, "invalid command format, usage: {usage}"),
            Self::InvalidIndex(raw) => write!(f, "index must be a positive integer, got `{raw}`"),
            Self::InvalidValue(err) => write!(f, "{err}"),
            Self::NoFieldEdited => write!(f, "at least one field to edit must be provided"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersonValidationError> for ParseError {
    fn from(value: PersonValidationError) -> Self {
        Self::InvalidValue(value)
    }
}

/// Parses one line of user input.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    match word {
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => parse_person_command(word, args),
    }
}

fn parse_person_command(word: &str, args: &str) -> Result<Command, ParseError> {
    let unknown = || ParseError::UnknownCommand(word.to_string());
    let (action, noun) = word.split_once('-').ok_or_else(unknown)?;
    let kind = match noun {
        "patient" => PersonKind::Patient,
        "doctor" => PersonKind::Doctor,
        _ => return Err(unknown()),
    };

    match action {
        "add" => parse_add(kind, args),
        "edit" => parse_edit(kind, args),
        "delete" => parse_index(args.trim(), DELETE_USAGE)
            .map(|index| Command::Delete(DeleteCommand::new(kind, index))),
        "find" => parse_find(kind, args),
        "list" => Ok(Command::List(ListCommand::new(kind))),
        "clear" => Ok(Command::Clear(ClearCommand::new(kind))),
        _ => Err(unknown()),
    }
}

fn parse_add(kind: PersonKind, args: &str) -> Result<Command, ParseError> {
    let map = ArgumentMap::tokenize(args, &PERSON_PREFIXES);
    if !map.preamble.is_empty() {
        return Err(ParseError::InvalidFormat(ADD_USAGE));
    }
    let (Some(name), Some(phone)) = (map.last(PREFIX_NAME), map.last(PREFIX_PHONE)) else {
        return Err(ParseError::InvalidFormat(ADD_USAGE));
    };

    let name = Name::new(name)?;
    let phone = Phone::new(phone)?;
    let tags = parse_tag_values(map.all(PREFIX_TAG))?;
    let person = match kind {
        PersonKind::Patient => Person::patient(name, phone, tags),
        PersonKind::Doctor => Person::doctor(name, phone, tags),
    };
    Ok(Command::Add(AddCommand::new(person)))
}

fn parse_edit(kind: PersonKind, args: &str) -> Result<Command, ParseError> {
    let map = ArgumentMap::tokenize(args, &PERSON_PREFIXES);
    let index = parse_index(&map.preamble, EDIT_USAGE)?;

    let mut descriptor = EditPersonDescriptor::default();
    if let Some(name) = map.last(PREFIX_NAME) {
        descriptor.name = Some(Name::new(name)?);
    }
    if let Some(phone) = map.last(PREFIX_PHONE) {
        descriptor.phone = Some(Phone::new(phone)?);
    }
    let tag_values = map.all(PREFIX_TAG);
    if !tag_values.is_empty() {
        // A lone empty `t/` clears all tags.
        descriptor.tags = if tag_values.len() == 1 && tag_values[0].is_empty() {
            Some(BTreeSet::new())
        } else {
            Some(parse_tag_values(tag_values)?)
        };
    }

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::Edit(EditCommand::new(kind, index, descriptor)))
}

fn parse_find(kind: PersonKind, args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(FIND_USAGE));
    }
    Ok(Command::Find(FindCommand::new(
        kind,
        PersonPredicate::NameContainsKeywords(keywords),
    )))
}

fn parse_index(raw: &str, usage: &'static str) -> Result<Index, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::InvalidFormat(usage));
    }
    raw.parse::<usize>()
        .ok()
        .and_then(|value| Index::from_one_based(value).ok())
        .ok_or_else(|| ParseError::InvalidIndex(raw.to_string()))
}

fn parse_tag_values(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values
        .iter()
        .map(|value| Tag::new(value).map_err(ParseError::from))
        .collect()
}

/// Prefixed argument values split out of one argument string.
#[derive(Debug)]
struct ArgumentMap {
    preamble: String,
    values: HashMap<&'static str, Vec<String>>,
}

impl ArgumentMap {
    fn tokenize(args: &str, prefixes: &[&'static str]) -> Self {
        let padded = format!(" {args}");
        let mut starts: Vec<(usize, &'static str)> = Vec::new();
        for prefix in prefixes {
            let pattern = format!(" {prefix}");
            starts.extend(
                padded
                    .match_indices(pattern.as_str())
                    .map(|(position, _)| (position + 1, *prefix)),
            );
        }
        starts.sort_unstable_by_key(|(position, _)| *position);

        let preamble_end = starts.first().map_or(padded.len(), |(position, _)| *position);
        let mut map = Self {
            preamble: padded[..preamble_end].trim().to_string(),
            values: HashMap::new(),
        };
        for (idx, (position, prefix)) in starts.iter().enumerate() {
            let value_end = starts
                .get(idx + 1)
                .map_or(padded.len(), |(next_position, _)| *next_position);
            let value = padded[position + prefix.len()..value_end].trim().to_string();
            map.values.entry(*prefix).or_default().push(value);
        }
        map
    }

    fn last(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    fn all(&self, prefix: &str) -> &[String] {
        self.values
            .get(prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, ParseError, COMMAND_USAGES};
    use clinicbook_core::{
        Command, DeleteCommand, FindCommand, Index, PersonKind, PersonPredicate,
        PersonValidationError,
    };

    #[test]
    fn add_patient_collects_fields_and_tags() {
        let command = parse_command("add-patient n/John Doe p/98765432 t/friend t/vip").unwrap();
        let Command::Add(add) = command else {
            panic!("expected add command");
        };
        let person = add.person();
        assert_eq!(person.kind(), PersonKind::Patient);
        assert_eq!(person.name().as_str(), "John Doe");
        assert_eq!(person.phone().as_str(), "98765432");
        assert_eq!(person.tags().len(), 2);
    }

    #[test]
    fn add_requires_name_and_phone() {
        assert!(matches!(
            parse_command("add-doctor n/Dr Who"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_command("add-doctor stray n/Dr Who p/123"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn add_reports_invalid_field_values() {
        let err = parse_command("add-patient n/J@ne p/123").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue(PersonValidationError::InvalidName(_))
        ));
    }

    #[test]
    fn edit_with_empty_tag_prefix_clears_tags() {
        let Command::Edit(edit) = parse_command("edit-patient 2 t/").unwrap() else {
            panic!("expected edit command");
        };
        assert_eq!(edit.kind(), PersonKind::Patient);
        assert_eq!(
            edit,
            clinicbook_core::EditCommand::new(
                PersonKind::Patient,
                Index::from_one_based(2).unwrap(),
                clinicbook_core::EditPersonDescriptor {
                    tags: Some(Default::default()),
                    ..Default::default()
                },
            )
        );
    }

    #[test]
    fn edit_without_fields_is_rejected() {
        assert_eq!(
            parse_command("edit-doctor 1"),
            Err(ParseError::NoFieldEdited)
        );
    }

    #[test]
    fn delete_parses_one_based_index() {
        assert_eq!(
            parse_command("delete-doctor 3").unwrap(),
            Command::Delete(DeleteCommand::new(
                PersonKind::Doctor,
                Index::from_one_based(3).unwrap()
            ))
        );
        assert!(matches!(
            parse_command("delete-doctor 0"),
            Err(ParseError::InvalidIndex(_))
        ));
        assert!(matches!(
            parse_command("delete-doctor"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn find_splits_keywords() {
        assert_eq!(
            parse_command("find-patient alice  bob").unwrap(),
            Command::Find(FindCommand::new(
                PersonKind::Patient,
                PersonPredicate::NameContainsKeywords(vec!["alice".into(), "bob".into()])
            ))
        );
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert!(matches!(
            parse_command("add-nurse n/x p/123"),
            Err(ParseError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_command("frobnicate"),
            Err(ParseError::UnknownCommand(_))
        ));
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
    }

    #[test]
    fn every_usage_line_names_a_known_command() {
        for usage in COMMAND_USAGES {
            let word = usage.split_whitespace().next().unwrap();
            for kind in ["patient", "doctor"] {
                let concrete = word.replace("<patient|doctor>", kind);
                assert!(
                    !matches!(
                        parse_command(&concrete),
                        Err(ParseError::UnknownCommand(_))
                    ),
                    "{concrete}"
                );
            }
        }
    }

    #[test]
    fn prefix_inside_a_token_is_not_split() {
        let err = parse_command("add-patient n/Ann abcn/x p/123").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidValue(PersonValidationError::InvalidName("Ann abcn/x".into()))
        );
    }
}
