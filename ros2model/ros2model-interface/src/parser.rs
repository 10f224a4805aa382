//! Drivers turning whole definition files into [`Message`], [`Service`] and
//! [`Action`] values.
//!
//! Each driver folds the file's lines through a [`SectionState`], classifying
//! every non-delimiter line with [`classify_line`] and annotating field types
//! with [`annotate_type`]. A re-declared field name silently replaces the
//! earlier one.

use std::{fs, path::Path};

use ros2model_core::{Action, FieldMap, Message, Service};

use crate::{
    InterfaceError, LineClass, SkipReason, annotate_type, classify_line,
    section::{ActionSection, MessageSection, SectionState, ServiceSection, is_section_delimiter},
};

/// A parsed definition plus the lines that could not be read as fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub definition: T,
    /// 1-based line numbers classified as [`SkipReason::Malformed`].
    pub malformed_lines: Vec<usize>,
}

impl<T> Parsed<T> {
    pub fn into_definition(self) -> T {
        self.definition
    }

    pub fn is_clean(&self) -> bool {
        self.malformed_lines.is_empty()
    }
}

struct SectionFold<S> {
    state: S,
    sections: Vec<FieldMap>,
    malformed_lines: Vec<usize>,
}

impl<S: SectionState> SectionFold<S> {
    fn new() -> Self {
        Self {
            state: S::default(),
            sections: vec![FieldMap::new(); S::SECTIONS],
            malformed_lines: Vec::new(),
        }
    }

    fn step(mut self, line_no: usize, line: &str) -> Self {
        if is_section_delimiter(line)
            && let Some(next) = self.state.advance()
        {
            self.state = next;
            return self;
        }

        match classify_line(line) {
            LineClass::Field {
                type_token,
                field_name,
            } => match self.state.slot() {
                Some(slot) => {
                    self.sections[slot].insert(field_name, annotate_type(&type_token));
                }
                None => {
                    tracing::debug!(
                        line_no,
                        %field_name,
                        "dropping field after the last section"
                    );
                }
            },
            LineClass::Skip(SkipReason::Malformed) => {
                tracing::debug!(line_no, line, "skipping malformed declaration");
                self.malformed_lines.push(line_no);
            }
            LineClass::Skip(_) => {}
        }
        self
    }
}

fn fold_sections<S: SectionState>(text: &str) -> (Vec<FieldMap>, Vec<usize>) {
    let fold = text
        .lines()
        .enumerate()
        .fold(SectionFold::<S>::new(), |fold, (idx, line)| {
            fold.step(idx + 1, line)
        });
    (fold.sections, fold.malformed_lines)
}

/// Parse `.msg` text. Delimiter lines are not special here.
pub fn parse_msg(name: &str, text: &str) -> Parsed<Message> {
    let (sections, malformed_lines) = fold_sections::<MessageSection>(text);
    let mut sections = sections.into_iter();
    Parsed {
        definition: Message {
            name: name.to_string(),
            fields: sections.next().unwrap_or_default(),
        },
        malformed_lines,
    }
}

/// Parse `.srv` text: fields before the first `---` form the request, the
/// rest the response.
pub fn parse_srv(name: &str, text: &str) -> Parsed<Service> {
    let (sections, malformed_lines) = fold_sections::<ServiceSection>(text);
    let mut sections = sections.into_iter();
    Parsed {
        definition: Service {
            name: name.to_string(),
            request: sections.next().unwrap_or_default(),
            response: sections.next().unwrap_or_default(),
        },
        malformed_lines,
    }
}

/// Parse `.action` text: goal, result and feedback sections. Anything after
/// a third `---` is dropped.
pub fn parse_action(name: &str, text: &str) -> Parsed<Action> {
    let (sections, malformed_lines) = fold_sections::<ActionSection>(text);
    let mut sections = sections.into_iter();
    Parsed {
        definition: Action {
            name: name.to_string(),
            goal: sections.next().unwrap_or_default(),
            result: sections.next().unwrap_or_default(),
            feedback: sections.next().unwrap_or_default(),
        },
        malformed_lines,
    }
}

pub fn parse_msg_file(path: &Path) -> Result<Parsed<Message>, InterfaceError> {
    let (name, text) = read_definition(path)?;
    Ok(parse_msg(&name, &text))
}

pub fn parse_srv_file(path: &Path) -> Result<Parsed<Service>, InterfaceError> {
    let (name, text) = read_definition(path)?;
    Ok(parse_srv(&name, &text))
}

pub fn parse_action_file(path: &Path) -> Result<Parsed<Action>, InterfaceError> {
    let (name, text) = read_definition(path)?;
    Ok(parse_action(&name, &text))
}

/// File stem and full contents of a definition file.
fn read_definition(path: &Path) -> Result<(String, String), InterfaceError> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| InterfaceError::InvalidFileName {
            path: path.to_path_buf(),
        })?;
    let text = fs::read_to_string(path).map_err(|source| InterfaceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((name.to_string(), text))
}
