/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! URI path templates such as `/ledgers/{name}` or `/objects/{key+}`.

use crate::label;

/// A template could not be parsed.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum TemplateError {
    /// The template does not start with `/`.
    #[error("path template `{0}` must start with `/`")]
    NotAbsolute(String),
    /// A `{` was not closed, or a `}` was not opened.
    #[error("path template `{0}` has unbalanced braces")]
    Unbalanced(String),
    /// A label has no name.
    #[error("path template `{0}` contains an empty label")]
    EmptyLabel(String),
}

/// A label could not be substituted.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum LabelError {
    /// No value was provided for the label.
    #[error("no value was provided for path label `{0}`")]
    Missing(String),
    /// The value provided for the label was empty.
    #[error("path label `{0}` must not be empty")]
    Empty(String),
}

impl LabelError {
    /// The name of the label that could not be substituted.
    pub fn label(&self) -> &str {
        match self {
            LabelError::Missing(label) | LabelError::Empty(label) => label,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Label { name: String, greedy: bool },
}

/// A parsed path template.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse a template. Labels are written `{name}`; `{name+}` marks a greedy label.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        if !template.starts_with('/') {
            return Err(TemplateError::NotAbsolute(template.to_string()));
        }
        let mut segments = Vec::new();
        let mut rest = template;
        while !rest.is_empty() {
            match rest.find(|c: char| c == '{' || c == '}') {
                None => {
                    segments.push(Segment::Literal(rest.to_string()));
                    break;
                }
                Some(idx) if rest.as_bytes()[idx] == b'}' => {
                    return Err(TemplateError::Unbalanced(template.to_string()));
                }
                Some(start) => {
                    if start > 0 {
                        segments.push(Segment::Literal(rest[..start].to_string()));
                    }
                    let after = &rest[start + 1..];
                    let end = after
                        .find('}')
                        .ok_or_else(|| TemplateError::Unbalanced(template.to_string()))?;
                    let name = &after[..end];
                    if name.contains('{') {
                        return Err(TemplateError::Unbalanced(template.to_string()));
                    }
                    let (name, greedy) = match name.strip_suffix('+') {
                        Some(name) => (name, true),
                        None => (name, false),
                    };
                    if name.is_empty() {
                        return Err(TemplateError::EmptyLabel(template.to_string()));
                    }
                    segments.push(Segment::Label {
                        name: name.to_string(),
                        greedy,
                    });
                    rest = &after[end + 1..];
                }
            }
        }
        Ok(PathTemplate { segments })
    }

    /// Label names, in the order they appear in the template.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Label { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every label with the value returned by `value_of`, percent-encoding it.
    ///
    /// Labels are resolved in template order; the first missing or empty label is reported.
    pub fn expand<F>(&self, mut value_of: F) -> Result<String, LabelError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Label { name, greedy } => {
                    let value = value_of(name).ok_or_else(|| LabelError::Missing(name.clone()))?;
                    if value.is_empty() {
                        return Err(LabelError::Empty(name.clone()));
                    }
                    out.push_str(&label::fmt_string(value, *greedy));
                }
            }
        }
        Ok(out)
    }
}
