//! Segment descriptors and the generic parse/format routines.
//!
//! Every resource kind is described by an [`IdFormat`]: an ordered list of
//! literal and variable segments. One routine parses any kind and one routine
//! formats any kind; typed IDs only decide which format to hand them.

use std::fmt;

use crate::IdError;

/// One position in a resource ID path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A fixed token that must match exactly, including case.
    Literal(&'static str),

    /// Caller-supplied data captured into the named field.
    Variable(&'static str),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(token) => write!(f, "'{token}'"),
            Segment::Variable(field) => write!(f, "a value for '{field}'"),
        }
    }
}

/// The shape of one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdFormat {
    kind: &'static str,
    segments: &'static [Segment],
}

impl IdFormat {
    /// Creates a format from a kind slug and its segments.
    #[must_use]
    pub const fn new(kind: &'static str, segments: &'static [Segment]) -> Self {
        Self { kind, segments }
    }

    /// The kind slug, e.g. `sql_database`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The ordered segments.
    #[must_use]
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Names of the variable segments, in path order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(field) => Some(*field),
            Segment::Literal(_) => None,
        })
    }

    /// Returns true if IDs of this kind live inside a resource group.
    #[must_use]
    pub fn is_resource_group_scoped(&self) -> bool {
        self.segments.contains(&Segment::Literal("resourceGroups"))
    }

    /// A human-readable template such as `/subscriptions/{subscription_id}`.
    #[must_use]
    pub fn template(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push('/');
            match segment {
                Segment::Literal(token) => out.push_str(token),
                Segment::Variable(field) => {
                    out.push('{');
                    out.push_str(field);
                    out.push('}');
                }
            }
        }
        out
    }

    /// Parses `input` against this format.
    ///
    /// Empty leading and trailing segments are ignored, so `a/b/` and `/a/b`
    /// are both accepted. Anything else must match exactly.
    pub fn parse(&self, input: &str) -> Result<Captures, IdError> {
        let kind = self.kind;
        let trimmed = input.trim_matches('/');
        if trimmed.is_empty() {
            return Err(IdError::Empty { kind });
        }

        let mut parts = trimmed.split('/');
        let mut values = Vec::with_capacity(self.segments.len() / 2 + 1);

        for (index, segment) in self.segments.iter().enumerate() {
            let position = index + 1;
            let Some(part) = parts.next() else {
                return Err(IdError::MissingSegment {
                    kind,
                    position,
                    expected: *segment,
                });
            };

            match *segment {
                Segment::Literal(expected) => {
                    if part != expected {
                        return Err(IdError::UnexpectedSegment {
                            kind,
                            position,
                            expected,
                            actual: part.to_string(),
                        });
                    }
                }
                Segment::Variable(field) => {
                    if part.is_empty() {
                        return Err(IdError::EmptySegment {
                            kind,
                            position,
                            field,
                        });
                    }
                    values.push((field, part.to_string()));
                }
            }
        }

        let extra: Vec<&str> = parts.collect();
        if !extra.is_empty() {
            return Err(IdError::TrailingSegments {
                kind,
                position: self.segments.len() + 1,
                extra: extra.join("/"),
            });
        }

        Ok(Captures { kind, values })
    }

    /// Checks that `value` can be stored in `field` and still parse back.
    ///
    /// Values must be non-empty and must not contain `/`.
    pub fn check_value(&self, field: &'static str, value: &str) -> Result<(), IdError> {
        let kind = self.kind;
        let position = self
            .segments
            .iter()
            .position(|segment| *segment == Segment::Variable(field))
            .map(|index| index + 1)
            .ok_or(IdError::UnknownField { kind, field })?;

        if value.is_empty() {
            return Err(IdError::EmptySegment {
                kind,
                position,
                field,
            });
        }
        if value.contains('/') {
            return Err(IdError::SlashInValue {
                kind,
                field,
                value: value.to_string(),
            });
        }
        Ok(())
    }

    /// Formats variable values (in path order) into the canonical string.
    ///
    /// Missing values are left empty; callers pass one value per field.
    #[must_use]
    pub fn format(&self, values: &[&str]) -> String {
        let mut out = String::new();
        let mut values = values.iter();
        for segment in self.segments {
            out.push('/');
            match segment {
                Segment::Literal(token) => out.push_str(token),
                Segment::Variable(_) => {
                    if let Some(value) = values.next() {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for IdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind)
    }
}

/// Variable values captured by [`IdFormat::parse`], keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures {
    kind: &'static str,
    values: Vec<(&'static str, String)>,
}

impl Captures {
    /// The kind these values were parsed as.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the value captured for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Moves the value for `field` out of the captures.
    pub fn take(&mut self, field: &'static str) -> Result<String, IdError> {
        self.values
            .iter_mut()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| std::mem::take(value))
            .ok_or(IdError::UnknownField {
                kind: self.kind,
                field,
            })
    }

    /// Iterates over `(field, value)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// Number of captured fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Behaviour shared by every typed resource ID.
pub trait ResourceId: Sized + fmt::Display {
    /// The shape of this kind.
    const FORMAT: IdFormat;

    /// Parses the canonical string form.
    fn parse(s: &str) -> Result<Self, IdError>;

    /// The field values in path order.
    fn fields(&self) -> Vec<(&'static str, &str)>;
}
