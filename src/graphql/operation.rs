//! Typed operation boundary over the schema.
//!
//! An [`Operation`] names one root field, carries its arguments as JSON, and
//! describes the requested fields as a [`Selection`] tree. [`execute`] renders
//! it into a GraphQL document with variables, runs it, and hands back the
//! value under the root field.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde_json::{Map, Value};

use super::PostboardSchema;
use crate::error::{PostboardError, Result};
use crate::validation;

/// Deepest nesting accepted by [`Selection::parse`].
pub const MAX_SELECTION_DEPTH: usize = 64;

/// The root operations the schema exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationName {
    Post,
    Posts,
    GetAuthor,
    UpvotePost,
}

impl OperationName {
    pub fn field_name(&self) -> &'static str {
        match self {
            OperationName::Post => "post",
            OperationName::Posts => "posts",
            OperationName::GetAuthor => "getAuthor",
            OperationName::UpvotePost => "upvotePost",
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, OperationName::UpvotePost)
    }

    /// Declared arguments; every one of them is a required `Int`.
    pub fn arguments(&self) -> &'static [&'static str] {
        match self {
            OperationName::Post | OperationName::GetAuthor => &["id"],
            OperationName::Posts => &[],
            OperationName::UpvotePost => &["postId"],
        }
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for OperationName {
    type Err = PostboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "post" => Ok(OperationName::Post),
            "posts" => Ok(OperationName::Posts),
            "getAuthor" => Ok(OperationName::GetAuthor),
            "upvotePost" => Ok(OperationName::UpvotePost),
            _ => Err(PostboardError::Validation(format!(
                "Unknown operation: {}",
                s
            ))),
        }
    }
}

/// One requested field and, for entity-typed fields, its sub-fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub children: Selection,
}

impl Field {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Selection::default(),
        }
    }

    pub fn nested(name: impl Into<String>, children: Selection) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// Selection tree: the fields requested at one level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub fields: Vec<Field>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Field::leaf(name));
        self
    }

    pub fn nested(mut self, name: impl Into<String>, children: Selection) -> Self {
        self.fields.push(Field::nested(name, children));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of nested field levels; a flat selection has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((selection, level)) = stack.pop() {
            if selection.is_empty() {
                continue;
            }
            deepest = deepest.max(level);
            stack.extend(selection.fields.iter().map(|f| (&f.children, level + 1)));
        }
        deepest
    }

    /// Parses the compact text form, e.g. `title author { name posts { title } }`.
    ///
    /// Fields are separated by whitespace or commas. Nesting deeper than
    /// [`MAX_SELECTION_DEPTH`] is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        let mut pos = 0;
        let selection = parse_fields(&tokens, &mut pos, 1)?;
        if pos != tokens.len() {
            return Err(PostboardError::Validation(
                "Unbalanced '}' in selection".to_string(),
            ));
        }
        Ok(selection)
    }

    fn render(&self, out: &mut String) {
        out.push_str("{ ");
        for field in &self.fields {
            out.push_str(&field.name);
            out.push(' ');
            if !field.children.is_empty() {
                field.children.render(out);
                out.push(' ');
            }
        }
        out.push('}');
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(&mut out);
        f.write_str(&out)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Name(String),
    Open,
    Close,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' => tokens.push(Token::Open),
            '}' => tokens.push(Token::Close),
            c if c.is_whitespace() || c == ',' => {}
            c if c == '_' || c.is_ascii_alphabetic() => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, n)) = chars.peek() {
                    if n == '_' || n.is_ascii_alphanumeric() {
                        end = i + n.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Name(input[start..end].to_string()));
            }
            other => {
                return Err(PostboardError::Validation(format!(
                    "Unexpected character '{}' in selection",
                    other
                )));
            }
        }
    }

    Ok(tokens)
}

fn parse_fields(tokens: &[Token], pos: &mut usize, depth: usize) -> Result<Selection> {
    if depth > MAX_SELECTION_DEPTH {
        return Err(PostboardError::Validation(format!(
            "Selection is nested deeper than {} levels",
            MAX_SELECTION_DEPTH
        )));
    }

    let mut selection = Selection::new();

    while let Some(token) = tokens.get(*pos) {
        match token {
            Token::Name(name) => {
                *pos += 1;
                if tokens.get(*pos) == Some(&Token::Open) {
                    *pos += 1;
                    let children = parse_fields(tokens, pos, depth + 1)?;
                    if tokens.get(*pos) != Some(&Token::Close) {
                        return Err(PostboardError::Validation(format!(
                            "Missing '}}' after sub-selection of '{}'",
                            name
                        )));
                    }
                    *pos += 1;
                    if children.is_empty() {
                        return Err(PostboardError::Validation(format!(
                            "Empty sub-selection for '{}'",
                            name
                        )));
                    }
                    selection.fields.push(Field::nested(name.clone(), children));
                } else {
                    selection.fields.push(Field::leaf(name.clone()));
                }
            }
            // The caller decides whether a closing brace belongs here.
            Token::Close => break,
            Token::Open => {
                return Err(PostboardError::Validation(
                    "Sub-selection must follow a field name".to_string(),
                ));
            }
        }
    }

    Ok(selection)
}

/// A single root operation with its arguments and requested fields.
#[derive(Debug, Clone)]
pub struct Operation {
    pub name: OperationName,
    pub arguments: Map<String, Value>,
    pub selection: Selection,
}

impl Operation {
    pub fn new(name: OperationName, selection: Selection) -> Self {
        Self {
            name,
            arguments: Map::new(),
            selection,
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Checks arguments against the declared ones and coerces them to `Int`.
    pub fn validate(&self) -> Result<()> {
        let declared = self.name.arguments();

        if let Some(extra) = self
            .arguments
            .keys()
            .find(|k| !declared.contains(&k.as_str()))
        {
            return Err(PostboardError::Validation(format!(
                "Unknown argument '{}' for {}",
                extra, self.name
            )));
        }

        for arg in declared {
            let value = self.arguments.get(*arg).ok_or_else(|| {
                PostboardError::Validation(format!(
                    "Missing required argument '{}' for {}",
                    arg, self.name
                ))
            })?;
            validation::coerce_int(arg, value)?;
        }

        if self.selection.is_empty() {
            return Err(PostboardError::Validation(format!(
                "{} needs at least one selected field",
                self.name
            )));
        }
        if self.selection.depth() > MAX_SELECTION_DEPTH {
            return Err(PostboardError::Validation(format!(
                "Selection is nested deeper than {} levels",
                MAX_SELECTION_DEPTH
            )));
        }

        Ok(())
    }

    /// Renders the GraphQL document, binding every argument to a variable.
    pub fn document(&self) -> String {
        let declared = self.name.arguments();
        let mut doc = String::from(if self.name.is_mutation() {
            "mutation"
        } else {
            "query"
        });

        if !declared.is_empty() {
            let vars: Vec<String> = declared.iter().map(|a| format!("${}: Int!", a)).collect();
            let _ = write!(doc, "({})", vars.join(", "));
        }

        doc.push_str(" { ");
        doc.push_str(self.name.field_name());
        if !declared.is_empty() {
            let args: Vec<String> = declared.iter().map(|a| format!("{}: ${}", a, a)).collect();
            let _ = write!(doc, "({})", args.join(", "));
        }
        doc.push(' ');
        self.selection.render(&mut doc);
        doc.push_str(" }");
        doc
    }

    pub fn to_request(&self) -> async_graphql::Request {
        let variables =
            async_graphql::Variables::from_json(Value::Object(self.arguments.clone()));
        async_graphql::Request::new(self.document()).variables(variables)
    }
}

/// Runs an operation and returns the value resolved for its root field.
///
/// Absent entities come back as `Value::Null`.
pub async fn execute(schema: &PostboardSchema, operation: &Operation) -> Result<Value> {
    operation.validate()?;

    tracing::debug!(
        operation = %operation.name,
        document = %operation.document(),
        "Executing operation"
    );
    let response = schema.execute(operation.to_request()).await;

    if let Some(err) = response.errors.first() {
        let code = err
            .extensions
            .as_ref()
            .and_then(|e| e.get("code"))
            .cloned();
        tracing::debug!(operation = %operation.name, error = %err.message, "Operation failed");
        return Err(match code {
            Some(async_graphql::Value::String(c)) if c == "NOT_FOUND" => {
                PostboardError::NotFound(err.message.clone())
            }
            // Raised by resolvers, e.g. an upvote past the vote ceiling.
            Some(async_graphql::Value::String(c)) if c == "BAD_USER_INPUT" => {
                PostboardError::Validation(err.message.clone())
            }
            _ => PostboardError::Graphql(err.message.clone()),
        });
    }

    let mut data = response.data.into_json()?;
    Ok(data
        .get_mut(operation.name.field_name())
        .map(Value::take)
        .unwrap_or(Value::Null))
}
