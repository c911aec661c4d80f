//! JSX grammar rules: fragments, elements, names, attributes and children.
//!
//! Each rule first decides with bounded lookahead (at most two tokens)
//! whether its construct starts at the current position. If not, it returns
//! `Ok(None)` without consuming anything. Once the construct has begun
//! (e.g. a `<` not followed by `/` has been consumed), every later failure
//! is a hard error: there is no backtracking past that point.
//!
//! Tag names, attributes and children are lexed in JSX mode; the contents of
//! `{ ... }` containers are lexed in ordinary mode. Mode switches go through
//! [`ParserHost::with_jsx_mode`], which restores the previous mode on every
//! exit path.

use crate::ast::Node;
use crate::ast::NodeData;
use crate::ast::NodeKind;
use crate::ast::NodeStart;
use crate::expression_grammar::literal_node;
use crate::token::JsxToken;
use crate::token::JsxTokenKind;
use crate::token_source::JsxScanner;
use crate::ExpressionGrammar;
use crate::JsxParseError;
use crate::JsxParseErrorKind;
use crate::JsxParser;
use crate::ParserHost;
use crate::RuleResult;

impl<'src, S: JsxScanner<'src>, G: ExpressionGrammar> JsxParser<'src, S, G> {
    // =========================================================================
    // Fragments and elements
    // =========================================================================

    /// Parses `<> children </>`.
    ///
    /// Returns `Ok(None)` unless the current tokens are `<` immediately
    /// followed by `>`. The fragment's `children` are `None` when there are
    /// none.
    pub fn parse_jsx_fragment(&mut self) -> RuleResult<Node> {
        if !self.core.current_is("<") || !self.core.peek_is(">") {
            return Ok(None);
        }

        self.with_recursion_guard(|p| p.with_jsx_mode(true, |p| p.parse_jsx_fragment_impl()))
            .map(Some)
    }

    fn parse_jsx_fragment_impl(&mut self) -> Result<Node, JsxParseError> {
        let start_opening = self.core.expect("<")?;
        let end_opening = self.core.expect(">")?;

        let children = self.parse_jsx_children()?;

        let start_closing = self.core.expect("<")?;
        self.core.expect("/")?;
        self.core.expect(">")?;

        let open = self.core.create_node(
            NodeKind::JsxOpeningFragment,
            NodeStart::Token(&start_opening),
        );
        let opening_fragment = self.core.complete_node(
            open,
            NodeData::JsxOpeningFragment,
            Some(end_opening.span.end_exclusive.clone()),
        );

        let open = self.core.create_node(
            NodeKind::JsxClosingFragment,
            NodeStart::Token(&start_closing),
        );
        let closing_fragment =
            self.core.complete_node(open, NodeData::JsxClosingFragment, None);

        let open = self
            .core
            .create_node(NodeKind::JsxFragment, NodeStart::Token(&start_opening));
        Ok(self.core.complete_node(
            open,
            NodeData::JsxFragment {
                opening_fragment: Box::new(opening_fragment),
                closing_fragment: Box::new(closing_fragment),
                children,
            },
            None,
        ))
    }

    /// Parses `<name attributes />` or `<name attributes> children
    /// </name>`.
    ///
    /// Returns `Ok(None)` unless the current token is `<` and the next one
    /// is not `/`. Self-closing elements have neither a closing element nor
    /// children. The closing tag's name must be structurally equal to the
    /// opening tag's name (see [`Node::is_same_jsx_name`]); a mismatch is a
    /// `MismatchedClosingTag` error.
    pub fn parse_jsx_element(&mut self) -> RuleResult<Node> {
        if !self.core.current_is("<") || self.core.peek_is("/") {
            return Ok(None);
        }

        self.with_recursion_guard(|p| p.with_jsx_mode(true, |p| p.parse_jsx_element_impl()))
            .map(Some)
    }

    fn parse_jsx_element_impl(&mut self) -> Result<Node, JsxParseError> {
        let start_opening = self.core.expect("<")?;

        let Some(name) = self.parse_jsx_name(true)? else {
            return Err(self.core.error(None, None));
        };
        let attributes = self.parse_jsx_attributes()?;
        let self_closing = self.core.scanner_mut().consume("/").is_some();
        let end_opening = self.core.expect(">")?;

        let mut children = None;
        let mut closing_element = None;
        if !self_closing {
            children = self.parse_jsx_children()?;

            let start_closing = self.core.expect("<")?;
            self.core.expect("/")?;
            let Some(closing_name) = self.parse_jsx_name(true)? else {
                return Err(self.core.error(None, None));
            };
            self.core.expect(">")?;

            if !name.is_same_jsx_name(&closing_name) {
                return Err(mismatched_closing_tag(&name, &closing_name));
            }

            let open = self.core.create_node(
                NodeKind::JsxClosingElement,
                NodeStart::Token(&start_closing),
            );
            closing_element = Some(Box::new(self.core.complete_node(
                open,
                NodeData::JsxClosingElement {
                    name: Box::new(closing_name),
                },
                None,
            )));
        }

        let open = self.core.create_node(
            NodeKind::JsxOpeningElement,
            NodeStart::Token(&start_opening),
        );
        let opening_element = self.core.complete_node(
            open,
            NodeData::JsxOpeningElement {
                name: Box::new(name),
                attributes,
                self_closing,
            },
            Some(end_opening.span.end_exclusive.clone()),
        );

        let open = self
            .core
            .create_node(NodeKind::JsxElement, NodeStart::Token(&start_opening));
        Ok(self.core.complete_node(
            open,
            NodeData::JsxElement {
                opening_element: Box::new(opening_element),
                closing_element,
                children,
            },
            None,
        ))
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Parses a JSX name: `a`, `ns:a`, or (if `allow_member`) `a.b.c`.
    ///
    /// A namespaced name cannot be chained further. Member chains fold left:
    /// `a.b.c` is `(a.b).c`.
    fn parse_jsx_name(&mut self, allow_member: bool) -> RuleResult<Node> {
        let Some(first) = self.parse_jsx_identifier() else {
            return Ok(None);
        };

        if self.core.scanner_mut().consume(":").is_some() {
            let Some(local) = self.parse_jsx_identifier() else {
                return Err(self.core.error(None, None));
            };
            let open = self
                .core
                .create_node(NodeKind::JsxNamespacedName, NodeStart::Node(&first));
            return Ok(Some(self.core.complete_node(
                open,
                NodeData::JsxNamespacedName {
                    namespace: Box::new(first),
                    name: Box::new(local),
                },
                None,
            )));
        }

        let mut object = first;
        while allow_member && self.core.scanner_mut().consume(".").is_some() {
            let Some(property) = self.parse_jsx_identifier() else {
                return Err(self.core.error(None, None));
            };
            let end = property.end().clone();
            let open = self
                .core
                .create_node(NodeKind::JsxMemberExpression, NodeStart::Node(&object));
            object = self.core.complete_node(
                open,
                NodeData::JsxMemberExpression {
                    object: Box::new(object),
                    property: Box::new(property),
                },
                Some(end),
            );
        }

        Ok(Some(object))
    }

    /// Consumes a JSX identifier token and turns it into a `JSXIdentifier`
    /// node.
    fn parse_jsx_identifier(&mut self) -> Option<Node> {
        let is_identifier = self
            .core
            .scanner_mut()
            .current_token()
            .is_some_and(|token| matches!(token.kind, JsxTokenKind::JsxIdentifier(_)));
        if !is_identifier {
            return None;
        }

        let token = self.core.scanner_mut().advance()?;
        let open = self
            .core
            .create_node(NodeKind::JsxIdentifier, NodeStart::Token(&token));
        let end = token.span.end_exclusive.clone();
        let name = token.raw_text().to_string();
        Some(self.core.complete_node(open, NodeData::JsxIdentifier { name }, Some(end)))
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Parses attributes until neither a spread attribute nor a regular
    /// attribute matches. Returns `None` rather than an empty list.
    fn parse_jsx_attributes(&mut self) -> Result<Option<Vec<Node>>, JsxParseError> {
        let mut attributes = Vec::new();
        loop {
            if let Some(attribute) = self.parse_jsx_spread_attribute()? {
                attributes.push(attribute);
            } else if let Some(attribute) = self.parse_jsx_attribute()? {
                attributes.push(attribute);
            } else {
                break;
            }
        }
        Ok((!attributes.is_empty()).then_some(attributes))
    }

    /// Parses `{...expression}`.
    fn parse_jsx_spread_attribute(&mut self) -> RuleResult<Node> {
        let Some(open_brace) = self.core.scanner_mut().consume("{") else {
            return Ok(None);
        };
        let open = self
            .core
            .create_node(NodeKind::JsxSpreadAttribute, NodeStart::Token(&open_brace));

        let argument = self.with_jsx_mode(false, |p| {
            p.core.expect("...")?;
            let argument = p.parse_required_expression()?;
            p.core.expect("}")?;
            Ok(argument)
        })?;

        Ok(Some(self.core.complete_node(
            open,
            NodeData::JsxSpreadAttribute {
                argument: Box::new(argument),
            },
            None,
        )))
    }

    /// Parses `name` or `name=value`, where `name` is a simple or namespaced
    /// name (never a member chain).
    fn parse_jsx_attribute(&mut self) -> RuleResult<Node> {
        let Some(name) = self.parse_jsx_name(false)? else {
            return Ok(None);
        };
        let open = self
            .core
            .create_node(NodeKind::JsxAttribute, NodeStart::Node(&name));

        let value = match self.core.scanner_mut().consume("=") {
            Some(_) => Some(Box::new(self.parse_jsx_attribute_value()?)),
            None => None,
        };

        Ok(Some(self.core.complete_node(
            open,
            NodeData::JsxAttribute {
                name: Box::new(name),
                value,
            },
            None,
        )))
    }

    /// Parses the value after `=`: a string literal, a `{ expression }`
    /// container, or a bare fragment or element (`b=<C />`).
    fn parse_jsx_attribute_value(&mut self) -> Result<Node, JsxParseError> {
        if let Some(literal) = self.parse_jsx_string_literal() {
            return Ok(literal);
        }

        if let Some(open_brace) = self.core.scanner_mut().consume("{") {
            let open = self.core.create_node(
                NodeKind::JsxExpressionContainer,
                NodeStart::Token(&open_brace),
            );
            let expression = self.with_jsx_mode(false, |p| {
                let expression = p.parse_required_expression()?;
                p.core.expect("}")?;
                Ok(expression)
            })?;
            return Ok(self.core.complete_node(
                open,
                NodeData::JsxExpressionContainer {
                    expression: Box::new(expression),
                },
                None,
            ));
        }

        if let Some(fragment) = self.parse_jsx_fragment()? {
            return Ok(fragment);
        }
        if let Some(element) = self.parse_jsx_element()? {
            return Ok(element);
        }
        Err(self.core.error(None, None))
    }

    /// Consumes a string token and turns it into a `Literal` node.
    fn parse_jsx_string_literal(&mut self) -> Option<Node> {
        let is_string = self
            .core
            .scanner_mut()
            .current_token()
            .is_some_and(|token| matches!(token.kind, JsxTokenKind::StringLiteral(_)));
        if !is_string {
            return None;
        }
        let token = self.core.scanner_mut().advance()?;
        literal_node(&mut self.core, &token)
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Parses children greedily. Returns `None` rather than an empty list.
    fn parse_jsx_children(&mut self) -> Result<Option<Vec<Node>>, JsxParseError> {
        let mut children = Vec::new();
        while let Some(child) = self.parse_jsx_child()? {
            children.push(child);
        }
        Ok((!children.is_empty()).then_some(children))
    }

    /// Parses one child: text, a fragment, an element, or an expression
    /// container / spread child.
    fn parse_jsx_child(&mut self) -> RuleResult<Node> {
        if let Some(text) = self.parse_jsx_text() {
            return Ok(Some(text));
        }
        if let Some(fragment) = self.parse_jsx_fragment()? {
            return Ok(Some(fragment));
        }
        if let Some(element) = self.parse_jsx_element()? {
            return Ok(Some(element));
        }
        self.parse_jsx_expression_child()
    }

    /// Parses a run of text up to the next `<` or `{`.
    fn parse_jsx_text(&mut self) -> Option<Node> {
        self.core.scanner_mut().retokenize_current_as_jsx_text()?;
        let token = self.core.scanner_mut().advance()?;
        let open = self
            .core
            .create_node(NodeKind::JsxText, NodeStart::Token(&token));
        let end = token.span.end_exclusive.clone();
        let text = token.raw_text().to_string();
        Some(self.core.complete_node(
            open,
            NodeData::JsxText {
                value: text.clone(),
                raw: text,
            },
            Some(end),
        ))
    }

    /// Parses `{ expression }`, `{}` or `{...expression}` in child position.
    ///
    /// An empty container holds a zero-width `JSXEmptyExpression` placed
    /// right after the `{`. A spread child requires an expression.
    fn parse_jsx_expression_child(&mut self) -> RuleResult<Node> {
        let Some(open_brace) = self.core.scanner_mut().consume("{") else {
            return Ok(None);
        };

        self.with_jsx_mode(false, |p| p.parse_jsx_expression_child_impl(&open_brace))
            .map(Some)
    }

    fn parse_jsx_expression_child_impl(
        &mut self,
        open_brace: &JsxToken<'src>,
    ) -> Result<Node, JsxParseError> {
        let spread = self.core.scanner_mut().consume("...").is_some();
        let expression = G::parse_assignment_expression(self)?;
        let empty_position = self.core.scanner().last_end_position();

        if spread && expression.is_none() {
            return Err(self.core.error(None, None));
        }
        self.core.expect("}")?;

        let expression = match expression {
            Some(expression) => expression,
            None => {
                let open = self.core.create_node(
                    NodeKind::JsxEmptyExpression,
                    NodeStart::Position(&empty_position),
                );
                self.core.complete_node(
                    open,
                    NodeData::JsxEmptyExpression,
                    Some(empty_position.clone()),
                )
            },
        };

        let (kind, data) = if spread {
            (
                NodeKind::JsxSpreadChild,
                NodeData::JsxSpreadChild {
                    expression: Box::new(expression),
                },
            )
        } else {
            (
                NodeKind::JsxExpressionContainer,
                NodeData::JsxExpressionContainer {
                    expression: Box::new(expression),
                },
            )
        };
        let open = self.core.create_node(kind, NodeStart::Token(open_brace));
        Ok(self.core.complete_node(open, data, None))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Invokes the expression grammar, turning a no-match into a hard error.
    pub(crate) fn parse_required_expression(&mut self) -> Result<Node, JsxParseError> {
        match G::parse_assignment_expression(self)? {
            Some(expression) => Ok(expression),
            None => Err(self.core.error(None, None)),
        }
    }
}

/// Builds the error for a closing tag whose name differs from the opening
/// tag's. Points at the closing name, with a note at the opening name.
fn mismatched_closing_tag(opening: &Node, closing: &Node) -> JsxParseError {
    let opening_text = opening.jsx_name_text().unwrap_or_default();
    let closing_text = closing.jsx_name_text().unwrap_or_default();

    let mut error = JsxParseError::new(
        "closing tag does not match opening tag",
        closing.span.clone(),
        JsxParseErrorKind::MismatchedClosingTag {
            opening: opening_text.clone(),
            closing: closing_text,
        },
    );
    error.add_note_with_span(
        format!("opening tag `{opening_text}` here"),
        opening.span.clone(),
    );
    error.add_help(format!("close the element with `</{opening_text}>`"));
    log::debug!("hard parse error: {}", error.format_oneline());
    error
}
