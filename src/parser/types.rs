//! Type grammar: primitive and named types, scoping, generics, arrays,
//! wildcards, and type parameter lists.

use super::error::ParseError;
use super::lexer::Token;
use super::parser::Parser;
use crate::cst::node::{Field, Node, NodeKind};

impl Parser {
    /// A type in annotated position: leading annotations wrap the
    /// unannotated type in an `annotated_type` node.
    pub(crate) fn parse_type(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::At) {
            let at = self.cursor_location();
            let mut annotations = Vec::new();
            while self.check(Token::At) {
                annotations.push(self.parse_annotation()?);
            }
            let inner = self.parse_unannotated_type()?;
            let children = vec![
                Node::list(Field::DecoratorList, annotations, at),
                inner.with_role(Field::Type),
            ];
            return Ok(Node::inner(NodeKind::AnnotatedType, children, at));
        }
        self.parse_unannotated_type()
    }

    /// A type without leading annotations: simple type plus any `[]`
    /// dimensions, which fold it into an `array_type`.
    pub(crate) fn parse_unannotated_type(&mut self) -> Result<Node, ParseError> {
        let element = self.parse_simple_type()?;
        if self.check(Token::LBracket) && self.check_next(Token::RBracket) {
            let at = element.span.start;
            let dims = self.parse_dimensions()?;
            let children = vec![
                element.with_role(Field::Type),
                dims.with_role(Field::Dimensions),
            ];
            return Ok(Node::inner(NodeKind::ArrayType, children, at));
        }
        Ok(element)
    }

    /// Primitive keyword types, `void`, or an identifier-led type that may
    /// grow scope segments and type arguments
    pub(crate) fn parse_simple_type(&mut self) -> Result<Node, ParseError> {
        match self.token() {
            Some(Token::Void) => Ok(self.bump_as(NodeKind::VoidType)),
            Some(Token::Boolean) => Ok(self.bump_as(NodeKind::BooleanType)),
            Some(Token::Byte) | Some(Token::Short) | Some(Token::Int) | Some(Token::Long)
            | Some(Token::Char) => Ok(self.bump_as(NodeKind::IntegralType)),
            Some(Token::Float) | Some(Token::Double) => {
                Ok(self.bump_as(NodeKind::FloatingPointType))
            }
            Some(Token::Identifier) => self.parse_named_type(),
            _ => Err(self.error_unexpected("type")),
        }
    }

    /// `type_identifier`, growing left-to-right into `scoped_type_identifier`
    /// and `generic_type` layers
    fn parse_named_type(&mut self) -> Result<Node, ParseError> {
        let mut node = self.bump_as(NodeKind::TypeIdentifier);
        loop {
            if self.check(Token::Lt) && self.scan_type_arguments(self.current).is_some() {
                let at = node.span.start;
                let args = self.parse_type_arguments()?;
                let children = vec![
                    node.with_role(Field::Name),
                    args.with_role(Field::Arguments),
                ];
                node = Node::inner(NodeKind::GenericType, children, at);
            } else if self.check(Token::Dot) && self.check_next(Token::Identifier) {
                let at = node.span.start;
                let dot = self.bump();
                let name = self.bump_as(NodeKind::TypeIdentifier);
                let children = vec![
                    node.with_role(Field::Scope),
                    dot,
                    name.with_role(Field::Name),
                ];
                node = Node::inner(NodeKind::ScopedTypeIdentifier, children, at);
            } else {
                break;
            }
        }
        Ok(node)
    }

    /// `< [type|wildcard {, type|wildcard}] >`, including the empty diamond.
    /// Closing brackets may split compound `>>`-family tokens.
    pub(crate) fn parse_type_arguments(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Lt, "'<'")?];
        if !self.closes_angle() {
            children.push(self.parse_type_argument()?);
            while self.check(Token::Comma) {
                children.push(self.bump());
                children.push(self.parse_type_argument()?);
            }
        }
        children.push(self.expect_close_angle()?);
        Ok(Node::inner(NodeKind::TypeArguments, children, at))
    }

    fn closes_angle(&self) -> bool {
        matches!(
            self.token(),
            Some(Token::Gt)
                | Some(Token::RShift)
                | Some(Token::URShift)
                | Some(Token::Ge)
                | Some(Token::RShiftAssign)
                | Some(Token::URShiftAssign)
        )
    }

    fn parse_type_argument(&mut self) -> Result<Node, ParseError> {
        if self.check(Token::Question) {
            return self.parse_wildcard();
        }
        self.parse_type()
    }

    /// `? [extends|super type]`
    fn parse_wildcard(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Question, "'?'")?];
        if self.check(Token::Extends) || self.check(Token::Super) {
            children.push(self.bump());
            children.push(self.parse_type()?.with_role(Field::Type));
        }
        Ok(Node::inner(NodeKind::Wildcard, children, at))
    }

    /// One or more `[@ann] [ ]` pairs
    pub(crate) fn parse_dimensions(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = Vec::new();
        loop {
            while self.check(Token::At) {
                children.push(self.parse_annotation()?);
            }
            children.push(self.expect(Token::LBracket, "'['")?);
            children.push(self.expect(Token::RBracket, "']'")?);
            if !(self.check(Token::LBracket) && self.check_next(Token::RBracket))
                && !(self.check(Token::At))
            {
                break;
            }
            // An annotation here must introduce another dimension
            if self.check(Token::At) {
                let save = self.current;
                let more = self.skim_annotations() && self.check(Token::LBracket);
                self.current = save;
                if !more {
                    break;
                }
            }
        }
        Ok(Node::inner(NodeKind::Dimensions, children, at))
    }

    /// `< type_parameter {, type_parameter} >` on generic declarations
    pub(crate) fn parse_type_parameter_list(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = vec![self.expect(Token::Lt, "'<'")?];
        children.push(self.parse_type_parameter()?);
        while self.check(Token::Comma) {
            children.push(self.bump());
            children.push(self.parse_type_parameter()?);
        }
        children.push(self.expect_close_angle()?);
        Ok(Node::inner(NodeKind::TypeParameterList, children, at))
    }

    /// `[annotations] Name [extends Bound {& Bound}]`
    fn parse_type_parameter(&mut self) -> Result<Node, ParseError> {
        let at = self.cursor_location();
        let mut children = Vec::new();
        let anns_at = self.cursor_location();
        let mut annotations = Vec::new();
        while self.check(Token::At) {
            annotations.push(self.parse_annotation()?);
        }
        children.push(Node::list(Field::DecoratorList, annotations, anns_at));
        children.push(self.expect_identifier(NodeKind::TypeIdentifier)?.with_role(Field::Name));
        if self.check(Token::Extends) {
            let bound_at = self.cursor_location();
            let mut bound = vec![self.bump()];
            bound.push(self.parse_type()?);
            while self.check(Token::Amp) {
                bound.push(self.bump());
                bound.push(self.parse_type()?);
            }
            children.push(Node::inner(NodeKind::TypeBound, bound, bound_at));
        }
        Ok(Node::inner(NodeKind::TypeParameter, children, at))
    }
}

#[cfg(test)]
mod tests {
    use super::super::parser::parse;
    use crate::cst::node::NodeKind;

    #[test]
    fn test_nested_generic_type_closes_with_shift_token() {
        let tree = parse("Map<String, List<Integer>> m;").expect("parse");
        assert!(!tree.has_errors());
        assert_eq!(tree.root.descendants_of_kind(NodeKind::GenericType).len(), 2);
        assert_eq!(tree.text(), "Map<String, List<Integer>> m;");
    }

    #[test]
    fn test_triply_nested_generic_type() {
        let tree = parse("A<B<C<D>>> x;").expect("parse");
        assert!(!tree.has_errors());
        assert_eq!(tree.root.descendants_of_kind(NodeKind::GenericType).len(), 3);
        assert_eq!(tree.text(), "A<B<C<D>>> x;");
    }

    #[test]
    fn test_scoped_generic_array_type() {
        let tree = parse("java.util.List<int[]>[] xs;").expect("parse");
        assert!(!tree.has_errors());
        assert_eq!(tree.root.descendants_of_kind(NodeKind::ArrayType).len(), 2);
        assert!(!tree.root.descendants_of_kind(NodeKind::ScopedTypeIdentifier).is_empty());
    }

    #[test]
    fn test_wildcard_bounds() {
        let tree = parse("List<? extends Number> a; List<? super T> b; List<?> c;").expect("parse");
        assert!(!tree.has_errors());
        assert_eq!(tree.root.descendants_of_kind(NodeKind::Wildcard).len(), 3);
    }
}
