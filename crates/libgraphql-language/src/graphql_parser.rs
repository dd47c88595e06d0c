use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::token::GraphQLTokenKind;
use crate::token::TokenId;
use crate::GraphQLError;
use crate::GraphQLErrorKind;
use crate::GraphQLLexer;
use crate::IntoSource;
use crate::ParseOptions;
use std::sync::Arc;

/// A recursive descent parser for GraphQL documents.
///
/// Each grammar production is one method. Productions consume tokens
/// through [`GraphQLLexer`] and fail fast: the first lexical or syntax
/// error aborts the parse and is returned as a [`GraphQLError`].
///
/// Most callers want the free functions [`parse`], [`parse_value`],
/// [`parse_const_value`], and [`parse_type`] instead.
///
/// # Usage
///
/// ```
/// use libgraphql_language::ast::Definition;
/// use libgraphql_language::GraphQLParser;
/// use libgraphql_language::ParseOptions;
///
/// let mut parser = GraphQLParser::new(
///     "type Query { hello: String }",
///     ParseOptions::default(),
/// );
/// let doc = parser.parse_document().unwrap();
/// assert!(matches!(
///     doc.definitions[0],
///     Definition::ObjectTypeDefinition(_),
/// ));
/// ```
pub struct GraphQLParser {
    lexer: GraphQLLexer,
    options: ParseOptions,

    /// Non-`<EOF>` tokens consumed so far, checked against
    /// `options.max_tokens`.
    token_count: usize,

    /// Current nesting depth of selection sets, values, and type
    /// references, checked against `options.max_depth`.
    depth: usize,
}

impl GraphQLParser {
    pub fn new(source: impl IntoSource, options: ParseOptions) -> Self {
        Self {
            lexer: GraphQLLexer::new(source.into_source()),
            options,
            token_count: 0,
            depth: 0,
        }
    }

    /// The number of tokens consumed so far.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    // =========================================================================
    // Documents and definitions
    // =========================================================================

    /// Parses a complete document: `Definition+` from `<SOF>` to `<EOF>`.
    pub fn parse_document(&mut self) -> Result<Document, GraphQLError> {
        let start = self.lexer.token_id();
        let definitions = self.many(
            GraphQLTokenKind::Sof,
            Self::parse_definition,
            GraphQLTokenKind::Eof,
        )?;
        log::trace!(
            "parsed `{}`: {} definition(s), {} token(s)",
            self.lexer.source().name(),
            definitions.len(),
            self.token_count,
        );
        Ok(Document {
            definitions,
            loc: self.loc(start),
        })
    }

    /// Dispatches on the leading keyword (after an optional description)
    /// to the matching definition production.
    fn parse_definition(&mut self) -> Result<Definition, GraphQLError> {
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            return self.parse_operation_definition().map(Definition::from);
        }

        let has_description = self.peek_description();
        let keyword_id = if has_description {
            self.lexer.lookahead()?
        } else {
            self.lexer.token_id()
        };
        let keyword = self.name_value(keyword_id);

        match keyword.as_deref() {
            Some("schema") => return self.parse_schema_definition().map(Definition::from),
            Some("scalar") => return self.parse_scalar_type_definition().map(Definition::from),
            Some("type") => return self.parse_object_type_definition().map(Definition::from),
            Some("interface") => {
                return self.parse_interface_type_definition().map(Definition::from);
            },
            Some("union") => return self.parse_union_type_definition().map(Definition::from),
            Some("enum") => return self.parse_enum_type_definition().map(Definition::from),
            Some("input") => {
                return self.parse_input_object_type_definition().map(Definition::from);
            },
            Some("directive") => {
                return self.parse_directive_definition().map(Definition::from);
            },
            _ => (),
        }

        if has_description && keyword.is_some() {
            return Err(GraphQLError::syntax(
                self.lexer.source(),
                self.lexer.token().start,
                "Unexpected description, descriptions are supported only on type definitions.",
                GraphQLErrorKind::UnexpectedDescription,
            ));
        }

        match keyword.as_deref() {
            Some("query" | "mutation" | "subscription") => {
                self.parse_operation_definition().map(Definition::from)
            },
            Some("fragment") => self.parse_fragment_definition().map(Definition::from),
            Some("extend") => self.parse_type_system_extension(),
            _ => Err(self.unexpected(Some(keyword_id))),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// ```text
    /// OperationDefinition :
    ///   - SelectionSet
    ///   - OperationType Name? VariableDefinitions? Directives? SelectionSet
    /// ```
    fn parse_operation_definition(&mut self) -> Result<Arc<OperationDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(Arc::new(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                loc: self.loc(start),
            }));
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek(GraphQLTokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Arc::new(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    /// `OperationType : one of query mutation subscription`
    fn parse_operation_type(&mut self) -> Result<OperationType, GraphQLError> {
        let token_id = self.expect_token(GraphQLTokenKind::Name)?;
        OperationType::from_keyword(self.lexer.get(token_id).value_str())
            .ok_or_else(|| self.unexpected(Some(token_id)))
    }

    /// `VariableDefinitions : ( VariableDefinition+ )`
    fn parse_variable_definitions(&mut self) -> Result<Vec<Arc<VariableDefinition>>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_variable_definition,
            GraphQLTokenKind::ParenClose,
        )
    }

    /// `VariableDefinition : Variable : Type DefaultValue? Directives[Const]?`
    fn parse_variable_definition(&mut self) -> Result<Arc<VariableDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let variable = self.parse_variable()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(GraphQLTokenKind::Equals)? {
            Some(self.parse_const_value_literal()?)
        } else {
            None
        };
        let directives = self.parse_const_directives()?;
        Ok(Arc::new(VariableDefinition {
            variable,
            ty,
            default_value,
            directives,
            loc: self.loc(start),
        }))
    }

    /// `Variable : $ Name`
    fn parse_variable(&mut self) -> Result<Arc<Variable>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_token(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Arc::new(Variable {
            name,
            loc: self.loc(start),
        }))
    }

    /// `SelectionSet : { Selection+ }`
    fn parse_selection_set(&mut self) -> Result<Arc<SelectionSet>, GraphQLError> {
        self.enter_nesting()?;
        let result = self.parse_selection_set_impl();
        self.exit_nesting();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<Arc<SelectionSet>, GraphQLError> {
        let start = self.lexer.token_id();
        let selections = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_selection,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(SelectionSet {
            selections,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// Selection :
    ///   - Field
    ///   - FragmentSpread
    ///   - InlineFragment
    /// ```
    fn parse_selection(&mut self) -> Result<Selection, GraphQLError> {
        if self.peek(GraphQLTokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            self.parse_field().map(Selection::from)
        }
    }

    /// `Field : Alias? Name Arguments? Directives? SelectionSet?`
    fn parse_field(&mut self) -> Result<Arc<Field>, GraphQLError> {
        let start = self.lexer.token_id();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.expect_optional_token(GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Arc::new(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    /// `Arguments[Const] : ( Argument[?Const]+ )`
    fn parse_arguments(&mut self, is_const: bool) -> Result<Vec<Arc<Argument>>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::ParenOpen,
            |parser| parser.parse_argument(is_const),
            GraphQLTokenKind::ParenClose,
        )
    }

    /// `Argument[Const] : Name : Value[?Const]`
    fn parse_argument(&mut self, is_const: bool) -> Result<Arc<Argument>, GraphQLError> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Arc::new(Argument {
            name,
            value,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Parses either a fragment spread or an inline fragment, both of
    /// which begin with `...`.
    ///
    /// ```text
    /// FragmentSpread : ... FragmentName Directives?
    /// InlineFragment : ... TypeCondition? Directives? SelectionSet
    /// ```
    fn parse_fragment(&mut self) -> Result<Selection, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_token(GraphQLTokenKind::Ellipsis)?;

        let has_type_condition = self.expect_optional_keyword("on")?;
        if !has_type_condition && self.peek(GraphQLTokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(Arc::new(FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            })));
        }

        let type_condition = if has_type_condition {
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(Arc::new(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })))
    }

    /// ```text
    /// FragmentDefinition :
    ///   - fragment FragmentName TypeCondition Directives? SelectionSet
    /// ```
    ///
    /// With `allow_legacy_fragment_variables`, `VariableDefinitions?` may
    /// follow the fragment name.
    fn parse_fragment_definition(&mut self) -> Result<Arc<FragmentDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        let variable_definitions = if self.options.allow_legacy_fragment_variables {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Arc::new(FragmentDefinition {
            name,
            variable_definitions,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    /// `FragmentName : Name but not on`
    fn parse_fragment_name(&mut self) -> Result<Arc<Name>, GraphQLError> {
        if self.peek_keyword("on") {
            return Err(self.unexpected(None));
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal. With `is_const`, variables are rejected.
    ///
    /// ```text
    /// Value[Const] :
    ///   - [~Const] Variable
    ///   - IntValue
    ///   - FloatValue
    ///   - StringValue
    ///   - BooleanValue
    ///   - NullValue
    ///   - EnumValue
    ///   - ListValue[?Const]
    ///   - ObjectValue[?Const]
    /// ```
    pub(crate) fn parse_value_literal(&mut self, is_const: bool) -> Result<Value, GraphQLError> {
        self.enter_nesting()?;
        let result = self.parse_value_literal_impl(is_const);
        self.exit_nesting();
        result
    }

    fn parse_value_literal_impl(&mut self, is_const: bool) -> Result<Value, GraphQLError> {
        let start = self.lexer.token_id();
        match self.lexer.token().kind {
            GraphQLTokenKind::SquareBracketOpen => self.parse_list(is_const).map(Value::from),
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object(is_const).map(Value::from),
            GraphQLTokenKind::Int => {
                self.advance_lexer()?;
                Ok(Value::Int(Arc::new(IntValue {
                    value: self.lexer.get(start).value_str().to_string(),
                    loc: self.loc(start),
                })))
            },
            GraphQLTokenKind::Float => {
                self.advance_lexer()?;
                Ok(Value::Float(Arc::new(FloatValue {
                    value: self.lexer.get(start).value_str().to_string(),
                    loc: self.loc(start),
                })))
            },
            GraphQLTokenKind::String | GraphQLTokenKind::BlockString => {
                self.parse_string_literal().map(Value::from)
            },
            GraphQLTokenKind::Name => {
                self.advance_lexer()?;
                let loc = self.loc(start);
                Ok(match self.lexer.get(start).value_str() {
                    "true" => Value::Boolean(Arc::new(BooleanValue { value: true, loc })),
                    "false" => Value::Boolean(Arc::new(BooleanValue { value: false, loc })),
                    "null" => Value::Null(Arc::new(NullValue { loc })),
                    value => Value::Enum(Arc::new(EnumValue {
                        value: value.to_string(),
                        loc,
                    })),
                })
            },
            GraphQLTokenKind::Dollar if is_const => {
                self.expect_token(GraphQLTokenKind::Dollar)?;
                match self.name_value(self.lexer.token_id()) {
                    Some(name) => Err(GraphQLError::syntax(
                        self.lexer.source(),
                        self.lexer.get(start).start,
                        format!("Unexpected variable \"${name}\" in constant value."),
                        GraphQLErrorKind::UnexpectedVariable { name },
                    )),
                    None => Err(self.unexpected(Some(start))),
                }
            },
            GraphQLTokenKind::Dollar => self.parse_variable().map(Value::from),
            _ => Err(self.unexpected(None)),
        }
    }

    pub(crate) fn parse_const_value_literal(&mut self) -> Result<Value, GraphQLError> {
        self.parse_value_literal(true)
    }

    fn parse_string_literal(&mut self) -> Result<Arc<StringValue>, GraphQLError> {
        let start = self.lexer.token_id();
        self.advance_lexer()?;
        let token = self.lexer.get(start);
        Ok(Arc::new(StringValue {
            value: token.value_str().to_string(),
            block: token.kind == GraphQLTokenKind::BlockString,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// ListValue[Const] :
    ///   - [ ]
    ///   - [ Value[?Const]+ ]
    /// ```
    fn parse_list(&mut self, is_const: bool) -> Result<Arc<ListValue>, GraphQLError> {
        let start = self.lexer.token_id();
        let values = self.any(
            GraphQLTokenKind::SquareBracketOpen,
            |parser| parser.parse_value_literal(is_const),
            GraphQLTokenKind::SquareBracketClose,
        )?;
        Ok(Arc::new(ListValue {
            values,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// ObjectValue[Const] :
    ///   - { }
    ///   - { ObjectField[?Const]+ }
    /// ```
    fn parse_object(&mut self, is_const: bool) -> Result<Arc<ObjectValue>, GraphQLError> {
        let start = self.lexer.token_id();
        let fields = self.any(
            GraphQLTokenKind::CurlyBraceOpen,
            |parser| parser.parse_object_field(is_const),
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(ObjectValue {
            fields,
            loc: self.loc(start),
        }))
    }

    /// `ObjectField[Const] : Name : Value[?Const]`
    fn parse_object_field(&mut self, is_const: bool) -> Result<Arc<ObjectField>, GraphQLError> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Arc::new(ObjectField {
            name,
            value,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Directives
    // =========================================================================

    /// `Directives[Const] : Directive[?Const]+`
    fn parse_directives(&mut self, is_const: bool) -> Result<Vec<Arc<Directive>>, GraphQLError> {
        let mut directives = Vec::new();
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_const_directives(&mut self) -> Result<Vec<Arc<Directive>>, GraphQLError> {
        self.parse_directives(true)
    }

    /// `Directive[Const] : @ Name Arguments[?Const]?`
    fn parse_directive(&mut self, is_const: bool) -> Result<Arc<Directive>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_token(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(Arc::new(Directive {
            name,
            arguments,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// ```text
    /// Type :
    ///   - NamedType
    ///   - ListType
    ///   - NonNullType
    /// ```
    pub(crate) fn parse_type_reference(&mut self) -> Result<Type, GraphQLError> {
        self.enter_nesting()?;
        let result = self.parse_type_reference_impl();
        self.exit_nesting();
        result
    }

    fn parse_type_reference_impl(&mut self) -> Result<Type, GraphQLError> {
        let start = self.lexer.token_id();
        let ty = if self.expect_optional_token(GraphQLTokenKind::SquareBracketOpen)? {
            let inner = self.parse_type_reference()?;
            self.expect_token(GraphQLTokenKind::SquareBracketClose)?;
            Type::List(Arc::new(ListType {
                ty: inner,
                loc: self.loc(start),
            }))
        } else {
            Type::Named(self.parse_named_type()?)
        };

        if self.expect_optional_token(GraphQLTokenKind::Bang)? {
            return Ok(Type::NonNull(Arc::new(NonNullType {
                ty,
                loc: self.loc(start),
            })));
        }
        Ok(ty)
    }

    /// `NamedType : Name`
    fn parse_named_type(&mut self) -> Result<Arc<NamedType>, GraphQLError> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        Ok(Arc::new(NamedType {
            name,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn peek_description(&self) -> bool {
        self.peek(GraphQLTokenKind::String) || self.peek(GraphQLTokenKind::BlockString)
    }

    /// `Description : StringValue`
    fn parse_description(&mut self) -> Result<Option<Arc<StringValue>>, GraphQLError> {
        if self.peek_description() {
            self.parse_string_literal().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `SchemaDefinition : Description? schema Directives[Const]? { RootOperationTypeDefinition+ }`
    fn parse_schema_definition(&mut self) -> Result<Arc<SchemaDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_const_directives()?;
        let operation_types = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(SchemaDefinition {
            description,
            directives,
            operation_types,
            loc: self.loc(start),
        }))
    }

    /// `RootOperationTypeDefinition : OperationType : NamedType`
    fn parse_operation_type_definition(
        &mut self,
    ) -> Result<Arc<OperationTypeDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let operation = self.parse_operation_type()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let ty = self.parse_named_type()?;
        Ok(Arc::new(OperationTypeDefinition {
            operation,
            ty,
            loc: self.loc(start),
        }))
    }

    /// `ScalarTypeDefinition : Description? scalar Name Directives[Const]?`
    fn parse_scalar_type_definition(&mut self) -> Result<Arc<ScalarTypeDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        Ok(Arc::new(ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// ObjectTypeDefinition :
    ///   Description? type Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
    /// ```
    fn parse_object_type_definition(&mut self) -> Result<Arc<ObjectTypeDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_fields_definition()?;
        Ok(Arc::new(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// ImplementsInterfaces :
    ///   - implements `&`? NamedType
    ///   - ImplementsInterfaces & NamedType
    /// ```
    fn parse_implements_interfaces(&mut self) -> Result<Vec<Arc<NamedType>>, GraphQLError> {
        if self.expect_optional_keyword("implements")? {
            self.delimited_many(GraphQLTokenKind::Ampersand, Self::parse_named_type)
        } else {
            Ok(Vec::new())
        }
    }

    /// `FieldsDefinition : { FieldDefinition+ }`
    fn parse_fields_definition(&mut self) -> Result<Vec<Arc<FieldDefinition>>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )
    }

    /// `FieldDefinition : Description? Name ArgumentsDefinition? : Type Directives[Const]?`
    fn parse_field_definition(&mut self) -> Result<Arc<FieldDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_const_directives()?;
        Ok(Arc::new(FieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(start),
        }))
    }

    /// `ArgumentsDefinition : ( InputValueDefinition+ )`
    fn parse_argument_defs(&mut self) -> Result<Vec<Arc<InputValueDefinition>>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_input_value_def,
            GraphQLTokenKind::ParenClose,
        )
    }

    /// ```text
    /// InputValueDefinition :
    ///   Description? Name : Type DefaultValue? Directives[Const]?
    /// ```
    fn parse_input_value_def(&mut self) -> Result<Arc<InputValueDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(GraphQLTokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(GraphQLTokenKind::Equals)? {
            Some(self.parse_const_value_literal()?)
        } else {
            None
        };
        let directives = self.parse_const_directives()?;
        Ok(Arc::new(InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// InterfaceTypeDefinition :
    ///   Description? interface Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
    /// ```
    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<Arc<InterfaceTypeDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_fields_definition()?;
        Ok(Arc::new(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    /// `UnionTypeDefinition : Description? union Name Directives[Const]? UnionMemberTypes?`
    fn parse_union_type_definition(&mut self) -> Result<Arc<UnionTypeDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let types = self.parse_union_member_types()?;
        Ok(Arc::new(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// UnionMemberTypes :
    ///   - = `|`? NamedType
    ///   - UnionMemberTypes | NamedType
    /// ```
    fn parse_union_member_types(&mut self) -> Result<Vec<Arc<NamedType>>, GraphQLError> {
        if self.expect_optional_token(GraphQLTokenKind::Equals)? {
            self.delimited_many(GraphQLTokenKind::Pipe, Self::parse_named_type)
        } else {
            Ok(Vec::new())
        }
    }

    /// `EnumTypeDefinition : Description? enum Name Directives[Const]? EnumValuesDefinition?`
    fn parse_enum_type_definition(&mut self) -> Result<Arc<EnumTypeDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let values = self.parse_enum_values_definition()?;
        Ok(Arc::new(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: self.loc(start),
        }))
    }

    /// `EnumValuesDefinition : { EnumValueDefinition+ }`
    fn parse_enum_values_definition(
        &mut self,
    ) -> Result<Vec<Arc<EnumValueDefinition>>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_enum_value_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )
    }

    /// `EnumValueDefinition : Description? EnumValue Directives[Const]?`
    fn parse_enum_value_definition(&mut self) -> Result<Arc<EnumValueDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        let name = self.parse_enum_value_name()?;
        let directives = self.parse_const_directives()?;
        Ok(Arc::new(EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        }))
    }

    /// `EnumValue : Name but not true, false or null`
    fn parse_enum_value_name(&mut self) -> Result<Arc<Name>, GraphQLError> {
        let token = self.lexer.token();
        if let Some(name @ ("true" | "false" | "null")) = token.value.as_deref() {
            return Err(GraphQLError::syntax(
                self.lexer.source(),
                token.start,
                format!(
                    "{} is reserved and cannot be used for an enum value.",
                    token.description(),
                ),
                GraphQLErrorKind::ReservedName {
                    name: name.to_string(),
                },
            ));
        }
        self.parse_name()
    }

    /// ```text
    /// InputObjectTypeDefinition :
    ///   Description? input Name Directives[Const]? InputFieldsDefinition?
    /// ```
    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<Arc<InputObjectTypeDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_input_fields_definition()?;
        Ok(Arc::new(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    /// `InputFieldsDefinition : { InputValueDefinition+ }`
    fn parse_input_fields_definition(
        &mut self,
    ) -> Result<Vec<Arc<InputValueDefinition>>, GraphQLError> {
        self.optional_many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_input_value_def,
            GraphQLTokenKind::CurlyBraceClose,
        )
    }

    /// ```text
    /// DirectiveDefinition :
    ///   Description? directive @ Name ArgumentsDefinition? `repeatable`? on DirectiveLocations
    /// ```
    fn parse_directive_definition(&mut self) -> Result<Arc<DirectiveDefinition>, GraphQLError> {
        let start = self.lexer.token_id();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect_token(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let repeatable = self.expect_optional_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(Arc::new(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// DirectiveLocations :
    ///   - `|`? DirectiveLocation
    ///   - DirectiveLocations | DirectiveLocation
    /// ```
    fn parse_directive_locations(&mut self) -> Result<Vec<Arc<Name>>, GraphQLError> {
        self.delimited_many(GraphQLTokenKind::Pipe, Self::parse_directive_location)
    }

    /// A `Name` that is one of the [`DirectiveLocation`] names.
    fn parse_directive_location(&mut self) -> Result<Arc<Name>, GraphQLError> {
        let start = self.lexer.token_id();
        let name = self.parse_name()?;
        if DirectiveLocation::from_name(&name.value).is_some() {
            return Ok(name);
        }
        let token = self.lexer.get(start);
        Err(GraphQLError::syntax(
            self.lexer.source(),
            token.start,
            format!("Unexpected {}.", token.description()),
            GraphQLErrorKind::InvalidDirectiveLocation {
                name: name.value.clone(),
            },
        ))
    }

    // =========================================================================
    // Type system extensions
    // =========================================================================

    /// Dispatches on the keyword following `extend`.
    fn parse_type_system_extension(&mut self) -> Result<Definition, GraphQLError> {
        let keyword_id = self.lexer.lookahead()?;
        match self.name_value(keyword_id).as_deref() {
            Some("schema") => self.parse_schema_extension().map(Definition::from),
            Some("scalar") => self.parse_scalar_type_extension().map(Definition::from),
            Some("type") => self.parse_object_type_extension().map(Definition::from),
            Some("interface") => self.parse_interface_type_extension().map(Definition::from),
            Some("union") => self.parse_union_type_extension().map(Definition::from),
            Some("enum") => self.parse_enum_type_extension().map(Definition::from),
            Some("input") => self.parse_input_object_type_extension().map(Definition::from),
            _ => Err(self.unexpected(Some(keyword_id))),
        }
    }

    /// ```text
    /// SchemaExtension :
    ///   - extend schema Directives[Const]? { RootOperationTypeDefinition+ }
    ///   - extend schema Directives[Const]
    /// ```
    fn parse_schema_extension(&mut self) -> Result<Arc<SchemaExtension>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("schema")?;
        let directives = self.parse_const_directives()?;
        let operation_types = self.optional_many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        if directives.is_empty() && operation_types.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(Arc::new(SchemaExtension {
            directives,
            operation_types,
            loc: self.loc(start),
        }))
    }

    /// `ScalarTypeExtension : extend scalar Name Directives[Const]`
    fn parse_scalar_type_extension(&mut self) -> Result<Arc<ScalarTypeExtension>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        if directives.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(Arc::new(ScalarTypeExtension {
            name,
            directives,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// ObjectTypeExtension :
    ///   - extend type Name ImplementsInterfaces? Directives[Const]? FieldsDefinition
    ///   - extend type Name ImplementsInterfaces? Directives[Const]
    ///   - extend type Name ImplementsInterfaces
    /// ```
    fn parse_object_type_extension(&mut self) -> Result<Arc<ObjectTypeExtension>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(Arc::new(ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    /// Same shapes as [`parse_object_type_extension`](Self::parse_object_type_extension),
    /// introduced by `extend interface`.
    fn parse_interface_type_extension(
        &mut self,
    ) -> Result<Arc<InterfaceTypeExtension>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(Arc::new(InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// UnionTypeExtension :
    ///   - extend union Name Directives[Const]? UnionMemberTypes
    ///   - extend union Name Directives[Const]
    /// ```
    fn parse_union_type_extension(&mut self) -> Result<Arc<UnionTypeExtension>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let types = self.parse_union_member_types()?;
        if directives.is_empty() && types.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(Arc::new(UnionTypeExtension {
            name,
            directives,
            types,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// EnumTypeExtension :
    ///   - extend enum Name Directives[Const]? EnumValuesDefinition
    ///   - extend enum Name Directives[Const]
    /// ```
    fn parse_enum_type_extension(&mut self) -> Result<Arc<EnumTypeExtension>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let values = self.parse_enum_values_definition()?;
        if directives.is_empty() && values.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(Arc::new(EnumTypeExtension {
            name,
            directives,
            values,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// InputObjectTypeExtension :
    ///   - extend input Name Directives[Const]? InputFieldsDefinition
    ///   - extend input Name Directives[Const]
    /// ```
    fn parse_input_object_type_extension(
        &mut self,
    ) -> Result<Arc<InputObjectTypeExtension>, GraphQLError> {
        let start = self.lexer.token_id();
        self.expect_keyword("extend")?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_const_directives()?;
        let fields = self.parse_input_fields_definition()?;
        if directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(Arc::new(InputObjectTypeExtension {
            name,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// `Name`
    fn parse_name(&mut self) -> Result<Arc<Name>, GraphQLError> {
        let start = self.expect_token(GraphQLTokenKind::Name)?;
        Ok(Arc::new(Name {
            value: self.lexer.get(start).value_str().to_string(),
            loc: self.loc(start),
        }))
    }

    /// Whether the current token is of the given kind.
    fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.lexer.token().kind == kind
    }

    /// Whether the current token is the `Name` `keyword`.
    fn peek_keyword(&self, keyword: &str) -> bool {
        let token = self.lexer.token();
        token.kind == GraphQLTokenKind::Name && token.value_str() == keyword
    }

    /// The value of the token `id` if it is a `Name`.
    fn name_value(&self, id: TokenId) -> Option<String> {
        let token = self.lexer.get(id);
        (token.kind == GraphQLTokenKind::Name).then(|| token.value_str().to_string())
    }

    /// Consumes the current token if it is of kind `kind` and returns it;
    /// otherwise fails with `Expected <kind>, found <token>.`.
    pub(crate) fn expect_token(&mut self, kind: GraphQLTokenKind) -> Result<TokenId, GraphQLError> {
        let token_id = self.lexer.token_id();
        if self.peek(kind) {
            self.advance_lexer()?;
            return Ok(token_id);
        }
        Err(self.expected(kind.description()))
    }

    /// Consumes the current token if it is of kind `kind`. Returns whether
    /// it did.
    fn expect_optional_token(&mut self, kind: GraphQLTokenKind) -> Result<bool, GraphQLError> {
        if self.peek(kind) {
            self.advance_lexer()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the `Name` `keyword`, or fails with
    /// `Expected "<keyword>", found <token>.`.
    fn expect_keyword(&mut self, keyword: &str) -> Result<(), GraphQLError> {
        if self.peek_keyword(keyword) {
            return self.advance_lexer();
        }
        Err(self.expected(format!("\"{keyword}\"")))
    }

    /// Consumes the `Name` `keyword` if it is the current token. Returns
    /// whether it did.
    fn expect_optional_keyword(&mut self, keyword: &str) -> Result<bool, GraphQLError> {
        if self.peek_keyword(keyword) {
            self.advance_lexer()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expected(&self, expected: String) -> GraphQLError {
        let token = self.lexer.token();
        let found = token.description();
        GraphQLError::syntax(
            self.lexer.source(),
            token.start,
            format!("Expected {expected}, found {found}."),
            GraphQLErrorKind::ExpectedToken { expected, found },
        )
    }

    /// An `Unexpected <token>.` error at `at_token`, or at the current
    /// token when `None`.
    fn unexpected(&self, at_token: Option<TokenId>) -> GraphQLError {
        let token = match at_token {
            Some(id) => self.lexer.get(id),
            None => self.lexer.token(),
        };
        let found = token.description();
        GraphQLError::syntax(
            self.lexer.source(),
            token.start,
            format!("Unexpected {found}."),
            GraphQLErrorKind::UnexpectedToken { found },
        )
    }

    // =========================================================================
    // List productions
    // =========================================================================

    /// `open item* close`: zero or more items.
    fn any<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect_token(open)?;
        let mut items = Vec::new();
        while !self.expect_optional_token(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// `(open item+ close)?`: an empty list when `open` is absent, one or
    /// more items otherwise.
    fn optional_many<T>(
        &mut self,
        open: GraphQLTokenKind,
        parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        if !self.peek(open) {
            return Ok(Vec::new());
        }
        self.many(open, parse_item, close)
    }

    /// `open item+ close`: one or more items.
    fn many<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect_token(open)?;
        let mut items = Vec::new();
        loop {
            items.push(parse_item(self)?);
            if self.expect_optional_token(close)? {
                return Ok(items);
            }
        }
    }

    /// `delimiter? item (delimiter item)*`
    fn delimited_many<T>(
        &mut self,
        delimiter: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLError>,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect_optional_token(delimiter)?;
        let mut items = Vec::new();
        loop {
            items.push(parse_item(self)?);
            if !self.expect_optional_token(delimiter)? {
                return Ok(items);
            }
        }
    }

    // =========================================================================
    // Lexer plumbing
    // =========================================================================

    /// Advances the lexer, enforcing `max_tokens`.
    fn advance_lexer(&mut self) -> Result<(), GraphQLError> {
        let token_id = self.lexer.advance()?;
        let token = self.lexer.get(token_id);
        if token.kind == GraphQLTokenKind::Eof {
            return Ok(());
        }
        self.token_count += 1;
        if let Some(max_tokens) = self.options.max_tokens {
            if self.token_count > max_tokens {
                log::debug!(
                    "aborting parse of `{}` after {max_tokens} tokens",
                    self.lexer.source().name(),
                );
                return Err(GraphQLError::syntax(
                    self.lexer.source(),
                    token.start,
                    format!("Document contains more than {max_tokens} tokens. Parsing aborted."),
                    GraphQLErrorKind::TokenLimitExceeded { max_tokens },
                ));
            }
        }
        Ok(())
    }

    /// Increments the nesting depth, failing if it exceeds `max_depth`.
    /// Every successful call must be paired with
    /// [`exit_nesting()`](Self::exit_nesting).
    fn enter_nesting(&mut self) -> Result<(), GraphQLError> {
        if let Some(max_depth) = self.options.max_depth {
            if self.depth >= max_depth {
                return Err(GraphQLError::syntax(
                    self.lexer.source(),
                    self.lexer.token().start,
                    format!("Document nests deeper than {max_depth} levels. Parsing aborted."),
                    GraphQLErrorKind::NestingLimitExceeded { max_depth },
                ));
            }
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    /// The location spanning from `start` to the last consumed token,
    /// unless `no_location` is set.
    fn loc(&self, start: TokenId) -> Option<Location> {
        if self.options.no_location {
            return None;
        }
        Some(Location::new(
            self.lexer.get(start).clone(),
            self.lexer.last_token().clone(),
            Arc::clone(self.lexer.source()),
        ))
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Parses `source` as a complete GraphQL document.
///
/// # Example
///
/// ```
/// use libgraphql_language::parse;
/// use libgraphql_language::ParseOptions;
///
/// let doc = parse("query Q { a }", ParseOptions::default()).unwrap();
/// assert_eq!(doc.definitions.len(), 1);
///
/// let error = parse("query Q {", ParseOptions::default()).unwrap_err();
/// assert_eq!(error.message(), "Syntax Error: Expected Name, found <EOF>.");
/// ```
pub fn parse(source: impl IntoSource, options: ParseOptions) -> Result<Document, GraphQLError> {
    GraphQLParser::new(source, options).parse_document()
}

/// Parses `source` as a single value literal, e.g. `[1, $v, { a: "b" }]`.
/// Variables are allowed.
pub fn parse_value(source: impl IntoSource, options: ParseOptions) -> Result<Value, GraphQLError> {
    let mut parser = GraphQLParser::new(source, options);
    parser.expect_token(GraphQLTokenKind::Sof)?;
    let value = parser.parse_value_literal(false)?;
    parser.expect_token(GraphQLTokenKind::Eof)?;
    Ok(value)
}

/// Like [`parse_value`], but rejects variables.
pub fn parse_const_value(
    source: impl IntoSource,
    options: ParseOptions,
) -> Result<Value, GraphQLError> {
    let mut parser = GraphQLParser::new(source, options);
    parser.expect_token(GraphQLTokenKind::Sof)?;
    let value = parser.parse_const_value_literal()?;
    parser.expect_token(GraphQLTokenKind::Eof)?;
    Ok(value)
}

/// Parses `source` as a type reference, e.g. `[String!]!`.
pub fn parse_type(source: impl IntoSource, options: ParseOptions) -> Result<Type, GraphQLError> {
    let mut parser = GraphQLParser::new(source, options);
    parser.expect_token(GraphQLTokenKind::Sof)?;
    let ty = parser.parse_type_reference()?;
    parser.expect_token(GraphQLTokenKind::Eof)?;
    Ok(ty)
}
