//! Syntax kinds for the Rowan-based Java CST
//!
//! The tree is produced by an external parser/resolver adapter; this enum is
//! the contract between that adapter and the extractor. Only the node kinds
//! the extractor dispatches on carry meaning, everything else is walked
//! generically.

/// All syntax kinds (tokens and nodes) of the Java CST
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation, comments).
/// Nodes are composite (classes, methods, statements, references).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,  // // ...
    BLOCK_COMMENT, // /* ... */ and /** ... */

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    INT_LITERAL,
    FLOAT_LITERAL,
    CHAR_LITERAL,
    STRING_LITERAL,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACKET,   // [
    R_BRACKET,   // ]
    L_PAREN,     // (
    R_PAREN,     // )
    SEMICOLON,   // ;
    COLON,       // :
    COMMA,       // ,
    DOT,         // .
    ELLIPSIS,    // ...
    EQ,          // =
    LT,          // <
    GT,          // >
    AT,          // @
    QUESTION,    // ?
    PIPE,        // | (multi-catch)
    AMP,         // & (intersection bounds)
    ARROW,       // ->
    COLON_COLON, // ::
    OPERATOR,    // any other operator (+, -, ==, +=, ...)

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    PACKAGE_KW,
    IMPORT_KW,
    CLASS_KW,
    INTERFACE_KW,
    ENUM_KW,
    EXTENDS_KW,
    IMPLEMENTS_KW,
    THROWS_KW,
    PUBLIC_KW,
    PROTECTED_KW,
    PRIVATE_KW,
    STATIC_KW,
    FINAL_KW,
    ABSTRACT_KW,
    SYNCHRONIZED_KW,
    NATIVE_KW,
    TRANSIENT_KW,
    VOLATILE_KW,
    // primitive types
    VOID_KW,
    BOOLEAN_KW,
    BYTE_KW,
    CHAR_KW,
    SHORT_KW,
    INT_KW,
    LONG_KW,
    FLOAT_KW,
    DOUBLE_KW,
    // statements and expressions
    NEW_KW,
    RETURN_KW,
    IF_KW,
    ELSE_KW,
    FOR_KW,
    WHILE_KW,
    DO_KW,
    TRY_KW,
    CATCH_KW,
    FINALLY_KW,
    THROW_KW,
    SWITCH_KW,
    CASE_KW,
    DEFAULT_KW,
    BREAK_KW,
    CONTINUE_KW,
    THIS_KW,
    SUPER_KW,
    NULL_KW,
    TRUE_KW,
    FALSE_KW,
    INSTANCEOF_KW,

    // =========================================================================
    // NODES: file level
    // =========================================================================
    SOURCE_FILE,
    PACKAGE_STATEMENT,
    IMPORT_STATEMENT,

    // =========================================================================
    // NODES: declarations
    // =========================================================================
    CLASS,               // class, interface, enum or annotation type
    MODIFIER_LIST,
    ANNOTATION,
    TYPE_PARAMETER_LIST,
    TYPE_PARAMETER,
    EXTENDS_LIST,
    IMPLEMENTS_LIST,
    FIELD,               // one declarator per node
    ENUM_CONSTANT,
    METHOD,              // methods and constructors
    PARAMETER_LIST,
    PARAMETER,
    THROWS_LIST,
    CLASS_INITIALIZER,

    // =========================================================================
    // NODES: types and references
    // =========================================================================
    TYPE,                // type element: primitive, reference, array, wildcard, union
    TYPE_ARGUMENT_LIST,
    REFERENCE,           // [qualifier .] name [type arguments]

    // =========================================================================
    // NODES: statements
    // =========================================================================
    CODE_BLOCK,
    DECLARATION_STATEMENT,
    LOCAL_VARIABLE,      // one declarator per node
    EXPRESSION_STATEMENT,
    RETURN_STATEMENT,
    IF_STATEMENT,
    FOR_STATEMENT,
    FOREACH_STATEMENT,
    WHILE_STATEMENT,
    DO_WHILE_STATEMENT,
    TRY_STATEMENT,
    CATCH_SECTION,
    THROW_STATEMENT,
    SWITCH_STATEMENT,
    LABELED_STATEMENT,
    BREAK_STATEMENT,
    CONTINUE_STATEMENT,

    // =========================================================================
    // NODES: expressions
    // =========================================================================
    EXPRESSION,          // any expression without a dedicated kind
    METHOD_CALL,
    ARGUMENT_LIST,
    NEW_EXPRESSION,
    ANONYMOUS_CLASS,
    LAMBDA,
    CAST_EXPRESSION,
    LITERAL,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::PACKAGE_KW as u16) && (self as u16) <= (Self::INSTANCEOF_KW as u16)
    }

    /// Check if this is a primitive type keyword (`void` included)
    pub fn is_primitive_type(self) -> bool {
        (self as u16) >= (Self::VOID_KW as u16) && (self as u16) <= (Self::DOUBLE_KW as u16)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaLanguage {}

impl rowan::Language for JavaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<JavaLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<JavaLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<JavaLanguage>;
