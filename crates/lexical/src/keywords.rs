//! Reserved-word tables for the built-in C-family lexer.

use phf::phf_map;

use crate::category::Category;

pub(crate) static C_WORDS: phf::Map<&'static str, Category> = phf_map! {
    "auto" => Category::Keyword,
    "break" => Category::Keyword,
    "case" => Category::Keyword,
    "continue" => Category::Keyword,
    "default" => Category::Keyword,
    "do" => Category::Keyword,
    "else" => Category::Keyword,
    "for" => Category::Keyword,
    "goto" => Category::Keyword,
    "if" => Category::Keyword,
    "return" => Category::Keyword,
    "sizeof" => Category::Keyword,
    "switch" => Category::Keyword,
    "while" => Category::Keyword,
    "asm" => Category::Keyword,
    "_Alignof" => Category::Keyword,
    "_Generic" => Category::Keyword,
    "_Static_assert" => Category::Keyword,

    "const" => Category::KeywordDeclaration,
    "enum" => Category::KeywordDeclaration,
    "extern" => Category::KeywordDeclaration,
    "inline" => Category::KeywordDeclaration,
    "register" => Category::KeywordDeclaration,
    "restrict" => Category::KeywordDeclaration,
    "static" => Category::KeywordDeclaration,
    "struct" => Category::KeywordDeclaration,
    "typedef" => Category::KeywordDeclaration,
    "union" => Category::KeywordDeclaration,
    "volatile" => Category::KeywordDeclaration,
    "_Alignas" => Category::KeywordDeclaration,
    "_Atomic" => Category::KeywordDeclaration,
    "_Noreturn" => Category::KeywordDeclaration,
    "_Thread_local" => Category::KeywordDeclaration,

    "char" => Category::KeywordType,
    "double" => Category::KeywordType,
    "float" => Category::KeywordType,
    "int" => Category::KeywordType,
    "long" => Category::KeywordType,
    "short" => Category::KeywordType,
    "signed" => Category::KeywordType,
    "unsigned" => Category::KeywordType,
    "void" => Category::KeywordType,
    "bool" => Category::KeywordType,
    "_Bool" => Category::KeywordType,
    "_Complex" => Category::KeywordType,
    "size_t" => Category::KeywordType,
    "ssize_t" => Category::KeywordType,
    "ptrdiff_t" => Category::KeywordType,
    "wchar_t" => Category::KeywordType,
    "off_t" => Category::KeywordType,
    "FILE" => Category::KeywordType,
    "va_list" => Category::KeywordType,
    "int8_t" => Category::KeywordType,
    "int16_t" => Category::KeywordType,
    "int32_t" => Category::KeywordType,
    "int64_t" => Category::KeywordType,
    "uint8_t" => Category::KeywordType,
    "uint16_t" => Category::KeywordType,
    "uint32_t" => Category::KeywordType,
    "uint64_t" => Category::KeywordType,
    "intptr_t" => Category::KeywordType,
    "uintptr_t" => Category::KeywordType,

    "NULL" => Category::KeywordConstant,
    "true" => Category::KeywordConstant,
    "false" => Category::KeywordConstant,
};

pub(crate) static CPP_WORDS: phf::Map<&'static str, Category> = phf_map! {
    "auto" => Category::Keyword,
    "break" => Category::Keyword,
    "case" => Category::Keyword,
    "catch" => Category::Keyword,
    "continue" => Category::Keyword,
    "default" => Category::Keyword,
    "delete" => Category::Keyword,
    "do" => Category::Keyword,
    "else" => Category::Keyword,
    "for" => Category::Keyword,
    "goto" => Category::Keyword,
    "if" => Category::Keyword,
    "new" => Category::Keyword,
    "return" => Category::Keyword,
    "sizeof" => Category::Keyword,
    "switch" => Category::Keyword,
    "throw" => Category::Keyword,
    "try" => Category::Keyword,
    "while" => Category::Keyword,
    "asm" => Category::Keyword,
    "alignof" => Category::Keyword,
    "decltype" => Category::Keyword,
    "noexcept" => Category::Keyword,
    "static_assert" => Category::Keyword,
    "typeid" => Category::Keyword,
    "static_cast" => Category::Keyword,
    "dynamic_cast" => Category::Keyword,
    "const_cast" => Category::Keyword,
    "reinterpret_cast" => Category::Keyword,
    "operator" => Category::Keyword,
    "co_await" => Category::Keyword,
    "co_return" => Category::Keyword,
    "co_yield" => Category::Keyword,

    "alignas" => Category::KeywordDeclaration,
    "class" => Category::KeywordDeclaration,
    "const" => Category::KeywordDeclaration,
    "constexpr" => Category::KeywordDeclaration,
    "consteval" => Category::KeywordDeclaration,
    "constinit" => Category::KeywordDeclaration,
    "enum" => Category::KeywordDeclaration,
    "explicit" => Category::KeywordDeclaration,
    "export" => Category::KeywordDeclaration,
    "extern" => Category::KeywordDeclaration,
    "final" => Category::KeywordDeclaration,
    "friend" => Category::KeywordDeclaration,
    "inline" => Category::KeywordDeclaration,
    "mutable" => Category::KeywordDeclaration,
    "override" => Category::KeywordDeclaration,
    "private" => Category::KeywordDeclaration,
    "protected" => Category::KeywordDeclaration,
    "public" => Category::KeywordDeclaration,
    "register" => Category::KeywordDeclaration,
    "static" => Category::KeywordDeclaration,
    "struct" => Category::KeywordDeclaration,
    "template" => Category::KeywordDeclaration,
    "thread_local" => Category::KeywordDeclaration,
    "typedef" => Category::KeywordDeclaration,
    "typename" => Category::KeywordDeclaration,
    "union" => Category::KeywordDeclaration,
    "virtual" => Category::KeywordDeclaration,
    "volatile" => Category::KeywordDeclaration,

    "namespace" => Category::KeywordNamespace,
    "using" => Category::KeywordNamespace,

    "bool" => Category::KeywordType,
    "char" => Category::KeywordType,
    "char8_t" => Category::KeywordType,
    "char16_t" => Category::KeywordType,
    "char32_t" => Category::KeywordType,
    "double" => Category::KeywordType,
    "float" => Category::KeywordType,
    "int" => Category::KeywordType,
    "long" => Category::KeywordType,
    "short" => Category::KeywordType,
    "signed" => Category::KeywordType,
    "unsigned" => Category::KeywordType,
    "void" => Category::KeywordType,
    "wchar_t" => Category::KeywordType,
    "size_t" => Category::KeywordType,
    "ptrdiff_t" => Category::KeywordType,
    "int8_t" => Category::KeywordType,
    "int16_t" => Category::KeywordType,
    "int32_t" => Category::KeywordType,
    "int64_t" => Category::KeywordType,
    "uint8_t" => Category::KeywordType,
    "uint16_t" => Category::KeywordType,
    "uint32_t" => Category::KeywordType,
    "uint64_t" => Category::KeywordType,

    "NULL" => Category::KeywordConstant,
    "nullptr" => Category::KeywordConstant,
    "true" => Category::KeywordConstant,
    "false" => Category::KeywordConstant,

    "this" => Category::KeywordPseudo,

    "and" => Category::OperatorWord,
    "or" => Category::OperatorWord,
    "not" => Category::OperatorWord,
    "xor" => Category::OperatorWord,
    "bitand" => Category::OperatorWord,
    "bitor" => Category::OperatorWord,
    "compl" => Category::OperatorWord,
    "and_eq" => Category::OperatorWord,
    "or_eq" => Category::OperatorWord,
    "xor_eq" => Category::OperatorWord,
    "not_eq" => Category::OperatorWord,
};

pub(crate) static JAVA_WORDS: phf::Map<&'static str, Category> = phf_map! {
    "assert" => Category::Keyword,
    "break" => Category::Keyword,
    "case" => Category::Keyword,
    "catch" => Category::Keyword,
    "continue" => Category::Keyword,
    "default" => Category::Keyword,
    "do" => Category::Keyword,
    "else" => Category::Keyword,
    "finally" => Category::Keyword,
    "for" => Category::Keyword,
    "goto" => Category::Keyword,
    "if" => Category::Keyword,
    "instanceof" => Category::Keyword,
    "new" => Category::Keyword,
    "return" => Category::Keyword,
    "switch" => Category::Keyword,
    "throw" => Category::Keyword,
    "try" => Category::Keyword,
    "while" => Category::Keyword,
    "yield" => Category::Keyword,

    "abstract" => Category::KeywordDeclaration,
    "class" => Category::KeywordDeclaration,
    "const" => Category::KeywordDeclaration,
    "enum" => Category::KeywordDeclaration,
    "extends" => Category::KeywordDeclaration,
    "final" => Category::KeywordDeclaration,
    "implements" => Category::KeywordDeclaration,
    "interface" => Category::KeywordDeclaration,
    "native" => Category::KeywordDeclaration,
    "private" => Category::KeywordDeclaration,
    "protected" => Category::KeywordDeclaration,
    "public" => Category::KeywordDeclaration,
    "record" => Category::KeywordDeclaration,
    "static" => Category::KeywordDeclaration,
    "strictfp" => Category::KeywordDeclaration,
    "super" => Category::KeywordDeclaration,
    "synchronized" => Category::KeywordDeclaration,
    "throws" => Category::KeywordDeclaration,
    "transient" => Category::KeywordDeclaration,
    "volatile" => Category::KeywordDeclaration,

    "import" => Category::KeywordNamespace,
    "package" => Category::KeywordNamespace,

    "boolean" => Category::KeywordType,
    "byte" => Category::KeywordType,
    "char" => Category::KeywordType,
    "double" => Category::KeywordType,
    "float" => Category::KeywordType,
    "int" => Category::KeywordType,
    "long" => Category::KeywordType,
    "short" => Category::KeywordType,
    "var" => Category::KeywordType,
    "void" => Category::KeywordType,

    "true" => Category::KeywordConstant,
    "false" => Category::KeywordConstant,
    "null" => Category::KeywordConstant,

    "this" => Category::KeywordPseudo,
};
