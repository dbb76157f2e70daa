//! Edge case tests for torqc-lex

#[cfg(test)]
mod tests {
    use crate::{LexError, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(Token::into_kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![TokenKind::Identifier("x".to_string())]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1", name));
        assert_eq!(t[0], TokenKind::Identifier(name));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_hex_bounds() {
        let t = lex_all("0x0 0xFF 0x7FFF_FFFF_FFFF_FFFF");
        assert_eq!(
            t,
            vec![
                TokenKind::Integer(0),
                TokenKind::Integer(255),
                TokenKind::Integer(i64::MAX),
            ]
        );
    }

    #[test]
    fn test_edge_uppercase_prefix_is_not_hex() {
        assert_eq!(
            lex_all("0X1"),
            vec![TokenKind::Integer(0), TokenKind::Identifier("X1".to_string())]
        );
    }

    #[test]
    fn test_edge_no_octal() {
        assert_eq!(lex_all("007"), vec![TokenKind::Integer(7)]);
        assert_eq!(
            lex_all("0o7"),
            vec![TokenKind::Integer(0), TokenKind::Identifier("o7".to_string())]
        );
    }

    #[test]
    fn test_edge_leading_dot_is_not_float() {
        assert_eq!(lex_all(".5"), vec![TokenKind::Dot, TokenKind::Integer(5)]);
    }

    #[test]
    fn test_edge_underscore_separators() {
        assert_eq!(lex_all("1_2.5_0"), vec![TokenKind::Float(12.5)]);
        assert_eq!(lex_all("1__"), vec![TokenKind::Integer(1)]);
    }

    #[test]
    fn test_edge_multi_digit_exponents() {
        assert_eq!(
            lex_all("1e10 1.5e-3 6E+023"),
            vec![
                TokenKind::Float(1e10),
                TokenKind::Float(1.5e-3),
                TokenKind::Float(6e23),
            ]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("(([]))");
        assert_eq!(t.iter().filter(|x| **x == TokenKind::LParen).count(), 2);
        assert_eq!(t.iter().filter(|x| **x == TokenKind::RBracket).count(), 1);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(
            lex_all("Fn fn"),
            vec![TokenKind::Identifier("Fn".to_string()), TokenKind::Fn]
        );
    }

    #[test]
    fn test_edge_bools() {
        assert_eq!(lex_all("true false"), vec![TokenKind::True, TokenKind::False]);
    }

    #[test]
    fn test_edge_type_keywords() {
        assert_eq!(
            lex_all("int float string"),
            vec![TokenKind::IntType, TokenKind::FloatType, TokenKind::StringType]
        );
    }

    #[test]
    fn test_edge_consecutive_ops() {
        assert_eq!(
            lex_all("+++"),
            vec![TokenKind::Plus, TokenKind::Plus, TokenKind::Plus]
        );
        assert_eq!(lex_all("<=="), vec![TokenKind::LtEq, TokenKind::Assign]);
        assert_eq!(lex_all("!!="), vec![TokenKind::Bang, TokenKind::NotEq]);
    }

    #[test]
    fn test_edge_whitespace_variations() {
        assert_eq!(
            lex_all("x\t=\x0c1\n"),
            vec![
                TokenKind::Identifier("x".to_string()),
                TokenKind::Assign,
                TokenKind::Integer(1),
                TokenKind::Endl,
            ]
        );
    }

    #[test]
    fn test_edge_string_with_hash() {
        assert_eq!(
            lex_all("\"# not a comment\""),
            vec![TokenKind::String("# not a comment".to_string())]
        );
    }

    #[test]
    fn test_edge_column_never_resets() {
        let tokens = Lexer::new("ab\ncd").tokenize();
        let columns: Vec<u32> = tokens.iter().map(Token::column).collect();
        assert_eq!(columns, vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_edge_multi_line_string_then_tokens() {
        let mut lexer = Lexer::new("\"\"\"x\ny\"\"\" z");
        assert_eq!(lexer.next_token().text(), Some("x\ny"));
        let z = lexer.next_token();
        assert_eq!(z.kind(), &TokenKind::Identifier("z".to_string()));
        assert_eq!(z.line(), 2);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_invalid_hex() {
        let t = Lexer::new("0x").next_token();
        assert_eq!(t.error(), Some(&LexError::InvalidHexLiteral));
    }

    #[test]
    fn test_err_invalid_binary() {
        let t = Lexer::new("0b").next_token();
        assert_eq!(t.error(), Some(&LexError::InvalidBinaryLiteral));
    }

    #[test]
    fn test_err_unterminated_string() {
        let mut lexer = Lexer::new("\"unterminated");
        let t = lexer.next_token();
        assert_eq!(t.error(), Some(&LexError::UnterminatedString));
        assert!(lexer.handler().has_errors());
        assert!(lexer.next_token().is_eos());
    }

    #[test]
    fn test_err_invalid_chars() {
        let t = lex_all("@$&|");
        assert_eq!(t.len(), 4);
        assert!(t.iter().all(|kind| matches!(kind, TokenKind::Error(_))));
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let mut lexer = Lexer::new("x = { 1 }");
        let kinds = lexer.tokenize();
        assert_eq!(kinds.len(), 6);
        assert_eq!(lexer.handler().error_count(), 2);
    }

    #[test]
    fn test_err_message_in_diagnostic() {
        let mut lexer = Lexer::new("\n  4e");
        lexer.tokenize();
        let diagnostics = lexer.handler().diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "incomplete float literal");
        assert_eq!(diagnostics[0].span.line, 2);
        assert_eq!(diagnostics[0].span.column, 5);
    }
}
