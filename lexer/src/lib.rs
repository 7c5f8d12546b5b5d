mod keywords;
mod state_machine;

use model::Token;
use state_machine::StateMachineLexer;

/// Main lexer entry point. Total over all inputs: characters outside the
/// language come back as `UNKNOWN` tokens, and the result always ends in `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = StateMachineLexer::new(source);
    lexer.tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TokenKind;

    fn tok(kind: TokenKind, lexeme: &str, line: usize, column: usize) -> Token {
        Token::new(kind, lexeme, line, column)
    }

    fn lexemes(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    #[test]
    fn lex_simple_declaration() {
        let tokens = tokenize("int x = 5;");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Keyword, "int", 1, 1),
                tok(TokenKind::Identifier, "x", 1, 5),
                tok(TokenKind::Operator, "=", 1, 7),
                tok(TokenKind::Integer, "5", 1, 9),
                tok(TokenKind::Sign, ";", 1, 10),
                Token::eof(1, 11),
            ]
        );
    }

    #[test]
    fn lex_keywords_and_identifiers() {
        let tokens = tokenize("int float double if else while _tmp x1");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_two_char_operators() {
        let tokens = tokenize("== != <= >=");
        assert_eq!(lexemes(&tokens), vec!["==", "!=", "<=", ">=", ""]);
        assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn lex_only_listed_pairs_combine() {
        // "=!" and "+=" are not two-character operators
        let tokens = tokenize("=! +=");
        assert_eq!(lexemes(&tokens), vec!["=", "!", "+", "=", ""]);
    }

    #[test]
    fn lex_equal_equal_equal() {
        let tokens = tokenize("===");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Operator, "==", 1, 1),
                tok(TokenKind::Operator, "=", 1, 3),
                Token::eof(1, 4),
            ]
        );
    }

    #[test]
    fn lex_lone_bang() {
        let tokens = tokenize("!x");
        assert_eq!(tokens[0], tok(TokenKind::Operator, "!", 1, 1));
        assert_eq!(tokens[1], tok(TokenKind::Identifier, "x", 1, 2));
    }

    #[test]
    fn lex_all_single_operators() {
        let tokens = tokenize("+ - * / % = < > !");
        assert_eq!(tokens.len(), 10);
        assert!(tokens[..9].iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn lex_signs() {
        let tokens = tokenize(";(){}");
        assert_eq!(lexemes(&tokens), vec![";", "(", ")", "{", "}", ""]);
        assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Sign));
    }

    #[test]
    fn lex_unknown_characters_one_at_a_time() {
        let tokens = tokenize("a @# b");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "a", 1, 1),
                tok(TokenKind::Unknown, "@", 1, 3),
                tok(TokenKind::Unknown, "#", 1, 4),
                tok(TokenKind::Identifier, "b", 1, 6),
                Token::eof(1, 7),
            ]
        );
    }

    #[test]
    fn lex_maximal_munch() {
        let tokens = tokenize("abc123 456def");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "abc123", 1, 1),
                tok(TokenKind::Integer, "456", 1, 8),
                tok(TokenKind::Identifier, "def", 1, 11),
                Token::eof(1, 14),
            ]
        );
    }

    #[test]
    fn lex_adjacent_tokens_no_space() {
        let tokens = tokenize("(x+1)");
        assert_eq!(lexemes(&tokens), vec!["(", "x", "+", "1", ")", ""]);
    }

    // ─── Edge case tests ────────────────────────────────────────
    #[test]
    fn lex_empty_input() {
        assert_eq!(tokenize(""), vec![Token::eof(1, 1)]);
    }

    #[test]
    fn lex_whitespace_only() {
        let tokens = tokenize("  \t\n  ");
        assert_eq!(tokens, vec![Token::eof(2, 3)]);
    }

    #[test]
    fn lex_carriage_return_is_whitespace() {
        let tokens = tokenize("x\r\ny");
        assert_eq!(tokens[1], tok(TokenKind::Identifier, "y", 2, 1));
    }

    #[test]
    fn lex_newline_resets_column() {
        let tokens = tokenize("a = 1;\nb = 2;\n\nif");
        let first_on_line: Vec<(usize, usize)> = tokens
            .iter()
            .filter(|t| t.lexeme == "b" || t.lexeme == "if" || t.lexeme == "a")
            .map(|t| (t.line, t.column))
            .collect();
        assert_eq!(first_on_line, vec![(1, 1), (2, 1), (4, 1)]);
        assert_eq!(tokens.last(), Some(&Token::eof(4, 3)));
    }

    #[test]
    fn lex_positions_never_decrease() {
        let tokens = tokenize("int a = 1;\n if (a > 0)\n\ta = a * 2 ;");
        for pair in tokens.windows(2) {
            assert!((pair[0].line, pair[0].column) <= (pair[1].line, pair[1].column));
        }
    }

    #[test]
    fn lex_always_ends_with_single_eof() {
        for src in ["", "x", "@@@", "int x = 5 ;", "\n\n", "1.5 == 2"] {
            let tokens = tokenize(src);
            assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
            assert!(tokens[..tokens.len() - 1].iter().all(|t| !t.lexeme.is_empty()));
        }
    }

    #[test]
    fn lex_lexemes_reconstruct_source() {
        let src = "int  total=a1*(b-3)>=c;\n if(x!=y)z=$ ;";
        let joined: String = tokenize(src).iter().map(|t| t.lexeme.as_str()).collect();
        let expected: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, expected);
    }
}
