use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_tag_table_is_dense() {
    for (i, tag) in TokenTag::ALL.iter().enumerate() {
        assert_eq!(tag.index() as usize, i, "{tag:?} out of place");
        assert_eq!(TokenTag::from_index(tag.index()), Some(*tag));
    }
    assert_eq!(TokenTag::from_index(TokenTag::COUNT), None);
    assert!(TokenTag::COUNT <= 128);
}

#[test]
fn test_tag_ignores_payload() {
    assert_eq!(TokenKind::Int(1).tag(), TokenKind::Int(99).tag());
    assert_eq!(
        TokenKind::VersionDirective { major: 1, minor: 2 }.tag(),
        TokenTag::VersionDirective
    );
}

#[test]
fn test_keyword_range() {
    assert!(TokenKind::Def.is_keyword());
    assert!(TokenKind::Or.is_keyword());
    assert!(!TokenKind::Plus.is_keyword());
    assert!(!TokenKind::Ident(Name::EMPTY).is_keyword());
}

#[test]
fn test_descriptions() {
    assert_eq!(TokenTag::End.description(), "`end`");
    assert_eq!(TokenTag::LParen.description(), "`(`");
    assert_eq!(TokenTag::Ident.description(), "identifier");
    assert_eq!(TokenTag::Eof.description(), "end of input");
}

#[test]
fn test_token_list() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::Def, Span::new(0, 3)));
    list.push(Token::new(TokenKind::Eof, Span::point(3)));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].tag(), TokenTag::Def);
    assert_eq!(list.kinds(), vec![TokenKind::Def, TokenKind::Eof]);
}
