/*!
 * Tests for checking translations against the fixture allow-list
 */

use l10n_lint::markup::checker::{check_brackets, check_empty_tag_names, is_self_closing};
use l10n_lint::{build_allow_list, check_translation, ValidationError};
use crate::common;

fn check(translation: &str) -> Result<(), ValidationError> {
    check_translation(translation, &common::expected_tag_data())
}

fn assert_malformed(translation: &str) {
    assert!(
        matches!(check(translation), Err(ValidationError::MalformedHtml { .. })),
        "expected malformed HTML for {:?}",
        translation
    );
}

/// Test a valid attribute value on a tag that expects the attribute
#[test]
fn test_check_withValidAnchorHref_shouldPass() {
    assert_eq!(check(r#"<a href="https://www.gravatar.com">this is valid</a>"#), Ok(()));
}

/// Test a valid attribute value on a span
#[test]
fn test_check_withValidSpanTabindex_shouldPass() {
    assert_eq!(check(r#"<span tabindex="1">this is also valid</span>"#), Ok(()));
}

/// Test multiple anchors with different allowed hrefs
#[test]
fn test_check_withMultipleValidAnchors_shouldPass() {
    assert_eq!(
        check(r#"<a href="/signup">Sign up</a> or <a href="/signin">Sign in</a>"#),
        Ok(())
    );
}

/// Test nested tags closed in order
#[test]
fn test_check_withNestedValidTags_shouldPass() {
    assert_eq!(check(r#"<span><a href="/signin">Signin</a></span>"#), Ok(()));
}

/// Test that void elements need no closing tag
#[test]
fn test_check_withVoidElement_shouldPass() {
    assert_eq!(check("un<br>deux<br/>trois"), Ok(()));
}

/// Test that attribute order does not matter
#[test]
fn test_check_withReorderedAttributes_shouldPass() {
    assert_eq!(check(r#"<span class="email" tabindex="1">x</span>"#), Ok(()));
    assert_eq!(check(r#"<span tabindex="1" class="email">x</span>"#), Ok(()));
}

/// Test that every triple of the allow-list is accepted in a single element
#[test]
fn test_check_withEveryAllowedTriple_shouldPass() {
    let allow_list = common::expected_tag_data();

    let wrap = |tag: &str, attribute: &str| {
        if is_self_closing(tag) {
            format!("<{tag}{attribute}>")
        } else {
            format!("<{tag}{attribute}>x</{tag}>")
        }
    };

    for tag in allow_list.tag_names() {
        let attributes = allow_list.attributes(tag).unwrap();
        if attributes.is_empty() {
            let translation = wrap(tag, "");
            assert_eq!(check_translation(&translation, &allow_list), Ok(()), "{}", translation);
        }
        for (name, values) in attributes {
            for value in values {
                let translation = wrap(tag, &format!(" {name}=\"{value}\""));
                assert_eq!(check_translation(&translation, &allow_list), Ok(()), "{}", translation);
            }
        }
    }
}

/// Test that a bare `<` in text is neither a tag nor malformed
#[test]
fn test_check_withBracketsInPlainText_shouldMatchSource() {
    let sources = ["<span>x</span>", "Age < 18 > 12", "a < b > c"];
    let allow_list = build_allow_list(sources);

    assert_eq!(allow_list.tag_names().collect::<Vec<_>>(), vec!["span"]);
    for source in sources {
        assert_eq!(check_translation(source, &allow_list), Ok(()), "{}", source);
    }
    assert_eq!(check_translation("Press < a> <span>now</span>", &allow_list), Ok(()));
}

/// Test that only void elements may be written self-closing
#[test]
fn test_check_withSelfClosingNonVoidTag_shouldBeMalformed() {
    assert_malformed("<span/>");
    assert_malformed(r#"Skip <span tabindex="1"/> ahead"#);
    assert_eq!(check("one<br/>two"), Ok(()));
}

/// Test that a repeated attribute is checked with its first value only
#[test]
fn test_check_withRepeatedAttribute_shouldUseFirstValue() {
    assert_eq!(check(r#"<a href="/signin" href="evil">x</a>"#), Ok(()));
    assert_eq!(
        check(r#"<a href="evil" href="/signin">x</a>"#),
        Err(ValidationError::UnexpectedAttributeValue {
            tag_name: "a".to_string(),
            attribute_name: "href".to_string(),
            attribute_value: "evil".to_string(),
        })
    );
}

/// Test an unexpected tag
#[test]
fn test_check_withUnexpectedTag_shouldReportTag() {
    assert_eq!(
        check("<img>No img expected</img>"),
        Err(ValidationError::UnexpectedTag {
            tag_name: "img".to_string()
        })
    );
}

/// Test an unexpected attribute on an expected tag
#[test]
fn test_check_withUnexpectedAttribute_shouldReportAttribute() {
    assert_eq!(
        check(r#"<span id="service">no id on span expected</a>"#),
        Err(ValidationError::UnexpectedAttribute {
            tag_name: "span".to_string(),
            attribute_name: "id".to_string(),
        })
    );
}

/// Test an unexpected attribute value
#[test]
fn test_check_withUnexpectedAttributeValue_shouldReportValue() {
    assert_eq!(
        check(r#"<a href="signup">href should have leading /</a>"#),
        Err(ValidationError::UnexpectedAttributeValue {
            tag_name: "a".to_string(),
            attribute_name: "href".to_string(),
            attribute_value: "signup".to_string(),
        })
    );
}

/// Test that tag names are matched case-sensitively
#[test]
fn test_check_withUppercaseTag_shouldReportTag() {
    assert!(matches!(
        check("<STRONG>x</STRONG>"),
        Err(ValidationError::UnexpectedTag { .. })
    ));
}

/// Test the malformed HTML cases
#[test]
fn test_check_withMissingClosingTag_shouldBeMalformed() {
    assert_malformed("<a>Where is the closing tag");
}

#[test]
fn test_check_withMismatchedClosingTag_shouldBeMalformed() {
    assert_malformed("<a>mismatched closing tag</span>");
}

#[test]
fn test_check_withNoOpeningTag_shouldBeMalformed() {
    assert_malformed("no opening tag</span>");
}

#[test]
fn test_check_withNoClosingBracketOnClosingTag_shouldBeMalformed() {
    assert_malformed("<a> no closing bracket on closing tag</a");
}

#[test]
fn test_check_withEmptyTagNames_shouldBeMalformed() {
    assert_malformed("<>no opening tag name</a>");
    assert_malformed("<>no opening tag name</>");
    assert_malformed("<a>no closing tag name</>");
    assert_malformed("< >blank tag name");
    assert_malformed("text <  /> text");
}

#[test]
fn test_check_withUnmatchedBrackets_shouldBeMalformed() {
    for translation in ["<", "</", ">", "/>", "a < b", "a > b", "<a <b>>"] {
        assert_malformed(translation);
    }
}

#[test]
fn test_check_withTagsClosedOutOfOrder_shouldBeMalformed() {
    assert_malformed(r#"<span><a href="/signin">Signin</span></a>"#);
}

/// Test that the malformed error carries the whole translation
#[test]
fn test_check_withMalformedHtml_shouldCarryTranslation() {
    let translation = "<strong>Achtung";
    assert_eq!(
        check(translation),
        Err(ValidationError::MalformedHtml {
            translation: translation.to_string()
        })
    );
}

/// Test the pre-checks directly
#[test]
fn test_preChecks_withBalancedInput_shouldPass() {
    assert!(check_brackets("<a>x</a> <b>y</b>").is_ok());
    assert!(check_empty_tag_names("<a>x</a>").is_ok());
    assert!(check_empty_tag_names("a </ > b").is_err());
}
