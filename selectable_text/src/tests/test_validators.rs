// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::palette::css;

use crate::validator::{self, Composite, Container, Literal, Validator};
use crate::{Error, Style, StyleProperty, ValidatorRegistry};

fn assert_passes(validator: &Validator, texts: &[&str]) {
    for text in texts {
        assert!(
            validator.matches(text),
            "{} should match {text:?}",
            validator.identity()
        );
    }
}

fn assert_fails(validator: &Validator, texts: &[&str]) {
    for text in texts {
        assert!(
            !validator.matches(text),
            "{} should not match {text:?}",
            validator.identity()
        );
    }
}

#[test]
fn matches() {
    let insensitive = Validator::exact("test");
    assert_passes(&insensitive, &["test", "Test", "TEST"]);
    assert_fails(&insensitive, &["testing", "tes", ""]);

    let sensitive = Validator::exact(Literal::case_sensitive("test"));
    assert_passes(&sensitive, &["test"]);
    assert_fails(&sensitive, &["Test", "TEST"]);
}

#[test]
fn contains() {
    assert_passes(&Validator::contains("es"), &["test", "TEST", "es"]);
    assert_fails(&Validator::contains("es"), &["tset", "e s"]);
    assert_fails(
        &Validator::contains(Literal::case_sensitive("es")),
        &["TEST"],
    );
}

#[test]
fn prefix_and_suffix() {
    assert_passes(&Validator::prefix("te"), &["test", "Test"]);
    assert_fails(&Validator::prefix("te"), &["atest"]);
    assert_fails(&Validator::prefix(Literal::case_sensitive("te")), &["Test"]);

    assert_passes(&Validator::suffix("st"), &["test", "TEST"]);
    assert_fails(&Validator::suffix("st"), &["testa"]);
    assert_fails(&Validator::suffix(Literal::case_sensitive("st")), &["TEST"]);
}

#[test]
fn regex_ignores_case_by_default() {
    let validator = Validator::regex("^ab+c$");
    assert_passes(&validator, &["abc", "ABBC"]);
    assert_fails(&validator, &["ac", "abcd"]);
}

#[test]
fn try_regex_reports_invalid_pattern() {
    let err = Validator::try_regex("(unclosed").unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
}

#[test]
#[should_panic(expected = "invalid regex pattern")]
fn regex_panics_on_invalid_pattern() {
    let _ = Validator::regex("[");
}

#[test]
fn hashtag() {
    let validator = validator::hashtag();
    assert_passes(&validator, &["#Test", "#test", "#attest", "#"]);
    assert_fails(&validator, &["a#ttesting", "omgTesting#", "testing"]);
}

#[test]
fn at_symbol_tag() {
    let validator = validator::at_symbol_tag();
    assert_passes(&validator, &["@friends", "@"]);
    assert_fails(&validator, &["friends@", "#friends"]);
}

#[test]
fn quotations() {
    let validator = validator::quotations();
    assert_passes(&validator, &["\"Test\""]);
    assert_fails(
        &validator,
        &["a\"ttesting\"", "\"omgTesting@", "testing\"", "testing"],
    );
}

#[test]
fn handlebars() {
    let validator = validator::handlebars("test", "Test");
    assert_passes(&validator, &["{{test}}"]);
    assert_fails(
        &validator,
        &["{test}", "{{test}", "test", "{{testing}}", "{{Test}}"],
    );
    assert_eq!(validator.replacement_text(), Some("Test"));
}

#[test]
fn links() {
    let link = validator::link();
    assert_passes(
        &link,
        &["http://link", "https://link", "file://~/link", "yfansports://link"],
    );
    assert_fails(&link, &["http:/link", "https:link", "file///link"]);
    assert!(link.selection_style().is_some_and(Style::underline));

    let http = validator::http_link();
    assert_passes(&http, &["http://link", "https://link"]);
    assert_fails(&http, &["file://link", "http:/link"]);

    let https = validator::https_link();
    assert_passes(&https, &["https://link"]);
    assert_fails(&https, &["http://link"]);

    let unsafe_link = validator::unsafe_link();
    assert_passes(&unsafe_link, &["http://link"]);
    assert_fails(&unsafe_link, &["https://link"]);
    let style = unsafe_link.selection_style().unwrap();
    assert_eq!(style.foreground(), Some(css::RED));
    assert!(!style.underline());
}

#[test]
fn custom_link() {
    let validator = validator::custom_link("https://example.com", Some("example"));
    assert_passes(&validator, &["https://example.com", "HTTPS://EXAMPLE.COM"]);
    assert_fails(&validator, &["https://example.com/page"]);
    assert_eq!(validator.replacement_text(), Some("example"));

    let plain = validator::custom_link("https://example.com", None);
    assert_eq!(plain.replacement_text(), None);
    assert_eq!(plain, validator, "replacement text is not part of identity");
}

#[test]
fn email() {
    let validator = validator::email();
    assert_passes(
        &validator,
        &["jhurray@umich.edu", "bob@hotmail.eu", "hello@yahoo.com"],
    );
    assert_fails(&validator, &["@bobyahoo.com", "hello@yahoo", "jhurray@umichcom"]);
}

#[test]
fn phone_number() {
    let validator = validator::phone_number();
    assert_passes(
        &validator,
        &["1234567890", "(123)-456-7890", "123-456-7890"],
    );
    assert_fails(&validator, &["123456789", "(12)3-456-7890", "23-456-7890"]);
}

#[test]
fn hashtag_identity_and_match() {
    let validator = Validator::prefix("#");
    assert_eq!(validator.identity(), "Prefix.begins_with.#");
    assert!(validator.matches("#Stars"));
}

#[test]
fn handlebars_placeholder() {
    let validator = validator::handlebars("my_name", "Jeff");
    assert!(validator.matches("{{my_name}}"));
    assert!(!validator.matches("{{other}}"));
}

#[test]
fn identities() {
    assert_eq!(Validator::exact("x").identity(), "Matches.matches.x");
    assert_eq!(Validator::contains("://").identity(), "Contains.contains.://");
    assert_eq!(Validator::suffix("}}").identity(), "Suffix.ends_with.}}");
    assert_eq!(Validator::regex("a+").identity(), "Regex.regex_matches.a+");
    assert_eq!(
        Validator::prefix(Literal::case_sensitive("#")).identity(),
        "Prefix.begins_with_case_sensitive.#"
    );
    assert_eq!(
        Validator::container(Validator::prefix("#")).identity(),
        "Container.Prefix.begins_with.#"
    );
    assert_eq!(
        Validator::composite([Validator::prefix("{{"), Validator::suffix("}}")]).identity(),
        "Composite.Prefix.begins_with.{{.Suffix.ends_with.}}"
    );
    assert_eq!(
        Validator::reverse(Validator::prefix("#")).identity(),
        "Reverse.Prefix.begins_with.#"
    );
    assert_eq!(validator::hashtag().identity(), "Hashtag.Prefix.begins_with.#");
}

#[test]
fn identity_ignores_appearance() {
    let plain = Container::new(Validator::prefix("#"));
    let styled = Container::new(Validator::prefix("#"))
        .with_style(Style::from(StyleProperty::Underline(true)))
        .with_replacement_text("tag");
    assert_eq!(Validator::from(plain), Validator::from(styled));
}

#[test]
fn case_sensitivity_changes_identity() {
    assert_ne!(
        Validator::prefix("a"),
        Validator::prefix(Literal::case_sensitive("a"))
    );
}

#[test]
fn separators_inside_literals_are_escaped() {
    let two = Validator::composite([Validator::prefix("a"), Validator::prefix("b")]);
    let one = Validator::composite([Validator::prefix("a.Prefix.begins_with.b")]);
    assert_eq!(two.identity(), "Composite.Prefix.begins_with.a.Prefix.begins_with.b");
    assert_eq!(
        one.identity(),
        r"Composite.Prefix.begins_with.a\.Prefix\.begins_with\.b"
    );
    assert_ne!(two, one);

    let mut registry = ValidatorRegistry::new();
    registry.register_silent(two).unwrap();
    registry.register_silent(one).unwrap();
    assert_eq!(registry.len(), 2);

    assert_eq!(Validator::exact(r"a\b").identity(), r"Matches.matches.a\\b");
    let named: Validator = Container::new(Validator::exact("x")).named("my.name").into();
    assert_eq!(named.identity(), r"my\.name.Matches.matches.x");
}

#[test]
fn container_falls_back_to_inner_appearance() {
    let wrapped = Validator::container(validator::link());
    assert!(wrapped.selection_style().is_some_and(Style::underline));

    let overridden: Validator = Container::new(validator::link())
        .with_style(Style::from(StyleProperty::Italic(true)))
        .into();
    let style = overridden.selection_style().unwrap();
    assert!(!style.underline());

    let handlebars = Validator::container(validator::handlebars("a", "b"));
    assert_eq!(handlebars.replacement_text(), Some("b"));
}

#[test]
fn composite_and_reverse_appearance() {
    let composite: Validator = Composite::new([validator::link()]).into();
    assert!(composite.selection_style().is_none());

    let reversed = Validator::reverse(validator::link());
    assert!(reversed.selection_style().is_none());
    assert!(reversed.replacement_text().is_none());
    assert!(reversed.matches("plain"));
    assert!(!reversed.matches("http://link"));
}

#[test]
fn empty_composite_matches_everything() {
    let validator = Validator::composite([]);
    assert!(validator.matches(""));
    assert!(validator.matches("anything"));
    assert_eq!(validator.identity(), "Composite");
}

#[test]
fn required_prefix() {
    assert_eq!(Validator::prefix("#").required_prefix(), Some("#"));
    assert_eq!(validator::hashtag().required_prefix(), Some("#"));
    assert_eq!(validator::http_link().required_prefix(), Some("http"));
    assert_eq!(
        validator::handlebars("a", "b").required_prefix(),
        Some("{{")
    );
    assert_eq!(validator::link().required_prefix(), None);
    assert_eq!(
        Validator::reverse(Validator::prefix("#")).required_prefix(),
        None
    );
}
