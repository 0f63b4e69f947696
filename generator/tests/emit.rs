use icon_enum_generator::EnumGenerator;
use icon_enum_types::{EnumerationDocument, IconRule};

#[test]
fn empty_document() {
    let doc = EnumerationDocument::with_default_name(vec![]);
    assert_eq!(EnumGenerator::new(&doc).out(), "enum class custom_icons {\n}\n");
}

#[test]
fn single_entry() {
    let doc = EnumerationDocument::with_default_name(vec![IconRule::new("arrow-left", "e905")]);
    assert_eq!(
        EnumGenerator::new(&doc).out(),
        "enum class custom_icons {\n\tarrow-left = 0xe905, \n}\n"
    );
}

#[test]
fn entries_in_document_order() {
    let rules = vec![
        IconRule::new("star", "e902"),
        IconRule::new("home", "e901"),
        IconRule::new("cog", "e9a0"),
    ];
    let doc = EnumerationDocument::with_default_name(rules);
    let out = EnumGenerator::new(&doc).out();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "enum class custom_icons {",
            "\tstar = 0xe902, ",
            "\thome = 0xe901, ",
            "\tcog = 0xe9a0, ",
            "}",
        ]
    );
}

#[test]
fn one_line_per_rule() {
    let rules: Vec<_> = (0..50)
        .map(|i| IconRule::new(format!("icon{i}"), format!("e{i:03x}")))
        .collect();
    let doc = EnumerationDocument::with_default_name(rules);
    let out = EnumGenerator::new(&doc).out();
    assert_eq!(out.lines().filter(|l| l.starts_with('\t')).count(), 50);
    assert!(out.contains("\ticon10 = 0xe00a, \n"));
}

#[test]
fn custom_name() {
    let doc = EnumerationDocument::new("app_icons", vec![IconRule::new("home", "e901")]);
    assert_eq!(
        EnumGenerator::new(&doc).out(),
        "enum class app_icons {\n\thome = 0xe901, \n}\n"
    );
}
