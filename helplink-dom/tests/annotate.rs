#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use helplink_dom::prelude::*;
use helplink::SkipReason;

use env::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn form_group() {
    init();
    let elem = create_element(
        "div",
        Some("form-group"),
        r#"<label>Callback</label><span class="help-block">Visit http://example.com/page for details</span>"#,
    );
    let ret = annotate_element(&elem).unwrap();
    assert_eq!(ret, Annotation::Linkified { links: 1 });
    assert_eq!(
        help_html(&elem),
        r#"Visit <a href="http://example.com/page" target="_blank">here</a> for details"#,
    );
    let anchor = elem.query_selector(".help-block a").unwrap().unwrap();
    assert_eq!(anchor.get_attribute("target").unwrap(), "_blank");
    assert_eq!(anchor.text_content().unwrap(), "here");
}

#[wasm_bindgen_test]
fn other_class() {
    init();
    let elem = create_element(
        "div",
        Some("other"),
        r#"<span class="help-block">Visit http://example.com/page</span>"#,
    );
    assert_eq!(
        annotate_element(&elem).unwrap(),
        Annotation::Skipped(SkipReason::PrefixMismatch),
    );
    assert_eq!(help_html(&elem), "Visit http://example.com/page");
}

#[wasm_bindgen_test]
fn no_url() {
    init();
    let elem = create_element(
        "div",
        Some("form-group"),
        r#"<span class="help-block">Paste the <b>client secret</b> here.</span>"#,
    );
    assert_eq!(annotate_element(&elem).unwrap(), Annotation::Unchanged);
    assert_eq!(help_html(&elem), "Paste the <b>client secret</b> here.");
}

#[wasm_bindgen_test]
fn mixed_case_url() {
    init();
    let elem = create_element(
        "div",
        Some("form-group"),
        r#"<span class="help-block">HTTPS://EXAMPLE.COM/X</span>"#,
    );
    annotate_element(&elem).unwrap();
    assert_eq!(
        help_html(&elem),
        r#"<a href="HTTPS://EXAMPLE.COM/X" target="_blank">here</a>"#,
    );
}

#[wasm_bindgen_test]
fn escaped_query_string() {
    init();
    let elem = create_element("div", Some("form-group"), "");
    let help = create_element("span", Some("help-block"), "");
    help.set_text_content(Some("http://a.com/?x=1&y=2"));
    elem.append_child(&help).unwrap();
    annotate_element(&elem).unwrap();
    let anchor = help.query_selector("a").unwrap().unwrap();
    assert_eq!(anchor.get_attribute("href").unwrap(), "http://a.com/?x=1&y=2");
}

#[wasm_bindgen_test]
fn svg_element() {
    init();
    let svg = document()
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_attribute("class", "form-icon").unwrap();
    assert_eq!(
        annotate_element(&svg).unwrap(),
        Annotation::Skipped(SkipReason::NoHelpBlock),
    );
}

#[wasm_bindgen_test]
fn custom_help_class() {
    init();
    let annotator = Annotator::new(Config::default().with_help_class("hint:text")).unwrap();
    let elem = create_element(
        "div",
        Some("form-row"),
        r#"<small class="hint:text">http://a.com</small>"#,
    );
    assert!(annotate_element_with(&annotator, &elem).unwrap().is_linkified());
    assert_eq!(
        elem.first_element_child().unwrap().inner_html(),
        r#"<a href="http://a.com" target="_blank">here</a>"#,
    );
}
