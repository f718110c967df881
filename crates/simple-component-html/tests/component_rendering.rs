//! Component rendering integration tests
//!
//! Builds components through the public API only and checks the exact HTML
//! produced.

use rstest::*;
use simple_component_html::{Component, ComponentError, ComponentSettings};

#[fixture]
fn user_photo() -> Component {
	let mut img = Component::void("img").expect("valid tag");
	img.add_class("user-card__img")
		.unwrap()
		.set_attribute("src", "/icon.jpeg")
		.unwrap()
		.set_attribute("alt", "user image")
		.unwrap();
	img
}

#[rstest]
fn test_void_element_renders_opening_tag_only(user_photo: Component) {
	assert_eq!(
		user_photo.render(),
		r#"<img class="user-card__img" src="/icon.jpeg" alt="user image">"#
	);
}

#[rstest]
fn test_nested_markup_is_escaped_as_content(user_photo: Component) {
	// Arrange
	let mut card = Component::new("div").unwrap();
	card.add_class("user-card").unwrap();

	// Act
	card.add_content(&user_photo.render());

	// Assert
	let html = card.render();
	assert_eq!(
		html,
		"<div class=\"user-card\">\n&lt;img class=&quot;user-card__img&quot; src=&quot;/icon.jpeg&quot; alt=&quot;user image&quot;&gt;\n</div>"
	);
	assert!(!html.contains("<img"));
}

#[rstest]
#[case("div")]
#[case("span")]
#[case("my-element")]
fn test_empty_closed_component(#[case] tag: &str) {
	let component = Component::new(tag).unwrap();
	assert_eq!(component.render(), format!("<{tag}></{tag}>"));
}

#[rstest]
fn test_xss_payload_never_reaches_output_raw() {
	let mut component = Component::new("p").unwrap();
	component
		.add_attribute("title", "\"><script>alert(1)</script>")
		.unwrap()
		.add_content("<script>alert(\"XSS\")</script>");

	let html = component.render();
	assert!(!html.contains("<script>"));
	assert!(html.contains("&lt;script&gt;alert(&quot;XSS&quot;)&lt;/script&gt;"));
	assert!(html.starts_with(r#"<p title="&quot;&gt;&lt;script&gt;"#));
}

#[rstest]
fn test_failed_mutations_leave_component_unchanged() {
	// Arrange
	let mut component = Component::new("section").unwrap();
	component
		.add_attribute("id", "main")
		.unwrap()
		.add_content("body");
	let before = component.clone();

	// Act
	let results = [
		component.set_tag("  ").map(|_| ()),
		component.add_attribute(" ", "x").map(|_| ()),
		component.add_attributes([("ok", "1"), ("", "2")]).map(|_| ()),
		component.set_attributes([("", "2")]).map(|_| ()),
		component.set_data("", "x").map(|_| ()),
		component.set_aria("label", " ").map(|_| ()),
		component.add_class("").map(|_| ()),
	];

	// Assert
	assert!(results.iter().all(Result::is_err));
	assert_eq!(component, before);
}

#[rstest]
fn test_error_kinds_are_specific() {
	let mut component = Component::default();

	assert!(matches!(
		component.set_tag(""),
		Err(ComponentError::InvalidTag(_))
	));
	assert!(matches!(
		component.add_attribute("", "v"),
		Err(ComponentError::InvalidAttributeKey(_))
	));
	assert!(matches!(
		component.set_attributes([("", "v")]),
		Err(ComponentError::InvalidAttributeSet(_))
	));
	assert!(matches!(
		component.set_data("n", ""),
		Err(ComponentError::InvalidData(_))
	));
	assert!(matches!(
		component.set_aria("", "v"),
		Err(ComponentError::InvalidAria(_))
	));
}

#[rstest]
fn test_settings_driven_component() {
	let settings = ComponentSettings::default()
		.default_tag("  li ")
		.line_separator("");
	let mut item = Component::with_settings(&settings).unwrap();
	item.add_contents(["a", "b"]);

	assert_eq!(item.tag(), "li");
	assert_eq!(item.render(), "<li>ab</li>");
}

#[rstest]
fn test_settings_with_blank_tag_are_rejected() {
	let settings = ComponentSettings::default().default_tag(" ");
	assert!(matches!(
		Component::with_settings(&settings),
		Err(ComponentError::InvalidTag(_))
	));
}
