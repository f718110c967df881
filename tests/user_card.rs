//! End-to-end tests through the facade crate
//!
//! Builds the user card fragment from components and BEMX classes and checks
//! the full HTML output.

use rstest::*;
use simple_component::prelude::*;

#[fixture]
fn name_label() -> Component {
	let classes = BemxHelper::generate("label", Some("user-card"), NO_MODIFIERS, ["name"]).unwrap();
	let mut label = Component::new("label").unwrap();
	label.add_content("Akido").add_class(&classes).unwrap();
	label
}

#[rstest]
fn test_label_with_bemx_classes(name_label: Component) {
	assert_eq!(
		name_label.render(),
		"<label class=\"label user-card__label user-card__label--name\">\nAkido\n</label>"
	);
}

#[rstest]
fn test_bem_output_feeds_class_helpers() {
	// Arrange
	let classes = BemHelper::generate("btn", Some("label"), ["primary", "large"]).unwrap();
	let mut button = Component::new("button").unwrap();

	// Act
	button.add_class(&classes).unwrap();
	button.remove_class("btn__label--large");

	// Assert
	assert!(button.has_class("btn__label"));
	assert!(button.has_class("btn__label--primary"));
	assert!(!button.has_class("btn__label--large"));
	assert_eq!(button.class(), Some("btn__label btn__label--primary"));
}

#[rstest]
fn test_user_card(name_label: Component) {
	// Arrange
	let mut photo = Component::void("img").unwrap();
	photo
		.add_class(&Bemx::block("img").parent("user-card").build().unwrap())
		.unwrap()
		.set_attribute("src", "/icon.jpeg")
		.unwrap()
		.set_attribute("alt", "user image")
		.unwrap();

	// Act
	let mut card = Component::new("div").unwrap();
	card.add_class("user-card")
		.unwrap()
		.add_contents([name_label.render(), photo.render()]);

	// Assert
	let html = card.render();
	assert!(html.starts_with("<div class=\"user-card\">\n&lt;label"));
	assert!(html.ends_with("\n</div>"));
	assert!(html.contains("img user-card__img"));
	assert_eq!(html.lines().count(), 6);
}

#[rstest]
fn test_errors_are_distinguishable() {
	let bem: Box<dyn std::error::Error> = Bem::block("").build().unwrap_err().into();
	let bemx: Box<dyn std::error::Error> = Bemx::block("").build().unwrap_err().into();
	let component: Box<dyn std::error::Error> = Component::new("").unwrap_err().into();

	assert_eq!(bem.to_string(), "[BEM] Invalid block name: cannot be empty.");
	assert_eq!(
		bemx.to_string(),
		"[BEMX] [BEM] Invalid block name: cannot be empty."
	);
	assert_eq!(component.to_string(), "The tag of this component is empty");
}
