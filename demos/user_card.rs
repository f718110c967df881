//! User card built with components and BEMX classes.
//!
//! Run with `cargo run --example user_card`; set `RUST_LOG=trace` to see
//! what the builders do.

use simple_component::prelude::*;
use tracing_subscriber::EnvFilter;

fn user_card(user_name: &str, photo: &str, status: &str) -> Result<Component, Box<dyn std::error::Error>> {
	let mut name_label = Component::new("label")?;
	name_label
		.add_content(user_name)
		.add_class(&BemxHelper::generate("label", Some("user-card"), NO_MODIFIERS, ["name"])?)?;

	let mut photo_img = Component::void("img")?;
	photo_img
		.add_class(&Bemx::block("img").parent("user-card").build()?)?
		.set_attribute("src", photo)?
		.set_attribute("alt", "user image")?;

	let mut status_label = Component::new("label")?;
	status_label
		.add_content(status)
		.add_class(&BemxHelper::generate("label", Some("user-card"), NO_MODIFIERS, ["status"])?)?;

	let mut card = Component::new("div")?;
	card.add_class("user-card")?.add_contents([
		name_label.render(),
		photo_img.render(),
		status_label.render(),
	]);

	Ok(card)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let card = user_card("Akido", "/icon.jpeg", "Online")?;
	println!("{card}");
	Ok(())
}
