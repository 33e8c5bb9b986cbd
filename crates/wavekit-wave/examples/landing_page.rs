//! Renders a landing page built from reusable components.
//!
//! Run with builder tracing enabled:
//!
//! ```text
//! RUST_LOG=wavekit_wave=trace cargo run -p wavekit-wave --example landing_page
//! ```

use std::io;

use tracing_subscriber::EnvFilter;
use wavekit_wave::{Element, attrs, scope, wave};

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

fn logo() -> Element {
	wave().li(scope(|li| {
		li.a((
			attrs! { "href" => "/", "style" => "font-weight: semibold;" },
			"WaveKit",
		))
	}))
}

fn nav_item(href: &str, label: &str) -> Element {
	wave().li(scope(|li| {
		li.a((
			attrs! { "href" => href, "target" => "_blank", "rel" => "noopener noreferrer" },
			label,
		))
	}))
}

fn navbar() -> Element {
	wave().nav(scope(|nav| {
		nav.ul(logo())
			.ul(nav_item("https://github.com/getgrinta/wavekit", "GitHub"));
	}))
}

fn footer(year: u16) -> Element {
	wave().footer((
		attrs! { "style" => "margin-top:6rem;" },
		format!(
			r#"Copyright © {year} WaveKit by <a href="https://getgrinta.com" target="_blank" rel="noopener noreferrer">Grinta</a>. All rights reserved."#
		),
	))
}

/// Wraps `slot` in the document shell shared by every page.
fn layout(base: &str, slot: Element) -> Element {
	wave().html((
		attrs! { "lang" => "en" },
		scope(move |html| {
			html.head(scope(|head| {
				head.meta(attrs! { "charset" => "UTF-8" })
					.meta(attrs! {
						"name" => "viewport",
						"content" => "width=device-width, initial-scale=1.0",
					})
					.title("Wavekit - The salty hair of the web")
					.link(attrs! { "rel" => "stylesheet", "href" => STYLESHEET })
					.link(attrs! {
						"rel" => "icon",
						"type" => "image/svg+xml",
						"href" => format!("{base}/favicon.svg"),
					});
			}))
			.body(scope(move |body| {
				body.main((
					attrs! { "class" => "container" },
					vec![navbar(), slot, footer(2025)],
				));
			}));
		}),
	))
}

fn hero() -> Element {
	let features = ["Nested callbacks", "Sibling chaining", "Zero runtime"];

	wave().section(scope(|section| {
		section
			.h1("The salty hair of the web")
			.p("Build static sites with plain Rust functions.")
			.ul(scope(|ul| {
				for feature in features {
					ul.li(feature);
				}
			}))
			.a((attrs! { "href" => "/docs", "role" => "button" }, "Get started"));
	}))
}

fn main() -> wavekit_wave::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let page = layout("", hero());
	tracing::info!(bytes = page.render().len(), "rendered landing page");

	let mut stdout = io::stdout().lock();
	page.write_to(&mut stdout)?;
	Ok(())
}
