// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load controller settings from JSON; missing keys keep their defaults.
//!
//! Run:
//! - `cargo run -p slideout_demos --example config_from_json`

use slideout_ghostclick::GhostClickFilter;
use slideout_menu::SlideoutConfig;

fn main() -> Result<(), serde_json::Error> {
    let json = r#"{
        "enable_animation": false,
        "icon": "carat-r",
        "filter": { "radius": 40.0 }
    }"#;
    let config: SlideoutConfig = serde_json::from_str(json)?;
    println!("{config:#?}");

    let filter = GhostClickFilter::with_config(config.filter);
    println!("ghost-click radius: {}", filter.config().radius);
    println!("default: {}", serde_json::to_string_pretty(&SlideoutConfig::default())?);
    Ok(())
}
