//! YAML/JSON army-list documents.
//!
//! Example:
//! ```yaml
//! name: "Ogre vanguard"
//! config: { strict: true }
//! units:
//!   - { name: "Warriors", type: large_infantry, size: horde }
//!   - { name: "Spearmen", type: infantry, size: regiment, count: 2 }
//!   - { name: "Army Standard Bearer", type: hero }
//!   - { type: titan }
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::list::ArmyList;

pub fn parse_yaml_army(yaml_src: &str) -> Result<ArmyList> {
    let army: ArmyList = serde_yaml::from_str(yaml_src)?;
    army.validate()?;
    Ok(army)
}

pub fn parse_json_army(json_src: &str) -> Result<ArmyList> {
    let army: ArmyList = serde_json::from_str(json_src)?;
    army.validate()?;
    Ok(army)
}

/// Load an army list from disk; `.json` files are JSON, anything else YAML.
pub fn load_army(path: &Path) -> Result<ArmyList> {
    let src = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), is_json, "loading army list");

    if is_json {
        parse_json_army(&src)
    } else {
        parse_yaml_army(&src)
    }
}
