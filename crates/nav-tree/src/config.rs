/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Route and viewport configuration records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::plan::ActivationStrategy;

/// Configuration for one route, as produced by the surrounding route matcher.
///
/// Every field is optional on the wire; a route that only fills `route` and
/// `module_id` is the common case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// The route pattern this configuration was matched from. A trailing
    /// `*name` segment marks the catch-all handed down to child routers.
    pub route: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub module_id: Option<String>,
    /// When set, navigation to this route resolves the target against the
    /// accumulated base URL and aborts planning with a redirect.
    pub redirect: Option<String>,
    pub viewports: HashMap<String, ViewportConfig>,
    /// Declared override for the activation strategy, consulted after the
    /// component's own override but before parameter comparison.
    pub activation_strategy: Option<ActivationStrategy>,
    pub has_child_router: bool,
}

impl RouteConfig {
    /// Name of the catch-all segment, taken from the trailing `*name` of the
    /// route pattern. None when the pattern has no catch-all.
    pub fn wildcard_name(&self) -> Option<&str> {
        let idx = self.route.rfind('*')?;
        Some(&self.route[idx + 1..])
    }
}

/// Per-viewport slice of a route configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub module_id: Option<String>,
}
