/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Redirect command handed back to the navigation pipeline.

use serde::{Deserialize, Serialize};

/// A fully resolved redirect target. Planning never dispatches the redirect
/// itself; the pipeline that invoked it does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub url: String,
    #[serde(default)]
    pub options: RedirectOptions,
}

impl Redirect {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: RedirectOptions::default(),
        }
    }

    pub fn with_options(url: impl Into<String>, options: RedirectOptions) -> Self {
        Self {
            url: url.into(),
            options,
        }
    }
}

/// Options the dispatching pipeline honors when it performs the redirect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectOptions {
    pub trigger: bool,
    pub replace: bool,
}

impl Default for RedirectOptions {
    fn default() -> Self {
        Self {
            trigger: true,
            replace: true,
        }
    }
}
